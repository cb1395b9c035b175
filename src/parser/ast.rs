//! # Abstract Syntax Tree
//!
//! A sum type with one variant per node kind, each carrying only the fields
//! it uses, rather than one tagged struct with fields that sit unused
//! depending on the variant.
//!
//! `Node` owns its children directly (`Box<Node>`); the AST is a tree, never
//! a DAG.

/// One expression or statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Num(i64),
    /// A local variable reference; `offset` is a positive multiple of 8
    /// bytes from the frame base, assigned in first-occurrence order.
    LVar { offset: i64 },

    Add(Box<Node>, Box<Node>),
    Sub(Box<Node>, Box<Node>),
    Mul(Box<Node>, Box<Node>),
    Div(Box<Node>, Box<Node>),
    Eq(Box<Node>, Box<Node>),
    Ne(Box<Node>, Box<Node>),
    Lt(Box<Node>, Box<Node>),
    Le(Box<Node>, Box<Node>),

    /// The left child always resolves to `LVar` (enforced at parse time).
    Assign {
        lvalue: Box<Node>,
        rvalue: Box<Node>,
    },

    Return(Box<Node>),

    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },

    While {
        cond: Box<Node>,
        body: Box<Node>,
    },

    For {
        init: Option<Box<Node>>,
        cond: Option<Box<Node>>,
        inc: Option<Box<Node>>,
        body: Box<Node>,
    },

    Block(Vec<Node>),

    Call {
        name: String,
        args: Vec<Node>,
    },
}
