//! # Code generator
//!
//! Walks the statement forest and emits a textual x86-64 assembly program
//! (Intel syntax) implementing a stack-machine evaluation model: every
//! expression, once generated, leaves exactly one 64-bit value on top of
//! the runtime stack.
//!
//! Binary operators pop the right operand into `rdi`, the left into `rax`,
//! operate, and push `rax`. Comparisons materialize their flag into the low
//! byte of `rax` via `sete`/`setne`/`setl`/`setle`, then zero-extend.


use crate::parser::ast::Node;
use crate::parser::ParseResult;

/// Fixed stack reservation for local variables: 26 slots of 8 bytes, enough
/// for single-letter-identifier programs. Preserved as a fixed cap rather
/// than sized from the actual local count, matching the original tool's
/// behavior for programs within that limit.
const STACK_RESERVATION: usize = 208;

const ARG_REGISTERS: [&str; 6] = ["rdi", "rsi", "rdx", "rcx", "r8", "r9"];

/// Generate the complete assembly program for one compilation.
pub fn generate(result: &ParseResult) -> String {
    let mut gen = Codegen::new();
    gen.header();
    gen.prologue();
    for stmt in &result.statements {
        gen.gen_stmt(stmt);
        gen.emit("pop rax");
    }
    gen.epilogue();
    log::debug!(
        "codegen emitted {} lines for {} top-level statements",
        gen.lines.len(),
        result.statements.len()
    );
    gen.lines.join("\n") + "\n"
}

struct Codegen {
    lines: Vec<String>,
    label_count: usize,
}

impl Codegen {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            label_count: 0,
        }
    }

    fn emit(&mut self, instr: impl Into<String>) {
        self.lines.push(format!("    {}", instr.into()));
    }

    fn label(&mut self, name: impl Into<String>) {
        self.lines.push(format!("{}:", name.into()));
    }

    fn fresh_label_id(&mut self) -> usize {
        let id = self.label_count;
        self.label_count += 1;
        id
    }

    fn header(&mut self) {
        self.lines.push(".intel_syntax noprefix".to_string());
        self.lines.push(".global main".to_string());
        self.label("main");
    }

    fn prologue(&mut self) {
        self.emit("push rbp");
        self.emit("mov rbp, rsp");
        self.emit(format!("sub rsp, {STACK_RESERVATION}"));
    }

    fn epilogue(&mut self) {
        self.emit("mov rsp, rbp");
        self.emit("pop rbp");
        self.emit("ret");
    }

    /// Push the runtime address of an lvalue node onto the stack.
    fn gen_lval(&mut self, node: &Node) {
        match node {
            Node::LVar { offset } => {
                self.emit("mov rax, rbp");
                self.emit(format!("sub rax, {offset}"));
                self.emit("push rax");
            }
            _ => unreachable!("assignment targets are checked to be LVar at parse time"),
        }
    }

    fn gen_stmt(&mut self, node: &Node) {
        match node {
            Node::Return(expr) => {
                self.gen_expr(expr);
                self.emit("pop rax");
                self.emit("mov rsp, rbp");
                self.emit("pop rbp");
                self.emit("ret");
            }
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let id = self.fresh_label_id();
                self.gen_expr(cond);
                self.emit("pop rax");
                self.emit("cmp rax, 0");
                if let Some(else_branch) = else_branch {
                    self.emit(format!("je .L.else.{id}"));
                    self.gen_stmt(then_branch);
                    self.emit(format!("jmp .L.end.{id}"));
                    self.label(format!(".L.else.{id}"));
                    self.gen_stmt(else_branch);
                    self.label(format!(".L.end.{id}"));
                } else {
                    self.emit(format!("je .L.end.{id}"));
                    self.gen_stmt(then_branch);
                    self.label(format!(".L.end.{id}"));
                }
            }
            Node::While { cond, body } => {
                let id = self.fresh_label_id();
                self.label(format!(".L.begin.{id}"));
                self.gen_expr(cond);
                self.emit("pop rax");
                self.emit("cmp rax, 0");
                self.emit(format!("je .L.end.{id}"));
                self.gen_stmt(body);
                self.emit(format!("jmp .L.begin.{id}"));
                self.label(format!(".L.end.{id}"));
            }
            Node::For {
                init,
                cond,
                inc,
                body,
            } => {
                let id = self.fresh_label_id();
                if let Some(init) = init {
                    self.gen_expr(init);
                    self.emit("pop rax");
                }
                self.label(format!(".L.begin.{id}"));
                if let Some(cond) = cond {
                    self.gen_expr(cond);
                    self.emit("pop rax");
                    self.emit("cmp rax, 0");
                    self.emit(format!("je .L.end.{id}"));
                }
                self.gen_stmt(body);
                if let Some(inc) = inc {
                    self.gen_expr(inc);
                    self.emit("pop rax");
                }
                self.emit(format!("jmp .L.begin.{id}"));
                self.label(format!(".L.end.{id}"));
            }
            Node::Block(stmts) => {
                // No pop between statements: only top-level statements are
                // popped by `generate`, matching upstream's behavior.
                for stmt in stmts {
                    self.gen_stmt(stmt);
                }
            }
            _ => self.gen_expr(node),
        }
    }

    fn gen_expr(&mut self, node: &Node) {
        match node {
            Node::Num(value) => {
                self.emit(format!("push {value}"));
            }
            Node::LVar { .. } => {
                self.gen_lval(node);
                self.emit("pop rax");
                self.emit("mov rax, [rax]");
                self.emit("push rax");
            }
            Node::Assign { lvalue, rvalue } => {
                self.gen_lval(lvalue);
                self.gen_expr(rvalue);
                self.emit("pop rdi");
                self.emit("pop rax");
                self.emit("mov [rax], rdi");
                self.emit("push rdi");
            }
            Node::Add(lhs, rhs) => self.gen_binary(lhs, rhs, &["add rax, rdi"]),
            Node::Sub(lhs, rhs) => self.gen_binary(lhs, rhs, &["sub rax, rdi"]),
            Node::Mul(lhs, rhs) => self.gen_binary(lhs, rhs, &["imul rax, rdi"]),
            Node::Div(lhs, rhs) => self.gen_binary(lhs, rhs, &["cqo", "idiv rdi"]),
            Node::Eq(lhs, rhs) => self.gen_comparison(lhs, rhs, "sete"),
            Node::Ne(lhs, rhs) => self.gen_comparison(lhs, rhs, "setne"),
            Node::Lt(lhs, rhs) => self.gen_comparison(lhs, rhs, "setl"),
            Node::Le(lhs, rhs) => self.gen_comparison(lhs, rhs, "setle"),
            Node::Call { name, args } => self.gen_call(name, args),
            other => unreachable!("{other:?} is a statement node, not an expression"),
        }
    }

    fn gen_binary(&mut self, lhs: &Node, rhs: &Node, ops: &[&str]) {
        self.gen_expr(lhs);
        self.gen_expr(rhs);
        self.emit("pop rdi");
        self.emit("pop rax");
        for op in ops {
            self.emit(*op);
        }
        self.emit("push rax");
    }

    fn gen_comparison(&mut self, lhs: &Node, rhs: &Node, set_op: &str) {
        self.gen_expr(lhs);
        self.gen_expr(rhs);
        self.emit("pop rdi");
        self.emit("pop rax");
        self.emit("cmp rax, rdi");
        self.emit(format!("{set_op} al"));
        self.emit("movzx rax, al");
        self.emit("push rax");
    }

    /// Generate arguments back to front, so the first argument ends up on
    /// top of the stack. Popping forward into `rdi`, `rsi`, ... then lines
    /// up positionally regardless of argument count, and any argument past
    /// the sixth is simply never popped — it's left sitting on the stack in
    /// the order System V AMD64 wants for the call.
    fn gen_call(&mut self, name: &str, args: &[Node]) {
        for arg in args.iter().rev() {
            self.gen_expr(arg);
        }
        for reg in ARG_REGISTERS.iter().take(args.len()) {
            self.emit(format!("pop {reg}"));
        }
        self.emit(format!("call {name}"));
        self.emit("push rax");
    }
}
