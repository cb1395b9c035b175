use super::*;
use crate::lexer::tokenize;

fn parse_source(source: &str) -> ParseResult {
    let tokens = tokenize(source).unwrap();
    parse(&tokens, source).unwrap()
}

fn parse_err(source: &str) -> CompileError {
    let tokens = tokenize(source).unwrap();
    parse(&tokens, source).unwrap_err()
}

#[test]
fn mul_binds_tighter_than_add() {
    let result = parse_source("a+b*c;");
    match &result.statements[0] {
        Node::Add(lhs, rhs) => {
            assert!(matches!(**lhs, Node::LVar { .. }));
            assert!(matches!(**rhs, Node::Mul(_, _)));
        }
        other => panic!("expected Add at the root, got {other:?}"),
    }
}

#[test]
fn relational_nests_inside_equality() {
    let result = parse_source("a<b==c<d;");
    match &result.statements[0] {
        Node::Eq(lhs, rhs) => {
            assert!(matches!(**lhs, Node::Lt(_, _)));
            assert!(matches!(**rhs, Node::Lt(_, _)));
        }
        other => panic!("expected Eq at the root, got {other:?}"),
    }
}

#[test]
fn sub_is_left_associative() {
    let result = parse_source("a-b-c;");
    match &result.statements[0] {
        Node::Sub(lhs, rhs) => {
            assert!(matches!(**rhs, Node::LVar { .. }));
            assert!(matches!(**lhs, Node::Sub(_, _)));
        }
        other => panic!("expected Sub at the root, got {other:?}"),
    }
}

#[test]
fn assign_is_right_associative() {
    let result = parse_source("a=b=3;");
    match &result.statements[0] {
        Node::Assign { lvalue, rvalue } => {
            assert!(matches!(**lvalue, Node::LVar { .. }));
            assert!(matches!(**rvalue, Node::Assign { .. }));
        }
        other => panic!("expected Assign at the root, got {other:?}"),
    }
}

#[test]
fn unary_plus_reduces_to_its_operand() {
    let result = parse_source("+a;");
    assert!(matches!(result.statements[0], Node::LVar { .. }));
}

#[test]
fn unary_minus_becomes_zero_minus_operand() {
    let result = parse_source("-10+20;");
    match &result.statements[0] {
        Node::Add(lhs, _) => match &**lhs {
            Node::Sub(zero, ten) => {
                assert_eq!(**zero, Node::Num(0));
                assert_eq!(**ten, Node::Num(10));
            }
            other => panic!("expected Sub, got {other:?}"),
        },
        other => panic!("expected Add at the root, got {other:?}"),
    }
}

#[test]
fn greater_than_desugars_to_swapped_less_than() {
    let gt = parse_source("a>b;");
    let lt = parse_source("b<a;");
    assert_eq!(gt.statements[0], lt.statements[0]);
}

#[test]
fn greater_equal_desugars_to_swapped_less_equal() {
    let ge = parse_source("a>=b;");
    let le = parse_source("b<=a;");
    assert_eq!(ge.statements[0], le.statements[0]);
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let result = parse_source("if (1) if (2) a=1; else a=2;");
    match &result.statements[0] {
        Node::If {
            then_branch,
            else_branch,
            ..
        } => {
            assert!(else_branch.is_none());
            match &**then_branch {
                Node::If { else_branch, .. } => assert!(else_branch.is_some()),
                other => panic!("expected nested If, got {other:?}"),
            }
        }
        other => panic!("expected If at the root, got {other:?}"),
    }
}

#[test]
fn for_loop_clauses_are_all_optional() {
    let result = parse_source("for (;;) a=a+1;");
    match &result.statements[0] {
        Node::For {
            init, cond, inc, ..
        } => {
            assert!(init.is_none());
            assert!(cond.is_none());
            assert!(inc.is_none());
        }
        other => panic!("expected For at the root, got {other:?}"),
    }
}

#[test]
fn while_without_braces_takes_only_the_next_statement() {
    let result = parse_source("while (i<10) s=s+i; i=i+1;");
    assert_eq!(result.statements.len(), 2);
    assert!(matches!(result.statements[0], Node::While { .. }));
    assert!(matches!(result.statements[1], Node::Assign { .. }));
}

#[test]
fn block_groups_statements_into_one_node() {
    let result = parse_source("{ a=1; b=2; }");
    match &result.statements[0] {
        Node::Block(stmts) => assert_eq!(stmts.len(), 2),
        other => panic!("expected Block, got {other:?}"),
    }
}

#[test]
fn call_with_no_arguments() {
    let result = parse_source("foo();");
    match &result.statements[0] {
        Node::Call { name, args } => {
            assert_eq!(name, "foo");
            assert!(args.is_empty());
        }
        other => panic!("expected Call, got {other:?}"),
    }
}

#[test]
fn call_with_several_arguments_records_function_name() {
    let result = parse_source("bar(1, a, 2+3);");
    match &result.statements[0] {
        Node::Call { name, args } => {
            assert_eq!(name, "bar");
            assert_eq!(args.len(), 3);
        }
        other => panic!("expected Call, got {other:?}"),
    }
    assert_eq!(result.functions.names(), &["bar".to_string()]);
}

#[test]
fn fresh_identifier_allocates_a_new_local_offset() {
    let result = parse_source("a=1; b=2; a=3;");
    assert_eq!(result.locals.len(), 2);
}

#[test]
fn assigning_to_a_non_lvalue_is_a_semantic_error() {
    let err = parse_err("1=2;");
    assert!(matches!(err, CompileError::Semantic { .. }));
}

#[test]
fn missing_semicolon_is_a_syntax_error() {
    let err = parse_err("a=1");
    assert!(matches!(err, CompileError::Syntax { .. }));
}

#[test]
fn missing_closing_paren_is_a_syntax_error() {
    let err = parse_err("(1+2;");
    assert!(matches!(err, CompileError::Syntax { .. }));
}
