use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn tokenizes_arithmetic() {
    let toks = kinds("5+20-4;");
    assert_eq!(
        toks,
        vec![
            TokenKind::Number(5),
            TokenKind::Reserved,
            TokenKind::Number(20),
            TokenKind::Reserved,
            TokenKind::Number(4),
            TokenKind::Reserved,
            TokenKind::End,
        ]
    );
}

#[test]
fn two_char_operators_win_over_one_char() {
    let toks = tokenize("a<=b").unwrap();
    assert_eq!(toks[1].kind, TokenKind::Reserved);
    assert_eq!(toks[1].len, 2);
}

#[test]
fn keyword_not_confused_with_identifier_prefix() {
    let toks = kinds("returning = 1;");
    assert_eq!(toks[0], TokenKind::Ident);
}

#[test]
fn keywords_lex_distinctly() {
    let toks = kinds("if (1) return 0; else return 1;");
    assert!(toks.contains(&TokenKind::If));
    assert!(toks.contains(&TokenKind::Else));
    assert!(toks.contains(&TokenKind::Return));
}

#[test]
fn while_and_for_keywords() {
    assert!(kinds("while (1) a;").contains(&TokenKind::While));
    assert!(kinds("for (;;) a;").contains(&TokenKind::For));
}

#[test]
fn rejects_unknown_byte() {
    let err = tokenize("a = 1 $ 2;").unwrap_err();
    assert!(matches!(err, CompileError::Lex { .. }));
}

#[test]
fn end_token_offset_is_buffer_length() {
    let toks = tokenize("ab;").unwrap();
    let end = toks.last().unwrap();
    assert_eq!(end.kind, TokenKind::End);
    assert_eq!(end.start, 3);
}

#[test]
fn identifier_longer_than_255_is_an_error() {
    let long_name = "a".repeat(300);
    let source = format!("{} = 1;", long_name);
    let err = tokenize(&source).unwrap_err();
    assert!(matches!(err, CompileError::Lex { .. }));
}
