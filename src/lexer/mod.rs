//! # Lexer
//!
//! Converts the source buffer into a head-anchored token sequence terminated
//! by an `End` token.
//!
//! ## Scanning order
//!
//! At each cursor position: skip whitespace, then try (in order) a keyword,
//! a two-character operator, a single-character punctuator, an identifier,
//! a number. The first rule that matches wins — longer operators are tried
//! before shorter ones, and keywords are tried before identifiers so that
//! `returning` lexes as one identifier rather than `return` + `ing`.

pub mod cursor;
pub mod token;

#[cfg(test)]
mod tests;

use crate::error::{CompileError, Span};
use cursor::Cursor;
use token::{Token, TokenKind};

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
];

const TWO_CHAR_OPS: &[&str] = &["==", "!=", "<=", ">="];
const ONE_CHAR_OPS: &str = "+-*/()<>=;{},";

const MAX_IDENT_LEN: usize = 255;

/// Tokenize `source`, returning the ordered token sequence or the first
/// lexical error encountered.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut cursor = Cursor::new(source);
    let mut tokens = Vec::new();

    while !cursor.is_at_end() {
        skip_whitespace(&mut cursor);
        if cursor.is_at_end() {
            break;
        }

        if let Some(token) = try_keyword(&mut cursor) {
            tokens.push(token);
            continue;
        }
        if let Some(token) = try_two_char_op(&mut cursor) {
            tokens.push(token);
            continue;
        }
        if let Some(token) = try_one_char_op(&mut cursor) {
            tokens.push(token);
            continue;
        }
        if let Some(token) = try_ident(&mut cursor)? {
            tokens.push(token);
            continue;
        }
        if let Some(token) = try_number(source, &mut cursor) {
            tokens.push(token);
            continue;
        }

        let offset = cursor.pos();
        return Err(CompileError::lex(
            format!("unexpected character '{}'", cursor.peek().unwrap() as char),
            Span::new(offset),
        ));
    }

    tokens.push(Token {
        kind: TokenKind::End,
        start: cursor.pos(),
        len: 0,
    });

    log::debug!("lexer produced {} tokens", tokens.len());
    Ok(tokens)
}

fn skip_whitespace(cursor: &mut Cursor) {
    while matches!(cursor.peek(), Some(b) if (b as char).is_whitespace()) {
        cursor.advance();
    }
}

fn is_ident_continue(b: u8) -> bool {
    (b as char).is_ascii_alphanumeric() || b == b'_'
}

fn try_keyword(cursor: &mut Cursor) -> Option<Token> {
    for (text, kind) in KEYWORDS {
        if cursor.starts_with(text) && !cursor.peek_at(text.len()).is_some_and(is_ident_continue) {
            let start = cursor.pos();
            cursor.advance_by(text.len());
            return Some(Token {
                kind: kind.clone(),
                start,
                len: text.len(),
            });
        }
    }
    None
}

fn try_two_char_op(cursor: &mut Cursor) -> Option<Token> {
    for op in TWO_CHAR_OPS {
        if cursor.starts_with(op) {
            let start = cursor.pos();
            cursor.advance_by(2);
            return Some(Token {
                kind: TokenKind::Reserved,
                start,
                len: 2,
            });
        }
    }
    None
}

fn try_one_char_op(cursor: &mut Cursor) -> Option<Token> {
    let b = cursor.peek()?;
    if ONE_CHAR_OPS.as_bytes().contains(&b) {
        let start = cursor.pos();
        cursor.advance();
        Some(Token {
            kind: TokenKind::Reserved,
            start,
            len: 1,
        })
    } else {
        None
    }
}

fn try_ident(cursor: &mut Cursor) -> Result<Option<Token>, CompileError> {
    let Some(b) = cursor.peek() else {
        return Ok(None);
    };
    if !(b as char).is_ascii_alphabetic() {
        return Ok(None);
    }

    let start = cursor.pos();
    let mut len = 0;
    while cursor.peek_at(len).is_some_and(is_ident_continue) {
        len += 1;
        if len > MAX_IDENT_LEN {
            return Err(CompileError::lex(
                "identifier exceeds the maximum length of 255 bytes",
                Span::new(start),
            ));
        }
    }
    cursor.advance_by(len);
    Ok(Some(Token {
        kind: TokenKind::Ident,
        start,
        len,
    }))
}

fn try_number(source: &str, cursor: &mut Cursor) -> Option<Token> {
    let start = cursor.pos();
    let mut len = 0;
    while cursor
        .peek_at(len)
        .is_some_and(|b| (b as char).is_ascii_digit())
    {
        len += 1;
    }
    if len == 0 {
        return None;
    }
    cursor.advance_by(len);
    let value: i64 = source[start..start + len].parse().unwrap_or(i64::MAX);
    Some(Token {
        kind: TokenKind::Number(value),
        start,
        len,
    })
}
