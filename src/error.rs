//! Compiler error kinds and caret-style diagnostic rendering.
//!
//! Each variant carries a `Span` it can render into a source-line-and-caret
//! diagnostic, the way a one-pass compiler with no source map still manages
//! to point at the offending byte before exiting.

use thiserror::Error;

/// A byte offset into the source buffer where a token or error originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
}

impl Span {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }
}

/// Every error the pipeline can produce.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompileError {
    #[error("the program takes exactly one argument: the source text")]
    Usage,

    #[error("{message}")]
    Lex { message: String, span: Span },

    #[error("{message}")]
    Syntax { message: String, span: Span },

    #[error("{message}")]
    Semantic { message: String, span: Span },
}

impl CompileError {
    pub fn lex(message: impl Into<String>, span: Span) -> Self {
        CompileError::Lex {
            message: message.into(),
            span,
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        CompileError::Syntax {
            message: message.into(),
            span,
        }
    }

    pub fn semantic(message: impl Into<String>, span: Span) -> Self {
        CompileError::Semantic {
            message: message.into(),
            span,
        }
    }

    fn span(&self) -> Option<Span> {
        match self {
            CompileError::Usage => None,
            CompileError::Lex { span, .. }
            | CompileError::Syntax { span, .. }
            | CompileError::Semantic { span, .. } => Some(*span),
        }
    }

    /// Render the source line the span falls on, a line of `span.offset`
    /// spaces followed by `^ `, then the message.
    ///
    /// `Usage` has no span (it fires before any source is installed), so it
    /// renders as a bare message line.
    pub fn render(&self, source: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let line_start = source[..span.offset]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let line_end = source[span.offset..]
            .find('\n')
            .map(|i| span.offset + i)
            .unwrap_or(source.len());
        let line = &source[line_start..line_end];
        let col = span.offset - line_start;

        format!("{}\n{}^ {}", line, " ".repeat(col), self)
    }
}
