//! Byte-by-byte navigation through the source buffer.
//!
//! The source language is ASCII-only, so the cursor walks a byte slice
//! rather than a `Vec<char>` — this avoids the per-source allocation
//! `.chars().collect()` would require. `pos` doubles as the byte offset
//! used for `Span`s, since byte offset and character index coincide for
//! ASCII input.

pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    /// Does the byte slice starting at the cursor match `s`?
    pub fn starts_with(&self, s: &str) -> bool {
        self.bytes[self.pos..].starts_with(s.as_bytes())
    }

    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    pub fn advance_by(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }
}
