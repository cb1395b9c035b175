//! Local-variable and function-name tables built during parsing.
//!
//! An insertion-ordered `Vec` rather than a `HashMap`: programs have at most
//! a handful of distinct names, so linear scan beats hashing at that scale
//! while preserving first-occurrence order for free.

/// Maps each local variable's lexeme to its stack offset from the frame
/// base, in first-occurrence order. The k-th distinct identifier resolves
/// to offset `8*k`.
#[derive(Debug, Default, Clone)]
pub struct Locals {
    order: Vec<String>,
}

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this name's offset, allocating a fresh one on first sight.
    pub fn offset_of(&mut self, name: &str) -> i64 {
        if let Some(idx) = self.order.iter().position(|n| n == name) {
            ((idx + 1) * 8) as i64
        } else {
            self.order.push(name.to_string());
            (self.order.len() * 8) as i64
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The set of identifiers referenced as call targets, deduplicated but
/// otherwise unexamined — no signatures are tracked, only names.
#[derive(Debug, Default, Clone)]
pub struct Functions {
    names: Vec<String>,
}

impl Functions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
