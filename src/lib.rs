//! # ninecc
//!
//! A small compiler for a C-like expression/statement language, emitting
//! x86-64 assembly in Intel syntax for a GNU-style toolchain to assemble.
//!
//! ## Pipeline
//!
//! 1. **Lexer** - scans the source buffer into a token sequence
//! 2. **Parser** - recursive-descent parse into a statement forest, with a
//!    local-variable table and a function-name set built alongside it
//! 3. **Code generator** - walks the forest, emitting a stack-machine
//!    assembly program
//!
//! ## Example
//!
//! ```rust,no_run
//! use ninecc::{codegen, lexer, parser};
//!
//! let source = std::fs::read_to_string("program.c").unwrap();
//! let tokens = lexer::tokenize(&source).unwrap();
//! let parsed = parser::parse(&tokens, &source).unwrap();
//! let asm = codegen::generate(&parsed);
//! print!("{asm}");
//! ```

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
