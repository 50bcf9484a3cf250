//! Brainfuck source recognition and validation
//!
//! This module turns raw source bytes into a validated instruction stream:
//! - [`lexer`]: Tokenization (raw bytes → [`lexer::Instruction`] stream)
//! - [`brackets`]: Structural validation of `[`/`]` nesting
//!
//! # Comment convention
//!
//! Brainfuck has no comment syntax; by convention every byte that is not
//! one of the eight instruction characters *is* a comment. The lexer
//! therefore never fails — it silently drops whitespace, prose, embedded
//! NUL bytes, and anything else it does not recognize.
//!
//! # Validation gate
//!
//! Bracket validation runs before any code is emitted. A stream that fails
//! validation never reaches the emitter, so the generated C can never
//! contain mismatched braces.

pub mod brackets;
pub mod lexer;
