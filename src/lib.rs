//! # Introduction
//!
//! bf2c translates Brainfuck programs into free-standing C source text that
//! can be handed to any C compiler. The input language has exactly eight
//! instruction characters (`+ - > < . , [ ]`); everything else in a source
//! file is a comment and is discarded before translation.
//!
//! ## Translation pipeline
//!
//! ```text
//! Raw bytes → TokenFilter → BracketValidator → CodeEmitter → C program
//! ```
//!
//! 1. [`parser`] — filters raw bytes down to a dense instruction stream and
//!    verifies that every `[` has a matching `]` before any code is emitted.
//! 2. [`codegen`] — maps each instruction to a fixed C statement and wraps
//!    the result in a tape-machine runtime preamble and postamble.
//! 3. [`transpiler`] — sequences the two phases behind a single
//!    [`transpiler::translate`] entry point.
//!
//! ## Generated program contract
//!
//! The emitted C program owns a zero-initialized `unsigned char` tape
//! (30000 cells by default) and a cursor starting at cell 0. Cell
//! arithmetic wraps via C's natural unsigned overflow. `.` writes the
//! current cell to stdout, `,` reads one byte from stdin. The runtime
//! performs no bounds checking on the cursor; moving it off either end of
//! the tape is undefined behavior in the generated program, matching the
//! minimal-runtime contract of classic Brainfuck translators.
//!
//! Every translation is a pure function of its input bytes: no state is
//! kept between calls and identical input yields byte-identical output.

pub mod codegen;
pub mod parser;
pub mod transpiler;
