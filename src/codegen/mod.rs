//! C code generation
//!
//! This module provides the backend of the translation pipeline:
//! - [`emitter`]: per-instruction statement templates plus the tape-machine
//!   runtime preamble and postamble
//!
//! # Backend choice
//!
//! Loops translate directly to C `while` blocks, so the generated program
//! re-expresses bracket nesting through C's own brace structure. The
//! bracket map computed during validation is therefore not needed at
//! emission time — validation only has to guarantee that the braces the
//! emitter writes will balance.

pub mod emitter;
