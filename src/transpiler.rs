//! Translation orchestrator
//!
//! Sequences the pipeline phases (filter → validate → emit) behind one
//! entry point. Each call is a pure function of its input bytes: the
//! [`Transpiler`] holds configuration only, never per-call state, so a
//! single instance can serve any number of calls, including from multiple
//! threads at once.

use crate::codegen::emitter::{self, EmitterConfig};
use crate::parser::{brackets, lexer};

pub use crate::parser::brackets::CompileError;

/// How much progress reporting the orchestrator writes to stderr.
///
/// Replaces the compile-time `DEBUG` flag of the original translator:
/// verbosity is decided per [`Transpiler`], not per build of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No diagnostics. Errors are still returned as values.
    #[default]
    Quiet,
    /// Phase-by-phase progress on stderr.
    Verbose,
}

/// The configured translation pipeline.
#[derive(Debug, Default)]
pub struct Transpiler {
    config: EmitterConfig,
    verbosity: Verbosity,
}

impl Transpiler {
    /// A transpiler with the default 30000-cell runtime and quiet output.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig, verbosity: Verbosity) -> Self {
        Self { config, verbosity }
    }

    /// Translate raw Brainfuck source into a complete C program.
    ///
    /// Filters comment bytes, validates bracket nesting, then emits. A
    /// validation failure short-circuits the pipeline and is returned
    /// verbatim; nothing is emitted for an invalid program. Calling this
    /// twice on identical input yields byte-identical output.
    pub fn translate(&self, raw: &[u8]) -> Result<String, CompileError> {
        let tokens = lexer::filter(raw);
        if self.verbosity == Verbosity::Verbose {
            eprintln!(
                "bf2c: {} instruction(s) in {} input byte(s)",
                tokens.len(),
                raw.len()
            );
        }

        let map = brackets::validate(&tokens)?;
        if self.verbosity == Verbosity::Verbose {
            eprintln!("bf2c: {} loop pair(s) validated", map.pair_count());
        }

        Ok(emitter::emit(&tokens, &self.config))
    }
}

/// Translate with the default configuration.
///
/// Convenience wrapper for callers that do not need to adjust the runtime
/// contract of the generated program.
pub fn translate(raw: &[u8]) -> Result<String, CompileError> {
    Transpiler::new().translate(raw)
}
