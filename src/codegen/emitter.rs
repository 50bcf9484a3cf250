//! Statement-level translation to C
//!
//! Each instruction maps to one fixed C statement; the emitter strings them
//! together between a runtime preamble (tape and cursor declarations) and a
//! postamble (`return 0`). Output is accumulated in a growable [`String`],
//! so there is no fixed output-capacity assumption regardless of how many
//! multi-character templates the input expands into.

use crate::parser::lexer::Instruction;

/// Default number of tape cells in the generated runtime.
pub const DEFAULT_TAPE_LEN: usize = 30_000;

/// Width of the instruction listing lines in the generated source comment.
const SOURCE_COMMENT_WIDTH: usize = 60;

/// What the generated program stores when `,` hits end of input.
///
/// The classic translators store the raw `getchar()` result, which writes
/// the EOF sentinel (-1) into an unsigned cell. Neither convention below
/// reproduces that; both are deliberate choices the caller can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EofBehavior {
    /// Store 0 into the current cell on end of input.
    #[default]
    StoreZero,
    /// Leave the current cell untouched on end of input.
    LeaveUnchanged,
}

/// Emission parameters.
///
/// These were hard-coded literals in the original translator; they are
/// explicit here so the runtime contract of the generated program is
/// visible at the call site.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Number of cells in the generated tape.
    pub tape_len: usize,
    /// End-of-input convention for the `,` instruction.
    pub eof: EofBehavior,
    /// Prefix the program with a `/* ... */` listing of the filtered
    /// instructions. Instruction characters never contain `*` or `/`, so
    /// the listing cannot terminate the comment early.
    pub source_comment: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            tape_len: DEFAULT_TAPE_LEN,
            eof: EofBehavior::default(),
            source_comment: false,
        }
    }
}

/// Translate a validated instruction stream into a complete C program.
///
/// Must only be called with a stream that passed bracket validation;
/// the brace structure of the output mirrors the bracket structure of the
/// input one-to-one. An empty stream yields a runtime-only program that
/// immediately returns 0.
pub fn emit(tokens: &[Instruction], config: &EmitterConfig) -> String {
    // Worst-case template is ~70 bytes; the String grows past this freely.
    let mut out = String::with_capacity(256 + tokens.len() * 70);

    if config.source_comment {
        emit_source_comment(&mut out, tokens);
    }

    out.push_str("#include <stdio.h>\n");
    out.push_str("\n");
    out.push_str("int main(void)\n");
    out.push_str("{\n");
    out.push_str(&format!(
        "    unsigned char tape[{}] = {{0}};\n",
        config.tape_len
    ));
    out.push_str("    size_t cursor = 0;\n");

    if !tokens.is_empty() {
        out.push_str("\n");
    }

    let mut depth: usize = 0;
    for token in tokens {
        if *token == Instruction::LoopEnd {
            // Validated streams never close more loops than they open.
            depth = depth.saturating_sub(1);
        }

        for _ in 0..=depth {
            out.push_str("    ");
        }
        out.push_str(statement(*token, config.eof));
        out.push('\n');

        if *token == Instruction::LoopStart {
            depth += 1;
        }
    }

    out.push_str("\n");
    out.push_str("    return 0;\n");
    out.push_str("}\n");
    out
}

/// The fixed C statement for one instruction.
fn statement(token: Instruction, eof: EofBehavior) -> &'static str {
    match token {
        Instruction::IncrementCell => "tape[cursor]++;",
        Instruction::DecrementCell => "tape[cursor]--;",
        Instruction::MoveRight => "cursor++;",
        Instruction::MoveLeft => "cursor--;",
        Instruction::Output => "putchar(tape[cursor]);",
        Instruction::Input => match eof {
            EofBehavior::StoreZero => {
                "{ int c = getchar(); tape[cursor] = (unsigned char)(c == EOF ? 0 : c); }"
            }
            EofBehavior::LeaveUnchanged => {
                "{ int c = getchar(); if (c != EOF) tape[cursor] = (unsigned char)c; }"
            }
        },
        Instruction::LoopStart => "while (tape[cursor]) {",
        Instruction::LoopEnd => "}",
    }
}

/// Write the filtered program as a block comment ahead of the output.
fn emit_source_comment(out: &mut String, tokens: &[Instruction]) {
    out.push_str("/* Source instructions:\n");
    if tokens.is_empty() {
        out.push_str(" * (none)\n");
    }
    for chunk in tokens.chunks(SOURCE_COMMENT_WIDTH) {
        out.push_str(" * ");
        for token in chunk {
            out.push(token.symbol());
        }
        out.push('\n');
    }
    out.push_str(" */\n");
}
