//! Lexer (token filter) for Brainfuck source
//!
//! Converts raw source bytes into a flat [`Instruction`] stream consumed by
//! the bracket validator and the code emitter. Non-instruction bytes are
//! silently skipped rather than rejected, matching Brainfuck's
//! everything-else-is-a-comment convention.

use std::fmt;

/// All instruction variants produced by the lexer.
///
/// Each variant corresponds to exactly one of the eight Brainfuck
/// instruction characters. The variant order follows the classic
/// `+ - > < . , [ ]` presentation of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `+` — increment the cell under the cursor, wrapping at 256
    IncrementCell,
    /// `-` — decrement the cell under the cursor, wrapping at 0
    DecrementCell,
    /// `>` — move the cursor one cell right
    MoveRight,
    /// `<` — move the cursor one cell left
    MoveLeft,
    /// `.` — write the current cell to stdout as a byte
    Output,
    /// `,` — read one byte from stdin into the current cell
    Input,
    /// `[` — jump past the matching `]` if the current cell is zero
    LoopStart,
    /// `]` — close the innermost open loop
    LoopEnd,
}

impl Instruction {
    /// Map a raw input byte to its instruction, or `None` for comment bytes.
    pub fn from_byte(byte: u8) -> Option<Instruction> {
        match byte {
            b'+' => Some(Instruction::IncrementCell),
            b'-' => Some(Instruction::DecrementCell),
            b'>' => Some(Instruction::MoveRight),
            b'<' => Some(Instruction::MoveLeft),
            b'.' => Some(Instruction::Output),
            b',' => Some(Instruction::Input),
            b'[' => Some(Instruction::LoopStart),
            b']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// The source character this instruction was lexed from.
    pub fn symbol(&self) -> char {
        match self {
            Instruction::IncrementCell => '+',
            Instruction::DecrementCell => '-',
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.symbol())
    }
}

/// A dense, 0-indexed instruction sequence with all comment bytes removed.
///
/// Produced once by [`filter`], then consumed read-only by the bracket
/// validator and the emitter.
pub type TokenStream = Vec<Instruction>;

/// Strip comment bytes from raw source, preserving instruction order.
///
/// Never fails: an empty or all-comment input yields an empty stream,
/// which is a valid (degenerate) program. Input length is unbounded.
pub fn filter(raw: &[u8]) -> TokenStream {
    raw.iter().filter_map(|&b| Instruction::from_byte(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eight_instructions() {
        let tokens = filter(b"+-><.,[]");

        assert_eq!(
            tokens,
            vec![
                Instruction::IncrementCell,
                Instruction::DecrementCell,
                Instruction::MoveRight,
                Instruction::MoveLeft,
                Instruction::Output,
                Instruction::Input,
                Instruction::LoopStart,
                Instruction::LoopEnd,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = filter(b"add two: + +\nthen output [.]\n");

        assert_eq!(
            tokens,
            vec![
                Instruction::IncrementCell,
                Instruction::IncrementCell,
                Instruction::LoopStart,
                Instruction::Output,
                Instruction::LoopEnd,
            ]
        );
    }

    #[test]
    fn test_all_noise_input_is_empty() {
        assert!(filter(b"nothing to see here 123 (){}").is_empty());
        assert!(filter(b"").is_empty());
    }

    #[test]
    fn test_nul_bytes_are_skipped() {
        let tokens = filter(b"+\0\0-");
        assert_eq!(
            tokens,
            vec![Instruction::IncrementCell, Instruction::DecrementCell]
        );
    }

    #[test]
    fn test_symbol_round_trip() {
        for byte in 0u8..=255 {
            if let Some(instr) = Instruction::from_byte(byte) {
                assert_eq!(instr.symbol() as u32, byte as u32);
            }
        }
    }
}
