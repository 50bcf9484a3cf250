//! Bracket validation for the instruction stream
//!
//! Verifies that every `[` has a matching `]` before emission is attempted,
//! and records the matching pairs in a [`BracketMap`]. The original C
//! translator this tool replaces emitted a `while` block per bracket with
//! no balance check at all, so malformed input produced C that either
//! failed to compile or silently ran the wrong loops. Validation is a
//! mandatory gate here: the emitter is never handed an unvalidated stream.

use crate::parser::lexer::Instruction;
use rustc_hash::FxHashMap;
use std::fmt;

/// Errors that can make a translation fail.
///
/// Positions are 0-based indices into the filtered instruction stream,
/// not byte offsets into the raw source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `]` was scanned with no open `[` to close.
    UnmatchedLoopEnd { position: usize },

    /// A `[` was never closed by the end of input. The position names the
    /// earliest unclosed start.
    UnmatchedLoopStart { position: usize },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::UnmatchedLoopEnd { position } => {
                write!(
                    f,
                    "Unmatched ']' at instruction {}: no open '[' to close",
                    position
                )
            }
            CompileError::UnmatchedLoopStart { position } => {
                write!(
                    f,
                    "Unmatched '[' at instruction {}: never closed by end of input",
                    position
                )
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Matching bracket pairs of a validated instruction stream.
///
/// Records each pair in both directions, so the partner of either a
/// `LoopStart` or a `LoopEnd` index can be looked up directly. Built once
/// by [`validate`] and immutable afterwards.
#[derive(Debug, Default, Clone)]
pub struct BracketMap {
    partners: FxHashMap<usize, usize>,
}

impl BracketMap {
    /// Look up the partner of the bracket at `index`, if `index` is a
    /// bracket at all.
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(&index).copied()
    }

    /// Number of `[`/`]` pairs.
    pub fn pair_count(&self) -> usize {
        self.partners.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    fn insert_pair(&mut self, start: usize, end: usize) {
        self.partners.insert(start, end);
        self.partners.insert(end, start);
    }
}

/// Check that brackets balance and nest, and compute their pairing.
///
/// Single left-to-right scan with a stack of pending `LoopStart` indices:
/// each `LoopEnd` pops and pairs with the most recent open start, which
/// makes overlapping pairs impossible by construction. Tokens other than
/// brackets are ignored by this pass.
pub fn validate(tokens: &[Instruction]) -> Result<BracketMap, CompileError> {
    let mut map = BracketMap::default();
    let mut open_starts: Vec<usize> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Instruction::LoopStart => open_starts.push(position),
            Instruction::LoopEnd => {
                let start = open_starts
                    .pop()
                    .ok_or(CompileError::UnmatchedLoopEnd { position })?;
                map.insert_pair(start, position);
            }
            _ => {}
        }
    }

    // Bottom of the stack is the earliest start still open.
    if let Some(&position) = open_starts.first() {
        return Err(CompileError::UnmatchedLoopStart { position });
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::filter;

    #[test]
    fn test_lone_close_fails_at_zero() {
        let result = validate(&filter(b"]"));
        assert_eq!(
            result.unwrap_err(),
            CompileError::UnmatchedLoopEnd { position: 0 }
        );
    }

    #[test]
    fn test_lone_open_fails_at_zero() {
        let result = validate(&filter(b"["));
        assert_eq!(
            result.unwrap_err(),
            CompileError::UnmatchedLoopStart { position: 0 }
        );
    }

    #[test]
    fn test_earliest_unclosed_start_is_reported() {
        // Both pairs at 1 and 2 close; the start at 0 never does.
        let result = validate(&filter(b"[[[]]"));
        assert_eq!(
            result.unwrap_err(),
            CompileError::UnmatchedLoopStart { position: 0 }
        );
    }

    #[test]
    fn test_extra_close_reports_its_own_position() {
        let result = validate(&filter(b"[]]"));
        assert_eq!(
            result.unwrap_err(),
            CompileError::UnmatchedLoopEnd { position: 2 }
        );
    }

    #[test]
    fn test_nested_pairs() {
        let map = validate(&filter(b"[[]]")).unwrap();

        assert_eq!(map.pair_count(), 2);
        assert_eq!(map.partner(0), Some(3));
        assert_eq!(map.partner(3), Some(0));
        assert_eq!(map.partner(1), Some(2));
        assert_eq!(map.partner(2), Some(1));
    }

    #[test]
    fn test_clear_loop() {
        // ++[-] — the canonical cell-clearing idiom.
        let tokens = filter(b"++[-]");
        assert_eq!(tokens.len(), 5);

        let map = validate(&tokens).unwrap();
        assert_eq!(map.pair_count(), 1);
        assert_eq!(map.partner(2), Some(4));
        assert_eq!(map.partner(4), Some(2));
    }

    #[test]
    fn test_non_bracket_tokens_are_transparent() {
        let map = validate(&filter(b"+[>.<,-]+")).unwrap();

        assert_eq!(map.pair_count(), 1);
        assert_eq!(map.partner(1), Some(7));
    }

    #[test]
    fn test_pair_count_is_half_bracket_count() {
        let sequences: &[&[u8]] = &[b"[]", b"[[]]", b"[][]", b"[[][]]", b"[[[][]][]]"];
        for source in sequences {
            let tokens = filter(source);
            let map = validate(&tokens).unwrap();
            assert_eq!(map.pair_count(), tokens.len() / 2);
        }
    }

    #[test]
    fn test_empty_stream_is_valid() {
        let map = validate(&[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_non_bracket_index_has_no_partner() {
        let map = validate(&filter(b"+[-]")).unwrap();
        assert_eq!(map.partner(0), None);
    }
}
