//! Bracket sequence validation.
//!
//! Validation runs in two stages: the whole input is first checked for
//! characters outside the bracket catalog, then the surviving sequence is
//! matched with a single-pass stack scan.

mod classify;
mod error;

pub use classify::{counterpart_of, is_opener, is_recognized_bracket, is_well_formed_input};
pub use error::{UnrecognizedCharacter, find_unrecognized};

use serde::{Deserialize, Serialize};

use crate::catalog::{Bracket, BracketRole};

/// Outcome of validating one input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Well-formed and balanced.
    Valid,
    /// Well-formed but unbalanced.
    Invalid,
    /// Contains at least one character outside the bracket catalog.
    MalformedInput,
}

impl Verdict {
    /// Check if the verdict accepts the input.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate a string of bracket characters.
///
/// Inputs containing characters outside the catalog are rejected as
/// [`Verdict::MalformedInput`] before any matching is attempted. Otherwise
/// the scan keeps a stack of unmatched openers: every closer must match the
/// most recently opened bracket, and a balanced input leaves the stack empty
/// at the end.
#[must_use]
pub fn validate(input: &str) -> Verdict {
    if !is_well_formed_input(input) {
        return Verdict::MalformedInput;
    }

    let mut open: Vec<char> = Vec::new();

    for c in input.chars() {
        // Well-formedness guarantees every non-opener is a recognized
        // closer, so a mismatch here means a missing or wrong opener.
        if is_opener(c) {
            open.push(c);
        } else if open.pop() != counterpart_of(c) {
            return Verdict::Invalid;
        }
    }

    if open.is_empty() {
        Verdict::Valid
    } else {
        Verdict::Invalid
    }
}

/// Debug classification output for an input string.
#[must_use]
pub fn debug_classification(source: &str) -> String {
    use std::fmt::Write;

    let mut output = format!("Input: {source:?} (len={})\n\nCharacters:\n", source.len());

    for (offset, c) in source.char_indices() {
        match Bracket::from_char(c) {
            Some(bracket) => match bracket.role() {
                BracketRole::Opener => {
                    let _ = writeln!(output, "  {offset}: {c:?} opener");
                }
                BracketRole::Closer => {
                    let _ = writeln!(
                        output,
                        "  {offset}: {c:?} closer (matches {:?})",
                        bracket.counterpart().as_char()
                    );
                }
            },
            None => {
                let _ = writeln!(output, "  {offset}: {c:?} unrecognized");
            }
        }
    }

    output
}
