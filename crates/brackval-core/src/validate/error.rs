//! Reporting for input that falls outside the bracket catalog.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::classify::is_recognized_bracket;

/// The first character of an input that is not in the bracket catalog.
///
/// A reporting aid; validation never returns this and folds the condition
/// into its malformed-input verdict instead.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{found:?} at offset {offset} is not a bracket character")]
#[diagnostic(help("recognized characters are ( ) [ ] {{ }}"))]
pub struct UnrecognizedCharacter {
    /// The offending character.
    pub found: char,
    /// Byte offset of the character in the input.
    pub offset: usize,
    /// Where the character sits in the input.
    #[label("not a bracket")]
    pub span: SourceSpan,
}

/// Find the first character of `input` that the catalog does not recognize.
///
/// Returns `None` when the input is well-formed, including when it is empty.
#[must_use]
pub fn find_unrecognized(input: &str) -> Option<UnrecognizedCharacter> {
    input
        .char_indices()
        .find(|&(_, c)| !is_recognized_bracket(c))
        .map(|(offset, found)| UnrecognizedCharacter {
            found,
            offset,
            span: (offset, found.len_utf8()).into(),
        })
}
