//! Bracket sequence validation library.
//!
//! This library checks whether strings of bracket characters are balanced.

mod catalog;
mod validate;

pub use catalog::{Bracket, BracketRole};
pub use validate::{
    UnrecognizedCharacter, Verdict, counterpart_of, debug_classification, find_unrecognized,
    is_opener, is_recognized_bracket, is_well_formed_input, validate,
};
