//! Shared types for the Porter stemmer workspace.
//!
//! - [`character`] -- ASCII letter classification and character types
//! - [`case`] -- case pattern detection, folding and restoring
//! - [`token`] -- token types produced by the tokenizer

pub mod case;
pub mod character;
pub mod token;
