//! Porter suffix-stripping stemmer for English.
//!
//! Implements the algorithm published in M.F. Porter, 1980, "An algorithm
//! for suffix stripping", Program 14(3), 130-137, as released by the author
//! in ANSI C (including the `bli`/`logi` departures).
//!
//! # Architecture
//!
//! - [`stemmer`] -- the engine: word buffer primitives, suffix tables and the
//!   six ordered rewrite stages
//! - [`tokenizer`] -- splits running text into word, whitespace and
//!   punctuation tokens
//! - [`cache`] -- bounded word-to-stem memoization
//! - [`handle`] -- [`handle::StemHandle`], the integration point used by the
//!   CLI, FFI and WASM crates
//!
//! The zero-allocation entry point is [`stem_in_place`]:
//!
//! ```
//! let mut word = *b"generalizations";
//! let len = porter_stem::stem_in_place(&mut word);
//! assert_eq!(&word[..len], b"gener");
//! ```

#[cfg(feature = "handle")]
pub mod cache;
#[cfg(feature = "handle")]
pub mod handle;
pub mod stemmer;
#[cfg(feature = "tokenize")]
pub mod tokenizer;

pub use stemmer::{PorterStemmer, Stemmer, stem, stem_bytes, stem_in_place};

/// Error type for the string-level stemming API.
///
/// The engine itself cannot fail; these errors come from the conversions
/// and policies around it.
#[derive(Debug, thiserror::Error)]
pub enum StemError {
    /// The word contains a character outside ASCII and the active policy
    /// rejects such words.
    #[error("non-ASCII character {ch:?} at position {pos}")]
    NonAscii { pos: usize, ch: char },

    /// Stemming raw non-ASCII bytes cut a multi-byte character in half.
    #[error("stem is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A policy name could not be parsed.
    #[error("unknown non-ASCII policy: {0}")]
    UnknownPolicy(String),
}
