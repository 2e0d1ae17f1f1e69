// Stemming engine: public entry points over the word primitives and stages.

pub mod rules;
mod steps;
pub mod word;

use porter_core::case::fold_ascii_lowercase;
use porter_core::character::first_non_ascii;

use crate::StemError;
use word::Word;

/// Words this short are returned unchanged.
pub const MIN_STEM_LEN: usize = 3;

/// Stem the lowercase word filling `buf` and return the stem's length.
///
/// The stem is `buf[..n]`; bytes past `n` are unspecified leftovers. The
/// stem is never longer than the input. Bytes outside `a-z` are treated as
/// consonants, so uppercase input must be folded first (see [`stem_bytes`]).
pub fn stem_in_place(buf: &mut [u8]) -> usize {
    if buf.len() < MIN_STEM_LEN {
        return buf.len();
    }
    let mut word = Word::new(buf);
    word.apply_stages();
    word.len()
}

/// Fold ASCII uppercase to lowercase, stem, and return the stem sub-slice.
pub fn stem_bytes(buf: &mut [u8]) -> &mut [u8] {
    fold_ascii_lowercase(buf);
    let n = stem_in_place(buf);
    &mut buf[..n]
}

/// Stem a word and return the stem as a new string.
///
/// Uppercase ASCII is folded first. Words containing non-ASCII characters
/// are rejected.
pub fn stem(word: &str) -> Result<String, StemError> {
    PorterStemmer.stem(word)
}

// ---------------------------------------------------------------------------
// Stemmer trait
// ---------------------------------------------------------------------------

/// A suffix-stripping stemmer.
///
/// Only [`Stemmer::stem_in_place`] is required; the string-level methods are
/// built on it.
pub trait Stemmer {
    /// Stem the lowercase word filling `buf`, returning the new length.
    fn stem_in_place(&self, buf: &mut [u8]) -> usize;

    /// Stem an already lowercased word.
    ///
    /// ASCII words always succeed. Other bytes are treated as consonants,
    /// and a rule that cuts a multi-byte character yields
    /// [`StemError::InvalidUtf8`].
    fn stem_folded(&self, word: &str) -> Result<String, StemError> {
        let mut buf = word.as_bytes().to_vec();
        let n = self.stem_in_place(&mut buf);
        buf.truncate(n);
        Ok(String::from_utf8(buf)?)
    }

    /// Validate, fold and stem a word.
    fn stem(&self, word: &str) -> Result<String, StemError> {
        if let Some((pos, ch)) = first_non_ascii(word) {
            return Err(StemError::NonAscii { pos, ch });
        }
        self.stem_folded(&word.to_ascii_lowercase())
    }
}

/// The Porter (1980) stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem_in_place(&self, buf: &mut [u8]) -> usize {
        stem_in_place(buf)
    }
}
