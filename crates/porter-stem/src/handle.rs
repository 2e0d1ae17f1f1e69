// StemHandle: top-level integration point for stemming.
//
// Owns the stemmer, the stemming options and a word cache, and provides the
// API used by the CLI, FFI and WASM crates: single words, word lists,
// tokenization and whole-text stemming.
//
// Design notes:
// - The engine only understands lowercase ASCII. The handle does the case
//   folding, non-ASCII policy and case restoring around it.
// - The cache sits behind a `RefCell` so that stemming methods take `&self`.
//   This makes the handle `!Sync`; use one handle per thread.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use porter_core::case::{apply_case, detect_case};
use porter_core::character::first_non_ascii;
use porter_core::token::{StemmedToken, Token};

use crate::StemError;
use crate::cache::{DEFAULT_CACHE_CAPACITY, StemCache};
use crate::stemmer::{MIN_STEM_LEN, PorterStemmer, Stemmer};
use crate::tokenizer;

/// What to do with words that contain non-ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonAsciiPolicy {
    /// Fail with [`StemError::NonAscii`].
    #[default]
    Reject,
    /// Return the word lowercased but otherwise untouched.
    Skip,
    /// Run the rules over the raw UTF-8 bytes. Non-ASCII bytes count as
    /// consonants.
    Stem,
}

impl NonAsciiPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            NonAsciiPolicy::Reject => "reject",
            NonAsciiPolicy::Skip => "skip",
            NonAsciiPolicy::Stem => "stem",
        }
    }
}

impl fmt::Display for NonAsciiPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NonAsciiPolicy {
    type Err = StemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(NonAsciiPolicy::Reject),
            "skip" => Ok(NonAsciiPolicy::Skip),
            "stem" => Ok(NonAsciiPolicy::Stem),
            _ => Err(StemError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Options controlling how the handle stems words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemOptions {
    /// Handling of words with non-ASCII characters.
    pub non_ascii: NonAsciiPolicy,

    /// Re-apply the input's case pattern to the stem ("Running" -> "Run",
    /// "RUNNING" -> "RUN"). When false, stems are lowercase.
    pub keep_case: bool,

    /// Words shorter than this many bytes are lowercased but not stemmed.
    pub min_word_length: usize,

    /// Maximum number of cached stems. 0 disables the cache.
    pub cache_capacity: usize,
}

impl Default for StemOptions {
    fn default() -> Self {
        Self {
            non_ascii: NonAsciiPolicy::Reject,
            keep_case: false,
            min_word_length: MIN_STEM_LEN,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Top-level handle for stemming words and text.
pub struct StemHandle {
    stemmer: PorterStemmer,
    options: StemOptions,
    cache: RefCell<StemCache>,
}

impl StemHandle {
    /// Create a handle with default options.
    pub fn new() -> Self {
        Self::with_options(StemOptions::default())
    }

    pub fn with_options(options: StemOptions) -> Self {
        Self {
            stemmer: PorterStemmer,
            options,
            cache: RefCell::new(StemCache::new(options.cache_capacity)),
        }
    }

    pub fn options(&self) -> &StemOptions {
        &self.options
    }

    // =========================================================================
    // Stemming
    // =========================================================================

    /// Stem a single word.
    ///
    /// The word is ASCII-folded before stemming. Non-ASCII words are handled
    /// according to the non-ASCII policy.
    pub fn stem(&self, word: &str) -> Result<String, StemError> {
        if word.is_empty() {
            return Ok(String::new());
        }

        let stem = match first_non_ascii(word) {
            None => self.stem_ascii(&word.to_ascii_lowercase())?,
            Some((pos, ch)) => match self.options.non_ascii {
                NonAsciiPolicy::Reject => return Err(StemError::NonAscii { pos, ch }),
                NonAsciiPolicy::Skip => word.to_lowercase(),
                NonAsciiPolicy::Stem => self.stem_raw(word)?,
            },
        };
        tracing::trace!(word, stem = %stem, "stemmed");

        if self.options.keep_case {
            Ok(apply_case(&stem, detect_case(word)))
        } else {
            Ok(stem)
        }
    }

    /// Stem every word of a list, stopping at the first failure.
    pub fn stem_words<I>(&self, words: I) -> Result<Vec<String>, StemError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        words.into_iter().map(|w| self.stem(w.as_ref())).collect()
    }

    /// Tokenize text into a list of tokens.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text)
    }

    /// Stem every word token of a text.
    ///
    /// Returns the word tokens in text order, each paired with its stem.
    /// Fails on the first word that cannot be stemmed, so under
    /// [`NonAsciiPolicy::Reject`] one non-ASCII word fails the whole text.
    /// Use [`NonAsciiPolicy::Skip`] to keep such words unstemmed instead.
    pub fn stem_text(&self, text: &str) -> Result<Vec<StemmedToken>, StemError> {
        tokenizer::words(text)
            .map(|token| {
                let stem = self.stem(&token.text)?;
                Ok(StemmedToken::new(token, stem))
            })
            .collect()
    }

    fn stem_ascii(&self, folded: &str) -> Result<String, StemError> {
        if folded.len() < self.options.min_word_length {
            return Ok(folded.to_string());
        }
        self.cache
            .borrow_mut()
            .stem_with_cache(folded, &self.stemmer)
    }

    fn stem_raw(&self, word: &str) -> Result<String, StemError> {
        let folded = word.to_ascii_lowercase();
        if folded.len() < self.options.min_word_length {
            return Ok(folded);
        }
        self.stemmer.stem_folded(&folded)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set how words with non-ASCII characters are handled.
    pub fn set_non_ascii_policy(&mut self, value: NonAsciiPolicy) {
        self.options.non_ascii = value;
    }

    /// Set whether stems keep the case pattern of their input words.
    pub fn set_keep_case(&mut self, value: bool) {
        self.options.keep_case = value;
    }

    /// Set the minimum word length (in bytes) for stemming.
    ///
    /// Values below the engine's own threshold have no further effect: words
    /// of one or two letters are never changed.
    pub fn set_min_word_length(&mut self, value: usize) {
        self.options.min_word_length = value;
    }

    /// Set the cache capacity. 0 disables the cache.
    pub fn set_cache_capacity(&mut self, value: usize) {
        self.options.cache_capacity = value;
        self.cache.get_mut().set_capacity(value);
    }

    /// Number of stems currently cached.
    pub fn cached_stems(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for StemHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_single_words() {
        let handle = StemHandle::new();
        assert_eq!(handle.stem("running").unwrap(), "run");
        assert_eq!(handle.stem("Generalizations").unwrap(), "gener");
        assert_eq!(handle.stem("").unwrap(), "");
        assert_eq!(handle.stem("is").unwrap(), "is");
    }

    #[test]
    fn rejects_non_ascii_by_default() {
        let handle = StemHandle::new();
        match handle.stem("na\u{00EF}ve") {
            Err(StemError::NonAscii { pos, ch }) => {
                assert_eq!(pos, 2);
                assert_eq!(ch, '\u{00EF}');
            }
            other => panic!("expected NonAscii, got {other:?}"),
        }
    }

    #[test]
    fn skip_policy_lowercases_only() {
        let mut handle = StemHandle::new();
        handle.set_non_ascii_policy(NonAsciiPolicy::Skip);
        assert_eq!(handle.stem("Caf\u{00C9}S").unwrap(), "caf\u{00E9}s");
    }

    #[test]
    fn stem_policy_runs_over_bytes() {
        let mut handle = StemHandle::new();
        handle.set_non_ascii_policy(NonAsciiPolicy::Stem);
        assert_eq!(handle.stem("caf\u{00E9}s").unwrap(), "caf\u{00E9}");
    }

    #[test]
    fn stem_policy_reports_split_characters() {
        let mut handle = StemHandle::new();
        handle.set_non_ascii_policy(NonAsciiPolicy::Stem);
        // U+2082 ends in two identical bytes, which stage 1 treats as a
        // doubled consonant and halves
        assert!(matches!(
            handle.stem("a\u{2082}ing"),
            Err(StemError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn keep_case() {
        let mut handle = StemHandle::new();
        handle.set_keep_case(true);
        assert_eq!(handle.stem("Running").unwrap(), "Run");
        assert_eq!(handle.stem("PONIES").unwrap(), "PONI");
        assert_eq!(handle.stem("cats").unwrap(), "cat");
    }

    #[test]
    fn min_word_length() {
        let mut handle = StemHandle::new();
        handle.set_min_word_length(6);
        assert_eq!(handle.stem("Cats").unwrap(), "cats");
        assert_eq!(handle.stem("ponies").unwrap(), "poni");
    }

    #[test]
    fn stem_words_list() {
        let handle = StemHandle::new();
        let stems = handle.stem_words(["caresses", "ponies", "cats"]).unwrap();
        assert_eq!(stems, vec!["caress", "poni", "cat"]);
        assert!(handle.stem_words(["cats", "\u{00FC}ber"]).is_err());
    }

    #[test]
    fn stem_text_pairs_tokens() {
        let handle = StemHandle::new();
        let stemmed = handle.stem_text("Running dogs, hopping cats.").unwrap();
        let pairs: Vec<(&str, &str, usize)> = stemmed
            .iter()
            .map(|t| (t.text.as_str(), t.stem.as_str(), t.pos))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Running", "run", 0),
                ("dogs", "dog", 8),
                ("hopping", "hop", 14),
                ("cats", "cat", 22),
            ]
        );
    }

    #[test]
    fn stem_text_non_ascii_word_follows_policy() {
        let mut handle = StemHandle::new();
        assert!(matches!(
            handle.stem_text("The caf\u{00E9} opened"),
            Err(StemError::NonAscii { ch: '\u{00E9}', .. })
        ));

        handle.set_non_ascii_policy(NonAsciiPolicy::Skip);
        let stems: Vec<String> = handle
            .stem_text("The caf\u{00E9} opened")
            .unwrap()
            .into_iter()
            .map(|t| t.stem)
            .collect();
        assert_eq!(stems, vec!["the", "caf\u{00E9}", "open"]);
    }

    #[test]
    fn tokens_include_punctuation() {
        let handle = StemHandle::new();
        let tokens = handle.tokens("cats, dogs");
        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].is_word());
        assert!(!tokens[1].is_word());
    }

    #[test]
    fn cache_fills_and_can_be_disabled() {
        let mut handle = StemHandle::new();
        handle.stem("running").unwrap();
        handle.stem("running").unwrap();
        assert_eq!(handle.cached_stems(), 1);

        handle.set_cache_capacity(0);
        assert_eq!(handle.cached_stems(), 0);
        assert_eq!(handle.stem("running").unwrap(), "run");
        assert_eq!(handle.cached_stems(), 0);
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("skip".parse::<NonAsciiPolicy>().unwrap(), NonAsciiPolicy::Skip);
        assert_eq!("STEM".parse::<NonAsciiPolicy>().unwrap(), NonAsciiPolicy::Stem);
        assert!(matches!(
            "maybe".parse::<NonAsciiPolicy>(),
            Err(StemError::UnknownPolicy(s)) if s == "maybe"
        ));
        assert_eq!(NonAsciiPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn default_options() {
        let opts = StemOptions::default();
        assert_eq!(opts.non_ascii, NonAsciiPolicy::Reject);
        assert!(!opts.keep_case);
        assert_eq!(opts.min_word_length, 3);
        assert_eq!(opts.cache_capacity, 4096);
    }

    #[test]
    fn version_is_set() {
        assert!(!StemHandle::get_version().is_empty());
    }
}
