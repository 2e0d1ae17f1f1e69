// Bounded word-to-stem cache.
//
// Running text repeats the same few hundred words over and over, so the
// handle memoizes stems. The cache is a plain hash map that is emptied when
// it reaches capacity; there is no eviction order to maintain.

use hashbrown::HashMap;

use crate::StemError;
use crate::stemmer::Stemmer;

/// Longest word (in bytes) that is cached. Longer words are rare enough
/// that caching them only wastes memory.
pub const MAX_CACHED_WORD_LEN: usize = 32;

/// Default number of cached entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// A word-to-stem cache holding at most `capacity` entries.
///
/// Keys are the lowercase words exactly as passed to the stemmer.
#[derive(Debug, Clone)]
pub struct StemCache {
    capacity: usize,
    entries: HashMap<String, String>,
}

impl StemCache {
    /// Create an empty cache. A capacity of 0 disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the stem of a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Store the stem of a word.
    ///
    /// Empty words and words longer than [`MAX_CACHED_WORD_LEN`] are
    /// ignored. When the cache is full it is cleared first.
    pub fn insert(&mut self, word: &str, stem: &str) {
        if self.capacity == 0 || word.is_empty() || word.len() > MAX_CACHED_WORD_LEN {
            return;
        }
        if self.entries.len() >= self.capacity && !self.entries.contains_key(word) {
            tracing::debug!(entries = self.entries.len(), "stem cache full, clearing");
            self.entries.clear();
        }
        self.entries.insert(word.to_string(), stem.to_string());
    }

    /// Change the capacity. Shrinking below the current size clears the
    /// cache.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        if self.entries.len() > capacity {
            self.entries.clear();
        }
    }

    /// Look up a lowercased word, stemming it on a miss.
    ///
    /// Failed stems are not cached.
    pub fn stem_with_cache(
        &mut self,
        word: &str,
        stemmer: &dyn Stemmer,
    ) -> Result<String, StemError> {
        if let Some(stem) = self.get(word) {
            return Ok(stem.to_string());
        }
        let stem = stemmer.stem_folded(word)?;
        self.insert(word, &stem);
        Ok(stem)
    }
}

impl Default for StemCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
