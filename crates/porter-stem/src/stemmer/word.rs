// Word buffer and the primitives the stemming stages are built from:
// letter classification, the measure, suffix matching and rewriting.
// Origin: porter.c (ANSI C release 2), cons, m, vowelinstem, doublec, cvc, ends, setto, r

use porter_core::character::is_fixed_vowel;

/// A word being stemmed.
///
/// Borrows the caller's buffer for one stemming call. Only `buf[..len]` is
/// part of the word; bytes past `len` are leftovers from earlier rewrites.
/// `suffix_start` is where the most recently matched suffix begins, so
/// `buf[..suffix_start]` is the stem that the measure and vowel checks look
/// at.
#[derive(Debug)]
pub struct Word<'a> {
    buf: &'a mut [u8],
    len: usize,
    suffix_start: usize,
}

impl<'a> Word<'a> {
    /// Wrap a buffer holding exactly one lowercase word.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let len = buf.len();
        Self {
            buf,
            len,
            suffix_start: 0,
        }
    }

    /// Number of bytes currently making up the word.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The word as it currently stands.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Index at which the last matched suffix begins.
    pub fn suffix_start(&self) -> usize {
        self.suffix_start
    }

    pub fn last(&self) -> Option<u8> {
        self.len.checked_sub(1).map(|i| self.buf[i])
    }

    /// The letter before the last one. Stages 3 and 5 dispatch on it.
    pub fn penultimate(&self) -> Option<u8> {
        self.len.checked_sub(2).map(|i| self.buf[i])
    }

    /// The byte just before the last matched suffix, if the stem is not empty.
    pub fn byte_before_suffix(&self) -> Option<u8> {
        self.suffix_start.checked_sub(1).map(|i| self.buf[i])
    }

    // -----------------------------------------------------------------------
    // Letter classification
    // -----------------------------------------------------------------------

    /// Check whether the letter at `i` is a consonant.
    ///
    /// `a e i o u` are vowels and every other byte is a consonant, except
    /// `y`: it is a consonant at the start of the word or after a vowel, and
    /// a vowel after a consonant ("toy" vs "syzygy"). Positions past the end
    /// of the buffer are not consonants.
    pub fn is_consonant(&self, i: usize) -> bool {
        let Some(&b) = self.buf.get(i) else {
            return false;
        };
        if is_fixed_vowel(b) {
            return false;
        }
        if b != b'y' {
            return true;
        }
        // Inside a run of y's the classification alternates, starting from
        // whatever the letter before the run makes the first one.
        let mut start = i;
        while start > 0 && self.buf[start - 1] == b'y' {
            start -= 1;
        }
        let first_is_consonant = start == 0 || is_fixed_vowel(self.buf[start - 1]);
        first_is_consonant ^ ((i - start) % 2 == 1)
    }

    pub fn is_vowel(&self, i: usize) -> bool {
        !self.is_consonant(i)
    }

    // -----------------------------------------------------------------------
    // Stem shape
    // -----------------------------------------------------------------------

    /// Count the vowel-run/consonant-run pairs in the stem.
    ///
    /// Writing the stem as `[C](VC){m}[V]`:
    ///
    /// ```text
    ///   tr, ee, tree, y, by               m = 0
    ///   trouble, oats, trees, ivy         m = 1
    ///   troubles, private, oaten, orrery  m = 2
    /// ```
    pub fn measure(&self) -> usize {
        let end = self.suffix_start;
        let mut i = 0;
        while i < end && self.is_consonant(i) {
            i += 1;
        }
        let mut n = 0;
        loop {
            while i < end && self.is_vowel(i) {
                i += 1;
            }
            if i >= end {
                return n;
            }
            while i < end && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
        }
    }

    /// Check whether the stem contains a vowel.
    pub fn has_vowel_in_stem(&self) -> bool {
        (0..self.suffix_start).any(|i| self.is_vowel(i))
    }

    /// Check whether positions `i - 1` and `i` hold the same consonant.
    pub fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && i < self.buf.len() && self.buf[i] == self.buf[i - 1] && self.is_consonant(i)
    }

    /// Check whether `i - 2, i - 1, i` is consonant-vowel-consonant with the
    /// last consonant not `w`, `x` or `y`.
    ///
    /// Used to restore an `e` on short words: cav(e), lov(e), hop(e),
    /// crim(e), but not snow, box, tray.
    pub fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.buf[i], b'w' | b'x' | b'y')
    }

    // -----------------------------------------------------------------------
    // Matching and rewriting
    // -----------------------------------------------------------------------

    /// Check whether the word ends with `suffix`.
    ///
    /// On success, `suffix_start` moves to the start of the suffix. On
    /// failure nothing changes. A suffix as long as the whole word matches
    /// with an empty stem.
    pub fn ends_with(&mut self, suffix: &[u8]) -> bool {
        if suffix.len() > self.len || !self.as_bytes().ends_with(suffix) {
            return false;
        }
        self.suffix_start = self.len - suffix.len();
        true
    }

    /// Replace the last matched suffix with `replacement`.
    ///
    /// The replacement must fit in the buffer. Every rule maps a suffix to
    /// something no longer than what the word held at that point.
    pub fn set_to(&mut self, replacement: &[u8]) {
        let end = self.suffix_start + replacement.len();
        debug_assert!(end <= self.buf.len(), "replacement overruns word buffer");
        self.buf[self.suffix_start..end].copy_from_slice(replacement);
        self.len = end;
    }

    /// Replace the last matched suffix, but only when the stem has `m > 0`.
    pub fn replace_if_measure_positive(&mut self, replacement: &[u8]) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    /// Drop the last matched suffix, but only when the stem has `m > 1`.
    pub fn remove_if_measure_exceeds_one(&mut self) {
        if self.measure() > 1 {
            self.len = self.suffix_start;
        }
    }

    /// Drop the last matched suffix unconditionally.
    pub fn remove_suffix(&mut self) {
        self.len = self.suffix_start;
    }

    /// Shorten the word by `n` bytes.
    pub fn chop(&mut self, n: usize) {
        debug_assert!(n <= self.len);
        self.len -= n;
    }

    /// Treat the whole word as the stem for the following checks.
    pub fn select_whole_word(&mut self) {
        self.suffix_start = self.len;
    }

    /// Overwrite the last letter.
    pub fn set_last(&mut self, b: u8) {
        if let Some(i) = self.len.checked_sub(1) {
            self.buf[i] = b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(buf: &mut [u8]) -> Word<'_> {
        let mut w = Word::new(buf);
        w.select_whole_word();
        w
    }

    // -- classification --

    #[test]
    fn fixed_vowels_and_consonants() {
        let mut buf = *b"bake";
        let w = Word::new(&mut buf);
        assert!(w.is_consonant(0));
        assert!(w.is_vowel(1));
        assert!(w.is_consonant(2));
        assert!(w.is_vowel(3));
    }

    #[test]
    fn y_at_start_is_consonant() {
        let mut buf = *b"yes";
        let w = Word::new(&mut buf);
        assert!(w.is_consonant(0));
    }

    #[test]
    fn y_after_vowel_is_consonant() {
        let mut buf = *b"toy";
        let w = Word::new(&mut buf);
        assert!(w.is_consonant(2));
    }

    #[test]
    fn y_after_consonant_is_vowel() {
        let mut buf = *b"happy";
        let w = Word::new(&mut buf);
        assert!(w.is_vowel(4));
    }

    #[test]
    fn y_runs_alternate() {
        // s(c) y(v) z(c) y(v) g(c) y(v)
        let mut buf = *b"syzygy";
        let w = Word::new(&mut buf);
        let pattern: Vec<bool> = (0..6).map(|i| w.is_consonant(i)).collect();
        assert_eq!(pattern, [true, false, true, false, true, false]);

        // a(v) y(c) y(v) y(c)
        let mut buf = *b"ayyy";
        let w = Word::new(&mut buf);
        let pattern: Vec<bool> = (0..4).map(|i| w.is_consonant(i)).collect();
        assert_eq!(pattern, [false, true, false, true]);

        // y(c) y(v) at the start
        let mut buf = *b"yy";
        let w = Word::new(&mut buf);
        assert!(w.is_consonant(0));
        assert!(w.is_vowel(1));
    }

    #[test]
    fn out_of_range_is_not_consonant() {
        let mut buf = *b"cat";
        let w = Word::new(&mut buf);
        assert!(!w.is_consonant(3));
        assert!(!w.is_consonant(100));
        assert!(w.is_vowel(3));
    }

    #[test]
    fn high_bytes_are_consonants() {
        let mut buf = "caf\u{00E9}".as_bytes().to_vec();
        let w = Word::new(&mut buf);
        assert!(w.is_consonant(3));
        assert!(w.is_consonant(4));
    }

    // -- measure --

    fn measure_of(word: &str) -> usize {
        let mut buf = word.as_bytes().to_vec();
        whole(&mut buf).measure()
    }

    #[test]
    fn measure_zero() {
        for word in ["tr", "ee", "tree", "y", "by", ""] {
            assert_eq!(measure_of(word), 0, "{word}");
        }
    }

    #[test]
    fn measure_one() {
        for word in ["trouble", "oats", "trees", "ivy"] {
            assert_eq!(measure_of(word), 1, "{word}");
        }
    }

    #[test]
    fn measure_two() {
        for word in ["troubles", "private", "oaten", "orrery"] {
            assert_eq!(measure_of(word), 2, "{word}");
        }
    }

    #[test]
    fn measure_only_covers_stem() {
        let mut buf = *b"relational";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ational"));
        // stem is "rel"
        assert_eq!(w.measure(), 1);
    }

    // -- vowel in stem --

    #[test]
    fn vowel_in_stem() {
        let mut buf = *b"plastered";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ed"));
        assert!(w.has_vowel_in_stem());

        let mut buf = *b"sky";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"y"));
        assert!(!w.has_vowel_in_stem());
    }

    #[test]
    fn vowel_in_stem_scans_last_stem_letter() {
        // stem "cra" ends in the only vowel
        let mut buf = *b"craing";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ing"));
        assert!(w.has_vowel_in_stem());
    }

    // -- double consonant / cvc --

    #[test]
    fn double_consonants() {
        let mut buf = *b"fall";
        let w = Word::new(&mut buf);
        assert!(w.double_consonant(3));
        assert!(!w.double_consonant(2));
        assert!(!w.double_consonant(0));

        let mut buf = *b"free";
        let w = Word::new(&mut buf);
        assert!(!w.double_consonant(3));
    }

    #[test]
    fn cvc_pattern() {
        for (word, expected) in [
            ("hop", true),
            ("cav", true),
            ("crim", true),
            ("snow", false),
            ("box", false),
            ("tray", false),
            ("fail", false),
            ("ho", false),
        ] {
            let mut buf = word.as_bytes().to_vec();
            let w = Word::new(&mut buf);
            let last = word.len() - 1;
            assert_eq!(w.cvc(last), expected, "{word}");
        }
    }

    // -- matching and rewriting --

    #[test]
    fn ends_with_sets_suffix_start() {
        let mut buf = *b"ponies";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ies"));
        assert_eq!(w.suffix_start(), 3);
    }

    #[test]
    fn failed_match_keeps_suffix_start() {
        let mut buf = *b"ponies";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"s"));
        assert!(!w.ends_with(b"sses"));
        assert_eq!(w.suffix_start(), 5);
    }

    #[test]
    fn suffix_as_long_as_word_matches() {
        let mut buf = *b"ies";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ies"));
        assert_eq!(w.suffix_start(), 0);
        assert!(!w.ends_with(b"ties"));
    }

    #[test]
    fn set_to_rewrites_in_place() {
        let mut buf = *b"ponies";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ies"));
        w.set_to(b"i");
        assert_eq!(w.as_bytes(), b"poni");
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn guarded_replace_needs_measure() {
        let mut buf = *b"rational";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ational"));
        w.replace_if_measure_positive(b"ate");
        assert_eq!(w.as_bytes(), b"rational");

        let mut buf = *b"relational";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"ational"));
        w.replace_if_measure_positive(b"ate");
        assert_eq!(w.as_bytes(), b"relate");
    }

    #[test]
    fn removal_needs_measure_above_one() {
        let mut buf = *b"revival";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"al"));
        w.remove_if_measure_exceeds_one();
        assert_eq!(w.as_bytes(), b"reviv");

        let mut buf = *b"plaster";
        let mut w = Word::new(&mut buf);
        assert!(w.ends_with(b"er"));
        w.remove_if_measure_exceeds_one();
        assert_eq!(w.as_bytes(), b"plaster");
    }

    #[test]
    fn set_last_and_chop() {
        let mut buf = *b"happy";
        let mut w = Word::new(&mut buf);
        w.set_last(b'i');
        assert_eq!(w.as_bytes(), b"happi");
        w.chop(2);
        assert_eq!(w.as_bytes(), b"hap");
        assert_eq!(w.last(), Some(b'p'));
        assert_eq!(w.penultimate(), Some(b'a'));
    }
}
