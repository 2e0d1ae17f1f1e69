// Character classification for English text.
//
// The stemming engine looks at single ASCII bytes, the tokenizer looks at
// `char`s. Both views live here so they agree on what a letter is.

// ---------------------------------------------------------------------------
// English letter constants
// ---------------------------------------------------------------------------

/// Letters that are always vowels. `y` depends on its neighbour and is
/// resolved by the stemmer itself.
const ENGLISH_VOWELS: &[u8] = b"aeiou";

/// Check whether a byte is one of `a e i o u`.
///
/// Uppercase letters are not vowels here: the engine only ever sees
/// lowercase input.
pub fn is_fixed_vowel(b: u8) -> bool {
    ENGLISH_VOWELS.contains(&b)
}

/// Find the first non-ASCII character of a word.
///
/// Returns the character offset and the character itself.
pub fn first_non_ascii(word: &str) -> Option<(usize, char)> {
    word.chars().enumerate().find(|(_, c)| !c.is_ascii())
}

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are recognized across Unicode so that non-English words still
/// come out of the tokenizer as whole words; whether they get stemmed is
/// decided later.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character can act as an apostrophe inside a word
/// ("don't", "o'clock").
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_vowels() {
        for b in *b"aeiou" {
            assert!(is_fixed_vowel(b));
        }
        assert!(!is_fixed_vowel(b'y'));
        assert!(!is_fixed_vowel(b'b'));
        assert!(!is_fixed_vowel(b'A'));
        assert!(!is_fixed_vowel(0xC3));
    }

    #[test]
    fn first_non_ascii_position() {
        assert_eq!(first_non_ascii("running"), None);
        assert_eq!(first_non_ascii("caf\u{00E9}s"), Some((3, '\u{00E9}')));
        assert_eq!(first_non_ascii("\u{00FC}ber"), Some((0, '\u{00FC}')));
    }

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E9}'), CharType::Letter); // é
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
        assert_eq!(get_char_type('\u{00A0}'), CharType::Whitespace);
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\''), CharType::Punctuation);
        assert_eq!(get_char_type('"'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2014}'), CharType::Punctuation);
    }

    #[test]
    fn char_type_unknown() {
        assert_eq!(get_char_type('@'), CharType::Unknown);
        assert_eq!(get_char_type('#'), CharType::Unknown);
        assert_eq!(get_char_type('+'), CharType::Unknown);
    }

    #[test]
    fn apostrophes() {
        assert!(is_apostrophe('\''));
        assert!(is_apostrophe('\u{2019}'));
        assert!(!is_apostrophe('"'));
    }
}
