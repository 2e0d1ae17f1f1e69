// Tokenizer for running English text.
//
// Splits text into words, whitespace runs, punctuation and unknown
// characters. Positions and lengths are counted in characters.

use porter_core::character::{CharType, get_char_type, is_apostrophe};
use porter_core::token::{Token, TokenType};

/// Length of the word starting at the beginning of `text`.
///
/// A word is a run of letters and digits. An apostrophe stays inside the
/// word when it sits between two letters ("don't", "o'clock"); a trailing or
/// leading one does not ("dogs'").
fn word_length(text: &[char]) -> usize {
    let textlen = text.len();
    let mut wlen = 0;

    while wlen < textlen {
        match get_char_type(text[wlen]) {
            CharType::Letter | CharType::Digit => wlen += 1,
            CharType::Punctuation if is_apostrophe(text[wlen]) => {
                let after_letter = wlen > 0 && get_char_type(text[wlen - 1]) == CharType::Letter;
                let before_letter = text
                    .get(wlen + 1)
                    .is_some_and(|&c| get_char_type(c) == CharType::Letter);
                if !(after_letter && before_letter) {
                    return wlen;
                }
                wlen += 1;
            }
            _ => return wlen,
        }
    }
    textlen
}

/// Find the next token starting at `pos`.
///
/// Returns `(TokenType, token_length)`; the caller advances `pos` by the
/// length. At the end of the text the result is `(TokenType::None, 0)`.
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize) {
    let Some(slice) = text.get(pos..).filter(|s| !s.is_empty()) else {
        return (TokenType::None, 0);
    };
    let remaining = slice.len();

    match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit => (TokenType::Word, word_length(slice)),
        CharType::Whitespace => {
            let mut i = 1;
            while i < remaining && get_char_type(slice[i]) == CharType::Whitespace {
                i += 1;
            }
            (TokenType::Whitespace, i)
        }
        CharType::Punctuation => {
            if remaining >= 3 && slice[..3] == ['.', '.', '.'] {
                return (TokenType::Punctuation, 3);
            }
            (TokenType::Punctuation, 1)
        }
        CharType::Unknown => (TokenType::Unknown, 1),
    }
}

/// Split `text` into tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        let (token_type, len) = next_token(&chars, pos);
        if token_type == TokenType::None || len == 0 {
            break;
        }
        let token_text: String = chars[pos..pos + len].iter().collect();
        tokens.push(Token::new(token_type, token_text, pos));
        pos += len;
    }
    tokens
}

/// Iterate over just the word tokens of `text`.
pub fn words(text: &str) -> impl Iterator<Item = Token> {
    tokenize(text).into_iter().filter(Token::is_word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(s: &str) -> (TokenType, usize) {
        let chars: Vec<char> = s.chars().collect();
        next_token(&chars, 0)
    }

    fn tokenize_all(s: &str) -> Vec<(TokenType, String)> {
        tokenize(s)
            .into_iter()
            .map(|t| (t.token_type, t.text))
            .collect()
    }

    #[test]
    fn empty_text_returns_none() {
        assert_eq!(tok(""), (TokenType::None, 0));
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn single_tokens() {
        assert_eq!(tok("a"), (TokenType::Word, 1));
        assert_eq!(tok("5"), (TokenType::Word, 1));
        assert_eq!(tok(" "), (TokenType::Whitespace, 1));
        assert_eq!(tok("."), (TokenType::Punctuation, 1));
        assert_eq!(tok("@"), (TokenType::Unknown, 1));
    }

    #[test]
    fn words_and_digits() {
        assert_eq!(tok("running"), (TokenType::Word, 7));
        assert_eq!(tok("mp3s"), (TokenType::Word, 4));
        assert_eq!(tok("caf\u{00E9}"), (TokenType::Word, 4));
    }

    #[test]
    fn whitespace_run() {
        assert_eq!(tok(" \t\n x"), (TokenType::Whitespace, 4));
    }

    #[test]
    fn ellipsis_is_one_token() {
        assert_eq!(tok("...and"), (TokenType::Punctuation, 3));
        assert_eq!(tok("..x"), (TokenType::Punctuation, 1));
    }

    #[test]
    fn apostrophe_between_letters() {
        assert_eq!(tok("don't"), (TokenType::Word, 5));
        assert_eq!(tok("o\u{2019}clock"), (TokenType::Word, 7));
    }

    #[test]
    fn apostrophe_at_edges_splits() {
        assert_eq!(tok("dogs'"), (TokenType::Word, 4));
        assert_eq!(tok("'tis"), (TokenType::Punctuation, 1));
        assert_eq!(tok("90's"), (TokenType::Word, 2));
    }

    #[test]
    fn sentence() {
        let tokens = tokenize("Running dogs, don't stop.");
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![0, 7, 8, 12, 13, 14, 19, 20, 24]);
        assert_eq!(tokens[5].text, "don't");
        assert_eq!(tokens[5].token_type, TokenType::Word);
        assert_eq!(tokens[8].token_type, TokenType::Punctuation);
    }

    #[test]
    fn word_then_period() {
        assert_eq!(
            tokenize_all("cats."),
            vec![
                (TokenType::Word, "cats".to_string()),
                (TokenType::Punctuation, ".".to_string()),
            ]
        );
    }

    #[test]
    fn positions_count_chars() {
        let tokens = tokenize("\u{00FC}ber cats");
        assert_eq!(tokens[2].pos, 5);
        assert_eq!(tokens[2].text, "cats");
    }

    #[test]
    fn words_filter() {
        let w: Vec<String> = words("the cats, the dogs!").map(|t| t.text).collect();
        assert_eq!(w, vec!["the", "cats", "the", "dogs"]);
    }

    #[test]
    fn next_token_past_end() {
        let chars: Vec<char> = "ab".chars().collect();
        assert_eq!(next_token(&chars, 2), (TokenType::None, 0));
        assert_eq!(next_token(&chars, 5), (TokenType::None, 0));
    }
}
