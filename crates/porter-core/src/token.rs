// Token types shared by the tokenizer, the handle and the bindings.

// ---------------------------------------------------------------------------
// TokenType
// ---------------------------------------------------------------------------

/// Token types for string tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text or error.
    None,
    /// Word token.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Character that is neither a letter, digit, whitespace nor punctuation.
    Unknown,
}

impl TokenType {
    /// Stable name used by the CLI and the WASM bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::None => "None",
            TokenType::Word => "Word",
            TokenType::Punctuation => "Punctuation",
            TokenType::Whitespace => "Whitespace",
            TokenType::Unknown => "Unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A text token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Whether this token is a word.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

// ---------------------------------------------------------------------------
// StemmedToken
// ---------------------------------------------------------------------------

/// A word token together with its stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemmedToken {
    /// The word as it appeared in the text.
    pub text: String,

    /// The stem of the word.
    pub stem: String,

    /// Position of the word within the text (character offset).
    pub pos: usize,

    /// Length of the original word in characters.
    pub token_len: usize,
}

impl StemmedToken {
    /// Pair a word token with its stem.
    pub fn new(token: Token, stem: String) -> Self {
        Self {
            text: token.text,
            stem,
            pos: token.pos,
            token_len: token.token_len,
        }
    }
}
