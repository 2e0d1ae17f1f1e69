// WASM bindings for the Porter stemmer.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen that wraps the
// `StemHandle` from porter-stem. Token lists are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const stemmer = new WasmStemmer();
//   stemmer.stem("running");               // => "run"
//   stemmer.stemWords(["cats", "ponies"]);  // => ["cat", "poni"]
//   stemmer.stemText("Dogs barked.");      // => [{ text: "Dogs", stem: "dog", pos: 0, tokenLen: 4 }, ...]
//   stemmer.tokens("Dogs barked.");        // => [{ tokenType: "Word", ... }, ...]
//   stemmer.setKeepCase(true);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use porter_core::token::{StemmedToken, Token};
use porter_stem::StemError;
use porter_stem::handle::{NonAsciiPolicy, StemHandle};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: &'static str,
    text: String,
    token_len: usize,
    pos: usize,
}

impl From<Token> for JsToken {
    fn from(t: Token) -> Self {
        JsToken {
            token_type: t.token_type.as_str(),
            text: t.text,
            token_len: t.token_len,
            pos: t.pos,
        }
    }
}

/// Serializable representation of a stemmed word.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStemmedWord {
    text: String,
    stem: String,
    pos: usize,
    token_len: usize,
}

impl From<StemmedToken> for JsStemmedWord {
    fn from(t: StemmedToken) -> Self {
        JsStemmedWord {
            text: t.text,
            stem: t.stem,
            pos: t.pos,
            token_len: t.token_len,
        }
    }
}

fn stem_error_to_js(e: StemError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmStemmer
// ============================================================================

/// Porter stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    handle: StemHandle,
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a stemmer with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmStemmer {
        WasmStemmer {
            handle: StemHandle::new(),
        }
    }

    /// Stem a single word.
    pub fn stem(&self, word: &str) -> Result<String, JsError> {
        self.handle.stem(word).map_err(stem_error_to_js)
    }

    /// Stem every word of an array. Fails on the first word that cannot be
    /// stemmed.
    #[wasm_bindgen(js_name = "stemWords")]
    pub fn stem_words(&self, words: Vec<String>) -> Result<Vec<String>, JsError> {
        self.handle.stem_words(&words).map_err(stem_error_to_js)
    }

    /// Tokenize a text and stem its words.
    ///
    /// Returns a JavaScript array of objects with fields `text`, `stem`,
    /// `pos` and `tokenLen`. Throws on the first word that cannot be
    /// stemmed; with the default "reject" policy that includes any
    /// non-ASCII word, so call `setNonAsciiPolicy("skip")` for mixed text.
    #[wasm_bindgen(js_name = "stemText")]
    pub fn stem_text(&self, text: &str) -> Result<JsValue, JsError> {
        let words: Vec<JsStemmedWord> = self
            .handle
            .stem_text(text)
            .map_err(stem_error_to_js)?
            .into_iter()
            .map(JsStemmedWord::from)
            .collect();
        serde_wasm_bindgen::to_value(&words).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Tokenize text into a list of tokens.
    ///
    /// Returns a JavaScript array of token objects with fields:
    /// `tokenType` ("Word", "Punctuation", "Whitespace", "Unknown"),
    /// `text`, `tokenLen`, `pos`.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsToken> = self
            .handle
            .tokens(text)
            .into_iter()
            .map(JsToken::from)
            .collect();
        serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Return the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        StemHandle::get_version().to_string()
    }

    // ========================================================================
    // Option setters
    // ========================================================================

    #[wasm_bindgen(js_name = "setKeepCase")]
    pub fn set_keep_case(&mut self, value: bool) {
        self.handle.set_keep_case(value);
    }

    /// Set the non-ASCII policy: "reject", "skip" or "stem".
    #[wasm_bindgen(js_name = "setNonAsciiPolicy")]
    pub fn set_non_ascii_policy(&mut self, policy: &str) -> Result<(), JsError> {
        let policy: NonAsciiPolicy = policy.parse().map_err(stem_error_to_js)?;
        self.handle.set_non_ascii_policy(policy);
        Ok(())
    }

    #[wasm_bindgen(js_name = "setMinWordLength")]
    pub fn set_min_word_length(&mut self, value: usize) {
        self.handle.set_min_word_length(value);
    }

    #[wasm_bindgen(js_name = "setCacheCapacity")]
    pub fn set_cache_capacity(&mut self, value: usize) {
        self.handle.set_cache_capacity(value);
    }
}

impl Default for WasmStemmer {
    fn default() -> Self {
        Self::new()
    }
}
