// Case detection, folding and restoring.
//
// Stems are computed on lowercase ASCII. Callers that want to show stems in
// the shape of the input word ("Running" -> "Run") detect the case pattern
// before folding and re-apply it afterwards.

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "running".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Running".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "iPhones".
    Complex,
    /// All letters are uppercase: "RUNNING".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters are ignored when determining the pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if first.is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if first.is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Fold ASCII `A-Z` to lowercase in place. Other bytes are left alone.
pub fn fold_ascii_lowercase(buf: &mut [u8]) {
    buf.make_ascii_lowercase();
}

/// Return `word` rewritten in the given case pattern.
///
/// - `NoLetters` / `Complex` -- returned unchanged.
/// - `AllLower` -- every letter is lowercased.
/// - `AllUpper` -- every letter is uppercased.
/// - `FirstUpper` -- first character is uppercased, rest are lowercased.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        }
    }
}
