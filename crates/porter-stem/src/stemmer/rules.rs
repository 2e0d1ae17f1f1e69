// Suffix tables for stages 3, 4 and 5.
//
// Each table is grouped by the filter letter the stage dispatches on, and
// within a group the order is the order in which suffixes are tried. The
// first suffix that matches ends the stage, whether or not its guard then
// lets the rewrite happen.

/// A suffix and the text that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static [u8],
    pub replacement: &'static [u8],
}

const fn rule(suffix: &'static [u8], replacement: &'static [u8]) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
    }
}

/// Extra condition a stage-5 suffix must satisfy besides matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixContext {
    Any,
    /// The stem must end in `s` or `t` (`-sion`, `-tion`).
    AfterSOrT,
}

/// A suffix that stage 5 removes outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimRule {
    pub suffix: &'static [u8],
    pub context: SuffixContext,
}

const fn trim(suffix: &'static [u8]) -> TrimRule {
    TrimRule {
        suffix,
        context: SuffixContext::Any,
    }
}

// ---------------------------------------------------------------------------
// Stage 3: double suffixes, keyed by the penultimate letter
// ---------------------------------------------------------------------------

static DOUBLE_A: &[SuffixRule] = &[rule(b"ational", b"ate"), rule(b"tional", b"tion")];
static DOUBLE_C: &[SuffixRule] = &[rule(b"enci", b"ence"), rule(b"anci", b"ance")];
static DOUBLE_E: &[SuffixRule] = &[rule(b"izer", b"ize")];
static DOUBLE_L: &[SuffixRule] = &[
    rule(b"bli", b"ble"),
    rule(b"alli", b"al"),
    rule(b"entli", b"ent"),
    rule(b"eli", b"e"),
    rule(b"ousli", b"ous"),
];
static DOUBLE_O: &[SuffixRule] = &[
    rule(b"ization", b"ize"),
    rule(b"ation", b"ate"),
    rule(b"ator", b"ate"),
];
static DOUBLE_S: &[SuffixRule] = &[
    rule(b"alism", b"al"),
    rule(b"iveness", b"ive"),
    rule(b"fulness", b"ful"),
    rule(b"ousness", b"ous"),
];
static DOUBLE_T: &[SuffixRule] = &[
    rule(b"aliti", b"al"),
    rule(b"iviti", b"ive"),
    rule(b"biliti", b"ble"),
];
static DOUBLE_G: &[SuffixRule] = &[rule(b"logi", b"log")];

/// Stage 3 rules for words whose penultimate letter is `filter`.
pub fn double_suffix_rules(filter: u8) -> &'static [SuffixRule] {
    match filter {
        b'a' => DOUBLE_A,
        b'c' => DOUBLE_C,
        b'e' => DOUBLE_E,
        b'l' => DOUBLE_L,
        b'o' => DOUBLE_O,
        b's' => DOUBLE_S,
        b't' => DOUBLE_T,
        b'g' => DOUBLE_G,
        _ => &[],
    }
}

// ---------------------------------------------------------------------------
// Stage 4: single suffixes, keyed by the last letter
// ---------------------------------------------------------------------------

static SINGLE_E: &[SuffixRule] = &[
    rule(b"icate", b"ic"),
    rule(b"ative", b""),
    rule(b"alize", b"al"),
];
static SINGLE_I: &[SuffixRule] = &[rule(b"iciti", b"ic")];
static SINGLE_L: &[SuffixRule] = &[rule(b"ical", b"ic"), rule(b"ful", b"")];
static SINGLE_S: &[SuffixRule] = &[rule(b"ness", b"")];

/// Stage 4 rules for words whose last letter is `filter`.
pub fn single_suffix_rules(filter: u8) -> &'static [SuffixRule] {
    match filter {
        b'e' => SINGLE_E,
        b'i' => SINGLE_I,
        b'l' => SINGLE_L,
        b's' => SINGLE_S,
        _ => &[],
    }
}

// ---------------------------------------------------------------------------
// Stage 5: removable suffixes, keyed by the penultimate letter
// ---------------------------------------------------------------------------

static TRIM_A: &[TrimRule] = &[trim(b"al")];
static TRIM_C: &[TrimRule] = &[trim(b"ance"), trim(b"ence")];
static TRIM_E: &[TrimRule] = &[trim(b"er")];
static TRIM_I: &[TrimRule] = &[trim(b"ic")];
static TRIM_L: &[TrimRule] = &[trim(b"able"), trim(b"ible")];
static TRIM_N: &[TrimRule] = &[trim(b"ant"), trim(b"ement"), trim(b"ment"), trim(b"ent")];
static TRIM_O: &[TrimRule] = &[
    TrimRule {
        suffix: b"ion",
        context: SuffixContext::AfterSOrT,
    },
    trim(b"ou"),
];
static TRIM_S: &[TrimRule] = &[trim(b"ism")];
static TRIM_T: &[TrimRule] = &[trim(b"ate"), trim(b"iti")];
static TRIM_U: &[TrimRule] = &[trim(b"ous")];
static TRIM_V: &[TrimRule] = &[trim(b"ive")];
static TRIM_Z: &[TrimRule] = &[trim(b"ize")];

/// Stage 5 suffixes for words whose penultimate letter is `filter`.
pub fn trim_rules(filter: u8) -> &'static [TrimRule] {
    match filter {
        b'a' => TRIM_A,
        b'c' => TRIM_C,
        b'e' => TRIM_E,
        b'i' => TRIM_I,
        b'l' => TRIM_L,
        b'n' => TRIM_N,
        b'o' => TRIM_O,
        b's' => TRIM_S,
        b't' => TRIM_T,
        b'u' => TRIM_U,
        b'v' => TRIM_V,
        b'z' => TRIM_Z,
        _ => &[],
    }
}
