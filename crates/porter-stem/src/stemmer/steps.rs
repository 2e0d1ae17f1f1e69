// The six rewrite stages, in the order they run.
// Origin: porter.c (ANSI C release 2), step1ab, step1c, step2, step3, step4, step5
//
// Every stage is entered unconditionally and no-ops when its trigger does
// not match. None of them ever grows the word past its original length.

use super::rules::{
    SuffixContext, TrimRule, double_suffix_rules, single_suffix_rules, trim_rules,
};
use super::word::Word;

impl Word<'_> {
    /// Run all stages in order.
    pub fn apply_stages(&mut self) {
        self.strip_plural();
        self.strip_verb_ending();
        self.terminal_y_to_i();
        self.collapse_double_suffix();
        self.collapse_single_suffix();
        self.trim_final_suffix();
        self.tidy_trailing_e();
    }

    // -----------------------------------------------------------------------
    // Stage 1: plurals, -ed and -ing
    // -----------------------------------------------------------------------

    /// caresses -> caress, ponies -> poni, ties -> ti, caress -> caress,
    /// cats -> cat.
    pub fn strip_plural(&mut self) {
        if self.last() != Some(b's') {
            return;
        }
        if self.ends_with(b"sses") {
            self.chop(2);
        } else if self.ends_with(b"ies") {
            self.set_to(b"i");
        } else if self.penultimate() != Some(b's') {
            self.chop(1);
        }
    }

    /// feed -> feed, agreed -> agree, plastered -> plaster, motoring -> motor,
    /// conflated -> conflate, hopping -> hop, falling -> fall,
    /// filing -> file.
    pub fn strip_verb_ending(&mut self) {
        if self.ends_with(b"eed") {
            if self.measure() > 0 {
                self.chop(1);
            }
            return;
        }
        if !((self.ends_with(b"ed") || self.ends_with(b"ing")) && self.has_vowel_in_stem()) {
            return;
        }
        self.remove_suffix();

        if self.ends_with(b"at") {
            self.set_to(b"ate");
        } else if self.ends_with(b"bl") {
            self.set_to(b"ble");
        } else if self.ends_with(b"iz") {
            self.set_to(b"ize");
        } else if self.double_consonant(self.len() - 1) {
            if !matches!(self.last(), Some(b'l' | b's' | b'z')) {
                self.chop(1);
            }
        } else {
            self.select_whole_word();
            if self.measure() == 1 && self.cvc(self.len() - 1) {
                self.set_to(b"e");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Stage 2: terminal y
    // -----------------------------------------------------------------------

    /// happy -> happi, sky -> sky.
    pub fn terminal_y_to_i(&mut self) {
        if self.ends_with(b"y") && self.has_vowel_in_stem() {
            self.set_last(b'i');
        }
    }

    // -----------------------------------------------------------------------
    // Stage 3: double suffixes
    // -----------------------------------------------------------------------

    /// relational -> relate, conditional -> condition, valenci -> valence,
    /// vietnamization -> vietnamize.
    pub fn collapse_double_suffix(&mut self) {
        let Some(filter) = self.penultimate() else {
            return;
        };
        for rule in double_suffix_rules(filter) {
            if self.ends_with(rule.suffix) {
                self.replace_if_measure_positive(rule.replacement);
                return;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Stage 4: -ic-, -ful, -ness etc.
    // -----------------------------------------------------------------------

    /// triplicate -> triplic, formative -> form, hopeful -> hope,
    /// goodness -> good.
    pub fn collapse_single_suffix(&mut self) {
        let Some(filter) = self.last() else {
            return;
        };
        for rule in single_suffix_rules(filter) {
            if self.ends_with(rule.suffix) {
                self.replace_if_measure_positive(rule.replacement);
                return;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Stage 5: -ant, -ence etc. in context <c>vcvc<v>
    // -----------------------------------------------------------------------

    /// revival -> reviv, allowance -> allow, adoption -> adopt,
    /// effective -> effect.
    pub fn trim_final_suffix(&mut self) {
        let Some(filter) = self.penultimate() else {
            return;
        };
        for rule in trim_rules(filter) {
            if self.ends_with(rule.suffix) && self.context_holds(rule) {
                self.remove_if_measure_exceeds_one();
                return;
            }
        }
    }

    fn context_holds(&self, rule: &TrimRule) -> bool {
        match rule.context {
            SuffixContext::Any => true,
            SuffixContext::AfterSOrT => matches!(self.byte_before_suffix(), Some(b's' | b't')),
        }
    }

    // -----------------------------------------------------------------------
    // Stage 6: final -e and -ll
    // -----------------------------------------------------------------------

    /// probate -> probat, rate -> rate, cease -> ceas, controll -> control,
    /// roll -> roll.
    pub fn tidy_trailing_e(&mut self) {
        self.select_whole_word();
        if self.last() == Some(b'e') {
            let m = self.measure();
            let short_cvc = self.len() >= 2 && self.cvc(self.len() - 2);
            if m > 1 || (m == 1 && !short_cvc) {
                self.chop(1);
            }
        }
        if self.last() == Some(b'l') && self.double_consonant(self.len() - 1) && self.measure() > 1
        {
            self.chop(1);
        }
    }
}
