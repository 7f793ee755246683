//! Counters and advisory flags accumulated by one pipeline run.

use serde::{Deserialize, Serialize};

/// One advisory flag of [`Advisories`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Advisory {
    BidiControls,
    MixedScripts,
    DefaultIgnorables,
    TagChars,
    OrphanCombining,
    ConfusableSuspected,
    HtmlEntities,
    AsciiControls,
    Noncharacters,
    PrivateUse,
    MirroredPunctuation,
    NonAsciiDigits,
}

impl Advisory {
    pub const ALL: [Advisory; 12] = [
        Advisory::BidiControls,
        Advisory::MixedScripts,
        Advisory::DefaultIgnorables,
        Advisory::TagChars,
        Advisory::OrphanCombining,
        Advisory::ConfusableSuspected,
        Advisory::HtmlEntities,
        Advisory::AsciiControls,
        Advisory::Noncharacters,
        Advisory::PrivateUse,
        Advisory::MirroredPunctuation,
        Advisory::NonAsciiDigits,
    ];

    /// Sentence used in analysis summaries when the advisory is raised.
    pub fn note(&self) -> &'static str {
        match self {
            Advisory::BidiControls => "Bidirectional override or isolate controls were removed.",
            Advisory::MixedScripts => "Words mixing Latin with look-alike scripts were found.",
            Advisory::DefaultIgnorables => "Invisible default-ignorable characters were removed.",
            Advisory::TagChars => "Unicode TAG characters outside emoji flags were removed.",
            Advisory::OrphanCombining => "Orphaned or stacked (Zalgo) combining marks were cleaned.",
            Advisory::ConfusableSuspected => "Text looks like a confusable spoofing attempt.",
            Advisory::HtmlEntities => "HTML entities were decoded before inspection.",
            Advisory::AsciiControls => "C0/C1 control characters were removed.",
            Advisory::Noncharacters => "Unicode noncharacters were removed.",
            Advisory::PrivateUse => "Private Use Area codepoints were removed.",
            Advisory::MirroredPunctuation => "Mirrored punctuation appears in right-to-left context.",
            Advisory::NonAsciiDigits => "Non-ASCII decimal digits were normalized to 0-9.",
        }
    }
}

/// Advisory record. A flag only ever goes from `false` to `true` within a run;
/// use [`Advisories::raise`] rather than writing the fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisories {
    pub had_bidi_controls: bool,
    pub had_mixed_scripts: bool,
    pub had_default_ignorables: bool,
    pub had_tag_chars: bool,
    pub had_orphan_combining: bool,
    pub confusable_suspected: bool,
    pub had_html_entities: bool,
    pub had_ascii_controls: bool,
    pub had_noncharacters: bool,
    pub had_private_use: bool,
    pub had_mirrored_punctuation: bool,
    pub had_non_ascii_digits: bool,
}

impl Advisories {
    fn slot(&mut self, advisory: Advisory) -> &mut bool {
        match advisory {
            Advisory::BidiControls => &mut self.had_bidi_controls,
            Advisory::MixedScripts => &mut self.had_mixed_scripts,
            Advisory::DefaultIgnorables => &mut self.had_default_ignorables,
            Advisory::TagChars => &mut self.had_tag_chars,
            Advisory::OrphanCombining => &mut self.had_orphan_combining,
            Advisory::ConfusableSuspected => &mut self.confusable_suspected,
            Advisory::HtmlEntities => &mut self.had_html_entities,
            Advisory::AsciiControls => &mut self.had_ascii_controls,
            Advisory::Noncharacters => &mut self.had_noncharacters,
            Advisory::PrivateUse => &mut self.had_private_use,
            Advisory::MirroredPunctuation => &mut self.had_mirrored_punctuation,
            Advisory::NonAsciiDigits => &mut self.had_non_ascii_digits,
        }
    }

    pub fn raise(&mut self, advisory: Advisory) {
        *self.slot(advisory) = true;
    }

    pub fn is_raised(&self, advisory: Advisory) -> bool {
        let mut copy = *self;
        *copy.slot(advisory)
    }

    /// Raised advisories in declaration order.
    pub fn raised(&self) -> Vec<Advisory> {
        Advisory::ALL.iter().copied().filter(|a| self.is_raised(*a)).collect()
    }

    pub fn any(&self) -> bool {
        !self.raised().is_empty()
    }
}

/// Outcome counters of one `sanitize()` call. Lengths count Unicode scalar values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub original_length: usize,
    pub final_length: usize,
    pub characters_removed: usize,
    pub invisibles_removed: usize,
    pub homoglyphs_normalized: usize,
    pub digits_normalized: usize,
    pub advisories: Advisories,
}

impl Stats {
    pub fn new(original: &str) -> Self {
        Self {
            original_length: original.chars().count(),
            ..Default::default()
        }
    }

    pub fn raise(&mut self, advisory: Advisory) {
        self.advisories.raise(advisory);
    }

    /// Records the final text and derives `characters_removed`.
    pub fn finish(&mut self, sanitized: &str) {
        self.final_length = sanitized.chars().count();
        self.characters_removed = self.original_length.saturating_sub(self.final_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_is_sticky() {
        let mut advisories = Advisories::default();
        assert!(!advisories.any());
        advisories.raise(Advisory::TagChars);
        advisories.raise(Advisory::TagChars);
        assert!(advisories.had_tag_chars);
        assert!(advisories.is_raised(Advisory::TagChars));
        assert_eq!(advisories.raised(), vec![Advisory::TagChars]);
    }

    #[test]
    fn finish_counts_scalars() {
        let mut stats = Stats::new("h\u{00E9}llo\u{200B}");
        stats.finish("h\u{00E9}llo\n");
        assert_eq!(stats.original_length, 6);
        assert_eq!(stats.final_length, 6);
        assert_eq!(stats.characters_removed, 0);

        let mut stats = Stats::new("abc");
        stats.finish("");
        assert_eq!(stats.characters_removed, 3);
    }

    #[test]
    fn serializes_with_flat_names() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        assert_eq!(json["invisibles_removed"], 0);
        assert_eq!(json["advisories"]["had_bidi_controls"], false);
    }
}
