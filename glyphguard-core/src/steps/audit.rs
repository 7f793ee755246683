//! Steps 15 and 16: advisory-only checks. Neither changes the text.

use log::debug;

use super::StepContext;
use crate::stats::{Advisory, Stats};

/// Asks the confusable detector whether the text looks like a spoof. In safe
/// mode, where homoglyphs are left in place, a positive answer also records
/// mixed scripts. Skipped without an advisory when no detector is available.
pub fn spoof_audit(text: &str, ctx: &StepContext<'_>, stats: &mut Stats) {
    let Some(detector) = ctx.services.confusables.as_deref() else {
        ctx.diagnostics.warn_once(
            "confusable_detector_unavailable",
            "No confusable detector available; spoof audit skipped.",
        );
        return;
    };
    if detector.is_suspicious(text) {
        debug!("{} flagged the text as a possible spoof.", detector.name());
        stats.raise(Advisory::ConfusableSuspected);
        if ctx.mode.is_safe() {
            stats.raise(Advisory::MixedScripts);
        }
    }
}

/// Flags text that carries both a Bidi_Mirrored codepoint and a
/// right-to-left one, where brackets may render flipped.
pub fn detect_mirrored_punctuation(text: &str, ctx: &StepContext<'_>, stats: &mut Stats) {
    let Some(bidi) = ctx.services.bidi.as_deref() else {
        ctx.diagnostics.warn_once(
            "bidi_properties_unavailable",
            "No bidi property lookup available; mirrored punctuation check skipped.",
        );
        return;
    };
    let mut mirrored = false;
    let mut rtl = false;
    for c in text.chars() {
        mirrored |= bidi.is_mirrored(c);
        rtl |= bidi.is_rtl(c);
        if mirrored && rtl {
            stats.raise(Advisory::MirroredPunctuation);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{ctx, minimal_ctx};
    use super::*;
    use crate::config::Mode;

    #[test]
    fn safe_mode_spoof_sets_both_flags() {
        let mut stats = Stats::default();
        spoof_audit("p\u{0430}ypal", &ctx(Mode::Safe), &mut stats);
        assert!(stats.advisories.confusable_suspected);
        assert!(stats.advisories.had_mixed_scripts);

        let mut stats = Stats::default();
        spoof_audit("p\u{0430}ypal", &ctx(Mode::Strict), &mut stats);
        assert!(stats.advisories.confusable_suspected);
        assert!(!stats.advisories.had_mixed_scripts);
    }

    #[test]
    fn missing_detector_skips_without_advisory() {
        let mut stats = Stats::default();
        spoof_audit("p\u{0430}ypal", &minimal_ctx(Mode::Safe), &mut stats);
        detect_mirrored_punctuation("(\u{05D0})", &minimal_ctx(Mode::Safe), &mut stats);
        assert!(!stats.advisories.any());
    }

    #[test]
    fn brackets_in_rtl_text() {
        let mut stats = Stats::default();
        detect_mirrored_punctuation("\u{05E9}\u{05DC}\u{05D5}\u{05DD} (x)", &ctx(Mode::Safe), &mut stats);
        assert!(stats.advisories.had_mirrored_punctuation);

        let mut stats = Stats::default();
        detect_mirrored_punctuation("plain (x)", &ctx(Mode::Safe), &mut stats);
        assert!(!stats.advisories.had_mirrored_punctuation);
    }
}
