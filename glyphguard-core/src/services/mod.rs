//! Unicode capability bundle.
//!
//! Every Unicode service the pipeline needs sits behind a trait and is resolved
//! once, when a [`UnicodeServices`] is built. Optional capabilities are `None`
//! when unavailable and the steps relying on them skip without raising their
//! advisory. The others always carry at least a documented fallback.

pub mod bidi;
pub mod confusables;
pub mod digits;
pub mod segmenter;
pub mod transliterate;

use std::fmt;
use std::sync::Arc;

use crate::analysis::diff::{DiffOp, LcsDiff, MyersDiff};
use crate::diagnostics::Diagnostics;
use crate::errors::GlyphGuardError;

pub use bidi::UnicodeBidiProperties;
pub use confusables::ScriptMixingDetector;
pub use digits::{ArabicIndicDigits, UnicodeDigitValues};
pub use segmenter::{CodepointSegmenter, UnicodeGraphemes};
pub use transliterate::NfkcCasefold;

/// Splits text into user-perceived characters.
pub trait GraphemeSegmenter: Send + Sync {
    fn graphemes<'a>(&self, text: &'a str) -> Vec<&'a str>;
    fn name(&self) -> &'static str;
    fn is_fallback(&self) -> bool {
        false
    }
}

/// Decides whether a text looks like a confusable spoof.
pub trait ConfusableDetector: Send + Sync {
    fn is_suspicious(&self, text: &str) -> bool;
    fn name(&self) -> &'static str;
}

/// Bidi_Mirrored and bidi class lookups.
pub trait BidiProperties: Send + Sync {
    fn is_mirrored(&self, c: char) -> bool;
    /// True for bidi classes R, AL and AN.
    fn is_rtl(&self, c: char) -> bool;
    fn name(&self) -> &'static str;
}

/// Numeric value of decimal digits.
pub trait DigitValues: Send + Sync {
    fn decimal_value(&self, c: char) -> Option<u8>;
    fn name(&self) -> &'static str;
    fn is_fallback(&self) -> bool {
        false
    }
}

/// Compatibility folding used by strict normalization, applied chunk by chunk.
pub trait Transliterator: Send + Sync {
    fn transliterate(&self, chunk: &str) -> Result<String, GlyphGuardError>;
    fn name(&self) -> &'static str;
}

/// Grapheme-array diff producing merged equal/insert/delete runs.
pub trait DiffAlgorithm: Send + Sync {
    fn diff(&self, original: &[&str], sanitized: &[&str]) -> Vec<DiffOp>;
    fn name(&self) -> &'static str;
    fn is_fallback(&self) -> bool {
        false
    }
}

#[derive(Clone)]
pub struct UnicodeServices {
    pub segmenter: Arc<dyn GraphemeSegmenter>,
    pub confusables: Option<Arc<dyn ConfusableDetector>>,
    pub bidi: Option<Arc<dyn BidiProperties>>,
    pub digits: Arc<dyn DigitValues>,
    pub transliterator: Option<Arc<dyn Transliterator>>,
    pub diff: Arc<dyn DiffAlgorithm>,
}

impl UnicodeServices {
    /// All capabilities backed by the Unicode crates.
    pub fn full() -> Self {
        Self {
            segmenter: Arc::new(UnicodeGraphemes),
            confusables: Some(Arc::new(ScriptMixingDetector)),
            bidi: Some(Arc::new(UnicodeBidiProperties)),
            digits: Arc::new(UnicodeDigitValues),
            transliterator: Some(Arc::new(NfkcCasefold)),
            diff: Arc::new(MyersDiff),
        }
    }

    /// The degraded bundle: codepoint segmentation, Arabic-Indic digit table,
    /// LCS diff, and no confusable, bidi or transliteration capability.
    pub fn minimal() -> Self {
        Self {
            segmenter: Arc::new(CodepointSegmenter),
            confusables: None,
            bidi: None,
            digits: Arc::new(ArabicIndicDigits),
            transliterator: None,
            diff: Arc::new(LcsDiff::default()),
        }
    }

    /// Names of the capabilities running on a fallback or missing entirely.
    pub fn degraded(&self) -> Vec<&'static str> {
        let mut degraded = Vec::new();
        if self.segmenter.is_fallback() {
            degraded.push("grapheme_segmenter");
        }
        if self.confusables.is_none() {
            degraded.push("confusable_detector");
        }
        if self.bidi.is_none() {
            degraded.push("bidi_properties");
        }
        if self.digits.is_fallback() {
            degraded.push("digit_values");
        }
        if self.transliterator.is_none() {
            degraded.push("transliterator");
        }
        if self.diff.is_fallback() {
            degraded.push("diff_algorithm");
        }
        degraded
    }

    /// Logs one diagnostic per degraded capability.
    pub fn report_degraded(&self, diagnostics: &Diagnostics) {
        for capability in self.degraded() {
            diagnostics.warn_once(
                &format!("capability_unavailable:{}", capability),
                &format!("{} unavailable; using the documented fallback", capability),
            );
        }
    }
}

impl Default for UnicodeServices {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Debug for UnicodeServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeServices")
            .field("segmenter", &self.segmenter.name())
            .field("confusables", &self.confusables.as_ref().map(|c| c.name()))
            .field("bidi", &self.bidi.as_ref().map(|b| b.name()))
            .field("digits", &self.digits.name())
            .field("transliterator", &self.transliterator.as_ref().map(|t| t.name()))
            .field("diff", &self.diff.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_bundle_is_not_degraded() {
        assert!(UnicodeServices::full().degraded().is_empty());
    }

    #[test]
    fn minimal_bundle_reports_every_capability_once() {
        let services = UnicodeServices::minimal();
        assert_eq!(services.degraded().len(), 6);
        let diagnostics = Diagnostics::new();
        services.report_degraded(&diagnostics);
        services.report_degraded(&diagnostics);
        assert!(diagnostics.has_seen("capability_unavailable:bidi_properties"));
        assert!(!diagnostics.warn_once("capability_unavailable:transliterator", "again"));
    }

    #[test]
    fn debug_lists_names() {
        let rendered = format!("{:?}", UnicodeServices::full());
        assert!(rendered.contains("unicode-segmentation"));
        assert!(rendered.contains("dissimilar"));
    }
}
