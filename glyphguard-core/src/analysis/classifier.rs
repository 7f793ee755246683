//! Static classification of the original text.
//!
//! Runs once over the unmodified input, before any step touches it. Each
//! codepoint is tested against the range tables; codepoints with at least one
//! kind produce a [`Classification`].

use glyphguard_tables::homoglyphs::is_homoglyph;
use glyphguard_tables::is_noncharacter;
use glyphguard_tables::ranges::{is_bidi_control, is_bidi_mark, is_default_ignorable, is_private_use, is_tag};

use crate::findings::{Classification, VectorKind};
use crate::services::DigitValues;
use crate::steps::combining::MarkTracker;

/// Kinds of one codepoint. `orphan` comes from the caller's [`MarkTracker`].
///
/// Directional controls and marks are `bidi_controls` and nothing else.
pub fn kinds_for(c: char, digits: &dyn DigitValues, orphan: bool) -> Vec<VectorKind> {
    let cp = c as u32;
    if is_bidi_control(cp) || is_bidi_mark(cp) {
        return vec![VectorKind::BidiControls];
    }
    let mut kinds = Vec::new();
    if is_default_ignorable(cp) {
        kinds.push(VectorKind::DefaultIgnorables);
    }
    if is_tag(cp) {
        kinds.push(VectorKind::TagCharacters);
    }
    if orphan {
        kinds.push(VectorKind::OrphanCombiningMarks);
    }
    if is_homoglyph(c) {
        kinds.push(VectorKind::Confusables);
    }
    if is_noncharacter(cp) {
        kinds.push(VectorKind::Noncharacters);
    }
    if is_private_use(cp) {
        kinds.push(VectorKind::PrivateUse);
    }
    if !c.is_ascii() && digits.decimal_value(c).is_some() {
        kinds.push(VectorKind::NonAsciiDigits);
    }
    kinds
}

/// Classifies every codepoint of `graphemes`, in order. `max_trailing_marks`
/// must match the pipeline's cap so orphan detection agrees with step 9.
pub fn classify(graphemes: &[&str], digits: &dyn DigitValues, max_trailing_marks: usize) -> Vec<Classification> {
    let mut tracker = MarkTracker::new(max_trailing_marks);
    let mut classifications = Vec::new();
    for (grapheme_index, grapheme) in graphemes.iter().enumerate() {
        for c in grapheme.chars() {
            let orphan = !tracker.keep(c);
            let kinds = kinds_for(c, digits, orphan);
            if !kinds.is_empty() {
                classifications.push(Classification { grapheme_index, code_point: c as u32, kinds });
            }
        }
    }
    classifications
}
