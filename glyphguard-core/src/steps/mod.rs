// glyphguard-core/src/steps/mod.rs
//! The ordered sanitization steps.
//!
//! Each step is a text-to-text transform that decides for itself whether it
//! runs in the current [`Mode`], updates the shared [`Stats`] accumulator, and
//! is idempotent on its own output. [`Step::ORDER`] is the only order the
//! pipeline ever runs them in. Steps are not idempotent as a sequence, so the
//! engine repeats the whole order until the text is stable.
//!
//! License: MIT OR Apache-2.0

pub mod audit;
pub mod cleanup;
pub mod codepoints;
pub mod combining;
pub mod controls;
pub mod digits;
pub mod entities;
pub mod formatting;
pub mod homoglyphs;
pub mod invisibles;
pub mod normalize;
pub mod punctuation;
pub mod whitespace;

use crate::config::{Mode, SanitizerConfig};
use crate::diagnostics::Diagnostics;
use crate::services::UnicodeServices;
use crate::stats::Stats;

/// Everything a step may consult besides the text itself.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub mode: Mode,
    pub config: &'a SanitizerConfig,
    pub services: &'a UnicodeServices,
    pub diagnostics: &'a Diagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    DecodeEntities,
    StripAsciiControls,
    StripBidiControls,
    Normalize,
    StripInvisibles,
    NormalizeWhitespace,
    NormalizeDigits,
    NormalizePunctuation,
    CleanCombiningMarks,
    StripFormatting,
    StripNoncharacters,
    StripPrivateUse,
    StripTagBlock,
    NormalizeHomoglyphs,
    SpoofAudit,
    DetectMirroredPunctuation,
    RecheckInvisibles,
    FinalCleanup,
}

impl Step {
    pub const ORDER: [Step; 18] = [
        Step::DecodeEntities,
        Step::StripAsciiControls,
        Step::StripBidiControls,
        Step::Normalize,
        Step::StripInvisibles,
        Step::NormalizeWhitespace,
        Step::NormalizeDigits,
        Step::NormalizePunctuation,
        Step::CleanCombiningMarks,
        Step::StripFormatting,
        Step::StripNoncharacters,
        Step::StripPrivateUse,
        Step::StripTagBlock,
        Step::NormalizeHomoglyphs,
        Step::SpoofAudit,
        Step::DetectMirroredPunctuation,
        Step::RecheckInvisibles,
        Step::FinalCleanup,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::DecodeEntities => "decode_entities",
            Step::StripAsciiControls => "strip_ascii_controls",
            Step::StripBidiControls => "strip_bidi_controls",
            Step::Normalize => "normalize",
            Step::StripInvisibles => "strip_invisibles",
            Step::NormalizeWhitespace => "normalize_whitespace",
            Step::NormalizeDigits => "normalize_digits",
            Step::NormalizePunctuation => "normalize_punctuation",
            Step::CleanCombiningMarks => "clean_combining_marks",
            Step::StripFormatting => "strip_formatting",
            Step::StripNoncharacters => "strip_noncharacters",
            Step::StripPrivateUse => "strip_private_use",
            Step::StripTagBlock => "strip_tag_block",
            Step::NormalizeHomoglyphs => "normalize_homoglyphs",
            Step::SpoofAudit => "spoof_audit",
            Step::DetectMirroredPunctuation => "detect_mirrored_punctuation",
            Step::RecheckInvisibles => "recheck_invisibles",
            Step::FinalCleanup => "final_cleanup",
        }
    }

    pub fn apply(&self, text: &str, ctx: &StepContext<'_>, stats: &mut Stats) -> String {
        match self {
            Step::DecodeEntities => entities::decode_entities(text, stats),
            Step::StripAsciiControls => controls::strip_ascii_controls(text, stats),
            Step::StripBidiControls => controls::strip_bidi_controls(text, stats),
            Step::Normalize => normalize::normalize(text, ctx),
            Step::StripInvisibles | Step::RecheckInvisibles => invisibles::strip_invisibles(text, ctx.mode, stats),
            Step::NormalizeWhitespace => whitespace::normalize_whitespace(text),
            Step::NormalizeDigits => digits::normalize_digits(text, ctx, stats),
            Step::NormalizePunctuation => punctuation::normalize_punctuation(text),
            Step::CleanCombiningMarks => {
                combining::clean_combining_marks(text, ctx.config.max_trailing_combining_marks, stats)
            }
            Step::StripFormatting => formatting::strip_formatting(text, ctx.mode),
            Step::StripNoncharacters => codepoints::strip_noncharacters(text, ctx.mode, stats),
            Step::StripPrivateUse => codepoints::strip_private_use(text, ctx.mode, stats),
            Step::StripTagBlock => codepoints::strip_tag_block(text, ctx.mode, stats),
            Step::NormalizeHomoglyphs => homoglyphs::normalize_homoglyphs(text, ctx.mode, stats),
            Step::SpoofAudit => {
                audit::spoof_audit(text, ctx, stats);
                text.to_string()
            }
            Step::DetectMirroredPunctuation => {
                audit::detect_mirrored_punctuation(text, ctx, stats);
                text.to_string()
            }
            Step::FinalCleanup => cleanup::final_cleanup(text),
        }
    }
}

/// Removes every char matching `remove`, returning the new text and the count removed.
pub(crate) fn strip_chars<F>(text: &str, mut remove: F) -> (String, usize)
where
    F: FnMut(char) -> bool,
{
    let mut removed = 0;
    let kept = text
        .chars()
        .filter(|&c| {
            if remove(c) {
                removed += 1;
                false
            } else {
                true
            }
        })
        .collect();
    (kept, removed)
}
