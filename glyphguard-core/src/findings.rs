//! findings.rs - Structured output of `analyze()`.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::diff::DiffOp;
use crate::config::Mode;
use crate::stats::Stats;

/// Class of adversarial glyph trick a codepoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorKind {
    BidiControls,
    MixedScripts,
    DefaultIgnorables,
    TagCharacters,
    OrphanCombiningMarks,
    Confusables,
    Noncharacters,
    PrivateUse,
    NonAsciiDigits,
}

impl VectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorKind::BidiControls => "bidi_controls",
            VectorKind::MixedScripts => "mixed_scripts",
            VectorKind::DefaultIgnorables => "default_ignorables",
            VectorKind::TagCharacters => "tag_characters",
            VectorKind::OrphanCombiningMarks => "orphan_combining_marks",
            VectorKind::Confusables => "confusables",
            VectorKind::Noncharacters => "noncharacters",
            VectorKind::PrivateUse => "private_use",
            VectorKind::NonAsciiDigits => "non_ascii_digits",
        }
    }

    /// Fixed severity table. Only the kinds without a fixed entry depend on the mode.
    pub fn severity(&self, mode: Mode) -> Severity {
        match self {
            VectorKind::BidiControls | VectorKind::TagCharacters | VectorKind::Noncharacters => Severity::Block,
            VectorKind::DefaultIgnorables | VectorKind::PrivateUse | VectorKind::NonAsciiDigits => Severity::Warn,
            VectorKind::MixedScripts | VectorKind::OrphanCombiningMarks | VectorKind::Confusables => {
                if mode.is_safe() {
                    Severity::Info
                } else {
                    Severity::Warn
                }
            }
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            VectorKind::BidiControls => {
                "Bidirectional controls can make source or text display in a different order than it is read (Trojan Source)."
            }
            VectorKind::MixedScripts => "Letters from several scripts are mixed inside one word.",
            VectorKind::DefaultIgnorables => "Invisible characters can hide payloads or split keywords past filters.",
            VectorKind::TagCharacters => "TAG characters can smuggle an invisible ASCII payload.",
            VectorKind::OrphanCombiningMarks => "Combining marks without a base, or stacked past the limit (Zalgo).",
            VectorKind::Confusables => "Characters that render like Latin letters or digits but are not.",
            VectorKind::Noncharacters => "Noncharacters are not valid for open interchange.",
            VectorKind::PrivateUse => "Private Use codepoints have no standard meaning and may render arbitrarily.",
            VectorKind::NonAsciiDigits => "Digits from another numbering system can disguise numbers.",
        }
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Block,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Block => "block",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds found on one codepoint of the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub grapheme_index: usize,
    pub code_point: u32,
    pub kinds: Vec<VectorKind>,
}

/// Half-open grapheme index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphemeRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorHit {
    pub id: String,
    pub kind: VectorKind,
    pub severity: Severity,
    pub original_range: GraphemeRange,
    pub sanitized_range: GraphemeRange,
    pub original_slice: String,
    pub sanitized_slice: String,
    pub code_points: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Non-equal diff runs.
    pub total_changes: usize,
    pub vector_counts: BTreeMap<VectorKind, usize>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_text: String,
    pub sanitized_text: String,
    pub hits: Vec<VectorHit>,
    pub summary: Summary,
    pub diff_ops: Vec<DiffOp>,
    pub stats: Stats,
}

/// `U+%05X`.
pub fn format_code_point(cp: u32) -> String {
    format!("U+{:05X}", cp)
}
