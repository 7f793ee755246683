//! # GlyphGuard Core Library
//!
//! `glyphguard-core` sanitizes untrusted Unicode text against invisible-character
//! steganography, bidirectional-text spoofing (Trojan Source), homoglyphs and
//! related glyph tricks, while leaving legitimate multilingual text intact.
//!
//! Two entry points make up the public contract:
//!
//! * [`sanitize`]`(text, mode) -> (String, Stats)`: the ordered step pipeline.
//! * [`analyze`]`(text, mode) -> Result<AnalysisResult, GlyphGuardError>`: the same
//!   pass plus a grapheme-level diff joined with a static classification of the
//!   original, reported as severity-tagged [`VectorHit`]s.
//!
//! ## Modules
//!
//! * `config`: [`Mode`] and [`SanitizerConfig`], loaded from YAML.
//! * `steps`: the eighteen mode-gated transforms and their fixed order.
//! * `services`: the [`UnicodeServices`] capability bundle and its fallbacks.
//! * `analysis`: classifier, diff engines and the hit builder.
//! * `engine` / `engines`: the [`SanitizationEngine`] trait and [`PipelineEngine`].
//! * `headless`: one-shot wrappers over a shared default engine.
//!
//! ## Usage Example
//!
//! ```rust
//! use glyphguard_core::{analyze, Mode, Severity, VectorKind};
//!
//! let result = analyze("Test\u{202E}reverse\u{202C}text", Mode::Aggressive).unwrap();
//! assert_eq!(result.sanitized_text, "Testreversetext\n");
//! assert!(result
//!     .hits
//!     .iter()
//!     .any(|hit| hit.kind == VectorKind::BidiControls && hit.severity == Severity::Block));
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod analysis;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod findings;
pub mod headless;
pub mod services;
pub mod stats;
pub mod steps;

pub use config::{merge_config, ConfigOverrides, Mode, SanitizerConfig};

pub use errors::GlyphGuardError;

pub use engine::SanitizationEngine;
pub use engines::pipeline_engine::PipelineEngine;

pub use diagnostics::Diagnostics;
pub use services::UnicodeServices;

pub use analysis::{DiffOp, DiffOpType};
pub use findings::{AnalysisResult, Classification, GraphemeRange, Severity, Summary, VectorHit, VectorKind};
pub use stats::{Advisories, Advisory, Stats};

pub use headless::{analyze, default_engine, sanitize};
