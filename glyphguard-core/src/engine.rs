// glyphguard-core/src/engine.rs
//! Defines the core `SanitizationEngine` trait.
//!
//! The trait is the seam between front ends (the CLI, an HTTP wrapper, tests)
//! and a concrete pipeline. Front ends hold a `Box<dyn SanitizationEngine>` or
//! an `Arc` of one and never depend on how the steps are wired.
//!
//! License: MIT OR Apache-2.0

use crate::config::{Mode, SanitizerConfig};
use crate::errors::GlyphGuardError;
use crate::findings::AnalysisResult;
use crate::services::UnicodeServices;
use crate::stats::Stats;

/// A sanitizer for untrusted Unicode text.
pub trait SanitizationEngine: Send + Sync {
    /// Runs the full pipeline for `mode` and returns the sanitized text with
    /// its counters and advisories.
    ///
    /// Never fails for valid UTF-8 of any length. Callers that accept input
    /// from the network are expected to bound its size first.
    fn sanitize(&self, text: &str, mode: Mode) -> (String, Stats);

    /// Sanitizes `text` and explains every security-relevant change.
    ///
    /// # Errors
    ///
    /// * [`GlyphGuardError::InputTooLarge`] when `text` exceeds the configured
    ///   byte ceiling. Nothing is processed in that case.
    /// * [`GlyphGuardError::Internal`] when the diff does not cover both texts.
    fn analyze(&self, text: &str, mode: Mode) -> Result<AnalysisResult, GlyphGuardError>;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &SanitizerConfig;

    /// Returns the capability bundle the engine was built with.
    fn services(&self) -> &UnicodeServices;
}
