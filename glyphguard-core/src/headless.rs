// glyphguard-core/src/headless.rs
//! Convenience wrappers for one-shot use without building an engine.
//!
//! Both functions run on a process-wide [`PipelineEngine`] with the built-in
//! configuration and every Unicode capability available.

use once_cell::sync::Lazy;

use crate::config::Mode;
use crate::engine::SanitizationEngine;
use crate::engines::pipeline_engine::PipelineEngine;
use crate::errors::GlyphGuardError;
use crate::findings::AnalysisResult;
use crate::stats::Stats;

static DEFAULT_ENGINE: Lazy<PipelineEngine> = Lazy::new(PipelineEngine::default);

/// Returns the shared default engine.
pub fn default_engine() -> &'static PipelineEngine {
    &DEFAULT_ENGINE
}

/// Sanitizes `text` with the default engine.
///
/// ```
/// use glyphguard_core::{sanitize, Mode};
///
/// let (clean, stats) = sanitize("Hello\u{200B}world", Mode::Safe);
/// assert_eq!(clean, "Helloworld\n");
/// assert_eq!(stats.invisibles_removed, 1);
/// ```
pub fn sanitize(text: &str, mode: Mode) -> (String, Stats) {
    DEFAULT_ENGINE.sanitize(text, mode)
}

/// Analyzes `text` with the default engine. Input above 1 MiB is rejected
/// with [`GlyphGuardError::InputTooLarge`].
pub fn analyze(text: &str, mode: Mode) -> Result<AnalysisResult, GlyphGuardError> {
    DEFAULT_ENGINE.analyze(text, mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_matches_engine() {
        let (text, _) = sanitize("\u{0430}pple", Mode::Aggressive);
        assert_eq!(text, "apple\n");
        assert_eq!(default_engine().config().max_input_bytes, 1_048_576);
    }

    #[test]
    fn headless_analyze_reuses_sanitize_output() {
        let result = analyze("a\u{200B}b", Mode::Safe).unwrap();
        let (text, stats) = sanitize("a\u{200B}b", Mode::Safe);
        assert_eq!(result.sanitized_text, text);
        assert_eq!(result.stats, stats);
    }
}
