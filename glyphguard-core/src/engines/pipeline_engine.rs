// glyphguard-core/src/engines/pipeline_engine.rs
//! The `SanitizationEngine` that runs the ordered step pipeline.
//!
//! `sanitize` threads the text through [`Step::ORDER`], logging every step
//! that changed something, and repeats the pass until the text stops
//! changing. A later step can hand an earlier one fresh input (a removed
//! invisible lets a mark compose, a folded letter completes a tag or an
//! entity), so a single pass is not a fixpoint. `analyze` enforces the byte
//! ceiling, classifies the original, reuses one `sanitize` call, diffs the
//! grapheme arrays and builds the hits.
//!
//! License: MIT OR Apache-2.0

use std::sync::Arc;

use log::{debug, info};

/// Upper bound on full pipeline passes per `sanitize` call.
const MAX_PASSES: usize = 4;

use crate::analysis::{build_hits, classify, summarize, DiffOp};
use crate::config::{Mode, SanitizerConfig};
use crate::diagnostics::Diagnostics;
use crate::engine::SanitizationEngine;
use crate::errors::GlyphGuardError;
use crate::findings::AnalysisResult;
use crate::services::UnicodeServices;
use crate::stats::Stats;
use crate::steps::{Step, StepContext};

#[derive(Debug)]
pub struct PipelineEngine {
    config: SanitizerConfig,
    services: UnicodeServices,
    diagnostics: Arc<Diagnostics>,
}

impl PipelineEngine {
    /// Builds an engine with every Unicode capability available.
    pub fn new(config: SanitizerConfig) -> Result<Self, GlyphGuardError> {
        Self::with_services(config, UnicodeServices::full(), Arc::new(Diagnostics::new()))
    }

    /// Builds an engine over an explicit capability bundle and diagnostic sink.
    /// Degraded capabilities are reported once, here.
    pub fn with_services(
        config: SanitizerConfig,
        services: UnicodeServices,
        diagnostics: Arc<Diagnostics>,
    ) -> Result<Self, GlyphGuardError> {
        config
            .validate()
            .map_err(|e| GlyphGuardError::InvalidConfig(e.to_string()))?;
        services.report_degraded(&diagnostics);
        info!("Pipeline engine ready: {:?}", services);
        Ok(Self { config, services, diagnostics })
    }

    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// One run of every step in order.
    fn run_pass(&self, text: &str, ctx: &StepContext<'_>, stats: &mut Stats, pass: usize) -> String {
        let mut current = text.to_string();
        for step in Step::ORDER {
            let next = step.apply(&current, ctx, stats);
            if next != current {
                debug!(
                    "[{} pass {}] {} changed the text ({} -> {} bytes).",
                    ctx.mode,
                    pass,
                    step.name(),
                    current.len(),
                    next.len()
                );
                current = next;
            }
        }
        current
    }

    fn context(&self, mode: Mode) -> StepContext<'_> {
        StepContext {
            mode,
            config: &self.config,
            services: &self.services,
            diagnostics: &self.diagnostics,
        }
    }
}

impl Default for PipelineEngine {
    fn default() -> Self {
        Self {
            config: SanitizerConfig::default(),
            services: UnicodeServices::full(),
            diagnostics: Arc::new(Diagnostics::new()),
        }
    }
}

/// The ops must tile both grapheme arrays from start to end without gaps.
fn check_coverage(ops: &[DiffOp], original_len: usize, sanitized_len: usize) -> Result<(), GlyphGuardError> {
    let (mut a, mut b) = (0usize, 0usize);
    for op in ops {
        if op.a_start != a || op.b_start != b {
            return Err(GlyphGuardError::Internal(format!(
                "diff op at ({}, {}) does not continue from ({}, {})",
                op.a_start, op.b_start, a, b
            )));
        }
        a = op.a_end();
        b = op.b_end();
    }
    if a != original_len || b != sanitized_len {
        return Err(GlyphGuardError::Internal(format!(
            "diff covers ({}, {}) of ({}, {}) graphemes",
            a, b, original_len, sanitized_len
        )));
    }
    Ok(())
}

impl SanitizationEngine for PipelineEngine {
    fn sanitize(&self, text: &str, mode: Mode) -> (String, Stats) {
        let ctx = self.context(mode);
        let mut stats = Stats::new(text);
        let mut current = self.run_pass(text, &ctx, &mut stats, 1);
        for pass in 2..=MAX_PASSES {
            let next = self.run_pass(&current, &ctx, &mut stats, pass);
            if next == current {
                break;
            }
            current = next;
            if pass == MAX_PASSES {
                self.diagnostics.warn_once(
                    "sanitize_not_converged",
                    &format!("Sanitized text still changed after {} passes.", MAX_PASSES),
                );
            }
        }
        stats.finish(&current);
        (current, stats)
    }

    fn analyze(&self, text: &str, mode: Mode) -> Result<AnalysisResult, GlyphGuardError> {
        if text.len() > self.config.max_input_bytes {
            return Err(GlyphGuardError::InputTooLarge {
                len: text.len(),
                limit: self.config.max_input_bytes,
            });
        }

        let segmenter = &self.services.segmenter;
        let original = segmenter.graphemes(text);
        let classifications = classify(
            &original,
            self.services.digits.as_ref(),
            self.config.max_trailing_combining_marks,
        );

        let (sanitized_text, stats) = self.sanitize(text, mode);
        let sanitized = segmenter.graphemes(&sanitized_text);
        let diff_ops = self.services.diff.diff(&original, &sanitized);
        check_coverage(&diff_ops, original.len(), sanitized.len())?;

        let hits = build_hits(&diff_ops, &original, &sanitized, &classifications, mode);
        let summary = summarize(&diff_ops, &hits, &stats);
        debug!(
            "Analysis: {} classified codepoints, {} diff ops, {} hits.",
            classifications.len(),
            diff_ops.len(),
            hits.len()
        );

        Ok(AnalysisResult {
            original_text: text.to_string(),
            sanitized_text,
            hits,
            summary,
            diff_ops,
            stats,
        })
    }

    fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    fn services(&self) -> &UnicodeServices {
        &self.services
    }
}
