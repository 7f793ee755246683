// glyphguard/src/commands/analyze.rs
//! `glyphguard analyze`: sanitize and explain every security-relevant change.

use std::io::{self, Write};

use anyhow::{Context, Result};
use glyphguard_core::{AnalysisResult, SanitizationEngine, Severity};
use is_terminal::IsTerminal;
use log::info;

use crate::cli::AnalyzeCommand;
use crate::commands::read_input;
use crate::ui::diff_viewer;
use crate::ui::output_format::paint;
use crate::ui::summary_table;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// True when at least one hit carries `block` severity.
pub fn has_blocking_hit(result: &AnalysisResult) -> bool {
    result.hits.iter().any(|hit| hit.severity == Severity::Block)
}

/// Runs the analysis and prints it. Returns whether anything blocked.
pub fn run_analyze(engine: &dyn SanitizationEngine, cmd: &AnalyzeCommand, theme_map: &ThemeMap) -> Result<bool> {
    info!("Starting analyze operation.");
    let input = read_input(cmd.input_file.as_deref())?;
    let mode = cmd.mode.unwrap_or(engine.config().default_mode);
    let result = engine.analyze(&input, mode).context("Analysis failed")?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        print_report(engine, &result, &mut writer, theme_map, supports_color)?;
    }
    writer.flush()?;

    let blocked = has_blocking_hit(&result);
    info!("Analyze operation completed ({} hits, blocked: {}).", result.hits.len(), blocked);
    Ok(blocked)
}

fn print_report<W: Write>(
    engine: &dyn SanitizationEngine,
    result: &AnalysisResult,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer, "{}", paint("Changes", ThemeEntry::Header, theme_map, supports_color))?;
    let digits = engine.services().digits.as_ref();
    diff_viewer::print_inline_diff(&result.original_text, &result.sanitized_text, digits, writer, theme_map, supports_color)?;
    writeln!(writer)?;
    writeln!(writer, "{}", paint("Findings", ThemeEntry::Header, theme_map, supports_color))?;
    summary_table::print_hits(&result.hits, writer, theme_map, supports_color)?;
    writeln!(writer)?;
    summary_table::print_summary(&result.summary, writer, theme_map, supports_color)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphguard_core::{Mode, PipelineEngine};

    #[test]
    fn blocking_detection() {
        let engine = PipelineEngine::default();
        let bidi = engine.analyze("abc\u{202E}def", Mode::Safe).unwrap();
        assert!(has_blocking_hit(&bidi));
        let zwsp = engine.analyze("abc\u{200B}def", Mode::Safe).unwrap();
        assert!(!has_blocking_hit(&zwsp));
    }
}
