// glyphguard/src/commands/sanitize.rs
//! `glyphguard sanitize`: write the sanitized text, a diff, or JSON.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use glyphguard_core::{GlyphGuardError, SanitizationEngine, Stats};
use is_terminal::IsTerminal;
use log::{debug, info};
use serde_json::json;

use crate::cli::SanitizeCommand;
use crate::commands::{info_msg, read_input};
use crate::ui::diff_viewer;
use crate::ui::summary_table;
use crate::ui::theme::ThemeMap;

pub fn run_sanitize(engine: &dyn SanitizationEngine, cmd: &SanitizeCommand, theme_map: &ThemeMap, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");
    let input = read_input(cmd.input_file.as_deref())?;
    let limit = engine.config().max_input_bytes;
    if input.len() > limit {
        return Err(GlyphGuardError::InputTooLarge { len: input.len(), limit }.into());
    }

    let mode = cmd.mode.unwrap_or(engine.config().default_mode);
    let (sanitized, stats) = engine.sanitize(&input, mode);
    debug!(
        "Sanitized in {} mode. Original length: {}, sanitized length: {}",
        mode, stats.original_length, stats.final_length
    );

    handle_primary_output(engine, cmd, &input, &sanitized, &stats, theme_map, quiet)?;

    if cmd.stats && !quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        summary_table::print_stats(&stats, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }
    info!("Sanitize operation completed.");
    Ok(())
}

fn render<W: Write>(
    engine: &dyn SanitizationEngine,
    cmd: &SanitizeCommand,
    input: &str,
    sanitized: &str,
    stats: &Stats,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    if cmd.json {
        let payload = json!({ "text": sanitized, "stats": stats });
        writeln!(writer, "{}", serde_json::to_string_pretty(&payload)?)?;
    } else if cmd.diff {
        let digits = engine.services().digits.as_ref();
        diff_viewer::print_diff(input, sanitized, digits, writer, theme_map, supports_color)?;
    } else {
        // The pipeline already terminates non-empty output with a newline.
        write!(writer, "{}", sanitized)?;
    }
    Ok(())
}

fn handle_primary_output(
    engine: &dyn SanitizationEngine,
    cmd: &SanitizeCommand,
    input: &str,
    sanitized: &str,
    stats: &Stats,
    theme_map: &ThemeMap,
    quiet: bool,
) -> Result<()> {
    if let Some(path) = &cmd.output {
        if !quiet {
            info_msg(format!("Writing sanitized content to file: {}", path.display()), theme_map);
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        render(engine, cmd, input, sanitized, stats, &mut file, theme_map, false)?;
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        render(engine, cmd, input, sanitized, stats, &mut writer, theme_map, supports_color)?;
        writer.flush()?;
    }
    Ok(())
}
