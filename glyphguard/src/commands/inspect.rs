// glyphguard/src/commands/inspect.rs
//! `glyphguard inspect`: classify the input without changing it.

use std::io::{self, Write};

use anyhow::Result;
use glyphguard_core::analysis::classify;
use glyphguard_core::{GlyphGuardError, SanitizationEngine};
use is_terminal::IsTerminal;
use log::debug;

use crate::cli::InspectCommand;
use crate::commands::read_input;
use crate::ui::summary_table;
use crate::ui::theme::ThemeMap;

pub fn run_inspect(engine: &dyn SanitizationEngine, cmd: &InspectCommand, theme_map: &ThemeMap) -> Result<()> {
    let input = read_input(cmd.input_file.as_deref())?;
    let limit = engine.config().max_input_bytes;
    if input.len() > limit {
        return Err(GlyphGuardError::InputTooLarge { len: input.len(), limit }.into());
    }

    let services = engine.services();
    let graphemes = services.segmenter.graphemes(&input);
    let classifications = classify(
        &graphemes,
        services.digits.as_ref(),
        engine.config().max_trailing_combining_marks,
    );
    debug!("{} graphemes, {} suspicious codepoints.", graphemes.len(), classifications.len());

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&classifications)?)?;
    } else {
        summary_table::print_classifications(&classifications, &mut writer, theme_map, supports_color)?;
    }
    writer.flush()?;
    Ok(())
}
