// glyphguard/src/main.rs
//! GlyphGuard entry point.
//!
//! Loads the sanitizer settings, builds the pipeline engine and dispatches
//! to the chosen subcommand. Exit codes: 0 on success, 1 on error, 2 when
//! `analyze --fail-on-block` found a blocking hit.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use glyphguard::cli::{Cli, Commands};
use glyphguard::commands::{analyze, error_msg, inspect, sanitize};
use glyphguard::logger;
use glyphguard::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use glyphguard_core::{PipelineEngine, SanitizerConfig};

const EXIT_BLOCKED: u8 = 2;

fn run(cli: &Cli, theme_map: &ThemeMap) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => SanitizerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SanitizerConfig::load_default()?,
    };
    debug!("Effective settings: {:?}", config);
    let engine = PipelineEngine::new(config)?;

    match &cli.command {
        Commands::Sanitize(cmd) => sanitize::run_sanitize(&engine, cmd, theme_map, cli.quiet)?,
        Commands::Analyze(cmd) => {
            let blocked = analyze::run_analyze(&engine, cmd, theme_map)?;
            if blocked && cmd.fail_on_block {
                return Ok(ExitCode::from(EXIT_BLOCKED));
            }
        }
        Commands::Inspect(cmd) => inspect::run_inspect(&engine, cmd, theme_map)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_for_flags(cli.debug, cli.quiet));

    let theme_map = match build_theme_map(cli.theme.as_deref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            error_msg(format!("{:#}", e), &fallback);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &theme_map) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
