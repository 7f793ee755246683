// glyphguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the glyphguard application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use glyphguard_core::Mode;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "glyphguard",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip invisible characters, BiDi spoofing and homoglyphs from untrusted text",
    long_about = "GlyphGuard sanitizes untrusted Unicode text against invisible-character steganography, bidirectional-text spoofing (Trojan Source) and homoglyph confusables, while keeping legitimate multilingual text intact. It can also explain every security-relevant change it made.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML file overriding the built-in sanitizer settings.
    #[arg(long = "config", value_name = "FILE", global = true, env = "GLYPHGUARD_CONFIG", help = "Path to a YAML file overriding the built-in sanitizer settings.")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `glyphguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin.
    #[command(about = "Sanitizes an input file or stdin.")]
    Sanitize(SanitizeCommand),

    /// Sanitizes the input and reports every security-relevant change.
    #[command(about = "Sanitizes the input and reports every security-relevant change.")]
    Analyze(AnalyzeCommand),

    /// Lists the suspicious codepoints of the input without sanitizing it.
    #[command(about = "Lists the suspicious codepoints of the input without sanitizing it.")]
    Inspect(InspectCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Sanitization mode; unknown names fall back to `safe`.
    #[arg(long, short = 'm', value_name = "MODE", help = "Sanitization mode: safe, aggressive or strict (defaults to the configured mode).")]
    pub mode: Option<Mode>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Print counters and advisories to stderr.
    #[arg(long, short = 's', help = "Print counters and advisories to stderr.")]
    pub stats: bool,

    /// Print the sanitized text and stats as JSON.
    #[arg(long, conflicts_with = "diff", help = "Print the sanitized text and its stats as JSON.")]
    pub json: bool,
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Sanitization mode; unknown names fall back to `safe`.
    #[arg(long, short = 'm', value_name = "MODE", help = "Sanitization mode: safe, aggressive or strict (defaults to the configured mode).")]
    pub mode: Option<Mode>,

    /// Print the full analysis result as JSON.
    #[arg(long, help = "Print the full analysis result as JSON.")]
    pub json: bool,

    /// Exit with code 2 when any finding has `block` severity.
    #[arg(long = "fail-on-block", help = "Exit with a non-zero code (2) if any finding has block severity.")]
    pub fail_on_block: bool,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the classifications as JSON.
    #[arg(long, help = "Print the classifications as JSON.")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_parses_leniently() {
        let cli = Cli::parse_from(["glyphguard", "sanitize", "--mode", "STRICT"]);
        match cli.command {
            Commands::Sanitize(cmd) => assert_eq!(cmd.mode, Some(Mode::Strict)),
            other => panic!("unexpected command {:?}", other),
        }
        let cli = Cli::parse_from(["glyphguard", "analyze", "-m", "paranoid"]);
        match cli.command {
            Commands::Analyze(cmd) => assert_eq!(cmd.mode, Some(Mode::Safe)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["glyphguard", "inspect", "--json", "-q"]);
        assert!(cli.quiet);
    }
}
