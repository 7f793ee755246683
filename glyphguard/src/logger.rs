// glyphguard/src/logger.rs
//! Logger initialization for the CLI.
//!
//! `RUST_LOG` is honored unless `--debug` or `--quiet` forces a level.
//! Log output goes to stderr so that sanitized text on stdout stays clean.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    // A second init (tests calling into the binary entry) is harmless.
    let _ = builder.try_init();
}

/// `--quiet` wins over `--debug`.
pub fn level_for_flags(debug: bool, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
