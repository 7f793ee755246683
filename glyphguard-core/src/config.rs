//! Configuration management for `glyphguard-core`.
//!
//! This module defines the sanitization [`Mode`] and the [`SanitizerConfig`] that
//! bounds the pipeline (input ceiling, normalization budget, Zalgo cap). Settings
//! are read from YAML: the embedded defaults first, then an optional user file
//! whose keys override them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Reference ceiling for `analyze()` input: 1 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1_048_576;
pub const DEFAULT_CHUNK_GRAPHEMES: usize = 4096;
pub const DEFAULT_NORMALIZATION_BUDGET_MS: u64 = 150;
pub const DEFAULT_MAX_TRAILING_MARKS: usize = 2;

/// Security posture of a sanitization run.
///
/// Unknown names never fail to parse: they coerce to [`Mode::Safe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Preserves legitimate multilingual content (joiners, BiDi marks, markdown).
    #[default]
    Safe,
    /// Folds homoglyphs and digits, strips markdown emphasis and noncharacters.
    Aggressive,
    /// Everything in `Aggressive`, plus NFKC with case folding and Private Use removal.
    Strict,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Safe => "safe",
            Mode::Aggressive => "aggressive",
            Mode::Strict => "strict",
        }
    }

    /// Parses a mode name case-insensitively, falling back to `Safe`.
    pub fn parse_lenient(raw: &str) -> Mode {
        match raw.trim().to_ascii_lowercase().as_str() {
            "safe" => Mode::Safe,
            "aggressive" => Mode::Aggressive,
            "strict" => Mode::Strict,
            other => {
                debug!("Unrecognized mode '{}', using safe.", other);
                Mode::Safe
            }
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Mode::Safe)
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::parse_lenient(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Mode::parse_lenient(&raw))
    }
}

/// Limits and defaults for the sanitization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Mode used by front ends when the caller does not pick one.
    pub default_mode: Mode,
    /// Byte ceiling enforced by `analyze()`.
    pub max_input_bytes: usize,
    /// Graphemes per transliteration chunk in strict normalization.
    pub normalization_chunk_graphemes: usize,
    /// Wall-clock budget for strict normalization, re-checked after every chunk.
    pub normalization_budget_ms: u64,
    /// Combining marks kept after a base character; longer runs are Zalgo.
    pub max_trailing_combining_marks: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::Safe,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            normalization_chunk_graphemes: DEFAULT_CHUNK_GRAPHEMES,
            normalization_budget_ms: DEFAULT_NORMALIZATION_BUDGET_MS,
            max_trailing_combining_marks: DEFAULT_MAX_TRAILING_MARKS,
        }
    }
}

/// User-supplied settings. Every key is optional and overrides the default when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConfigOverrides {
    pub default_mode: Option<Mode>,
    pub max_input_bytes: Option<usize>,
    pub normalization_chunk_graphemes: Option<usize>,
    pub normalization_budget_ms: Option<u64>,
    pub max_trailing_combining_marks: Option<usize>,
}

impl SanitizerConfig {
    /// Loads the built-in settings from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default sanitizer settings from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: SanitizerConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default sanitizer settings")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads user overrides from a YAML file.
    pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<ConfigOverrides> {
        let path = path.as_ref();
        info!("Loading sanitizer settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let overrides: ConfigOverrides = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(overrides)
    }

    /// Loads the defaults and applies the overrides found in `path`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let overrides = Self::load_overrides(path)?;
        let merged = merge_config(Self::load_default()?, Some(overrides));
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.max_input_bytes == 0 {
            errors.push("`max_input_bytes` must be greater than 0.");
        }
        if self.normalization_chunk_graphemes == 0 {
            errors.push("`normalization_chunk_graphemes` must be greater than 0.");
        }
        if self.max_trailing_combining_marks == 0 {
            errors.push("`max_trailing_combining_marks` must be greater than 0.");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Config validation failed:\n{}", errors.join("\n")))
        }
    }
}

/// Overlays user-provided settings on top of the defaults.
pub fn merge_config(default_config: SanitizerConfig, overrides: Option<ConfigOverrides>) -> SanitizerConfig {
    let mut merged = default_config;
    let Some(user) = overrides else {
        return merged;
    };

    if let Some(mode) = user.default_mode {
        debug!("Overriding default mode with user value: {}", mode);
        merged.default_mode = mode;
    }
    if let Some(limit) = user.max_input_bytes {
        debug!("Overriding max_input_bytes with user value: {}", limit);
        merged.max_input_bytes = limit;
    }
    if let Some(chunk) = user.normalization_chunk_graphemes {
        debug!("Overriding normalization chunk size with user value: {}", chunk);
        merged.normalization_chunk_graphemes = chunk;
    }
    if let Some(budget) = user.normalization_budget_ms {
        debug!("Overriding normalization budget with user value: {}ms", budget);
        merged.normalization_budget_ms = budget;
    }
    if let Some(cap) = user.max_trailing_combining_marks {
        debug!("Overriding combining mark cap with user value: {}", cap);
        merged.max_trailing_combining_marks = cap;
    }
    merged
}
