//! Module for managing the application's command-line interface (CLI) theme.
//!
//! Users can recolor the parts of the output through a YAML file mapping
//! entries to 16-color ANSI names. Entries missing from the file keep their
//! default color.

use anyhow::{Context, Result};
use glyphguard_core::Severity;
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Style per output entry.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// Parts of the output a theme can recolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    Header,
    Info,
    Warn,
    Error,
    DiffAdded,
    DiffRemoved,
    DiffHeader,
    /// Escaped invisible codepoints such as `<U+200B>`.
    Invisible,
    SeverityInfo,
    SeverityWarn,
    SeverityBlock,
    VectorKind,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 12] = [
        ThemeEntry::Header,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::DiffAdded,
        ThemeEntry::DiffRemoved,
        ThemeEntry::DiffHeader,
        ThemeEntry::Invisible,
        ThemeEntry::SeverityInfo,
        ThemeEntry::SeverityWarn,
        ThemeEntry::SeverityBlock,
        ThemeEntry::VectorKind,
    ];

    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Info => ThemeEntry::SeverityInfo,
            Severity::Warn => ThemeEntry::SeverityWarn,
            Severity::Block => ThemeEntry::SeverityBlock,
        }
    }
}

/// The sixteen names a theme file may use, with their terminal colors.
const NAMED_COLORS: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

fn lookup(name: &str) -> Option<AnsiColors> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
}

/// A color name from a theme file, e.g. `red` or `brightgreen`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ThemeColor(String);

#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
        write!(f, "Unknown theme color '{}'; expected one of: {}.", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup(s) {
            Some(_) => Ok(ThemeColor(s.to_ascii_lowercase())),
            None => Err(ParseThemeColorError(s.to_string())),
        }
    }
}

impl ThemeColor {
    /// Unknown names, which only a hand-edited file can produce, render white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        lookup(&self.0).unwrap_or(AnsiColors::White)
    }
}

/// Style of one [`ThemeEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

/// The color of `entry`, if the theme sets one.
pub fn color_for(entry: ThemeEntry, theme_map: &ThemeMap) -> Option<AnsiColors> {
    theme_map
        .get(&entry)
        .and_then(|style| style.fg.as_ref())
        .map(ThemeColor::to_ansi_color)
}

impl ThemeStyle {
    /// Loads a theme from a YAML file on disk, filling unset entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut custom: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;
        for (entry, style) in Self::default_theme_map() {
            custom.entry(entry).or_insert(style);
        }
        Ok(custom)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        let color = |name: &str| ThemeStyle { fg: Some(ThemeColor(name.to_string())) };
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Header, color("brightcyan"));
        theme.insert(ThemeEntry::Info, color("white"));
        theme.insert(ThemeEntry::Warn, color("yellow"));
        theme.insert(ThemeEntry::Error, color("red"));
        theme.insert(ThemeEntry::DiffAdded, color("green"));
        theme.insert(ThemeEntry::DiffRemoved, color("red"));
        theme.insert(ThemeEntry::DiffHeader, color("yellow"));
        theme.insert(ThemeEntry::Invisible, color("brightmagenta"));
        theme.insert(ThemeEntry::SeverityInfo, color("brightblack"));
        theme.insert(ThemeEntry::SeverityWarn, color("yellow"));
        theme.insert(ThemeEntry::SeverityBlock, color("brightred"));
        theme.insert(ThemeEntry::VectorKind, color("cyan"));
        theme
    }
}
