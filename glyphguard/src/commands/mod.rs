// glyphguard/src/commands/mod.rs
//! Subcommand implementations and the helpers they share.

pub mod analyze;
pub mod inspect;
pub mod sanitize;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a\u{200B}b").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "a\u{200B}b");
    }

    #[test]
    fn missing_input_file_names_the_path() {
        let err = read_input(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.txt"));
    }
}
