// glyphguard/src/ui/output_format.rs
//! Themed one-line status messages for stderr.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Paints `text` with the theme color of `entry` when the writer supports color.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    match color_for(entry, theme_map) {
        Some(color) if supports_color => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, msg);
    writeln!(writer, "{}", paint(&line, entry, theme_map, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme_map, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_without_color() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", &theme, false).unwrap();
        print_error_message(&mut out, "broken", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Warning: careful\nError: broken\n");
    }

    #[test]
    fn colored_output_has_escapes() {
        let theme = ThemeStyle::default_theme_map();
        let painted = paint("x", ThemeEntry::Error, &theme, true);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains('x'));
    }
}
