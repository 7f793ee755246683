// glyphguard/src/ui/diff_viewer.rs
//! Diff rendering for the terminal.
//!
//! Both views escape invisible codepoints as `<U+XXXXX>` first, otherwise a
//! removed zero-width space would show up as an unchanged-looking line.

use std::io::{self, Write};

use diffy::{create_patch, Line as DiffLine};
use dissimilar::Chunk;
use glyphguard_core::analysis::classifier::kinds_for;
use glyphguard_core::findings::format_code_point;
use glyphguard_core::services::DigitValues;
use glyphguard_core::VectorKind;

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

fn is_unprintable(c: char, digits: &dyn DigitValues) -> bool {
    if c == '\n' || c == '\t' {
        return false;
    }
    if c.is_control() {
        return true;
    }
    kinds_for(c, digits, false).iter().any(|kind| {
        matches!(
            kind,
            VectorKind::BidiControls
                | VectorKind::DefaultIgnorables
                | VectorKind::TagCharacters
                | VectorKind::Noncharacters
                | VectorKind::PrivateUse
        )
    })
}

/// Replaces every invisible or control codepoint with `<U+XXXXX>`.
pub fn escape_invisibles(text: &str, digits: &dyn DigitValues) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_unprintable(c, digits) {
            out.push('<');
            out.push_str(&format_code_point(c as u32));
            out.push('>');
        } else {
            out.push(c);
        }
    }
    out
}

/// Writes a unified, line-based diff of `original` against `sanitized`.
pub fn print_diff<W: Write>(
    original: &str,
    sanitized: &str,
    digits: &dyn DigitValues,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let original = escape_invisibles(original, digits);
    let sanitized = escape_invisibles(sanitized, digits);
    let patch = create_patch(&original, &sanitized);

    writeln!(writer, "{}", paint("--- original", ThemeEntry::DiffHeader, theme_map, supports_color))?;
    writeln!(writer, "{}", paint("+++ sanitized", ThemeEntry::DiffHeader, theme_map, supports_color))?;
    if patch.hunks().is_empty() {
        writeln!(writer, "No changes.")?;
        return Ok(());
    }
    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        let header = format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len());
        writeln!(writer, "{}", paint(&header, ThemeEntry::DiffHeader, theme_map, supports_color))?;
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    let text = format!("-{}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&text, ThemeEntry::DiffRemoved, theme_map, supports_color))?;
                }
                DiffLine::Insert(s) => {
                    let text = format!("+{}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&text, ThemeEntry::DiffAdded, theme_map, supports_color))?;
                }
                DiffLine::Context(s) => writeln!(writer, " {}", s.trim_end_matches('\n'))?,
            }
        }
    }
    Ok(())
}

/// Writes one character-level view of the change: removals as `[-..-]`,
/// insertions as `{+..+}`.
pub fn print_inline_diff<W: Write>(
    original: &str,
    sanitized: &str,
    digits: &dyn DigitValues,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let mut rendered = String::new();
    for chunk in dissimilar::diff(original, sanitized) {
        match chunk {
            Chunk::Equal(s) => rendered.push_str(&escape_invisibles(s, digits)),
            Chunk::Delete(s) => {
                let text = format!("[-{}-]", escape_invisibles(s, digits));
                rendered.push_str(&paint(&text, ThemeEntry::DiffRemoved, theme_map, supports_color));
            }
            Chunk::Insert(s) => {
                let text = format!("{{+{}+}}", escape_invisibles(s, digits));
                rendered.push_str(&paint(&text, ThemeEntry::DiffAdded, theme_map, supports_color));
            }
        }
    }
    writeln!(writer, "{}", rendered.trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use glyphguard_core::services::UnicodeDigitValues;

    #[test]
    fn escapes_invisibles_but_not_newlines() {
        let digits = UnicodeDigitValues;
        assert_eq!(escape_invisibles("a\u{200B}b\u{202E}\n", &digits), "a<U+0200B>b<U+0202E>\n");
        assert_eq!(escape_invisibles("\u{0430}pple \u{0663}", &digits), "\u{0430}pple \u{0663}");
    }

    #[test]
    fn unified_diff_shows_removed_invisible() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_diff("Hello\u{200B}world\n", "Helloworld\n", &UnicodeDigitValues, &mut out, &theme, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("-Hello<U+0200B>world"));
        assert!(text.contains("+Helloworld"));
    }

    #[test]
    fn identical_texts_report_no_changes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_diff("same\n", "same\n", &UnicodeDigitValues, &mut out, &theme, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No changes."));
    }

    #[test]
    fn inline_diff_marks_deletions() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_inline_diff("pay\u{200B}pal", "paypal", &UnicodeDigitValues, &mut out, &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "pay[-<U+0200B>-]pal\n");
    }
}
