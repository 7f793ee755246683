// glyphguard/src/ui/summary_table.rs
//! comfy-table renderings of stats, hits and classifications.

use std::io::{self, Write};

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use glyphguard_core::findings::format_code_point;
use glyphguard_core::{Classification, Stats, Summary, VectorHit};
use owo_colors::AnsiColors;

use crate::ui::output_format::paint;
use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

fn table_color(color: AnsiColors) -> Color {
    match color {
        AnsiColors::Black => Color::Black,
        AnsiColors::Red => Color::DarkRed,
        AnsiColors::Green => Color::DarkGreen,
        AnsiColors::Yellow => Color::DarkYellow,
        AnsiColors::Blue => Color::DarkBlue,
        AnsiColors::Magenta => Color::DarkMagenta,
        AnsiColors::Cyan => Color::DarkCyan,
        AnsiColors::White => Color::Grey,
        AnsiColors::BrightBlack => Color::DarkGrey,
        AnsiColors::BrightRed => Color::Red,
        AnsiColors::BrightGreen => Color::Green,
        AnsiColors::BrightYellow => Color::Yellow,
        AnsiColors::BrightBlue => Color::Blue,
        AnsiColors::BrightMagenta => Color::Magenta,
        AnsiColors::BrightCyan => Color::Cyan,
        _ => Color::White,
    }
}

fn themed_cell(text: impl ToString, entry: ThemeEntry, theme_map: &ThemeMap) -> Cell {
    let cell = Cell::new(text);
    match color_for(entry, theme_map) {
        Some(color) => cell.fg(table_color(color)),
        None => cell,
    }
}

fn new_table(header: Vec<&str>, theme_map: &ThemeMap, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.into_iter().map(|h| themed_cell(h, ThemeEntry::Header, theme_map)));
    if supports_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

/// Counters and raised advisories of one `sanitize` run.
pub fn print_stats<W: Write>(stats: &Stats, writer: &mut W, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    let mut table = new_table(vec!["Counter", "Value"], theme_map, supports_color);
    table
        .add_row(vec![Cell::new("original_length"), Cell::new(stats.original_length)])
        .add_row(vec![Cell::new("final_length"), Cell::new(stats.final_length)])
        .add_row(vec![Cell::new("characters_removed"), Cell::new(stats.characters_removed)])
        .add_row(vec![Cell::new("invisibles_removed"), Cell::new(stats.invisibles_removed)])
        .add_row(vec![Cell::new("homoglyphs_normalized"), Cell::new(stats.homoglyphs_normalized)])
        .add_row(vec![Cell::new("digits_normalized"), Cell::new(stats.digits_normalized)]);
    writeln!(writer, "{}", table)?;

    let raised = stats.advisories.raised();
    if raised.is_empty() {
        writeln!(writer, "No advisories raised.")?;
    }
    for advisory in raised {
        writeln!(writer, "{}", paint(&format!("! {}", advisory.note()), ThemeEntry::Warn, theme_map, supports_color))?;
    }
    Ok(())
}

/// One row per hit, colored by severity.
pub fn print_hits<W: Write>(hits: &[VectorHit], writer: &mut W, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    if hits.is_empty() {
        return writeln!(writer, "No security-relevant changes.");
    }
    let mut table = new_table(vec!["Id", "Kind", "Severity", "Graphemes", "Code points"], theme_map, supports_color);
    for hit in hits {
        table.add_row(vec![
            Cell::new(&hit.id),
            themed_cell(hit.kind, ThemeEntry::VectorKind, theme_map),
            themed_cell(hit.severity, ThemeEntry::for_severity(hit.severity), theme_map),
            Cell::new(format!("{}..{}", hit.original_range.start, hit.original_range.end)),
            Cell::new(hit.code_points.join(" ")),
        ]);
    }
    writeln!(writer, "{}", table)
}

/// Change count, per-kind counts and advisory notes.
pub fn print_summary<W: Write>(summary: &Summary, writer: &mut W, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(
        writer,
        "{}",
        paint(&format!("Total changes: {}", summary.total_changes), ThemeEntry::Header, theme_map, supports_color)
    )?;
    for (kind, count) in &summary.vector_counts {
        writeln!(writer, "  {}: {}", paint(kind.as_str(), ThemeEntry::VectorKind, theme_map, supports_color), count)?;
    }
    for note in &summary.notes {
        writeln!(writer, "{}", paint(&format!("! {}", note), ThemeEntry::Warn, theme_map, supports_color))?;
    }
    Ok(())
}

/// Suspicious codepoints of an unmodified text.
pub fn print_classifications<W: Write>(
    classifications: &[Classification],
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    if classifications.is_empty() {
        return writeln!(writer, "No suspicious codepoints.");
    }
    let mut table = new_table(vec!["Grapheme", "Code point", "Kinds"], theme_map, supports_color);
    for classification in classifications {
        let kinds: Vec<&str> = classification.kinds.iter().map(|k| k.as_str()).collect();
        table.add_row(vec![
            Cell::new(classification.grapheme_index),
            Cell::new(format_code_point(classification.code_point)),
            themed_cell(kinds.join(", "), ThemeEntry::VectorKind, theme_map),
        ]);
    }
    writeln!(writer, "{}", table)
}
