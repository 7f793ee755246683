//! Step 14: Cyrillic, Greek and fullwidth look-alikes folded to ASCII.

use glyphguard_tables::homoglyphs::homoglyph_for;

use crate::config::Mode;
use crate::stats::Stats;

pub fn normalize_homoglyphs(text: &str, mode: Mode, stats: &mut Stats) -> String {
    if mode.is_safe() {
        return text.to_string();
    }
    let mut folded = 0usize;
    let out = text
        .chars()
        .map(|c| match homoglyph_for(c) {
            Some(latin) => {
                folded += 1;
                latin
            }
            None => c,
        })
        .collect();
    stats.homoglyphs_normalized += folded;
    out
}
