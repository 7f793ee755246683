use unicode_normalization::UnicodeNormalization;

use super::Transliterator;
use crate::errors::GlyphGuardError;

/// NFKC followed by full case folding, re-composed so the output is closed
/// under another application.
#[derive(Debug, Clone, Copy, Default)]
pub struct NfkcCasefold;

/// Case folds that differ from simple lowercasing.
fn push_folded(c: char, out: &mut String) {
    match c {
        '\u{00DF}' | '\u{1E9E}' => out.push_str("ss"),
        '\u{03C2}' => out.push('\u{03C3}'),
        '\u{FB05}' | '\u{FB06}' => out.push_str("st"),
        _ => out.extend(c.to_lowercase()),
    }
}

impl Transliterator for NfkcCasefold {
    fn transliterate(&self, chunk: &str) -> Result<String, GlyphGuardError> {
        let mut folded = String::with_capacity(chunk.len());
        for c in chunk.nfkc() {
            push_folded(c, &mut folded);
        }
        Ok(folded.nfkc().collect())
    }

    fn name(&self) -> &'static str {
        "nfkc-casefold"
    }
}

/// Fallback used when no transliterator is available, it fails, or it runs
/// past its budget.
pub fn plain_nfkc_lowercase(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
