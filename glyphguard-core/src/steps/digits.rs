//! Step 7: decimal digits from other numbering systems.

use super::StepContext;
use crate::stats::{Advisory, Stats};

/// Rewrites every non-ASCII decimal digit the digit service recognizes to
/// ASCII `0`-`9`. Aggressive and strict modes only.
pub fn normalize_digits(text: &str, ctx: &StepContext<'_>, stats: &mut Stats) -> String {
    if ctx.mode.is_safe() {
        return text.to_string();
    }
    let digits = &ctx.services.digits;
    let mut normalized = 0usize;
    let out: String = text
        .chars()
        .map(|c| {
            if c.is_ascii() {
                return c;
            }
            match digits.decimal_value(c) {
                Some(value) => {
                    normalized += 1;
                    char::from(b'0' + value)
                }
                None => c,
            }
        })
        .collect();
    if normalized > 0 {
        stats.digits_normalized += normalized;
        stats.raise(Advisory::NonAsciiDigits);
    }
    out
}
