//! Step 1: HTML entity decoding.

use log::debug;

use crate::stats::{Advisory, Stats};

/// Nesting deeper than this is left partially encoded.
const MAX_DECODE_PASSES: usize = 16;

/// Decodes named and numeric HTML entities until the text stops changing, so
/// that `&amp;lt;` ends up as `<` rather than `&lt;`.
pub fn decode_entities(text: &str, stats: &mut Stats) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut current = text.to_string();
    for pass in 0..MAX_DECODE_PASSES {
        let decoded = html_escape::decode_html_entities(&current).into_owned();
        if decoded == current {
            break;
        }
        debug!("Entity decoding pass {} changed the text.", pass + 1);
        current = decoded;
    }
    if current != text {
        stats.raise(Advisory::HtmlEntities);
    }
    current
}
