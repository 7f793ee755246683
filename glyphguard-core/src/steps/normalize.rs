//! Step 4: Unicode normalization.
//!
//! Safe and aggressive modes compose to NFC. Strict mode runs the
//! transliterator (NFKC with case folding) over chunks of graphemes under a
//! wall-clock budget that is re-checked after every chunk. A timeout, a
//! failing chunk or a missing transliterator all fall back to plain NFKC
//! followed by lowercasing of the whole text.

use std::time::{Duration, Instant};

use log::debug;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

use super::StepContext;
use crate::config::Mode;
use crate::errors::GlyphGuardError;
use crate::services::transliterate::plain_nfkc_lowercase;
use crate::services::Transliterator;

pub fn normalize(text: &str, ctx: &StepContext<'_>) -> String {
    match ctx.mode {
        Mode::Safe | Mode::Aggressive => to_nfc(text),
        Mode::Strict => strict_normalize(text, ctx),
    }
}

fn to_nfc(text: &str) -> String {
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        return text.to_string();
    }
    text.nfc().collect()
}

fn strict_normalize(text: &str, ctx: &StepContext<'_>) -> String {
    let Some(transliterator) = ctx.services.transliterator.as_deref() else {
        ctx.diagnostics.warn_once(
            "transliterator_unavailable",
            "No transliterator available; strict mode uses plain NFKC + lowercase.",
        );
        return plain_nfkc_lowercase(text);
    };

    let graphemes = ctx.services.segmenter.graphemes(text);
    let budget = Duration::from_millis(ctx.config.normalization_budget_ms);
    match transliterate_chunked(
        &graphemes,
        transliterator,
        ctx.config.normalization_chunk_graphemes,
        budget,
    ) {
        Ok(out) => out,
        Err(ChunkFailure::Timeout { chunks_done }) => {
            ctx.diagnostics.warn_once(
                "normalization_timeout",
                &format!(
                    "Strict normalization exceeded its {}ms budget after {} chunk(s); using plain NFKC + lowercase.",
                    ctx.config.normalization_budget_ms, chunks_done
                ),
            );
            plain_nfkc_lowercase(text)
        }
        Err(ChunkFailure::Failed(e)) => {
            ctx.diagnostics.warn_once(
                "transliteration_failed",
                &format!("{}; using plain NFKC + lowercase.", e),
            );
            plain_nfkc_lowercase(text)
        }
    }
}

#[derive(Debug)]
enum ChunkFailure {
    Timeout { chunks_done: usize },
    Failed(GlyphGuardError),
}

fn transliterate_chunked(
    graphemes: &[&str],
    transliterator: &dyn Transliterator,
    chunk_graphemes: usize,
    budget: Duration,
) -> Result<String, ChunkFailure> {
    let started = Instant::now();
    let mut out = String::new();
    for (done, chunk) in graphemes.chunks(chunk_graphemes.max(1)).enumerate() {
        let piece = transliterator.transliterate(&chunk.concat()).map_err(ChunkFailure::Failed)?;
        out.push_str(&piece);
        if started.elapsed() > budget {
            return Err(ChunkFailure::Timeout { chunks_done: done + 1 });
        }
    }
    debug!(
        "Transliterated {} graphemes in {:?} with {}.",
        graphemes.len(),
        started.elapsed(),
        transliterator.name()
    );
    Ok(out)
}
