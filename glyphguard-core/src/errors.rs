//! errors.rs - Custom error types for the glyphguard-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `glyphguard-core` library.
///
/// Marked `#[non_exhaustive]` so that new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GlyphGuardError {
    /// Input rejected before any processing because it exceeds the byte ceiling.
    #[error("Input of {len} bytes exceeds the maximum of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    #[error("Invalid sanitizer configuration: {0}")]
    InvalidConfig(String),

    /// A transliteration capability failed on a chunk. Recovered locally.
    #[error("Transliteration failed: {0}")]
    Transliteration(String),

    /// An internal invariant did not hold. Aborts the current call only.
    #[error("Internal invariant violated: {0}")]
    Internal(String),
}
