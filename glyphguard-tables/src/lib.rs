#![no_std]

pub mod ranges;
pub mod homoglyphs;
pub mod punctuation;
pub mod digits;
pub mod mirrored;

/// An inclusive codepoint range `(first, last)`.
pub type CodepointRange = (u32, u32);

pub use ranges::{in_ranges, is_noncharacter};
