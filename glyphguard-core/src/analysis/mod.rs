//! Diff-and-classify layer behind `analyze()`.
//!
//! The classifier looks at the original text on its own; the diff engine
//! aligns original and sanitized graphemes; the hit builder joins the two.

pub mod classifier;
pub mod diff;
pub mod hits;

pub use classifier::classify;
pub use diff::{DiffOp, DiffOpType, LcsDiff, MyersDiff};
pub use hits::{build_hits, summarize};
