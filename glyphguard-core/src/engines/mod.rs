//! Implementations of the `SanitizationEngine` trait.
//!
//! License: MIT OR Apache-2.0

pub mod pipeline_engine;
