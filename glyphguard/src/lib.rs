// glyphguard/src/lib.rs
//! # GlyphGuard CLI
//!
//! Terminal front end for `glyphguard-core`: sanitize untrusted text, explain
//! what was removed and why, or list the suspicious codepoints of a file
//! without changing it.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
