// glyphguard/src/ui/mod.rs
//! Terminal rendering: theme, status messages, diffs and tables.

pub mod diff_viewer;
pub mod output_format;
pub mod summary_table;
pub mod theme;
