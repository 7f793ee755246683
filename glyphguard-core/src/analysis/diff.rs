//! Grapheme-array diff.
//!
//! [`MyersDiff`] interns every distinct grapheme as one `char` and hands the
//! encoded strings to `dissimilar`, so no chunk boundary can fall inside a
//! cluster. [`LcsDiff`] is the dependency-free fallback: common prefix and
//! suffix are trimmed, the middle is solved with an O(m·n) table.

use std::collections::HashMap;

use dissimilar::Chunk;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::services::DiffAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOpType {
    Equal,
    Insert,
    Delete,
}

/// A run over grapheme indices. Ranges are half-open: `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffOp {
    #[serde(rename = "type")]
    pub op: DiffOpType,
    pub a_start: usize,
    pub a_len: usize,
    pub b_start: usize,
    pub b_len: usize,
}

impl DiffOp {
    pub fn equal(a_start: usize, b_start: usize, len: usize) -> Self {
        Self { op: DiffOpType::Equal, a_start, a_len: len, b_start, b_len: len }
    }

    pub fn delete(a_start: usize, b_start: usize, len: usize) -> Self {
        Self { op: DiffOpType::Delete, a_start, a_len: len, b_start, b_len: 0 }
    }

    pub fn insert(a_start: usize, b_start: usize, len: usize) -> Self {
        Self { op: DiffOpType::Insert, a_start, a_len: 0, b_start, b_len: len }
    }

    pub fn a_end(&self) -> usize {
        self.a_start + self.a_len
    }

    pub fn b_end(&self) -> usize {
        self.b_start + self.b_len
    }

    pub fn is_equal(&self) -> bool {
        self.op == DiffOpType::Equal
    }

    fn is_empty(&self) -> bool {
        self.a_len == 0 && self.b_len == 0
    }

    /// The original-side graphemes of this run, concatenated.
    pub fn a_slice(&self, original: &[&str]) -> String {
        original[self.a_start..self.a_end()].concat()
    }

    /// The sanitized-side graphemes of this run, concatenated.
    pub fn b_slice(&self, sanitized: &[&str]) -> String {
        sanitized[self.b_start..self.b_end()].concat()
    }
}

/// Drops empty runs and merges neighbours of the same type that are
/// contiguous on both sides.
pub fn merge_ops(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut merged: Vec<DiffOp> = Vec::with_capacity(ops.len());
    for op in ops.into_iter().filter(|op| !op.is_empty()) {
        match merged.last_mut() {
            Some(last) if last.op == op.op && last.a_end() == op.a_start && last.b_end() == op.b_start => {
                last.a_len += op.a_len;
                last.b_len += op.b_len;
            }
            _ => merged.push(op),
        }
    }
    merged
}

/// Delete everything, insert everything.
fn replace_all(a_start: usize, a_len: usize, b_start: usize, b_len: usize) -> Vec<DiffOp> {
    vec![DiffOp::delete(a_start, b_start, a_len), DiffOp::insert(a_start + a_len, b_start, b_len)]
}

/// Maps each distinct grapheme to a distinct scalar value.
#[derive(Default)]
struct GraphemeInterner<'a> {
    codes: HashMap<&'a str, char>,
    next: u32,
}

impl<'a> GraphemeInterner<'a> {
    const FIRST_CODE: u32 = 0x100;

    fn code_for(&mut self, grapheme: &'a str) -> Option<char> {
        if let Some(&code) = self.codes.get(grapheme) {
            return Some(code);
        }
        let mut raw = Self::FIRST_CODE + self.next;
        if raw >= 0xD800 {
            raw += 0x800; // skip surrogates
        }
        let code = char::from_u32(raw)?;
        self.next += 1;
        self.codes.insert(grapheme, code);
        Some(code)
    }

    fn encode(&mut self, graphemes: &[&'a str]) -> Option<String> {
        graphemes.iter().map(|g| self.code_for(g)).collect()
    }
}

/// Myers diff (with semantic cleanup) over interned graphemes, via `dissimilar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;

impl DiffAlgorithm for MyersDiff {
    fn diff(&self, original: &[&str], sanitized: &[&str]) -> Vec<DiffOp> {
        let mut interner = GraphemeInterner::default();
        let (Some(a), Some(b)) = (interner.encode(original), interner.encode(sanitized)) else {
            warn!("Too many distinct graphemes to intern; reporting a full replacement.");
            return merge_ops(replace_all(0, original.len(), 0, sanitized.len()));
        };

        let mut ops = Vec::new();
        let (mut ai, mut bi) = (0usize, 0usize);
        for chunk in dissimilar::diff(&a, &b) {
            match chunk {
                Chunk::Equal(s) => {
                    let n = s.chars().count();
                    ops.push(DiffOp::equal(ai, bi, n));
                    ai += n;
                    bi += n;
                }
                Chunk::Delete(s) => {
                    let n = s.chars().count();
                    ops.push(DiffOp::delete(ai, bi, n));
                    ai += n;
                }
                Chunk::Insert(s) => {
                    let n = s.chars().count();
                    ops.push(DiffOp::insert(ai, bi, n));
                    bi += n;
                }
            }
        }
        merge_ops(ops)
    }

    fn name(&self) -> &'static str {
        "dissimilar"
    }
}

/// Longest-common-subsequence diff with a bounded table.
#[derive(Debug, Clone, Copy)]
pub struct LcsDiff {
    /// Largest `(m + 1) * (n + 1)` table built for the differing middle.
    /// Beyond it the middle is reported as one replacement.
    pub max_cells: usize,
}

impl Default for LcsDiff {
    fn default() -> Self {
        Self { max_cells: 4_000_000 }
    }
}

impl LcsDiff {
    fn diff_middle(&self, a: &[&str], b: &[&str], a_off: usize, b_off: usize, ops: &mut Vec<DiffOp>) {
        let (m, n) = (a.len(), b.len());
        let cells = (m + 1).saturating_mul(n + 1);
        if cells > self.max_cells {
            warn!("LCS table of {} cells exceeds the {} cell limit; reporting a full replacement.", cells, self.max_cells);
            ops.extend(replace_all(a_off, m, b_off, n));
            return;
        }

        // table[i][j] = LCS length of a[i..] and b[j..]
        let width = n + 1;
        let mut table = vec![0u32; cells];
        for i in (0..m).rev() {
            for j in (0..n).rev() {
                table[i * width + j] = if a[i] == b[j] {
                    table[(i + 1) * width + j + 1] + 1
                } else {
                    table[(i + 1) * width + j].max(table[i * width + j + 1])
                };
            }
        }

        let (mut i, mut j) = (0usize, 0usize);
        while i < m && j < n {
            if a[i] == b[j] {
                ops.push(DiffOp::equal(a_off + i, b_off + j, 1));
                i += 1;
                j += 1;
            } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
                ops.push(DiffOp::delete(a_off + i, b_off + j, 1));
                i += 1;
            } else {
                ops.push(DiffOp::insert(a_off + i, b_off + j, 1));
                j += 1;
            }
        }
        if i < m {
            ops.push(DiffOp::delete(a_off + i, b_off + j, m - i));
        }
        if j < n {
            ops.push(DiffOp::insert(a_off + m, b_off + j, n - j));
        }
    }
}

impl DiffAlgorithm for LcsDiff {
    fn diff(&self, original: &[&str], sanitized: &[&str]) -> Vec<DiffOp> {
        let prefix = original.iter().zip(sanitized).take_while(|(x, y)| x == y).count();
        let suffix = original[prefix..]
            .iter()
            .rev()
            .zip(sanitized[prefix..].iter().rev())
            .take_while(|(x, y)| x == y)
            .count();
        let a_mid = &original[prefix..original.len() - suffix];
        let b_mid = &sanitized[prefix..sanitized.len() - suffix];
        debug!("LCS diff: prefix {}, suffix {}, middle {}x{}", prefix, suffix, a_mid.len(), b_mid.len());

        let mut ops = vec![DiffOp::equal(0, 0, prefix)];
        self.diff_middle(a_mid, b_mid, prefix, prefix, &mut ops);
        ops.push(DiffOp::equal(original.len() - suffix, sanitized.len() - suffix, suffix));
        merge_ops(ops)
    }

    fn name(&self) -> &'static str {
        "lcs"
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(ops: &[DiffOp], original: &[&str], sanitized: &[&str]) -> (String, String) {
        let a: String = ops.iter().map(|op| op.a_slice(original)).collect();
        let b: String = ops.iter().map(|op| op.b_slice(sanitized)).collect();
        (a, b)
    }

    fn check_round_trip(algorithm: &dyn DiffAlgorithm, original: &[&str], sanitized: &[&str]) {
        let ops = algorithm.diff(original, sanitized);
        let (a, b) = reconstruct(&ops, original, sanitized);
        assert_eq!(a, original.concat(), "{} original side", algorithm.name());
        assert_eq!(b, sanitized.concat(), "{} sanitized side", algorithm.name());
        for pair in ops.windows(2) {
            assert_eq!(pair[0].a_end(), pair[1].a_start);
            assert_eq!(pair[0].b_end(), pair[1].b_start);
        }
        for op in &ops {
            if op.is_equal() {
                assert_eq!(op.a_slice(original), op.b_slice(sanitized));
            }
        }
    }

    #[test]
    fn merge_combines_contiguous_runs() {
        let ops = vec![
            DiffOp::equal(0, 0, 2),
            DiffOp::delete(2, 2, 1),
            DiffOp::delete(3, 2, 1),
            DiffOp::insert(4, 2, 0),
            DiffOp::equal(4, 2, 1),
        ];
        assert_eq!(
            merge_ops(ops),
            vec![DiffOp::equal(0, 0, 2), DiffOp::delete(2, 2, 2), DiffOp::equal(4, 2, 1)]
        );
    }

    #[test]
    fn lcs_finds_single_deletion() {
        let original = ["T", "e", "s", "t", "\u{202E}", "x"];
        let sanitized = ["T", "e", "s", "t", "x"];
        let ops = LcsDiff::default().diff(&original, &sanitized);
        assert_eq!(
            ops,
            vec![DiffOp::equal(0, 0, 4), DiffOp::delete(4, 4, 1), DiffOp::equal(5, 4, 1)]
        );
    }

    #[test]
    fn myers_finds_single_deletion() {
        let original = ["a", "b", "\u{200B}", "c", "d", "e", "f"];
        let sanitized = ["a", "b", "c", "d", "e", "f"];
        let ops = MyersDiff.diff(&original, &sanitized);
        assert_eq!(
            ops,
            vec![DiffOp::equal(0, 0, 2), DiffOp::delete(2, 2, 1), DiffOp::equal(3, 2, 4)]
        );
    }

    #[test]
    fn round_trips_on_supplementary_and_combining_text() {
        let original = ["\u{1F469}\u{200D}\u{1F4BB}", "e\u{0301}", "\u{E0041}", "x", "\u{10000}"];
        let sanitized = ["\u{1F469}\u{1F4BB}", "\u{00E9}", "x", "y", "\u{10000}", "\n"];
        check_round_trip(&MyersDiff, &original, &sanitized);
        check_round_trip(&LcsDiff::default(), &original, &sanitized);
    }

    #[test]
    fn round_trips_on_empty_sides() {
        check_round_trip(&MyersDiff, &[], &[]);
        check_round_trip(&MyersDiff, &["a"], &[]);
        check_round_trip(&MyersDiff, &[], &["a", "b"]);
        check_round_trip(&LcsDiff::default(), &[], &[]);
        check_round_trip(&LcsDiff::default(), &["a", "b"], &[]);
        check_round_trip(&LcsDiff::default(), &[], &["a"]);
        assert!(LcsDiff::default().diff(&[], &[]).is_empty());
    }

    #[test]
    fn lcs_degrades_to_replacement_over_cell_limit() {
        let lcs = LcsDiff { max_cells: 4 };
        let original = ["a", "b", "c"];
        let sanitized = ["x", "y", "z"];
        let ops = lcs.diff(&original, &sanitized);
        assert_eq!(ops, vec![DiffOp::delete(0, 0, 3), DiffOp::insert(3, 0, 3)]);
        check_round_trip(&lcs, &original, &sanitized);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(DiffOp::delete(4, 4, 1)).unwrap();
        assert_eq!(json["type"], "delete");
        assert_eq!(json["aStart"], 4);
        assert_eq!(json["bLen"], 0);
    }
}
