//! Joins diff runs with classifications into [`VectorHit`]s and a [`Summary`].

use std::collections::BTreeMap;

use super::diff::{DiffOp, DiffOpType};
use crate::config::Mode;
use crate::findings::{format_code_point, Classification, GraphemeRange, Summary, VectorHit, VectorKind};
use crate::stats::Stats;

/// One hit per distinct kind per non-equal run. Runs whose original side has
/// no classified codepoint (plain whitespace or ASCII edits) produce none.
/// A deletion that sits next to an insertion is a substitution, and its hit
/// reports the inserted graphemes as the sanitized side.
///
/// `classifications` must be sorted by grapheme index, as
/// [`classify`](super::classifier::classify) returns them.
pub fn build_hits(
    ops: &[DiffOp],
    original: &[&str],
    sanitized: &[&str],
    classifications: &[Classification],
    mode: Mode,
) -> Vec<VectorHit> {
    let mut hits = Vec::new();
    for (i, op) in ops.iter().enumerate().filter(|(_, op)| !op.is_equal()) {
        let replacement = match op.op {
            DiffOpType::Delete => substituted_by(ops, i),
            _ => op,
        };
        let lo = classifications.partition_point(|c| c.grapheme_index < op.a_start);
        let hi = classifications.partition_point(|c| c.grapheme_index < op.a_end());

        let mut by_kind: BTreeMap<VectorKind, Vec<u32>> = BTreeMap::new();
        for classification in &classifications[lo..hi] {
            for kind in &classification.kinds {
                let code_points = by_kind.entry(*kind).or_default();
                if !code_points.contains(&classification.code_point) {
                    code_points.push(classification.code_point);
                }
            }
        }

        for (kind, code_points) in by_kind {
            hits.push(VectorHit {
                id: format!("{}-{}", kind, hits.len() + 1),
                kind,
                severity: kind.severity(mode),
                original_range: GraphemeRange { start: op.a_start, end: op.a_end() },
                sanitized_range: GraphemeRange { start: replacement.b_start, end: replacement.b_end() },
                original_slice: op.a_slice(original),
                sanitized_slice: replacement.b_slice(sanitized),
                code_points: code_points.into_iter().map(format_code_point).collect(),
                note: kind.note().to_string(),
            });
        }
    }
    hits
}

/// The insertion that replaces the deletion at `ops[i]`, or the deletion itself.
fn substituted_by(ops: &[DiffOp], i: usize) -> &DiffOp {
    let op = &ops[i];
    let next = ops
        .get(i + 1)
        .filter(|next| next.op == DiffOpType::Insert && next.b_start == op.b_start);
    let prev = i
        .checked_sub(1)
        .and_then(|p| ops.get(p))
        .filter(|prev| prev.op == DiffOpType::Insert && prev.b_end() == op.b_start);
    next.or(prev).unwrap_or(op)
}

pub fn summarize(ops: &[DiffOp], hits: &[VectorHit], stats: &Stats) -> Summary {
    let mut vector_counts = BTreeMap::new();
    for hit in hits {
        *vector_counts.entry(hit.kind).or_insert(0) += 1;
    }
    Summary {
        total_changes: ops.iter().filter(|op| !op.is_equal()).count(),
        vector_counts,
        notes: stats.advisories.raised().iter().map(|a| a.note().to_string()).collect(),
    }
}
