//! Step 9: orphaned and stacked (Zalgo) combining marks.

use glyphguard_tables::ranges::{is_bidi_control, is_bidi_mark, is_default_ignorable, is_private_use, is_tag};
use glyphguard_tables::is_noncharacter;
use unicode_normalization::char::is_combining_mark;

use crate::stats::{Advisory, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Start of text or right after whitespace: a mark here has no base.
    None,
    /// After a base character, with this many marks already kept.
    Base(usize),
}

/// Decides mark by mark whether a combining mark has a base and fits under
/// the per-base cap. Shared with the classifier so both agree on what an
/// orphan is.
#[derive(Debug, Clone)]
pub(crate) struct MarkTracker {
    max_trailing: usize,
    anchor: Anchor,
}

impl MarkTracker {
    pub(crate) fn new(max_trailing: usize) -> Self {
        Self { max_trailing, anchor: Anchor::None }
    }

    /// Returns false when `c` is a combining mark to drop.
    ///
    /// Characters that a later step may delete (invisibles, tags,
    /// noncharacters, private use) neither anchor marks nor reset the count.
    pub(crate) fn keep(&mut self, c: char) -> bool {
        let cp = c as u32;
        if is_default_ignorable(cp)
            || is_bidi_mark(cp)
            || is_bidi_control(cp)
            || is_tag(cp)
            || is_noncharacter(cp)
            || is_private_use(cp)
        {
            return true;
        }
        if is_combining_mark(c) {
            return match &mut self.anchor {
                Anchor::Base(kept) if *kept < self.max_trailing => {
                    *kept += 1;
                    true
                }
                _ => false,
            };
        }
        self.anchor = if c.is_whitespace() { Anchor::None } else { Anchor::Base(0) };
        true
    }
}

/// Drops marks at the start of the text or after whitespace, and caps runs
/// on one base at `max_trailing` marks.
pub fn clean_combining_marks(text: &str, max_trailing: usize, stats: &mut Stats) -> String {
    let mut tracker = MarkTracker::new(max_trailing);
    let mut dropped = false;
    let out: String = text
        .chars()
        .filter(|&c| {
            let keep = tracker.keep(c);
            dropped |= !keep;
            keep
        })
        .collect();
    if dropped {
        stats.raise(Advisory::OrphanCombining);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_zalgo_stacks() {
        let mut stats = Stats::default();
        let out = clean_combining_marks("Z\u{0300}\u{0301}\u{0302}\u{0303}\u{0304}algo", 2, &mut stats);
        assert_eq!(out, "Z\u{0300}\u{0301}algo");
        assert!(stats.advisories.had_orphan_combining);
    }

    #[test]
    fn drops_leading_and_post_whitespace_marks() {
        let mut stats = Stats::default();
        assert_eq!(clean_combining_marks("\u{0301}a \u{0301}b\n\u{0308}c", 2, &mut stats), "a b\nc");
    }

    #[test]
    fn legitimate_marks_survive() {
        let mut stats = Stats::default();
        let hindi = "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}";
        let keycap = "1\u{FE0F}\u{20E3}";
        assert_eq!(clean_combining_marks(hindi, 2, &mut stats), hindi);
        assert_eq!(clean_combining_marks(keycap, 2, &mut stats), keycap);
        assert!(!stats.advisories.had_orphan_combining);
    }

    #[test]
    fn invisible_characters_do_not_anchor_marks() {
        let mut stats = Stats::default();
        assert_eq!(clean_combining_marks("\u{200B}\u{0301}x", 2, &mut stats), "\u{200B}x");
        assert_eq!(clean_combining_marks("e\u{200B}\u{0301}", 2, &mut stats), "e\u{200B}\u{0301}");
    }
}
