use glyphguard_tables::mirrored;
use unicode_bidi::{bidi_class, BidiClass};

use super::BidiProperties;

/// Bidi classes from `unicode-bidi`, mirroring from the bundled table.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBidiProperties;

impl BidiProperties for UnicodeBidiProperties {
    fn is_mirrored(&self, c: char) -> bool {
        mirrored::is_mirrored(c)
    }

    fn is_rtl(&self, c: char) -> bool {
        matches!(bidi_class(c), BidiClass::R | BidiClass::AL | BidiClass::AN)
    }

    fn name(&self) -> &'static str {
        "unicode-bidi"
    }
}
