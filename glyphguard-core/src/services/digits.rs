use glyphguard_tables::digits;

use super::DigitValues;

/// Every general category `Nd` run.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeDigitValues;

impl DigitValues for UnicodeDigitValues {
    fn decimal_value(&self, c: char) -> Option<u8> {
        digits::decimal_value(c)
    }

    fn name(&self) -> &'static str {
        "unicode-nd"
    }
}

/// Fixed table: ASCII, Arabic-Indic and Extended Arabic-Indic digits only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicIndicDigits;

impl DigitValues for ArabicIndicDigits {
    fn decimal_value(&self, c: char) -> Option<u8> {
        digits::arabic_indic_value(c)
    }

    fn name(&self) -> &'static str {
        "arabic-indic"
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_covers_arabic_blocks_only() {
        assert_eq!(ArabicIndicDigits.decimal_value('\u{0664}'), Some(4));
        assert_eq!(ArabicIndicDigits.decimal_value('\u{0967}'), None);
        assert_eq!(UnicodeDigitValues.decimal_value('\u{0967}'), Some(1));
    }
}
