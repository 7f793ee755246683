use unicode_script::{Script, UnicodeScript};

use super::ConfusableDetector;

/// Scripts whose letters are routinely mistaken for one another.
const LOOKALIKE_SCRIPTS: &[Script] = &[
    Script::Latin,
    Script::Cyrillic,
    Script::Greek,
    Script::Armenian,
    Script::Cherokee,
];

/// Flags a text when a single word mixes two look-alike scripts, e.g. a
/// Cyrillic `а` inside the Latin word `pаypal`. Whole words in one script,
/// or in scripts outside the look-alike set (Han with Hiragana, say), pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptMixingDetector;

impl ScriptMixingDetector {
    fn word_mixes_scripts(word: &str) -> bool {
        let mut first: Option<Script> = None;
        for c in word.chars() {
            let script = c.script();
            if !LOOKALIKE_SCRIPTS.contains(&script) {
                continue;
            }
            match first {
                None => first = Some(script),
                Some(seen) if seen != script => return true,
                Some(_) => {}
            }
        }
        false
    }
}

impl ConfusableDetector for ScriptMixingDetector {
    fn is_suspicious(&self, text: &str) -> bool {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .any(Self::word_mixes_scripts)
    }

    fn name(&self) -> &'static str {
        "unicode-script"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_word_is_suspicious() {
        assert!(ScriptMixingDetector.is_suspicious("login to p\u{0430}ypal now"));
        assert!(ScriptMixingDetector.is_suspicious("\u{03BF}pen"));
    }

    #[test]
    fn single_script_words_pass() {
        assert!(!ScriptMixingDetector.is_suspicious("hello \u{043C}\u{0438}\u{0440} world"));
        assert!(!ScriptMixingDetector.is_suspicious("\u{6771}\u{4EAC}\u{3068}\u{304D}\u{3087}\u{3046}"));
        assert!(!ScriptMixingDetector.is_suspicious(""));
        assert!(!ScriptMixingDetector.is_suspicious("abc123 def"));
    }
}
