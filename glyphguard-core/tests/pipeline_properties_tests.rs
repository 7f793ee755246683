// glyphguard-core/tests/pipeline_properties_tests.rs
use std::sync::Arc;

use glyphguard_core::services::{DigitValues, UnicodeDigitValues};
use glyphguard_core::{
    analyze, sanitize, Diagnostics, GlyphGuardError, Mode, PipelineEngine, SanitizationEngine, SanitizerConfig,
    Severity, UnicodeServices, VectorKind,
};

const MODES: [Mode; 3] = [Mode::Safe, Mode::Aggressive, Mode::Strict];

const ENGLAND: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";

fn corpus() -> Vec<String> {
    vec![
        "Hello\u{200B}world".to_string(),
        "Test\u{202E}reverse\u{202C}text".to_string(),
        "p\u{0430}yp\u{0430}l.com login".to_string(),
        "\u{201C}Smart quotes\u{201D} \u{2014} and an ellipsis\u{2026}".to_string(),
        "Zalgo: Z\u{0300}\u{0301}\u{0302}\u{0303}a\u{0304}\u{0305}\u{0306}l".to_string(),
        "&lt;script&gt;alert(1)&lt;/script&gt;".to_string(),
        "Price: \u{0661}\u{0662}\u{0663} \u{0968}".to_string(),
        "First paragraph.\nSecond line starts here.\n\n\n- item one\n- item two".to_string(),
        "**bold** *em* `code` ~~strike~~".to_string(),
        format!("{} flag \u{E0041}\u{E0042}", ENGLAND),
        "\u{FDD0}\u{E000}private\u{FFFF}".to_string(),
        "\u{0645}\u{0631}\u{062D}\u{0628}\u{0627} (world) \u{200F}".to_string(),
        "\u{1F469}\u{200D}\u{1F4BB} works\u{2764}\u{FE0F}".to_string(),
        "tab\tseparated\u{00A0}\u{2003}text\r\nnext".to_string(),
        "\u{FF26}\u{FF35}\u{FF2C}\u{FF2C} width \u{FF54}\u{FF45}\u{FF58}\u{FF54}".to_string(),
        "Stra\u{00DF}e \u{FB01}le \u{216B}".to_string(),
        "enc&#x202E;oded &#8294;isolate&#8297;".to_string(),
        // A removed character lets a mark compose or orphans it.
        "e\u{200B}\u{0301}".to_string(),
        "a\u{200D}\u{0301}".to_string(),
        "e\u{E0041}\u{0301} n\u{FDD0}\u{0303}".to_string(),
        "x <i>\u{0301}y".to_string(),
        // Markup that only appears after folding or comment removal.
        "<\u{FF42}>x".to_string(),
        "&\u{FF4C}\u{FF54};b".to_string(),
        "&<!-- -->lt;b".to_string(),
        "<<!-- -->b>bold</b>".to_string(),
        "a&#\u{FF58}202E;b".to_string(),
        "**a\nb**".to_string(),
        String::new(),
    ]
}

fn is_bidi_control(c: char) -> bool {
    matches!(c as u32, 0x202A..=0x202E | 0x2066..=0x2069)
}

#[test_log::test]
fn sanitize_is_idempotent() {
    for mode in MODES {
        for input in corpus() {
            let (once, _) = sanitize(&input, mode);
            let (twice, _) = sanitize(&once, mode);
            assert_eq!(once, twice, "not idempotent in {} for {:?}", mode, input);
        }
    }
}

#[test_log::test]
fn no_bidi_control_survives() {
    for mode in MODES {
        for input in corpus() {
            let (out, _) = sanitize(&input, mode);
            assert!(!out.chars().any(is_bidi_control), "bidi control leaked in {} for {:?}", mode, input);
        }
    }
}

#[test]
fn fullwidth_spelled_bidi_entity_is_stripped() {
    for mode in [Mode::Aggressive, Mode::Strict] {
        let (out, stats) = sanitize("a&#\u{FF58}202E;b", mode);
        assert_eq!(out, "ab\n");
        assert!(stats.advisories.had_bidi_controls);
    }
}

#[test]
fn encoded_bidi_controls_are_flagged() {
    let (out, stats) = sanitize("enc&#x202E;oded", Mode::Safe);
    assert_eq!(out, "encoded\n");
    assert!(stats.advisories.had_html_entities);
    assert!(stats.advisories.had_bidi_controls);
}

#[test]
fn digits_close_to_ascii_outside_safe() {
    let input = "\u{0663}\u{0664} \u{096B} \u{0E53} \u{06F9}";
    for mode in [Mode::Aggressive, Mode::Strict] {
        let (out, stats) = sanitize(input, mode);
        assert_eq!(out, "34 5 3 9\n");
        assert_eq!(stats.digits_normalized, 5);
        assert!(!out.chars().any(|c| !c.is_ascii() && UnicodeDigitValues.decimal_value(c).is_some()));
    }
    let (out, stats) = sanitize(input, Mode::Safe);
    assert_eq!(out, format!("{}\n", input));
    assert_eq!(stats.digits_normalized, 0);
    assert!(!stats.advisories.had_non_ascii_digits);
}

#[test_log::test]
fn diff_round_trips_for_every_input() {
    for mode in MODES {
        for input in corpus() {
            let result = analyze(&input, mode).unwrap();
            let services = UnicodeServices::full();
            let original = services.segmenter.graphemes(&result.original_text);
            let sanitized = services.segmenter.graphemes(&result.sanitized_text);
            let a: String = result.diff_ops.iter().map(|op| op.a_slice(&original)).collect();
            let b: String = result.diff_ops.iter().map(|op| op.b_slice(&sanitized)).collect();
            assert_eq!(a, input);
            assert_eq!(b, result.sanitized_text);
        }
    }
}

#[test]
fn diff_round_trips_with_fallback_services() {
    let engine = PipelineEngine::with_services(
        SanitizerConfig::default(),
        UnicodeServices::minimal(),
        Arc::new(Diagnostics::new()),
    )
    .unwrap();
    for input in corpus() {
        let result = engine.analyze(&input, Mode::Aggressive).unwrap();
        let original = engine.services().segmenter.graphemes(&result.original_text);
        let sanitized = engine.services().segmenter.graphemes(&result.sanitized_text);
        let a: String = result.diff_ops.iter().map(|op| op.a_slice(&original)).collect();
        let b: String = result.diff_ops.iter().map(|op| op.b_slice(&sanitized)).collect();
        assert_eq!(a, input);
        assert_eq!(b, result.sanitized_text);
    }
}

#[test]
fn blocking_kinds_always_block() {
    let input = format!("a\u{202E}b\u{E0041}c\u{FDD0}d\u{200B}e {}", ENGLAND);
    for mode in MODES {
        let result = analyze(&input, mode).unwrap();
        for hit in &result.hits {
            if matches!(
                hit.kind,
                VectorKind::BidiControls | VectorKind::TagCharacters | VectorKind::Noncharacters
            ) {
                assert_eq!(hit.severity, Severity::Block, "{} in {}", hit.kind, mode);
            }
        }
        assert!(result.hits.iter().any(|h| h.kind == VectorKind::BidiControls));
        assert!(result.hits.iter().any(|h| h.kind == VectorKind::TagCharacters));
    }
}

#[test]
fn unchanged_text_has_no_hits() {
    let result = analyze("plain ascii text\n", Mode::Strict).unwrap();
    assert_eq!(result.sanitized_text, "plain ascii text\n");
    assert!(result.hits.is_empty());
    assert_eq!(result.summary.total_changes, 0);
    assert!(result.summary.notes.is_empty());
}

#[test]
fn homoglyph_hit_severity_depends_on_mode() {
    let result = analyze("\u{0430}pple", Mode::Aggressive).unwrap();
    assert_eq!(result.sanitized_text, "apple\n");
    let hit = result.hits.iter().find(|h| h.kind == VectorKind::Confusables).unwrap();
    assert_eq!(hit.severity, Severity::Warn);
    assert_eq!(hit.code_points, vec!["U+00430".to_string()]);
}

#[test]
fn scenario_empty_input() {
    let (text, stats) = sanitize("", Mode::Safe);
    assert_eq!(text, "");
    assert!(!stats.advisories.any());
    let result = analyze("", Mode::Safe).unwrap();
    assert!(result.diff_ops.is_empty());
    assert!(result.hits.is_empty());
}

#[test]
fn scenario_oversized_input() {
    let text = "a".repeat(1_048_577);
    assert!(matches!(
        analyze(&text, Mode::Safe),
        Err(GlyphGuardError::InputTooLarge { len: 1_048_577, limit: 1_048_576 })
    ));
    // sanitize itself never enforces the ceiling
    let (out, stats) = sanitize(&text, Mode::Safe);
    assert_eq!(out.len(), 1_048_578);
    assert_eq!(stats.characters_removed, 0);
}

#[test]
fn analysis_serializes_camel_case() {
    let result = analyze("Hello\u{200B}world", Mode::Safe).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["sanitizedText"], "Helloworld\n");
    assert_eq!(json["hits"][0]["kind"], "default_ignorables");
    assert_eq!(json["hits"][0]["severity"], "warn");
    assert_eq!(json["hits"][0]["codePoints"][0], "U+0200B");
    assert!(json["diffOps"][0]["type"].is_string());
    assert_eq!(json["summary"]["vectorCounts"]["default_ignorables"], 1);
}
