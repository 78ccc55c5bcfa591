use virality_engine::config::ScoringConfig;
use virality_engine::rewrite::RewriteEngine;
use virality_engine::{EngineError, Platform};

fn engine() -> RewriteEngine {
    RewriteEngine::new(ScoringConfig::default())
}

#[test]
fn original_text_is_echoed_unmodified() {
    let engine = engine();
    let text = "AI is transforming the world.";
    let result = engine.rewrite(text, Some(Platform::Linkedin)).unwrap();
    assert_eq!(result.original_text, text);
    assert!(!result.rewritten_text.is_empty());
    assert_ne!(result.rewritten_text, result.original_text);
}

#[test]
fn rewrite_is_deterministic() {
    let engine = engine();
    let text = "Remote work changed how teams ship software.";
    let first = engine.rewrite(text, Some(Platform::Twitter)).unwrap();
    let second = engine.rewrite(text, Some(Platform::Twitter)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn weak_text_scores_improve() {
    let engine = engine();
    for (text, platform) in [
        ("AI is transforming the world.", Some(Platform::Linkedin)),
        ("We released a product update.", Some(Platform::Twitter)),
        ("The garden needed water after the dry spell.", None),
    ] {
        let result = engine.rewrite(text, platform).unwrap();
        assert!(
            result.improved_score >= result.original_score,
            "score dropped for {:?}: {} -> {}",
            text,
            result.original_score,
            result.improved_score
        );
    }
}

#[test]
fn improvements_name_the_sub_scores_that_rose() {
    let engine = engine();
    let result = engine
        .rewrite("AI is transforming the world.", Some(Platform::Linkedin))
        .unwrap();
    if result.improved_score > result.original_score {
        assert!(!result.improvements.is_empty());
    }
    for improvement in &result.improvements {
        assert!(improvement.contains('+') || improvement.contains("headroom"));
    }
}

#[test]
fn rewrite_wire_format_uses_the_contract_field_names() {
    let engine = engine();
    let result = engine
        .rewrite("AI is transforming the world.", Some(Platform::Linkedin))
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();
    for field in [
        "original_text",
        "rewritten_text",
        "original_score",
        "improved_score",
        "improvements",
    ] {
        assert!(object.contains_key(field), "missing wire field: {}", field);
    }
    assert_eq!(object.len(), 5);
    assert!(object["original_score"].is_u64());
    assert!(object["improvements"].is_array());
}

#[test]
fn empty_text_is_rejected() {
    let engine = engine();
    assert!(matches!(
        engine.rewrite("", Some(Platform::Twitter)),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.rewrite("  \n ", None),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn platformless_rewrite_uses_the_neutral_strategy() {
    let engine = engine();
    let result = engine
        .rewrite("The report covers supply chains.", None)
        .unwrap();
    // Neutral profile carries no hashtags.
    assert!(!result.rewritten_text.contains('#'));
    assert_ne!(result.rewritten_text, result.original_text);
}

#[test]
fn overlong_text_is_trimmed_toward_platform_ideal() {
    let engine = engine();
    let sentence = "This sentence pads the post out well beyond any reasonable tweet length. ";
    let text = sentence.repeat(20);
    let result = engine.rewrite(&text, Some(Platform::Twitter)).unwrap();
    assert!(
        result.rewritten_text.chars().count() < text.chars().count(),
        "expected the rewrite to shorten an overlong tweet"
    );
}
