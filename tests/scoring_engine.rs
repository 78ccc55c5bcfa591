use virality_engine::config::ScoringConfig;
use virality_engine::scoring::ScoringEngine;
use virality_engine::{EngineError, Platform};

fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

const HOOKY_TEXT: &str = "Is productivity a lie? Here are 3 things that changed everything for me: 1) ... 2) ... 3) ... Try this today.";
const FLAT_TEXT: &str = "I did some stuff today.";

#[test]
fn scoring_is_deterministic() {
    let engine = engine();
    let first = engine.score(HOOKY_TEXT, Some(Platform::Twitter)).unwrap();
    let second = engine.score(HOOKY_TEXT, Some(Platform::Twitter)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scores_are_bounded() {
    let engine = engine();
    let samples = [
        HOOKY_TEXT,
        FLAT_TEXT,
        "a",
        "WHY ARE YOU SHOUTING?!?! 100% OF THE TIME!!!",
        "One.\n\nTwo.\n\n- a list\n- of items\n\nSubscribe for more.",
    ];
    for text in samples {
        for platform in [None, Some(Platform::Twitter), Some(Platform::Newsletter)] {
            let result = engine.score(text, platform).unwrap();
            assert!(result.hook_score <= 100);
            assert!(result.structure_score <= 100);
            assert!(result.niche_score <= 100);
            assert!(result.overall_score <= 100);
            assert!(result.predicted_engagement >= 0.0);
        }
    }
}

#[test]
fn empty_and_blank_text_are_rejected() {
    let engine = engine();
    assert!(matches!(
        engine.score("", None),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        engine.score("   ", Some(Platform::Twitter)),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn hooky_opening_outscores_flat_opening() {
    let engine = engine();
    let hooky = engine.score(HOOKY_TEXT, Some(Platform::Twitter)).unwrap();
    let flat = engine.score(FLAT_TEXT, Some(Platform::Twitter)).unwrap();
    assert!(
        hooky.hook_score >= flat.hook_score + 30,
        "expected a clear hook gap, got {} vs {}",
        hooky.hook_score,
        flat.hook_score
    );
}

#[test]
fn engagement_is_monotone_in_overall_score() {
    let engine = engine();
    let samples = [
        HOOKY_TEXT,
        FLAT_TEXT,
        "Why do 9 out of 10 launches fail? A breakdown with numbers.",
        "Thoughts about the weather and other matters of the day.",
    ];
    let mut scored: Vec<_> = samples
        .iter()
        .map(|text| engine.score(text, Some(Platform::Linkedin)).unwrap())
        .collect();
    scored.sort_by_key(|result| result.overall_score);
    for pair in scored.windows(2) {
        assert!(
            pair[1].predicted_engagement >= pair[0].predicted_engagement,
            "engagement dropped while overall rose: {:?} vs {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn recommendations_are_capped() {
    let engine = engine();
    // A weak text trips many rules at once; the cap still holds.
    let result = engine.score("stuff and things, very nice.", None).unwrap();
    assert!(result.recommendations.len() <= 3);

    let strong = engine.score(HOOKY_TEXT, Some(Platform::Twitter)).unwrap();
    assert!(strong.recommendations.len() <= 3);
}

#[test]
fn weak_hook_triggers_hook_recommendation() {
    let engine = engine();
    let result = engine.score(FLAT_TEXT, Some(Platform::Twitter)).unwrap();
    assert!(result.hook_score < 70);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("opening hook")));
}

#[test]
fn overall_is_the_weighted_mean_of_sub_scores() {
    let engine = engine();
    let result = engine.score(HOOKY_TEXT, Some(Platform::Twitter)).unwrap();
    let expected = 0.40 * result.hook_score as f64
        + 0.35 * result.structure_score as f64
        + 0.25 * result.niche_score as f64;
    assert!((result.overall_score as f64 - expected).abs() <= 1.0);
}

#[test]
fn score_wire_format_uses_the_contract_field_names() {
    let engine = engine();
    let result = engine.score(HOOKY_TEXT, Some(Platform::Twitter)).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();
    for field in [
        "hook_score",
        "structure_score",
        "niche_score",
        "overall_score",
        "predicted_engagement",
        "recommendations",
    ] {
        assert!(object.contains_key(field), "missing wire field: {}", field);
    }
    assert_eq!(object.len(), 6);
    assert!(object["hook_score"].is_u64());
    assert!(object["predicted_engagement"].is_number());
    assert!(object["recommendations"].is_array());
}

#[test]
fn unknown_platform_keys_do_not_parse() {
    assert!(Platform::from_str("myspace").is_none());
    assert!(Platform::from_str("").is_none());
    assert_eq!(Platform::from_str("Twitter"), Some(Platform::Twitter));
    assert_eq!(Platform::from_str("x"), Some(Platform::Twitter));
}
