use virality_engine::config::GeneratorConfig;
use virality_engine::generate::{build_generator, ContentGenerator, TemplateGenerator};
use virality_engine::{EngineError, Platform};

#[test]
fn build_generator_selects_by_kind() {
    let config = GeneratorConfig {
        kind: "template".to_string(),
    };
    assert!(build_generator(&config).is_ok());

    let unknown = GeneratorConfig {
        kind: "quantum".to_string(),
    };
    assert!(build_generator(&unknown).is_err());
}

#[test]
fn social_posts_are_deterministic_per_topic() {
    let generator = TemplateGenerator;
    let platforms = [Platform::Twitter, Platform::Linkedin];
    let first = generator
        .generate_social_posts("rust performance", &platforms)
        .unwrap();
    let second = generator
        .generate_social_posts("rust performance", &platforms)
        .unwrap();
    assert_eq!(first.len(), 2);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.platform, b.platform);
        assert_eq!(a.content, b.content);
        assert_eq!(a.hashtags, b.hashtags);
    }
}

#[test]
fn social_posts_carry_platform_and_counts() {
    let generator = TemplateGenerator;
    let posts = generator
        .generate_social_posts("async runtimes", &[Platform::Reddit])
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].platform, "reddit");
    assert_eq!(posts[0].character_count, posts[0].content.chars().count());
    assert!(posts[0].content.contains("async runtimes"));
    assert!(posts[0].hashtags.contains(&"asyncruntimes".to_string()));
}

#[test]
fn hooks_are_stable_and_clamped() {
    let generator = TemplateGenerator;
    let first = generator.generate_hooks("burnout", 3, None).unwrap();
    let second = generator.generate_hooks("burnout", 3, None).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    for hook in &first {
        assert!(hook.contains("burnout"));
    }

    let all = generator.generate_hooks("burnout", 100, None).unwrap();
    assert_eq!(all.len(), 8);

    let none = generator.generate_hooks("burnout", 0, None).unwrap();
    assert!(none.is_empty());
}

#[test]
fn campaign_steps_are_spaced_three_days_apart() {
    let generator = TemplateGenerator;
    let campaign = generator
        .generate_campaign("launch the beta", 4, Some("early adopters"))
        .unwrap();
    assert_eq!(campaign.steps.len(), 4);
    assert_eq!(campaign.total_duration_days, 9);
    for (i, step) in campaign.steps.iter().enumerate() {
        assert_eq!(step.step_number, i + 1);
        assert_eq!(step.delay_days, i * 3);
    }
    assert_eq!(campaign.audience.as_deref(), Some("early adopters"));

    assert!(matches!(
        generator.generate_campaign("goal", 0, None),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn newsletter_uses_at_most_three_sections() {
    let generator = TemplateGenerator;
    let topics: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let draft = generator
        .generate_newsletter("Weekly Notes", &topics, "casual")
        .unwrap();
    assert_eq!(draft.sections.len(), 3);
    assert!(draft.preview_text.contains("a, b"));
}

#[test]
fn expand_and_shorten_are_inverse_in_spirit() {
    let generator = TemplateGenerator;
    let text = "Focus beats intensity over a long enough horizon.";
    let expanded = generator.expand(text).unwrap();
    assert!(expanded.len() > text.len());
    assert!(expanded.starts_with(text));

    let shortened = generator.shorten(text, Some(3)).unwrap();
    assert_eq!(shortened, "Focus beats intensity...");

    let untouched = generator.shorten(text, Some(100)).unwrap();
    assert_eq!(untouched, text);
}

#[test]
fn empty_inputs_are_rejected() {
    let generator = TemplateGenerator;
    assert!(matches!(
        generator.generate_blog("  "),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        generator.generate_social_posts("topic", &[]),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        generator.generate_hooks("", 5, None),
        Err(EngineError::InvalidInput(_))
    ));
}
