use virality_engine::extract_text_features;

#[test]
fn counts_questions_emoji_and_caps() {
    let features = extract_text_features("REALLY? Yes! \u{1f525}");
    assert_eq!(features.questions, 1);
    assert_eq!(features.exclamations, 1);
    assert_eq!(features.emoji_count, 1);
    assert!(features.uppercase_ratio > 0.5);
}

#[test]
fn detects_list_markers_inline_and_per_line() {
    let inline = extract_text_features("Three steps: 1) plan 2) build 3) ship");
    assert_eq!(inline.list_markers, 3);

    let lines = extract_text_features("Checklist:\n- plan\n- build\n* ship");
    assert_eq!(lines.list_markers, 3);
}

#[test]
fn opening_devices_are_scoped_to_the_opening() {
    let features = extract_text_features("Is this the best opening? It asks a question.");
    assert!(features.opening_has_question);
    assert!(!features.opening_has_numeral);

    // A numeral far past the opening window does not count as a hook device.
    let padding = "word ".repeat(40);
    let late_number = extract_text_features(&format!("{}only 42 at the end", padding));
    assert!(!late_number.opening_has_numeral);
    assert_eq!(late_number.digit_tokens, 1);
}

#[test]
fn detects_call_to_action_near_the_end() {
    let with_cta = extract_text_features("A short note about the launch. Subscribe for updates.");
    assert!(with_cta.cta_near_end);

    let without = extract_text_features("A short note about the launch. Nothing else here.");
    assert!(!without.cta_near_end);
}

#[test]
fn paragraphs_and_sentences_are_counted() {
    let features =
        extract_text_features("First sentence here. Second one follows.\n\nA new paragraph now.");
    assert_eq!(features.paragraph_count, 2);
    assert_eq!(features.sentence_count, 3);
}

#[test]
fn filler_and_diversity_ratios() {
    let filler = extract_text_features("stuff stuff stuff stuff");
    assert!(filler.filler_ratio > 0.9);
    assert!(filler.unique_word_ratio < 0.5);

    let varied = extract_text_features("quartz obsidian granite basalt");
    assert!((varied.unique_word_ratio - 1.0).abs() < 1e-9);
    assert_eq!(varied.filler_ratio, 0.0);
}
