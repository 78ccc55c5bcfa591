use crate::{clamp01, TextFeatures};

/// Topical specificity: concrete numbers, named-entity-looking tokens,
/// lexical diversity, and an inverse penalty for generic filler.
pub fn signal(features: &TextFeatures) -> f64 {
    let digit_signal = (features.digit_tokens.min(4) as f64) / 4.0;
    let entity_signal = (features.capitalized_midword.min(4) as f64) / 4.0;
    let diversity_signal = clamp01((features.unique_word_ratio - 0.4) / 0.5);
    let filler_penalty = clamp01(features.filler_ratio / 0.15);

    clamp01(
        0.30 * digit_signal
            + 0.25 * entity_signal
            + 0.25 * diversity_signal
            + 0.20 * (1.0 - filler_penalty),
    )
}
