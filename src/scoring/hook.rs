use crate::{bool_to_f64, clamp01, TextFeatures};

/// Attention devices in the opening segment: questions, numerals, hook
/// lexicon hits, direct address, emphasis markers.
pub fn signal(features: &TextFeatures) -> f64 {
    clamp01(
        0.35 * bool_to_f64(features.opening_has_question)
            + 0.25 * bool_to_f64(features.opening_has_numeral)
            + 0.20 * bool_to_f64(features.opening_hook_word)
            + 0.10 * bool_to_f64(features.opening_direct_address)
            + 0.10 * bool_to_f64(features.opening_has_emphasis),
    )
}
