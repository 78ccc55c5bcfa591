use crate::{PlatformProfile, TextFeatures};

/// Threshold rules over the sub-scores and raw features, evaluated in fixed
/// priority order and truncated to `cap` so output stays stable and bounded.
pub fn build_recommendations(
    hook_score: u8,
    structure_score: u8,
    niche_score: u8,
    features: &TextFeatures,
    profile: &PlatformProfile,
    cap: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if hook_score < 70 {
        recommendations.push(
            "Strengthen the opening hook with a question, number, or bold claim.".to_string(),
        );
    }
    if !features.cta_near_end {
        recommendations.push("Include a clear call-to-action near the end.".to_string());
    }
    if structure_score < 60 && features.paragraph_count <= 1 {
        recommendations
            .push("Break the text into shorter paragraphs or a list.".to_string());
    }
    if niche_score < 60 {
        recommendations
            .push("Add concrete numbers, names, or specific examples.".to_string());
    }
    if features.filler_ratio > 0.08 {
        recommendations
            .push("Cut filler words; specifics travel further than generalities.".to_string());
    }
    let length_delta = (features.char_count as f64 - profile.ideal_chars).abs();
    if length_delta > 2.0 * profile.length_width {
        recommendations.push(format!(
            "Adjust length toward roughly {} characters for this platform.",
            profile.ideal_chars as usize
        ));
    }
    if features.uppercase_ratio > 0.3 {
        recommendations
            .push("Reduce ALL CAPS; it reads as shouting and hurts engagement.".to_string());
    }

    recommendations.truncate(cap);
    recommendations
}
