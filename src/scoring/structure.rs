use crate::{bool_to_f64, clamp01, gaussian, PlatformProfile, TextFeatures};

/// Organizational signals: paragraph breaks, list markers, sentence rhythm
/// inside a healthy band, a call-to-action near the end, and how close the
/// length sits to the platform's sweet spot.
pub fn signal(features: &TextFeatures, profile: &PlatformProfile) -> f64 {
    let paragraph_signal = if features.paragraph_count == 0 {
        0.0
    } else {
        ((features.paragraph_count - 1).min(3) as f64) / 3.0
    };
    let list_signal = (features.list_markers.min(3) as f64) / 3.0;

    let rhythm_signal = if features.sentence_count == 0 {
        0.0
    } else {
        0.5 * gaussian(features.avg_sentence_len, 14.0, 8.0)
            + 0.5 * gaussian(features.sentence_len_stddev, 5.0, 4.0)
    };

    let length_fit = gaussian(
        features.char_count as f64,
        profile.ideal_chars,
        profile.length_width,
    );

    clamp01(
        0.25 * paragraph_signal
            + 0.20 * list_signal
            + 0.25 * rhythm_signal
            + 0.15 * bool_to_f64(features.cta_near_end)
            + 0.15 * length_fit,
    )
}
