use tracing::debug;

use crate::config::ScoringConfig;
use crate::scoring::{hook, niche, recommend, structure};
use crate::{
    extract_text_features, resolve_profile, scale_score, EngineError, Platform, ScoreResult,
};

/// Deterministic virality scorer: same text and platform always produce a
/// bit-identical result. No I/O, safe to call concurrently from any number
/// of tasks.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        text: &str,
        platform: Option<Platform>,
    ) -> Result<ScoreResult, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::empty_text());
        }

        let profile = resolve_profile(platform);
        let features = extract_text_features(text);

        let hook_score = scale_score(hook::signal(&features));
        let structure_score = scale_score(structure::signal(&features, &profile));
        let niche_score = scale_score(niche::signal(&features));

        let weights = &self.config.weights;
        let weight_total = weights.hook + weights.structure + weights.niche;
        let overall = if weight_total <= 0.0 {
            0.0
        } else {
            (weights.hook * hook_score as f64
                + weights.structure * structure_score as f64
                + weights.niche * niche_score as f64)
                / weight_total
        };
        let overall_score = overall.round().clamp(0.0, 100.0) as u8;

        let predicted_engagement = self.engagement_for(overall_score, profile.reach_factor);

        let recommendations = recommend::build_recommendations(
            hook_score,
            structure_score,
            niche_score,
            &features,
            &profile,
            self.config.recommendations.cap,
        );

        debug!(
            hook = hook_score,
            structure = structure_score,
            niche = niche_score,
            overall = overall_score,
            "scored text"
        );

        Ok(ScoreResult {
            hook_score,
            structure_score,
            niche_score,
            overall_score,
            predicted_engagement,
            recommendations,
        })
    }

    /// Monotone in `overall_score` for a fixed platform, never negative.
    fn engagement_for(&self, overall_score: u8, reach_factor: f64) -> f64 {
        let curve = &self.config.engagement;
        let normalized = overall_score as f64 / 100.0;
        let raw = curve.ceiling.max(0.0) * normalized.powf(curve.exponent) * reach_factor;
        (raw * 100.0).round() / 100.0
    }
}
