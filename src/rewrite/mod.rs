pub mod strategy;

use tracing::debug;

use crate::config::ScoringConfig;
use crate::rewrite::strategy::{passes, pick_template};
use crate::scoring::ScoringEngine;
use crate::{resolve_profile, stable_hash64, EngineError, Platform, RewriteResult, ScoreResult};

/// Platform-aware rewriter. Applies the strategy passes greedily, keeping a
/// candidate only when its overall score does not drop, so the improved
/// score never trails the original as long as at least one pass lands.
///
/// When the input already carries every device the passes would add, the
/// best-scoring candidate is applied anyway so the rewritten text always
/// differs from the original; in that ceiling case the score may tie or dip
/// and the improvements list says so.
#[derive(Debug, Clone)]
pub struct RewriteEngine {
    scoring: ScoringEngine,
}

impl RewriteEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            scoring: ScoringEngine::new(config),
        }
    }

    pub fn rewrite(
        &self,
        text: &str,
        platform: Option<Platform>,
    ) -> Result<RewriteResult, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::empty_text());
        }

        let profile = resolve_profile(platform);
        let seed = stable_hash64(text);
        let original = self.scoring.score(text, platform)?;

        let mut current = text.to_string();
        let mut current_result = original.clone();
        let mut best_rejected: Option<(String, ScoreResult)> = None;

        for pass in passes() {
            let candidate = match (pass.apply)(&current, &profile, seed) {
                Some(candidate) if candidate != current => candidate,
                _ => continue,
            };
            let result = self.scoring.score(&candidate, platform)?;
            if result.overall_score >= current_result.overall_score {
                debug!(pass = pass.name, score = result.overall_score, "pass accepted");
                current = candidate;
                current_result = result;
            } else {
                debug!(pass = pass.name, score = result.overall_score, "pass rejected");
                let better = best_rejected
                    .as_ref()
                    .map_or(true, |(_, best)| result.overall_score > best.overall_score);
                if better {
                    best_rejected = Some((candidate, result));
                }
            }
        }

        if current == text {
            // Nothing landed: force the strongest candidate so the caller
            // always gets a distinct rewrite.
            if let Some((candidate, result)) = best_rejected {
                current = candidate;
                current_result = result;
            } else {
                let template = pick_template(profile.hook_templates, seed);
                current = format!("{}\n\n{}", template, text);
                current_result = self.scoring.score(&current, platform)?;
            }
        }

        let improvements = build_improvements(&original, &current_result);

        Ok(RewriteResult {
            original_text: text.to_string(),
            rewritten_text: current,
            original_score: original.overall_score,
            improved_score: current_result.overall_score,
            improvements,
        })
    }
}

fn build_improvements(original: &ScoreResult, improved: &ScoreResult) -> Vec<String> {
    let mut improvements = Vec::new();
    if improved.hook_score > original.hook_score {
        improvements.push(format!(
            "Improved hook strength (+{})",
            improved.hook_score - original.hook_score
        ));
    }
    if improved.structure_score > original.structure_score {
        improvements.push(format!(
            "Better content structure (+{})",
            improved.structure_score - original.structure_score
        ));
    }
    if improved.niche_score > original.niche_score {
        improvements.push(format!(
            "More niche-relevant (+{})",
            improved.niche_score - original.niche_score
        ));
    }
    if improvements.is_empty() && improved.overall_score < original.overall_score {
        improvements.push(
            "No scoring headroom found; applied the closest alternative phrasing.".to_string(),
        );
    }
    improvements
}
