use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Relative weights for combining the three sub-scores into the overall
/// score. Normalized at use, so they need not sum to one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub hook: f64,
    pub structure: f64,
    pub niche: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hook: 0.40,
            structure: 0.35,
            niche: 0.25,
        }
    }
}

/// Smallest exponent the engagement curve accepts; anything lower would
/// stop higher scores from predicting at least as much engagement.
pub const MIN_ENGAGEMENT_EXPONENT: f64 = 0.1;

/// Calibrated curve from overall score to predicted engagement:
/// `ceiling * (overall / 100)^exponent * platform_reach`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementConfig {
    pub ceiling: f64,
    pub exponent: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            ceiling: 1000.0,
            exponent: 1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub cap: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { cap: 3 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub kind: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: "template".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub engagement: EngagementConfig,
    pub recommendations: RecommendationConfig,
    pub generator: GeneratorConfig,
}

impl ScoringConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                ScoringConfig::default()
            }
        } else {
            ScoringConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(cap) = env::var("VIRALITY_RECOMMENDATION_CAP") {
            if let Ok(value) = cap.parse::<usize>() {
                self.recommendations.cap = value;
            }
        }
        if let Ok(ceiling) = env::var("VIRALITY_ENGAGEMENT_CEILING") {
            if let Ok(value) = ceiling.parse::<f64>() {
                self.engagement.ceiling = value;
            }
        }
        if let Ok(exponent) = env::var("VIRALITY_ENGAGEMENT_EXPONENT") {
            if let Ok(value) = exponent.parse::<f64>() {
                // A non-positive exponent would invert the engagement curve.
                self.engagement.exponent = value.max(MIN_ENGAGEMENT_EXPONENT);
            }
        }
        if let Ok(kind) = env::var("VIRALITY_GENERATOR") {
            if !kind.trim().is_empty() {
                self.generator.kind = kind;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("VIRALITY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/virality.toml")))
}
