use serde::{Deserialize, Serialize};
use virality_engine::generate::SocialPost;
use virality_engine::{EngineError, Platform};

#[derive(Debug, Deserialize)]
pub struct ApiScoreRequest {
    pub text: Option<String>,
    pub platform: Option<String>,
}

impl ApiScoreRequest {
    pub fn into_parts(self) -> Result<(String, Option<Platform>), EngineError> {
        parse_text_and_platform(self.text, self.platform)
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiRewriteRequest {
    pub text: Option<String>,
    pub platform: Option<String>,
}

impl ApiRewriteRequest {
    pub fn into_parts(self) -> Result<(String, Option<Platform>), EngineError> {
        parse_text_and_platform(self.text, self.platform)
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiPostsRequest {
    pub topic: Option<String>,
    pub platforms: Option<Vec<String>>,
}

impl ApiPostsRequest {
    pub fn into_parts(self) -> Result<(String, Vec<Platform>), EngineError> {
        let topic = self.topic.unwrap_or_default().trim().to_string();
        if topic.is_empty() {
            return Err(EngineError::InvalidInput("topic is required".to_string()));
        }
        let names = self.platforms.unwrap_or_default();
        if names.is_empty() {
            return Err(EngineError::InvalidInput(
                "at least one platform is required".to_string(),
            ));
        }
        let platforms = names
            .iter()
            .map(|name| parse_platform(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((topic, platforms))
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiHooksRequest {
    pub topic: Option<String>,
    pub count: Option<usize>,
    pub platform: Option<String>,
}

impl ApiHooksRequest {
    pub fn into_parts(self) -> Result<(String, usize, Option<Platform>), EngineError> {
        let topic = self.topic.unwrap_or_default().trim().to_string();
        if topic.is_empty() {
            return Err(EngineError::InvalidInput("topic is required".to_string()));
        }
        let platform = match self.platform.as_deref() {
            Some(name) => Some(parse_platform(name)?),
            None => None,
        };
        Ok((topic, self.count.unwrap_or(5), platform))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiPostsResponse {
    pub posts: Vec<SocialPost>,
}

#[derive(Debug, Serialize)]
pub struct ApiHooksResponse {
    pub hooks: Vec<String>,
}

fn parse_text_and_platform(
    text: Option<String>,
    platform: Option<String>,
) -> Result<(String, Option<Platform>), EngineError> {
    let text = text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(EngineError::InvalidInput("text is required".to_string()));
    }
    let platform = match platform.as_deref() {
        Some(name) if !name.trim().is_empty() => Some(parse_platform(name)?),
        _ => None,
    };
    Ok((text, platform))
}

fn parse_platform(name: &str) -> Result<Platform, EngineError> {
    Platform::from_str(name.trim())
        .ok_or_else(|| EngineError::UnsupportedPlatform(name.trim().to_string()))
}
