use thiserror::Error;

/// Failure taxonomy for the scoring and rewrite engines.
///
/// Both engines are pure computations, so these are the only ways they can
/// fail; everything else (malformed JSON, transport issues) belongs to the
/// surrounding HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

impl EngineError {
    pub fn empty_text() -> Self {
        EngineError::InvalidInput("text must not be empty or whitespace-only".to_string())
    }
}
