pub type TimegraphResult<T> = Result<T, TimegraphError>;

#[derive(thiserror::Error, Debug)]
pub enum TimegraphError {
    /// The tree cannot be compiled: unknown node type, zero playback rate, bad duration keyword.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TimegraphError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<serde_json::Error> for TimegraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}
