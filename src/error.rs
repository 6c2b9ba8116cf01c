pub type AssetResult<T> = Result<T, AssetError>;

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("draw error: {0}")]
    Draw(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AssetError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn draw(msg: impl Into<String>) -> Self {
        Self::Draw(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
