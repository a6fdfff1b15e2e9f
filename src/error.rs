use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoleFitError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("invalid input in {path}: {message}")]
    InvalidInput { path: String, message: String },

    #[error("invalid what-if action: {0}")]
    InvalidAction(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoleFitError>;
