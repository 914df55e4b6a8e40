use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown settings field: {name}")]
    UnknownField { name: String },

    #[error("Unknown settings section: {key}")]
    UnknownSection { key: String },

    #[error("Field is not an API key: {name}")]
    NotAnApiKey { name: String },

    #[error("Configuration error: {}", .errors.join("; "))]
    Configuration { errors: Vec<String> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
