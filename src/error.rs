use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectorError {
    #[error("load error: {0}")]
    Load(String),

    #[error("schema error: missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("coercion error: row {row}: value '{value}' cannot be interpreted as a boolean")]
    Coercion { row: usize, value: String },

    #[error("write error: {0}")]
    Write(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectorError>;
