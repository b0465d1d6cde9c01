use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SbError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Resolver not available: {0}")]
    ResolverUnavailable(String),

    #[error("Skill not found: {0}")]
    SkillNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, SbError>;
