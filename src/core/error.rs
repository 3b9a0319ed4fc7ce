use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeerasError {
    #[error("Unknown heir category: {0}")]
    UnknownHeir(String),

    #[error("Unknown deceased gender: {0}")]
    UnknownGender(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MeerasError>;
