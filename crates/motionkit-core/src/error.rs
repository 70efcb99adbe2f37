use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed timing curve descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Invalid preset '{name}': {reason}")]
    InvalidPreset { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
