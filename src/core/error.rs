use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkitterError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Simulation workers already started")]
    AlreadyStarted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkitterError>;
