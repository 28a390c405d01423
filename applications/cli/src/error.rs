/// CLI error types
use mixtape_core::MixtapeError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error decoding {} as JSON", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: MixtapeError,
    },

    #[error("error applying changes")]
    Apply(#[source] MixtapeError),

    #[error("error encoding catalog as JSON")]
    Encode(#[source] MixtapeError),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
