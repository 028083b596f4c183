use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {name} (looked in {})", .path.display())]
    ResourceNotFound { name: String, path: PathBuf },

    #[error("Failed to read resource {name} from {}: {source}", .path.display())]
    ResourceUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[source] serde_yaml::Error),
}

/// Malformed JSON or YAML handed to one of the `from_*` parsers.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
