use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open directory '{path}': {source}")]
    DirectoryUnavailable {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
