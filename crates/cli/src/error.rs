// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] crate::args::ArgsError),

    #[error(transparent)]
    Engine(#[from] extls_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgsError;
    use extls_engine::error::EngineError;

    #[test]
    fn test_args_error_displays_transparently() {
        let err = AppError::from(ArgsError::Unrecognized("--nope".into()));
        assert_eq!(err.to_string(), "Unknown argument: --nope");
    }

    #[test]
    fn test_engine_error_displays_transparently() {
        let err = AppError::from(EngineError::DirectoryUnavailable {
            path: "/gone".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert!(err.to_string().starts_with("Failed to open directory '/gone'"));
    }

    #[test]
    fn test_io_error_is_prefixed() {
        let err = AppError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("IO error: "));
    }
}
