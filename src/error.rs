use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileToolsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Walk error: {0}")]
    Walk(String),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),
}

impl FileToolsError {
    /// Classifies an I/O failure against the path that caused it, so callers
    /// can match on missing files and permission problems directly.
    pub(crate) fn from_io(err: std::io::Error, path: PathBuf) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FileToolsError::FileNotFound(path),
            std::io::ErrorKind::PermissionDenied => FileToolsError::PermissionDenied(path),
            _ => FileToolsError::Io(err),
        }
    }
}

impl From<walkdir::Error> for FileToolsError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from);
        let kind = err.io_error().map(std::io::Error::kind);
        match (kind, path) {
            (Some(std::io::ErrorKind::NotFound), Some(p)) => FileToolsError::FileNotFound(p),
            (Some(std::io::ErrorKind::PermissionDenied), Some(p)) => {
                FileToolsError::PermissionDenied(p)
            }
            _ => match err.into_io_error() {
                Some(io) => FileToolsError::Io(io),
                None => FileToolsError::Walk("filesystem loop detected".to_string()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, FileToolsError>;
