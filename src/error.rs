use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewerError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Line loader thread disconnected")]
    LoaderDisconnected,
}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err.to_string())
    }
}
