// src/error.rs
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("unable to open file for reading into buffer: {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_names_path() {
        let err = ViewerError::Load {
            path: PathBuf::from("/tmp/missing.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.log"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_io_error_converts_to_terminal() {
        let err: ViewerError = io::Error::new(io::ErrorKind::Other, "tty gone").into();
        assert!(matches!(err, ViewerError::Terminal(_)));
    }
}
