// src/editor/buffer.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};

/// Immutable, line-oriented contents of the viewed file.
#[derive(Debug, Default)]
pub struct Buffer {
    content: Vec<String>, // Lines of text, terminators stripped
    path: Option<PathBuf>,
}

impl Buffer {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the whole file at `path` and split it into lines.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| ViewerError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buffer = Self::from_bytes(&bytes);
        buffer.path = Some(path.to_path_buf());
        log::info!(
            "loaded {} ({} bytes, {} lines)",
            path.display(),
            bytes.len(),
            buffer.line_count()
        );
        Ok(buffer)
    }

    /// Split raw bytes on `\n`, dropping an optional `\r` before it.
    ///
    /// A trailing terminator does not start an extra empty line, while a
    /// final line without one is still kept. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut content: Vec<String> = bytes
            .split(|&b| b == b'\n')
            .map(|raw| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                String::from_utf8_lossy(raw).into_owned()
            })
            .collect();

        // `split` always yields one piece after the last terminator
        if bytes.is_empty() || bytes.ends_with(b"\n") {
            content.pop();
        }

        Self {
            content,
            path: None,
        }
    }

    #[cfg(test)]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: lines.into_iter().map(Into::into).collect(),
            path: None,
        }
    }

    pub fn get_line(&self, index: usize) -> Option<&str> {
        self.content.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
