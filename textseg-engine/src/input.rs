//! Input sources
//!
//! Everything is read as UTF-8 bytes; malformed sequences are not an error
//! and segment as U+FFFD.

use crate::error::{EngineError, Result};
use std::fs::{self, File};
use std::io::{Cursor, Read};
use std::path::PathBuf;

/// Unified input abstraction
pub enum Input {
    /// Owned text
    Text(String),
    /// Static text reference (zero-copy for string literals)
    TextRef(&'static str),
    /// File path to read from
    File(PathBuf),
    /// Raw bytes, possibly malformed UTF-8
    Bytes(Vec<u8>),
    /// Reader stream (stdin, sockets, decompressors...)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::TextRef(text) => f.debug_tuple("TextRef").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a static string reference (zero-copy)
    pub fn from_text_ref(text: &'static str) -> Self {
        Input::TextRef(text)
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input into memory
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::TextRef(text) => Ok(text.as_bytes().to_vec()),
            Input::File(path) => fs::read(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Turn the input into a reader without loading it
    pub fn into_reader(self) -> Result<Box<dyn Read + Send>> {
        Ok(match self {
            Input::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Input::TextRef(text) => Box::new(text.as_bytes()),
            Input::File(path) => Box::new(File::open(&path).map_err(|e| {
                EngineError::IoError(format!("Failed to open file {path:?}: {e}"))
            })?),
            Input::Bytes(bytes) => Box::new(Cursor::new(bytes)),
            Input::Reader(reader) => reader,
        })
    }

    /// Get the estimated size of the input (if available)
    ///
    /// Used for adaptive mode selection. Returns None if the size cannot be
    /// determined without reading the entire input.
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::TextRef(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::File(path) => fs::metadata(path)
                .ok()
                .and_then(|m| usize::try_from(m.len()).ok()),
            Input::Reader(_) => None,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&'static str> for Input {
    fn from(text: &'static str) -> Self {
        Input::TextRef(text)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_estimated_size() {
        assert_eq!(Input::from("abc").estimated_size(), Some(3));
        assert_eq!(Input::from(vec![0xFF, 0x61]).estimated_size(), Some(2));
        assert_eq!(Input::from_reader(Cursor::new(vec![1u8])).estimated_size(), None);
        assert_eq!(
            Input::from_file("/definitely/not/here.txt").estimated_size(),
            None
        );
    }

    #[test]
    fn test_estimated_size_of_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("Caf\u{00E9}\n".as_bytes()).unwrap();
        file.flush().unwrap();
        assert_eq!(Input::from_file(file.path()).estimated_size(), Some(6));
    }

    #[test]
    fn test_into_bytes_keeps_malformed_input() {
        let bytes = Input::from_bytes(vec![b'a', 0xC3]).into_bytes().unwrap();
        assert_eq!(bytes, vec![b'a', 0xC3]);
    }

    #[test]
    fn test_into_reader() {
        let mut reader = Input::from_text("Hi there").into_reader().unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "Hi there");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/definitely/not/here.txt")
            .into_bytes()
            .unwrap_err();
        assert!(matches!(err, EngineError::IoError(_)));
    }
}
