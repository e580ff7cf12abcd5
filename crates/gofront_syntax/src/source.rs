//! Byte sources: the input boundary of the front end.
//!
//! A [`ByteSource`] exposes bounded lookahead over raw bytes plus an optional path for diagnostics. The file-backed
//! and memory-backed implementations differ only in how bytes are supplied; the decoder above them never sees the
//! difference.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Failure to open or read a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pull-based byte input.
pub trait ByteSource {
    /// Return the byte `offset` positions ahead without consuming, or `None` past the end of input.
    fn peek(&mut self, offset: usize) -> Option<u8>;

    /// Remove and return the next byte.
    fn consume(&mut self) -> Option<u8>;

    /// Path used for diagnostics, if the source has one.
    fn path(&self) -> Option<&str>;
}

/// In-memory source.
#[derive(Debug, Clone)]
pub struct MemorySource {
    bytes: Vec<u8>,
    pos: usize,
    path: Option<String>,
}

impl MemorySource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            pos: 0,
            path: None,
        }
    }

    /// Attach a path for diagnostics.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl ByteSource for MemorySource {
    fn peek(&mut self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn consume(&mut self) -> Option<u8> {
        let b = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

/// File-backed source with a small lookahead buffer.
///
/// ## Notes
/// - Read errors after opening are treated as end of input and logged; the decoder contract has no error channel.
#[derive(Debug)]
pub struct FileSource {
    reader: BufReader<File>,
    lookahead: VecDeque<u8>,
    path: String,
    exhausted: bool,
}

impl FileSource {
    /// Open `path` for reading.
    ///
    /// ## Errors
    /// Returns [`SourceError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            lookahead: VecDeque::new(),
            path: path.to_string_lossy().into_owned(),
            exhausted: false,
        })
    }

    fn fill(&mut self, wanted: usize) {
        let mut byte = [0u8; 1];
        while self.lookahead.len() < wanted && !self.exhausted {
            match self.reader.read(&mut byte) {
                Ok(0) => self.exhausted = true,
                Ok(_) => self.lookahead.push_back(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::warn!(path = %self.path, error = %e, "read failed; treating as end of input");
                    self.exhausted = true;
                }
            }
        }
    }
}

impl ByteSource for FileSource {
    fn peek(&mut self, offset: usize) -> Option<u8> {
        self.fill(offset + 1);
        self.lookahead.get(offset).copied()
    }

    fn consume(&mut self) -> Option<u8> {
        self.fill(1);
        self.lookahead.pop_front()
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }
}
