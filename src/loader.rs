//! Directory-backed document source.
//!
//! [`DocumentLoader`] yields every regular file of one directory, in file
//! name order, as raw bytes. Parsing is left to [`Document::parse`] so the
//! caller decides what a failed read means.
//!
//! [`Document::parse`]: crate::Document::parse

use std::fs;
use std::path::{Path, PathBuf};
use std::vec;

use crate::error::{Error, Result};

/// Lazy iterator over the files of a directory.
///
/// The directory listing is taken once at [`DocumentLoader::open`]; file
/// contents are read on demand. Not restartable.
#[derive(Debug)]
pub struct DocumentLoader {
    entries: vec::IntoIter<PathBuf>,
}

impl DocumentLoader {
    /// List `dir` without recursing into sub-directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory is missing or cannot be listed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            // Symlinks are followed; anything that is not a file is skipped.
            if path.is_file() {
                entries.push(path);
            }
        }
        entries.sort();
        Ok(Self {
            entries: entries.into_iter(),
        })
    }

    /// Number of files not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl Iterator for DocumentLoader {
    type Item = Result<(PathBuf, Vec<u8>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.entries.next()?;
        Some(match fs::read(&path) {
            Ok(bytes) => Ok((path, bytes)),
            Err(e) => Err(Error::io(path, e)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
