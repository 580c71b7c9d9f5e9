//! In-memory zip archive of compressed images.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::BatchError;

/// Accumulates named entries into a deflate-compressed zip held in memory.
pub struct ArchiveWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    entries: usize,
}

impl ArchiveWriter {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
            entries: 0,
        }
    }

    /// Append one entry. Entry names must be unique within the archive.
    pub fn add(&mut self, name: &str, bytes: &[u8]) -> Result<(), BatchError> {
        self.zip
            .start_file(name, self.options)
            .map_err(|e| BatchError::Archive(format!("{name}: {e}")))?;
        self.zip
            .write_all(bytes)
            .map_err(|e| BatchError::Archive(format!("{name}: {e}")))?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Write the central directory and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>, BatchError> {
        let cursor = self
            .zip
            .finish()
            .map_err(|e| BatchError::Archive(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveWriter {
    fn default() -> Self {
        Self::new()
    }
}
