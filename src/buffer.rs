use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::EditError;

/// Outcome of a save request. Declining to overwrite an existing file is a
/// normal alternate result, not a failure.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The buffer was written; carries the number of lines written.
    Saved(usize),
    /// The target exists and overwriting was not allowed. File untouched.
    Cancelled,
}

/// An ordered, in-memory sequence of text lines with dirty tracking.
///
/// Positions are 1-indexed at the API surface and 0-indexed internally.
/// `dirty` is true iff the lines differ from the last successfully loaded or
/// saved snapshot.
#[derive(Debug, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    dirty: bool,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Appends a line to the end of the buffer, trimming surrounding
    /// whitespace first. Returns the character count of the stored line.
    pub fn add(&mut self, text: &str) -> Result<usize, EditError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EditError::EmptyInput);
        }
        let count = trimmed.chars().count();
        self.lines.push(trimmed.to_string());
        self.dirty = true;
        Ok(count)
    }

    /// Inserts `text` (untrimmed) before the 1-indexed `position`.
    /// `position == len + 1` appends.
    pub fn insert_before(&mut self, position: usize, text: &str) -> Result<(), EditError> {
        let max = self.lines.len() + 1;
        if position < 1 || position > max {
            return Err(EditError::OutOfRange { position, max });
        }
        self.lines.insert(position - 1, text.to_string());
        self.dirty = true;
        Ok(())
    }

    /// Removes the line at the 1-indexed `position`. Deleting from an empty
    /// buffer is a no-op success; there is nothing to remove.
    pub fn delete(&mut self, position: usize) -> Result<(), EditError> {
        if self.lines.is_empty() {
            return Ok(());
        }
        let max = self.lines.len();
        if position < 1 || position > max {
            return Err(EditError::OutOfRange { position, max });
        }
        self.lines.remove(position - 1);
        self.dirty = true;
        Ok(())
    }

    /// Iterates over `(1-indexed position, line)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| (index + 1, line.as_str()))
    }

    /// Reads `path` line by line and appends every line to the end of the
    /// buffer, then marks the buffer clean. Appending (rather than
    /// replacing) while still clearing the dirty flag is the documented
    /// contract of this operation; callers relying on load-as-sync depend
    /// on it. Returns the lines read for reporting.
    pub fn load_from_file(&mut self, path: &Path) -> Result<Vec<String>, EditError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EditError::FileNotFound(path.to_path_buf())
            } else {
                EditError::FileUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let read: Vec<String> = content.lines().map(str::to_string).collect();
        self.lines.extend(read.iter().cloned());
        self.dirty = false;
        Ok(read)
    }

    /// Writes every line to `path`, each terminated by a newline (including
    /// the last). If the target exists and `overwrite_allowed` is false, the
    /// save is cancelled without touching the file.
    pub fn save_to_file(
        &mut self,
        path: &Path,
        overwrite_allowed: bool,
    ) -> Result<SaveOutcome, EditError> {
        if path.exists() && !overwrite_allowed {
            return Ok(SaveOutcome::Cancelled);
        }

        self.write_lines(path)
            .map_err(|source| EditError::FileUnwritable {
                path: path.to_path_buf(),
                source,
            })?;

        self.dirty = false;
        Ok(SaveOutcome::Saved(self.lines.len()))
    }

    fn write_lines(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}
