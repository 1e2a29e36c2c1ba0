//! Markdown document buffer with positional insertion.
//!
//! Owns the text being edited as a plain string and resolves cursor
//! positions to byte offsets. The caller drives the edit lifecycle
//! explicitly: load, insert or append, save.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Cursor position inside a document.
///
/// Lines are 1-based as editors display them; the column is a 0-based
/// byte offset within the line. Columns past the end of the line clamp
/// to the line end rather than erroring, matching how editors treat a
/// cursor beyond the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, 1-based
    pub line: usize,
    /// Byte column within the line, 0-based
    pub column: usize,
}

impl Position {
    /// Parses a position from `LINE` or `LINE:COLUMN` notation.
    ///
    /// # Arguments
    ///
    /// * `raw`: Position argument, e.g. `"12"` or `"12:4"`
    ///
    /// # Errors
    ///
    /// Returns error if either component is not a number or line is 0
    pub fn parse(raw: &str) -> Result<Self> {
        let (line, column) = match raw.split_once(':') {
            Some((line, column)) => (line, Some(column)),
            None => (raw, None),
        };

        let line: usize = line
            .trim()
            .parse()
            .with_context(|| format!("Invalid line number: {line:?}"))?;

        if line == 0 {
            bail!("Line numbers start at 1");
        }

        let column: usize = match column {
            Some(column) => column
                .trim()
                .parse()
                .with_context(|| format!("Invalid column number: {column:?}"))?,
            None => 0,
        };

        Ok(Self { line, column })
    }
}

/// Markdown document being edited.
pub struct Document {
    path: Option<PathBuf>,
    content: String,
}

impl Document {
    /// Loads document content from file.
    ///
    /// # Arguments
    ///
    /// * `path`: Markdown file to edit
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF-8
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            content,
        })
    }

    /// Creates an in-memory document without a backing file.
    ///
    /// # Arguments
    ///
    /// * `content`: Initial document text
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            path: None,
            content: content.into(),
        }
    }

    /// Returns current document text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Inserts text at a cursor position.
    ///
    /// The column clamps to the end of the line, and is nudged back to
    /// the nearest character boundary when it lands inside a multi-byte
    /// character, so insertion never splits a character.
    ///
    /// # Arguments
    ///
    /// * `position`: Cursor position to insert at
    /// * `text`: Text to splice into the document
    ///
    /// # Errors
    ///
    /// Returns error if the line is past the end of the document
    pub fn insert(&mut self, position: Position, text: &str) -> Result<()> {
        let offset = self.offset_of(position)?;
        self.content.insert_str(offset, text);
        Ok(())
    }

    /// Appends text as a new line at the end of the document.
    ///
    /// Inserts a separating newline when the document does not already
    /// end with one, and terminates the appended line.
    ///
    /// # Arguments
    ///
    /// * `text`: Text to append
    pub fn append(&mut self, text: &str) {
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            self.content.push('\n');
        }
        self.content.push_str(text);
        self.content.push('\n');
    }

    /// Writes document content back to its source file.
    ///
    /// # Errors
    ///
    /// Returns error if the document has no backing file or the write fails
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            bail!("Document has no backing file to save to");
        };

        fs::write(path, &self.content)
            .with_context(|| format!("Failed to write document: {}", path.display()))
    }

    /// Resolves a cursor position to a byte offset into the content.
    fn offset_of(&self, position: Position) -> Result<usize> {
        let mut line_start = 0;
        let mut current_line = 1;

        loop {
            let line_end = self.content[line_start..]
                .find('\n')
                .map(|i| line_start + i)
                .unwrap_or(self.content.len());

            if current_line == position.line {
                let line_len = line_end - line_start;
                let mut offset = line_start + position.column.min(line_len);

                // Clamp to character boundary: byte columns may land
                // inside a multi-byte character
                while !self.content.is_char_boundary(offset) {
                    offset -= 1;
                }

                return Ok(offset);
            }

            if line_end == self.content.len() {
                bail!(
                    "Line {} is past the end of the document ({} lines)",
                    position.line,
                    current_line
                );
            }

            line_start = line_end + 1;
            current_line += 1;
        }
    }
}
