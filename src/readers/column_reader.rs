use crate::error::{ExportError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads the first field of every row of a headerless CSV file.
pub struct ColumnReader {
    delimiter: u8,
}

impl ColumnReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn read_first_column(&self, path: &Path) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExportError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ExportError::Io(e),
        })?;

        let values = self.first_column_of(&content)?;
        debug!(path = %path.display(), rows = values.len(), "Read first column");
        Ok(values)
    }

    /// Parse CSV text and return field 0 of each row.
    ///
    /// A blank line outside a quoted field is a row without fields and is
    /// rejected rather than skipped.
    pub fn first_column_of(&self, content: &str) -> Result<Vec<String>> {
        if let Some(line) = find_empty_row(content) {
            return Err(ExportError::EmptyRow { line });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let mut values = Vec::new();
        for result in reader.records() {
            let record = result?;
            let first = record.get(0).ok_or_else(|| ExportError::EmptyRow {
                line: record.position().map_or(0, |p| p.line() as usize),
            })?;
            values.push(first.to_string());
        }

        Ok(values)
    }
}

impl Default for ColumnReader {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based line number of the first empty row, if any.
fn find_empty_row(content: &str) -> Option<usize> {
    let mut line = 1;
    let mut line_is_empty = true;
    let mut in_quotes = false;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                line_is_empty = false;
            }
            '\r' => {}
            '\n' => {
                if in_quotes {
                    line_is_empty = false;
                } else if line_is_empty {
                    return Some(line);
                } else {
                    line_is_empty = true;
                }
                line += 1;
            }
            _ => line_is_empty = false,
        }
    }

    None
}
