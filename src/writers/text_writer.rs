use crate::error::{ExportError, Result};
use crate::models::daily::format_temperature;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Replace the file content with `line`, without a trailing newline.
pub fn write_line(path: &Path, line: &str) -> Result<()> {
    std::fs::write(path, line.as_bytes()).map_err(|source| ExportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = line.len(), "Line written");
    Ok(())
}

/// Write one temperature per line, each terminated by `\n`.
pub fn write_values(path: &Path, values: &[Option<f64>]) -> Result<usize> {
    let to_output_error = |source: std::io::Error| ExportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_output_error)?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{}", format_temperature(*value)).map_err(to_output_error)?;
    }
    writer.flush().map_err(to_output_error)?;

    debug!(path = %path.display(), rows = values.len(), "Values written");
    Ok(values.len())
}
