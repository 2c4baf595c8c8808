use crate::error::Result;
use crate::readers::ColumnReader;
use crate::utils::constants::FIELD_SEPARATOR;
use crate::writers::write_line;
use std::path::Path;
use tracing::info;

pub fn join_line(values: &[String]) -> String {
    values.join(FIELD_SEPARATOR)
}

/// Flatten the first column of `input` into one comma-separated line in `output`.
///
/// Returns the number of values written.
pub fn csv_to_line(input: &Path, output: &Path) -> Result<usize> {
    info!(input = %input.display(), output = %output.display(), "Converting CSV column to line");

    let values = ColumnReader::new().read_first_column(input)?;
    write_line(output, &join_line(&values))?;

    Ok(values.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_join_line() {
        let values = vec!["1".to_string(), "4".to_string()];
        assert_eq!(join_line(&values), "1,4");
        assert_eq!(join_line(&[]), "");
    }

    #[test]
    fn test_csv_to_line() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "1,2,3\n4,5,6\n")?;

        let count = csv_to_line(&input, &output)?;

        assert_eq!(count, 2);
        assert_eq!(std::fs::read_to_string(&output)?, "1,4");
        Ok(())
    }

    #[test]
    fn test_failed_read_leaves_output_untouched() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "1\n\n2\n")?;

        let result = csv_to_line(&input, &output);

        assert!(matches!(result, Err(ExportError::EmptyRow { line: 2 })));
        assert!(!output.exists());
        Ok(())
    }
}
