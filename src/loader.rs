use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

use crate::encoding;
use crate::error::{ProjectorError, Result};
use crate::table::Table;

/// Reads a delimited text file into a [`Table`].
///
/// The file is read in one shot, decoded under the configured encoding, and
/// parsed with a header row. Ragged data rows are rejected by the CSV layer.
pub struct Loader {
    encoding_label: String,
    delimiter: u8,
}

impl Loader {
    pub fn new(encoding_label: &str, delimiter: u8) -> Self {
        Self {
            encoding_label: encoding_label.to_string(),
            delimiter,
        }
    }

    #[instrument(skip(self), fields(encoding = %self.encoding_label))]
    pub fn load(&self, path: &Path) -> Result<Table> {
        let encoding = encoding::resolve(&self.encoding_label)?;

        let bytes = fs::read(path).map_err(|e| {
            ProjectorError::Load(format!("failed to read '{}': {}", path.display(), e))
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());

        let text = encoding::decode(&bytes, encoding).ok_or_else(|| {
            ProjectorError::Load(format!(
                "'{}' is not valid {} text",
                path.display(),
                encoding.name()
            ))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| {
                ProjectorError::Load(format!(
                    "malformed header in '{}': {}",
                    path.display(),
                    e
                ))
            })?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                ProjectorError::Load(format!("malformed CSV in '{}': {}", path.display(), e))
            })?;
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }
        debug!("parsed {} data rows, {} columns", rows.len(), columns.len());

        Table::new(columns, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn loads_a_latin1_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "café" with 0xE9 for 'é', as a Latin-1 export would contain
        file.write_all(b"name,city\ncaf\xE9,Bogot\xE1\n").unwrap();

        let table = Loader::new("iso-8859-1", b',').load(file.path()).unwrap();
        assert_eq!(table.columns(), &["name".to_string(), "city".to_string()]);
        assert_eq!(
            table.rows(),
            &[vec!["café".to_string(), "Bogotá".to_string()]]
        );
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = Loader::new("utf-8", b',')
            .load(Path::new("no-such-file.csv"))
            .unwrap_err();
        assert!(matches!(err, ProjectorError::Load(_)));
    }

    #[test]
    fn invalid_utf8_is_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a,b\n\xFF\xFE,x\n").unwrap();

        let err = Loader::new("utf-8", b',').load(file.path()).unwrap_err();
        assert!(matches!(err, ProjectorError::Load(_)));
    }

    #[test]
    fn ragged_rows_are_a_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a,b\n1,2,3\n").unwrap();

        let err = Loader::new("utf-8", b',').load(file.path()).unwrap_err();
        assert!(matches!(err, ProjectorError::Load(_)));
    }
}
