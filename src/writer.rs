use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

use crate::encoding;
use crate::error::{ProjectorError, Result};
use crate::table::Table;

/// Serializes a [`Table`] back to delimited text.
///
/// The table is rendered in memory first and written in one shot, so a
/// failure never leaves a partially written destination behind.
pub struct Writer {
    encoding_label: String,
    delimiter: u8,
}

impl Writer {
    pub fn new(encoding_label: &str, delimiter: u8) -> Self {
        Self {
            encoding_label: encoding_label.to_string(),
            delimiter,
        }
    }

    #[instrument(skip(self, table), fields(encoding = %self.encoding_label))]
    pub fn save(&self, table: &Table, path: &Path) -> Result<()> {
        let encoding = encoding::resolve(&self.encoding_label)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer
            .write_record(table.columns())
            .map_err(|e| ProjectorError::Write(e.to_string()))?;
        for row in table.rows() {
            writer
                .write_record(row)
                .map_err(|e| ProjectorError::Write(e.to_string()))?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| ProjectorError::Write(e.to_string()))?;
        let text =
            String::from_utf8(buffer).map_err(|e| ProjectorError::Write(e.to_string()))?;

        let bytes = encoding::encode(&text, encoding).ok_or_else(|| {
            ProjectorError::Write(format!(
                "{} cannot represent every value in the table",
                encoding.name()
            ))
        })?;

        fs::write(path, bytes).map_err(|e| {
            ProjectorError::Write(format!("failed to write '{}': {}", path.display(), e))
        })?;
        debug!("wrote {} rows to {}", table.row_count(), path.display());
        Ok(())
    }
}
