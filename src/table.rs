use crate::error::{ProjectorError, Result};

/// An in-memory delimited-text table: a header row plus untyped string cells.
///
/// Rows keep their source order throughout; nothing in this type reorders,
/// drops, or deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header and data rows. Every row must have exactly
    /// as many fields as the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = columns.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ProjectorError::Load(format!(
                    "row {} has {} fields, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column. The first occurrence wins when the source
    /// header repeats a name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Check that every required column name is present in the header.
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProjectorError::Schema { missing })
        }
    }

    /// Project the table onto the named columns, in the given order.
    ///
    /// All other columns are discarded. Row order is preserved.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|name| {
                self.column_index(name).ok_or_else(|| ProjectorError::Schema {
                    missing: vec![name.to_string()],
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Table {
            columns: names.iter().map(|s| s.to_string()).collect(),
            rows,
        })
    }

    /// Rewrite every value in the named column through `f`, which receives the
    /// zero-based data-row index alongside the raw value.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &str) -> Result<String>,
    {
        let idx = self.column_index(name).ok_or_else(|| ProjectorError::Schema {
            missing: vec![name.to_string()],
        })?;
        for (i, row) in self.rows.iter_mut().enumerate() {
            row[idx] = f(i, &row[idx])?;
        }
        Ok(())
    }
}
