//! Table model

use std::collections::HashSet;

use thiserror::Error;

use super::column::Column;

/// Errors raised when assembling a table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Columns have different lengths
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// An ordered set of equally long, uniquely named columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, rejecting duplicate names and ragged columns
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        let expected = columns.first().map(Column::len).unwrap_or(0);

        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(TableError::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != expected {
                return Err(TableError::RaggedColumns {
                    column: column.name().to_string(),
                    expected,
                    found: column.len(),
                });
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Copy of the first `n` rows
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.iter().map(|c| c.head(n)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_columns_rejected() {
        let result = Table::new(vec![
            Column::from_ints("a", &[Some(1)]),
            Column::from_ints("a", &[Some(2)]),
        ]);
        assert_eq!(result, Err(TableError::DuplicateColumn("a".to_string())));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = Table::new(vec![
            Column::from_ints("a", &[Some(1), Some(2)]),
            Column::from_ints("b", &[Some(1)]),
        ]);
        assert!(matches!(result, Err(TableError::RaggedColumns { .. })));
    }

    #[test]
    fn test_lookup_and_shape() {
        let table = Table::new(vec![
            Column::from_ints("a", &[Some(1), Some(2), Some(3)]),
            Column::from_strs("b", &[Some("x"), None, Some("z")]),
        ])
        .unwrap();

        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert!(table.column("b").is_some());
        assert!(table.column("c").is_none());
        assert_eq!(table.head(1).n_rows(), 1);
    }
}
