//! The in-memory table shape shared by the writer and reader.

/// A rectangular table: one header row plus string data rows.
///
/// Everything is carried as strings; robots move portal data around,
/// they do not do arithmetic on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column headers, written to row 1.
    pub headers: Vec<String>,
    /// Data rows. Rows may be shorter than the header row; trailing
    /// cells are left blank.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with headers and no data rows.
    #[must_use]
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row, builder-style.
    #[must_use]
    pub fn with_row<S: Into<String>>(mut self, row: Vec<S>) -> Self {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Append a data row.
    pub fn push_row<S: Into<String>>(&mut self, row: Vec<S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of columns (header width).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let table = Table::new(vec!["Nota", "Valor"])
            .with_row(vec!["123", "45.90"])
            .with_row(vec!["124", "12.00"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows.len(), 2);
        assert!(!table.is_empty());
    }
}
