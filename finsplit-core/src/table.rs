//! Column-name-agnostic tabular input.

/// A report as read from disk: named columns, string cells.
///
/// The pipeline never assumes column names; callers select the date,
/// description, and amount columns by name at run time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a data row, padded or truncated to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of a column by exact name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_index() {
        let table = RawTable::new(cols(&["Date", "Description", "Amount"]));
        assert_eq!(table.column_index("Amount"), Some(2));
        assert_eq!(table.column_index("amount"), None);
        assert_eq!(table.column_index("Missing"), None);
    }

    #[test]
    fn test_push_row_pads_and_truncates() {
        let mut table = RawTable::new(cols(&["A", "B", "C"]));
        table.push_row(vec!["1".to_string()]);
        table.push_row(vec!["1".into(), "2".into(), "3".into(), "4".into()]);
        assert_eq!(table.rows()[0], vec!["1", "", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2", "3"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = RawTable::new(cols(&["Date"]));
        assert!(table.is_empty());
        assert_eq!(table.rows(), &[] as &[Vec<String>]);
    }
}
