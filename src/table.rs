//! @ai:module:intent Row-oriented in-memory table used to merge metric results
//! @ai:module:layer domain
//! @ai:module:public_api MetricTable, Cell
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// @ai:intent A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// @ai:intent Numeric value of the cell, if any
    /// @ai:effects pure
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// @ai:intent Text value of the cell, if any
    /// @ai:effects pure
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(value) => write!(f, "{:.4}", value),
            Cell::Text(value) => write!(f, "{}", value),
            Cell::Missing => write!(f, "-"),
        }
    }
}

/// @ai:intent Table with named columns and equally wide rows
/// @ai:invariant every row has exactly columns.len() cells
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl MetricTable {
    /// @ai:intent Create an empty table with the given columns
    /// @ai:effects pure
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// @ai:intent Create a one-row table from (column, value) pairs
    /// @ai:effects pure
    pub fn single_row<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Cell)>,
        S: Into<String>,
    {
        let (columns, row): (Vec<String>, Vec<Cell>) = entries
            .into_iter()
            .map(|(name, cell)| (name.into(), cell))
            .unzip();

        Self {
            columns,
            rows: vec![row],
        }
    }

    /// @ai:intent Append a row
    /// @ai:pre row.len() == self.columns().len()
    /// @ai:effects state:write
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::RowWidth {
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// @ai:intent Check whether a column exists
    /// @ai:effects pure
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// @ai:intent All values of one column, top to bottom
    /// @ai:effects pure
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// @ai:intent Insert a column holding the same value in every row
    /// @ai:pre index <= self.columns().len()
    /// @ai:effects state:write
    pub fn insert_column(&mut self, index: usize, name: impl Into<String>, value: Cell) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, name.into());

        for row in &mut self.rows {
            row.insert(index, value.clone());
        }
    }

    /// @ai:intent Vertically concatenate tables in order
    /// @ai:post columns are the union of all input columns in first-seen order
    /// @ai:post cells absent from a source table are Cell::Missing
    /// @ai:effects pure
    pub fn concat<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = MetricTable>,
    {
        let tables: Vec<MetricTable> = tables.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        for table in &tables {
            for column in &table.columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(tables.iter().map(|t| t.rows.len()).sum());
        for table in tables {
            let mapping: Vec<Option<usize>> =
                columns.iter().map(|c| table.column_index(c)).collect();

            for row in table.rows {
                rows.push(
                    mapping
                        .iter()
                        .map(|source| source.map(|i| row[i].clone()).unwrap_or(Cell::Missing))
                        .collect(),
                );
            }
        }

        Self { columns, rows }
    }

    /// @ai:intent Remove every column whose name satisfies the predicate
    /// @ai:post returns the names of the removed columns in table order
    /// @ai:effects state:write
    pub fn drop_columns_where<F>(&mut self, predicate: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let keep: Vec<bool> = self.columns.iter().map(|c| !predicate(c)).collect();

        let mut dropped = Vec::new();
        let mut kept_columns = Vec::with_capacity(self.columns.len());
        for (column, keep_it) in self.columns.drain(..).zip(&keep) {
            if *keep_it {
                kept_columns.push(column);
            } else {
                dropped.push(column);
            }
        }
        self.columns = kept_columns;

        for row in &mut self.rows {
            let mut flags = keep.iter();
            row.retain(|_| *flags.next().unwrap_or(&true));
        }

        dropped
    }

    /// @ai:intent Render the table as a Markdown table
    /// @ai:effects pure
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("| {} |\n", self.columns.join(" | ")));
        output.push_str(&format!(
            "|{}|\n",
            self.columns
                .iter()
                .map(|c| "-".repeat(c.len() + 2))
                .collect::<Vec<_>>()
                .join("|")
        ));

        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(columns: &[&str], values: &[f64]) -> MetricTable {
        MetricTable::single_row(
            columns
                .iter()
                .zip(values)
                .map(|(c, v)| (*c, Cell::Number(*v))),
        )
    }

    #[test]
    fn test_push_row_rejects_wrong_width() {
        let mut t = MetricTable::new(["a", "b"]);
        assert!(t.push_row(vec![Cell::Number(1.0), Cell::Number(2.0)]).is_ok());

        let err = t.push_row(vec![Cell::Number(1.0)]).unwrap_err();
        assert!(matches!(err, Error::RowWidth { expected: 2, found: 1 }));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_insert_column_at_front() {
        let mut t = table(&["AP", "AR"], &[0.5, 0.6]);
        t.insert_column(0, "Model Name", Cell::from("yolo"));

        assert_eq!(t.columns(), &["Model Name", "AP", "AR"]);
        assert_eq!(t.rows()[0][0], Cell::Text("yolo".to_string()));
        assert_eq!(t.rows()[0][1], Cell::Number(0.5));
    }

    #[test]
    fn test_concat_preserves_order_and_fills_missing() {
        let first = table(&["AP", "AP_small"], &[0.5, 0.2]);
        let second = table(&["AP", "AP_large"], &[0.7, 0.9]);

        let merged = MetricTable::concat(vec![first, second]);

        assert_eq!(merged.columns(), &["AP", "AP_small", "AP_large"]);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.rows()[0],
            vec![Cell::Number(0.5), Cell::Number(0.2), Cell::Missing]
        );
        assert_eq!(
            merged.rows()[1],
            vec![Cell::Number(0.7), Cell::Missing, Cell::Number(0.9)]
        );
    }

    #[test]
    fn test_drop_columns_where() {
        let mut t = table(&["AP", "AP_small", "AR"], &[0.5, 0.2, 0.4]);

        let dropped = t.drop_columns_where(|c| c.contains("small"));

        assert_eq!(dropped, vec!["AP_small".to_string()]);
        assert_eq!(t.columns(), &["AP", "AR"]);
        assert_eq!(t.rows()[0], vec![Cell::Number(0.5), Cell::Number(0.4)]);
    }

    #[test]
    fn test_column_lookup() {
        let t = table(&["AP"], &[0.25]);
        assert_eq!(t.column("AP"), Some(vec![&Cell::Number(0.25)]));
        assert_eq!(t.column("AR"), None);
    }

    #[test]
    fn test_markdown_output() {
        let mut t = table(&["AP"], &[0.5]);
        t.insert_column(0, "Model Name", Cell::from("a"));

        let md = t.to_markdown();
        assert!(md.starts_with("| Model Name | AP |\n"));
        assert!(md.contains("| a | 0.5000 |"));
    }

    #[test]
    fn test_missing_cell_serializes_as_null() {
        let json = serde_json::to_string(&vec![Cell::Missing, Cell::Number(1.5)]).unwrap();
        assert_eq!(json, "[null,1.5]");
    }
}
