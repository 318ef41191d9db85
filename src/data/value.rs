//! Cell values and the immutable table shape shared by datasets and
//! transform results.
//!
//! Rows are stored positionally, aligned with `columns`; lookups by name go
//! through [`Table::column_index`].

use crate::error::{DashboardError, Result};
use serde::Serialize;
use std::fmt;

/// A single cell: a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// A named sequence of literal values, the unit `zip_literal` and
/// `Table::from_columns` are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn ints(name: impl Into<String>, values: &[i64]) -> Self {
        Self::new(name, values.iter().copied().map(Value::Int).collect())
    }

    pub fn floats(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().copied().map(Value::Float).collect())
    }

    pub fn texts(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(name, values.iter().map(|s| Value::from(*s)).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered, named table. Datasets and transform results share this shape.
///
/// Fields are private: every row is as wide as the header, and only the
/// checked constructors below can produce a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Empty table with the given header. Duplicate column names are rejected.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let name = name.into();
        for (i, c) in columns.iter().enumerate() {
            if columns[..i].contains(c) {
                return Err(DashboardError::ColumnExists {
                    table: name,
                    column: c.clone(),
                });
            }
        }
        Ok(Self {
            name,
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a table from parallel columns of equal length.
    pub fn from_columns(name: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let name = name.into();
        let header = columns.iter().map(|c| c.name.clone()).collect();
        let mut table = Table::new(name, header)?;

        let height = columns.first().map(Column::len).unwrap_or(0);
        for col in &columns {
            if col.len() != height {
                return Err(DashboardError::LengthMismatch {
                    context: format!("column {} of table {}", col.name, table.name),
                    expected: height,
                    actual: col.len(),
                });
            }
        }

        for i in 0..height {
            table.push_row(columns.iter().map(|c| c.values[i].clone()).collect())?;
        }
        Ok(table)
    }

    /// Header plus pre-built rows, each checked against the header width.
    pub(crate) fn from_rows(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self> {
        let mut table = Table::new(name, columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row; its width must match the header.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(DashboardError::LengthMismatch {
                context: format!("row {} of table {}", self.rows.len(), self.name),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Like `column_index`, but a missing column is an error.
    pub fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| DashboardError::UnknownColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, column: &str) -> Result<Vec<&Value>> {
        let idx = self.require_column(column)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows.get(index).map(|values| RowRef {
            table: self,
            values,
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |values| RowRef {
            table: self,
            values,
        })
    }
}

/// Borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    table: &'a Table,
    values: &'a [Value],
}

impl<'a> RowRef<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.table.column_index(column).map(|i| &self.values[i])
    }

    pub fn require(&self, column: &str) -> Result<&'a Value> {
        let idx = self.table.require_column(column)?;
        Ok(&self.values[idx])
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_columns_aligns_rows() {
        let t = Table::from_columns(
            "t",
            vec![Column::texts("k", &["a", "b"]), Column::ints("v", &[1, 2])],
        )
        .unwrap();
        assert_eq!(t.columns(), vec!["k".to_string(), "v".to_string()]);
        assert_eq!(t.rows()[1], vec![Value::from("b"), Value::Int(2)]);
        assert_eq!(t.value(0, "v"), Some(&Value::Int(1)));
    }

    #[test]
    fn from_columns_rejects_ragged_input() {
        let err = Table::from_columns(
            "t",
            vec![Column::texts("k", &["a", "b"]), Column::ints("v", &[1])],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let err = Table::new("t", vec!["a".into(), "a".into()]).unwrap_err();
        assert!(matches!(err, DashboardError::ColumnExists { .. }));
    }

    #[test]
    fn push_row_checks_width() {
        let mut t = Table::new("t", vec!["a".into(), "b".into()]).unwrap();
        assert!(t.push_row(vec![Value::Int(1)]).is_err());
        t.push_row(vec![Value::Int(1), Value::Int(2)]).unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn row_width_is_enforced_by_every_constructor() {
        let header = || vec!["k".to_string(), "n".to_string()];

        let mut pushed = Table::new("pushed", header()).unwrap();
        assert!(matches!(
            pushed.push_row(vec![Value::Int(1)]),
            Err(DashboardError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
        assert!(pushed.is_empty());

        assert!(matches!(
            Table::from_columns(
                "zipped",
                vec![Column::ints("k", &[1, 2]), Column::ints("n", &[1])],
            ),
            Err(DashboardError::LengthMismatch { .. })
        ));

        assert!(matches!(
            Table::from_rows(
                "rows",
                header(),
                vec![vec![Value::Int(1), Value::Int(2)], vec![Value::Int(1)]],
            ),
            Err(DashboardError::LengthMismatch { .. })
        ));

        let ok = Table::from_rows("rows", header(), vec![vec![Value::Int(1), Value::Int(2)]])
            .unwrap();
        assert!(ok.rows().iter().all(|r| r.len() == ok.columns().len()));
    }

    #[test]
    fn row_ref_lookup() {
        let t = Table::from_columns("t", vec![Column::texts("Source", &["Wages+Agri"])]).unwrap();
        let row = t.row(0).unwrap();
        assert_eq!(row.get("Source").and_then(Value::as_text), Some("Wages+Agri"));
        assert!(row.get("Missing").is_none());
        assert!(matches!(
            row.require("Missing"),
            Err(DashboardError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn values_serialize_untagged() {
        let json = serde_json::to_string(&vec![
            Value::Int(3),
            Value::Float(1.5),
            Value::from("x"),
        ])
        .unwrap();
        assert_eq!(json, r#"[3,1.5,"x"]"#);
    }
}
