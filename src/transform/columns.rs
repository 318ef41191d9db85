//! Column-level helpers: derived columns, renames and literal zips.

use crate::data::{Column, RowRef, Table, Value};
use crate::error::{DashboardError, Result};

/// Append `name`, computed row-wise by `f`.
pub fn derive_column<F>(table: &Table, name: &str, f: F) -> Result<Table>
where
    F: Fn(RowRef<'_>) -> Result<Value>,
{
    if table.has_column(name) {
        return Err(DashboardError::ColumnExists {
            table: table.name().to_string(),
            column: name.to_string(),
        });
    }

    let mut header = table.columns().to_vec();
    header.push(name.to_string());
    let mut out = Table::new(table.name().to_string(), header)?;

    for row in table.iter_rows() {
        let derived = f(row)?;
        let mut cells = row.values().to_vec();
        cells.push(derived);
        out.push_row(cells)?;
    }
    Ok(out)
}

/// Rename columns by (from, to) pairs. Renaming onto an existing name fails.
pub fn rename_columns(table: &Table, pairs: &[(&str, &str)]) -> Result<Table> {
    let mut header = table.columns().to_vec();
    for (from, to) in pairs {
        let idx = table.require_column(from)?;
        header[idx] = to.to_string();
    }
    Table::from_rows(table.name(), header, table.rows().to_vec())
}

/// Build an ad-hoc table from a label column and parallel value columns.
pub fn zip_literal(name: &str, labels: Column, values: Vec<Column>) -> Result<Table> {
    for col in &values {
        if col.len() != labels.len() {
            return Err(DashboardError::LengthMismatch {
                context: format!("{} vs {} in {}", col.name, labels.name, name),
                expected: labels.len(),
                actual: col.len(),
            });
        }
    }
    let mut columns = Vec::with_capacity(values.len() + 1);
    columns.push(labels);
    columns.extend(values);
    Table::from_columns(name, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sources() -> Table {
        zip_literal(
            "income_mix",
            Column::texts("Source", &["Wages", "Wages+Agri", "Wages+Biz"]),
            vec![Column::ints("Monthly", &[8500, 9500, 10000])],
        )
        .unwrap()
    }

    #[test]
    fn zip_literal_row_count_matches_sequences() {
        let t = sources();
        assert_eq!(t.len(), 3);
        assert_eq!(t.columns(), vec!["Source", "Monthly"]);
    }

    #[test]
    fn zip_literal_length_mismatch() {
        let err = zip_literal(
            "bad",
            Column::texts("Skill", &["Mason", "Painter"]),
            vec![Column::ints("Income", &[500])],
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
    fn derive_appends_computed_column() {
        let t = derive_column(&sources(), "Parts", |row| {
            let src = row.require("Source")?.to_string();
            Ok(Value::Int(src.split('+').count() as i64))
        })
        .unwrap();
        assert_eq!(t.columns(), vec!["Source", "Monthly", "Parts"]);
        assert_eq!(
            t.column_values("Parts").unwrap(),
            vec![&Value::Int(1), &Value::Int(2), &Value::Int(2)]
        );
    }

    #[test]
    fn derive_rejects_existing_column() {
        let err = derive_column(&sources(), "Monthly", |_| Ok(Value::Int(0))).unwrap_err();
        assert!(matches!(err, DashboardError::ColumnExists { .. }));
    }

    #[test]
    fn derive_propagates_row_errors() {
        let err = derive_column(&sources(), "X", |row| row.require("Nope").cloned()).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownColumn { .. }));
    }

    #[test]
    fn rename_keeps_rows() {
        let t = rename_columns(&sources(), &[("Monthly", "Total")]).unwrap();
        assert_eq!(t.columns(), vec!["Source", "Total"]);
        assert_eq!(t.rows(), sources().rows());
        assert!(rename_columns(&sources(), &[("Monthly", "Source")]).is_err());
    }
}
