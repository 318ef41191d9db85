//! Wide <-> long reshaping.

use crate::data::{Table, Value};
use crate::error::{DashboardError, Result};

/// Output column names for [`reshape_long`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongNames {
    pub variable: String,
    pub value: String,
}

impl LongNames {
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

impl Default for LongNames {
    fn default() -> Self {
        Self::new("variable", "value")
    }
}

/// Melt `value_columns` into a (variable, value) pair of columns.
///
/// One output row per (input row, value column), original-row-major then
/// value columns in declared order. An empty `value_columns` melts every
/// column not listed in `id_columns`.
///
/// Column roles as a chart sees them:
/// - `id_columns` are category columns (the x axis, pie names, tree labels).
/// - `value_columns` are value columns; their cells land in `names.value`.
/// - `names.variable` is the series column: it holds the melted column
///   names and usually drives colour.
pub fn reshape_long(
    table: &Table,
    id_columns: &[&str],
    value_columns: &[&str],
    names: &LongNames,
) -> Result<Table> {
    let id_idx = id_columns
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<Vec<_>>>()?;

    let value_columns: Vec<&str> = if value_columns.is_empty() {
        table
            .columns()
            .iter()
            .map(String::as_str)
            .filter(|c| !id_columns.contains(c))
            .collect()
    } else {
        value_columns.to_vec()
    };
    let value_idx = value_columns
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<Vec<_>>>()?;

    let mut header: Vec<String> = id_columns.iter().map(|c| c.to_string()).collect();
    header.push(names.variable.clone());
    header.push(names.value.clone());
    let mut out = Table::new(format!("{}_long", table.name()), header)?;

    for row in table.rows() {
        for (name, &vi) in value_columns.iter().zip(&value_idx) {
            let mut cells: Vec<Value> = id_idx.iter().map(|&i| row[i].clone()).collect();
            cells.push(Value::from(*name));
            cells.push(row[vi].clone());
            out.push_row(cells)?;
        }
    }

    Ok(out)
}

/// Inverse of [`reshape_long`]: spread `variable_column` back into columns.
///
/// Id combinations and variable names keep their order of first appearance.
/// Every (id, variable) cell must occur exactly once.
pub fn pivot_wide(
    table: &Table,
    id_columns: &[&str],
    variable_column: &str,
    value_column: &str,
) -> Result<Table> {
    let id_idx = id_columns
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<Vec<_>>>()?;
    let var_idx = table.require_column(variable_column)?;
    let val_idx = table.require_column(value_column)?;

    let mut keys: Vec<Vec<Value>> = Vec::new();
    let mut variables: Vec<String> = Vec::new();
    let mut cells: Vec<(usize, usize, Value)> = Vec::new();

    for row in table.rows() {
        let key: Vec<Value> = id_idx.iter().map(|&i| row[i].clone()).collect();
        let k = match keys.iter().position(|existing| *existing == key) {
            Some(k) => k,
            None => {
                keys.push(key);
                keys.len() - 1
            }
        };

        let var = row[var_idx].to_string();
        let v = match variables.iter().position(|existing| *existing == var) {
            Some(v) => v,
            None => {
                variables.push(var);
                variables.len() - 1
            }
        };

        if cells.iter().any(|(ck, cv, _)| *ck == k && *cv == v) {
            return Err(DashboardError::Pivot {
                table: table.name().to_string(),
                reason: format!("duplicate cell for variable {}", variables[v]),
            });
        }
        cells.push((k, v, row[val_idx].clone()));
    }

    let mut header: Vec<String> = id_columns.iter().map(|c| c.to_string()).collect();
    header.extend(variables.iter().cloned());
    let mut out = Table::new(format!("{}_wide", table.name()), header)?;

    for (k, key) in keys.into_iter().enumerate() {
        let mut row = key;
        for (v, var) in variables.iter().enumerate() {
            let cell = cells
                .iter()
                .find(|(ck, cv, _)| *ck == k && *cv == v)
                .map(|(_, _, value)| value.clone())
                .ok_or_else(|| DashboardError::Pivot {
                    table: table.name().to_string(),
                    reason: format!("missing cell for variable {} in group {}", var, k),
                })?;
            row.push(cell);
        }
        out.push_row(row)?;
    }

    Ok(out)
}
