//! Grouped summation.

use crate::data::{Table, Value};
use crate::error::{DashboardError, Result};

/// Sum `value_columns` per distinct `group_by` combination.
///
/// Groups keep their order of first appearance. With no `group_by` columns
/// the whole table is one group and the result has a single row. Sums keep
/// the input's numeric kind: integer columns sum to integers, float columns
/// to floats; text or mixed columns are rejected.
///
/// `group_by` columns play the category role and pass through as the key;
/// `value_columns` play the value role and are summed. The output has no
/// series column; reshape it with [`reshape_long`](super::reshape_long) for
/// that.
pub fn aggregate_sum(table: &Table, group_by: &[&str], value_columns: &[&str]) -> Result<Table> {
    if table.is_empty() {
        return Err(DashboardError::EmptyInput {
            operation: "aggregate_sum",
            table: table.name().to_string(),
        });
    }

    let group_idx = group_by
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<Vec<_>>>()?;
    let value_idx = value_columns
        .iter()
        .map(|c| table.require_column(c))
        .collect::<Result<Vec<_>>>()?;

    // Validate kinds up front so no partial sum is ever produced.
    let mut kinds: Vec<NumKind> = Vec::with_capacity(value_idx.len());
    for (name, &vi) in value_columns.iter().zip(&value_idx) {
        kinds.push(column_kind(table, name, vi)?);
    }

    let mut keys: Vec<Vec<Value>> = Vec::new();
    let mut sums: Vec<Vec<Value>> = Vec::new();

    for row in table.rows() {
        let key: Vec<Value> = group_idx.iter().map(|&i| row[i].clone()).collect();
        let g = match keys.iter().position(|k| *k == key) {
            Some(g) => g,
            None => {
                keys.push(key);
                sums.push(kinds.iter().map(NumKind::zero).collect());
                keys.len() - 1
            }
        };

        for (slot, (&vi, name)) in value_idx.iter().zip(value_columns).enumerate() {
            let acc = &mut sums[g][slot];
            *acc = add(acc, &row[vi]).ok_or_else(|| DashboardError::Overflow {
                table: table.name().to_string(),
                column: name.to_string(),
            })?;
        }
    }

    let mut header: Vec<String> = group_by.iter().map(|c| c.to_string()).collect();
    header.extend(value_columns.iter().map(|c| c.to_string()));
    let mut out = Table::new(format!("{}_sum", table.name()), header)?;

    for (key, totals) in keys.into_iter().zip(sums) {
        let mut row = key;
        row.extend(totals);
        out.push_row(row)?;
    }

    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumKind {
    Int,
    Float,
}

impl NumKind {
    fn zero(&self) -> Value {
        match self {
            NumKind::Int => Value::Int(0),
            NumKind::Float => Value::Float(0.0),
        }
    }
}

fn column_kind(table: &Table, column: &str, idx: usize) -> Result<NumKind> {
    let mismatch = |reason| DashboardError::TypeMismatch {
        table: table.name().to_string(),
        column: column.to_string(),
        reason,
    };

    let mut kind = None;
    for row in table.rows() {
        let this = match &row[idx] {
            Value::Int(_) => NumKind::Int,
            Value::Float(_) => NumKind::Float,
            Value::Text(_) => return Err(mismatch("text columns cannot be summed")),
        };
        match kind {
            None => kind = Some(this),
            Some(k) if k != this => {
                return Err(mismatch("mixes integer and float values"));
            }
            Some(_) => {}
        }
    }
    // Non-empty table, so every column yielded a kind.
    kind.ok_or_else(|| mismatch("no values"))
}

fn add(acc: &Value, v: &Value) -> Option<Value> {
    match (acc, v) {
        (Value::Int(a), Value::Int(b)) => a.checked_add(*b).map(Value::Int),
        (Value::Float(a), Value::Float(b)) => Some(Value::Float(a + b)),
        _ => None,
    }
}
