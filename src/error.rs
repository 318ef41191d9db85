//! Error kinds raised while building datasets, transforms and chart specs.
//!
//! Every variant reflects a defect in the fixed dashboard definition rather
//! than a transient condition, so nothing here is retried.

use crate::model::Channel;
use thiserror::Error;

pub type Result<T, E = DashboardError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dataset not registered: {0}")]
    NotFound(String),

    #[error("dataset registered twice: {0}")]
    DuplicateDataset(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("{operation} needs at least one row in table {table}")]
    EmptyInput { operation: &'static str, table: String },

    #[error("length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("column {column} in table {table}: {reason}")]
    TypeMismatch {
        table: String,
        column: String,
        reason: &'static str,
    },

    #[error("column {column} already exists in table {table}")]
    ColumnExists { table: String, column: String },

    #[error("table {table} has no column {column}")]
    UnknownColumn { table: String, column: String },

    #[error("chart {chart:?} binds {channel} to missing column {column}")]
    Binding {
        chart: String,
        channel: Channel,
        column: String,
    },

    #[error("chart {chart:?} is malformed: {reason}")]
    InvalidChart { chart: String, reason: String },

    #[error("cannot pivot table {table}: {reason}")]
    Pivot { table: String, reason: String },

    #[error("integer overflow summing column {column} in table {table}")]
    Overflow { table: String, column: String },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
