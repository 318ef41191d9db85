//! Data layer: cell values, tables and the fixed dataset registry.

pub mod registry;
pub mod value;

pub use registry::Registry;
pub use value::{Column, RowRef, Table, Value};
