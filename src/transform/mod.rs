//! Pure table transforms. Inputs are never modified; each call returns a
//! fresh table owned by the caller.

pub mod aggregate;
pub mod columns;
pub mod reshape;

pub use aggregate::aggregate_sum;
pub use columns::{derive_column, rename_columns, zip_literal};
pub use reshape::{LongNames, pivot_wide, reshape_long};
