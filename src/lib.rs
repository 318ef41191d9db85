//! Labour survey dashboard: fixed datasets, pure table transforms and the
//! section router that turns a section name into renderer-ready chart specs.

pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod sections;
pub mod transform;

pub use data::{Column, Registry, Table, Value};
pub use error::{DashboardError, Result};
pub use model::{BindingSet, Channel, ChartKind, ChartSpec, DashboardView, SectionView};
pub use sections::{Router, Section};
