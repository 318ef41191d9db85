//! View model handed to the rendering collaborator: chart specs grouped into
//! sections, and sections grouped into the dashboard.

pub mod chart;

pub use chart::{BindingSet, Channel, ChartBuilder, ChartKind, ChartSpec, Options, PRIMARY};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    /// Canonical section name ("skills").
    pub name: String,
    /// Sidebar label ("Skill Mapping").
    pub label: String,
    /// Page heading ("Current Skill Mapping").
    pub heading: String,
    pub charts: Vec<ChartSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    /// Sidebar order.
    pub sections: Vec<SectionView>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub sections: usize,
    pub charts: usize,
    pub datasets: usize,
}
