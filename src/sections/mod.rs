//! Section routing: a closed set of dashboard sections, each mapped through a
//! static table to the builder that produces its charts.

pub mod builders;

use crate::data::Registry;
use crate::error::{DashboardError, Result};
use crate::model::{ChartSpec, DashboardView, SectionView, TotalsView};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

pub const DASHBOARD_TITLE: &str = "Labour Adda Unified Dashboard - Uttar Pradesh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Demographics,
    Skills,
    Reskilling,
    Migration,
    Schemes,
    Facilities,
    Income,
    Assets,
    Vulnerability,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 9] = [
        Section::Demographics,
        Section::Skills,
        Section::Reskilling,
        Section::Migration,
        Section::Schemes,
        Section::Facilities,
        Section::Income,
        Section::Assets,
        Section::Vulnerability,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Demographics => "demographics",
            Section::Skills => "skills",
            Section::Reskilling => "reskilling",
            Section::Migration => "migration",
            Section::Schemes => "schemes",
            Section::Facilities => "facilities",
            Section::Income => "income",
            Section::Assets => "assets",
            Section::Vulnerability => "vulnerability",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Demographics => "Demographics",
            Section::Skills => "Skill Mapping",
            Section::Reskilling => "Reskilling",
            Section::Migration => "Migration",
            Section::Schemes => "Scheme Awareness",
            Section::Facilities => "Facilities",
            Section::Income => "Income & Productivity",
            Section::Assets => "Assets & Liabilities",
            Section::Vulnerability => "Vulnerability Score",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Section::Demographics => "Demographic Snapshot",
            Section::Skills => "Current Skill Mapping",
            Section::Reskilling => "Reskilling Opportunities",
            Section::Migration => "Migration Readiness & Aspiration",
            Section::Schemes => "Government Schemes Awareness",
            Section::Facilities => "Facilities at Labour Addas",
            Section::Income => "Income & Productivity",
            Section::Assets => "Assets & Liabilities Overview",
            Section::Vulnerability => "Livelihood Vulnerability Scoreboard",
        }
    }

    /// Exact canonical name lookup.
    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Lenient lookup for user input: accepts the canonical name or the
    /// sidebar label, ignoring case, spacing and punctuation.
    pub fn resolve(input: &str) -> Result<Section> {
        let re = Regex::new(r"[^a-z0-9]+")?;
        let wanted = slug(&re, input);
        Section::ALL
            .into_iter()
            .find(|s| wanted == s.name() || wanted == slug(&re, s.label()))
            .ok_or_else(|| DashboardError::UnknownSection(input.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// "Income & Productivity" -> "income-productivity", with `re` matching
/// runs of characters outside `[a-z0-9]`.
fn slug(re: &Regex, s: &str) -> String {
    let lower = s.to_lowercase();
    re.replace_all(&lower, "-").trim_matches('-').to_string()
}

/// Builds the charts of one section from the registry.
pub type Builder = fn(&Registry) -> Result<Vec<ChartSpec>>;

/// Entry of the static section table.
#[derive(Clone, Copy)]
pub struct Route {
    pub section: Section,
    pub build: Builder,
}

/// Owns the registry and dispatches section names to their builders.
///
/// Holds no mutable state, so one router can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Router {
    registry: Registry,
    routes: BTreeMap<&'static str, Route>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("section", &self.section).finish()
    }
}

impl Router {
    pub fn new(registry: Registry) -> Self {
        let routes = builders::ROUTES
            .iter()
            .map(|r| (r.section.name(), *r))
            .collect();
        Self { registry, routes }
    }

    /// Router over the built-in survey tables.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Registry::builtin()?))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Charts for the section with canonical `name`, in display order.
    pub fn route(&self, name: &str) -> Result<Vec<ChartSpec>> {
        let route = self
            .routes
            .get(name)
            .ok_or_else(|| DashboardError::UnknownSection(name.to_string()))?;
        let charts = (route.build)(&self.registry)?;
        if charts.is_empty() {
            return Err(DashboardError::InvalidChart {
                chart: name.to_string(),
                reason: "section produced no charts".to_string(),
            });
        }
        Ok(charts)
    }

    pub fn view(&self, section: Section) -> Result<SectionView> {
        Ok(SectionView {
            name: section.name().to_string(),
            label: section.label().to_string(),
            heading: section.heading().to_string(),
            charts: self.route(section.name())?,
        })
    }

    /// Every section, in sidebar order.
    pub fn dashboard(&self) -> Result<DashboardView> {
        let sections = Section::ALL
            .into_iter()
            .map(|s| self.view(s))
            .collect::<Result<Vec<_>>>()?;
        let charts = sections.iter().map(|s| s.charts.len()).sum();
        Ok(DashboardView {
            title: DASHBOARD_TITLE.to_string(),
            totals: TotalsView {
                sections: sections.len(),
                charts,
                datasets: self.registry.len(),
            },
            sections,
        })
    }
}
