//! Chart spec: a renderer-independent description of one visualization.
//!
//! A spec owns its data table and one or more named binding sets. Binding
//! sets map visual channels to columns of that table; an overlay chart
//! carries one set per drawn series over the same data.

use crate::data::Table;
use crate::error::{DashboardError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Free-form rendering flags (bar mode, axis ranges, fill, ...).
pub type Options = BTreeMap<String, serde_json::Value>;

/// Name of the binding set a single-series chart uses.
pub const PRIMARY: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Scatter,
    Treemap,
    PolarRadar,
    Sankey,
    Gauge,
    #[serde(rename = "bar+line-overlay")]
    BarLineOverlay,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Treemap => "treemap",
            ChartKind::PolarRadar => "polar-radar",
            ChartKind::Sankey => "sankey",
            ChartKind::Gauge => "gauge",
            ChartKind::BarLineOverlay => "bar+line-overlay",
        }
    }

    /// How many binding sets a spec of this kind carries.
    fn binding_sets(&self) -> usize {
        match self {
            ChartKind::BarLineOverlay => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual channel a column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    Color,
    R,
    Theta,
    Names,
    Values,
    Path,
    Source,
    Target,
    Value,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::Color => "color",
            Channel::R => "r",
            Channel::Theta => "theta",
            Channel::Names => "names",
            Channel::Values => "values",
            Channel::Path => "path",
            Channel::Source => "source",
            Channel::Target => "target",
            Channel::Value => "value",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named series: channel -> column(s), plus per-series flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingSet {
    pub name: String,
    pub channels: BTreeMap<Channel, Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: Options,
}

impl BindingSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: BTreeMap::new(),
            options: Options::new(),
        }
    }

    pub fn bind(mut self, channel: Channel, column: impl Into<String>) -> Self {
        self.channels
            .entry(channel)
            .or_default()
            .push(column.into());
        self
    }

    pub fn bind_many(mut self, channel: Channel, columns: &[&str]) -> Self {
        self.channels
            .entry(channel)
            .or_default()
            .extend(columns.iter().map(|c| c.to_string()));
        self
    }

    pub fn option(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    pub fn columns(&self, channel: Channel) -> Option<&[String]> {
        self.channels.get(&channel).map(Vec::as_slice)
    }

    /// First column bound to `channel`.
    pub fn column(&self, channel: Channel) -> Option<&str> {
        self.columns(channel)
            .and_then(|cols| cols.first())
            .map(String::as_str)
    }
}

/// A validated chart description. Only [`ChartBuilder::build`] produces one,
/// and it is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    kind: ChartKind,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    data: Table,
    bindings: Vec<BindingSet>,
    options: Options,
}

impl ChartSpec {
    pub fn builder(kind: ChartKind, title: impl Into<String>, data: Table) -> ChartBuilder {
        ChartBuilder {
            spec: ChartSpec {
                kind,
                title: title.into(),
                caption: None,
                data,
                bindings: Vec::new(),
                options: Options::new(),
            },
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn data(&self) -> &Table {
        &self.data
    }

    pub fn bindings(&self) -> &[BindingSet] {
        &self.bindings
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn binding_set(&self, name: &str) -> Option<&BindingSet> {
        self.bindings.iter().find(|b| b.name == name)
    }

    pub fn option(&self, key: &str) -> Option<&serde_json::Value> {
        self.options.get(key)
    }

    /// Check structure and that every bound column exists in `data`.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| DashboardError::InvalidChart {
            chart: self.title.clone(),
            reason,
        };

        if self.title.trim().is_empty() {
            return Err(invalid("empty title".to_string()));
        }
        if self.bindings.len() != self.kind.binding_sets() {
            return Err(invalid(format!(
                "{} expects {} binding set(s), found {}",
                self.kind,
                self.kind.binding_sets(),
                self.bindings.len()
            )));
        }

        for set in &self.bindings {
            if set.channels.is_empty() {
                return Err(invalid(format!("binding set {} binds no channel", set.name)));
            }
            if self.bindings.iter().filter(|b| b.name == set.name).count() > 1 {
                return Err(invalid(format!("binding set {} declared twice", set.name)));
            }
            for (channel, columns) in &set.channels {
                for column in columns {
                    if !self.data.has_column(column) {
                        return Err(DashboardError::Binding {
                            chart: self.title.clone(),
                            channel: *channel,
                            column: column.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Accumulates bindings and options; `build` validates before handing out
/// the spec, so callers never hold a malformed one.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    spec: ChartSpec,
}

impl ChartBuilder {
    /// Bind on the primary set, creating it on first use.
    pub fn bind(mut self, channel: Channel, column: impl Into<String>) -> Self {
        let set = self.take_primary().bind(channel, column);
        self.spec.bindings.insert(0, set);
        self
    }

    pub fn bind_many(mut self, channel: Channel, columns: &[&str]) -> Self {
        let set = self.take_primary().bind_many(channel, columns);
        self.spec.bindings.insert(0, set);
        self
    }

    /// Add a named series (overlay charts).
    pub fn series(mut self, set: BindingSet) -> Self {
        self.spec.bindings.push(set);
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.spec.caption = Some(caption.into());
        self
    }

    pub fn option(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.spec.options.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Result<ChartSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }

    fn take_primary(&mut self) -> BindingSet {
        match self.spec.bindings.first() {
            Some(b) if b.name == PRIMARY => self.spec.bindings.remove(0),
            _ => BindingSet::new(PRIMARY),
        }
    }
}
