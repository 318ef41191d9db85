//! Dataset registry: the fixed survey tables, built once and shared read-only.

use crate::data::value::{Column, Table};
use crate::error::{DashboardError, Result};
use std::collections::BTreeMap;

pub const DEMOGRAPHICS: &str = "demographics";
pub const SKILLS: &str = "skills";
pub const INCOME: &str = "income";
pub const MIGRATION: &str = "migration";
pub const ASSETS: &str = "assets";

/// Immutable name -> table mapping. There is no insert after construction.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: BTreeMap<String, Table>,
}

impl Registry {
    /// Build the registry from an explicit table list. Names must be unique.
    pub fn from_tables(tables: Vec<Table>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for t in tables {
            let name = t.name().to_string();
            if map.insert(name.clone(), t).is_some() {
                return Err(DashboardError::DuplicateDataset(name));
            }
        }
        Ok(Self { tables: map })
    }

    /// The labour survey sample tables.
    pub fn builtin() -> Result<Self> {
        Self::from_tables(vec![
            Table::from_columns(
                DEMOGRAPHICS,
                vec![
                    Column::texts("Age Group", &["18-25", "26-35", "36-45", "46-60", "60+"]),
                    Column::ints("Male", &[120, 150, 100, 70, 30]),
                    Column::ints("Female", &[80, 90, 60, 40, 20]),
                    Column::ints("Married", &[100, 130, 120, 100, 50]),
                ],
            )?,
            Table::from_columns(
                SKILLS,
                vec![
                    Column::texts(
                        "Skill",
                        &["Mason", "Electrician", "Painter", "Welder", "Unskilled"],
                    ),
                    Column::ints("Count", &[45, 30, 25, 20, 80]),
                    Column::ints("Formal Training", &[10, 15, 5, 8, 0]),
                    Column::ints("Informal Training", &[35, 15, 20, 12, 80]),
                ],
            )?,
            Table::from_columns(
                INCOME,
                vec![
                    Column::texts("Bracket", &["<₹200", "₹200-400", "₹400-600", "₹600+"]),
                    Column::ints("Count", &[25, 40, 20, 15]),
                ],
            )?,
            Table::from_columns(
                MIGRATION,
                vec![
                    Column::texts("City", &["Delhi", "Mumbai", "Bangalore", "Hyderabad"]),
                    Column::ints("Willing", &[70, 50, 30, 20]),
                    Column::ints("Capable", &[60, 35, 25, 15]),
                ],
            )?,
            Table::from_columns(
                ASSETS,
                vec![
                    Column::texts("Category", &["Productive", "Household", "Liquid", "Debt"]),
                    Column::ints("Value", &[40, 70, 20, 50]),
                ],
            )?,
        ])
    }

    pub fn get(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
