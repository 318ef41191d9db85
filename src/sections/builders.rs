//! One builder per section. Each pulls registry tables or literal series,
//! shapes them with the transform library and emits validated chart specs.
//!
//! Literal numbers that are not in the registry (scatter incomes, the debt
//! gauge, radar scores, ...) are fixed illustrative survey figures and are
//! kept as literals.

use super::{Route, Section};
use crate::data::registry::{ASSETS, DEMOGRAPHICS, MIGRATION, SKILLS};
use crate::data::{Column, Registry, RowRef, Table, Value};
use crate::error::{DashboardError, Result};
use crate::model::{BindingSet, Channel, ChartKind, ChartSpec};
use crate::transform::{
    LongNames, aggregate_sum, derive_column, rename_columns, reshape_long, zip_literal,
};
use serde_json::json;

/// Section -> builder, in sidebar order.
pub const ROUTES: [Route; 9] = [
    Route {
        section: Section::Demographics,
        build: demographics,
    },
    Route {
        section: Section::Skills,
        build: skills,
    },
    Route {
        section: Section::Reskilling,
        build: reskilling,
    },
    Route {
        section: Section::Migration,
        build: migration,
    },
    Route {
        section: Section::Schemes,
        build: schemes,
    },
    Route {
        section: Section::Facilities,
        build: facilities,
    },
    Route {
        section: Section::Income,
        build: income,
    },
    Route {
        section: Section::Assets,
        build: assets,
    },
    Route {
        section: Section::Vulnerability,
        build: vulnerability,
    },
];

pub fn demographics(reg: &Registry) -> Result<Vec<ChartSpec>> {
    let by_age = reshape_long(
        reg.get(DEMOGRAPHICS)?,
        &["Age Group"],
        &["Male", "Female", "Married"],
        &LongNames::new("Category", "Count"),
    )?;

    let education = zip_literal(
        "education",
        Column::texts("Education", &["None", "Primary", "Secondary", "Graduate"]),
        vec![Column::ints("Count", &[30, 70, 50, 20])],
    )?;
    let caste = zip_literal(
        "caste",
        Column::texts("Caste", &["SC", "ST", "OBC", "General"]),
        vec![Column::ints("Count", &[40, 20, 70, 40])],
    )?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Bar, Section::Demographics.heading(), by_age)
            .bind(Channel::X, "Age Group")
            .bind(Channel::Y, "Count")
            .bind(Channel::Color, "Category")
            .option("barmode", "group")
            .build()?,
        ChartSpec::builder(ChartKind::Pie, "Education", education)
            .caption("Education & Caste Distribution")
            .bind(Channel::Names, "Education")
            .bind(Channel::Values, "Count")
            .build()?,
        ChartSpec::builder(ChartKind::Pie, "Caste", caste)
            .bind(Channel::Names, "Caste")
            .bind(Channel::Values, "Count")
            .build()?,
    ])
}

pub fn skills(reg: &Registry) -> Result<Vec<ChartSpec>> {
    let skills = reg.get(SKILLS)?;

    // One row of totals, relabelled and turned into (Type, Total) rows.
    let totals = aggregate_sum(skills, &[], &["Formal Training", "Informal Training"])?;
    let totals = rename_columns(
        &totals,
        &[("Formal Training", "Formal"), ("Informal Training", "Informal")],
    )?;
    let training = reshape_long(&totals, &[], &[], &LongNames::new("Type", "Total"))?;

    let skill_names = skills
        .column_values("Skill")?
        .into_iter()
        .cloned()
        .collect();
    let income = zip_literal(
        "skill_income",
        Column::new("Skill", skill_names),
        vec![Column::ints("Income", &[500, 600, 550, 650, 300])],
    )?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Treemap, Section::Skills.heading(), skills.clone())
            .bind(Channel::Path, "Skill")
            .bind(Channel::Values, "Count")
            .build()?,
        ChartSpec::builder(ChartKind::Bar, "Training Type", training)
            .bind(Channel::X, "Type")
            .bind(Channel::Y, "Total")
            .build()?,
        ChartSpec::builder(ChartKind::Scatter, "Skill vs Income", income)
            .caption("Skill vs Income")
            .bind(Channel::X, "Skill")
            .bind(Channel::Y, "Income")
            .build()?,
    ])
}

pub fn reskilling(_reg: &Registry) -> Result<Vec<ChartSpec>> {
    let interest = zip_literal(
        "reskill_interest",
        Column::texts("Domain", &["Electrician", "Driving", "Tailoring", "Plumbing"]),
        vec![Column::ints("Interest", &[40, 30, 20, 10])],
    )?;
    let barriers = zip_literal(
        "reskill_barriers",
        Column::texts("Barrier", &["Cost", "Time", "Family Duties", "Access"]),
        vec![Column::ints("Value", &[30, 20, 25, 15])],
    )?;
    let by_age = zip_literal(
        "reskill_by_age",
        Column::ints("Age", &[20, 30, 40, 50]),
        vec![Column::ints("Interest", &[90, 60, 40, 20])],
    )?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Bar, "Reskilling Interest", interest)
            .bind(Channel::X, "Domain")
            .bind(Channel::Y, "Interest")
            .build()?,
        radar("Barriers to Reskilling", barriers, "Value", "Barrier", None)?,
        ChartSpec::builder(ChartKind::Line, "Age vs Reskilling Interest", by_age)
            .bind(Channel::X, "Age")
            .bind(Channel::Y, "Interest")
            .build()?,
    ])
}

const FLOW_NODES: [&str; 4] = ["Low Income", "Lack of Work", "Better Wages", "Urban Services"];

pub fn migration(reg: &Registry) -> Result<Vec<ChartSpec>> {
    let flows = flow_edges("push_pull", &FLOW_NODES, &[(0, 2, 60), (1, 3, 40)])?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Bar, "Willing vs Capable", reg.get(MIGRATION)?.clone())
            .bind(Channel::X, "City")
            .bind_many(Channel::Y, &["Willing", "Capable"])
            .option("barmode", "group")
            .build()?,
        ChartSpec::builder(ChartKind::Sankey, "Migration Push/Pull Factors", flows)
            .caption("Push/Pull Factors")
            .bind(Channel::Source, "Source")
            .bind(Channel::Target, "Target")
            .bind(Channel::Value, "Value")
            .option("nodes", json!(FLOW_NODES))
            .build()?,
    ])
}

pub fn schemes(_reg: &Registry) -> Result<Vec<ChartSpec>> {
    let awareness = zip_literal(
        "schemes",
        Column::texts(
            "Scheme",
            &["PM-SYM", "PMRPY", "Ayushman Bharat", "Old Age Pension"],
        ),
        vec![
            Column::ints("Aware", &[60, 40, 55, 35]),
            Column::ints("Enrolled", &[30, 20, 25, 15]),
            Column::ints("Accessed", &[15, 10, 20, 5]),
        ],
    )?;
    let awareness = reshape_long(&awareness, &["Scheme"], &[], &LongNames::default())?;

    let valued = zip_literal(
        "valued_schemes",
        Column::texts("Scheme", &["Ayushman", "PM-SYM", "Pension"]),
        vec![Column::ints("Votes", &[30, 25, 20])],
    )?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Bar, Section::Schemes.heading(), awareness)
            .bind(Channel::X, "Scheme")
            .bind(Channel::Y, "value")
            .bind(Channel::Color, "variable")
            .option("barmode", "group")
            .build()?,
        ChartSpec::builder(ChartKind::Bar, "Most Valued Schemes", valued)
            .caption("Most Valued Schemes")
            .bind(Channel::X, "Scheme")
            .bind(Channel::Y, "Votes")
            .build()?,
    ])
}

pub fn facilities(_reg: &Registry) -> Result<Vec<ChartSpec>> {
    let availability = zip_literal(
        "facilities",
        Column::texts(
            "Facility",
            &["Toilets", "Water", "Shelter", "Medical", "Security"],
        ),
        vec![Column::ints("Availability (%)", &[60, 75, 30, 45, 50])],
    )?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Bar, "Civic Facilities", availability)
            .bind(Channel::X, "Facility")
            .bind(Channel::Y, "Availability (%)")
            .build()?,
    ])
}

pub fn income(_reg: &Registry) -> Result<Vec<ChartSpec>> {
    let by_source = zip_literal(
        "income_by_source",
        Column::texts("Source", &["Wages", "Agriculture", "Self-business"]),
        vec![Column::ints("Monthly", &[8500, 4500, 7000])],
    )?;
    let productivity = zip_literal(
        "productivity",
        Column::texts("Skill", &["Mason", "Electrician", "Painter"]),
        vec![Column::ints("Productivity Score", &[70, 80, 65])],
    )?;
    let mix = zip_literal(
        "income_mix",
        Column::texts("Source", &["Wages", "Wages+Agri", "Wages+Biz"]),
        vec![Column::ints("Monthly", &[8500, 9500, 10000])],
    )?;
    let mix = derive_column(&mix, "Diversity Score", diversity_score)?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Bar, "Income by Source", by_source)
            .bind(Channel::X, "Source")
            .bind(Channel::Y, "Monthly")
            .build()?,
        ChartSpec::builder(ChartKind::Bar, "Productivity by Skill", productivity)
            .bind(Channel::X, "Skill")
            .bind(Channel::Y, "Productivity Score")
            .build()?,
        ChartSpec::builder(ChartKind::BarLineOverlay, "Income vs Diversification", mix)
            .series(
                BindingSet::new("bar")
                    .bind(Channel::X, "Source")
                    .bind(Channel::Y, "Monthly"),
            )
            .series(
                BindingSet::new("line")
                    .bind(Channel::X, "Source")
                    .bind(Channel::Y, "Diversity Score")
                    .option("mode", "lines+markers")
                    .option("name", "Diversity"),
            )
            .build()?,
    ])
}

pub fn assets(reg: &Registry) -> Result<Vec<ChartSpec>> {
    let liabilities = zip_literal(
        "liabilities",
        Column::texts("Type", &["Health", "Education", "Housing", "Social"]),
        vec![Column::ints("Count", &[20, 15, 30, 10])],
    )?;
    let debt = zip_literal(
        "households_with_debt",
        Column::texts("Indicator", &["% Households with Debt"]),
        vec![Column::ints("Value", &[65])],
    )?;

    Ok(vec![
        ChartSpec::builder(ChartKind::Treemap, "Assets Overview", reg.get(ASSETS)?.clone())
            .bind(Channel::Path, "Category")
            .bind(Channel::Values, "Value")
            .build()?,
        ChartSpec::builder(ChartKind::Bar, "Liability Reasons", liabilities)
            .caption("Liabilities")
            .bind(Channel::X, "Type")
            .bind(Channel::Y, "Count")
            .build()?,
        ChartSpec::builder(ChartKind::Gauge, "% Households with Debt", debt)
            .bind(Channel::Value, "Value")
            .option("mode", "gauge+number")
            .option("range", json!([0, 100]))
            .build()?,
    ])
}

pub fn vulnerability(_reg: &Registry) -> Result<Vec<ChartSpec>> {
    let scores = zip_literal(
        "vulnerability",
        Column::texts(
            "Dimension",
            &["Skill", "Assets", "Income", "Migration", "Schemes"],
        ),
        vec![Column::ints("Score", &[65, 70, 55, 60, 50])],
    )?;

    Ok(vec![radar(
        Section::Vulnerability.heading(),
        scores,
        "Score",
        "Dimension",
        Some([0, 100]),
    )?])
}

/// Closed, filled polar chart without legend.
fn radar(
    title: &str,
    data: Table,
    r: &str,
    theta: &str,
    range: Option<[i64; 2]>,
) -> Result<ChartSpec> {
    let mut axis = json!({ "visible": true });
    if let Some(range) = range {
        axis["range"] = json!(range);
    }
    ChartSpec::builder(ChartKind::PolarRadar, title, data)
        .bind(Channel::R, r)
        .bind(Channel::Theta, theta)
        .option("fill", "toself")
        .option("closed", true)
        .option("showlegend", false)
        .option("radialaxis", axis)
        .build()
}

/// Edge table for a flow diagram; edges reference `nodes` by index.
fn flow_edges(name: &str, nodes: &[&str], edges: &[(usize, usize, i64)]) -> Result<Table> {
    let label = |i: usize| {
        nodes
            .get(i)
            .map(|n| Value::from(*n))
            .ok_or_else(|| DashboardError::LengthMismatch {
                context: format!("node index {} in {}", i, name),
                expected: nodes.len(),
                actual: i + 1,
            })
    };

    let mut table = Table::new(
        name,
        vec!["Source".to_string(), "Target".to_string(), "Value".to_string()],
    )?;
    for &(src, dst, value) in edges {
        table.push_row(vec![label(src)?, label(dst)?, Value::Int(value)])?;
    }
    Ok(table)
}

/// Number of '+'-joined income sources ("Wages+Agri" -> 2).
fn diversity_score(row: RowRef<'_>) -> Result<Value> {
    let source = row.require("Source")?;
    let text = source
        .as_text()
        .ok_or_else(|| DashboardError::TypeMismatch {
            table: "income_mix".to_string(),
            column: "Source".to_string(),
            reason: "diversity score needs a text source",
        })?;
    Ok(Value::Int(text.split('+').count() as i64))
}
