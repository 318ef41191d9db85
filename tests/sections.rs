use labour_adda_dashboard::model::PRIMARY;
use labour_adda_dashboard::{Channel, ChartKind, DashboardError, Router, Section, Value};
use pretty_assertions::assert_eq;
use serde_json::json;

fn router() -> Router {
    Router::builtin().expect("builtin registry")
}

#[test]
fn every_section_routes_to_resolvable_charts() {
    let router = router();
    for section in Section::ALL {
        let charts = router.route(section.name()).unwrap();
        assert!(!charts.is_empty(), "{} has no charts", section);
        for chart in &charts {
            assert!(!chart.bindings().is_empty(), "{} in {}", chart.title(), section);
            for set in chart.bindings() {
                for columns in set.channels.values() {
                    for column in columns {
                        assert!(
                            chart.data().has_column(column),
                            "{} / {} binds missing {}",
                            section,
                            chart.title(),
                            column
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn unknown_section_fails() {
    match router().route("unknown") {
        Err(DashboardError::UnknownSection(name)) => assert_eq!(name, "unknown"),
        other => panic!("expected UnknownSection, got {:?}", other),
    }
}

#[test]
fn routing_is_deterministic() {
    let router = router();
    for section in Section::ALL {
        assert_eq!(
            router.route(section.name()).unwrap(),
            router.route(section.name()).unwrap()
        );
    }
}

#[test]
fn chart_kinds_per_section() {
    let router = router();
    let kinds = |name: &str| -> Vec<ChartKind> {
        router
            .route(name)
            .unwrap()
            .iter()
            .map(|c| c.kind())
            .collect()
    };

    use ChartKind::*;
    assert_eq!(kinds("demographics"), vec![Bar, Pie, Pie]);
    assert_eq!(kinds("skills"), vec![Treemap, Bar, Scatter]);
    assert_eq!(kinds("reskilling"), vec![Bar, PolarRadar, Line]);
    assert_eq!(kinds("migration"), vec![Bar, Sankey]);
    assert_eq!(kinds("schemes"), vec![Bar, Bar]);
    assert_eq!(kinds("facilities"), vec![Bar]);
    assert_eq!(kinds("income"), vec![Bar, Bar, BarLineOverlay]);
    assert_eq!(kinds("assets"), vec![Treemap, Bar, Gauge]);
    assert_eq!(kinds("vulnerability"), vec![PolarRadar]);
}

#[test]
fn demographics_grouped_bar() {
    let charts = router().route("demographics").unwrap();
    let first = &charts[0];
    let main = first.binding_set(PRIMARY).unwrap();

    assert_eq!(main.column(Channel::X), Some("Age Group"));
    assert_eq!(main.column(Channel::Color), Some("Category"));
    assert_eq!(main.column(Channel::Y), Some("Count"));
    assert_eq!(first.data().len(), 15);
    assert_eq!(first.option("barmode"), Some(&json!("group")));
    assert_eq!(charts[1].caption(), Some("Education & Caste Distribution"));
}

#[test]
fn income_overlay_has_two_series_over_one_table() {
    let charts = router().route("income").unwrap();
    let overlay = &charts[2];
    assert_eq!(overlay.kind(), ChartKind::BarLineOverlay);
    assert_eq!(overlay.data().len(), 3);
    assert_eq!(overlay.bindings().len(), 2);

    let bar = overlay.binding_set("bar").unwrap();
    let line = overlay.binding_set("line").unwrap();
    assert_eq!(bar.column(Channel::Y), Some("Monthly"));
    assert_eq!(line.column(Channel::Y), Some("Diversity Score"));
    assert_eq!(bar.column(Channel::X), Some("Source"));
    assert_eq!(line.column(Channel::X), Some("Source"));
}

#[test]
fn assets_gauge_is_literal() {
    let charts = router().route("assets").unwrap();
    let gauge = charts
        .iter()
        .find(|c| c.kind() == ChartKind::Gauge)
        .expect("gauge chart");

    assert_eq!(gauge.option("range"), Some(&json!([0, 100])));
    let column = gauge.bindings()[0].column(Channel::Value).unwrap();
    assert_eq!(gauge.data().value(0, column).and_then(Value::as_i64), Some(65));
}

#[test]
fn gauge_does_not_depend_on_registry() {
    use labour_adda_dashboard::{Column, Registry, Table};

    // Same table names, different numbers: the gauge must not move.
    let assets = Table::from_columns(
        "assets",
        vec![
            Column::texts("Category", &["Debt"]),
            Column::ints("Value", &[99]),
        ],
    )
    .unwrap();
    let router = Router::new(Registry::from_tables(vec![assets]).unwrap());
    let charts = router.route("assets").unwrap();
    assert_eq!(charts[2].data().value(0, "Value"), Some(&Value::Int(65)));
}

#[test]
fn every_chart_has_a_title() {
    let dash = router().dashboard().unwrap();
    for section in &dash.sections {
        for chart in &section.charts {
            assert!(!chart.title().is_empty());
        }
    }
    assert_eq!(dash.sections[8].charts[0].title(), "Livelihood Vulnerability Scoreboard");
}

#[test]
fn concurrent_routing_matches_serial() {
    let router = router();
    let serial: Vec<_> = Section::ALL
        .iter()
        .map(|s| router.route(s.name()).unwrap())
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = Section::ALL
            .into_iter()
            .map(|s| {
                let router = &router;
                scope.spawn(move || router.route(s.name()).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}
