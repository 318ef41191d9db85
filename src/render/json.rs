use crate::data::Table;
use crate::error::Result;
use crate::model::{DashboardView, SectionView};
use serde::Serialize;

/// Serialise a single section (heading plus its ordered chart specs).
pub fn render_section(view: &SectionView, pretty: bool) -> Result<String> {
    to_json(view, pretty)
}

/// Serialise the whole dashboard, sections in sidebar order.
pub fn render_dashboard(view: &DashboardView, pretty: bool) -> Result<String> {
    to_json(view, pretty)
}

pub fn render_table(table: &Table, pretty: bool) -> Result<String> {
    to_json(table, pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{Router, Section};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn section_document_shape() {
        let router = Router::builtin().unwrap();
        let view = router.view(Section::Assets).unwrap();
        let doc: Value = serde_json::from_str(&render_section(&view, false).unwrap()).unwrap();

        assert_eq!(doc["name"], json!("assets"));
        assert_eq!(doc["heading"], json!("Assets & Liabilities Overview"));
        assert_eq!(doc["charts"].as_array().unwrap().len(), 3);

        let gauge = &doc["charts"][2];
        assert_eq!(gauge["kind"], json!("gauge"));
        assert_eq!(gauge["options"]["range"], json!([0, 100]));
        assert_eq!(gauge["data"]["rows"], json!([["% Households with Debt", 65]]));
        assert_eq!(gauge["bindings"][0]["channels"]["value"], json!(["Value"]));
        assert_eq!(doc["charts"][1]["caption"], json!("Liabilities"));
    }

    #[test]
    fn pretty_and_compact_agree() {
        let dash = Router::builtin().unwrap().dashboard().unwrap();
        let compact: Value = serde_json::from_str(&render_dashboard(&dash, false).unwrap()).unwrap();
        let pretty = render_dashboard(&dash, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(compact, serde_json::from_str::<Value>(&pretty).unwrap());
        assert_eq!(compact["sections"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn table_document() {
        let router = Router::builtin().unwrap();
        let income = router.registry().get("income").unwrap();
        let doc: Value = serde_json::from_str(&render_table(income, false).unwrap()).unwrap();
        assert_eq!(doc["columns"], json!(["Bracket", "Count"]));
        assert_eq!(doc["rows"][0], json!(["<₹200", 25]));
    }
}
