pub mod catalog;
pub mod config;
pub mod icons;
pub mod ir;
pub mod layout;
pub mod listing;
pub mod loader;
pub mod measure;
pub mod model;
pub mod relations;
pub mod routing;
pub mod svg;

use wasm_bindgen::prelude::*;

use config::DiagramConfig;
use ir::GraphIR;
use layout::LayoutEngine;
use listing::RelationshipListing;
use model::DatasetDetail;
use svg::SvgRenderer;

/// An ER diagram plus the counts shown next to it.
#[derive(Debug, Clone)]
pub struct RenderedDiagram {
    pub svg: String,
    pub table_count: usize,
    pub relationship_count: usize,
}

/// Lay out and render a dataset's tables as an SVG ER diagram.
pub fn render_diagram(dataset: &DatasetDetail, config: &DiagramConfig) -> RenderedDiagram {
    let ir = GraphIR::from_dataset(dataset, config);
    let layout = LayoutEngine::new(config.clone()).layout(&ir);
    let svg = SvgRenderer::default().render(&ir, layout.as_ref());

    RenderedDiagram {
        svg,
        table_count: ir.nodes.len(),
        relationship_count: layout.map_or(0, |l| l.edges.len()),
    }
}

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Render a dataset JSON document to SVG
#[wasm_bindgen(js_name = "datasetToSvg")]
pub fn dataset_to_svg(source: &str, config: Option<String>) -> Result<String, String> {
    let dataset: DatasetDetail = serde_json::from_str(source).map_err(|e| e.to_string())?;
    let config = match config.as_deref() {
        Some(json) => DiagramConfig::from_json(json).map_err(|e| e.to_string())?,
        None => DiagramConfig::default(),
    };

    Ok(render_diagram(&dataset, &config).svg)
}

/// List a dataset's relationships as `from.col → to.col` strings
#[wasm_bindgen(js_name = "datasetRelationships")]
pub fn dataset_relationships(source: &str) -> Result<js_sys::Array, JsValue> {
    let dataset: DatasetDetail =
        serde_json::from_str(source).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let listing = RelationshipListing::from_dataset(&dataset);

    Ok(listing
        .row_labels()
        .into_iter()
        .map(|label| JsValue::from_str(&label))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP: &str = r#"{
        "id": "shop",
        "tables": [
            { "name": "users", "sample_columns": ["id", "name"], "primary_key": "id" },
            { "name": "orders", "sample_columns": ["id", "user_id"],
              "foreign_keys": [
                  { "column": "user_id", "references": "users.id" },
                  { "column": "coupon_id", "references": "coupons.id" }
              ] }
        ]
    }"#;

    #[test]
    fn test_render_diagram_counts() {
        let dataset: DatasetDetail = serde_json::from_str(SHOP).unwrap();
        let rendered = render_diagram(&dataset, &DiagramConfig::default());

        assert_eq!(rendered.table_count, 2);
        // coupons is not part of the dataset
        assert_eq!(rendered.relationship_count, 1);
        assert!(rendered.svg.contains(">user_id</text>"));
        assert!(!rendered.svg.contains(">coupon_id</text>"));
    }

    #[test]
    fn test_diagram_and_listing_diverge_on_dangling() {
        let dataset: DatasetDetail = serde_json::from_str(SHOP).unwrap();
        let listing = RelationshipListing::from_dataset(&dataset);

        assert_eq!(listing.relationship_count, 2);
        assert_eq!(listing.row_labels()[1], "orders.coupon_id → coupons.id");
    }

    #[test]
    fn test_dataset_to_svg() {
        let svg = dataset_to_svg(SHOP, None).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_dataset_to_svg_with_config() {
        let svg = dataset_to_svg(SHOP, Some(r#"{ "marginX": 10 }"#.to_string())).unwrap();
        assert!(svg.contains(r#"<rect x="10" y="40""#));
    }

    #[test]
    fn test_dataset_to_svg_rejects_bad_json() {
        assert!(dataset_to_svg("{", None).is_err());
        assert!(dataset_to_svg(SHOP, Some("{ \"bogus\": 1 }".to_string())).is_err());
        assert!(dataset_to_svg("{}", None).is_err());
    }

    #[test]
    fn test_dataset_to_svg_rejects_overlapping_config() {
        let err = dataset_to_svg(SHOP, Some(r#"{ "tableWidth": 300 }"#.to_string())).unwrap_err();
        assert_eq!(err, "tableWidth 300 does not fit in cellWidth 220");
    }

    #[test]
    fn test_render_diagram_empty() {
        let rendered = render_diagram(&DatasetDetail::default(), &DiagramConfig::default());

        assert_eq!(rendered.table_count, 0);
        assert_eq!(rendered.relationship_count, 0);
        assert!(rendered.svg.contains(svg::EMPTY_STATE_MESSAGE));
    }
}
