use crate::ir::{ColumnMarker, Edge, GraphIR, Node};
use crate::layout::{Layout, LayoutEdge, LayoutNode};
use crate::measure::TextMetrics;
use crate::routing::path_data;
use std::collections::HashMap;
use std::fmt::Write;

pub const EMPTY_STATE_MESSAGE: &str = "No tables to display";

const HEADER_HEIGHT: f64 = 32.0;
const ROW_COUNT_HEIGHT: f64 = 20.0;
const COLUMN_ROW_HEIGHT: f64 = 16.0;
const CORNER_RADIUS: f64 = 8.0;

pub struct SvgRenderer {
    metrics: TextMetrics,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            metrics: TextMetrics::default(),
        }
    }
}

impl SvgRenderer {
    /// Render a laid out graph, or the empty state when there is no layout.
    pub fn render(&self, ir: &GraphIR, layout: Option<&Layout>) -> String {
        match layout {
            Some(layout) => self.render_layout(ir, layout),
            None => self.render_empty(),
        }
    }

    fn render_empty(&self) -> String {
        let width = 320.0;
        let height = 80.0;
        let mut svg = String::new();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"<text class="empty-state" x="{}" y="{}" text-anchor="middle" font-size="14" fill="#6b7280">{}</text>"##,
            width / 2.0,
            height / 2.0 + 5.0,
            EMPTY_STATE_MESSAGE
        )
        .unwrap();
        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_layout(&self, ir: &GraphIR, layout: &Layout) -> String {
        let mut svg = String::new();

        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            layout.width, layout.height, layout.width, layout.height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r#"<style>
  .table-name {{ font-family: sans-serif; font-size: 14px; font-weight: bold; fill: #fff; }}
  .row-count {{ font-family: sans-serif; font-size: 10px; fill: #6b7280; }}
  .column {{ font-family: monospace; font-size: 10px; fill: #374151; }}
  .column.pk {{ font-weight: bold; fill: #d97706; }}
  .column.time {{ fill: #2563eb; }}
  .more {{ font-family: sans-serif; font-size: 9px; font-style: italic; fill: #9ca3af; }}
  .edge {{ stroke: #6366f1; stroke-width: 2; fill: none; }}
  .edge-label {{ font-family: monospace; font-size: 10px; font-weight: 600; fill: #4b5563; }}
</style>"#
        )
        .unwrap();

        writeln!(
            &mut svg,
            r##"<defs><marker id="arrowhead" markerWidth="10" markerHeight="10" refX="9" refY="3" orient="auto"><polygon points="0 0, 10 3, 0 6" fill="#6366f1" /></marker></defs>"##
        )
        .unwrap();

        let node_map: HashMap<&str, &Node> =
            ir.nodes.iter().map(|n| (n.id.as_str(), n)).collect();

        // Edges first so boxes sit on top
        for edge in &layout.edges {
            if let Some(ir_edge) = ir.edges.get(edge.edge_index) {
                self.render_edge(&mut svg, edge, ir_edge);
            }
        }

        for node in &layout.nodes {
            if let Some(ir_node) = node_map.get(node.id.as_str()) {
                self.render_node(&mut svg, node, ir_node);
            }
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_node(&self, svg: &mut String, layout: &LayoutNode, node: &Node) {
        let x = layout.x;
        let y = layout.y;
        let w = layout.width;

        writeln!(svg, "<g>").unwrap();

        // Box
        writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#fff" stroke="#d1d5db" stroke-width="2" rx="{}" />"##,
            x, y, w, layout.height, CORNER_RADIUS
        )
        .unwrap();

        // Header, square bottom corners
        writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#0ea5e9" rx="{}" />"##,
            x, y, w, HEADER_HEIGHT, CORNER_RADIUS
        )
        .unwrap();
        writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#0ea5e9" />"##,
            x,
            y + HEADER_HEIGHT - CORNER_RADIUS,
            w,
            CORNER_RADIUS
        )
        .unwrap();
        writeln!(
            svg,
            r#"<text class="table-name" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            x + w / 2.0,
            y + 20.0,
            escape_xml(&node.label)
        )
        .unwrap();

        // Row count strip
        writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#f9fafb" />"##,
            x,
            y + HEADER_HEIGHT,
            w,
            ROW_COUNT_HEIGHT
        )
        .unwrap();
        writeln!(
            svg,
            r#"<text class="row-count" x="{}" y="{}" text-anchor="middle">{} rows</text>"#,
            x + w / 2.0,
            y + HEADER_HEIGHT + 14.0,
            format_count(node.num_rows)
        )
        .unwrap();

        let body_top = y + HEADER_HEIGHT + ROW_COUNT_HEIGHT;
        for (idx, col) in node.columns.iter().enumerate() {
            let row_top = body_top + idx as f64 * COLUMN_ROW_HEIGHT;
            let baseline = row_top + 12.0;

            if col.shaded {
                writeln!(
                    svg,
                    r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#f9fafb" />"##,
                    x, row_top, w, COLUMN_ROW_HEIGHT
                )
                .unwrap();
            }

            let (class, icon) = match col.marker {
                ColumnMarker::PrimaryKey => ("column pk", Some("\u{1F511}")),
                ColumnMarker::TimeColumn => ("column time", Some("\u{1F550}")),
                ColumnMarker::None => ("column", None),
            };

            if let Some(icon) = icon {
                writeln!(
                    svg,
                    r#"<text x="{}" y="{}" font-size="10">{}</text>"#,
                    x + 8.0,
                    baseline,
                    icon
                )
                .unwrap();
            }

            let text_x = if icon.is_some() { x + 24.0 } else { x + 12.0 };
            writeln!(
                svg,
                r#"<text class="{}" x="{}" y="{}">{}</text>"#,
                class,
                text_x,
                baseline,
                escape_xml(&col.display_name)
            )
            .unwrap();
        }

        if node.hidden_columns > 0 {
            writeln!(
                svg,
                r#"<text class="more" x="{}" y="{}">+{} more...</text>"#,
                x + 12.0,
                body_top + node.columns.len() as f64 * COLUMN_ROW_HEIGHT + 12.0,
                node.hidden_columns
            )
            .unwrap();
        }

        writeln!(svg, "</g>").unwrap();
    }

    fn render_edge(&self, svg: &mut String, layout: &LayoutEdge, edge: &Edge) {
        let (label_x, label_y) = layout.label_at;
        let plate_w = self.metrics.label_plate_width(&edge.label);
        let plate_h = self.metrics.plate_height;

        writeln!(svg, "<g>").unwrap();
        writeln!(
            svg,
            r#"<path class="edge" d="{}" marker-end="url(#arrowhead)" />"#,
            path_data(&layout.waypoints)
        )
        .unwrap();
        writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#fff" stroke="#e5e7eb" stroke-width="1" rx="4" />"##,
            label_x - plate_w / 2.0,
            label_y - plate_h / 2.0,
            plate_w,
            plate_h
        )
        .unwrap();
        writeln!(
            svg,
            r#"<text class="edge-label" x="{}" y="{}" text-anchor="middle">{}</text>"#,
            label_x,
            label_y + 5.0,
            escape_xml(&edge.label)
        )
        .unwrap();
        writeln!(svg, "</g>").unwrap();
    }
}

/// `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
