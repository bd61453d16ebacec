//! Grid placement of tables and connector layout.

use crate::config::DiagramConfig;
use crate::ir::GraphIR;
use crate::routing::{label_anchor, route_orthogonal};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutNode {
    pub fn overlaps(&self, other: &LayoutNode) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    /// Orthogonal path points (start, turns, end)
    pub waypoints: Vec<(f64, f64)>,
    pub label_at: (f64, f64),
    /// Index into GraphIR.edges
    pub edge_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub columns: usize,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub width: f64,
    pub height: f64,
}

/// Grid column count for `n` tables: `ceil(sqrt(n * 1.5))`.
pub fn grid_columns(n: usize) -> usize {
    (n as f64 * 1.5).sqrt().ceil() as usize
}

#[derive(Default)]
pub struct LayoutEngine {
    config: DiagramConfig,
}

impl LayoutEngine {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Compute layout for the given graph.
    ///
    /// Returns `None` when the graph has no tables.
    pub fn layout(&self, ir: &GraphIR) -> Option<Layout> {
        if ir.is_empty() {
            return None;
        }

        let columns = grid_columns(ir.nodes.len());
        let nodes = self.place_nodes(ir, columns);
        let edges = route_edges(ir, &nodes);

        let width = nodes
            .iter()
            .map(|n| n.x + n.width)
            .fold(f64::MIN, f64::max)
            + self.config.margin_x;
        let height = nodes
            .iter()
            .map(|n| n.y + n.height)
            .fold(f64::MIN, f64::max)
            + self.config.margin_y;

        debug!(
            tables = nodes.len(),
            columns,
            edges = edges.len(),
            width,
            height,
            "computed grid layout"
        );

        Some(Layout {
            columns,
            nodes,
            edges,
            width,
            height,
        })
    }

    fn place_nodes(&self, ir: &GraphIR, columns: usize) -> Vec<LayoutNode> {
        let c = &self.config;
        ir.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| {
                let row = idx / columns;
                let col = idx % columns;
                LayoutNode {
                    id: node.id.clone(),
                    x: col as f64 * c.cell_width + c.margin_x,
                    y: row as f64 * c.cell_height + c.margin_y,
                    width: c.table_width,
                    height: c.table_height,
                }
            })
            .collect()
    }
}

fn route_edges(ir: &GraphIR, nodes: &[LayoutNode]) -> Vec<LayoutEdge> {
    let positions: HashMap<&str, &LayoutNode> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    ir.edges
        .iter()
        .enumerate()
        .filter_map(|(edge_index, edge)| {
            let from = positions.get(edge.from.as_str())?;
            let to = positions.get(edge.to.as_str())?;
            let waypoints = route_orthogonal(from, to);
            let label_at = label_anchor(&waypoints)?;

            Some(LayoutEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                waypoints,
                label_at,
                edge_index,
            })
        })
        .collect()
}
