use crate::config::DiagramConfig;
use crate::measure::truncate_name;
use crate::model::{DatasetDetail, TableInfo};
use crate::relations::resolve_relationships;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnMarker {
    PrimaryKey,
    TimeColumn,
    None,
}

#[derive(Debug, Clone)]
pub struct GraphIR {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub num_rows: u64,
    pub columns: Vec<ColumnIR>,
    /// Sample columns beyond the visible limit.
    pub hidden_columns: usize,
}

#[derive(Debug, Clone)]
pub struct ColumnIR {
    pub name: String,
    pub display_name: String,
    pub marker: ColumnMarker,
    pub shaded: bool,
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub from_column: String,
    pub to_column: String,
    pub label: String,
}

impl ColumnMarker {
    fn for_column(table: &TableInfo, column: &str) -> Self {
        if table.primary_key.as_deref() == Some(column) {
            Self::PrimaryKey
        } else if table.time_column.as_deref() == Some(column) {
            Self::TimeColumn
        } else {
            Self::None
        }
    }
}

impl Node {
    fn from_table(table: &TableInfo, config: &DiagramConfig) -> Self {
        let columns = table
            .sample_columns
            .iter()
            .take(config.max_visible_columns)
            .enumerate()
            .map(|(idx, name)| ColumnIR {
                name: name.clone(),
                display_name: truncate_name(name, config.max_column_name_length),
                marker: ColumnMarker::for_column(table, name),
                shaded: idx % 2 == 0,
            })
            .collect();

        Node {
            id: table.name.clone(),
            label: table.name.clone(),
            num_rows: table.num_rows,
            columns,
            hidden_columns: table
                .sample_columns
                .len()
                .saturating_sub(config.max_visible_columns),
        }
    }
}

impl GraphIR {
    pub fn from_dataset(dataset: &DatasetDetail, config: &DiagramConfig) -> Self {
        let nodes: Vec<Node> = dataset
            .tables
            .iter()
            .map(|t| Node::from_table(t, config))
            .collect();

        let node_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

        let edges: Vec<Edge> = resolve_relationships(dataset)
            .into_iter()
            .filter(|r| {
                let placed = node_ids.contains(r.from_table.as_str())
                    && node_ids.contains(r.to_table.as_str());
                if !placed {
                    debug!(
                        from = %r.from_table,
                        to = %r.to_table,
                        "dropping relationship to unknown table"
                    );
                }
                placed
            })
            .map(|r| Edge {
                label: r.from_column.clone(),
                from: r.from_table,
                to: r.to_table,
                from_column: r.from_column,
                to_column: r.to_column,
            })
            .collect();

        GraphIR { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
