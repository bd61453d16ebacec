//! Flat relationship listing for the non-graphical schema view.
//!
//! Unlike the diagram, rows pointing at tables missing from the dataset are
//! kept: they have no geometry to place, so they are shown as-is.

use crate::model::{DatasetDetail, Relationship};
use crate::relations::resolve_relationships;
use serde::Serialize;
use std::fmt::Write;

pub const EMPTY_LISTING_MESSAGE: &str = "No relationships defined";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipListing {
    pub rows: Vec<Relationship>,
    pub table_count: usize,
    pub relationship_count: usize,
}

impl RelationshipListing {
    pub fn from_dataset(dataset: &DatasetDetail) -> Self {
        let rows = resolve_relationships(dataset);
        Self {
            relationship_count: rows.len(),
            table_count: dataset.tables.len(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One `from.col → to.col` string per row.
    pub fn row_labels(&self) -> Vec<String> {
        self.rows.iter().map(row_label).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} relationships connecting {} tables",
            self.relationship_count, self.table_count
        )
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.is_empty() {
            writeln!(out, "{}", EMPTY_LISTING_MESSAGE).unwrap();
        }
        for label in self.row_labels() {
            writeln!(out, "{}", label).unwrap();
        }
        writeln!(out, "{}", self.summary()).unwrap();
        out
    }
}

pub fn row_label(rel: &Relationship) -> String {
    format!(
        "{}.{} \u{2192} {}.{}",
        rel.from_table, rel.from_column, rel.to_table, rel.to_column
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ForeignKey, TableInfo};

    fn table(name: &str, fks: &[(&str, &str)]) -> TableInfo {
        TableInfo {
            name: name.to_string(),
            foreign_keys: fks
                .iter()
                .map(|(column, references)| ForeignKey {
                    column: column.to_string(),
                    references: references.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_listing_users_orders() {
        let dataset = DatasetDetail {
            tables: vec![
                table("users", &[]),
                table("orders", &[("user_id", "users.id")]),
            ],
            ..Default::default()
        };
        let listing = RelationshipListing::from_dataset(&dataset);

        assert_eq!(listing.row_labels(), vec!["orders.user_id → users.id"]);
        assert_eq!(listing.table_count, 2);
        assert_eq!(listing.relationship_count, 1);
    }

    #[test]
    fn test_listing_keeps_dangling_rows() {
        let dataset = DatasetDetail {
            tables: vec![table("orders", &[("user_id", "users.id")])],
            ..Default::default()
        };
        let listing = RelationshipListing::from_dataset(&dataset);

        assert_eq!(listing.rows.len(), 1);
        assert_eq!(listing.rows[0].to_table, "users");
    }

    #[test]
    fn test_listing_default_column() {
        let dataset = DatasetDetail {
            tables: vec![table("reviews", &[("order_ref", "orders")])],
            ..Default::default()
        };
        let listing = RelationshipListing::from_dataset(&dataset);

        assert_eq!(listing.rows[0].to_column, "id");
        assert_eq!(listing.row_labels(), vec!["reviews.order_ref → orders.id"]);
    }

    #[test]
    fn test_listing_no_dedup() {
        let dataset = DatasetDetail {
            tables: vec![table("a", &[("b_id", "b.id"), ("b_id", "b.id")])],
            ..Default::default()
        };

        assert_eq!(RelationshipListing::from_dataset(&dataset).rows.len(), 2);
    }

    #[test]
    fn test_render_text_empty() {
        let listing = RelationshipListing::from_dataset(&DatasetDetail::default());

        assert_eq!(
            listing.render_text(),
            "No relationships defined\n0 relationships connecting 0 tables\n"
        );
    }

    #[test]
    fn test_render_text_rows() {
        let dataset = DatasetDetail {
            tables: vec![
                table("users", &[]),
                table("orders", &[("user_id", "users.id")]),
            ],
            ..Default::default()
        };
        let text = RelationshipListing::from_dataset(&dataset).render_text();

        assert_eq!(
            text,
            "orders.user_id → users.id\n1 relationships connecting 2 tables\n"
        );
    }

    #[test]
    fn test_serialize_json() {
        let dataset = DatasetDetail {
            tables: vec![table("orders", &[("user_id", "users.id")])],
            ..Default::default()
        };
        let json = serde_json::to_value(RelationshipListing::from_dataset(&dataset)).unwrap();

        assert_eq!(json["relationship_count"], 1);
        assert_eq!(json["rows"][0]["from_column"], "user_id");
    }
}
