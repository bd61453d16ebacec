//! Relationship derivation shared by the diagram and the relationship listing.

use crate::model::{DatasetDetail, ForeignKey, Relationship, TableInfo};

/// Column assumed when a reference names only a table.
pub const DEFAULT_REFERENCE_COLUMN: &str = "id";

/// Split a `table.column` reference on the first `.`.
///
/// A reference without a column part yields [`DEFAULT_REFERENCE_COLUMN`].
pub fn split_reference(reference: &str) -> (&str, &str) {
    match reference.split_once('.') {
        Some((table, column)) if !column.is_empty() => (table, column),
        Some((table, _)) => (table, DEFAULT_REFERENCE_COLUMN),
        None => (reference, DEFAULT_REFERENCE_COLUMN),
    }
}

/// Turn one foreign key of `table` into a relationship.
pub fn foreign_key_relationship(table: &TableInfo, fk: &ForeignKey) -> Relationship {
    let (to_table, to_column) = split_reference(&fk.references);
    Relationship {
        from_table: table.name.clone(),
        from_column: fk.column.clone(),
        to_table: to_table.to_string(),
        to_column: to_column.to_string(),
    }
}

/// All relationships implied by foreign keys, in table order then key order.
pub fn derive_relationships(tables: &[TableInfo]) -> Vec<Relationship> {
    tables
        .iter()
        .flat_map(|table| {
            table
                .foreign_keys
                .iter()
                .map(move |fk| foreign_key_relationship(table, fk))
        })
        .collect()
}

/// The dataset's explicit relationship list when it has a non-empty one,
/// otherwise the foreign-key derived list.
pub fn resolve_relationships(dataset: &DatasetDetail) -> Vec<Relationship> {
    match &dataset.relationships {
        Some(explicit) if !explicit.is_empty() => explicit.clone(),
        _ => derive_relationships(&dataset.tables),
    }
}
