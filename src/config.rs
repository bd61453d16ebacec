//! Diagram geometry and display limits.

use serde::Deserialize;

/// Shortest name bound that still leaves room for the `...` suffix.
pub const MIN_COLUMN_NAME_LENGTH: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{table_field} {table} does not fit in {cell_field} {cell}")]
    TableExceedsCell {
        table_field: &'static str,
        table: f64,
        cell_field: &'static str,
        cell: f64,
    },
    #[error("maxColumnNameLength must be at least {min}, got {0}", min = MIN_COLUMN_NAME_LENGTH)]
    NameLengthTooShort(usize),
}

/// Layout constants for the ER diagram.
///
/// Decodes from JSON with camelCase keys; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DiagramConfig {
    pub cell_width: f64,
    pub cell_height: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub table_width: f64,
    pub table_height: f64,
    /// Columns drawn per table before the "+K more..." indicator.
    pub max_visible_columns: usize,
    /// Longest column name shown untruncated, in characters.
    pub max_column_name_length: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            cell_width: 220.0,
            cell_height: 180.0,
            margin_x: 40.0,
            margin_y: 40.0,
            table_width: 200.0,
            table_height: 140.0,
            max_visible_columns: 5,
            max_column_name_length: 20,
        }
    }
}

impl DiagramConfig {
    /// Decode and validate a config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every table fits inside its grid cell, so placed boxes never
    /// overlap, and that truncated names stay within their bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("cellWidth", self.cell_width),
            ("cellHeight", self.cell_height),
            ("tableWidth", self.table_width),
            ("tableHeight", self.table_height),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [("marginX", self.margin_x), ("marginY", self.margin_y)] {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.table_width > self.cell_width {
            return Err(ConfigError::TableExceedsCell {
                table_field: "tableWidth",
                table: self.table_width,
                cell_field: "cellWidth",
                cell: self.cell_width,
            });
        }
        if self.table_height > self.cell_height {
            return Err(ConfigError::TableExceedsCell {
                table_field: "tableHeight",
                table: self.table_height,
                cell_field: "cellHeight",
                cell: self.cell_height,
            });
        }
        if self.max_column_name_length < MIN_COLUMN_NAME_LENGTH {
            return Err(ConfigError::NameLengthTooShort(self.max_column_name_length));
        }
        Ok(())
    }
}
