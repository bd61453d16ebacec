//! Reading dataset, catalog and config documents from disk.

use crate::config::{ConfigError, DiagramConfig};
use crate::model::{DatasetDetail, DatasetIndex};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_dataset(path: &Path) -> Result<DatasetDetail, LoadError> {
    load_json(path)
}

pub fn load_index(path: &Path) -> Result<DatasetIndex, LoadError> {
    load_json(path)
}

pub fn load_config(path: &Path) -> Result<DiagramConfig, LoadError> {
    let config: DiagramConfig = load_json(path)?;
    config.validate().map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shop.json");
        fs::write(&path, r#"{ "id": "shop", "tables": [ { "name": "users" } ] }"#).unwrap();

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.id, "shop");
        assert_eq!(dataset.tables.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_dataset(&dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_index(&path), Err(LoadError::Json { .. })));
    }

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "maxColumnNameLength": 12 }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.max_column_name_length, 12);
        assert_eq!(config.cell_width, 220.0);
    }

    #[test]
    fn test_load_config_rejects_overlapping_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "tableWidth": 300 }"#).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Config {
                source: ConfigError::TableExceedsCell { .. },
                ..
            }
        ));
        assert!(err.to_string().contains("tableWidth 300"));
    }
}
