//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::entities::part::DEFAULT_SUPPLIER;

/// invt configuration with layered hierarchy
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Supplier name offered for outsourced parts with no company given
    pub supplier_placeholder: Option<String>,

    /// Maximum table width in columns
    pub table_width: Option<usize>,

    /// Force colored output on or off
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. User config (~/.config/invt/config.yaml, or the --config path)
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::user_config_path);
        if let Some(path) = path {
            if path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&path) {
                    if let Ok(file_config) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(file_config);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(supplier) = std::env::var("INVT_SUPPLIER") {
            config.supplier_placeholder = Some(supplier);
        }
        if let Ok(width) = std::env::var("INVT_TABLE_WIDTH") {
            if let Ok(width) = width.parse() {
                config.table_width = Some(width);
            }
        }
        if let Ok(color) = std::env::var("INVT_COLOR") {
            config.color = Some(!matches!(color.to_lowercase().as_str(), "0" | "false" | "no"));
        }

        config
    }

    fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "invt")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one, with the other taking priority
    fn merge(&mut self, other: Config) {
        if other.supplier_placeholder.is_some() {
            self.supplier_placeholder = other.supplier_placeholder;
        }
        if other.table_width.is_some() {
            self.table_width = other.table_width;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    /// The supplier placeholder offered as the company-name prompt prefill,
    /// falling back to the built-in default. The part form requires the
    /// field, so the entity-level blank-company fallback stays
    /// [`DEFAULT_SUPPLIER`] regardless of configuration.
    pub fn supplier_placeholder(&self) -> &str {
        self.supplier_placeholder.as_deref().unwrap_or(DEFAULT_SUPPLIER)
    }
}
