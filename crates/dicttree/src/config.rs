//! Model configuration.
//!
//! [`ModelConfig`] controls presentation details of a
//! [`ValueTreeModel`](crate::model::ValueTreeModel). It deserializes from
//! TOML with every field optional:
//!
//! ```toml
//! root_key = "__root__"
//! headers = ["Key", "Value"]
//! composite_display = "summary"   # or "blank"
//! max_depth = 512
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Key of the synthetic root node.
pub const DEFAULT_ROOT_KEY: &str = "__root__";

/// Deepest nesting accepted before construction fails.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How a composite node fills the value column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeDisplay {
    /// Shape and child count, e.g. `mapping (3)`.
    #[default]
    Summary,
    /// Nothing; only the key column is filled.
    Blank,
}

/// Configuration of a value tree model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Key of the synthetic root node.
    pub root_key: String,
    /// Horizontal header labels for the key and value columns.
    pub headers: [String; 2],
    /// Value column rendering of composite nodes.
    pub composite_display: CompositeDisplay,
    /// Maximum nesting depth; the root is at depth 0.
    pub max_depth: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            root_key: DEFAULT_ROOT_KEY.to_string(),
            headers: ["Key".to_string(), "Value".to_string()],
            composite_display: CompositeDisplay::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ModelConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::toml(None, e))
    }

    /// Reads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::toml(Some(path.to_path_buf()), e))
    }

    /// Sets the root key.
    pub fn with_root_key(mut self, key: impl Into<String>) -> Self {
        self.root_key = key.into();
        self
    }

    /// Sets the header labels.
    pub fn with_headers(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers = [key.into(), value.into()];
        self
    }

    /// Sets how composite values fill the value column.
    pub fn with_composite_display(mut self, display: CompositeDisplay) -> Self {
        self.composite_display = display;
        self
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
