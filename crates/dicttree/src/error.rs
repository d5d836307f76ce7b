//! Error types for building value trees.

use std::path::PathBuf;

/// Result type alias for dicttree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading values or building a tree model.
///
/// Lookups on a built model never fail: out-of-range requests yield an
/// invalid [`ModelIndex`](crate::model::ModelIndex) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An adapter failed with something other than "not applicable".
    #[error("Adapter '{adapter}' failed on node '{key}': {source}")]
    Adapter {
        adapter: String,
        key: String,
        #[source]
        source: AdapterError,
    },

    /// The value nests deeper than the configured limit.
    #[error("Node '{key}' exceeds the maximum tree depth of {limit}")]
    DepthLimitExceeded { key: String, limit: usize },

    /// JSON input could not be parsed.
    #[error("Invalid JSON{}: {source}", display_path(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// TOML input could not be parsed.
    #[error("Invalid TOML{}: {source}", display_path(.path))]
    Toml {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    /// File I/O error.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an adapter error.
    pub fn adapter(adapter: impl Into<String>, key: impl Into<String>, source: AdapterError) -> Self {
        Self::Adapter {
            adapter: adapter.into(),
            key: key.into(),
            source,
        }
    }

    /// Create a depth limit error.
    pub fn depth_limit(key: impl Into<String>, limit: usize) -> Self {
        Self::DepthLimitExceeded {
            key: key.into(),
            limit,
        }
    }

    /// Create a JSON error.
    pub fn json(path: Option<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path, source }
    }

    /// Create a TOML error.
    pub fn toml(path: Option<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml { path, source }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in '{}'", path.display()),
        None => String::new(),
    }
}

/// Failure reported by a [`NodeAdapter`](crate::model::NodeAdapter).
///
/// Returning this aborts model construction. Adapters that merely do not
/// handle a value return [`Adaptation::NotApplicable`](crate::model::Adaptation)
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The value looked like something the adapter handles but was malformed.
    #[error("{0}")]
    Malformed(String),

    /// Any other failure raised inside the adapter.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl AdapterError {
    /// Create a malformed-value error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
