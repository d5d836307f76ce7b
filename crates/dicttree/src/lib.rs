//! dicttree - nested values as a hierarchical two-column item model.
//!
//! Any nested value (mappings, sequences, scalars, or application types
//! made composite by a custom adapter) is materialized into a tree of
//! (key, value) rows that a tree view can walk through [`ItemModel`].
//!
//! # Example
//!
//! ```no_run
//! use dicttree::logging::ModelTreeDebug;
//! use dicttree::{ValueTreeModel, source};
//!
//! fn main() -> dicttree::Result<()> {
//!     let value = source::read_path("settings.json")?;
//!     let model = ValueTreeModel::new(value)?;
//!     print!("{}", ModelTreeDebug::new().format_model(&model));
//!     Ok(())
//! }
//! ```
//!
//! [`ItemModel`]: model::ItemModel

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod source;
pub mod value;

pub use config::{CompositeDisplay, ModelConfig};
pub use error::{AdapterError, Error, Result};
pub use model::{AdapterRegistry, ValueTreeModel};
pub use value::{CustomValue, Mapping, Value};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{CompositeDisplay, ModelConfig};
    pub use crate::error::{AdapterError, Error, Result};
    pub use crate::logging::{ModelTreeDebug, TreeFormatOptions, TreeStyle};
    pub use crate::model::{
        AdaptContext, Adaptation, AdapterRegistry, ItemData, ItemFlags, ItemModel, ItemRole,
        ModelIndex, NodeAdapter, NodeKey, Orientation, ValueTreeModel,
    };
    pub use crate::source::{parse_json, parse_toml, read_path};
    pub use crate::value::{CustomValue, Mapping, Value};
}
