//! Model layer: nested values exposed as a two-column item tree.
//!
//! This module turns an arbitrary [`Value`](crate::value::Value) into a tree
//! that a hierarchical view can walk through the [`ItemModel`] contract.
//! Classification of values into composite and terminal nodes is pluggable
//! via [`AdapterRegistry`].
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies an item's position in a model
//! - `ItemRole`: Specifies what type of data to access
//! - `ItemData`: Container for item data
//! - `ItemModel`: The trait that models implement
//! - `NodeAdapter` / `AdapterRegistry`: Value classification
//! - `ValueTree` / `TreeNode`: The eagerly built node arena
//! - `ValueTreeModel`: The model facade
//!
//! # Example
//!
//! ```ignore
//! use dicttree::model::{ItemModel, ModelIndex, ValueTreeModel};
//! use dicttree::source::parse_json;
//!
//! let model = ValueTreeModel::new(parse_json(r#"{"a": [1, 2], "b": "x"}"#)?)?;
//!
//! let root = ModelIndex::invalid();
//! for row in 0..model.row_count(&root) {
//!     let key = model.index(row, 0, &root);
//!     let value = model.index(row, 1, &root);
//!     println!("{:?} = {:?}", model.display_text(&key), model.display_text(&value));
//! }
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌────────────────┐
//! │    Value    │────>│  Adapters   │────>│   ValueTree    │
//! │             │     │ (registry)  │     │ (node arena)   │
//! └─────────────┘     └─────────────┘     └────────────────┘
//!                                                 │
//!                     ┌─────────────┐     ┌────────────────┐
//!                     │    View     │<───>│ ValueTreeModel │
//!                     │             │     │  (ItemModel)   │
//!                     └─────────────┘     └────────────────┘
//! ```

mod adapter;
mod index;
mod node;
mod role;
mod traits;
mod value_tree_model;

pub use adapter::{
    AdaptContext, Adaptation, AdapterRegistry, MappingAdapter, NodeAdapter, SequenceAdapter,
};
pub use index::ModelIndex;
pub use node::{NodeId, NodeKey, NodeValue, TreeNode, ValueTree};
pub use role::{ItemData, ItemRole};
pub use traits::{ItemFlags, ItemModel, Orientation};
pub use value_tree_model::{COLUMN_COUNT, ValueTreeModel, ValueTreeModelBuilder};
