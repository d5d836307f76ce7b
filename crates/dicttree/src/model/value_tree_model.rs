//! Tree model over arbitrary nested values.
//!
//! `ValueTreeModel` exposes a [`ValueTree`] through the [`ItemModel`]
//! contract as a two-column (key, value) tree. The synthetic root is never
//! addressable: it is what the invalid index resolves to.

use crate::config::ModelConfig;
use crate::error::Result;
use crate::logging::targets;
use crate::value::Value;

use super::adapter::AdapterRegistry;
use super::index::ModelIndex;
use super::node::{NodeId, TreeNode, ValueTree};
use super::role::{ItemData, ItemRole};
use super::traits::{ItemFlags, ItemModel, Orientation};

/// Number of columns: key and value.
pub const COLUMN_COUNT: usize = 2;

/// A read-only two-column tree model built from a [`Value`].
///
/// The whole tree is materialized at construction; afterwards the model
/// never changes, so it can be shared freely between views.
///
/// # Example
///
/// ```ignore
/// use dicttree::model::{ItemModel, ModelIndex, ValueTreeModel};
/// use dicttree::source::parse_json;
///
/// let model = ValueTreeModel::new(parse_json(r#"{"a": [1, 2], "b": "x"}"#)?)?;
///
/// let root = ModelIndex::invalid();
/// assert_eq!(model.row_count(&root), 2);
///
/// let a = model.index(0, 0, &root);
/// assert_eq!(model.display_text(&a), Some("a".to_string()));
/// assert_eq!(model.row_count(&a), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ValueTreeModel {
    tree: ValueTree,
    config: ModelConfig,
}

impl ValueTreeModel {
    /// Builds a model with the built-in adapters and default configuration.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        Self::builder().build(value)
    }

    /// Builds a model using `registry` to classify values.
    pub fn with_registry(value: impl Into<Value>, registry: &AdapterRegistry) -> Result<Self> {
        let config = ModelConfig::default();
        let tree = ValueTree::build(value.into(), registry, &config)?;
        Ok(Self { tree, config })
    }

    /// Returns a builder for configuring the registry and presentation.
    pub fn builder() -> ValueTreeModelBuilder {
        ValueTreeModelBuilder::default()
    }

    /// The underlying node arena.
    pub fn tree(&self) -> &ValueTree {
        &self.tree
    }

    /// The synthetic root node.
    pub fn root(&self) -> &TreeNode {
        self.tree.root()
    }

    /// The configuration this model was built with.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Resolves a valid index to its node handle.
    ///
    /// Returns `None` for the invalid index, for the root handle, and for
    /// handles that do not belong to this model.
    pub fn node_id(&self, index: &ModelIndex) -> Option<NodeId> {
        if !index.is_valid() {
            return None;
        }
        NodeId::from_internal_id(index.internal_id())
            .filter(|id| *id != NodeId::ROOT && self.tree.node(*id).is_some())
    }

    /// Resolves a valid index to its node.
    pub fn node(&self, index: &ModelIndex) -> Option<&TreeNode> {
        self.node_id(index).and_then(|id| self.tree.node(id))
    }

    /// Creates the column-0 index of a node.
    ///
    /// The root and unknown handles yield the invalid index.
    pub fn index_for(&self, id: NodeId) -> ModelIndex {
        if id == NodeId::ROOT {
            return ModelIndex::invalid();
        }
        let Some(node) = self.tree.node(id) else {
            return ModelIndex::invalid();
        };
        let parent_index = match node.parent() {
            Some(parent_id) => self.index_for(parent_id),
            None => ModelIndex::invalid(),
        };
        ModelIndex::with_internal_id(node.row(), 0, parent_index, id.internal_id())
    }

    /// Resolves a parent reference: invalid means the root.
    fn resolve(&self, parent: &ModelIndex) -> Option<NodeId> {
        if parent.is_valid() {
            self.node_id(parent)
        } else {
            Some(NodeId::ROOT)
        }
    }
}

impl ItemModel for ValueTreeModel {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        self.resolve(parent)
            .map_or(0, |id| self.tree.child_count(id))
    }

    fn column_count(&self, _parent: &ModelIndex) -> usize {
        COLUMN_COUNT
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        if role != ItemRole::Display {
            return ItemData::None;
        }
        match self.node(index) {
            Some(node) => node.cell_value(index.column(), self.config.composite_display),
            None => ItemData::None,
        }
    }

    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
        if column >= COLUMN_COUNT {
            return ModelIndex::invalid();
        }

        let Some(parent_id) = self.resolve(parent) else {
            return ModelIndex::invalid();
        };

        let child_id = match self.tree.child_at(parent_id, row) {
            Some(id) => id,
            None => {
                tracing::trace!(target: targets::MODEL, row, column, "no child at requested row");
                return ModelIndex::invalid();
            }
        };

        // Children hang off column 0 of their parent.
        let parent_index = if parent.column() == 0 {
            parent.clone()
        } else {
            self.index_for(parent_id)
        };
        ModelIndex::with_internal_id(row, column, parent_index, child_id.internal_id())
    }

    fn parent(&self, index: &ModelIndex) -> ModelIndex {
        match self.node(index).and_then(TreeNode::parent) {
            Some(parent_id) => self.index_for(parent_id),
            None => ModelIndex::invalid(),
        }
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        match self.node(index) {
            Some(node) => ItemFlags::new().with_never_has_children(!node.has_children()),
            None => ItemFlags::disabled(),
        }
    }

    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.resolve(parent)
            .is_some_and(|id| self.tree.has_children(id))
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        if orientation != Orientation::Horizontal || role != ItemRole::Display {
            return ItemData::None;
        }
        self.config
            .headers
            .get(section)
            .map_or(ItemData::None, |label| ItemData::from(label.as_str()))
    }
}

/// Builder for [`ValueTreeModel`].
#[derive(Debug, Clone, Default)]
pub struct ValueTreeModelBuilder {
    registry: AdapterRegistry,
    config: ModelConfig,
}

impl ValueTreeModelBuilder {
    /// Uses `registry` instead of the built-in adapters.
    pub fn registry(mut self, registry: AdapterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Uses `config` instead of the defaults.
    pub fn config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the model, materializing the full tree.
    pub fn build(self, value: impl Into<Value>) -> Result<ValueTreeModel> {
        let tree = ValueTree::build(value.into(), &self.registry, &self.config)?;
        Ok(ValueTreeModel {
            tree,
            config: self.config,
        })
    }
}
