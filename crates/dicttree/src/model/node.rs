//! Tree nodes and the arena that owns them.
//!
//! A [`ValueTree`] is built once from a root [`Value`]: every node is
//! classified and its children materialized depth-first at construction.
//! Nodes live in a flat arena and refer to their parent by [`NodeId`], so
//! upward navigation never owns anything.

use std::fmt;

use crate::config::{CompositeDisplay, ModelConfig};
use crate::error::{Error, Result};
use crate::logging::{targets, PerfSpan};
use crate::value::Value;

use super::adapter::{AdaptContext, Adaptation, AdapterRegistry};
use super::role::ItemData;

/// Handle of a node inside a [`ValueTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The synthetic root node.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the arena slot of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Returns the handle stored in a `ModelIndex` for this node.
    #[inline]
    pub fn internal_id(self) -> u64 {
        self.0 as u64
    }

    /// Recovers a handle from a `ModelIndex` internal ID.
    #[inline]
    pub fn from_internal_id(id: u64) -> Option<Self> {
        usize::try_from(id).ok().map(NodeId)
    }
}

/// Display label of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Position within a sequence.
    Index(usize),
    /// Mapping key, or the root label.
    Name(String),
}

impl NodeKey {
    /// Returns the display data for the key column.
    pub fn to_item_data(&self) -> ItemData {
        match self {
            NodeKey::Index(i) => ItemData::from(*i),
            NodeKey::Name(name) => ItemData::from(name.as_str()),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Index(i) => write!(f, "{i}"),
            NodeKey::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for NodeKey {
    fn from(name: &str) -> Self {
        NodeKey::Name(name.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(name: String) -> Self {
        NodeKey::Name(name)
    }
}

impl From<usize> for NodeKey {
    fn from(index: usize) -> Self {
        NodeKey::Index(index)
    }
}

/// Payload of a node after adaptation.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// No adapter accepted the value; it is shown as-is.
    Terminal(Value),
    /// An adapter broke the value into children.
    Composite {
        /// Shape name of the original value, e.g. `"sequence"`.
        kind: &'static str,
        /// Child handles in display order.
        children: Vec<NodeId>,
    },
}

/// A node of the value tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    key: NodeKey,
    value: NodeValue,
    parent: Option<NodeId>,
    row: usize,
}

impl TreeNode {
    /// Display label of this node.
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    /// Adapted payload.
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// The raw scalar of a terminal node.
    pub fn terminal_value(&self) -> Option<&Value> {
        match &self.value {
            NodeValue::Terminal(value) => Some(value),
            NodeValue::Composite { .. } => None,
        }
    }

    /// Parent handle; `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Position among siblings, fixed at construction.
    pub fn row(&self) -> usize {
        self.row
    }

    /// `true` iff an adapter classified the value as composite.
    ///
    /// Empty sequences and mappings are composite with no children.
    pub fn has_children(&self) -> bool {
        matches!(self.value, NodeValue::Composite { .. })
    }

    /// Child handles; empty for terminal nodes.
    pub fn children(&self) -> &[NodeId] {
        match &self.value {
            NodeValue::Composite { children, .. } => children,
            NodeValue::Terminal(_) => &[],
        }
    }

    /// Row count reported to a host view.
    ///
    /// A terminal node reports 1 (its own scalar row) even though it has no
    /// navigable children.
    pub fn child_count(&self) -> usize {
        match &self.value {
            NodeValue::Composite { children, .. } => children.len(),
            NodeValue::Terminal(_) => 1,
        }
    }

    /// Returns the child at `index`, or `None` for terminal nodes and
    /// out-of-range requests.
    pub fn child_at(&self, index: usize) -> Option<NodeId> {
        self.children().get(index).copied()
    }

    /// Returns the cell data for `column`: 0 is the key, 1 the value.
    ///
    /// Composite values render according to `composite_display`.
    pub fn cell_value(&self, column: usize, composite_display: CompositeDisplay) -> ItemData {
        match (column, &self.value) {
            (0, _) => self.key.to_item_data(),
            (1, NodeValue::Terminal(value)) => ItemData::from(value),
            (1, NodeValue::Composite { kind, children }) => match composite_display {
                CompositeDisplay::Summary => ItemData::String(format!("{kind} ({})", children.len())),
                CompositeDisplay::Blank => ItemData::None,
            },
            _ => ItemData::None,
        }
    }
}

/// Arena of eagerly built, immutable tree nodes.
///
/// Slot 0 always holds the synthetic root.
#[derive(Debug, Clone)]
pub struct ValueTree {
    nodes: Vec<TreeNode>,
}

impl ValueTree {
    /// Builds the full tree for `value`.
    ///
    /// The root is keyed by `config.root_key`. Any adapter error, or nesting
    /// deeper than `config.max_depth`, aborts the build and nothing is kept.
    pub fn build(value: Value, registry: &AdapterRegistry, config: &ModelConfig) -> Result<Self> {
        let _span = PerfSpan::new("build_value_tree");

        let mut builder = TreeBuilder {
            registry,
            max_depth: config.max_depth,
            nodes: Vec::new(),
            deepest: 0,
        };
        builder.build_node(NodeKey::from(config.root_key.as_str()), value, None, 0, 0)?;

        tracing::debug!(
            target: targets::MODEL,
            node_count = builder.nodes.len(),
            depth = builder.deepest,
            "built value tree"
        );

        Ok(Self {
            nodes: builder.nodes,
        })
    }

    /// The synthetic root node.
    pub fn root(&self) -> &TreeNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Returns the node for `id`, if it belongs to this tree.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `false` once built: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `has_children` of the node, `false` for unknown handles.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(TreeNode::has_children)
    }

    /// `child_count` of the node, 0 for unknown handles.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, TreeNode::child_count)
    }

    /// `child_at` of the node.
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id)?.child_at(index)
    }

    /// Iterates over `(id, node)` pairs in construction (depth-first) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }
}

struct TreeBuilder<'a> {
    registry: &'a AdapterRegistry,
    max_depth: usize,
    nodes: Vec<TreeNode>,
    deepest: usize,
}

impl TreeBuilder<'_> {
    fn build_node(
        &mut self,
        key: NodeKey,
        value: Value,
        parent: Option<NodeId>,
        row: usize,
        depth: usize,
    ) -> Result<NodeId> {
        if depth > self.max_depth {
            return Err(Error::depth_limit(key.to_string(), self.max_depth));
        }
        self.deepest = self.deepest.max(depth);

        let kind = value.type_name();
        let adaptation = self
            .registry
            .classify(&AdaptContext::new(&key, depth, row), value)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            key,
            value: NodeValue::Terminal(Value::Null),
            parent,
            row,
        });

        self.nodes[id.index()].value = match adaptation {
            Adaptation::Composite(pairs) => {
                let mut children = Vec::with_capacity(pairs.len());
                for (child_row, (child_key, child_value)) in pairs.into_iter().enumerate() {
                    children.push(self.build_node(
                        child_key,
                        child_value,
                        Some(id),
                        child_row,
                        depth + 1,
                    )?);
                }
                NodeValue::Composite { kind, children }
            }
            Adaptation::NotApplicable(value) => NodeValue::Terminal(value),
        };
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;

    fn build(value: Value) -> ValueTree {
        ValueTree::build(value, &AdapterRegistry::new(), &ModelConfig::default()).unwrap()
    }

    fn sample() -> Value {
        let mut mapping = Mapping::new();
        mapping.insert("a".into(), Value::from(vec![1, 2]));
        mapping.insert("b".into(), Value::from("x"));
        Value::Mapping(mapping)
    }

    #[test]
    fn test_root_wraps_input() {
        let tree = build(sample());
        let root = tree.root();
        assert_eq!(root.key(), &NodeKey::from("__root__"));
        assert_eq!(root.parent(), None);
        assert!(root.has_children());
        assert_eq!(root.child_count(), 2);
        // root, a, a[0], a[1], b
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_children_rows_match_positions() {
        let tree = build(sample());
        for (id, node) in tree.iter() {
            for (row, child) in node.children().iter().enumerate() {
                let child_node = tree.node(*child).unwrap();
                assert_eq!(child_node.row(), row);
                assert_eq!(child_node.parent(), Some(id));
            }
        }
    }

    #[test]
    fn test_depth_first_construction_order() {
        let tree = build(sample());
        let keys: Vec<String> = tree.iter().map(|(_, node)| node.key().to_string()).collect();
        assert_eq!(keys, ["__root__", "a", "0", "1", "b"]);
    }

    #[test]
    fn test_terminal_node_counts() {
        let tree = build(Value::Int(42));
        let root = tree.root();
        assert!(!root.has_children());
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.child_at(0), None);
        assert_eq!(root.terminal_value(), Some(&Value::Int(42)));
    }

    #[test]
    fn test_empty_composites_have_children_flag() {
        for value in [Value::Sequence(Vec::new()), Value::Mapping(Mapping::new())] {
            let tree = build(value);
            assert!(tree.root().has_children());
            assert_eq!(tree.root().child_count(), 0);
            assert_eq!(tree.child_at(NodeId::ROOT, 0), None);
        }
    }

    #[test]
    fn test_cell_values() {
        let tree = build(sample());
        let a = tree.node(tree.child_at(NodeId::ROOT, 0).unwrap()).unwrap();
        let b = tree.node(tree.child_at(NodeId::ROOT, 1).unwrap()).unwrap();

        assert_eq!(a.cell_value(0, CompositeDisplay::Summary), ItemData::from("a"));
        assert_eq!(
            a.cell_value(1, CompositeDisplay::Summary),
            ItemData::from("sequence (2)")
        );
        assert_eq!(a.cell_value(1, CompositeDisplay::Blank), ItemData::None);
        assert_eq!(b.cell_value(1, CompositeDisplay::Summary), ItemData::from("x"));
        assert_eq!(b.cell_value(2, CompositeDisplay::Summary), ItemData::None);

        let first = tree.node(a.child_at(0).unwrap()).unwrap();
        assert_eq!(first.cell_value(0, CompositeDisplay::Summary), ItemData::Int(0));
        assert_eq!(first.cell_value(1, CompositeDisplay::Summary), ItemData::Int(1));
    }

    #[test]
    fn test_depth_limit() {
        let nested = Value::from(vec![Value::from(vec![Value::from(vec![1])])]);
        let config = ModelConfig::default().with_max_depth(2);
        let err = ValueTree::build(nested.clone(), &AdapterRegistry::new(), &config).unwrap_err();
        assert!(matches!(err, Error::DepthLimitExceeded { limit: 2, .. }));

        let config = ModelConfig::default().with_max_depth(3);
        assert!(ValueTree::build(nested, &AdapterRegistry::new(), &config).is_ok());
    }

    #[test]
    fn test_custom_root_key() {
        let config = ModelConfig::default().with_root_key("document");
        let tree = ValueTree::build(Value::Null, &AdapterRegistry::new(), &config).unwrap();
        assert_eq!(tree.root().key(), &NodeKey::from("document"));
    }

    #[test]
    fn test_node_id_round_trip() {
        let id = NodeId::from_internal_id(3).unwrap();
        assert_eq!(id.index(), 3);
        assert_eq!(id.internal_id(), 3);
    }
}
