//! Node adapters: pluggable classification of values into children.
//!
//! An adapter looks at a [`Value`] and either breaks it into ordered
//! `(key, value)` child pairs or hands it back untouched. The
//! [`AdapterRegistry`] tries its adapters in registration order and the first
//! one that produces children wins. Values no adapter accepts become terminal
//! nodes.
//!
//! # Built-in adapters
//!
//! A default registry holds, in order:
//!
//! 1. [`SequenceAdapter`]: children keyed by 0-based position
//! 2. [`MappingAdapter`]: children keyed by mapping key, in insertion order
//!
//! Strings and byte strings are never decomposed.
//!
//! # Example
//!
//! ```ignore
//! use dicttree::model::{Adaptation, AdapterRegistry, NodeKey};
//! use dicttree::value::Value;
//!
//! struct Point { x: i64, y: i64 }
//!
//! let mut registry = AdapterRegistry::new();
//! registry.register_fn("point", |_ctx, value| {
//!     let Some(point) = value.as_custom().and_then(|c| c.downcast_ref::<Point>()) else {
//!         return Ok(Adaptation::NotApplicable(value));
//!     };
//!     Ok(Adaptation::Composite(vec![
//!         (NodeKey::from("x"), Value::Int(point.x)),
//!         (NodeKey::from("y"), Value::Int(point.y)),
//!     ]))
//! });
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{AdapterError, Error, Result};
use crate::logging::targets;
use crate::value::Value;

use super::node::NodeKey;

/// Classifier context handed to every adapter.
///
/// Describes the node whose value is being classified, i.e. the parent of
/// any children the adapter produces.
#[derive(Debug, Clone, Copy)]
pub struct AdaptContext<'a> {
    key: &'a NodeKey,
    depth: usize,
    row: usize,
}

impl<'a> AdaptContext<'a> {
    /// Creates a context for the node at `depth` (root is 0) and `row`.
    pub fn new(key: &'a NodeKey, depth: usize, row: usize) -> Self {
        Self { key, depth, row }
    }

    /// Key of the node being classified.
    pub fn key(&self) -> &'a NodeKey {
        self.key
    }

    /// Depth of the node being classified; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Row of the node being classified among its siblings.
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Outcome of a single adapter attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Adaptation {
    /// The value is composite; these are its children in display order.
    Composite(Vec<(NodeKey, Value)>),
    /// The adapter does not handle this value and hands it back unchanged.
    NotApplicable(Value),
}

impl Adaptation {
    /// Returns `true` for [`Adaptation::Composite`].
    pub fn is_composite(&self) -> bool {
        matches!(self, Adaptation::Composite(_))
    }
}

/// A value-to-children classifier.
///
/// Implementations must return [`Adaptation::NotApplicable`] with the very
/// value they were given for anything they do not handle. Returning an error
/// aborts construction of the whole model.
pub trait NodeAdapter: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Classifies `value`.
    fn adapt(&self, ctx: &AdaptContext<'_>, value: Value) -> std::result::Result<Adaptation, AdapterError>;
}

/// Adapter for ordered sequences.
///
/// Children are keyed by their 0-based position. Strings and byte strings
/// are rejected explicitly even though they are sequences of characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceAdapter;

impl NodeAdapter for SequenceAdapter {
    fn name(&self) -> &str {
        "sequence"
    }

    fn adapt(&self, _ctx: &AdaptContext<'_>, value: Value) -> std::result::Result<Adaptation, AdapterError> {
        if value.is_char_sequence() {
            return Ok(Adaptation::NotApplicable(value));
        }
        match value {
            Value::Sequence(items) => Ok(Adaptation::Composite(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (NodeKey::Index(i), item))
                    .collect(),
            )),
            other => Ok(Adaptation::NotApplicable(other)),
        }
    }
}

/// Adapter for key-ordered mappings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingAdapter;

impl NodeAdapter for MappingAdapter {
    fn name(&self) -> &str {
        "mapping"
    }

    fn adapt(&self, _ctx: &AdaptContext<'_>, value: Value) -> std::result::Result<Adaptation, AdapterError> {
        match value {
            Value::Mapping(mapping) => Ok(Adaptation::Composite(
                mapping
                    .into_iter()
                    .map(|(key, item)| (NodeKey::Name(key), item))
                    .collect(),
            )),
            other => Ok(Adaptation::NotApplicable(other)),
        }
    }
}

/// Closure-backed adapter created by [`AdapterRegistry::register_fn`].
struct FnAdapter<F> {
    name: String,
    adapt: F,
}

impl<F> NodeAdapter for FnAdapter<F>
where
    F: Fn(&AdaptContext<'_>, Value) -> std::result::Result<Adaptation, AdapterError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn adapt(&self, ctx: &AdaptContext<'_>, value: Value) -> std::result::Result<Adaptation, AdapterError> {
        (self.adapt)(ctx, value)
    }
}

/// Ordered, append-only list of adapters.
///
/// Cloning is cheap; adapters are shared.
#[derive(Clone)]
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn NodeAdapter>>,
}

impl AdapterRegistry {
    /// Creates a registry holding the built-in sequence and mapping adapters.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(SequenceAdapter).register(MappingAdapter);
        registry
    }

    /// Creates a registry without any adapters; every value is terminal.
    pub fn empty() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Appends an adapter. It is tried after every adapter registered before it.
    pub fn register<A: NodeAdapter + 'static>(&mut self, adapter: A) -> &mut Self {
        self.adapters.push(Arc::new(adapter));
        self
    }

    /// Appends a closure adapter under `name`.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, adapt: F) -> &mut Self
    where
        F: Fn(&AdaptContext<'_>, Value) -> std::result::Result<Adaptation, AdapterError>
            + Send
            + Sync
            + 'static,
    {
        self.register(FnAdapter {
            name: name.into(),
            adapt,
        })
    }

    /// Returns the number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns `true` if no adapters are registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Returns adapter names in evaluation order.
    pub fn adapter_names(&self) -> Vec<&str> {
        self.adapters.iter().map(|adapter| adapter.name()).collect()
    }

    /// Classifies `value` with the first adapter that accepts it.
    ///
    /// Returns [`Adaptation::NotApplicable`] carrying the value if no adapter
    /// accepts it. An adapter error is fatal and names the failing adapter.
    pub fn classify(&self, ctx: &AdaptContext<'_>, value: Value) -> Result<Adaptation> {
        let mut value = value;
        for adapter in &self.adapters {
            match adapter.adapt(ctx, value) {
                Ok(Adaptation::Composite(children)) => {
                    tracing::trace!(
                        target: targets::ADAPTER,
                        adapter = adapter.name(),
                        key = %ctx.key(),
                        child_count = children.len(),
                        "value classified as composite"
                    );
                    return Ok(Adaptation::Composite(children));
                }
                Ok(Adaptation::NotApplicable(returned)) => value = returned,
                Err(source) => {
                    tracing::warn!(
                        target: targets::ADAPTER,
                        adapter = adapter.name(),
                        key = %ctx.key(),
                        "adapter failed: {}",
                        source
                    );
                    return Err(Error::adapter(adapter.name(), ctx.key().to_string(), source));
                }
            }
        }
        Ok(Adaptation::NotApplicable(value))
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.adapter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;

    fn classify(registry: &AdapterRegistry, value: Value) -> Adaptation {
        let key = NodeKey::from("test");
        registry
            .classify(&AdaptContext::new(&key, 0, 0), value)
            .unwrap()
    }

    #[test]
    fn test_builtin_order() {
        let registry = AdapterRegistry::default();
        assert_eq!(registry.adapter_names(), ["sequence", "mapping"]);
        assert_eq!(registry.len(), 2);
        assert!(AdapterRegistry::empty().is_empty());
    }

    #[test]
    fn test_sequence_children_keyed_by_position() {
        let adaptation = classify(&AdapterRegistry::new(), Value::from(vec!["a", "b"]));
        assert_eq!(
            adaptation,
            Adaptation::Composite(vec![
                (NodeKey::Index(0), Value::from("a")),
                (NodeKey::Index(1), Value::from("b")),
            ])
        );
    }

    #[test]
    fn test_mapping_children_keep_insertion_order() {
        let mut mapping = Mapping::new();
        mapping.insert("z".into(), Value::Int(1));
        mapping.insert("a".into(), Value::Int(2));

        let adaptation = classify(&AdapterRegistry::new(), Value::Mapping(mapping));
        assert_eq!(
            adaptation,
            Adaptation::Composite(vec![
                (NodeKey::from("z"), Value::Int(1)),
                (NodeKey::from("a"), Value::Int(2)),
            ])
        );
    }

    #[test]
    fn test_strings_and_bytes_are_terminal() {
        let registry = AdapterRegistry::new();
        for value in [Value::from("text"), Value::from(""), Value::bytes(b"raw".to_vec())] {
            assert_eq!(
                classify(&registry, value.clone()),
                Adaptation::NotApplicable(value)
            );
        }

        let key = NodeKey::from("s");
        let ctx = AdaptContext::new(&key, 0, 0);
        assert!(!SequenceAdapter
            .adapt(&ctx, Value::from("abc"))
            .unwrap()
            .is_composite());
    }

    #[test]
    fn test_unclassified_value_is_handed_back() {
        let registry = AdapterRegistry::new();
        assert_eq!(
            classify(&registry, Value::Float(1.5)),
            Adaptation::NotApplicable(Value::Float(1.5))
        );
        assert_eq!(
            classify(&AdapterRegistry::empty(), Value::from(vec![1])),
            Adaptation::NotApplicable(Value::from(vec![1]))
        );
    }

    #[test]
    fn test_first_matching_adapter_wins() {
        let mut registry = AdapterRegistry::new();
        registry.register_fn("catch-all", |_ctx, _value| {
            Ok(Adaptation::Composite(vec![(NodeKey::from("caught"), Value::Null)]))
        });

        // Built-ins come first, so sequences never reach the catch-all.
        assert_eq!(
            classify(&registry, Value::from(vec![7])),
            Adaptation::Composite(vec![(NodeKey::Index(0), Value::Int(7))])
        );
        assert_eq!(
            classify(&registry, Value::Int(7)),
            Adaptation::Composite(vec![(NodeKey::from("caught"), Value::Null)])
        );
    }

    #[test]
    fn test_custom_adapter_decomposes_payload() {
        struct Point {
            x: i64,
            y: i64,
        }

        let mut registry = AdapterRegistry::new();
        registry.register_fn("point", |ctx, value| {
            assert_eq!(ctx.depth(), 0);
            let Some(point) = value.as_custom().and_then(|c| c.downcast_ref::<Point>()) else {
                return Ok(Adaptation::NotApplicable(value));
            };
            Ok(Adaptation::Composite(vec![
                (NodeKey::from("x"), Value::Int(point.x)),
                (NodeKey::from("y"), Value::Int(point.y)),
            ]))
        });
        assert_eq!(registry.adapter_names(), ["sequence", "mapping", "point"]);

        let adaptation = classify(&registry, Value::custom(Point { x: 3, y: 4 }));
        assert_eq!(
            adaptation,
            Adaptation::Composite(vec![
                (NodeKey::from("x"), Value::Int(3)),
                (NodeKey::from("y"), Value::Int(4)),
            ])
        );
    }

    #[test]
    fn test_adapter_error_is_fatal() {
        let mut registry = AdapterRegistry::new();
        registry.register_fn("strict", |_ctx, _value| {
            Err(AdapterError::malformed("cannot read value"))
        });

        let key = NodeKey::from("broken");
        let err = registry
            .classify(&AdaptContext::new(&key, 1, 0), Value::Int(1))
            .unwrap_err();
        match err {
            Error::Adapter { adapter, key, .. } => {
                assert_eq!(adapter, "strict");
                assert_eq!(key, "broken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // The registry itself is unchanged.
        assert_eq!(registry.len(), 3);
    }
}
