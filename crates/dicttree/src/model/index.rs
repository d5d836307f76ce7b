//! Model index for addressing items in hierarchical models.
//!
//! A `ModelIndex` is what a host view holds on to between calls into an
//! `ItemModel`: the position of an item (row and column under a parent) plus
//! the model's own handle for it, so lookups never search the tree.

use std::sync::Arc;

/// Position of an item within an `ItemModel`.
///
/// The invalid index doubles as the "top level" sentinel: views pass it as
/// the parent of top-level items, and models return it for out-of-range
/// requests. Parent chains are shared, so cloning an index is cheap.
///
/// # Example
///
/// ```ignore
/// use dicttree::model::{ItemModel, ModelIndex};
///
/// let top = model.index(0, 0, &ModelIndex::invalid());
/// let child = model.index(0, 0, &top);
/// assert_eq!(model.parent(&child), top);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    inner: Option<Arc<Position>>,
}

#[derive(PartialEq, Eq, Hash)]
struct Position {
    row: usize,
    column: usize,
    parent: ModelIndex,
    internal_id: u64,
}

impl ModelIndex {
    /// The invalid index: the implicit root as a parent, or "no such item".
    #[inline]
    pub const fn invalid() -> Self {
        Self { inner: None }
    }

    /// Creates a valid index carrying the model's handle for the item.
    ///
    /// Pass `ModelIndex::invalid()` as `parent` for top-level items.
    pub fn with_internal_id(row: usize, column: usize, parent: ModelIndex, internal_id: u64) -> Self {
        Self {
            inner: Some(Arc::new(Position {
                row,
                column,
                parent,
                internal_id,
            })),
        }
    }

    /// Returns `true` if this index addresses an item.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Row within the parent; 0 for the invalid index.
    #[inline]
    pub fn row(&self) -> usize {
        self.inner.as_ref().map_or(0, |pos| pos.row)
    }

    /// Column within the parent; 0 for the invalid index.
    #[inline]
    pub fn column(&self) -> usize {
        self.inner.as_ref().map_or(0, |pos| pos.column)
    }

    /// The parent index, invalid for top-level items.
    pub fn parent(&self) -> ModelIndex {
        self.inner
            .as_ref()
            .map_or_else(ModelIndex::invalid, |pos| pos.parent.clone())
    }

    /// Returns `true` if the parent is a real item.
    pub fn has_parent(&self) -> bool {
        self.inner.as_ref().is_some_and(|pos| pos.parent.is_valid())
    }

    /// The model's handle for the item; 0 for the invalid index.
    #[inline]
    pub fn internal_id(&self) -> u64 {
        self.inner.as_ref().map_or(0, |pos| pos.internal_id)
    }

    /// Nesting level: top-level items are at depth 0, as is the invalid index.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(pos) = current.inner {
            depth += 1;
            current = pos.parent.clone();
        }
        depth
    }
}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(pos) => f
                .debug_struct("ModelIndex")
                .field("row", &pos.row)
                .field("column", &pos.column)
                .field("depth", &self.depth())
                .field("internal_id", &pos.internal_id)
                .finish(),
            None => write!(f, "ModelIndex(invalid)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert_eq!(index.column(), 0);
        assert_eq!(index.internal_id(), 0);
        assert!(!index.has_parent());
        assert!(!index.parent().is_valid());
        assert_eq!(index, ModelIndex::default());
    }

    #[test]
    fn test_parent_chain() {
        let top = ModelIndex::with_internal_id(0, 0, ModelIndex::invalid(), 1);
        let child = ModelIndex::with_internal_id(2, 1, top.clone(), 7);

        assert!(!top.has_parent());
        assert!(child.has_parent());
        assert_eq!(child.parent(), top);
        assert_eq!((child.row(), child.column(), child.internal_id()), (2, 1, 7));
        assert_eq!(top.depth(), 0);
        assert_eq!(child.depth(), 1);
        assert_eq!(ModelIndex::invalid().depth(), 0);
    }

    #[test]
    fn test_equality_is_structural() {
        let top = ModelIndex::with_internal_id(1, 0, ModelIndex::invalid(), 100);
        let same = ModelIndex::with_internal_id(1, 0, ModelIndex::invalid(), 100);
        let other_handle = ModelIndex::with_internal_id(1, 0, ModelIndex::invalid(), 101);
        let other_parent = ModelIndex::with_internal_id(1, 0, top.clone(), 100);

        assert_eq!(top, same);
        assert_ne!(top, other_handle);
        assert_ne!(top, other_parent);
        assert_ne!(top, ModelIndex::invalid());
    }

    #[test]
    fn test_usable_as_hash_key() {
        use std::collections::HashSet;

        let top = ModelIndex::with_internal_id(0, 0, ModelIndex::invalid(), 3);
        let set: HashSet<ModelIndex> = [
            top.clone(),
            ModelIndex::with_internal_id(0, 0, ModelIndex::invalid(), 3),
            ModelIndex::invalid(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&top));
    }
}
