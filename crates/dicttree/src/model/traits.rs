//! Core traits for the Model/View contract.
//!
//! This module defines the read-only interface a host tree view uses to
//! query a hierarchical model.

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// Flags describing how a view may interact with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// Item can be selected.
    pub selectable: bool,
    /// Item is enabled (can interact).
    pub enabled: bool,
    /// Item should never have children (lets views skip the expander).
    pub never_has_children: bool,
}

impl ItemFlags {
    /// Creates flags with all defaults (selectable and enabled only).
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// Creates flags for a disabled item.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Sets the never-has-children flag.
    pub fn with_never_has_children(mut self, never: bool) -> Self {
        self.never_has_children = never;
        self
    }
}

/// The trait a host view uses to read hierarchical data.
///
/// `ItemModel` addresses items by `(row, column, parent)`. The invalid index
/// stands for the implicit root, so top-level items are requested with
/// `index(row, column, &ModelIndex::invalid())`.
///
/// # Implementation Requirements
///
/// - [`row_count`](ItemModel::row_count) - Number of rows under a parent
/// - [`column_count`](ItemModel::column_count) - Number of columns
/// - [`data`](ItemModel::data) - Data for a given index and role
/// - [`index`](ItemModel::index) - Create an index for a position
/// - [`parent`](ItemModel::parent) - Get the parent of an index
///
/// None of these may panic on out-of-range input: return
/// `ModelIndex::invalid()` or `ItemData::None` instead, since the caller
/// is a UI event loop.
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the number of columns for children of the given parent.
    fn column_count(&self, parent: &ModelIndex) -> usize;

    /// Returns the data stored under the given role for the item at index.
    ///
    /// Return `ItemData::None` if the index is invalid, the role is not
    /// supported, or there's no data for that role.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Creates a model index for the given row and column under parent.
    ///
    /// Return `ModelIndex::invalid()` if the position is out of bounds.
    fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex;

    /// Returns the parent of the given index.
    ///
    /// Return `ModelIndex::invalid()` for top-level items and invalid indices.
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns the flags for the item at the given index.
    ///
    /// The default returns selectable and enabled flags.
    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    /// Returns `true` if the item at parent has any children.
    ///
    /// The default implementation checks if `row_count(parent) > 0`.
    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    /// Returns header data for the given section.
    ///
    /// - For horizontal headers, `section` is the column index
    /// - For vertical headers, `section` is the row index
    ///
    /// The default returns `ItemData::None`.
    fn header_data(&self, _section: usize, _orientation: Orientation, _role: ItemRole) -> ItemData {
        ItemData::None
    }

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns the display text for an item, rendering non-string data as text.
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        match self.data(index, ItemRole::Display) {
            ItemData::None => None,
            data => Some(data.to_string()),
        }
    }

    /// Creates a sibling index at the given row and column.
    ///
    /// This validates against the model.
    fn sibling(&self, index: &ModelIndex, row: usize, column: usize) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }
        self.index(row, column, &index.parent())
    }
}

/// Header orientation for `header_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal header (column headers).
    Horizontal,
    /// Vertical header (row headers).
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlatModel {
        items: Vec<&'static str>,
    }

    impl ItemModel for FlatModel {
        fn row_count(&self, parent: &ModelIndex) -> usize {
            if parent.is_valid() { 0 } else { self.items.len() }
        }

        fn column_count(&self, _parent: &ModelIndex) -> usize {
            1
        }

        fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
            match (self.items.get(index.row()), role) {
                (Some(item), ItemRole::Display) if index.is_valid() => ItemData::from(*item),
                _ => ItemData::None,
            }
        }

        fn index(&self, row: usize, column: usize, parent: &ModelIndex) -> ModelIndex {
            if parent.is_valid() || row >= self.items.len() || column > 0 {
                ModelIndex::invalid()
            } else {
                ModelIndex::with_internal_id(row, column, ModelIndex::invalid(), row as u64)
            }
        }

        fn parent(&self, _index: &ModelIndex) -> ModelIndex {
            ModelIndex::invalid()
        }
    }

    #[test]
    fn test_item_flags() {
        let flags = ItemFlags::new();
        assert!(flags.selectable);
        assert!(flags.enabled);
        assert!(!flags.never_has_children);

        let disabled = ItemFlags::disabled();
        assert!(!disabled.enabled);
        assert!(!disabled.selectable);

        assert!(ItemFlags::new().with_never_has_children(true).never_has_children);
    }

    #[test]
    fn test_default_methods() {
        let model = FlatModel {
            items: vec!["apple", "banana"],
        };
        let root = ModelIndex::invalid();

        assert!(model.has_children(&root));
        let first = model.index(0, 0, &root);
        assert_eq!(model.display_text(&first), Some("apple".to_string()));

        let second = model.sibling(&first, 1, 0);
        assert_eq!(model.display_text(&second), Some("banana".to_string()));
        assert!(!model.sibling(&first, 5, 0).is_valid());
        assert!(!model.sibling(&root, 0, 0).is_valid());
        assert!(model.header_data(0, Orientation::Horizontal, ItemRole::Display).is_none());
    }
}
