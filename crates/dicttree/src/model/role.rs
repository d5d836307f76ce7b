//! Data roles for item models.
//!
//! Roles define what type of data is being requested from a model item.
//! The value tree only answers [`ItemRole::Display`]; the remaining roles
//! exist so hosts can ask for them and receive `ItemData::None`.

use std::fmt;

use crate::value::Value;

/// Standard roles for accessing different aspects of item data.
///
/// When querying data from a model via `ItemModel::data()`, the role specifies
/// what information is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Primary text to display.
    Display,
    /// Icon or decoration to show.
    Decoration,
    /// Value for editing.
    Edit,
    /// Tooltip text shown on hover.
    ToolTip,
    /// Text shown in the status bar when the item is selected.
    StatusTip,
    /// Application-specific data, `User(n)` for n >= 0.
    User(u32),
}

/// Container for item data returned to a host view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ItemData {
    /// No data.
    #[default]
    None,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Floating point data.
    Float(f64),
    /// Boolean data.
    Bool(bool),
}

impl ItemData {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` if this contains some data.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Attempts to get the data as a string slice.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s.as_str()),
            _ => None,
        }
    }


    /// Attempts to get the data as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ItemData::Int(n) => Some(*n),
            _ => None,
        }
    }


}

/// Renders the data as a view would print it; `None` renders as empty text.
impl fmt::Display for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemData::None => Ok(()),
            ItemData::String(s) => write!(f, "{s}"),
            ItemData::Int(n) => write!(f, "{n}"),
            ItemData::Float(n) => write!(f, "{n}"),
            ItemData::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_string())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

impl From<usize> for ItemData {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| ItemData::String(n.to_string()), ItemData::Int)
    }
}

impl From<f64> for ItemData {
    fn from(n: f64) -> Self {
        ItemData::Float(n)
    }
}

impl From<bool> for ItemData {
    fn from(b: bool) -> Self {
        ItemData::Bool(b)
    }
}

/// Converts a terminal value to its display data.
///
/// Byte strings are decoded lossily, custom payloads show their type name,
/// and null shows nothing.
impl From<&Value> for ItemData {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => ItemData::None,
            Value::Bool(b) => ItemData::Bool(*b),
            Value::Int(n) => ItemData::Int(*n),
            Value::UInt(n) => i64::try_from(*n).map_or_else(|_| ItemData::String(n.to_string()), ItemData::Int),
            Value::Float(n) => ItemData::Float(*n),
            Value::String(s) => ItemData::String(s.clone()),
            other => ItemData::String(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_item_data_string() {
        let data = ItemData::from("hello");
        assert_eq!(data.as_string(), Some("hello"));
        assert!(data.as_int().is_none());
    }

    #[test]
    fn test_item_data_from_value() {
        assert_eq!(ItemData::from(&Value::Int(42)), ItemData::Int(42));
        assert_eq!(ItemData::from(&Value::Null), ItemData::None);
        assert_eq!(
            ItemData::from(&Value::bytes(b"raw".to_vec())),
            ItemData::String("raw".into())
        );

        struct Handle;
        assert_eq!(
            ItemData::from(&Value::custom(Handle)),
            ItemData::String("<Handle>".into())
        );
    }

    #[test]
    fn test_large_unsigned_values_keep_every_digit() {
        assert_eq!(
            ItemData::from(&Value::UInt(u64::MAX)),
            ItemData::String("18446744073709551615".into())
        );
        assert_eq!(ItemData::from(&Value::UInt(7)), ItemData::Int(7));
        assert_eq!(ItemData::from(usize::MAX).to_string(), usize::MAX.to_string());
        assert_eq!(ItemData::from(3usize), ItemData::Int(3));
    }

    #[test]
    fn test_item_data_display() {
        assert_eq!(ItemData::None.to_string(), "");
        assert_eq!(ItemData::Int(7).to_string(), "7");
        assert_eq!(ItemData::Bool(false).to_string(), "false");
    }
}
