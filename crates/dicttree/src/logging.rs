//! Logging and debugging facilities.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - A performance span guard used around tree construction
//! - [`ModelTreeDebug`], a text rendering of any [`ItemModel`]
//!
//! # Tracing Integration
//!
//! dicttree emits `tracing` events but never installs a subscriber. To see
//! logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("dicttree=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```ignore
//! use dicttree::logging::ModelTreeDebug;
//!
//! println!("{}", ModelTreeDebug::new().format_model(&model));
//! ```

use std::fmt::Write as FmtWrite;

use crate::model::{ItemModel, ItemRole, ModelIndex, Orientation};

/// Target names for log filtering.
pub mod targets {
    /// Model construction and lookups.
    pub const MODEL: &str = "dicttree::model";
    /// Adapter classification decisions.
    pub const ADAPTER: &str = "dicttree::adapter";
    /// Performance spans.
    pub const PERF: &str = "dicttree::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Plain indentation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to print the value column next to each key.
    pub show_values: bool,
    /// Whether to print the column headers as the first line.
    pub show_headers: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level in [`TreeStyle::Compact`].
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_values: true,
            show_headers: false,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Keys only, no header line.
    pub fn minimal() -> Self {
        Self {
            show_values: false,
            ..Default::default()
        }
    }
}

/// Renders an [`ItemModel`] as an indented text tree.
///
/// The model is walked exactly the way a tree view walks it: `row_count`,
/// `index`, `has_children` and `data`, starting from the invalid index.
#[derive(Debug, Clone, Default)]
pub struct ModelTreeDebug {
    options: TreeFormatOptions,
}

impl ModelTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every item reachable from the top level of `model`.
    pub fn format_model(&self, model: &dyn ItemModel) -> String {
        let mut output = String::new();

        if self.options.show_headers {
            let headers: Vec<String> = (0..model.column_count(&ModelIndex::invalid()))
                .map(|section| {
                    model
                        .header_data(section, Orientation::Horizontal, ItemRole::Display)
                        .to_string()
                })
                .collect();
            let _ = writeln!(output, "{}", headers.join(" | "));
        }

        let before = output.len();
        let mut open_levels = Vec::new();
        self.format_children(model, &ModelIndex::invalid(), &mut open_levels, &mut output);
        if output.len() == before {
            output.push_str("(empty)\n");
        }
        output
    }

    fn format_children(
        &self,
        model: &dyn ItemModel,
        parent: &ModelIndex,
        open_levels: &mut Vec<bool>,
        output: &mut String,
    ) {
        if self
            .options
            .max_depth
            .is_some_and(|max| open_levels.len() > max)
        {
            return;
        }

        // Terminal items report a row count of 1 without a navigable child,
        // so collect the valid indices first.
        let rows: Vec<ModelIndex> = (0..model.row_count(parent))
            .map(|row| model.index(row, 0, parent))
            .filter(ModelIndex::is_valid)
            .collect();

        for (i, index) in rows.iter().enumerate() {
            let is_last = i + 1 == rows.len();
            output.push_str(&self.build_prefix(open_levels, is_last));
            output.push_str(&model.display_text(index).unwrap_or_default());

            if self.options.show_values {
                let value = model.sibling(index, index.row(), 1);
                if let Some(text) = model.display_text(&value) {
                    let _ = write!(output, ": {text}");
                }
            }
            output.push('\n');

            if model.has_children(index) {
                open_levels.push(!is_last);
                self.format_children(model, index, open_levels, output);
                open_levels.pop();
            }
        }
    }

    /// Build the prefix for an item, given which ancestor levels still have
    /// siblings below them.
    fn build_prefix(&self, open_levels: &[bool], is_last: bool) -> String {
        let (branch, tee, corner, blank) = match self.options.style {
            TreeStyle::Ascii => ("|   ", "|-- ", "`-- ", "    "),
            TreeStyle::Unicode => ("\u{2502}   ", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} ", "    "),
            TreeStyle::Compact => {
                return " ".repeat(open_levels.len() * self.options.indent_size);
            }
        };

        let mut prefix = String::new();
        for &open in open_levels {
            prefix.push_str(if open { branch } else { blank });
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time tree construction.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValueTreeModel;
    use crate::source::parse_json;

    fn model() -> ValueTreeModel {
        ValueTreeModel::new(parse_json(r#"{"a": [1, 2], "b": "x"}"#).unwrap()).unwrap()
    }

    #[test]
    fn test_format_unicode() {
        let output = ModelTreeDebug::new().format_model(&model());
        let expected = "\
\u{251c}\u{2500}\u{2500} a: sequence (2)
\u{2502}   \u{251c}\u{2500}\u{2500} 0: 1
\u{2502}   \u{2514}\u{2500}\u{2500} 1: 2
\u{2514}\u{2500}\u{2500} b: x
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_ascii_minimal_with_headers() {
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            show_headers: true,
            ..TreeFormatOptions::minimal()
        };
        let output = ModelTreeDebug::with_options(options).format_model(&model());
        assert_eq!(output, "Key | Value\n|-- a\n|   |-- 0\n|   `-- 1\n`-- b\n");
    }

    #[test]
    fn test_format_compact_depth_limited() {
        let options = TreeFormatOptions {
            style: TreeStyle::Compact,
            max_depth: Some(0),
            ..Default::default()
        };
        let output = ModelTreeDebug::with_options(options).format_model(&model());
        assert_eq!(output, "a: sequence (2)\nb: x\n");
    }

    #[test]
    fn test_format_scalar_root_is_empty() {
        let model = ValueTreeModel::new(42).unwrap();
        assert_eq!(ModelTreeDebug::new().format_model(&model), "(empty)\n");
    }

    #[test]
    fn test_perf_span_without_subscriber() {
        let span = PerfSpan::new("test");
        drop(span);
    }
}
