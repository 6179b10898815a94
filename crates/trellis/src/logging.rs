//! Logging and debugging facilities for Trellis.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - Debug visualization for element trees, including resource counts
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("trellis::items=trace,trellis_style::resolve=debug")
//!         .init();
//! }
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use trellis::element::ElementTree;
//! use trellis::logging::ElementTreeDebug;
//!
//! let mut tree = ElementTree::new();
//! tree.add_child(tree.root(), "Window").unwrap();
//!
//! let output = ElementTreeDebug::new().format_tree(&tree).unwrap();
//! assert!(output.contains("Window"));
//! ```

use crate::element::{ElementId, ElementTree};
use crate::error::ElementResult;

/// Span names used throughout Trellis for tracing.
pub mod span_names {
    /// Container realization pass span.
    pub const REALIZE: &str = "trellis::realize";
    /// Resource lookup span.
    pub const RESOURCE_LOOKUP: &str = "trellis::resource_lookup";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Element tree target.
    pub const ELEMENT: &str = "trellis::element";
    /// Item container generation target.
    pub const ITEMS: &str = "trellis::items";
    /// Input event target.
    pub const INPUT: &str = "trellis::input";
    /// Resource resolution target.
    pub const RESOLVE: &str = trellis_style::resolve::TARGET;
    /// Performance span target.
    pub const PERF: &str = "trellis::perf";
}

/// Style options for element tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for element tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show element IDs.
    pub show_ids: bool,
    /// Whether to show type names.
    pub show_types: bool,
    /// Whether to show resource counts and requested theme variants.
    pub show_resources: bool,
    /// Whether to mark hidden elements.
    pub show_visibility: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_types: true,
            show_resources: false,
            show_visibility: true,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_resources: true,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_types: false,
            show_resources: false,
            show_visibility: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing element trees.
#[derive(Debug, Clone, Default)]
pub struct ElementTreeDebug {
    options: TreeFormatOptions,
}

impl ElementTreeDebug {
    /// Create a new debug visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a debug visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole tree from the application root.
    pub fn format_tree(&self, tree: &ElementTree) -> ElementResult<String> {
        let mut output = format!("Element Tree ({} total elements):\n", tree.len());
        self.format_subtree_into(tree, tree.root(), &mut Vec::new(), &mut output)?;
        Ok(output)
    }

    /// Format a subtree starting from a specific element.
    pub fn format_subtree(&self, tree: &ElementTree, root: ElementId) -> ElementResult<String> {
        let mut output = String::new();
        self.format_subtree_into(tree, root, &mut Vec::new(), &mut output)?;
        Ok(output)
    }

    /// `lasts` holds, per ancestor level, whether that ancestor was the last
    /// child of its parent.
    fn format_subtree_into(
        &self,
        tree: &ElementTree,
        id: ElementId,
        lasts: &mut Vec<bool>,
        output: &mut String,
    ) -> ElementResult<()> {
        let depth = lasts.len();
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        output.push_str(&self.build_prefix(lasts));

        let name = tree.name(id)?;
        output.push_str(if name.is_empty() { "(unnamed)" } else { name });

        if self.options.show_ids {
            output.push_str(&format!(" [{id:?}]"));
        }
        if self.options.show_types {
            output.push_str(&format!(" ({})", tree.type_name(id)?));
        }
        if self.options.show_resources {
            let count = tree.resource_count(id);
            if count > 0 {
                output.push_str(&format!(" {{{count} resources}}"));
            }
            if let Some(variant) = tree.requested_theme_variant(id)? {
                output.push_str(&format!(" theme={variant}"));
            }
        }
        if self.options.show_visibility && !tree.is_visible(id)? {
            output.push_str(" hidden");
        }
        output.push('\n');

        let children = tree.children(id)?;
        let count = children.len();
        for (i, &child) in children.iter().enumerate() {
            lasts.push(i + 1 == count);
            self.format_subtree_into(tree, child, lasts, output)?;
            lasts.pop();
        }
        Ok(())
    }

    fn build_prefix(&self, lasts: &[bool]) -> String {
        let Some((&is_last, parents)) = lasts.split_last() else {
            return String::new();
        };

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|  ", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}  ", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
        };

        let mut prefix = String::new();
        for &parent_last in parents {
            prefix.push_str(if parent_last { "   " } else { branch });
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for tracking the duration of realization passes and bulk lookups.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_style::resources::{ResourceValue, ThemeVariant};

    fn sample() -> (ElementTree, ElementId, ElementId) {
        let mut tree = ElementTree::new();
        let window = tree.add_child(tree.root(), "Window").unwrap();
        tree.set_name(window, "main").unwrap();
        let panel = tree.add_child(window, "StackPanel").unwrap();
        tree.add_child(window, "Button").unwrap();
        (tree, window, panel)
    }

    #[test]
    fn format_tree_lists_every_element() {
        let (tree, _, _) = sample();
        let output = ElementTreeDebug::with_options(TreeFormatOptions::minimal())
            .format_tree(&tree)
            .unwrap();

        assert!(output.starts_with("Element Tree (4 total elements):"));
        assert!(output.contains("Application\n"));
        assert!(output.contains("\u{2514}\u{2500}\u{2500} main\n"));
        assert_eq!(output.matches("(unnamed)").count(), 2);
    }

    #[test]
    fn ascii_style_and_types() {
        let (tree, window, _) = sample();
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            show_ids: false,
            ..Default::default()
        };
        let output = ElementTreeDebug::with_options(options)
            .format_subtree(&tree, window)
            .unwrap();

        assert_eq!(
            output,
            "main (Window)\n+-- (unnamed) (StackPanel)\n`-- (unnamed) (Button)\n"
        );
    }

    #[test]
    fn detailed_shows_resources_theme_and_visibility() {
        let (mut tree, window, panel) = sample();
        tree.resources_mut(window)
            .unwrap()
            .insert("x", ResourceValue::new(1_i32));
        tree.set_requested_theme_variant(window, Some(ThemeVariant::DARK))
            .unwrap();
        tree.set_visible(panel, false).unwrap();

        let output = ElementTreeDebug::with_options(TreeFormatOptions::detailed())
            .format_subtree(&tree, window)
            .unwrap();

        assert!(output.contains("{1 resources} theme=Dark"));
        assert!(output.contains("(StackPanel) hidden"));
    }

    #[test]
    fn max_depth_limits_output() {
        let (tree, _, _) = sample();
        let options = TreeFormatOptions {
            max_depth: Some(0),
            ..TreeFormatOptions::minimal()
        };
        let output = ElementTreeDebug::with_options(options)
            .format_tree(&tree)
            .unwrap();

        assert!(!output.contains("main"));
    }

    #[test]
    fn perf_span_enters_and_drops() {
        let span = PerfSpan::new(span_names::REALIZE);
        drop(span);
    }
}
