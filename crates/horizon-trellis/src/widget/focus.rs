//! Focus diagnostics for widget trees.
//!
//! Focus state lives inside the tree itself: each container tracks which of
//! its children holds focus, and each widget carries its own focus flag.
//! This module provides read-only helpers that walk that chain from a root
//! down to the focused leaf, mainly for logging and debugging.
//!
//! # Usage
//!
//! ```ignore
//! use horizon_trellis::widget::focus;
//!
//! let path = focus::focus_path(&panel);
//! tracing::debug!(path = %path.join(" > "), "focus after navigation");
//! ```

use super::traits::Widget;

/// Collect the names of widgets along the focus chain.
///
/// Returns the chain from `root` down to the focused leaf, inclusive.
/// Returns an empty vector if `root` itself is not focused, meaning
/// nothing in this tree holds focus.
pub fn focus_path(root: &dyn Widget) -> Vec<String> {
    let mut path = Vec::new();
    if !root.is_focused() {
        return path;
    }
    path.push(root.name().to_string());
    let mut current = root;
    while let Some(child) = current.focused_child() {
        path.push(child.name().to_string());
        current = child;
    }
    path
}

/// Walk to the deepest focused widget under `root`.
///
/// Returns `None` if `root` is not focused. A focused widget with no
/// focused child is its own leaf, so a focused root with an empty subtree
/// returns itself.
pub fn focused_leaf(root: &dyn Widget) -> Option<&dyn Widget> {
    if !root.is_focused() {
        return None;
    }
    let mut current = root;
    while let Some(child) = current.focused_child() {
        current = child;
    }
    Some(current)
}

/// Format the focus chain for log output.
///
/// Produces `"panel > list > button"` style output, or `"(unfocused)"`
/// when nothing under `root` holds focus.
pub fn format_focus_path(root: &dyn Widget) -> String {
    let path = focus_path(root);
    if path.is_empty() {
        "(unfocused)".to_string()
    } else {
        path.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::super::base::WidgetBase;
    use super::*;

    struct Chain {
        base: WidgetBase,
        child: Option<Box<Chain>>,
    }

    impl Chain {
        fn leaf(name: &str) -> Self {
            let mut base = WidgetBase::with_name(name);
            base.set_focusable(true);
            Self { base, child: None }
        }

        fn over(name: &str, child: Chain) -> Self {
            let mut base = WidgetBase::with_name(name);
            base.set_focusable(true);
            Self {
                base,
                child: Some(Box::new(child)),
            }
        }

        fn focus_all(&mut self) {
            self.base.set_focused(true);
            if let Some(child) = &mut self.child {
                child.focus_all();
            }
        }
    }

    impl Widget for Chain {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn focused_child(&self) -> Option<&dyn Widget> {
            self.child
                .as_deref()
                .filter(|child| child.is_focused())
                .map(|child| child as &dyn Widget)
        }
    }

    #[test]
    fn test_focus_path_unfocused_root() {
        let root = Chain::leaf("root");
        assert!(focus_path(&root).is_empty());
        assert!(focused_leaf(&root).is_none());
        assert_eq!(format_focus_path(&root), "(unfocused)");
    }

    #[test]
    fn test_focus_path_single_widget() {
        let mut root = Chain::leaf("root");
        root.focus_all();
        assert_eq!(focus_path(&root), vec!["root"]);
        assert_eq!(focused_leaf(&root).map(|w| w.name().to_string()), Some("root".into()));
    }

    #[test]
    fn test_focus_path_walks_chain() {
        let mut root = Chain::over("window", Chain::over("panel", Chain::leaf("button")));
        root.focus_all();

        assert_eq!(focus_path(&root), vec!["window", "panel", "button"]);
        assert_eq!(format_focus_path(&root), "window > panel > button");
        assert_eq!(
            focused_leaf(&root).map(|w| w.name().to_string()),
            Some("button".into())
        );
    }

    #[test]
    fn test_focus_path_stops_at_unfocused_child() {
        let mut root = Chain::over("window", Chain::leaf("button"));
        root.base.set_focused(true); // Child flag stays clear

        assert_eq!(focus_path(&root), vec!["window"]);
        assert_eq!(
            focused_leaf(&root).map(|w| w.name().to_string()),
            Some("window".into())
        );
    }
}
