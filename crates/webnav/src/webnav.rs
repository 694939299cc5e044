//! Hierarchical navigation: merging tab descriptors from every installed
//! navigation powerup and annotating the merged tree for one request.
//!
//! Annotation is a pure transformation. The descriptor tree handed in is
//! never mutated, so callers may cache it or share it between requests.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use shared::{NavigableElement, Tab, WebTranslator};

/// Merge the root tabs of all navigation elements into one tree.
///
/// Siblings are ordered by descending priority; ties keep insertion order,
/// so the output is stable across calls. Duplicate targets reported by
/// different elements both appear; nothing deduplicates here.
pub fn collect_tabs(elements: &[Arc<dyn NavigableElement>]) -> Vec<Tab> {
    let mut tabs: Vec<Tab> = elements.iter().flat_map(|e| e.tabs()).collect();
    sort_tree(&mut tabs);
    tracing::debug!(
        roots = tabs.len(),
        elements = elements.len(),
        "collected navigation tabs"
    );
    tabs
}

fn sort_tree(tabs: &mut [Tab]) {
    // Stable sort keeps insertion order among equal priorities.
    tabs.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    for tab in tabs {
        sort_tree(&mut tab.children);
    }
}

/// Render style of one annotated navigation node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavStyle {
    /// The node, or something beneath it, is on the current path.
    Selected,
    /// Ordinary rendering; children collapse into the subtabs slot.
    Plain,
}

/// An annotated copy of a tab, ready for one request's render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub name: String,
    pub link: String,
    /// Exact match between this node's link and the request path.
    pub selected: bool,
    pub style: NavStyle,
    /// Annotated children; only meaningful for rendering when non-empty.
    pub subtabs: Vec<NavEntry>,
}

/// Annotate a tab tree against the current request path.
///
/// A node is `selected` when its link equals `current_path`; a node renders
/// in selected style when it is selected or carries a selected node beneath
/// it, so the ancestor chain of the matched leaf lights up. Links missing
/// from the descriptors are generated through the translator.
pub fn annotate(
    tabs: &[Tab],
    current_path: &str,
    translator: &dyn WebTranslator,
) -> Vec<NavEntry> {
    tabs.iter()
        .map(|tab| annotate_tab(tab, current_path, translator))
        .collect()
}

fn annotate_tab(tab: &Tab, current_path: &str, translator: &dyn WebTranslator) -> NavEntry {
    let link = tab
        .link
        .clone()
        .unwrap_or_else(|| translator.link_to(tab.target));
    let selected = link == current_path;
    let subtabs = annotate(&tab.children, current_path, translator);
    let style = if selected || subtabs.iter().any(|c| c.style == NavStyle::Selected) {
        NavStyle::Selected
    } else {
        NavStyle::Plain
    };
    NavEntry {
        name: tab.name.clone(),
        link,
        selected,
        style,
        subtabs,
    }
}
