//! Navigation contract: powerups report tab descriptors, the `webnav` crate
//! merges and annotates them.

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

/// One navigation entry as reported by a navigation powerup.
///
/// Constructed fresh for every navigation render; never persisted. The
/// `link` is usually left empty and filled in from the web translator when
/// the tree is annotated for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub name: String,
    /// Record the tab navigates to.
    pub target: RecordId,
    /// Higher sorts first among siblings.
    pub priority: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tab>,
    /// Pre-resolved link, overriding translator-generated URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Tab {
    pub fn new(name: impl Into<String>, target: RecordId, priority: f64) -> Self {
        Self {
            name: name.into(),
            target,
            priority,
            children: Vec::new(),
            link: None,
        }
    }

    pub fn with_children(mut self, children: Vec<Tab>) -> Self {
        self.children = children;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Powerup interface used by the web navigation plugin system.
///
/// Implementors are installed on a user's store; their tabs are retrieved
/// and merged when the navigation user-interface is generated.
pub trait NavigableElement: Send + Sync {
    fn tabs(&self) -> Vec<Tab>;
}
