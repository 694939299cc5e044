//! Opaque handles for content produced and consumed by the external
//! templating engine. Atrium never flattens markup itself; it only carries
//! these values between fragments, themes and the page shell.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A piece of already-flattened content, treated as opaque by this layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markup(String);

impl Markup {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Markup {
    fn from(content: &str) -> Self {
        Self(content.to_owned())
    }
}

impl From<String> for Markup {
    fn from(content: String) -> Self {
        Self(content)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named template owned by the external templating engine.
///
/// The engine decides what a template actually is; this layer only needs a
/// stable name for lookup and error reporting.
pub trait Template: Send + Sync {
    fn name(&self) -> &str;
}

pub type TemplateRef = Arc<dyn Template>;
