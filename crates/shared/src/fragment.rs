//! Displayable fragments: the unit of content the private application wraps
//! with navigation, theming and header/footer chrome.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::markup::{Markup, TemplateRef};

/// A fragment's declared need for client/server state.
///
/// Exactly three states; page wrapper selection keys off this and nothing
/// else.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Liveness {
    /// Plain request/response rendering, no session object.
    Stateless,
    /// Server-held session the client addresses for partial updates.
    SessionBound,
    /// Bidirectional update channel between client and server.
    Live,
}

/// Error raised by a session-bound fragment's handler dispatch.
#[derive(Debug, Error)]
pub enum SessionCallError {
    #[error("no handler named '{0}'")]
    UnknownHandler(String),

    #[error("handler '{name}' failed: {message}")]
    Failed { name: String, message: String },
}

/// A named callback a session-bound page exposes to its client.
pub type SessionHandler = Arc<dyn Fn(&[&str]) -> Result<Markup, SessionCallError> + Send + Sync>;

/// Capability of a record to render inside the private application shell.
///
/// Before render, exactly one of `template()` or a theme lookup on
/// `template_name()` must produce a usable template; anything else is a
/// configuration error, not a user-input problem.
pub trait NavigableFragment: Send + Sync {
    /// Title shown in the page chrome.
    fn title(&self) -> String;

    fn liveness(&self) -> Liveness;

    /// Name used to look the template up in the active themes.
    fn template_name(&self) -> Option<String> {
        None
    }

    /// Explicit template, overriding any theme lookup. Quick-and-dirty
    /// development aid; prefer `template_name` so the visual style stays
    /// with the themes.
    fn template(&self) -> Option<TemplateRef> {
        None
    }

    /// Additional `<head>` content, appended after all theme contributions.
    fn head(&self) -> Option<Markup> {
        None
    }

    /// The fragment's flattened body content.
    fn content(&self) -> Markup;

    /// Named handlers for session-bound pages. Validated once at page
    /// construction; unknown names fail fast instead of at call time.
    fn session_handlers(&self) -> Vec<(String, SessionHandler)> {
        Vec::new()
    }
}
