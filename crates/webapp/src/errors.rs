use thiserror::Error;

/// Configuration defects surfaced as hard failures.
///
/// These indicate a broken deployment or installation, never bad user
/// input; not-found conditions are handled as values inside the dispatcher
/// instead.
#[derive(Debug, Error)]
pub enum WebAppError {
    #[error("fragment '{fragment}' names template '{template}', but no installed theme provides it")]
    MissingTemplate { fragment: String, template: String },

    #[error("fragment '{fragment}' declares neither a template name nor an explicit template")]
    NoTemplate { fragment: String },

    #[error("fragment '{fragment}' registers session handler '{name}' more than once")]
    DuplicateHandler { fragment: String, name: String },
}
