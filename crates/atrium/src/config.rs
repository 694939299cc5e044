use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Server configuration, read from `atrium.toml` next to the binary.
/// Every field has a default so the file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtriumConfig {
    /// Address the HTTP listener binds to.
    pub bind: String,
    /// Path segment of the private application, `/<prefix>/<token>`.
    pub prefix: String,
    /// Theme consulted first for template lookup.
    pub preferred_theme: Option<String>,
}

impl Default for AtriumConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_owned(),
            prefix: "private".to_owned(),
            preferred_theme: None,
        }
    }
}

impl AtriumConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {path:?}"))?;
        toml::from_str(&content).with_context(|| format!("parsing config at {path:?}"))
    }
}
