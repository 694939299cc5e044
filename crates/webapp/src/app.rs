use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use themes::ThemeRegistry;
use webid::PrivateKey;

use shared::{
    DefaultPowerup, IdGenerator, RecordId, SessionId, StoreAdmin, TemplateRef, WebTranslator,
};

/// Environment switch enabling the introspection affordance on live pages.
/// Any set value counts; unset means off.
pub const DEV_MODE_ENV: &str = "ATRIUM_DEV";

/// Root of a private, navigable web application; one per user store.
///
/// Owns the installation's private key (generated once, stable for the
/// lifetime of the store), the preferred-theme name and the hit counter.
/// All link translation for the installation goes through here.
pub struct PrivateApplication {
    prefix: String,
    key: PrivateKey,
    preferred_theme: RwLock<Option<String>>,
    hit_count: AtomicU64,
    themes: Arc<ThemeRegistry>,
    dev_mode: bool,
    sessions: IdGenerator,
}

pub struct PrivateApplicationBuilder {
    themes: Arc<ThemeRegistry>,
    prefix: String,
    key: Option<PrivateKey>,
    preferred_theme: Option<String>,
    dev_mode: Option<bool>,
}

impl PrivateApplicationBuilder {
    pub fn new(themes: Arc<ThemeRegistry>) -> Self {
        Self {
            themes,
            prefix: "private".to_owned(),
            key: None,
            preferred_theme: None,
            dev_mode: None,
        }
    }

    /// Fixed per-installation path segment; defaults to `private`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Reuse a persisted key instead of generating a fresh one. Required
    /// when rehydrating an installation, since tokens must stay stable.
    pub fn with_key(mut self, key: PrivateKey) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_preferred_theme(mut self, name: impl Into<String>) -> Self {
        self.preferred_theme = Some(name.into());
        self
    }

    /// Override the environment-driven development mode (tests).
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = Some(dev_mode);
        self
    }

    pub fn build(self) -> PrivateApplication {
        let key = self.key.unwrap_or_else(PrivateKey::generate);
        let dev_mode = self
            .dev_mode
            .unwrap_or_else(|| std::env::var_os(DEV_MODE_ENV).is_some());
        tracing::info!(prefix = %self.prefix, dev_mode, "private application ready");
        PrivateApplication {
            prefix: self.prefix,
            key,
            preferred_theme: RwLock::new(self.preferred_theme),
            hit_count: AtomicU64::new(0),
            themes: self.themes,
            dev_mode,
            sessions: IdGenerator::new(1),
        }
    }
}

impl PrivateApplication {
    pub fn builder(themes: Arc<ThemeRegistry>) -> PrivateApplicationBuilder {
        PrivateApplicationBuilder::new(themes)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn key(&self) -> PrivateKey {
        self.key
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.preferred_theme.read().unwrap().clone()
    }

    pub fn set_preferred_theme(&self, name: Option<String>) {
        *self.preferred_theme.write().unwrap() = name;
    }

    /// Number of page loads served by this application.
    pub fn hit_count(&self) -> u64 {
        self.hit_count.load(Ordering::Relaxed)
    }

    pub(crate) fn record_hit(&self) {
        self.hit_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub(crate) fn next_session(&self) -> SessionId {
        SessionId::new(self.sessions.next())
    }

    /// Install the default powerups the application depends on: settings,
    /// the preference machinery and the search aggregator. Idempotent
    /// through the store's find-or-create contract.
    pub fn install_on(&self, store: &mut dyn StoreAdmin) {
        for powerup in [
            DefaultPowerup::Settings,
            DefaultPowerup::PreferenceAggregator,
            DefaultPowerup::DefaultPreferenceCollection,
            DefaultPowerup::SearchAggregator,
        ] {
            let id = store.find_or_create(powerup);
            tracing::debug!(?powerup, %id, "default powerup installed");
        }
    }
}

impl WebTranslator for PrivateApplication {
    fn link_to(&self, id: RecordId) -> String {
        format!("/{}/{}", self.prefix, webid::encode(self.key, id))
    }

    fn link_from(&self, web_id: &str) -> Option<RecordId> {
        webid::decode(self.key, web_id).ok()
    }

    fn template_for(&self, name: &str, default: Option<TemplateRef>) -> Option<TemplateRef> {
        self.themes
            .template_for(self.preferred_theme().as_deref(), name, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PrivateApplication {
        PrivateApplication::builder(Arc::new(ThemeRegistry::new(Vec::new())))
            .with_key(PrivateKey::new(0xA11CE))
            .with_dev_mode(false)
            .build()
    }

    #[test]
    fn links_round_trip_through_the_translator() {
        let app = app();
        let id = RecordId::new(31337);
        let link = app.link_to(id);
        let token = link
            .strip_prefix("/private/")
            .expect("links carry the prefix");
        assert_eq!(app.link_from(token), Some(id));
    }

    #[test]
    fn foreign_tokens_translate_to_none() {
        let app = app();
        assert_eq!(app.link_from("not-a-token"), None);

        let other = PrivateApplication::builder(Arc::new(ThemeRegistry::new(Vec::new())))
            .with_key(PrivateKey::new(0xB0B))
            .with_dev_mode(false)
            .build();
        let foreign = other.link_to(RecordId::new(1));
        let token = foreign.strip_prefix("/private/").expect("prefixed");
        assert_eq!(app.link_from(token), None);
    }

    #[test]
    fn preferred_theme_is_updatable() {
        let app = app();
        assert_eq!(app.preferred_theme(), None);
        app.set_preferred_theme(Some("calm".into()));
        assert_eq!(app.preferred_theme(), Some("calm".into()));
    }

    #[test]
    fn session_ids_are_unique_per_application() {
        let app = app();
        assert_ne!(app.next_session(), app.next_session());
    }
}
