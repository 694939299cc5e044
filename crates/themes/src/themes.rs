//! Theme registry and preference-aware resolution.
//!
//! Themes bundle named templates plus optional `<head>` content. The
//! registry is an explicit object handed to the private application at
//! construction: populated at startup, read-only afterwards, swappable as a
//! whole via `reload` for tests and hot-reload tooling. There is no ambient
//! global discovery.

use std::sync::{Arc, RwLock};

use shared::{Markup, TemplateRef};

/// A directory full of presentation information.
pub trait Theme: Send + Sync {
    fn name(&self) -> &str;

    /// Additional `<head>` content contributed whenever a themed page is
    /// rendered; appears before the fragment's own head content.
    fn head(&self) -> Option<Markup> {
        None
    }

    /// Look up a template by name within this theme.
    fn template(&self, name: &str) -> Option<TemplateRef>;
}

pub struct ThemeRegistry {
    // Whole-list swap on reload; readers clone the Arc and never observe a
    // partially updated registry.
    themes: RwLock<Arc<Vec<Arc<dyn Theme>>>>,
}

impl ThemeRegistry {
    pub fn new(themes: Vec<Arc<dyn Theme>>) -> Self {
        Self {
            themes: RwLock::new(Arc::new(themes)),
        }
    }

    /// Replace the registered theme list wholesale.
    pub fn reload(&self, themes: Vec<Arc<dyn Theme>>) {
        tracing::info!(count = themes.len(), "reloading theme registry");
        *self.themes.write().unwrap() = Arc::new(themes);
    }

    /// All themes in registration order.
    pub fn all(&self) -> Arc<Vec<Arc<dyn Theme>>> {
        Arc::clone(&self.themes.read().unwrap())
    }

    /// Themes in registration order, with the first theme matching
    /// `preferred` moved to the front. A preferred name that matches
    /// nothing leaves the order unchanged.
    pub fn resolved(&self, preferred: Option<&str>) -> Vec<Arc<dyn Theme>> {
        let mut themes: Vec<Arc<dyn Theme>> = self.all().as_ref().clone();
        if let Some(name) = preferred {
            reorder_for_preference(&mut themes, name);
        }
        themes
    }

    /// First template named `name` in resolved order, else `default`.
    pub fn template_for(
        &self,
        preferred: Option<&str>,
        name: &str,
        default: Option<TemplateRef>,
    ) -> Option<TemplateRef> {
        for theme in self.resolved(preferred) {
            if let Some(template) = theme.template(name) {
                return Some(template);
            }
        }
        default
    }

    /// Every theme's head content in resolved order, with the fragment's
    /// own contribution appended last.
    pub fn head_contents(
        &self,
        preferred: Option<&str>,
        fragment_head: Option<Markup>,
    ) -> Vec<Markup> {
        let mut extras: Vec<Markup> = self
            .resolved(preferred)
            .iter()
            .filter_map(|theme| theme.head())
            .collect();
        extras.extend(fragment_head);
        extras
    }
}

/// Stable reorder: move the first theme named `preferred` to the front.
fn reorder_for_preference(themes: &mut Vec<Arc<dyn Theme>>, preferred: &str) {
    if let Some(index) = themes.iter().position(|t| t.name() == preferred) {
        let theme = themes.remove(index);
        themes.insert(0, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Template;

    struct NamedTemplate(String);

    impl Template for NamedTemplate {
        fn name(&self) -> &str {
            &self.0
        }
    }

    struct TestTheme {
        name: &'static str,
        templates: Vec<&'static str>,
        head: Option<&'static str>,
    }

    impl Theme for TestTheme {
        fn name(&self) -> &str {
            self.name
        }

        fn head(&self) -> Option<Markup> {
            self.head.map(Markup::from)
        }

        fn template(&self, name: &str) -> Option<TemplateRef> {
            self.templates
                .contains(&name)
                .then(|| Arc::new(NamedTemplate(format!("{}/{name}", self.name))) as TemplateRef)
        }
    }

    fn registry() -> ThemeRegistry {
        ThemeRegistry::new(vec![
            Arc::new(TestTheme {
                name: "alpha",
                templates: vec!["shell", "profile"],
                head: Some("<style>alpha</style>"),
            }),
            Arc::new(TestTheme {
                name: "beta",
                templates: vec!["shell"],
                head: None,
            }),
            Arc::new(TestTheme {
                name: "gamma",
                templates: vec!["profile"],
                head: Some("<style>gamma</style>"),
            }),
        ])
    }

    fn names(themes: &[Arc<dyn Theme>]) -> Vec<&str> {
        themes.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn preferred_theme_moves_to_front() {
        let registry = registry();
        assert_eq!(
            names(&registry.resolved(Some("beta"))),
            vec!["beta", "alpha", "gamma"]
        );
    }

    #[test]
    fn absent_preference_keeps_registration_order() {
        let registry = registry();
        assert_eq!(
            names(&registry.resolved(Some("delta"))),
            vec!["alpha", "beta", "gamma"]
        );
        assert_eq!(
            names(&registry.resolved(None)),
            vec!["alpha", "beta", "gamma"]
        );
    }

    #[test]
    fn template_lookup_follows_resolved_order() {
        let registry = registry();
        let template = registry
            .template_for(Some("gamma"), "profile", None)
            .expect("profile exists");
        assert_eq!(template.name(), "gamma/profile");

        let template = registry
            .template_for(None, "profile", None)
            .expect("profile exists");
        assert_eq!(template.name(), "alpha/profile");
    }

    #[test]
    fn missing_template_falls_back_to_default() {
        let registry = registry();
        assert!(registry.template_for(None, "missing", None).is_none());

        let fallback: TemplateRef = Arc::new(NamedTemplate("fallback".into()));
        let template = registry
            .template_for(None, "missing", Some(fallback))
            .expect("default applies");
        assert_eq!(template.name(), "fallback");
    }

    #[test]
    fn head_contents_append_fragment_head_last() {
        let registry = registry();
        let heads = registry.head_contents(Some("gamma"), Some(Markup::from("<meta/>")));
        assert_eq!(
            heads,
            vec![
                Markup::from("<style>gamma</style>"),
                Markup::from("<style>alpha</style>"),
                Markup::from("<meta/>"),
            ]
        );
    }

    #[test]
    fn reload_swaps_the_theme_list() {
        let registry = registry();
        registry.reload(vec![Arc::new(TestTheme {
            name: "solo",
            templates: vec![],
            head: None,
        })]);
        assert_eq!(names(&registry.resolved(None)), vec!["solo"]);
    }
}
