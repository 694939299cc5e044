use std::sync::Arc;

use shared::{Adaptation, Liveness, NavigableFragment, Store, TemplateRef, WebResource, WebTranslator};

use crate::app::PrivateApplication;
use crate::components::PageComponents;
use crate::errors::WebAppError;
use crate::wrappers::{LivePage, Page, SessionPage, StatelessPage};

/// Outcome of resolving a request path against the private application.
///
/// Not-found is a value here, never an error: the hosting server maps it to
/// its own not-found response. `Err(WebAppError)` is reserved for
/// configuration defects.
pub enum Resolution {
    Page(Page),
    /// Raw resource bypassing the page shell entirely.
    Resource(Arc<dyn WebResource>),
    /// The bare root redirecting to the first navigation entry.
    Redirect(String),
    NotFound,
}

impl PrivateApplication {
    /// Resolve the trailing token of `/<prefix>/<token>` to a page.
    pub fn resolve(&self, store: &dyn Store, token: &str) -> Result<Resolution, WebAppError> {
        let id = match webid::decode(self.key(), token) {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(token, %err, "token did not translate");
                return Ok(Resolution::NotFound);
            }
        };

        let Some(record) = store.record(id) else {
            tracing::debug!(%id, "no record behind token");
            return Ok(Resolution::NotFound);
        };

        match record.adapt() {
            Adaptation::Resource(resource) => Ok(Resolution::Resource(resource)),
            Adaptation::Fragment(fragment) => {
                let page = self.wrap_fragment(store, fragment, token)?;
                self.record_hit();
                Ok(Resolution::Page(page))
            }
            Adaptation::Unhandled => {
                tracing::debug!(%id, "record adapts to nothing displayable");
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Resolve the bare application root.
    ///
    /// With navigation installed this redirects to the highest-priority
    /// tab; without any, it serves an explanatory placeholder page.
    pub fn resolve_root(&self, store: &dyn Store) -> Result<Resolution, WebAppError> {
        let components = PageComponents::gather(store);
        match components.navigation.first() {
            Some(first) => {
                let link = first
                    .link
                    .clone()
                    .unwrap_or_else(|| self.link_to(first.target));
                Ok(Resolution::Redirect(link))
            }
            None => {
                let path = format!("/{}/", self.prefix());
                let page = StatelessPage::empty_root(self, store, components, &path);
                self.record_hit();
                Ok(Resolution::Page(Page::Stateless(page)))
            }
        }
    }

    /// Select a template and a wrapper for the fragment and build the page.
    fn wrap_fragment(
        &self,
        store: &dyn Store,
        fragment: Arc<dyn NavigableFragment>,
        token: &str,
    ) -> Result<Page, WebAppError> {
        let template = self.template_for_fragment(fragment.as_ref())?;
        let components = PageComponents::gather(store);
        let current_path = format!("/{}/{}", self.prefix(), token);

        let page = match fragment.liveness() {
            Liveness::Stateless => Page::Stateless(StatelessPage::wrap(
                self,
                store,
                components,
                fragment,
                template,
                &current_path,
            )),
            Liveness::SessionBound => Page::Session(SessionPage::wrap(
                self,
                store,
                components,
                fragment,
                template,
                &current_path,
            )?),
            Liveness::Live => Page::Live(LivePage::wrap(
                self,
                store,
                components,
                fragment,
                template,
                &current_path,
            )?),
        };
        Ok(page)
    }

    /// An explicit template wins; otherwise the declared name is looked up
    /// across the themes. A fragment resolving to no template at all is a
    /// deployment defect and fails hard.
    fn template_for_fragment(
        &self,
        fragment: &dyn NavigableFragment,
    ) -> Result<TemplateRef, WebAppError> {
        if let Some(template) = fragment.template() {
            return Ok(template);
        }
        match fragment.template_name() {
            Some(name) => self
                .themes()
                .template_for(self.preferred_theme().as_deref(), &name, None)
                .ok_or_else(|| WebAppError::MissingTemplate {
                    fragment: fragment.title(),
                    template: name,
                }),
            None => Err(WebAppError::NoTemplate {
                fragment: fragment.title(),
            }),
        }
    }
}
