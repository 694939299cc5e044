//! Site-level contracts: link translation, root-path plugins and the
//! public/private page separation.

use std::sync::Arc;

use crate::ids::RecordId;
use crate::markup::TemplateRef;
use crate::record::WebResource;

/// Names objects on the web, and vice versa.
pub trait WebTranslator: Send + Sync {
    /// URL referring to the record with the given id.
    fn link_to(&self, id: RecordId) -> String;

    /// Inverse of `link_to`, taking the trailing token of such an URL.
    /// `None` for tokens this installation never produced.
    fn link_from(&self, web_id: &str) -> Option<RecordId>;

    /// Template lookup honoring the installation's theme preference.
    fn template_for(&self, name: &str, default: Option<TemplateRef>) -> Option<TemplateRef>;
}

/// Resource located by a site-root plugin, plus the path segments left for
/// it to consume.
pub struct SiteResource {
    pub resource: Arc<dyn WebResource>,
    pub remaining: Vec<String>,
}

/// Plugin interface for functionality provided at the root of the site.
///
/// Queried on the store while processing a request; installed on a user's
/// store it is visible to that user, on the top-level store to everyone.
pub trait SiteRootPlugin: Send + Sync {
    /// Resolve decoded URL segments to a resource, or decline with `None`.
    fn resource_for(&self, segments: &[&str]) -> Option<SiteResource>;
}

/// Like `SiteRootPlugin`, but reachable without an authenticated session.
pub trait SessionlessSiteRootPlugin: SiteRootPlugin {}

/// Segregates the public view of a store from its private one.
pub trait PublicPage: Send + Sync {
    /// The public-facing view.
    fn resource(&self) -> Arc<dyn WebResource>;
}

/// Factory for resources that can be specialized for a logged-in user.
pub trait Customizable: Send + Sync {
    /// A resource customized for the given account.
    fn customize_for(&self, account: &str) -> Arc<dyn WebResource>;
}
