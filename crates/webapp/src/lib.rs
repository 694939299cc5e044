//! The private, navigable web application.
//!
//! This crate owns the one concrete component on top of the `shared`
//! contract surface: `PrivateApplication` translates record ids to salted
//! web tokens, resolves tokens back to records, adapts records to
//! displayable fragments and wraps them with navigation, theme and
//! header/footer chrome. Plug into it by installing `NavigableElement`
//! powerups on the user's store and providing `NavigableFragment` (or, for
//! raw endpoints, `WebResource`) adaptations for their records.

mod app;
mod components;
mod dispatch;
mod errors;
mod session;
mod wrappers;

pub use app::{PrivateApplication, PrivateApplicationBuilder, DEV_MODE_ENV};
pub use components::PageComponents;
pub use dispatch::Resolution;
pub use errors::WebAppError;
pub use session::HandlerMap;
pub use wrappers::{LivePage, Page, PageAssembly, PageContent, SessionPage, StatelessPage};
