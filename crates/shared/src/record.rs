//! Collaborator contract for the external persistence store, plus the
//! capability adaptation a record goes through before it can be displayed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::fragment::NavigableFragment;
use crate::ids::RecordId;
use crate::nav::NavigableElement;
use crate::search::SearchAggregator;
use crate::shell::StaticShellContent;

/// A raw web endpoint that bypasses the page shell entirely.
///
/// Use sparingly: downloads, embedded frames, anything that must control its
/// own content type or must not show navigation. Look and feel belongs to
/// themes, not to resources.
pub trait WebResource: Send + Sync {
    fn content_type(&self) -> &str;
    fn body(&self) -> Vec<u8>;
}

/// How a record presents itself to the web layer.
///
/// Exactly one variant applies per record; the dispatcher checks `Resource`
/// before `Fragment`, and `Unhandled` records are simply not reachable by
/// token.
pub enum Adaptation {
    Resource(Arc<dyn WebResource>),
    Fragment(Arc<dyn NavigableFragment>),
    Unhandled,
}

/// A persisted object addressable by numeric id.
pub trait Record: Send + Sync {
    fn id(&self) -> RecordId;

    /// Adapt this record for display.
    fn adapt(&self) -> Adaptation;
}

/// Read contract of a user's data store.
///
/// Atrium performs no queries of its own; everything it knows about
/// persisted state comes through this trait.
pub trait Store: Send + Sync {
    /// Fetch a record by id. `None` means not found.
    fn record(&self, id: RecordId) -> Option<Arc<dyn Record>>;

    /// All powerups contributing navigation, in installation order.
    fn navigation_elements(&self) -> Vec<Arc<dyn NavigableElement>>;

    fn search_aggregator(&self) -> Option<Arc<dyn SearchAggregator>>;

    fn shell_content(&self) -> Option<Arc<dyn StaticShellContent>>;

    /// The first settings record of the store, if one is installed.
    fn settings_record(&self) -> Option<RecordId>;

    /// Primary account as `(user, domain)`, when the store has one.
    fn account_name(&self) -> Option<(String, String)> {
        None
    }
}

/// Powerups the private application installs with sensible defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultPowerup {
    Settings,
    PreferenceAggregator,
    DefaultPreferenceCollection,
    SearchAggregator,
}

/// Mutable half of the store contract, used at installation time only.
pub trait StoreAdmin: Store {
    /// Return the record id of the given powerup, creating it if absent.
    fn find_or_create(&mut self, powerup: DefaultPowerup) -> RecordId;
}
