use std::sync::Arc;

use shared::{RecordId, SearchAggregator, StaticShellContent, Store, Tab};

/// Read-only snapshot of the cross-cutting page context.
///
/// Built once per resolved request and owned by the page wrapper for that
/// request's duration; nothing in here is shared mutably across requests.
pub struct PageComponents {
    /// Merged, priority-ordered navigation tree.
    pub navigation: Vec<Tab>,
    pub search: Option<Arc<dyn SearchAggregator>>,
    pub shell_content: Option<Arc<dyn StaticShellContent>>,
    /// Settings record, target of the chrome's settings link.
    pub settings: Option<RecordId>,
}

impl PageComponents {
    /// Collect every component from the store; each one is individually
    /// optional apart from navigation, which merely ends up empty.
    pub fn gather(store: &dyn Store) -> Self {
        Self {
            navigation: webnav::collect_tabs(&store.navigation_elements()),
            search: store.search_aggregator(),
            shell_content: store.shell_content(),
            settings: store.settings_record(),
        }
    }
}
