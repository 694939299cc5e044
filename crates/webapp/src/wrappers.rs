use std::sync::Arc;

use shared::{Markup, NavigableFragment, SessionId, Store, TemplateRef, WebTranslator};
use webnav::NavEntry;

use crate::app::PrivateApplication;
use crate::components::PageComponents;
use crate::errors::WebAppError;
use crate::session::HandlerMap;

/// Everything the external flattener needs to render one page: the chrome
/// slots plus the content fragment. Built once per request and rendered
/// once.
pub struct PageAssembly {
    pub title: String,
    /// The shell template from the active themes, when one provides it.
    pub shell: Option<TemplateRef>,
    /// Head injections in resolution order; fragment content last, live
    /// glue (if any) first.
    pub head: Vec<Markup>,
    pub navigation: Vec<NavEntry>,
    pub header: Option<Markup>,
    pub footer: Option<Markup>,
    /// "user@domain" of the store's primary account.
    pub username: String,
    pub settings_link: Option<String>,
    /// Search form action; absent when no provider is installed.
    pub search_action: Option<String>,
    pub content: PageContent,
}

pub enum PageContent {
    Fragment {
        template: TemplateRef,
        fragment: Arc<dyn NavigableFragment>,
    },
    /// Explanatory empty-state body, e.g. the bare root with no navigation.
    Placeholder { message: String },
}

/// Chrome-only page without any client/server session object.
pub struct StatelessPage {
    pub assembly: PageAssembly,
}

/// Page holding a server-side session identity the client can address for
/// partial updates, dispatching by validated handler name.
pub struct SessionPage {
    pub assembly: PageAssembly,
    pub session: SessionId,
    pub handlers: HandlerMap,
}

/// Session page with a bidirectional update channel injected client-side.
/// The channel's lifecycle belongs to the external live transport.
pub struct LivePage {
    pub assembly: PageAssembly,
    pub session: SessionId,
    pub handlers: HandlerMap,
    /// Introspection affordance, enabled only in development mode.
    pub introspection: bool,
}

/// The three terminal render variants of the private application.
pub enum Page {
    Stateless(StatelessPage),
    Session(SessionPage),
    Live(LivePage),
}

impl Page {
    pub fn assembly(&self) -> &PageAssembly {
        match self {
            Page::Stateless(page) => &page.assembly,
            Page::Session(page) => &page.assembly,
            Page::Live(page) => &page.assembly,
        }
    }

    pub fn title(&self) -> &str {
        &self.assembly().title
    }
}

impl StatelessPage {
    pub(crate) fn wrap(
        app: &PrivateApplication,
        store: &dyn Store,
        components: PageComponents,
        fragment: Arc<dyn NavigableFragment>,
        template: TemplateRef,
        current_path: &str,
    ) -> Self {
        let assembly = compose(
            app,
            store,
            components,
            fragment.title(),
            fragment.head(),
            PageContent::Fragment { template, fragment },
            current_path,
        );
        Self { assembly }
    }

    /// The placeholder served for the bare application root when no
    /// navigation is installed. A success, not an error.
    pub(crate) fn empty_root(
        app: &PrivateApplication,
        store: &dyn Store,
        components: PageComponents,
        current_path: &str,
    ) -> Self {
        let assembly = compose(
            app,
            store,
            components,
            "Private Root Page".to_owned(),
            None,
            PageContent::Placeholder {
                message: "You have no default root page set, and no navigation plugins \
                          installed. There is nothing to show here yet."
                    .to_owned(),
            },
            current_path,
        );
        Self { assembly }
    }
}

impl SessionPage {
    pub(crate) fn wrap(
        app: &PrivateApplication,
        store: &dyn Store,
        components: PageComponents,
        fragment: Arc<dyn NavigableFragment>,
        template: TemplateRef,
        current_path: &str,
    ) -> Result<Self, WebAppError> {
        let handlers = HandlerMap::from_fragment(fragment.as_ref())?;
        let assembly = compose(
            app,
            store,
            components,
            fragment.title(),
            fragment.head(),
            PageContent::Fragment { template, fragment },
            current_path,
        );
        Ok(Self {
            assembly,
            session: app.next_session(),
            handlers,
        })
    }
}

impl LivePage {
    pub(crate) fn wrap(
        app: &PrivateApplication,
        store: &dyn Store,
        components: PageComponents,
        fragment: Arc<dyn NavigableFragment>,
        template: TemplateRef,
        current_path: &str,
    ) -> Result<Self, WebAppError> {
        let handlers = HandlerMap::from_fragment(fragment.as_ref())?;
        let mut assembly = compose(
            app,
            store,
            components,
            fragment.title(),
            fragment.head(),
            PageContent::Fragment { template, fragment },
            current_path,
        );
        // The glue comes first so theme and fragment head content may rely
        // on the channel being declared.
        assembly.head.insert(0, live_glue(app.prefix()));
        Ok(Self {
            assembly,
            session: app.next_session(),
            handlers,
            introspection: app.dev_mode(),
        })
    }
}

/// Client-side bootstrap for the bidirectional update channel.
fn live_glue(prefix: &str) -> Markup {
    Markup::from(format!(
        r#"<script type="text/javascript" src="/{prefix}/jsmodule/boot.js"></script>"#
    ))
}

/// Overlay the shared chrome around one piece of content.
fn compose(
    app: &PrivateApplication,
    store: &dyn Store,
    components: PageComponents,
    title: String,
    fragment_head: Option<Markup>,
    content: PageContent,
    current_path: &str,
) -> PageAssembly {
    let preferred = app.preferred_theme();
    let preferred = preferred.as_deref();

    let username = store
        .account_name()
        .map(|(user, domain)| format!("{user}@{domain}"))
        .unwrap_or_else(|| "nobody@noplace".to_owned());

    let search_action = components
        .search
        .as_ref()
        .filter(|search| search.providers() > 0)
        .map(|search| app.link_to(search.record_id()));

    PageAssembly {
        title,
        shell: app.themes().template_for(preferred, "shell", None),
        head: app.themes().head_contents(preferred, fragment_head),
        navigation: webnav::annotate(&components.navigation, current_path, app),
        header: components
            .shell_content
            .as_ref()
            .and_then(|content| content.header()),
        footer: components
            .shell_content
            .as_ref()
            .and_then(|content| content.footer()),
        username,
        settings_link: components.settings.map(|id| app.link_to(id)),
        search_action,
        content,
    }
}
