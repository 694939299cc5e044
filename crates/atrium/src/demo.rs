//! In-memory demo content: a store, a theme and a handful of fragments.
//! Stands in for the external persistence layer so the shell can be
//! exercised end to end.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shared::{
    Adaptation, DefaultPowerup, Liveness, Markup, NavigableElement, NavigableFragment, Record,
    RecordId, SearchAggregator, SearchProvider, SearchResult, SessionHandler, StaticShellContent,
    Store, StoreAdmin, Tab, Template, TemplateRef,
};
use themes::{Theme, ThemeRegistry};

pub const WELCOME: RecordId = RecordId::new(1);
pub const NOTES: RecordId = RecordId::new(2);
pub const MONITOR: RecordId = RecordId::new(3);
pub const DOWNLOAD: RecordId = RecordId::new(4);
const SEARCH: RecordId = RecordId::new(90);

struct DemoTemplate(&'static str);

impl Template for DemoTemplate {
    fn name(&self) -> &str {
        self.0
    }
}

struct DaylightTheme;

impl Theme for DaylightTheme {
    fn name(&self) -> &str {
        "daylight"
    }

    fn head(&self) -> Option<Markup> {
        Some(Markup::from(
            "<style>body { font-family: sans-serif; margin: 2em; }</style>",
        ))
    }

    fn template(&self, name: &str) -> Option<TemplateRef> {
        match name {
            "shell" => Some(Arc::new(DemoTemplate("daylight/shell")) as TemplateRef),
            "panel" => Some(Arc::new(DemoTemplate("daylight/panel")) as TemplateRef),
            _ => None,
        }
    }
}

struct PanelFragment {
    title: &'static str,
    body: &'static str,
    liveness: Liveness,
}

impl NavigableFragment for PanelFragment {
    fn title(&self) -> String {
        self.title.to_owned()
    }

    fn liveness(&self) -> Liveness {
        self.liveness
    }

    fn template_name(&self) -> Option<String> {
        Some("panel".to_owned())
    }

    fn content(&self) -> Markup {
        Markup::from(format!("<p>{}</p>", self.body))
    }

    fn session_handlers(&self) -> Vec<(String, SessionHandler)> {
        match self.liveness {
            Liveness::Stateless => Vec::new(),
            Liveness::SessionBound | Liveness::Live => {
                let echo: SessionHandler = Arc::new(|args: &[&str]| {
                    Ok(Markup::from(format!("<p>echo: {}</p>", args.join(" "))))
                });
                vec![("echo".to_owned(), echo)]
            }
        }
    }
}

struct FragmentRecord {
    id: RecordId,
    fragment: Arc<PanelFragment>,
}

impl Record for FragmentRecord {
    fn id(&self) -> RecordId {
        self.id
    }

    fn adapt(&self) -> Adaptation {
        Adaptation::Fragment(self.fragment.clone())
    }
}

struct ReadmeResource;

impl shared::WebResource for ReadmeResource {
    fn content_type(&self) -> &str {
        "text/plain; charset=utf-8"
    }

    fn body(&self) -> Vec<u8> {
        b"Atrium demo download: raw resources bypass the page shell.\n".to_vec()
    }
}

struct ReadmeRecord;

impl Record for ReadmeRecord {
    fn id(&self) -> RecordId {
        DOWNLOAD
    }

    fn adapt(&self) -> Adaptation {
        Adaptation::Resource(Arc::new(ReadmeResource))
    }
}

struct DemoNavigation;

impl NavigableElement for DemoNavigation {
    fn tabs(&self) -> Vec<Tab> {
        vec![
            Tab::new("Welcome", WELCOME, 1.0),
            Tab::new("Notes", NOTES, 0.8).with_children(vec![Tab::new("Monitor", MONITOR, 0.5)]),
        ]
    }
}

struct DemoSearch;

impl SearchProvider for DemoSearch {
    fn count(&self, _term: &str) -> usize {
        0
    }

    fn search(&self, _term: &str, _count: usize, _offset: usize) -> Vec<SearchResult> {
        Vec::new()
    }
}

impl SearchAggregator for DemoSearch {
    fn providers(&self) -> usize {
        1
    }

    fn record_id(&self) -> RecordId {
        SEARCH
    }
}

struct DemoShellContent;

impl StaticShellContent for DemoShellContent {
    fn header(&self) -> Option<Markup> {
        Some(Markup::from("<h1>Atrium</h1>"))
    }

    fn footer(&self) -> Option<Markup> {
        Some(Markup::from("<small>served by the atrium demo</small>"))
    }
}

/// Store backed by plain maps; the persistence layer of the demo.
pub struct DemoStore {
    records: HashMap<RecordId, Arc<dyn Record>>,
    powerups: Mutex<HashMap<DefaultPowerup, RecordId>>,
    next_powerup_id: Mutex<u64>,
}

impl DemoStore {
    pub fn new() -> Self {
        let mut records: HashMap<RecordId, Arc<dyn Record>> = HashMap::new();
        for (id, title, body, liveness) in [
            (
                WELCOME,
                "Welcome",
                "This page is stateless chrome around a fragment.",
                Liveness::Stateless,
            ),
            (
                NOTES,
                "Notes",
                "This page holds a server-side session for partial updates.",
                Liveness::SessionBound,
            ),
            (
                MONITOR,
                "Monitor",
                "This page carries a bidirectional update channel.",
                Liveness::Live,
            ),
        ] {
            records.insert(
                id,
                Arc::new(FragmentRecord {
                    id,
                    fragment: Arc::new(PanelFragment {
                        title,
                        body,
                        liveness,
                    }),
                }),
            );
        }
        records.insert(DOWNLOAD, Arc::new(ReadmeRecord));

        Self {
            records,
            powerups: Mutex::new(HashMap::new()),
            next_powerup_id: Mutex::new(100),
        }
    }
}

impl Store for DemoStore {
    fn record(&self, id: RecordId) -> Option<Arc<dyn Record>> {
        self.records.get(&id).cloned()
    }

    fn navigation_elements(&self) -> Vec<Arc<dyn NavigableElement>> {
        vec![Arc::new(DemoNavigation)]
    }

    fn search_aggregator(&self) -> Option<Arc<dyn SearchAggregator>> {
        Some(Arc::new(DemoSearch))
    }

    fn shell_content(&self) -> Option<Arc<dyn StaticShellContent>> {
        Some(Arc::new(DemoShellContent))
    }

    fn settings_record(&self) -> Option<RecordId> {
        self.powerups
            .lock()
            .unwrap()
            .get(&DefaultPowerup::Settings)
            .copied()
    }

    fn account_name(&self) -> Option<(String, String)> {
        Some(("demo".to_owned(), "localhost".to_owned()))
    }
}

impl StoreAdmin for DemoStore {
    fn find_or_create(&mut self, powerup: DefaultPowerup) -> RecordId {
        let mut powerups = self.powerups.lock().unwrap();
        if let Some(id) = powerups.get(&powerup) {
            return *id;
        }
        let mut next = self.next_powerup_id.lock().unwrap();
        let id = RecordId::new(*next);
        *next += 1;
        powerups.insert(powerup, id);
        id
    }
}

/// The theme registry of the demo installation.
pub fn theme_registry() -> Arc<ThemeRegistry> {
    Arc::new(ThemeRegistry::new(vec![Arc::new(DaylightTheme)]))
}
