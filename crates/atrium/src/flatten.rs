//! Minimal HTML flattener for the demo.
//!
//! In a real deployment the templating engine renders the `PageAssembly`;
//! this module is the demo's stand-in, turning the assembly into a single
//! HTML string.

use webapp::{Page, PageAssembly, PageContent};
use webnav::{NavEntry, NavStyle};

pub fn flatten_page(page: &Page) -> String {
    let assembly = page.assembly();
    let mut extra = String::new();
    match page {
        Page::Stateless(_) => {}
        Page::Session(session) => {
            extra = format!(
                "<script>window.atriumSession = {};</script>",
                session.session.get()
            );
        }
        Page::Live(live) => {
            extra = format!(
                "<script>window.atriumSession = {};</script>",
                live.session.get()
            );
            if live.introspection {
                extra.push_str("<div id=\"introspector\">live page introspector</div>");
            }
        }
    }
    flatten_assembly(assembly, &extra)
}

fn flatten_assembly(assembly: &PageAssembly, extra: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html><head>");
    html.push_str(&format!("<title>{}</title>", assembly.title));
    for head in &assembly.head {
        html.push_str(head.as_str());
    }
    html.push_str("</head><body>");

    if let Some(header) = &assembly.header {
        html.push_str(&format!("<header>{header}</header>"));
    }

    html.push_str("<nav><ul>");
    for entry in &assembly.navigation {
        html.push_str(&flatten_nav(entry));
    }
    html.push_str("</ul></nav>");

    if let Some(action) = &assembly.search_action {
        html.push_str(&format!(
            "<form action=\"{action}\"><input name=\"q\"/></form>"
        ));
    }

    html.push_str(&format!("<p class=\"user\">{}</p>", assembly.username));
    if let Some(settings) = &assembly.settings_link {
        html.push_str(&format!("<a href=\"{settings}\">settings</a>"));
    }

    match &assembly.content {
        PageContent::Fragment { template, fragment } => {
            html.push_str(&format!(
                "<section data-template=\"{}\">{}</section>",
                template.name(),
                fragment.content()
            ));
        }
        PageContent::Placeholder { message } => {
            html.push_str(&format!("<section class=\"empty\">{message}</section>"));
        }
    }

    html.push_str(extra);

    if let Some(footer) = &assembly.footer {
        html.push_str(&format!("<footer>{footer}</footer>"));
    }
    html.push_str("</body></html>");
    html
}

fn flatten_nav(entry: &NavEntry) -> String {
    let class = match entry.style {
        NavStyle::Selected => "tab selected",
        NavStyle::Plain => "tab",
    };
    let mut item = format!(
        "<li class=\"{class}\"><a href=\"{}\">{}</a>",
        entry.link, entry.name
    );
    if !entry.subtabs.is_empty() {
        item.push_str("<ul class=\"subtabs\">");
        for child in &entry.subtabs {
            item.push_str(&flatten_nav(child));
        }
        item.push_str("</ul>");
    }
    item.push_str("</li>");
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use shared::{RecordId, Tab, WebTranslator};
    use themes::ThemeRegistry;
    use webapp::{PrivateApplication, Resolution};
    use webid::PrivateKey;

    #[test]
    fn placeholder_page_flattens_to_html() {
        let app = PrivateApplication::builder(Arc::new(ThemeRegistry::new(Vec::new())))
            .with_key(PrivateKey::new(1))
            .with_dev_mode(false)
            .build();
        let store = EmptyStore;
        let Resolution::Page(page) = app.resolve_root(&store).unwrap() else {
            panic!("expected the placeholder page");
        };
        let html = flatten_page(&page);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Private Root Page"));
        assert!(html.contains("class=\"empty\""));
    }

    #[test]
    fn navigation_entries_nest_subtabs() {
        let app = PrivateApplication::builder(Arc::new(ThemeRegistry::new(Vec::new())))
            .with_key(PrivateKey::new(1))
            .with_dev_mode(false)
            .build();
        let tabs = vec![Tab::new("top", RecordId::new(1), 1.0)
            .with_children(vec![Tab::new("child", RecordId::new(2), 1.0)])];
        let entries = webnav::annotate(&tabs, &app.link_to(RecordId::new(2)), &app);
        let html = flatten_nav(&entries[0]);
        assert!(html.contains("class=\"tab selected\""));
        assert!(html.contains("class=\"subtabs\""));
    }

    struct EmptyStore;

    impl shared::Store for EmptyStore {
        fn record(&self, _id: RecordId) -> Option<Arc<dyn shared::Record>> {
            None
        }

        fn navigation_elements(&self) -> Vec<Arc<dyn shared::NavigableElement>> {
            Vec::new()
        }

        fn search_aggregator(&self) -> Option<Arc<dyn shared::SearchAggregator>> {
            None
        }

        fn shell_content(&self) -> Option<Arc<dyn shared::StaticShellContent>> {
            None
        }

        fn settings_record(&self) -> Option<RecordId> {
            None
        }
    }
}
