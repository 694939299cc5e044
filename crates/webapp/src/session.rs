use std::collections::HashMap;

use shared::{Markup, NavigableFragment, SessionCallError, SessionHandler};

use crate::errors::WebAppError;

/// Explicit name-to-handler table for session-bound pages.
///
/// Built once when the page wrapper is constructed, so a fragment that
/// registers conflicting handler names fails at page construction rather
/// than when the client first calls in.
pub struct HandlerMap {
    handlers: HashMap<String, SessionHandler>,
}

impl std::fmt::Debug for HandlerMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerMap")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl HandlerMap {
    pub fn from_fragment(fragment: &dyn NavigableFragment) -> Result<Self, WebAppError> {
        let mut handlers = HashMap::new();
        for (name, handler) in fragment.session_handlers() {
            if handlers.insert(name.clone(), handler).is_some() {
                return Err(WebAppError::DuplicateHandler {
                    fragment: fragment.title(),
                    name,
                });
            }
        }
        Ok(Self { handlers })
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Dispatch a client call by handler name.
    pub fn call(&self, name: &str, args: &[&str]) -> Result<Markup, SessionCallError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| SessionCallError::UnknownHandler(name.to_owned()))?;
        handler(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use shared::Liveness;

    struct CountingFragment {
        duplicate: bool,
    }

    impl NavigableFragment for CountingFragment {
        fn title(&self) -> String {
            "counter".into()
        }

        fn liveness(&self) -> Liveness {
            Liveness::SessionBound
        }

        fn content(&self) -> Markup {
            Markup::from("<p>0</p>")
        }

        fn session_handlers(&self) -> Vec<(String, SessionHandler)> {
            let bump: SessionHandler = Arc::new(|args: &[&str]| {
                let by: i64 = args.first().and_then(|a| a.parse().ok()).unwrap_or(1);
                Ok(Markup::from(format!("<p>{by}</p>")))
            });
            let mut handlers = vec![("bump".to_owned(), bump.clone())];
            if self.duplicate {
                handlers.push(("bump".to_owned(), bump));
            }
            handlers
        }
    }

    #[test]
    fn known_handlers_dispatch() {
        let map = HandlerMap::from_fragment(&CountingFragment { duplicate: false })
            .expect("valid handler table");
        assert_eq!(map.len(), 1);
        assert!(map.contains("bump"));
        let out = map.call("bump", &["5"]).expect("handler runs");
        assert_eq!(out.as_str(), "<p>5</p>");
    }

    #[test]
    fn unknown_handlers_fail_fast() {
        let map = HandlerMap::from_fragment(&CountingFragment { duplicate: false })
            .expect("valid handler table");
        assert!(matches!(
            map.call("missing", &[]),
            Err(SessionCallError::UnknownHandler(name)) if name == "missing"
        ));
    }

    #[test]
    fn duplicate_names_are_a_construction_error() {
        let err = HandlerMap::from_fragment(&CountingFragment { duplicate: true })
            .expect_err("duplicate must fail");
        assert!(matches!(
            err,
            WebAppError::DuplicateHandler { ref name, .. } if name == "bump"
        ));
    }
}
