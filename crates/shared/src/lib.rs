//! Contract surface of the Atrium web-application shell.
//!
//! Everything in here is an interface: collaborating subsystems (the
//! persistence store, the templating engine, the live transport) implement
//! these traits, and plugins extend the application through them. The one
//! concrete component sitting on top of this surface lives in the `webapp`
//! crate.

pub mod fragment;
pub mod ids;
pub mod markup;
pub mod nav;
pub mod offering;
pub mod prefs;
pub mod record;
pub mod search;
pub mod shell;
pub mod site;

pub use fragment::{Liveness, NavigableFragment, SessionCallError, SessionHandler};
pub use ids::{IdGenerator, RecordId, SessionId, TicketId};
pub use markup::{Markup, Template, TemplateRef};
pub use nav::{NavigableElement, Tab};
pub use offering::{Benefactor, BenefactorFactory, Offering, OfferingError};
pub use prefs::{
    PrefValue, Preference, PreferenceAggregator, PreferenceCollection, PreferenceError,
};
pub use record::{Adaptation, DefaultPowerup, Record, Store, StoreAdmin, WebResource};
pub use search::{SearchAggregator, SearchProvider, SearchResult};
pub use shell::StaticShellContent;
pub use site::{
    Customizable, PublicPage, SessionlessSiteRootPlugin, SiteResource, SiteRootPlugin,
    WebTranslator,
};
