//! Offerings describe installable units of functionality; benefactors endow
//! newly created accounts with them.

use std::sync::Arc;

use thiserror::Error;

use crate::ids::TicketId;
use crate::record::StoreAdmin;

#[derive(Debug, Error)]
pub enum OfferingError {
    #[error("offering setup failed: {0}")]
    Setup(String),

    #[error("missing dependency '{0}'")]
    MissingDependency(String),
}

/// Grants (and revokes) an increment of functionality on a user's store.
///
/// `endow` runs only after the signup ticket has been confirmed out-of-band;
/// confirmation mechanics are not this layer's concern.
pub trait Benefactor: Send + Sync {
    fn endow(&self, ticket: TicketId, store: &mut dyn StoreAdmin) -> Result<(), OfferingError>;

    fn deprive(&self, ticket: TicketId, store: &mut dyn StoreAdmin) -> Result<(), OfferingError>;
}

/// Describes and creates benefactors.
pub trait BenefactorFactory: Send + Sync {
    /// Factories that must be instantiated and applied before this one.
    fn dependencies(&self) -> Vec<Arc<dyn BenefactorFactory>> {
        Vec::new()
    }

    fn instantiate(&self) -> Result<Arc<dyn Benefactor>, OfferingError>;
}

/// A product, service or application that can be added to a server.
pub struct Offering {
    /// What it is called.
    pub name: String,
    /// What it is.
    pub description: String,
    /// Capabilities the site store must provide before installation.
    pub site_requirements: Vec<String>,
    /// Capabilities installed on the offering's app store; `None` when no
    /// app store is required (none will be created).
    pub app_powerups: Option<Vec<String>>,
    pub benefactor_factories: Vec<Arc<dyn BenefactorFactory>>,
}
