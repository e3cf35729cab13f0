//! Module declaration for the Datatype Registry module.

use std::sync::Arc;

use anyhow::Context;
use datatype_registry_sdk::DatatypeRegistryApi;
use figment::Figment;
use tracing::{debug, info};

use crate::builtin::XsdString;
use crate::config::DatatypeRegistryConfig;
use crate::domain::service::DatatypeRegistryService;
use crate::infra::InMemoryDatatypeRepository;
use crate::local_client::DatatypeRegistryLocalClient;

/// Datatype Registry module.
///
/// Owns one registry instance. Create one per process, or one per test to
/// keep registrations from leaking between tests.
pub struct DatatypeRegistryModule {
    service: Arc<DatatypeRegistryService>,
    client: Arc<dyn DatatypeRegistryApi>,
}

impl DatatypeRegistryModule {
    /// Builds the registry from `cfg`.
    ///
    /// # Errors
    ///
    /// Fails if a built-in datatype cannot be registered.
    pub fn init(cfg: DatatypeRegistryConfig) -> anyhow::Result<Self> {
        info!("Initializing datatype_registry module");
        debug!(
            "Loaded datatype_registry config: bidirectional_equality={}, preregister_builtin={}",
            cfg.bidirectional_equality, cfg.preregister_builtin
        );

        let preregister_builtin = cfg.preregister_builtin;
        let repo = Arc::new(InMemoryDatatypeRepository::new());
        let service = Arc::new(DatatypeRegistryService::new(repo, cfg));

        if preregister_builtin {
            service
                .register_datatype(Arc::new(XsdString))
                .context("failed to register built-in xsd:string datatype")?;
        }

        let client: Arc<dyn DatatypeRegistryApi> =
            Arc::new(DatatypeRegistryLocalClient::new(Arc::clone(&service)));

        info!(
            datatypes = service.len(),
            "Datatype registry module initialized"
        );
        Ok(Self { service, client })
    }

    /// Loads the module config from `figment` and builds the registry.
    ///
    /// # Errors
    ///
    /// Fails if the config section is malformed or initialization fails.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        let cfg = DatatypeRegistryConfig::from_figment(figment)?;
        Self::init(cfg)
    }

    /// The domain service backing this module.
    #[must_use]
    pub const fn service(&self) -> &Arc<DatatypeRegistryService> {
        &self.service
    }

    /// The public API client.
    #[must_use]
    pub fn client(&self) -> Arc<dyn DatatypeRegistryApi> {
        Arc::clone(&self.client)
    }
}
