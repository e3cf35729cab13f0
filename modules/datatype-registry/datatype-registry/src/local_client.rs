//! Local client implementing the `DatatypeRegistryApi` trait.

use std::sync::Arc;

use datatype_registry_sdk::{
    DatatypeConstructor, DatatypeDefinition, DatatypeDescriptor, DatatypeRegistryApi,
    DatatypeRegistryError, Literal, RegisterResult, TypedLiteral,
};

use crate::domain::service::DatatypeRegistryService;

/// Local client for the Datatype Registry module.
///
/// Implements the `DatatypeRegistryApi` trait by delegating to the domain
/// service and translating domain errors into SDK errors.
pub struct DatatypeRegistryLocalClient {
    service: Arc<DatatypeRegistryService>,
}

impl DatatypeRegistryLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<DatatypeRegistryService>) -> Self {
        Self { service }
    }
}

impl DatatypeRegistryApi for DatatypeRegistryLocalClient {
    fn get_datatype(&self, uri: &str) -> Option<Arc<DatatypeConstructor>> {
        self.service.get_datatype(uri)
    }

    fn register_datatype(
        &self,
        descriptor: Arc<dyn DatatypeDescriptor>,
    ) -> Result<Arc<DatatypeConstructor>, DatatypeRegistryError> {
        self.service
            .register_datatype(descriptor)
            .map_err(DatatypeRegistryError::from)
    }

    fn register_definition(
        &self,
        definition: Option<DatatypeDefinition>,
    ) -> Result<Arc<DatatypeConstructor>, DatatypeRegistryError> {
        self.service
            .register_definition(definition)
            .map_err(DatatypeRegistryError::from)
    }

    fn register_batch(
        &self,
        descriptors: Vec<Arc<dyn DatatypeDescriptor>>,
    ) -> Vec<RegisterResult> {
        self.service.register_batch(descriptors)
    }

    fn parse(&self, uri: &str, lexical_value: &str) -> Result<Literal, DatatypeRegistryError> {
        self.service
            .parse(uri, lexical_value)
            .map_err(DatatypeRegistryError::from)
    }

    fn is_valid_literal(&self, uri: &str, lexical_value: &str) -> bool {
        self.service.is_valid_literal(uri, lexical_value)
    }

    fn accepts_literal(&self, uri: &str, literal: &TypedLiteral) -> bool {
        self.service.accepts_literal(uri, literal)
    }

    fn literals_equal(&self, a: &TypedLiteral, b: &TypedLiteral) -> bool {
        self.service.literals_equal(a, b)
    }

    fn canonicalise(&self, literal: &TypedLiteral) -> Result<TypedLiteral, DatatypeRegistryError> {
        self.service
            .canonicalise(literal)
            .map_err(DatatypeRegistryError::from)
    }

    fn list_uris(&self) -> Vec<String> {
        self.service.datatype_uris()
    }
}
