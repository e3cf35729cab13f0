//! Domain layer for the Datatype Registry module.
//!
//! Contains business logic, error types, and repository traits.

pub mod error;
pub mod repo;
pub mod service;

pub use error::DomainError;
pub use repo::DatatypeRepository;
pub use service::DatatypeRegistryService;
