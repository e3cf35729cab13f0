//! Infrastructure layer for the Datatype Registry module.
//!
//! Contains storage implementations.

pub mod storage;

pub use storage::InMemoryDatatypeRepository;
