//! Storage implementations for the Datatype Registry module.

mod in_memory_repo;

pub use in_memory_repo::InMemoryDatatypeRepository;
