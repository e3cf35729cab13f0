//! Datatype Registry SDK
//!
//! This crate provides the public API for the `datatype-registry` module:
//! - `DatatypeDescriptor` trait for defining literal datatypes
//! - `DatatypeDefinition` for assembling a datatype from closures at runtime
//! - `DatatypeConstructor` and `Literal`, produced by registration
//! - `DatatypeRegistryApi` trait for consumers of the registry
//! - `DatatypeRegistryError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use datatype_registry_sdk::DatatypeRegistryApi;
//!
//! let cardinal = client.register_datatype(Arc::new(Cardinal))?;
//! let one = cardinal.construct("one")?;
//!
//! let xsd_one = TypedLiteral::new("http://www.w3.org/2001/XMLSchema#", "1");
//! assert!(one.equals(&xsd_one));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod descriptor;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::DatatypeRegistryApi;
pub use descriptor::{
    DatatypeConstructor, DatatypeDefinition, DatatypeDescriptor, DefinedDatatype, EqualityFn,
    ExportFn, ImportFn, LegalityFn,
};
pub use error::DatatypeRegistryError;
pub use models::{Literal, LiteralValue, RegisterResult, RegisterSummary, TypedLiteral};
