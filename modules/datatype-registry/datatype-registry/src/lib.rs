//! Datatype Registry Module Implementation
//!
//! This module lets callers define literal datatypes by URI and obtain
//! constructors for their values. The public API is defined in
//! `datatype-registry-sdk` and re-exported here.
//!
//! ## Architecture
//!
//! - **Flat registry**: one URI maps to one constructor; entries are never removed
//! - **All-or-nothing registration**: shape and uniqueness are checked before the map is touched
//! - **Shared bindings**: literals hold the `Arc` of the constructor that produced them

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === PUBLIC API (from SDK) ===
pub use datatype_registry_sdk::{
    DatatypeConstructor, DatatypeDefinition, DatatypeDescriptor, DatatypeRegistryApi,
    DatatypeRegistryError, Literal, LiteralValue, RegisterResult, RegisterSummary, TypedLiteral,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::DatatypeRegistryModule;

// === CONFIGURATION ===
pub mod config;

pub mod builtin;
pub mod local_client;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
