//! `DatatypeRegistryApi` trait definition.
//!
//! This trait defines the public API for the `datatype-registry` module.
//! Every method runs to completion without suspending.

use std::sync::Arc;

use crate::descriptor::{DatatypeConstructor, DatatypeDefinition, DatatypeDescriptor};
use crate::error::DatatypeRegistryError;
use crate::models::{Literal, RegisterResult, TypedLiteral};

/// Public API trait for the `datatype-registry` module.
///
/// ```ignore
/// let cardinal = client.register_datatype(Arc::new(Cardinal))?;
/// assert!(Arc::ptr_eq(&cardinal, &client.get_datatype(CARDINAL_URI).unwrap()));
/// ```
pub trait DatatypeRegistryApi: Send + Sync {
    /// Look up the constructor registered under `uri`.
    ///
    /// Returns `None` if nothing was registered under that URI.
    fn get_datatype(&self, uri: &str) -> Option<Arc<DatatypeConstructor>>;

    /// Register a datatype and return its constructor.
    ///
    /// # Errors
    ///
    /// * `InvalidShape` - If the descriptor's URI is empty
    /// * `DuplicateUri` - If a datatype with the same URI already exists
    fn register_datatype(
        &self,
        descriptor: Arc<dyn DatatypeDescriptor>,
    ) -> Result<Arc<DatatypeConstructor>, DatatypeRegistryError>;

    /// Register a datatype assembled from closures.
    ///
    /// # Errors
    ///
    /// * `MissingArgument` - If `definition` is `None`
    /// * `InvalidShape` - If `uri`, `isLegal` or `equals` is missing (checked in that order)
    /// * `DuplicateUri` - If a datatype with the same URI already exists
    fn register_definition(
        &self,
        definition: Option<DatatypeDefinition>,
    ) -> Result<Arc<DatatypeConstructor>, DatatypeRegistryError>;

    /// Register several datatypes, reporting each outcome in input order.
    fn register_batch(
        &self,
        descriptors: Vec<Arc<dyn DatatypeDescriptor>>,
    ) -> Vec<RegisterResult>;

    /// Construct a literal of the datatype registered under `uri`.
    ///
    /// # Errors
    ///
    /// * `UnknownDatatype` - If no datatype is registered under `uri`
    /// * `IllegalLexicalValue` - If the datatype rejects `lexical_value`
    fn parse(&self, uri: &str, lexical_value: &str) -> Result<Literal, DatatypeRegistryError>;

    /// Check whether `lexical_value` is legal for the datatype registered under `uri`.
    ///
    /// Unknown datatypes yield `false`.
    fn is_valid_literal(&self, uri: &str, lexical_value: &str) -> bool;

    /// Check whether `literal`, of any registered datatype, is a valid value
    /// of the datatype registered under `uri`.
    ///
    /// A literal of another datatype is accepted when the target imports it,
    /// or the literal's own datatype exports it, as a legal lexical value.
    fn accepts_literal(&self, uri: &str, literal: &TypedLiteral) -> bool;

    /// Check whether two typed literals denote the same value.
    ///
    /// Returns `false` whenever either literal cannot be constructed.
    fn literals_equal(&self, a: &TypedLiteral, b: &TypedLiteral) -> bool;

    /// Rewrite a typed literal into its datatype's canonical form.
    ///
    /// # Errors
    ///
    /// * `UnknownDatatype` - If no datatype is registered under the literal's URI
    /// * `IllegalLexicalValue` - If the datatype rejects the literal's lexical value
    fn canonicalise(&self, literal: &TypedLiteral) -> Result<TypedLiteral, DatatypeRegistryError>;

    /// URIs of all registered datatypes, sorted.
    fn list_uris(&self) -> Vec<String>;
}
