//! Domain error types for the Datatype Registry module.

use datatype_registry_sdk::DatatypeRegistryError;
use thiserror::Error;

/// Domain-level errors for the Datatype Registry module.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Registration was attempted without a descriptor.
    #[error("Missing datatype descriptor")]
    MissingArgument,

    /// A required descriptor field is missing or malformed.
    #[error("Invalid datatype descriptor: field '{0}'")]
    InvalidShape(String),

    /// A datatype with the same URI is already registered.
    #[error("Datatype already exists: {0}")]
    DuplicateUri(String),

    /// The datatype rejected the lexical value.
    #[error("Illegal lexical value '{lexical_value}' for datatype {uri}")]
    IllegalLexicalValue { lexical_value: String, uri: String },

    /// No datatype is registered under the URI.
    #[error("Datatype not found: {0}")]
    UnknownDatatype(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Creates an `InvalidShape` error.
    #[must_use]
    pub fn invalid_shape(field: impl Into<String>) -> Self {
        Self::InvalidShape(field.into())
    }

    /// Creates a `DuplicateUri` error.
    #[must_use]
    pub fn duplicate_uri(uri: impl Into<String>) -> Self {
        Self::DuplicateUri(uri.into())
    }

    /// Creates an `UnknownDatatype` error.
    #[must_use]
    pub fn unknown_datatype(uri: impl Into<String>) -> Self {
        Self::UnknownDatatype(uri.into())
    }
}

impl From<DomainError> for DatatypeRegistryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::MissingArgument => DatatypeRegistryError::missing_argument(),
            DomainError::InvalidShape(field) => DatatypeRegistryError::invalid_shape(field),
            DomainError::DuplicateUri(uri) => DatatypeRegistryError::duplicate_uri(uri),
            DomainError::IllegalLexicalValue { lexical_value, uri } => {
                DatatypeRegistryError::illegal_lexical_value(lexical_value, uri)
            }
            DomainError::UnknownDatatype(uri) => DatatypeRegistryError::unknown_datatype(uri),
            DomainError::Internal(e) => DatatypeRegistryError::internal(e.to_string()),
        }
    }
}

impl From<DatatypeRegistryError> for DomainError {
    fn from(e: DatatypeRegistryError) -> Self {
        match e {
            DatatypeRegistryError::MissingArgument => Self::MissingArgument,
            DatatypeRegistryError::InvalidShape(field) => Self::InvalidShape(field),
            DatatypeRegistryError::DuplicateUri(uri) => Self::DuplicateUri(uri),
            DatatypeRegistryError::IllegalLexicalValue { lexical_value, uri } => {
                Self::IllegalLexicalValue { lexical_value, uri }
            }
            DatatypeRegistryError::UnknownDatatype(uri) => Self::UnknownDatatype(uri),
            DatatypeRegistryError::Internal(msg) => Self::Internal(anyhow::anyhow!(msg)),
        }
    }
}
