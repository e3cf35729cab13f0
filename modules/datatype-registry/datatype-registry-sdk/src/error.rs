//! Public error types for the `datatype-registry` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `DatatypeRegistryApi` and by
/// datatype constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatatypeRegistryError {
    /// Registration was called without a descriptor.
    #[error("The construction of a Datatype requires a parameter")]
    MissingArgument,

    /// The descriptor is missing a required field or the field is malformed.
    #[error("The Datatype construction parameter must contain a valid '{0}' property")]
    InvalidShape(String),

    /// A datatype with the same URI is already registered.
    #[error("A Datatype with uri {0} already exists")]
    DuplicateUri(String),

    /// The lexical value was rejected by the datatype's legality predicate.
    #[error("lexical value {lexical_value} is not legal for datatype {uri}")]
    IllegalLexicalValue {
        /// The rejected lexical value.
        lexical_value: String,
        /// The URI of the datatype that rejected it.
        uri: String,
    },

    /// No datatype is registered under the given URI.
    #[error("No Datatype registered with uri {0}")]
    UnknownDatatype(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DatatypeRegistryError {
    /// Creates a `MissingArgument` error.
    #[must_use]
    pub const fn missing_argument() -> Self {
        Self::MissingArgument
    }

    /// Creates an `InvalidShape` error naming the offending field.
    #[must_use]
    pub fn invalid_shape(field: impl Into<String>) -> Self {
        Self::InvalidShape(field.into())
    }

    /// Creates a `DuplicateUri` error.
    #[must_use]
    pub fn duplicate_uri(uri: impl Into<String>) -> Self {
        Self::DuplicateUri(uri.into())
    }

    /// Creates an `IllegalLexicalValue` error.
    #[must_use]
    pub fn illegal_lexical_value(lexical_value: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::IllegalLexicalValue {
            lexical_value: lexical_value.into(),
            uri: uri.into(),
        }
    }

    /// Creates an `UnknownDatatype` error.
    #[must_use]
    pub fn unknown_datatype(uri: impl Into<String>) -> Self {
        Self::UnknownDatatype(uri.into())
    }

    /// Creates an `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns `true` if this is a missing argument error.
    #[must_use]
    pub const fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument)
    }

    /// Returns `true` if this is an invalid shape error.
    #[must_use]
    pub const fn is_invalid_shape(&self) -> bool {
        matches!(self, Self::InvalidShape(_))
    }

    /// Returns `true` if this is a duplicate URI error.
    #[must_use]
    pub const fn is_duplicate_uri(&self) -> bool {
        matches!(self, Self::DuplicateUri(_))
    }

    /// Returns `true` if this is an illegal lexical value error.
    #[must_use]
    pub const fn is_illegal_lexical_value(&self) -> bool {
        matches!(self, Self::IllegalLexicalValue { .. })
    }

    /// Returns `true` if this is an unknown datatype error.
    #[must_use]
    pub const fn is_unknown_datatype(&self) -> bool {
        matches!(self, Self::UnknownDatatype(_))
    }

    /// Returns the field name if this is an `InvalidShape` error.
    #[must_use]
    pub fn shape_field(&self) -> Option<&str> {
        match self {
            Self::InvalidShape(field) => Some(field),
            _ => None,
        }
    }
}
