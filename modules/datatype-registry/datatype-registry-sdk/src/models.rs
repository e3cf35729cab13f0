//! Public models for the `datatype-registry` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `datatype-registry` module and its consumers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::descriptor::DatatypeConstructor;
use crate::error::DatatypeRegistryError;

/// Read access to a literal's datatype URI and lexical value.
///
/// This is the argument type of `equals`, so literals can be compared with
/// literals of datatypes the registry does not know about.
pub trait LiteralValue {
    /// URI of the literal's datatype.
    fn datatype_uri(&self) -> &str;

    /// The literal's lexical value.
    fn lexical_value(&self) -> &str;
}

/// A value of a registered datatype.
///
/// The lexical value is fixed at construction and was accepted by the
/// datatype's legality predicate.
#[derive(Clone)]
pub struct Literal {
    datatype: Arc<DatatypeConstructor>,
    lexical_value: String,
}

impl Literal {
    pub(crate) const fn new(datatype: Arc<DatatypeConstructor>, lexical_value: String) -> Self {
        Self {
            datatype,
            lexical_value,
        }
    }

    /// The lexical value this literal was constructed from.
    #[must_use]
    pub fn lexical_value(&self) -> &str {
        &self.lexical_value
    }

    /// The constructor that produced this literal.
    #[must_use]
    pub const fn datatype(&self) -> &Arc<DatatypeConstructor> {
        &self.datatype
    }

    /// URI of this literal's datatype.
    #[must_use]
    pub fn datatype_uri(&self) -> &str {
        self.datatype.uri()
    }

    /// Checks whether this literal has the same value as `other`, using the
    /// datatype's equality predicate.
    ///
    /// The relation is not assumed to be symmetric.
    #[must_use]
    pub fn equals(&self, other: &dyn LiteralValue) -> bool {
        self.datatype.descriptor().equals(self, other)
    }

    /// Returns the literal in its datatype's canonical form.
    ///
    /// Falls back to a copy of `self` when the canonical form is not itself
    /// legal for the datatype.
    #[must_use]
    pub fn canonicalise(&self) -> Self {
        let canonical = self.datatype.descriptor().canonicalise(&self.lexical_value);
        if canonical == self.lexical_value {
            return self.clone();
        }
        self.datatype
            .construct(canonical)
            .unwrap_or_else(|_| self.clone())
    }

    /// Detaches the literal from its constructor.
    #[must_use]
    pub fn to_typed(&self) -> TypedLiteral {
        TypedLiteral::new(self.datatype_uri(), &self.lexical_value)
    }
}

impl LiteralValue for Literal {
    fn datatype_uri(&self) -> &str {
        self.datatype.uri()
    }

    fn lexical_value(&self) -> &str {
        &self.lexical_value
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Literal")
            .field("datatype", &self.datatype.uri())
            .field("lexical_value", &self.lexical_value)
            .finish()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"^^<{}>", self.lexical_value, self.datatype.uri())
    }
}

/// An unchecked `(datatype URI, lexical value)` pair.
///
/// Used to pass literals across the API boundary and to compare registered
/// literals with literals of external datatypes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedLiteral {
    /// URI of the datatype.
    #[serde(rename = "uri")]
    pub datatype_uri: String,
    /// Lexical value.
    pub lexical_value: String,
}

impl TypedLiteral {
    /// Creates a new `TypedLiteral`.
    #[must_use]
    pub fn new(datatype_uri: impl Into<String>, lexical_value: impl Into<String>) -> Self {
        Self {
            datatype_uri: datatype_uri.into(),
            lexical_value: lexical_value.into(),
        }
    }
}

impl LiteralValue for TypedLiteral {
    fn datatype_uri(&self) -> &str {
        &self.datatype_uri
    }

    fn lexical_value(&self) -> &str {
        &self.lexical_value
    }
}

impl From<&Literal> for TypedLiteral {
    fn from(literal: &Literal) -> Self {
        literal.to_typed()
    }
}

/// Outcome of registering one datatype in a batch.
#[derive(Debug, Clone)]
pub enum RegisterResult {
    /// The datatype was registered.
    Ok(Arc<DatatypeConstructor>),
    /// Registration failed; the registry is unchanged for this item.
    Err {
        /// The URI that was attempted, if the descriptor had one.
        uri: Option<String>,
        /// Why registration failed.
        error: DatatypeRegistryError,
    },
}

impl RegisterResult {
    /// Returns `true` if the datatype was registered.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if registration failed.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err { .. })
    }

    /// Returns the registered constructor, if any.
    #[must_use]
    pub const fn constructor(&self) -> Option<&Arc<DatatypeConstructor>> {
        match self {
            Self::Ok(constructor) => Some(constructor),
            Self::Err { .. } => None,
        }
    }

    /// Returns the registration error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&DatatypeRegistryError> {
        match self {
            Self::Ok(_) => None,
            Self::Err { error, .. } => Some(error),
        }
    }
}

/// Counts of a batch registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterSummary {
    /// Number of datatypes registered.
    pub succeeded: usize,
    /// Number of datatypes rejected.
    pub failed: usize,
}

impl RegisterSummary {
    /// Summarises a batch of results.
    #[must_use]
    pub fn from_results(results: &[RegisterResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        Self {
            succeeded,
            failed: results.len() - succeeded,
        }
    }

    /// Total number of datatypes processed.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Returns `true` if every item registered.
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
