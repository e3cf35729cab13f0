//! Datatype descriptors and the constructors registration produces from them.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::DatatypeRegistryError;
use crate::models::{Literal, LiteralValue};

/// A literal datatype: a URI-keyed pair of legality and equality predicates.
///
/// Implementations are registered once and then shared by every literal
/// constructed for them.
///
/// # Example
///
/// ```
/// use datatype_registry_sdk::{DatatypeDescriptor, Literal, LiteralValue};
///
/// struct Boolean;
///
/// impl DatatypeDescriptor for Boolean {
///     fn uri(&self) -> &str {
///         "urn:example:boolean"
///     }
///
///     fn is_legal(&self, lexical_value: &str) -> bool {
///         matches!(lexical_value, "true" | "false" | "1" | "0")
///     }
///
///     fn equals(&self, this: &Literal, other: &dyn LiteralValue) -> bool {
///         other.datatype_uri() == self.uri()
///             && self.canonicalise(this.lexical_value())
///                 == self.canonicalise(other.lexical_value())
///     }
///
///     fn canonicalise(&self, lexical_value: &str) -> String {
///         match lexical_value {
///             "1" => "true".to_owned(),
///             "0" => "false".to_owned(),
///             other => other.to_owned(),
///         }
///     }
/// }
/// ```
pub trait DatatypeDescriptor: Send + Sync {
    /// The unique URI identifying this datatype.
    fn uri(&self) -> &str;

    /// Checks whether `lexical_value` is in the lexical space of this datatype.
    fn is_legal(&self, lexical_value: &str) -> bool;

    /// Checks whether `this` has the same value as `other`.
    ///
    /// `other` may belong to any datatype, registered or not. Implementations
    /// should return `false` when the comparison cannot be carried out rather
    /// than panic.
    fn equals(&self, this: &Literal, other: &dyn LiteralValue) -> bool;

    /// Returns the canonical lexical form among values equal to `lexical_value`.
    fn canonicalise(&self, lexical_value: &str) -> String {
        lexical_value.to_owned()
    }

    /// Converts a literal of another datatype into a lexical value of this one.
    ///
    /// Returns `None` when `other` has no counterpart here.
    fn import(&self, _other: &dyn LiteralValue) -> Option<String> {
        None
    }

    /// Converts `this` into a lexical value of the datatype `target_uri`.
    ///
    /// Returns `None` when there is no such conversion.
    fn export(&self, _this: &Literal, _target_uri: &str) -> Option<String> {
        None
    }
}

/// Legality predicate accepted by [`DatatypeDefinition`].
pub type LegalityFn = dyn Fn(&str) -> bool + Send + Sync;

/// Equality predicate accepted by [`DatatypeDefinition`].
pub type EqualityFn = dyn Fn(&Literal, &dyn LiteralValue) -> bool + Send + Sync;

/// Import conversion accepted by [`DatatypeDefinition`].
pub type ImportFn = dyn Fn(&dyn LiteralValue) -> Option<String> + Send + Sync;

/// Export conversion accepted by [`DatatypeDefinition`].
pub type ExportFn = dyn Fn(&Literal, &str) -> Option<String> + Send + Sync;

/// A datatype assembled from closures.
///
/// Every field is optional until [`DatatypeDefinition::into_descriptor`]
/// checks the shape, in the order `uri`, `isLegal`, `equals`. The `import`
/// and `export` conversions stay optional.
#[derive(Default)]
pub struct DatatypeDefinition {
    uri: Option<String>,
    is_legal: Option<Box<LegalityFn>>,
    equals: Option<Box<EqualityFn>>,
    import: Option<Box<ImportFn>>,
    export: Option<Box<ExportFn>>,
}

impl DatatypeDefinition {
    /// Field name reported when the URI is missing or empty.
    pub const URI_FIELD: &'static str = "uri";
    /// Field name reported when the legality predicate is missing.
    pub const IS_LEGAL_FIELD: &'static str = "isLegal";
    /// Field name reported when the equality predicate is missing.
    pub const EQUALS_FIELD: &'static str = "equals";

    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the datatype URI.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the legality predicate.
    #[must_use]
    pub fn with_is_legal<F>(mut self, is_legal: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.is_legal = Some(Box::new(is_legal));
        self
    }

    /// Sets the equality predicate.
    #[must_use]
    pub fn with_equals<F>(mut self, equals: F) -> Self
    where
        F: Fn(&Literal, &dyn LiteralValue) -> bool + Send + Sync + 'static,
    {
        self.equals = Some(Box::new(equals));
        self
    }

    /// Sets the conversion from literals of other datatypes.
    #[must_use]
    pub fn with_import<F>(mut self, import: F) -> Self
    where
        F: Fn(&dyn LiteralValue) -> Option<String> + Send + Sync + 'static,
    {
        self.import = Some(Box::new(import));
        self
    }

    /// Sets the conversion to other datatypes.
    #[must_use]
    pub fn with_export<F>(mut self, export: F) -> Self
    where
        F: Fn(&Literal, &str) -> Option<String> + Send + Sync + 'static,
    {
        self.export = Some(Box::new(export));
        self
    }

    /// Returns the URI, if one was set.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Checks the definition's shape and turns it into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` naming the first field, in the order `uri`,
    /// `isLegal`, `equals`, that is missing. An empty URI counts as missing.
    pub fn into_descriptor(self) -> Result<DefinedDatatype, DatatypeRegistryError> {
        let Some(uri) = self.uri.filter(|uri| !uri.is_empty()) else {
            return Err(DatatypeRegistryError::invalid_shape(Self::URI_FIELD));
        };
        let is_legal = self
            .is_legal
            .ok_or_else(|| DatatypeRegistryError::invalid_shape(Self::IS_LEGAL_FIELD))?;
        let equals = self
            .equals
            .ok_or_else(|| DatatypeRegistryError::invalid_shape(Self::EQUALS_FIELD))?;

        Ok(DefinedDatatype {
            uri,
            is_legal,
            equals,
            import: self.import,
            export: self.export,
        })
    }
}

impl fmt::Debug for DatatypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatatypeDefinition")
            .field("uri", &self.uri)
            .field("is_legal", &self.is_legal.is_some())
            .field("equals", &self.equals.is_some())
            .field("import", &self.import.is_some())
            .field("export", &self.export.is_some())
            .finish()
    }
}

/// A shape-checked [`DatatypeDefinition`].
pub struct DefinedDatatype {
    uri: String,
    is_legal: Box<LegalityFn>,
    equals: Box<EqualityFn>,
    import: Option<Box<ImportFn>>,
    export: Option<Box<ExportFn>>,
}

impl DatatypeDescriptor for DefinedDatatype {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn is_legal(&self, lexical_value: &str) -> bool {
        (self.is_legal)(lexical_value)
    }

    fn equals(&self, this: &Literal, other: &dyn LiteralValue) -> bool {
        (self.equals)(this, other)
    }

    fn import(&self, other: &dyn LiteralValue) -> Option<String> {
        self.import.as_ref().and_then(|import| import(other))
    }

    fn export(&self, this: &Literal, target_uri: &str) -> Option<String> {
        self.export
            .as_ref()
            .and_then(|export| export(this, target_uri))
    }
}

impl fmt::Debug for DefinedDatatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefinedDatatype")
            .field("uri", &self.uri)
            .finish_non_exhaustive()
    }
}

/// Constructor bound to one registered datatype.
///
/// Returned by registration and shared through `Arc`; every literal it
/// constructs holds the same binding.
pub struct DatatypeConstructor {
    id: Uuid,
    uri: String,
    descriptor: Arc<dyn DatatypeDescriptor>,
}

impl DatatypeConstructor {
    /// Binds a constructor to `descriptor`.
    ///
    /// The URI is read once here; later calls to `descriptor.uri()` are not
    /// consulted. Constructors built here are not registered: obtain shared
    /// constructors from the registry instead.
    #[doc(hidden)]
    #[must_use]
    pub fn new(descriptor: Arc<dyn DatatypeDescriptor>) -> Self {
        let uri = descriptor.uri().to_owned();
        Self {
            id: Self::id_for(&uri),
            uri,
            descriptor,
        }
    }

    /// Deterministic UUID (v5, URL namespace) for a datatype URI.
    #[must_use]
    pub fn id_for(uri: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_URL, uri.as_bytes())
    }

    /// Deterministic id derived from the URI.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The datatype URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Checks a lexical value against the bound legality predicate.
    #[must_use]
    pub fn is_legal(&self, lexical_value: &str) -> bool {
        self.descriptor.is_legal(lexical_value)
    }

    /// The bound descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &dyn DatatypeDescriptor {
        self.descriptor.as_ref()
    }

    /// Constructs a literal of this datatype.
    ///
    /// # Errors
    ///
    /// Returns `IllegalLexicalValue` if the legality predicate rejects
    /// `lexical_value`; no literal is produced in that case.
    pub fn construct(
        self: &Arc<Self>,
        lexical_value: impl Into<String>,
    ) -> Result<Literal, DatatypeRegistryError> {
        let lexical_value = lexical_value.into();
        if !self.is_legal(&lexical_value) {
            return Err(DatatypeRegistryError::illegal_lexical_value(
                lexical_value,
                &self.uri,
            ));
        }
        Ok(Literal::new(Arc::clone(self), lexical_value))
    }
}

impl fmt::Debug for DatatypeConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatatypeConstructor")
            .field("id", &self.id)
            .field("uri", &self.uri)
            .finish_non_exhaustive()
    }
}
