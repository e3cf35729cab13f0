//! Domain service for the Datatype Registry module.

use std::sync::Arc;

use datatype_registry_sdk::{
    DatatypeConstructor, DatatypeDefinition, DatatypeDescriptor, Literal, RegisterResult,
    TypedLiteral,
};
use tracing::{debug, warn};

use super::error::DomainError;
use super::repo::DatatypeRepository;
use crate::config::DatatypeRegistryConfig;

/// Domain service for datatype registration, lookup and construction.
///
/// This service checks descriptors and delegates storage to the repository.
pub struct DatatypeRegistryService {
    repo: Arc<dyn DatatypeRepository>,
    config: DatatypeRegistryConfig,
}

impl DatatypeRegistryService {
    /// Creates a new `DatatypeRegistryService` with the given repository and config.
    #[must_use]
    pub fn new(repo: Arc<dyn DatatypeRepository>, config: DatatypeRegistryConfig) -> Self {
        Self { repo, config }
    }

    /// Returns the constructor registered under `uri`, if any.
    #[must_use]
    pub fn get_datatype(&self, uri: &str) -> Option<Arc<DatatypeConstructor>> {
        self.repo.get(uri)
    }

    /// Registers a datatype and returns its constructor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape("uri")` for an empty URI and `DuplicateUri` if
    /// the URI is taken. The registry is unchanged on error.
    pub fn register_datatype(
        &self,
        descriptor: Arc<dyn DatatypeDescriptor>,
    ) -> Result<Arc<DatatypeConstructor>, DomainError> {
        if descriptor.uri().is_empty() {
            warn!("datatype registration rejected: empty uri");
            return Err(DomainError::invalid_shape(DatatypeDefinition::URI_FIELD));
        }

        let constructor = Arc::new(DatatypeConstructor::new(descriptor));
        let uri = constructor.uri().to_owned();

        match self.repo.insert(constructor) {
            Ok(registered) => {
                debug!(
                    uri = %registered.uri(),
                    datatype_id = %registered.id(),
                    "registered datatype"
                );
                Ok(registered)
            }
            Err(e) => {
                warn!(uri = %uri, error = %e, "datatype registration rejected");
                Err(e)
            }
        }
    }

    /// Registers a datatype assembled from closures.
    ///
    /// # Errors
    ///
    /// Checked in order: `MissingArgument` if `definition` is `None`,
    /// `InvalidShape` for a missing `uri`, `isLegal` or `equals`, then
    /// `DuplicateUri`.
    pub fn register_definition(
        &self,
        definition: Option<DatatypeDefinition>,
    ) -> Result<Arc<DatatypeConstructor>, DomainError> {
        let Some(definition) = definition else {
            warn!("datatype registration rejected: no descriptor");
            return Err(DomainError::MissingArgument);
        };

        let uri = definition.uri().map(ToOwned::to_owned);
        let descriptor = definition.into_descriptor().map_err(|e| {
            warn!(uri = ?uri, error = %e, "datatype registration rejected");
            DomainError::from(e)
        })?;

        self.register_datatype(Arc::new(descriptor))
    }

    /// Registers datatypes in batch.
    ///
    /// Returns a `RegisterResult` for each input descriptor, preserving order.
    /// A failure does not stop the remaining registrations.
    #[must_use]
    pub fn register_batch(
        &self,
        descriptors: Vec<Arc<dyn DatatypeDescriptor>>,
    ) -> Vec<RegisterResult> {
        let mut results = Vec::with_capacity(descriptors.len());

        for descriptor in descriptors {
            let uri = Some(descriptor.uri().to_owned()).filter(|uri| !uri.is_empty());
            let result = match self.register_datatype(descriptor) {
                Ok(registered) => RegisterResult::Ok(registered),
                Err(e) => RegisterResult::Err {
                    uri,
                    error: e.into(),
                },
            };
            results.push(result);
        }

        results
    }

    /// Constructs a literal of the datatype registered under `uri`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDatatype` if nothing is registered under `uri` and
    /// `IllegalLexicalValue` if the datatype rejects `lexical_value`.
    pub fn parse(&self, uri: &str, lexical_value: &str) -> Result<Literal, DomainError> {
        let constructor = self
            .repo
            .get(uri)
            .ok_or_else(|| DomainError::unknown_datatype(uri))?;

        constructor.construct(lexical_value).map_err(|e| {
            debug!(uri = %uri, lexical_value = %lexical_value, "illegal lexical value");
            DomainError::from(e)
        })
    }

    /// Returns `true` if `lexical_value` constructs a literal of the datatype
    /// registered under `uri`.
    #[must_use]
    pub fn is_valid_literal(&self, uri: &str, lexical_value: &str) -> bool {
        self.parse(uri, lexical_value).is_ok()
    }

    /// Returns `true` if `literal` is a valid value of the datatype
    /// registered under `uri`.
    ///
    /// A literal of the same datatype must be legal. A literal of another
    /// datatype must construct through the registry, and then either the
    /// target's `import` or the source's `export` must yield a lexical value
    /// the target finds legal.
    #[must_use]
    pub fn accepts_literal(&self, uri: &str, literal: &TypedLiteral) -> bool {
        let Some(target) = self.repo.get(uri) else {
            return false;
        };
        if literal.datatype_uri == uri {
            return target.is_legal(&literal.lexical_value);
        }

        let source = match self.parse(&literal.datatype_uri, &literal.lexical_value) {
            Ok(source) => source,
            Err(e) => {
                debug!(uri = %uri, error = %e, "source literal rejected");
                return false;
            }
        };

        let imported = target
            .descriptor()
            .import(&source)
            .is_some_and(|lexical_value| target.is_legal(&lexical_value));
        imported
            || source
                .datatype()
                .descriptor()
                .export(&source, uri)
                .is_some_and(|lexical_value| target.is_legal(&lexical_value))
    }

    /// Checks whether two typed literals denote the same value.
    ///
    /// Both literals are constructed through the registry first; if either
    /// fails the answer is `false`. Literals with the same datatype and
    /// lexical value are equal without consulting any descriptor. Otherwise
    /// the first literal's datatype decides, and with `bidirectional_equality`
    /// the second literal's datatype is consulted too.
    #[must_use]
    pub fn literals_equal(&self, a: &TypedLiteral, b: &TypedLiteral) -> bool {
        let parsed = self.parse(&a.datatype_uri, &a.lexical_value).and_then(|left| {
            self.parse(&b.datatype_uri, &b.lexical_value)
                .map(|right| (left, right))
        });

        let (left, right) = match parsed {
            Ok(pair) => pair,
            Err(e) => {
                debug!(error = %e, "literal comparison failed, treating as unequal");
                return false;
            }
        };

        if left.datatype_uri() == right.datatype_uri()
            && left.lexical_value() == right.lexical_value()
        {
            return true;
        }

        left.equals(&right) || (self.config.bidirectional_equality && right.equals(&left))
    }

    /// Returns `literal` in its datatype's canonical form.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDatatype` or `IllegalLexicalValue` if `literal` cannot
    /// be constructed through the registry.
    pub fn canonicalise(&self, literal: &TypedLiteral) -> Result<TypedLiteral, DomainError> {
        let parsed = self.parse(&literal.datatype_uri, &literal.lexical_value)?;
        Ok(parsed.canonicalise().to_typed())
    }

    /// Checks if a datatype is registered under `uri`.
    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        self.repo.exists(uri)
    }

    /// URIs of all registered datatypes, sorted.
    #[must_use]
    pub fn datatype_uris(&self) -> Vec<String> {
        self.repo.uris()
    }

    /// Number of registered datatypes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    /// Returns `true` if no datatype has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatype_registry_sdk::LiteralValue;
    use parking_lot::Mutex;
    use std::collections::BTreeMap;
    use tracing_test::traced_test;

    #[derive(Default)]
    struct MockRepo {
        entries: Mutex<BTreeMap<String, Arc<DatatypeConstructor>>>,
        fail_inserts: bool,
    }

    impl MockRepo {
        fn failing() -> Self {
            Self {
                entries: Mutex::default(),
                fail_inserts: true,
            }
        }
    }

    impl DatatypeRepository for MockRepo {
        fn insert(
            &self,
            constructor: Arc<DatatypeConstructor>,
        ) -> Result<Arc<DatatypeConstructor>, DomainError> {
            if self.fail_inserts {
                return Err(anyhow::anyhow!("storage unavailable").into());
            }
            let mut entries = self.entries.lock();
            if entries.contains_key(constructor.uri()) {
                return Err(DomainError::duplicate_uri(constructor.uri()));
            }
            entries.insert(constructor.uri().to_owned(), Arc::clone(&constructor));
            Ok(constructor)
        }

        fn get(&self, uri: &str) -> Option<Arc<DatatypeConstructor>> {
            self.entries.lock().get(uri).cloned()
        }

        fn uris(&self) -> Vec<String> {
            self.entries.lock().keys().cloned().collect()
        }

        fn len(&self) -> usize {
            self.entries.lock().len()
        }
    }

    /// Legal values are decimal digits; equal when the same digit, and
    /// one-directionally equal to a `urn:test:word` literal spelling the digit.
    struct Digit;

    impl DatatypeDescriptor for Digit {
        fn uri(&self) -> &'static str {
            "urn:test:digit"
        }

        fn is_legal(&self, lexical_value: &str) -> bool {
            lexical_value.len() == 1 && lexical_value.chars().all(|c| c.is_ascii_digit())
        }

        fn equals(&self, this: &Literal, other: &dyn LiteralValue) -> bool {
            match other.datatype_uri() {
                "urn:test:digit" => other.lexical_value() == this.lexical_value(),
                "urn:test:word" => matches!(
                    (this.lexical_value(), other.lexical_value()),
                    ("1", "one") | ("2", "two")
                ),
                _ => false,
            }
        }
    }

    fn word() -> DatatypeDefinition {
        DatatypeDefinition::new()
            .with_uri("urn:test:word")
            .with_is_legal(|value| !value.is_empty() && value.chars().all(char::is_alphabetic))
            .with_equals(|this: &Literal, other: &dyn LiteralValue| {
                other.datatype_uri() == "urn:test:word"
                    && other.lexical_value() == this.lexical_value()
            })
    }

    fn service_with(config: DatatypeRegistryConfig) -> DatatypeRegistryService {
        DatatypeRegistryService::new(Arc::new(MockRepo::default()), config)
    }

    fn service() -> DatatypeRegistryService {
        service_with(DatatypeRegistryConfig::default())
    }

    #[test]
    fn test_register_then_get_returns_same_constructor() {
        let service = service();
        let registered = service.register_datatype(Arc::new(Digit)).unwrap();
        let fetched = service.get_datatype("urn:test:digit").unwrap();
        assert!(Arc::ptr_eq(&registered, &fetched));
        assert_eq!(service.len(), 1);
        assert!(service.contains("urn:test:digit"));
    }

    #[test]
    fn test_get_unregistered_is_none() {
        let service = service();
        assert!(service.get_datatype("unregistered-uri").is_none());
        assert!(service.is_empty());
    }

    #[test]
    fn test_duplicate_keeps_first_entry() {
        let service = service();
        let first = service.register_datatype(Arc::new(Digit)).unwrap();

        let err = service.register_datatype(Arc::new(Digit)).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUri(ref uri) if uri == "urn:test:digit"));

        let fetched = service.get_datatype("urn:test:digit").unwrap();
        assert!(Arc::ptr_eq(&first, &fetched));
    }

    #[test]
    fn test_empty_uri_rejected() {
        let service = service();
        let definition = DatatypeDefinition::new()
            .with_uri("")
            .with_is_legal(|_| true)
            .with_equals(|_: &Literal, _: &dyn LiteralValue| true);

        let err = service.register_definition(Some(definition)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidShape(ref f) if f == "uri"));
        assert!(service.is_empty());
    }

    #[test]
    fn test_register_definition_checks_in_order() {
        let service = service();

        let err = service.register_definition(None).unwrap_err();
        assert!(matches!(err, DomainError::MissingArgument));

        let err = service
            .register_definition(Some(DatatypeDefinition::new().with_uri("x")))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidShape(ref f) if f == "isLegal"));

        let err = service
            .register_definition(Some(
                DatatypeDefinition::new().with_uri("x").with_is_legal(|_| true),
            ))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidShape(ref f) if f == "equals"));

        assert!(service.is_empty());

        service.register_definition(Some(word())).unwrap();
        let err = service.register_definition(Some(word())).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateUri(_)));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_register_batch_preserves_order() {
        let service = service();
        let descriptors: Vec<Arc<dyn DatatypeDescriptor>> = vec![
            Arc::new(Digit) as Arc<dyn DatatypeDescriptor>,
            Arc::new(word().into_descriptor().unwrap()) as Arc<dyn DatatypeDescriptor>,
            Arc::new(Digit) as Arc<dyn DatatypeDescriptor>,
        ];
        let results = service.register_batch(descriptors);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(results[2].is_err());
        match &results[2] {
            RegisterResult::Err { uri, error } => {
                assert_eq!(uri.as_deref(), Some("urn:test:digit"));
                assert!(error.is_duplicate_uri());
            }
            RegisterResult::Ok(_) => panic!("Expected RegisterResult::Err"),
        }
    }

    #[test]
    fn test_parse() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();

        let seven = service.parse("urn:test:digit", "7").unwrap();
        assert_eq!(seven.lexical_value(), "7");

        let err = service.parse("urn:test:digit", "77").unwrap_err();
        assert!(matches!(err, DomainError::IllegalLexicalValue { .. }));

        let err = service.parse("urn:test:nothing", "7").unwrap_err();
        assert!(matches!(err, DomainError::UnknownDatatype(_)));

        assert!(service.is_valid_literal("urn:test:digit", "3"));
        assert!(!service.is_valid_literal("urn:test:digit", "x"));
        assert!(!service.is_valid_literal("urn:test:nothing", "3"));
    }

    #[test]
    fn test_literals_equal_bidirectional() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();
        service.register_definition(Some(word())).unwrap();

        let digit_one = TypedLiteral::new("urn:test:digit", "1");
        let word_one = TypedLiteral::new("urn:test:word", "one");

        assert!(service.literals_equal(&digit_one, &word_one));
        // Only Digit knows about the cross-type equivalence.
        assert!(service.literals_equal(&word_one, &digit_one));
        let word_two = TypedLiteral::new("urn:test:word", "two");
        assert!(!service.literals_equal(&digit_one, &word_two));
    }

    #[test]
    fn test_literals_equal_one_directional() {
        let service = service_with(DatatypeRegistryConfig {
            bidirectional_equality: false,
            ..DatatypeRegistryConfig::default()
        });
        service.register_datatype(Arc::new(Digit)).unwrap();
        service.register_definition(Some(word())).unwrap();

        let digit_one = TypedLiteral::new("urn:test:digit", "1");
        let word_one = TypedLiteral::new("urn:test:word", "one");

        assert!(service.literals_equal(&digit_one, &word_one));
        assert!(!service.literals_equal(&word_one, &digit_one));
    }

    #[traced_test]
    #[test]
    fn test_literals_equal_unconstructible_is_false() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();

        let digit_one = TypedLiteral::new("urn:test:digit", "1");
        let illegal = TypedLiteral::new("urn:test:digit", "11");
        assert!(!service.literals_equal(&digit_one, &illegal));
        let unknown = TypedLiteral::new("urn:test:nothing", "1");
        assert!(!service.literals_equal(&digit_one, &unknown));
        assert!(logs_contain("treating as unequal"));
    }

    #[test]
    fn test_canonicalise_default_is_identity() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();

        let typed = TypedLiteral::new("urn:test:digit", "4");
        assert_eq!(service.canonicalise(&typed).unwrap(), typed);

        let err = service
            .canonicalise(&TypedLiteral::new("urn:test:digit", "44"))
            .unwrap_err();
        assert!(matches!(err, DomainError::IllegalLexicalValue { .. }));
    }

    #[test]
    fn test_internal_repo_error_propagates() {
        let service = DatatypeRegistryService::new(
            Arc::new(MockRepo::failing()),
            DatatypeRegistryConfig::default(),
        );
        let err = service.register_datatype(Arc::new(Digit)).unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[traced_test]
    #[test]
    fn test_registration_is_logged() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();
        assert!(logs_contain("registered datatype"));
        assert!(logs_contain("urn:test:digit"));

        assert!(service.register_datatype(Arc::new(Digit)).is_err());
        assert!(logs_contain("datatype registration rejected"));
    }

    #[test]
    fn test_datatype_uris_sorted() {
        let service = service();
        service.register_definition(Some(word())).unwrap();
        service.register_datatype(Arc::new(Digit)).unwrap();
        assert_eq!(
            service.datatype_uris(),
            vec!["urn:test:digit", "urn:test:word"]
        );
    }

    #[test]
    fn test_identical_literals_equal_without_descriptor() {
        let service = service();
        service
            .register_definition(Some(
                DatatypeDefinition::new()
                    .with_uri("urn:test:never")
                    .with_is_legal(|value| !value.is_empty())
                    .with_equals(|_: &Literal, _: &dyn LiteralValue| false),
            ))
            .unwrap();

        let a = TypedLiteral::new("urn:test:never", "a");
        assert!(service.literals_equal(&a, &a));
        assert!(service.literals_equal(&a, &TypedLiteral::new("urn:test:never", "a")));
        assert!(!service.literals_equal(&a, &TypedLiteral::new("urn:test:never", "b")));

        let empty = TypedLiteral::new("urn:test:never", "");
        assert!(!service.literals_equal(&empty, &empty));
    }

    /// Imports digits from `urn:test:digit` and exports itself to it.
    fn word_with_conversions() -> DatatypeDefinition {
        word()
            .with_import(|other: &dyn LiteralValue| {
                let spelled = match (other.datatype_uri(), other.lexical_value()) {
                    ("urn:test:digit", "1") => "one",
                    ("urn:test:digit", "2") => "two",
                    _ => return None,
                };
                Some(spelled.to_owned())
            })
            .with_export(|this: &Literal, target_uri: &str| {
                let digit = match (target_uri, this.lexical_value()) {
                    ("urn:test:digit", "three") => "3",
                    ("urn:test:digit", "many") => "many",
                    _ => return None,
                };
                Some(digit.to_owned())
            })
    }

    #[test]
    fn test_accepts_literal_same_datatype() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();

        let seven = TypedLiteral::new("urn:test:digit", "7");
        assert!(service.accepts_literal("urn:test:digit", &seven));
        let illegal = TypedLiteral::new("urn:test:digit", "77");
        assert!(!service.accepts_literal("urn:test:digit", &illegal));
        assert!(!service.accepts_literal("urn:test:nothing", &seven));
    }

    #[test]
    fn test_accepts_literal_through_import() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();
        service
            .register_definition(Some(word_with_conversions()))
            .unwrap();

        let one = TypedLiteral::new("urn:test:digit", "1");
        assert!(service.accepts_literal("urn:test:word", &one));
        let nine = TypedLiteral::new("urn:test:digit", "9");
        assert!(!service.accepts_literal("urn:test:word", &nine));
    }

    #[test]
    fn test_accepts_literal_through_export() {
        let service = service();
        service.register_datatype(Arc::new(Digit)).unwrap();
        service
            .register_definition(Some(word_with_conversions()))
            .unwrap();

        let three = TypedLiteral::new("urn:test:word", "three");
        assert!(service.accepts_literal("urn:test:digit", &three));
        // Exported, but not a legal digit.
        let many = TypedLiteral::new("urn:test:word", "many");
        assert!(!service.accepts_literal("urn:test:digit", &many));
        let four = TypedLiteral::new("urn:test:word", "four");
        assert!(!service.accepts_literal("urn:test:digit", &four));
    }

    #[traced_test]
    #[test]
    fn test_accepts_literal_requires_constructible_source() {
        let service = service();
        service
            .register_definition(Some(word_with_conversions()))
            .unwrap();

        // `urn:test:digit` is not registered, so the import is never tried.
        let one = TypedLiteral::new("urn:test:digit", "1");
        assert!(!service.accepts_literal("urn:test:word", &one));
        assert!(logs_contain("source literal rejected"));
    }
}
