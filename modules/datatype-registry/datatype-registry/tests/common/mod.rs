#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for datatype-registry integration tests

use std::sync::Arc;

use datatype_registry::{
    DatatypeDefinition, DatatypeDescriptor, Literal, LiteralValue, config::DatatypeRegistryConfig,
    domain::service::DatatypeRegistryService, infra::InMemoryDatatypeRepository,
};

pub const CARDINAL_URI: &str = "lindt/randomdt.js#cardinal";
pub const STUPID_URI: &str = "lindt/randomdt.js#stupid";
pub const XSD_URI: &str = "http://www.w3.org/2001/XMLSchema#";

pub fn create_service() -> Arc<DatatypeRegistryService> {
    create_service_with(DatatypeRegistryConfig::default())
}

pub fn create_service_with(config: DatatypeRegistryConfig) -> Arc<DatatypeRegistryService> {
    let repo = Arc::new(InMemoryDatatypeRepository::new());
    Arc::new(DatatypeRegistryService::new(repo, config))
}

/// "one" and "two", equal to themselves and to the XML Schema
/// literals "1" and "2", from which they can also be imported.
pub struct Cardinal;

impl Cardinal {
    fn ordinal(lexical_value: &str) -> Option<u32> {
        match lexical_value {
            "one" => Some(1),
            "two" => Some(2),
            _ => None,
        }
    }

    fn name(ordinal: u32) -> Option<&'static str> {
        match ordinal {
            1 => Some("one"),
            2 => Some("two"),
            _ => None,
        }
    }

    fn xsd_ordinal(other: &dyn LiteralValue) -> Result<u32, String> {
        other
            .lexical_value()
            .parse()
            .map_err(|e| format!("{} is not an integer: {e}", other.lexical_value()))
    }

    fn try_equals(this: &Literal, other: &dyn LiteralValue) -> Result<bool, String> {
        if other.datatype_uri() == CARDINAL_URI {
            return Ok(other.lexical_value() == this.lexical_value());
        }
        if other.datatype_uri() == XSD_URI {
            let ordinal = Self::xsd_ordinal(other)?;
            return Ok(Self::ordinal(this.lexical_value()) == Some(ordinal));
        }
        Ok(false)
    }
}

impl DatatypeDescriptor for Cardinal {
    fn uri(&self) -> &'static str {
        CARDINAL_URI
    }

    fn is_legal(&self, lexical_value: &str) -> bool {
        Self::ordinal(lexical_value).is_some()
    }

    fn equals(&self, this: &Literal, other: &dyn LiteralValue) -> bool {
        Self::try_equals(this, other).unwrap_or(false)
    }

    fn import(&self, other: &dyn LiteralValue) -> Option<String> {
        if other.datatype_uri() != XSD_URI {
            return None;
        }
        let ordinal = Self::xsd_ordinal(other).ok()?;
        Self::name(ordinal).map(ToOwned::to_owned)
    }
}

/// Non-negative integers under the bare XML Schema namespace.
pub fn xsd_integer() -> DatatypeDefinition {
    DatatypeDefinition::new()
        .with_uri(XSD_URI)
        .with_is_legal(|value| value.parse::<u64>().is_ok())
        .with_equals(|this: &Literal, other: &dyn LiteralValue| {
            other.datatype_uri() == XSD_URI && other.lexical_value() == this.lexical_value()
        })
}

/// Accepts everything and equals everything.
pub fn stupid() -> DatatypeDefinition {
    DatatypeDefinition::new()
        .with_uri(STUPID_URI)
        .with_is_legal(|_| true)
        .with_equals(|_: &Literal, _: &dyn LiteralValue| true)
}
