//! Built-in datatypes.

use datatype_registry_sdk::{DatatypeDescriptor, Literal, LiteralValue};

/// XML Schema namespace.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// URI of `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `xsd:string`: every lexical value is legal, and two strings are equal
/// when their lexical values are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct XsdString;

impl DatatypeDescriptor for XsdString {
    fn uri(&self) -> &'static str {
        XSD_STRING
    }

    fn is_legal(&self, _lexical_value: &str) -> bool {
        true
    }

    fn equals(&self, this: &Literal, other: &dyn LiteralValue) -> bool {
        other.datatype_uri() == XSD_STRING && other.lexical_value() == this.lexical_value()
    }
}
