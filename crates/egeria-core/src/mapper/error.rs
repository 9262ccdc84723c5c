//! Mapping error types.

use thiserror::Error;

use crate::instance::{PropertyCategory, TypeDefCategory};

/// Errors raised while decoding or encoding an instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapperError {
    /// The instance is not of the type this mapper handles.
    #[error(
        "Type mismatch: expected {expected}, found {}",
        found.as_deref().unwrap_or("<untyped>")
    )]
    TypeMismatch {
        expected: &'static str,
        found: Option<String>,
    },

    /// An enum property names a constant the domain enum does not declare.
    #[error("Unknown constant '{symbolic_name}' for enum {enum_name} on property {property}")]
    UnknownEnumConstant {
        property: String,
        enum_name: &'static str,
        symbolic_name: String,
    },

    /// A property category the beans cannot hold, under the reject policy.
    #[error("Unsupported property category {category} on property {property}")]
    UnsupportedPropertyCategory {
        property: String,
        category: PropertyCategory,
    },

    /// A known property arrived with a different category or primitive type.
    #[error("Property {property} expected {expected}, found {found}")]
    PropertyTypeMismatch {
        property: String,
        expected: String,
        found: String,
    },

    /// The registry has no definition for the type being encoded.
    #[error("Type definition not found: {0}")]
    UnknownTypeDef(String),

    /// The registry definition is of the wrong kind for this mapper.
    #[error("Type {type_name} is a {found} type, expected {expected}")]
    TypeCategoryMismatch {
        type_name: String,
        expected: TypeDefCategory,
        found: TypeDefCategory,
    },

    /// No bundled bean exists for this type name.
    #[error("No mapper for type: {0}")]
    UnmappedType(String),
}

impl MapperError {
    pub(crate) fn property_type(
        property: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        MapperError::PropertyTypeMismatch {
            property: property.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// True when the instance was simply of another type.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, MapperError::TypeMismatch { .. })
    }
}
