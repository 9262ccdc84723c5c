//! Property values carried by generic instances.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// The primitive type tag of a primitive property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveDefCategory {
    String,
    Int,
    Long,
    Short,
    Byte,
    Char,
    Boolean,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Date,
}

impl PrimitiveDefCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Double => "double",
            Self::BigInteger => "biginteger",
            Self::BigDecimal => "bigdecimal",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for PrimitiveDefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single primitive value, tagged with its primitive type.
///
/// Big numbers travel as their decimal string form so no precision is lost
/// between repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PrimitiveValue {
    String(String),
    Int(i32),
    Long(i64),
    Short(i16),
    Byte(i8),
    Char(char),
    Boolean(bool),
    Float(f32),
    Double(f64),
    BigInteger(String),
    BigDecimal(String),
    Date(DateTime<Utc>),
}

impl PrimitiveValue {
    /// The primitive type tag of this value.
    pub fn category(&self) -> PrimitiveDefCategory {
        match self {
            Self::String(_) => PrimitiveDefCategory::String,
            Self::Int(_) => PrimitiveDefCategory::Int,
            Self::Long(_) => PrimitiveDefCategory::Long,
            Self::Short(_) => PrimitiveDefCategory::Short,
            Self::Byte(_) => PrimitiveDefCategory::Byte,
            Self::Char(_) => PrimitiveDefCategory::Char,
            Self::Boolean(_) => PrimitiveDefCategory::Boolean,
            Self::Float(_) => PrimitiveDefCategory::Float,
            Self::Double(_) => PrimitiveDefCategory::Double,
            Self::BigInteger(_) => PrimitiveDefCategory::BigInteger,
            Self::BigDecimal(_) => PrimitiveDefCategory::BigDecimal,
            Self::Date(_) => PrimitiveDefCategory::Date,
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for PrimitiveValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

// =============================================================================
// PROPERTY VALUES
// =============================================================================

/// Category of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyCategory {
    Primitive,
    Enum,
    Map,
    Array,
    Struct,
    Unknown,
}

impl PropertyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "PRIMITIVE",
            Self::Enum => "ENUM",
            Self::Map => "MAP",
            Self::Array => "ARRAY",
            Self::Struct => "STRUCT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value attached to an entity, relationship or classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstancePropertyValue {
    /// A single primitive
    Primitive { value: PrimitiveValue },

    /// An enumeration constant
    #[serde(rename_all = "camelCase")]
    Enum {
        ordinal: i32,
        symbolic_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },

    /// Nested name to value mapping
    Map { values: InstanceProperties },

    /// Ordered list of values
    Array { values: Vec<InstancePropertyValue> },

    /// Named attributes of a structured value
    Struct { attributes: InstanceProperties },

    /// A category this library does not recognise
    #[serde(other)]
    Unknown,
}

impl InstancePropertyValue {
    /// Shorthand for a primitive value.
    pub fn primitive(value: impl Into<PrimitiveValue>) -> Self {
        Self::Primitive {
            value: value.into(),
        }
    }

    /// Shorthand for an enum value without a description.
    pub fn enumeration(ordinal: i32, symbolic_name: impl Into<String>) -> Self {
        Self::Enum {
            ordinal,
            symbolic_name: symbolic_name.into(),
            description: None,
        }
    }

    /// The category of this value.
    pub fn category(&self) -> PropertyCategory {
        match self {
            Self::Primitive { .. } => PropertyCategory::Primitive,
            Self::Enum { .. } => PropertyCategory::Enum,
            Self::Map { .. } => PropertyCategory::Map,
            Self::Array { .. } => PropertyCategory::Array,
            Self::Struct { .. } => PropertyCategory::Struct,
            Self::Unknown => PropertyCategory::Unknown,
        }
    }

    /// Human readable type of this value, used in error messages.
    pub fn type_label(&self) -> String {
        match self {
            Self::Primitive { value } => value.category().to_string(),
            other => other.category().to_string(),
        }
    }
}

// =============================================================================
// PROPERTY COLLECTIONS
// =============================================================================

/// Named property values of an instance.
///
/// Names are unique. Iteration is sorted by name so encoded output is
/// deterministic; callers must not rely on any particular order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceProperties {
    properties: BTreeMap<String, InstancePropertyValue>,
}

impl InstanceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: InstancePropertyValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a property, returning the previous value under that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: InstancePropertyValue,
    ) -> Option<InstancePropertyValue> {
        self.properties.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&InstancePropertyValue> {
        self.properties.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<InstancePropertyValue> {
        self.properties.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstancePropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, InstancePropertyValue)> for InstanceProperties {
    fn from_iter<I: IntoIterator<Item = (String, InstancePropertyValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for InstanceProperties {
    type Item = (String, InstancePropertyValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, InstancePropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}
