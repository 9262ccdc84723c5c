//! Schema beans: schema attributes and relational tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SystemAttributes, TypedBean, TypedClassification};
use crate::instance::{Classification, InstanceProperties};
use crate::mapper::{BeanSchema, DomainEnum};

// =============================================================================
// SORT ORDER
// =============================================================================

/// Order in which the values of a data item are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataItemSortOrder {
    Unknown,
    Ascending,
    Descending,
    Unsorted,
}

impl DomainEnum for DataItemSortOrder {
    const ENUM_NAME: &'static str = "DataItemSortOrder";

    fn constants() -> &'static [Self] {
        &[
            Self::Unknown,
            Self::Ascending,
            Self::Descending,
            Self::Unsorted,
        ]
    }

    fn ordinal(&self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Ascending => 1,
            Self::Descending => 2,
            Self::Unsorted => 99,
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Ascending => "ASCENDING",
            Self::Descending => "DESCENDING",
            Self::Unsorted => "UNSORTED",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown sort order.",
            Self::Ascending => "Sort the data items in ascending order.",
            Self::Descending => "Sort the data items in descending order.",
            Self::Unsorted => "Do not sort the data items.",
        }
    }
}

// =============================================================================
// SCHEMA ATTRIBUTE
// =============================================================================

/// An attribute within a schema type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaAttribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position of the attribute within its parent schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cardinality: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cardinality: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_duplicate_values: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_values: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value_override: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<DataItemSortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<TypedClassification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_classifications: Option<BTreeMap<String, Classification>>,
}

impl SchemaAttribute {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive(
                "qualifiedName",
                |b| b.qualified_name.as_ref(),
                |b, v| b.qualified_name = Some(v),
            )
            .primitive("name", |b| b.name.as_ref(), |b, v| b.name = Some(v))
            .primitive("description", |b| b.description.as_ref(), |b, v| b.description = Some(v))
            .primitive("position", |b| b.position.as_ref(), |b, v| b.position = Some(v))
            .primitive(
                "minCardinality",
                |b| b.min_cardinality.as_ref(),
                |b, v| b.min_cardinality = Some(v),
            )
            .primitive(
                "maxCardinality",
                |b| b.max_cardinality.as_ref(),
                |b, v| b.max_cardinality = Some(v),
            )
            .primitive(
                "allowsDuplicateValues",
                |b| b.allows_duplicate_values.as_ref(),
                |b, v| b.allows_duplicate_values = Some(v),
            )
            .primitive(
                "orderedValues",
                |b| b.ordered_values.as_ref(),
                |b, v| b.ordered_values = Some(v),
            )
            .primitive(
                "defaultValueOverride",
                |b| b.default_value_override.as_ref(),
                |b, v| b.default_value_override = Some(v),
            )
            .primitive("nativeClass", |b| b.native_class.as_ref(), |b, v| b.native_class = Some(v))
            .enumeration("sortOrder", |b| b.sort_order, |b, v| b.sort_order = Some(v))
            .map(
                "additionalProperties",
                |b| b.additional_properties.as_ref(),
                |b, v| b.additional_properties = Some(v),
            )
    }
}

entity_bean!(SchemaAttribute, "SchemaAttribute", SchemaAttribute::build_schema);

// =============================================================================
// RELATIONAL TABLE
// =============================================================================

/// A table within a relational database schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationalTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cardinality: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cardinality: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<DataItemSortOrder>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<TypedClassification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_classifications: Option<BTreeMap<String, Classification>>,
}

impl RelationalTable {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive(
                "qualifiedName",
                |b| b.qualified_name.as_ref(),
                |b, v| b.qualified_name = Some(v),
            )
            .primitive("name", |b| b.name.as_ref(), |b, v| b.name = Some(v))
            .primitive("description", |b| b.description.as_ref(), |b, v| b.description = Some(v))
            .primitive("position", |b| b.position.as_ref(), |b, v| b.position = Some(v))
            .primitive(
                "minCardinality",
                |b| b.min_cardinality.as_ref(),
                |b, v| b.min_cardinality = Some(v),
            )
            .primitive(
                "maxCardinality",
                |b| b.max_cardinality.as_ref(),
                |b, v| b.max_cardinality = Some(v),
            )
            .primitive("nativeClass", |b| b.native_class.as_ref(), |b, v| b.native_class = Some(v))
            .primitive(
                "isDeprecated",
                |b| b.is_deprecated.as_ref(),
                |b, v| b.is_deprecated = Some(v),
            )
            .enumeration("sortOrder", |b| b.sort_order, |b, v| b.sort_order = Some(v))
            .map(
                "additionalProperties",
                |b| b.additional_properties.as_ref(),
                |b, v| b.additional_properties = Some(v),
            )
    }
}

entity_bean!(RelationalTable, "RelationalTable", RelationalTable::build_schema);
