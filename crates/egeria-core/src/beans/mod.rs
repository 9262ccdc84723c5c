//! Typed domain beans.
//!
//! Beans are the strongly-typed side of the mapping. Each one declares its
//! known properties once in a [`BeanSchema`]; anything else found on a
//! generic instance lands in the overflow fields so nothing is lost.
//!
//! - **Entities**: SchemaAttribute, RelationalTable, GovernanceResponsibility,
//!   QualityAnnotation
//! - **Relationships**: LibraryCategoryReference, LibraryTermReference
//! - **Classifications**: Confidentiality, PrimaryKey

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::instance::{Classification, InstanceProperties, TypeDefCategory};
use crate::mapper::BeanSchema;
use crate::status::Status;

/// Implements [`TypedBean`] for a struct with `system_attributes` and
/// `extra_attributes` fields. The schema is built on first use.
macro_rules! typed_bean {
    ($bean:ident, $type_name:literal, $category:ident, $builder:path) => {
        impl $crate::beans::TypedBean for $bean {
            const TYPE_NAME: &'static str = $type_name;
            const CATEGORY: $crate::instance::TypeDefCategory =
                $crate::instance::TypeDefCategory::$category;

            fn schema() -> &'static $crate::mapper::BeanSchema<Self> {
                static SCHEMA: std::sync::OnceLock<$crate::mapper::BeanSchema<$bean>> =
                    std::sync::OnceLock::new();
                SCHEMA.get_or_init($builder)
            }

            fn system_attributes(&self) -> Option<&$crate::beans::SystemAttributes> {
                self.system_attributes.as_ref()
            }

            fn system_attributes_mut(&mut self) -> &mut Option<$crate::beans::SystemAttributes> {
                &mut self.system_attributes
            }

            fn extra_attributes(&self) -> Option<&$crate::instance::InstanceProperties> {
                self.extra_attributes.as_ref()
            }

            fn extra_attributes_mut(
                &mut self,
            ) -> &mut Option<$crate::instance::InstanceProperties> {
                &mut self.extra_attributes
            }
        }
    };
}

/// [`typed_bean!`] plus [`EntityBean`] for structs that also carry
/// `classifications` and `extra_classifications`.
macro_rules! entity_bean {
    ($bean:ident, $type_name:literal, $builder:path) => {
        typed_bean!($bean, $type_name, Entity, $builder);

        impl $crate::beans::EntityBean for $bean {
            fn classifications(&self) -> &[$crate::beans::TypedClassification] {
                &self.classifications
            }

            fn classifications_mut(&mut self) -> &mut Vec<$crate::beans::TypedClassification> {
                &mut self.classifications
            }

            fn extra_classifications(
                &self,
            ) -> Option<&std::collections::BTreeMap<String, $crate::instance::Classification>> {
                self.extra_classifications.as_ref()
            }

            fn extra_classifications_mut(
                &mut self,
            ) -> &mut Option<std::collections::BTreeMap<String, $crate::instance::Classification>>
            {
                &mut self.extra_classifications
            }
        }
    };
}

/// [`typed_bean!`] plus [`RelationshipBean`] for structs with an `ends` field.
macro_rules! relationship_bean {
    ($bean:ident, $type_name:literal, $builder:path) => {
        typed_bean!($bean, $type_name, Relationship, $builder);

        impl $crate::beans::RelationshipBean for $bean {
            fn ends(&self) -> &$crate::beans::RelationshipEnds {
                &self.ends
            }

            fn ends_mut(&mut self) -> &mut $crate::beans::RelationshipEnds {
                &mut self.ends
            }
        }
    };
}

mod annotation;
mod classifications;
mod glossary;
mod governance;
mod schema;

pub use annotation::*;
pub use classifications::*;
pub use glossary::*;
pub use governance::*;
pub use schema::*;

// =============================================================================
// BEAN TRAITS
// =============================================================================

/// A bean with a fixed type name and a declarative property table.
pub trait TypedBean: Default + Send + Sync + 'static {
    /// Exact type name of the generic instances this bean maps.
    const TYPE_NAME: &'static str;

    /// Kind of type definition the bean corresponds to.
    const CATEGORY: TypeDefCategory;

    /// Property table, built once per type.
    fn schema() -> &'static BeanSchema<Self>;

    fn system_attributes(&self) -> Option<&SystemAttributes>;

    fn system_attributes_mut(&mut self) -> &mut Option<SystemAttributes>;

    /// Properties the schema does not know, kept verbatim.
    fn extra_attributes(&self) -> Option<&InstanceProperties>;

    fn extra_attributes_mut(&mut self) -> &mut Option<InstanceProperties>;
}

/// A bean mapped from an entity.
pub trait EntityBean: TypedBean {
    /// Classifications resolved to typed beans, in instance order.
    fn classifications(&self) -> &[TypedClassification];

    fn classifications_mut(&mut self) -> &mut Vec<TypedClassification>;

    /// Classifications the factory did not recognise, keyed by name.
    fn extra_classifications(&self) -> Option<&BTreeMap<String, Classification>>;

    fn extra_classifications_mut(&mut self) -> &mut Option<BTreeMap<String, Classification>>;
}

/// A bean mapped from a relationship.
pub trait RelationshipBean: TypedBean {
    fn ends(&self) -> &RelationshipEnds;

    fn ends_mut(&mut self) -> &mut RelationshipEnds;
}

// =============================================================================
// SHARED BEAN PARTS
// =============================================================================

/// Creation and update audit data of a bean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl SystemAttributes {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One end of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndReference {
    pub guid: String,
    pub type_name: String,
}

impl EndReference {
    pub fn new(guid: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            type_name: type_name.into(),
        }
    }
}

/// Identity and end points of a relationship bean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipEnds {
    /// GUID of the relationship itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end1: Option<EndReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end2: Option<EndReference>,
}

// =============================================================================
// UNIFIED BEANS
// =============================================================================

/// Every bundled type with its category and a short description.
pub const BUNDLED_TYPES: &[(&str, TypeDefCategory, &str)] = &[
    (
        <SchemaAttribute as TypedBean>::TYPE_NAME,
        TypeDefCategory::Entity,
        "An attribute within a schema type.",
    ),
    (
        <RelationalTable as TypedBean>::TYPE_NAME,
        TypeDefCategory::Entity,
        "A table within a relational database schema.",
    ),
    (
        <GovernanceResponsibility as TypedBean>::TYPE_NAME,
        TypeDefCategory::Entity,
        "A responsibility assigned to a person or team by a governance program.",
    ),
    (
        <QualityAnnotation as TypedBean>::TYPE_NAME,
        TypeDefCategory::Entity,
        "A data quality assessment of a data field.",
    ),
    (
        <LibraryCategoryReference as TypedBean>::TYPE_NAME,
        TypeDefCategory::Relationship,
        "Links a glossary category to a category in an external library.",
    ),
    (
        <LibraryTermReference as TypedBean>::TYPE_NAME,
        TypeDefCategory::Relationship,
        "Links a glossary term to a term in an external library.",
    ),
    (
        <Confidentiality as TypedBean>::TYPE_NAME,
        TypeDefCategory::Classification,
        "Defines the level of confidentiality of the classified data.",
    ),
    (
        <PrimaryKey as TypedBean>::TYPE_NAME,
        TypeDefCategory::Classification,
        "Marks the schema attribute used as the primary key.",
    ),
];

/// Any bundled entity bean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "typeName")]
pub enum DomainEntity {
    SchemaAttribute(SchemaAttribute),
    RelationalTable(RelationalTable),
    GovernanceResponsibility(GovernanceResponsibility),
    QualityAnnotation(QualityAnnotation),
}

impl DomainEntity {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SchemaAttribute(_) => SchemaAttribute::TYPE_NAME,
            Self::RelationalTable(_) => RelationalTable::TYPE_NAME,
            Self::GovernanceResponsibility(_) => GovernanceResponsibility::TYPE_NAME,
            Self::QualityAnnotation(_) => QualityAnnotation::TYPE_NAME,
        }
    }

    pub fn system_attributes(&self) -> Option<&SystemAttributes> {
        match self {
            Self::SchemaAttribute(b) => b.system_attributes(),
            Self::RelationalTable(b) => b.system_attributes(),
            Self::GovernanceResponsibility(b) => b.system_attributes(),
            Self::QualityAnnotation(b) => b.system_attributes(),
        }
    }
}

/// Any bundled relationship bean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "typeName")]
pub enum DomainRelationship {
    LibraryCategoryReference(LibraryCategoryReference),
    LibraryTermReference(LibraryTermReference),
}

impl DomainRelationship {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::LibraryCategoryReference(_) => LibraryCategoryReference::TYPE_NAME,
            Self::LibraryTermReference(_) => LibraryTermReference::TYPE_NAME,
        }
    }

    pub fn ends(&self) -> &RelationshipEnds {
        match self {
            Self::LibraryCategoryReference(b) => b.ends(),
            Self::LibraryTermReference(b) => b.ends(),
        }
    }
}
