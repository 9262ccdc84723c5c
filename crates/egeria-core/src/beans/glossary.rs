//! Relationships from glossary content to external glossary libraries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RelationshipEnds, SystemAttributes, TypedBean};
use crate::instance::InstanceProperties;
use crate::mapper::BeanSchema;

/// Links a glossary category (end 1) to a category in an external glossary
/// library (end 2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryCategoryReference {
    #[serde(flatten)]
    pub ends: RelationshipEnds,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    /// Identifier of the category in the external library
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steward: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_verified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,
}

impl LibraryCategoryReference {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive("identifier", |b| b.identifier.as_ref(), |b, v| b.identifier = Some(v))
            .primitive("description", |b| b.description.as_ref(), |b, v| b.description = Some(v))
            .primitive("steward", |b| b.steward.as_ref(), |b, v| b.steward = Some(v))
            .primitive(
                "lastVerified",
                |b| b.last_verified.as_ref(),
                |b, v| b.last_verified = Some(v),
            )
    }
}

relationship_bean!(
    LibraryCategoryReference,
    "LibraryCategoryReference",
    LibraryCategoryReference::build_schema
);

/// Links a glossary term (end 1) to a term in an external glossary library
/// (end 2).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryTermReference {
    #[serde(flatten)]
    pub ends: RelationshipEnds,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    /// Identifier of the term in the external library
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steward: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_verified: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,
}

impl LibraryTermReference {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive("identifier", |b| b.identifier.as_ref(), |b, v| b.identifier = Some(v))
            .primitive("description", |b| b.description.as_ref(), |b, v| b.description = Some(v))
            .primitive("steward", |b| b.steward.as_ref(), |b, v| b.steward = Some(v))
            .primitive(
                "lastVerified",
                |b| b.last_verified.as_ref(),
                |b, v| b.last_verified = Some(v),
            )
    }
}

relationship_bean!(
    LibraryTermReference,
    "LibraryTermReference",
    LibraryTermReference::build_schema
);
