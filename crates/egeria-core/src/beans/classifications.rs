//! Classification beans.

use serde::{Deserialize, Serialize};

use super::{SystemAttributes, TypedBean};
use crate::instance::InstanceProperties;
use crate::mapper::{BeanSchema, DomainEnum};

// =============================================================================
// ENUMS
// =============================================================================

/// How a governance classification was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceClassificationStatus {
    Discovered,
    Proposed,
    Imported,
    Validated,
    Deprecated,
    Obsolete,
    Other,
}

impl DomainEnum for GovernanceClassificationStatus {
    const ENUM_NAME: &'static str = "GovernanceClassificationStatus";

    fn constants() -> &'static [Self] {
        &[
            Self::Discovered,
            Self::Proposed,
            Self::Imported,
            Self::Validated,
            Self::Deprecated,
            Self::Obsolete,
            Self::Other,
        ]
    }

    fn ordinal(&self) -> i32 {
        match self {
            Self::Discovered => 0,
            Self::Proposed => 1,
            Self::Imported => 2,
            Self::Validated => 3,
            Self::Deprecated => 4,
            Self::Obsolete => 5,
            Self::Other => 99,
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            Self::Discovered => "DISCOVERED",
            Self::Proposed => "PROPOSED",
            Self::Imported => "IMPORTED",
            Self::Validated => "VALIDATED",
            Self::Deprecated => "DEPRECATED",
            Self::Obsolete => "OBSOLETE",
            Self::Other => "OTHER",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Discovered => {
                "The classification assignment was discovered by an automated process."
            }
            Self::Proposed => {
                "The classification assignment was proposed by a subject matter expert."
            }
            Self::Imported => {
                "The classification assignment was imported from another metadata system."
            }
            Self::Validated => "The classification assignment has been validated and approved.",
            Self::Deprecated => "The classification assignment should no longer be used.",
            Self::Obsolete => "The classification assignment must no longer be used.",
            Self::Other => "Another classification assignment status.",
        }
    }
}

/// Pattern used to generate key values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyPattern {
    LocalKey,
    RecycledKey,
    NaturalKey,
    MirrorKey,
    AggregateKey,
    CallersKey,
    StableKey,
    Other,
}

impl DomainEnum for KeyPattern {
    const ENUM_NAME: &'static str = "KeyPattern";

    fn constants() -> &'static [Self] {
        &[
            Self::LocalKey,
            Self::RecycledKey,
            Self::NaturalKey,
            Self::MirrorKey,
            Self::AggregateKey,
            Self::CallersKey,
            Self::StableKey,
            Self::Other,
        ]
    }

    fn ordinal(&self) -> i32 {
        match self {
            Self::LocalKey => 0,
            Self::RecycledKey => 1,
            Self::NaturalKey => 2,
            Self::MirrorKey => 3,
            Self::AggregateKey => 4,
            Self::CallersKey => 5,
            Self::StableKey => 6,
            Self::Other => 99,
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            Self::LocalKey => "LOCAL_KEY",
            Self::RecycledKey => "RECYCLED_KEY",
            Self::NaturalKey => "NATURAL_KEY",
            Self::MirrorKey => "MIRROR_KEY",
            Self::AggregateKey => "AGGREGATE_KEY",
            Self::CallersKey => "CALLERS_KEY",
            Self::StableKey => "STABLE_KEY",
            Self::Other => "OTHER",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::LocalKey => "Unique key allocated and used within the scope of a single system.",
            Self::RecycledKey => {
                "Key allocated and used within the scope of a single system that is periodically reused."
            }
            Self::NaturalKey => {
                "Key derived from an attribute of the entity, such as email address or passport number."
            }
            Self::MirrorKey => "Key value copied from another system.",
            Self::AggregateKey => "Key formed by combining keys from multiple systems.",
            Self::CallersKey => "Key from another system can be used if system name provided.",
            Self::StableKey => "Key value will remain active even if records are merged.",
            Self::Other => "Another key pattern.",
        }
    }
}

// =============================================================================
// CONFIDENTIALITY
// =============================================================================

/// Level of confidentiality of the classified data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Confidentiality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GovernanceClassificationStatus>,

    /// Confidence in the assignment, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steward: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,
}

impl Confidentiality {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .enumeration("status", |b| b.status, |b, v| b.status = Some(v))
            .primitive("confidence", |b| b.confidence.as_ref(), |b, v| b.confidence = Some(v))
            .primitive("steward", |b| b.steward.as_ref(), |b, v| b.steward = Some(v))
            .primitive("source", |b| b.source.as_ref(), |b, v| b.source = Some(v))
            .primitive("notes", |b| b.notes.as_ref(), |b, v| b.notes = Some(v))
            .primitive("level", |b| b.level.as_ref(), |b, v| b.level = Some(v))
    }
}

typed_bean!(Confidentiality, "Confidentiality", Classification, Confidentiality::build_schema);

// =============================================================================
// PRIMARY KEY
// =============================================================================

/// Marks the schema attribute used as the primary key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrimaryKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pattern: Option<KeyPattern>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,
}

impl PrimaryKey {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive("name", |b| b.name.as_ref(), |b, v| b.name = Some(v))
            .enumeration("keyPattern", |b| b.key_pattern, |b, v| b.key_pattern = Some(v))
    }
}

typed_bean!(PrimaryKey, "PrimaryKey", Classification, PrimaryKey::build_schema);

// =============================================================================
// UNIFIED CLASSIFICATION
// =============================================================================

/// A classification resolved to its typed bean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "classificationName")]
pub enum TypedClassification {
    Confidentiality(Confidentiality),
    PrimaryKey(PrimaryKey),
}

impl TypedClassification {
    /// The classification name this bean was resolved from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Confidentiality(_) => Confidentiality::TYPE_NAME,
            Self::PrimaryKey(_) => PrimaryKey::TYPE_NAME,
        }
    }
}
