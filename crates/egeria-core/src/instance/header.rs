//! Type identity and system attributes shared by every generic instance.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which kind of type definition an instance type refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDefCategory {
    Entity,
    Relationship,
    Classification,
}

impl TypeDefCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Relationship => "relationship",
            Self::Classification => "classification",
        }
    }
}

impl fmt::Display for TypeDefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type identity stamped on an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceType {
    pub type_def_guid: String,
    pub type_def_name: String,
    pub type_def_version: i64,
    pub type_def_category: TypeDefCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_def_description: Option<String>,
}

/// Graph-native lifecycle status of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    Unknown,
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    ApprovedConcept,
    UnderDevelopment,
    DevelopmentComplete,
    ApprovedForDeployment,
    Standby,
    Active,
    Failed,
    Disabled,
    Complete,
    Deprecated,
    Other,
    Deleted,
}

impl InstanceStatus {
    /// Every status code, in ordinal order.
    pub const ALL: [InstanceStatus; 18] = [
        Self::Unknown,
        Self::Draft,
        Self::Prepared,
        Self::Proposed,
        Self::Approved,
        Self::Rejected,
        Self::ApprovedConcept,
        Self::UnderDevelopment,
        Self::DevelopmentComplete,
        Self::ApprovedForDeployment,
        Self::Standby,
        Self::Active,
        Self::Failed,
        Self::Disabled,
        Self::Complete,
        Self::Deprecated,
        Self::Other,
        Self::Deleted,
    ];

    /// Stable wire ordinal of the status code.
    pub fn ordinal(&self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Draft => 1,
            Self::Prepared => 2,
            Self::Proposed => 3,
            Self::Approved => 4,
            Self::Rejected => 5,
            Self::ApprovedConcept => 6,
            Self::UnderDevelopment => 7,
            Self::DevelopmentComplete => 8,
            Self::ApprovedForDeployment => 9,
            Self::Standby => 10,
            Self::Active => 15,
            Self::Failed => 16,
            Self::Disabled => 17,
            Self::Complete => 18,
            Self::Deprecated => 19,
            Self::Other => 50,
            Self::Deleted => 99,
        }
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.ordinal() == ordinal)
    }
}

/// System attributes of an instance: type, audit trail and status.
///
/// Every field is optional so partially built instances (for example one
/// that has not been stored yet and so has no GUID) can be represented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceAuditHeader {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<InstanceStatus>,
}

impl InstanceAuditHeader {
    /// Name of the instance's type, if it has one.
    pub fn type_name(&self) -> Option<&str> {
        self.instance_type
            .as_ref()
            .map(|t| t.type_def_name.as_str())
    }
}
