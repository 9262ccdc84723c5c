//! Entities and the classifications attached to them.

use serde::{Deserialize, Serialize};

use super::header::InstanceAuditHeader;
use super::property::InstanceProperties;

/// An entity with its full set of properties and classifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDetail {
    #[serde(flatten)]
    pub header: InstanceAuditHeader,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(default)]
    pub properties: InstanceProperties,

    /// Classifications in the order the repository returned them
    #[serde(default)]
    pub classifications: Vec<Classification>,
}

impl EntityDetail {
    pub fn type_name(&self) -> Option<&str> {
        self.header.type_name()
    }
}

/// A named classification attached to an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub name: String,

    #[serde(flatten)]
    pub header: InstanceAuditHeader,

    #[serde(default)]
    pub properties: InstanceProperties,
}

impl Classification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Lightweight reference to an entity at one end of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProxy {
    pub guid: String,
    pub type_name: String,
}

impl EntityProxy {
    pub fn new(guid: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            type_name: type_name.into(),
        }
    }
}
