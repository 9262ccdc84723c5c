use serde::{Deserialize, Serialize};

use super::entity::EntityProxy;
use super::header::InstanceAuditHeader;
use super::property::InstanceProperties;

/// A relationship between two entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(flatten)]
    pub header: InstanceAuditHeader,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(default)]
    pub properties: InstanceProperties,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_one_proxy: Option<EntityProxy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_two_proxy: Option<EntityProxy>,
}

impl Relationship {
    pub fn type_name(&self) -> Option<&str> {
        self.header.type_name()
    }
}
