use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SystemAttributes, TypedBean, TypedClassification};
use crate::instance::{Classification, InstanceProperties};
use crate::mapper::BeanSchema;

/// A responsibility assigned to a person or team by a governance program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GovernanceResponsibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Governance domain the responsibility belongs to (0 means all)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_identifier: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibility_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<TypedClassification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_classifications: Option<BTreeMap<String, Classification>>,
}

impl GovernanceResponsibility {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive(
                "qualifiedName",
                |b| b.qualified_name.as_ref(),
                |b, v| b.qualified_name = Some(v),
            )
            .primitive("title", |b| b.title.as_ref(), |b, v| b.title = Some(v))
            .primitive("summary", |b| b.summary.as_ref(), |b, v| b.summary = Some(v))
            .primitive("description", |b| b.description.as_ref(), |b, v| b.description = Some(v))
            .primitive("scope", |b| b.scope.as_ref(), |b, v| b.scope = Some(v))
            .primitive(
                "domainIdentifier",
                |b| b.domain_identifier.as_ref(),
                |b, v| b.domain_identifier = Some(v),
            )
            .primitive("priority", |b| b.priority.as_ref(), |b, v| b.priority = Some(v))
            .primitive(
                "responsibilityType",
                |b| b.responsibility_type.as_ref(),
                |b, v| b.responsibility_type = Some(v),
            )
            .map(
                "additionalProperties",
                |b| b.additional_properties.as_ref(),
                |b, v| b.additional_properties = Some(v),
            )
    }
}

entity_bean!(
    GovernanceResponsibility,
    "GovernanceResponsibility",
    GovernanceResponsibility::build_schema
);
