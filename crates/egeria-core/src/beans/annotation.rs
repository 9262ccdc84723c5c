//! Discovery annotations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SystemAttributes, TypedBean, TypedClassification};
use crate::instance::{Classification, InstanceProperties};
use crate::mapper::{BeanSchema, DomainEnum};

/// Review state of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationStatus {
    New,
    Reviewed,
    Approved,
    Actioned,
    Invalid,
    Ignore,
    Other,
}

impl DomainEnum for AnnotationStatus {
    const ENUM_NAME: &'static str = "AnnotationStatus";

    fn constants() -> &'static [Self] {
        &[
            Self::New,
            Self::Reviewed,
            Self::Approved,
            Self::Actioned,
            Self::Invalid,
            Self::Ignore,
            Self::Other,
        ]
    }

    fn ordinal(&self) -> i32 {
        match self {
            Self::New => 0,
            Self::Reviewed => 1,
            Self::Approved => 2,
            Self::Actioned => 3,
            Self::Invalid => 4,
            Self::Ignore => 5,
            Self::Other => 99,
        }
    }

    fn symbolic_name(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Reviewed => "REVIEWED",
            Self::Approved => "APPROVED",
            Self::Actioned => "ACTIONED",
            Self::Invalid => "INVALID",
            Self::Ignore => "IGNORE",
            Self::Other => "OTHER",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::New => "The annotation is new.",
            Self::Reviewed => "The annotation has been reviewed by a steward.",
            Self::Approved => "The annotation has been approved.",
            Self::Actioned => "The request has been actioned.",
            Self::Invalid => "The annotation is invalid or incorrect.",
            Self::Ignore => "The annotation should be ignored.",
            Self::Other => "Another status.",
        }
    }
}

/// A data quality assessment of a data field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityAnnotation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_attributes: Option<SystemAttributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Percentage confidence of the discovery engine (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_step: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_properties: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_status: Option<AnnotationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steward: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_dimension: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classifications: Vec<TypedClassification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_attributes: Option<InstanceProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_classifications: Option<BTreeMap<String, Classification>>,
}

impl QualityAnnotation {
    fn build_schema() -> BeanSchema<Self> {
        BeanSchema::<Self>::new(Self::TYPE_NAME)
            .primitive(
                "annotationType",
                |b| b.annotation_type.as_ref(),
                |b, v| b.annotation_type = Some(v),
            )
            .primitive("summary", |b| b.summary.as_ref(), |b, v| b.summary = Some(v))
            .primitive(
                "confidenceLevel",
                |b| b.confidence_level.as_ref(),
                |b, v| b.confidence_level = Some(v),
            )
            .primitive("expression", |b| b.expression.as_ref(), |b, v| b.expression = Some(v))
            .primitive("explanation", |b| b.explanation.as_ref(), |b, v| b.explanation = Some(v))
            .primitive(
                "analysisStep",
                |b| b.analysis_step.as_ref(),
                |b, v| b.analysis_step = Some(v),
            )
            .primitive(
                "jsonProperties",
                |b| b.json_properties.as_ref(),
                |b, v| b.json_properties = Some(v),
            )
            .enumeration(
                "annotationStatus",
                |b| b.annotation_status,
                |b, v| b.annotation_status = Some(v),
            )
            .primitive("reviewDate", |b| b.review_date.as_ref(), |b, v| b.review_date = Some(v))
            .primitive("steward", |b| b.steward.as_ref(), |b, v| b.steward = Some(v))
            .primitive(
                "reviewComment",
                |b| b.review_comment.as_ref(),
                |b, v| b.review_comment = Some(v),
            )
            .primitive(
                "qualityDimension",
                |b| b.quality_dimension.as_ref(),
                |b, v| b.quality_dimension = Some(v),
            )
            .primitive(
                "qualityScore",
                |b| b.quality_score.as_ref(),
                |b, v| b.quality_score = Some(v),
            )
            .map(
                "additionalProperties",
                |b| b.additional_properties.as_ref(),
                |b, v| b.additional_properties = Some(v),
            )
    }
}

entity_bean!(QualityAnnotation, "QualityAnnotation", QualityAnnotation::build_schema);
