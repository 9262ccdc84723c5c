//! Resolution of classifications to typed beans.

use std::sync::Arc;

use super::decode::Decoder;
use super::encode::Encoder;
use super::error::MapperError;
use crate::beans::{Confidentiality, PrimaryKey, TypedBean, TypedClassification};
use crate::config::MappingConfig;
use crate::instance::Classification;
use crate::status::StatusConverter;

/// Turns a generic classification into a typed classification bean.
///
/// Unknown classification names are not an error: `resolve` returns
/// `Ok(None)` and the entity decoder keeps the classification as an extra.
/// An error means the classification is known but its properties do not
/// fit the bean.
pub trait ClassificationFactory: Send + Sync {
    fn resolve(
        &self,
        classification: &Classification,
    ) -> Result<Option<TypedClassification>, MapperError>;
}

/// Resolves the bundled classification beans.
pub struct BuiltinClassificationFactory {
    status: Arc<dyn StatusConverter>,
    config: MappingConfig,
}

impl BuiltinClassificationFactory {
    pub fn new(status: Arc<dyn StatusConverter>, config: MappingConfig) -> Self {
        Self { status, config }
    }
}

impl ClassificationFactory for BuiltinClassificationFactory {
    fn resolve(
        &self,
        classification: &Classification,
    ) -> Result<Option<TypedClassification>, MapperError> {
        let decoder = Decoder::new(self.status.as_ref(), &self.config);

        let typed = match classification.name.as_str() {
            name if name == Confidentiality::TYPE_NAME => {
                TypedClassification::Confidentiality(decoder.classification(classification)?)
            }
            name if name == PrimaryKey::TYPE_NAME => {
                TypedClassification::PrimaryKey(decoder.classification(classification)?)
            }
            _ => return Ok(None),
        };

        Ok(Some(typed))
    }
}

/// Encode a typed classification back to its generic form.
pub(crate) fn encode_classification(
    encoder: &Encoder<'_>,
    classification: &TypedClassification,
) -> Result<Classification, MapperError> {
    match classification {
        TypedClassification::Confidentiality(bean) => encoder.classification(bean),
        TypedClassification::PrimaryKey(bean) => encoder.classification(bean),
    }
}
