//! Generic instance to typed bean.

use tracing::warn;

use super::error::MapperError;
use crate::beans::{SystemAttributes, TypedBean};
use crate::config::{MappingConfig, UnsupportedCategoryPolicy};
use crate::instance::{Classification, InstanceAuditHeader, InstanceProperties, PropertyCategory};
use crate::status::StatusConverter;

/// Decode engine shared by every mapper.
pub(crate) struct Decoder<'a> {
    status: &'a dyn StatusConverter,
    config: &'a MappingConfig,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(status: &'a dyn StatusConverter, config: &'a MappingConfig) -> Self {
        Self { status, config }
    }

    /// Fail unless `found` is exactly the bean's type name.
    pub(crate) fn check_type<B: TypedBean>(&self, found: Option<&str>) -> Result<(), MapperError> {
        match found {
            Some(name) if name == B::TYPE_NAME => Ok(()),
            other => Err(MapperError::TypeMismatch {
                expected: B::TYPE_NAME,
                found: other.map(str::to_string),
            }),
        }
    }

    /// Copy the audit header, converting the graph status to the domain one.
    ///
    /// Returns `None` when the header carries nothing at all.
    pub(crate) fn system_attributes(
        &self,
        header: &InstanceAuditHeader,
        guid: Option<&String>,
    ) -> Option<SystemAttributes> {
        let attributes = SystemAttributes {
            guid: guid.cloned(),
            created_by: header.created_by.clone(),
            updated_by: header.updated_by.clone(),
            create_time: header.create_time,
            update_time: header.update_time,
            version: header.version,
            status: header.status.map(|s| self.status.to_domain_status(s)),
        };
        (!attributes.is_empty()).then_some(attributes)
    }

    /// Dispatch every property onto the bean.
    ///
    /// A property goes through its binding only when the name is known for
    /// that category. Any other primitive, enum or map property overflows
    /// into the bean's extra attributes, and array, struct and unrecognised
    /// categories follow the configured policy.
    pub(crate) fn properties<B: TypedBean>(
        &self,
        bean: &mut B,
        properties: &InstanceProperties,
    ) -> Result<(), MapperError> {
        let schema = B::schema();

        for (name, value) in properties.iter() {
            match value.category() {
                PropertyCategory::Array | PropertyCategory::Struct | PropertyCategory::Unknown => {
                    self.unsupported::<B>(name, value.category())?;
                }
                category @ (PropertyCategory::Primitive
                | PropertyCategory::Enum
                | PropertyCategory::Map) => {
                    match schema
                        .binding(name)
                        .filter(|b| b.kind().category() == category)
                    {
                        Some(binding) => binding.write(bean, value)?,
                        None => {
                            bean.extra_attributes_mut()
                                .get_or_insert_with(InstanceProperties::new)
                                .insert(name, value.clone());
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Decode a classification into its typed bean.
    pub(crate) fn classification<B: TypedBean>(
        &self,
        classification: &Classification,
    ) -> Result<B, MapperError> {
        self.check_type::<B>(Some(&classification.name))?;

        let mut bean = B::default();
        *bean.system_attributes_mut() = self.system_attributes(&classification.header, None);
        self.properties(&mut bean, &classification.properties)?;
        Ok(bean)
    }

    fn unsupported<B: TypedBean>(
        &self,
        property: &str,
        category: PropertyCategory,
    ) -> Result<(), MapperError> {
        match self.config.unsupported_categories {
            UnsupportedCategoryPolicy::Drop => {
                warn!(
                    type_name = B::TYPE_NAME,
                    property,
                    %category,
                    "dropping property with unsupported category"
                );
                Ok(())
            }
            UnsupportedCategoryPolicy::Reject => Err(MapperError::UnsupportedPropertyCategory {
                property: property.to_string(),
                category,
            }),
        }
    }
}
