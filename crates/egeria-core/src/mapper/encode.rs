//! Typed bean to generic instance.

use tracing::debug;

use super::error::MapperError;
use crate::beans::TypedBean;
use crate::config::MappingConfig;
use crate::instance::{Classification, InstanceAuditHeader, InstanceProperties, InstanceType};
use crate::registry::TypeDefRegistry;
use crate::status::StatusConverter;

/// Encode engine shared by every mapper.
pub(crate) struct Encoder<'a> {
    registry: &'a dyn TypeDefRegistry,
    status: &'a dyn StatusConverter,
    config: &'a MappingConfig,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(
        registry: &'a dyn TypeDefRegistry,
        status: &'a dyn StatusConverter,
        config: &'a MappingConfig,
    ) -> Self {
        Self {
            registry,
            status,
            config,
        }
    }

    /// Resolve the bean's type identity from the registry.
    pub(crate) fn instance_type<B: TypedBean>(&self) -> Result<InstanceType, MapperError> {
        let instance_type = self
            .registry
            .lookup(B::TYPE_NAME)
            .ok_or_else(|| MapperError::UnknownTypeDef(B::TYPE_NAME.to_string()))?;

        if instance_type.type_def_category != B::CATEGORY {
            return Err(MapperError::TypeCategoryMismatch {
                type_name: B::TYPE_NAME.to_string(),
                expected: B::CATEGORY,
                found: instance_type.type_def_category,
            });
        }

        Ok(instance_type)
    }

    /// Build the audit header: type identity plus whichever system
    /// attributes the bean has set.
    pub(crate) fn header<B: TypedBean>(
        &self,
        bean: &B,
    ) -> Result<InstanceAuditHeader, MapperError> {
        let mut header = InstanceAuditHeader {
            instance_type: Some(self.instance_type::<B>()?),
            ..Default::default()
        };

        if let Some(attributes) = bean.system_attributes() {
            header.created_by = attributes.created_by.clone();
            header.updated_by = attributes.updated_by.clone();
            header.create_time = attributes.create_time;
            header.update_time = attributes.update_time;
            header.version = attributes.version;
            header.status = attributes.status.map(|s| self.status.to_graph_status(s));
        }

        Ok(header)
    }

    /// Emit every set field under its canonical name, then the extra
    /// attributes when configured to. A named field always wins over an
    /// extra attribute of the same name.
    pub(crate) fn properties<B: TypedBean>(&self, bean: &B) -> InstanceProperties {
        let mut properties = InstanceProperties::new();

        for binding in B::schema().bindings() {
            if let Some(value) = binding.read(bean) {
                properties.insert(binding.name(), value);
            }
        }

        if self.config.reserialize_extras {
            if let Some(extras) = bean.extra_attributes() {
                for (name, value) in extras.iter() {
                    if properties.contains(name) {
                        debug!(
                            type_name = B::TYPE_NAME,
                            property = name,
                            "extra attribute shadowed by a named field"
                        );
                        continue;
                    }
                    properties.insert(name, value.clone());
                }
            }
        }

        properties
    }

    /// Encode a classification bean.
    pub(crate) fn classification<B: TypedBean>(
        &self,
        bean: &B,
    ) -> Result<Classification, MapperError> {
        Ok(Classification {
            name: B::TYPE_NAME.to_string(),
            header: self.header(bean)?,
            properties: self.properties(bean),
        })
    }
}
