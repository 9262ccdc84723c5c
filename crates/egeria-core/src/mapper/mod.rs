//! Mapping between generic graph instances and typed beans.
//!
//! Every bean declares its properties once in a [`BeanSchema`]. The mappers
//! here are thin typed wrappers over a single decode loop and a single
//! encode loop driven by that table, so adding a bean never means writing
//! another copy loop.
//!
//! Collaborators (type registry, classification factory, status converter)
//! are injected through a [`MapperContext`]; nothing is looked up globally.

mod catalog;
mod classification;
mod decode;
mod encode;
mod error;
mod schema;

pub use catalog::{MappingCatalog, TypeSummary};
pub use classification::{BuiltinClassificationFactory, ClassificationFactory};
pub use error::MapperError;
pub use schema::{BeanSchema, DomainEnum, PrimitiveField, PropertyBinding, PropertyKind};

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::beans::{EndReference, EntityBean, RelationshipBean, TypedBean};
use crate::config::{Config, MappingConfig};
use crate::instance::{Classification, EntityDetail, EntityProxy, Relationship};
use crate::registry::{InMemoryTypeDefRegistry, RegistryError, TypeDefRegistry};
use crate::status::{OmrsStatusConverter, StatusConverter};
use classification::encode_classification;
use decode::Decoder;
use encode::Encoder;

// =============================================================================
// CONTEXT
// =============================================================================

/// Collaborators and settings shared by every mapper.
///
/// Cloning is cheap; the collaborators are reference counted.
#[derive(Clone)]
pub struct MapperContext {
    registry: Arc<dyn TypeDefRegistry>,
    classifications: Arc<dyn ClassificationFactory>,
    status: Arc<dyn StatusConverter>,
    config: MappingConfig,
}

impl MapperContext {
    pub fn new(
        registry: Arc<dyn TypeDefRegistry>,
        classifications: Arc<dyn ClassificationFactory>,
        status: Arc<dyn StatusConverter>,
        config: MappingConfig,
    ) -> Self {
        Self {
            registry,
            classifications,
            status,
            config,
        }
    }

    /// Context over the bundled types, classifications and status mapping.
    pub fn builtin(config: MappingConfig) -> Self {
        Self::with_registry(InMemoryTypeDefRegistry::builtin(), config)
    }

    /// Context for a loaded configuration. Type definitions from the
    /// configured registry file are layered over the bundled ones.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let mut registry = InMemoryTypeDefRegistry::builtin();
        if let Some(path) = &config.registry.type_file {
            let extra = InMemoryTypeDefRegistry::from_file(path)?;
            debug!(path = %path, types = extra.len(), "loaded type definitions");
            registry.merge(extra);
        }
        Ok(Self::with_registry(registry, config.mapping.clone()))
    }

    fn with_registry(registry: InMemoryTypeDefRegistry, config: MappingConfig) -> Self {
        let status: Arc<dyn StatusConverter> = Arc::new(OmrsStatusConverter);
        let classifications =
            Arc::new(BuiltinClassificationFactory::new(Arc::clone(&status), config.clone()));
        Self::new(Arc::new(registry), classifications, status, config)
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn registry(&self) -> &dyn TypeDefRegistry {
        self.registry.as_ref()
    }

    fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self.status.as_ref(), &self.config)
    }

    fn encoder(&self) -> Encoder<'_> {
        Encoder::new(self.registry.as_ref(), self.status.as_ref(), &self.config)
    }
}

impl fmt::Debug for MapperContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// Maps entities of one type to and from bean `B`.
pub struct EntityMapper<B> {
    context: MapperContext,
    _bean: PhantomData<fn() -> B>,
}

impl<B: EntityBean> EntityMapper<B> {
    pub fn new(context: MapperContext) -> Self {
        Self {
            context,
            _bean: PhantomData,
        }
    }

    /// Decode an entity into a bean.
    ///
    /// Every classification ends up either resolved in `classifications` or
    /// verbatim in `extra_classifications`, in instance order.
    pub fn decode(&self, entity: &EntityDetail) -> Result<B, MapperError> {
        let decoder = self.context.decoder();
        decoder.check_type::<B>(entity.type_name())?;
        debug!(type_name = B::TYPE_NAME, guid = ?entity.guid, "decoding entity");

        let mut bean = B::default();
        *bean.system_attributes_mut() =
            decoder.system_attributes(&entity.header, entity.guid.as_ref());
        decoder.properties(&mut bean, &entity.properties)?;

        for classification in &entity.classifications {
            match self.context.classifications.resolve(classification)? {
                Some(typed) => bean.classifications_mut().push(typed),
                None => {
                    let replaced = bean
                        .extra_classifications_mut()
                        .get_or_insert_with(BTreeMap::new)
                        .insert(classification.name.clone(), classification.clone());
                    if replaced.is_some() {
                        warn!(
                            type_name = B::TYPE_NAME,
                            classification = %classification.name,
                            "duplicate unresolved classification, keeping the later one"
                        );
                    }
                }
            }
        }

        Ok(bean)
    }

    /// Encode a bean back into an entity.
    pub fn encode(&self, bean: &B) -> Result<EntityDetail, MapperError> {
        let encoder = self.context.encoder();
        debug!(type_name = B::TYPE_NAME, "encoding entity");

        let header = encoder.header(bean)?;
        let mut classifications = bean
            .classifications()
            .iter()
            .map(|c| encode_classification(&encoder, c))
            .collect::<Result<Vec<Classification>, _>>()?;

        if self.context.config.reserialize_extras {
            if let Some(extras) = bean.extra_classifications() {
                for (name, classification) in extras {
                    if !classifications.iter().any(|c| &c.name == name) {
                        classifications.push(classification.clone());
                    }
                }
            }
        }

        Ok(EntityDetail {
            header,
            guid: bean.system_attributes().and_then(|a| a.guid.clone()),
            properties: encoder.properties(bean),
            classifications,
        })
    }
}

// =============================================================================
// RELATIONSHIPS
// =============================================================================

/// Maps relationships of one type to and from bean `B`.
pub struct RelationshipMapper<B> {
    context: MapperContext,
    _bean: PhantomData<fn() -> B>,
}

impl<B: RelationshipBean> RelationshipMapper<B> {
    pub fn new(context: MapperContext) -> Self {
        Self {
            context,
            _bean: PhantomData,
        }
    }

    pub fn decode(&self, relationship: &Relationship) -> Result<B, MapperError> {
        let decoder = self.context.decoder();
        decoder.check_type::<B>(relationship.type_name())?;
        debug!(type_name = B::TYPE_NAME, guid = ?relationship.guid, "decoding relationship");

        let mut bean = B::default();
        *bean.system_attributes_mut() =
            decoder.system_attributes(&relationship.header, relationship.guid.as_ref());
        decoder.properties(&mut bean, &relationship.properties)?;

        let ends = bean.ends_mut();
        ends.guid = relationship.guid.clone();
        ends.end1 = relationship.entity_one_proxy.as_ref().map(end_reference);
        ends.end2 = relationship.entity_two_proxy.as_ref().map(end_reference);

        Ok(bean)
    }

    /// Encode a bean back into a relationship.
    ///
    /// The GUID comes from the system attributes, falling back to the one
    /// stored with the ends.
    pub fn encode(&self, bean: &B) -> Result<Relationship, MapperError> {
        let encoder = self.context.encoder();
        debug!(type_name = B::TYPE_NAME, "encoding relationship");

        let ends = bean.ends();
        let guid = bean
            .system_attributes()
            .and_then(|a| a.guid.clone())
            .or_else(|| ends.guid.clone());

        Ok(Relationship {
            header: encoder.header(bean)?,
            guid,
            properties: encoder.properties(bean),
            entity_one_proxy: ends.end1.as_ref().map(entity_proxy),
            entity_two_proxy: ends.end2.as_ref().map(entity_proxy),
        })
    }
}

fn end_reference(proxy: &EntityProxy) -> EndReference {
    EndReference::new(&proxy.guid, &proxy.type_name)
}

fn entity_proxy(end: &EndReference) -> EntityProxy {
    EntityProxy::new(&end.guid, &end.type_name)
}

// =============================================================================
// CLASSIFICATIONS
// =============================================================================

/// Maps one classification type to and from bean `B`.
pub struct ClassificationMapper<B> {
    context: MapperContext,
    _bean: PhantomData<fn() -> B>,
}

impl<B: TypedBean> ClassificationMapper<B> {
    pub fn new(context: MapperContext) -> Self {
        Self {
            context,
            _bean: PhantomData,
        }
    }

    pub fn decode(&self, classification: &Classification) -> Result<B, MapperError> {
        self.context.decoder().classification(classification)
    }

    pub fn encode(&self, bean: &B) -> Result<Classification, MapperError> {
        self.context.encoder().classification(bean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beans::{LibraryTermReference, RelationalTable, SystemAttributes};
    use crate::instance::{
        InstanceAuditHeader, InstanceProperties, InstancePropertyValue, InstanceStatus,
        InstanceType, TypeDefCategory,
    };
    use crate::status::Status;

    fn context() -> MapperContext {
        MapperContext::builtin(MappingConfig::default())
    }

    fn header(type_name: &str, category: TypeDefCategory) -> InstanceAuditHeader {
        InstanceAuditHeader {
            instance_type: Some(InstanceType {
                type_def_guid: "guid-of-type".to_string(),
                type_def_name: type_name.to_string(),
                type_def_version: 1,
                type_def_category: category,
                type_def_description: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_header_gives_no_system_attributes() {
        let entity = EntityDetail {
            header: header("RelationalTable", TypeDefCategory::Entity),
            ..Default::default()
        };
        let bean: RelationalTable = EntityMapper::new(context()).decode(&entity).unwrap();
        assert!(bean.system_attributes.is_none());
    }

    #[test]
    fn test_status_is_converted_both_ways() {
        let mut entity = EntityDetail {
            header: header("RelationalTable", TypeDefCategory::Entity),
            guid: Some("t-1".to_string()),
            ..Default::default()
        };
        entity.header.status = Some(InstanceStatus::Active);
        entity.header.created_by = Some("erinoverview".to_string());

        let mapper = EntityMapper::<RelationalTable>::new(context());
        let bean = mapper.decode(&entity).unwrap();
        let attributes = bean.system_attributes.as_ref().unwrap();
        assert_eq!(attributes.status, Some(Status::Active));
        assert_eq!(attributes.guid.as_deref(), Some("t-1"));

        let encoded = mapper.encode(&bean).unwrap();
        assert_eq!(encoded.header.status, Some(InstanceStatus::Active));
        assert_eq!(encoded.header.created_by.as_deref(), Some("erinoverview"));
        assert_eq!(encoded.guid.as_deref(), Some("t-1"));
        assert_eq!(encoded.type_name(), Some("RelationalTable"));
    }

    #[test]
    fn test_relationship_ends_round_trip() {
        let relationship = Relationship {
            header: header("LibraryTermReference", TypeDefCategory::Relationship),
            guid: Some("r-1".to_string()),
            properties: InstanceProperties::new()
                .with("identifier", InstancePropertyValue::primitive("ext-42")),
            entity_one_proxy: Some(EntityProxy::new("term-1", "GlossaryTerm")),
            entity_two_proxy: Some(EntityProxy::new("link-1", "ExternalGlossaryLink")),
        };

        let mapper = RelationshipMapper::<LibraryTermReference>::new(context());
        let bean = mapper.decode(&relationship).unwrap();
        assert_eq!(bean.identifier.as_deref(), Some("ext-42"));
        assert_eq!(bean.ends.guid.as_deref(), Some("r-1"));
        assert_eq!(
            bean.ends.end1,
            Some(EndReference::new("term-1", "GlossaryTerm"))
        );

        let encoded = mapper.encode(&bean).unwrap();
        assert_eq!(encoded.guid.as_deref(), Some("r-1"));
        assert_eq!(encoded.entity_one_proxy, relationship.entity_one_proxy);
        assert_eq!(encoded.entity_two_proxy, relationship.entity_two_proxy);
        assert_eq!(encoded.properties, relationship.properties);
    }

    #[test]
    fn test_relationship_guid_falls_back_to_ends() {
        let mut bean = LibraryTermReference::default();
        bean.ends.guid = Some("from-ends".to_string());
        let encoded = RelationshipMapper::new(context()).encode(&bean).unwrap();
        assert_eq!(encoded.guid.as_deref(), Some("from-ends"));

        bean.system_attributes = Some(SystemAttributes {
            guid: Some("from-system".to_string()),
            ..Default::default()
        });
        let encoded = RelationshipMapper::new(context()).encode(&bean).unwrap();
        assert_eq!(encoded.guid.as_deref(), Some("from-system"));
    }

    #[test]
    fn test_duplicate_unresolved_classification_keeps_later() {
        let entity = EntityDetail {
            header: header("RelationalTable", TypeDefCategory::Entity),
            classifications: vec![
                Classification {
                    name: "Anchors".to_string(),
                    properties: InstanceProperties::new()
                        .with("anchorGUID", InstancePropertyValue::primitive("a-1")),
                    ..Default::default()
                },
                Classification {
                    name: "Anchors".to_string(),
                    properties: InstanceProperties::new()
                        .with("anchorGUID", InstancePropertyValue::primitive("a-2")),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let bean: RelationalTable = EntityMapper::new(context()).decode(&entity).unwrap();

        let extras = bean.extra_classifications.unwrap();
        assert_eq!(extras.len(), 1);
        assert_eq!(
            extras["Anchors"].properties.get("anchorGUID"),
            Some(&InstancePropertyValue::primitive("a-2"))
        );
    }

    #[test]
    fn test_encode_without_type_definition_fails() {
        let context = MapperContext::new(
            Arc::new(InMemoryTypeDefRegistry::new()),
            Arc::new(BuiltinClassificationFactory::new(
                Arc::new(OmrsStatusConverter),
                MappingConfig::default(),
            )),
            Arc::new(OmrsStatusConverter),
            MappingConfig::default(),
        );
        let err = EntityMapper::<RelationalTable>::new(context)
            .encode(&RelationalTable::default())
            .unwrap_err();
        assert_eq!(err, MapperError::UnknownTypeDef("RelationalTable".to_string()));
    }

    #[test]
    fn test_encode_with_wrong_category_fails() {
        let mut registry = InMemoryTypeDefRegistry::builtin();
        registry.register(InstanceType {
            type_def_guid: "g".to_string(),
            type_def_name: "RelationalTable".to_string(),
            type_def_version: 1,
            type_def_category: TypeDefCategory::Relationship,
            type_def_description: None,
        });
        let status: Arc<dyn StatusConverter> = Arc::new(OmrsStatusConverter);
        let context = MapperContext::new(
            Arc::new(registry),
            Arc::new(BuiltinClassificationFactory::new(
                Arc::clone(&status),
                MappingConfig::default(),
            )),
            status,
            MappingConfig::default(),
        );
        let err = EntityMapper::<RelationalTable>::new(context)
            .encode(&RelationalTable::default())
            .unwrap_err();
        assert!(matches!(err, MapperError::TypeCategoryMismatch { .. }));
    }
}
