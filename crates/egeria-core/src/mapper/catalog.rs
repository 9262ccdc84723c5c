//! Dispatch of any bundled type by name.

use serde::Serialize;

use super::{ClassificationMapper, EntityMapper, MapperContext, MapperError, RelationshipMapper};
use crate::beans::{
    Confidentiality, DomainEntity, DomainRelationship, EntityBean, GovernanceResponsibility,
    LibraryCategoryReference, LibraryTermReference, PrimaryKey, QualityAnnotation,
    RelationalTable, RelationshipBean, SchemaAttribute, TypedBean,
};
use crate::instance::{EntityDetail, Relationship, TypeDefCategory};

/// Shape of one bundled bean type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummary {
    pub type_name: &'static str,
    pub category: TypeDefCategory,
    pub attributes: Vec<&'static str>,
    pub enums: Vec<&'static str>,
    pub maps: Vec<&'static str>,
}

impl TypeSummary {
    fn of<B: TypedBean>() -> Self {
        let schema = B::schema();
        Self {
            type_name: B::TYPE_NAME,
            category: B::CATEGORY,
            attributes: schema.attribute_names(),
            enums: schema.enum_names(),
            maps: schema.map_names(),
        }
    }
}

/// Routes generic instances to the typed mapper for their type name.
#[derive(Debug, Clone)]
pub struct MappingCatalog {
    context: MapperContext,
}

impl MappingCatalog {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &MapperContext {
        &self.context
    }

    /// Decode an entity of any bundled type.
    pub fn decode_entity(&self, entity: &EntityDetail) -> Result<DomainEntity, MapperError> {
        match entity.type_name().unwrap_or_default() {
            name if name == SchemaAttribute::TYPE_NAME => {
                self.entity().decode(entity).map(DomainEntity::SchemaAttribute)
            }
            name if name == RelationalTable::TYPE_NAME => {
                self.entity().decode(entity).map(DomainEntity::RelationalTable)
            }
            name if name == GovernanceResponsibility::TYPE_NAME => self
                .entity()
                .decode(entity)
                .map(DomainEntity::GovernanceResponsibility),
            name if name == QualityAnnotation::TYPE_NAME => {
                self.entity().decode(entity).map(DomainEntity::QualityAnnotation)
            }
            other => Err(MapperError::UnmappedType(other.to_string())),
        }
    }

    pub fn encode_entity(&self, bean: &DomainEntity) -> Result<EntityDetail, MapperError> {
        match bean {
            DomainEntity::SchemaAttribute(b) => self.entity().encode(b),
            DomainEntity::RelationalTable(b) => self.entity().encode(b),
            DomainEntity::GovernanceResponsibility(b) => self.entity().encode(b),
            DomainEntity::QualityAnnotation(b) => self.entity().encode(b),
        }
    }

    /// Decode a relationship of any bundled type.
    pub fn decode_relationship(
        &self,
        relationship: &Relationship,
    ) -> Result<DomainRelationship, MapperError> {
        match relationship.type_name().unwrap_or_default() {
            name if name == LibraryCategoryReference::TYPE_NAME => self
                .relationship()
                .decode(relationship)
                .map(DomainRelationship::LibraryCategoryReference),
            name if name == LibraryTermReference::TYPE_NAME => self
                .relationship()
                .decode(relationship)
                .map(DomainRelationship::LibraryTermReference),
            other => Err(MapperError::UnmappedType(other.to_string())),
        }
    }

    pub fn encode_relationship(
        &self,
        bean: &DomainRelationship,
    ) -> Result<Relationship, MapperError> {
        match bean {
            DomainRelationship::LibraryCategoryReference(b) => self.relationship().encode(b),
            DomainRelationship::LibraryTermReference(b) => self.relationship().encode(b),
        }
    }

    /// Mapper for a single classification type.
    pub fn classification<B: TypedBean>(&self) -> ClassificationMapper<B> {
        ClassificationMapper::new(self.context.clone())
    }

    /// Every bundled bean type, entities first.
    pub fn type_summaries() -> Vec<TypeSummary> {
        vec![
            TypeSummary::of::<SchemaAttribute>(),
            TypeSummary::of::<RelationalTable>(),
            TypeSummary::of::<GovernanceResponsibility>(),
            TypeSummary::of::<QualityAnnotation>(),
            TypeSummary::of::<LibraryCategoryReference>(),
            TypeSummary::of::<LibraryTermReference>(),
            TypeSummary::of::<Confidentiality>(),
            TypeSummary::of::<PrimaryKey>(),
        ]
    }

    fn entity<B: EntityBean>(&self) -> EntityMapper<B> {
        EntityMapper::new(self.context.clone())
    }

    fn relationship<B: RelationshipBean>(&self) -> RelationshipMapper<B> {
        RelationshipMapper::new(self.context.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beans::BUNDLED_TYPES;
    use crate::config::MappingConfig;

    #[test]
    fn test_summaries_cover_bundled_types() {
        let summaries = MappingCatalog::type_summaries();
        assert_eq!(summaries.len(), BUNDLED_TYPES.len());
        for (name, category, _) in BUNDLED_TYPES {
            let summary = summaries.iter().find(|s| s.type_name == *name).unwrap();
            assert_eq!(summary.category, *category);
        }
    }

    #[test]
    fn test_summary_splits_property_kinds() {
        let summary = TypeSummary::of::<SchemaAttribute>();
        assert!(summary.attributes.contains(&"qualifiedName"));
        assert_eq!(summary.enums, vec!["sortOrder"]);
        assert_eq!(summary.maps, vec!["additionalProperties"]);
    }

    #[test]
    fn test_untyped_entity_is_unmapped() {
        let catalog = MappingCatalog::new(MapperContext::builtin(MappingConfig::default()));
        let err = catalog.decode_entity(&EntityDetail::default()).unwrap_err();
        assert_eq!(err, MapperError::UnmappedType(String::new()));
    }
}
