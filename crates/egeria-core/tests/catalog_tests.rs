use egeria_core::beans::{
    Confidentiality, EndReference, GovernanceClassificationStatus, GovernanceResponsibility,
    LibraryCategoryReference, RelationshipEnds,
};
use egeria_core::config::MappingConfig;
use egeria_core::instance::{
    Classification, EntityDetail, EntityProxy, InstanceAuditHeader, InstanceProperties,
    InstancePropertyValue, InstanceType, Relationship, TypeDefCategory,
};
use egeria_core::{DomainEntity, DomainRelationship, MapperContext, MapperError, MappingCatalog};

fn catalog() -> MappingCatalog {
    MappingCatalog::new(MapperContext::builtin(MappingConfig::default()))
}

fn typed(type_name: &str, category: TypeDefCategory) -> InstanceAuditHeader {
    InstanceAuditHeader {
        instance_type: Some(InstanceType {
            type_def_guid: "6b60a73e-47bc-4096-9073-f94cab975958".to_string(),
            type_def_name: type_name.to_string(),
            type_def_version: 1,
            type_def_category: category,
            type_def_description: None,
        }),
        ..Default::default()
    }
}

#[test]
fn test_decode_entity_by_type_name() {
    let entity = EntityDetail {
        header: typed("GovernanceResponsibility", TypeDefCategory::Entity),
        guid: Some("gr-1".to_string()),
        properties: InstanceProperties::new()
            .with("title", InstancePropertyValue::primitive("Data owner"))
            .with("domainIdentifier", InstancePropertyValue::primitive(1)),
        classifications: Vec::new(),
    };

    let decoded = catalog().decode_entity(&entity).unwrap();
    assert_eq!(decoded.type_name(), "GovernanceResponsibility");
    assert_eq!(
        decoded.system_attributes().and_then(|a| a.guid.as_deref()),
        Some("gr-1")
    );
    let DomainEntity::GovernanceResponsibility(bean) = decoded else {
        panic!("expected a governance responsibility");
    };
    assert_eq!(bean.title.as_deref(), Some("Data owner"));
    assert_eq!(bean.domain_identifier, Some(1));
}

#[test]
fn test_unmapped_entity_type() {
    let entity = EntityDetail {
        header: typed("DeployedDatabaseSchema", TypeDefCategory::Entity),
        ..Default::default()
    };
    let err = catalog().decode_entity(&entity).unwrap_err();
    assert_eq!(err, MapperError::UnmappedType("DeployedDatabaseSchema".to_string()));
}

#[test]
fn test_encode_entity_from_json() {
    let json = r#"{
        "typeName": "GovernanceResponsibility",
        "qualifiedName": "resp::owner",
        "priority": "high",
        "additionalProperties": {"team": "finance"}
    }"#;
    let bean: DomainEntity = serde_json::from_str(json).unwrap();

    let encoded = catalog().encode_entity(&bean).unwrap();
    assert_eq!(encoded.type_name(), Some("GovernanceResponsibility"));
    assert_eq!(
        encoded.properties.get("priority"),
        Some(&InstancePropertyValue::primitive("high"))
    );
    assert!(matches!(
        encoded.properties.get("additionalProperties"),
        Some(InstancePropertyValue::Map { .. })
    ));
}

#[test]
fn test_relationship_round_trip() {
    let relationship = Relationship {
        header: typed("LibraryCategoryReference", TypeDefCategory::Relationship),
        guid: Some("lcr-1".to_string()),
        properties: InstanceProperties::new()
            .with("identifier", InstancePropertyValue::primitive("cat-9"))
            .with("steward", InstancePropertyValue::primitive("Faith Broker")),
        entity_one_proxy: Some(EntityProxy::new("cat-1", "GlossaryCategory")),
        entity_two_proxy: Some(EntityProxy::new("ext-1", "ExternalGlossaryLink")),
    };

    let catalog = catalog();
    let decoded = catalog.decode_relationship(&relationship).unwrap();
    assert_eq!(
        decoded.ends(),
        &RelationshipEnds {
            guid: Some("lcr-1".to_string()),
            end1: Some(EndReference::new("cat-1", "GlossaryCategory")),
            end2: Some(EndReference::new("ext-1", "ExternalGlossaryLink")),
        }
    );

    let encoded = catalog.encode_relationship(&decoded).unwrap();
    assert_eq!(encoded.guid, relationship.guid);
    assert_eq!(encoded.properties, relationship.properties);
    assert_eq!(encoded.entity_one_proxy, relationship.entity_one_proxy);
    assert_eq!(encoded.entity_two_proxy, relationship.entity_two_proxy);
    assert_eq!(encoded.type_name(), Some("LibraryCategoryReference"));
}

#[test]
fn test_entity_type_is_not_a_relationship() {
    let relationship = Relationship {
        header: typed("RelationalTable", TypeDefCategory::Entity),
        ..Default::default()
    };
    let err = catalog().decode_relationship(&relationship).unwrap_err();
    assert_eq!(err, MapperError::UnmappedType("RelationalTable".to_string()));
}

#[test]
fn test_relationship_bean_json_is_flat() {
    let bean = DomainRelationship::LibraryCategoryReference(LibraryCategoryReference {
        ends: RelationshipEnds {
            guid: Some("lcr-2".to_string()),
            end1: Some(EndReference::new("cat-2", "GlossaryCategory")),
            end2: None,
        },
        identifier: Some("cat-10".to_string()),
        ..Default::default()
    });

    let json = serde_json::to_value(&bean).unwrap();
    assert_eq!(json["typeName"], "LibraryCategoryReference");
    assert_eq!(json["guid"], "lcr-2");
    assert_eq!(json["end1"]["typeName"], "GlossaryCategory");
    assert!(json.get("end2").is_none());
}

#[test]
fn test_classification_mapper() {
    let classification = Classification {
        name: "Confidentiality".to_string(),
        properties: InstanceProperties::new()
            .with("confidence", InstancePropertyValue::primitive(90))
            .with("status", InstancePropertyValue::enumeration(2, "IMPORTED")),
        ..Default::default()
    };

    let mapper = catalog().classification::<Confidentiality>();
    let bean = mapper.decode(&classification).unwrap();
    assert_eq!(bean.confidence, Some(90));
    assert_eq!(bean.status, Some(GovernanceClassificationStatus::Imported));

    let encoded = mapper.encode(&bean).unwrap();
    assert_eq!(encoded.name, "Confidentiality");
    assert_eq!(
        encoded.header.instance_type.map(|t| t.type_def_category),
        Some(TypeDefCategory::Classification)
    );

    let wrong = Classification::new("PrimaryKey");
    assert!(mapper.decode(&wrong).unwrap_err().is_type_mismatch());
}

#[test]
fn test_bean_json_omits_nulls() {
    let bean = GovernanceResponsibility {
        title: Some("Steward".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&bean).unwrap();
    assert_eq!(json, r#"{"title":"Steward"}"#);
}
