pub mod beans;
pub mod config;
pub mod instance;
pub mod mapper;
pub mod registry;
pub mod status;

pub use beans::{DomainEntity, DomainRelationship, EntityBean, RelationshipBean, TypedBean};
pub use config::Config;
pub use instance::{Classification, EntityDetail, Relationship};
pub use mapper::{
    ClassificationMapper, EntityMapper, MapperContext, MapperError, MappingCatalog,
    RelationshipMapper,
};
pub use registry::{InMemoryTypeDefRegistry, TypeDefRegistry};
pub use status::{OmrsStatusConverter, Status, StatusConverter};
