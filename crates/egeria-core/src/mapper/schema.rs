//! Declarative property tables for typed beans.
//!
//! A [`BeanSchema`] lists every property a bean knows about, with the
//! category it must arrive in and how to read and write the matching field.
//! The decode and encode engines are single loops over this table.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, Utc};

use super::error::MapperError;
use crate::instance::{
    InstancePropertyValue, PrimitiveDefCategory, PrimitiveValue, PropertyCategory,
};

// =============================================================================
// FIELD TRAITS
// =============================================================================

/// A Rust type that can hold a primitive property.
///
/// Each implementation accepts exactly one primitive category; no widening
/// or parsing happens during decode.
pub trait PrimitiveField: Clone + Send + Sync + 'static {
    const CATEGORY: PrimitiveDefCategory;

    fn from_primitive(value: &PrimitiveValue) -> Option<Self>;

    fn to_primitive(&self) -> PrimitiveValue;
}

macro_rules! primitive_field {
    ($ty:ty, $variant:ident) => {
        impl PrimitiveField for $ty {
            const CATEGORY: PrimitiveDefCategory = PrimitiveDefCategory::$variant;

            fn from_primitive(value: &PrimitiveValue) -> Option<Self> {
                match value {
                    PrimitiveValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }

            fn to_primitive(&self) -> PrimitiveValue {
                PrimitiveValue::$variant(self.clone())
            }
        }
    };
}

primitive_field!(String, String);
primitive_field!(i32, Int);
primitive_field!(i64, Long);
primitive_field!(i16, Short);
primitive_field!(i8, Byte);
primitive_field!(char, Char);
primitive_field!(bool, Boolean);
primitive_field!(f32, Float);
primitive_field!(f64, Double);
primitive_field!(DateTime<Utc>, Date);

/// A domain enumeration mirrored by enum-category properties.
pub trait DomainEnum: Copy + Send + Sync + 'static {
    /// Name of the enum type, used in error messages.
    const ENUM_NAME: &'static str;

    /// Every declared constant.
    fn constants() -> &'static [Self];

    fn ordinal(&self) -> i32;

    fn symbolic_name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Exact, case-sensitive match against the declared constant names.
    fn from_symbolic_name(name: &str) -> Option<Self> {
        Self::constants()
            .iter()
            .copied()
            .find(|c| c.symbolic_name() == name)
    }
}

// =============================================================================
// BINDINGS
// =============================================================================

/// Shape a known property must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A primitive of exactly this type
    Primitive(PrimitiveDefCategory),
    /// A constant of the named domain enum
    Enum(&'static str),
    /// A map whose values are all primitives of this type
    Map(PrimitiveDefCategory),
}

impl PropertyKind {
    pub fn category(&self) -> PropertyCategory {
        match self {
            Self::Primitive(_) => PropertyCategory::Primitive,
            Self::Enum(_) => PropertyCategory::Enum,
            Self::Map(_) => PropertyCategory::Map,
        }
    }
}

type Reader<B> = Box<dyn Fn(&B) -> Option<InstancePropertyValue> + Send + Sync>;
type Writer<B> =
    Box<dyn Fn(&mut B, &InstancePropertyValue) -> Result<(), MapperError> + Send + Sync>;

/// One row of a bean schema.
pub struct PropertyBinding<B> {
    name: &'static str,
    kind: PropertyKind,
    read: Reader<B>,
    write: Writer<B>,
}

impl<B> PropertyBinding<B> {
    /// Canonical property name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Read the field as a property value, `None` when the field is unset.
    pub fn read(&self, bean: &B) -> Option<InstancePropertyValue> {
        (self.read)(bean)
    }

    /// Validate the value against this binding and store it on the bean.
    pub fn write(&self, bean: &mut B, value: &InstancePropertyValue) -> Result<(), MapperError> {
        (self.write)(bean, value)
    }
}

// =============================================================================
// SCHEMA
// =============================================================================

/// The property table of one bean type.
pub struct BeanSchema<B> {
    type_name: &'static str,
    bindings: Vec<PropertyBinding<B>>,
    index: HashMap<&'static str, usize>,
}

impl<B: 'static> BeanSchema<B> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            bindings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Declare a primitive property.
    pub fn primitive<T: PrimitiveField>(
        self,
        name: &'static str,
        get: fn(&B) -> Option<&T>,
        set: fn(&mut B, T),
    ) -> Self {
        let read: Reader<B> = Box::new(move |bean: &B| {
            get(bean).map(|v| InstancePropertyValue::Primitive {
                value: v.to_primitive(),
            })
        });
        let write: Writer<B> = Box::new(move |bean: &mut B, value: &InstancePropertyValue| {
            let InstancePropertyValue::Primitive { value: primitive } = value else {
                return Err(MapperError::property_type(
                    name,
                    PropertyCategory::Primitive,
                    value.category(),
                ));
            };
            let field = T::from_primitive(primitive).ok_or_else(|| {
                MapperError::property_type(name, T::CATEGORY, primitive.category())
            })?;
            set(bean, field);
            Ok(())
        });
        self.push(name, PropertyKind::Primitive(T::CATEGORY), read, write)
    }

    /// Declare an enum property.
    pub fn enumeration<E: DomainEnum>(
        self,
        name: &'static str,
        get: fn(&B) -> Option<E>,
        set: fn(&mut B, E),
    ) -> Self {
        let read: Reader<B> = Box::new(move |bean: &B| {
            get(bean).map(|e| InstancePropertyValue::Enum {
                ordinal: e.ordinal(),
                symbolic_name: e.symbolic_name().to_string(),
                description: Some(e.description().to_string()),
            })
        });
        let write: Writer<B> = Box::new(move |bean: &mut B, value: &InstancePropertyValue| {
            let InstancePropertyValue::Enum { symbolic_name, .. } = value else {
                return Err(MapperError::property_type(
                    name,
                    PropertyCategory::Enum,
                    value.type_label(),
                ));
            };
            let constant = E::from_symbolic_name(symbolic_name).ok_or_else(|| {
                MapperError::UnknownEnumConstant {
                    property: name.to_string(),
                    enum_name: E::ENUM_NAME,
                    symbolic_name: symbolic_name.clone(),
                }
            })?;
            set(bean, constant);
            Ok(())
        });
        self.push(name, PropertyKind::Enum(E::ENUM_NAME), read, write)
    }

    /// Declare a map property whose values are primitives of type `T`.
    pub fn map<T: PrimitiveField>(
        self,
        name: &'static str,
        get: fn(&B) -> Option<&BTreeMap<String, T>>,
        set: fn(&mut B, BTreeMap<String, T>),
    ) -> Self {
        let read: Reader<B> = Box::new(move |bean: &B| {
            get(bean).map(|entries| InstancePropertyValue::Map {
                values: entries
                    .iter()
                    .map(|(key, v)| {
                        (
                            key.clone(),
                            InstancePropertyValue::Primitive {
                                value: v.to_primitive(),
                            },
                        )
                    })
                    .collect(),
            })
        });
        let write: Writer<B> = Box::new(move |bean: &mut B, value: &InstancePropertyValue| {
            let InstancePropertyValue::Map { values } = value else {
                return Err(MapperError::property_type(
                    name,
                    PropertyCategory::Map,
                    value.type_label(),
                ));
            };
            let mut entries = BTreeMap::new();
            for (key, entry) in values.iter() {
                let field = match entry {
                    InstancePropertyValue::Primitive { value } => T::from_primitive(value),
                    _ => None,
                }
                .ok_or_else(|| {
                    MapperError::property_type(
                        format!("{name}.{key}"),
                        T::CATEGORY,
                        entry.type_label(),
                    )
                })?;
                entries.insert(key.to_string(), field);
            }
            set(bean, entries);
            Ok(())
        });
        self.push(name, PropertyKind::Map(T::CATEGORY), read, write)
    }

    fn push(
        mut self,
        name: &'static str,
        kind: PropertyKind,
        read: Reader<B>,
        write: Writer<B>,
    ) -> Self {
        debug_assert!(
            !self.index.contains_key(name),
            "property {name} declared twice on {}",
            self.type_name
        );
        self.index.insert(name, self.bindings.len());
        self.bindings.push(PropertyBinding {
            name,
            kind,
            read,
            write,
        });
        self
    }
}

impl<B> BeanSchema<B> {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn bindings(&self) -> &[PropertyBinding<B>] {
        &self.bindings
    }

    /// The binding for a property name, if the bean knows it.
    pub fn binding(&self, name: &str) -> Option<&PropertyBinding<B>> {
        self.index.get(name).map(|&i| &self.bindings[i])
    }

    /// Names of known primitive properties.
    pub fn attribute_names(&self) -> Vec<&'static str> {
        self.names_of(PropertyCategory::Primitive)
    }

    /// Names of known enum properties.
    pub fn enum_names(&self) -> Vec<&'static str> {
        self.names_of(PropertyCategory::Enum)
    }

    /// Names of known map properties.
    pub fn map_names(&self) -> Vec<&'static str> {
        self.names_of(PropertyCategory::Map)
    }

    fn names_of(&self, category: PropertyCategory) -> Vec<&'static str> {
        self.bindings
            .iter()
            .filter(|b| b.kind.category() == category)
            .map(|b| b.name)
            .collect()
    }
}

impl<B> fmt::Debug for BeanSchema<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanSchema")
            .field("type_name", &self.type_name)
            .field(
                "bindings",
                &self
                    .bindings
                    .iter()
                    .map(|b| (b.name, b.kind))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
