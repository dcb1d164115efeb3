//! Core type definitions.

use serde::Serialize;

use crate::{EnumType, IntrinsicType};

/// Where a named type came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeCategory {
    Primitive,
    DataType,
    Resource,
    /// A named structure synthesized from an inline backbone element.
    SubType,
    ValueSet,
}

impl TypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Primitive => "primitive",
            TypeCategory::DataType => "datatype",
            TypeCategory::Resource => "resource",
            TypeCategory::SubType => "subtype",
            TypeCategory::ValueSet => "valueset",
        }
    }
}

/// A resolved type.
///
/// `Interface`, `Enum`, `Primitive` and `Alias` are root types: they carry a
/// name and appear in the graph's output list. The remaining variants only
/// occur nested inside properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Interface(InterfaceType),
    Enum(EnumType),
    Primitive(PrimitiveType),
    Reference(TypeReference),
    Array { element: Box<Type> },
    Union { alternatives: Vec<Type> },
    Object(ObjectType),
    Alias(AliasType),
}

impl Type {
    pub fn reference(name: impl Into<String>) -> Self {
        Type::Reference(TypeReference::new(name))
    }

    pub fn array(element: Type) -> Self {
        Type::Array {
            element: Box::new(element),
        }
    }

    pub fn union(alternatives: Vec<Type>) -> Self {
        Type::Union { alternatives }
    }

    /// The type's own name, for variants that have one.
    ///
    /// References report the name of their target.
    pub fn name(&self) -> Option<&str> {
        match self {
            Type::Interface(t) => Some(&t.name),
            Type::Enum(t) => Some(&t.name),
            Type::Primitive(t) => Some(&t.name),
            Type::Reference(t) => Some(&t.name),
            Type::Alias(t) => Some(&t.name),
            Type::Array { .. } | Type::Union { .. } | Type::Object(_) => None,
        }
    }

    /// Short name of the variant, as used in snapshots and messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Type::Interface(_) => "interface",
            Type::Enum(_) => "enum",
            Type::Primitive(_) => "primitive",
            Type::Reference(_) => "reference",
            Type::Array { .. } => "array",
            Type::Union { .. } => "union",
            Type::Object(_) => "object",
            Type::Alias(_) => "alias",
        }
    }

    pub fn category(&self) -> Option<TypeCategory> {
        match self {
            Type::Interface(t) => Some(t.category),
            Type::Enum(_) => Some(TypeCategory::ValueSet),
            Type::Primitive(_) => Some(TypeCategory::Primitive),
            Type::Alias(t) => Some(t.category),
            _ => None,
        }
    }

    /// Root types may be emitted as standalone declarations.
    pub fn is_root(&self) -> bool {
        matches!(
            self,
            Type::Interface(_) | Type::Enum(_) | Type::Primitive(_) | Type::Alias(_)
        )
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Type::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Type::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveType> {
        match self {
            Type::Primitive(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&TypeReference> {
        match self {
            Type::Reference(t) => Some(t),
            _ => None,
        }
    }

    /// The element type of an array, or the type itself.
    pub fn unwrap_array(&self) -> &Type {
        match self {
            Type::Array { element } => element,
            other => other,
        }
    }

    /// Properties of object-shaped types.
    pub fn properties(&self) -> Option<&[Property]> {
        match self {
            Type::Interface(t) => Some(&t.properties),
            Type::Object(t) => Some(&t.properties),
            _ => None,
        }
    }

    /// Every type name this type refers to, including base types but not
    /// bindings.
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Type::Reference(r) => names.push(&r.name),
            Type::Array { element } => element.collect_references(names),
            Type::Union { alternatives } => {
                for alt in alternatives {
                    alt.collect_references(names);
                }
            }
            Type::Interface(InterfaceType {
                base_type,
                properties,
                ..
            }) => {
                if let Some(base) = base_type {
                    names.push(base);
                }
                for prop in properties {
                    prop.ty.collect_references(names);
                }
            }
            Type::Object(ObjectType { properties }) => {
                for prop in properties {
                    prop.ty.collect_references(names);
                }
            }
            Type::Alias(alias) => alias.target.collect_references(names),
            Type::Enum(_) | Type::Primitive(_) => {}
        }
    }
}

/// A structure with single inheritance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceType {
    pub name: String,
    pub category: TypeCategory,
    pub base_type: Option<String>,
    pub description: Option<String>,
    pub properties: Vec<Property>,
    pub is_abstract: bool,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>, category: TypeCategory) -> Self {
        Self {
            name: name.into(),
            category,
            base_type: None,
            description: None,
            properties: Vec::new(),
            is_abstract: false,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

/// An anonymous inline structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectType {
    pub properties: Vec<Property>,
}

/// A named primitive backed by an intrinsic representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveType {
    pub name: String,
    pub description: Option<String>,
    pub intrinsic: IntrinsicType,
}

/// A pointer to a named type, optionally constrained by a value set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeReference {
    pub name: String,
    /// Name of the enumeration constraining the referenced type's values.
    pub binding: Option<String>,
}

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding: None,
        }
    }

    pub fn with_binding(mut self, binding: impl Into<String>) -> Self {
        self.binding = Some(binding.into());
        self
    }
}

/// A named synonym for another type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasType {
    pub name: String,
    pub category: TypeCategory,
    pub target: Box<Type>,
}

/// A member of an interface or object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub description: Option<String>,
    pub ty: Type,
    pub optional: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            optional: false,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_types() {
        let interface = Type::Interface(InterfaceType::new("Patient", TypeCategory::Resource));
        assert!(interface.is_root());
        assert_eq!(interface.name(), Some("Patient"));
        assert_eq!(interface.category(), Some(TypeCategory::Resource));

        let array = Type::array(Type::reference("HumanName"));
        assert!(!array.is_root());
        assert_eq!(array.name(), None);
        assert_eq!(array.kind(), "array");
        assert_eq!(array.unwrap_array().name(), Some("HumanName"));
    }

    #[test]
    fn test_referenced_names() {
        let mut patient = InterfaceType::new("Patient", TypeCategory::Resource);
        patient.base_type = Some("DomainResource".into());
        patient.properties = vec![
            Property::new(
                "gender",
                Type::Reference(TypeReference::new("code").with_binding("AdministrativeGender")),
            ),
            Property::new(
                "deceasedBoolean",
                Type::union(vec![Type::reference("boolean"), Type::reference("dateTime")]),
            ),
            Property::new("name", Type::array(Type::reference("HumanName"))),
        ];

        assert_eq!(
            Type::Interface(patient).referenced_names(),
            [
                "DomainResource",
                "code",
                "boolean",
                "dateTime",
                "HumanName"
            ]
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let ty = Type::Reference(TypeReference::new("string"));
        let json = serde_json::to_value(&ty).unwrap();
        assert_eq!(json["kind"], "reference");
        assert_eq!(json["name"], "string");
    }
}
