//! StructureDefinition documents and their element definitions.

use serde::Deserialize;

use super::common::{OneOrMany, Reference};

/// What kind of structure a definition describes.
///
/// Unrecognised kinds are kept in [`StructureKind::Unknown`] so the resolver
/// can report them against the owning file instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StructureKind {
    Resource,
    Constraint,
    Datatype,
    Type,
    ComplexType,
    PrimitiveType,
    Unknown(String),
}

impl From<String> for StructureKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "resource" => Self::Resource,
            "constraint" => Self::Constraint,
            "datatype" => Self::Datatype,
            "type" => Self::Type,
            "complex-type" => Self::ComplexType,
            "primitive-type" => Self::PrimitiveType,
            _ => Self::Unknown(value),
        }
    }
}

impl StructureKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resource => "resource",
            Self::Constraint => "constraint",
            Self::Datatype => "datatype",
            Self::Type => "type",
            Self::ComplexType => "complex-type",
            Self::PrimitiveType => "primitive-type",
            Self::Unknown(other) => other,
        }
    }
}

/// A StructureDefinition resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureDefinition {
    pub id: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    pub kind: Option<StructureKind>,
    pub derivation: Option<String>,
    #[serde(rename = "abstract", default)]
    pub is_abstract: bool,
    #[serde(alias = "base")]
    pub base_definition: Option<String>,
    pub differential: Option<Differential>,
}

impl StructureDefinition {
    /// The element definitions in declaration order.
    pub fn elements(&self) -> &[ElementDefinition] {
        self.differential
            .as_ref()
            .map(|d| d.element.as_slice())
            .unwrap_or_default()
    }

    /// The root element, whose path has no `.` separator.
    pub fn root_element(&self) -> Option<&ElementDefinition> {
        self.elements().iter().find(|e| e.is_root())
    }

    /// True for profiles of resources rather than new structures.
    pub fn is_constraint(&self) -> bool {
        self.derivation.as_deref() == Some("constraint")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Differential {
    #[serde(default)]
    pub element: Vec<ElementDefinition>,
}

/// A single element (property) of a structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinition {
    pub id: Option<String>,
    pub path: String,
    pub short: Option<String>,
    pub definition: Option<String>,
    pub min: Option<u32>,
    pub max: Option<String>,
    pub content_reference: Option<String>,
    pub name_reference: Option<String>,
    #[serde(rename = "type")]
    pub types: Option<OneOrMany<ElementType>>,
    pub binding: Option<ElementBinding>,
}

impl ElementDefinition {
    pub fn is_root(&self) -> bool {
        !self.path.contains('.')
    }

    /// The last segment of the element path.
    pub fn name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }

    /// Only an explicit minimum cardinality of zero makes an element optional.
    pub fn is_optional(&self) -> bool {
        self.min == Some(0)
    }

    /// Anything but an explicit upper bound of `1` repeats.
    pub fn is_array(&self) -> bool {
        self.max.as_deref() != Some("1")
    }

    /// A maximum cardinality of `0` removes the element from the structure.
    pub fn is_prohibited(&self) -> bool {
        self.max.as_deref() == Some("0")
    }

    /// True for polymorphic `value[x]` elements.
    pub fn is_choice(&self) -> bool {
        self.path.ends_with("[x]")
    }
}

/// One allowed type of an element.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementType {
    pub code: Option<String>,
    pub profile: Option<OneOrMany<String>>,
}

impl ElementType {
    pub fn profiles(&self) -> &[String] {
        self.profile
            .as_ref()
            .map(OneOrMany::as_slice)
            .unwrap_or_default()
    }
}

/// How strongly an element is bound to a value set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
    Unknown(String),
}

impl From<String> for BindingStrength {
    fn from(value: String) -> Self {
        match value.as_str() {
            "required" => Self::Required,
            "extensible" => Self::Extensible,
            "preferred" => Self::Preferred,
            "example" => Self::Example,
            _ => Self::Unknown(value),
        }
    }
}

/// Binding of a coded element to a value set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBinding {
    pub strength: Option<BindingStrength>,
    pub value_set_reference: Option<Reference>,
    pub value_set: Option<String>,
    pub value_set_uri: Option<String>,
}

impl ElementBinding {
    /// The bound value set URL, whichever release's field carries it.
    pub fn value_set_url(&self) -> Option<&str> {
        self.value_set_reference
            .as_ref()
            .and_then(|r| r.reference.as_deref())
            .or(self.value_set.as_deref())
            .or(self.value_set_uri.as_deref())
    }
}
