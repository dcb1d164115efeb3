//! Resolution of structure definitions into interface and primitive types.

use std::collections::HashSet;

use fhirts_core::format_name;
use fhirts_ir::{InterfaceType, PrimitiveType, Property, Type, TypeCategory, TypeReference};
use fhirts_spec::{
    SpecificationDocument,
    model::{BindingStrength, ElementDefinition, StructureDefinition, StructureKind},
};

use super::{Resolver, state::TypeId};

const PROFILE_BASE: &str = "http://hl7.org/fhir/StructureDefinition/";
const EXAMPLE_COPYRIGHT: &str = "This is an example set";
const CHOICE_SUFFIX: &str = "[x]";

/// The types an element typed `*` may hold.
const OPEN_TYPES: &[&str] = &[
    "integer",
    "decimal",
    "dateTime",
    "date",
    "instant",
    "time",
    "string",
    "uri",
    "boolean",
    "code",
    "base64Binary",
    "Coding",
    "CodeableConcept",
    "Attachment",
    "Identifier",
    "Quantity",
    "Range",
    "Period",
    "Ratio",
    "HumanName",
    "Address",
    "ContactPoint",
    "Timing",
    "Signature",
    "Reference",
];

impl<'a> Resolver<'a> {
    pub(super) fn resolve_structure(
        &mut self,
        doc: &'a SpecificationDocument,
        sd: &'a StructureDefinition,
    ) {
        match &sd.kind {
            Some(StructureKind::Resource) => self.resolve_interface(doc, sd),
            Some(
                StructureKind::Constraint
                | StructureKind::Datatype
                | StructureKind::Type
                | StructureKind::ComplexType
                | StructureKind::PrimitiveType,
            ) => {
                if is_primitive(sd) {
                    self.resolve_primitive(doc, sd);
                } else {
                    self.resolve_interface(doc, sd);
                }
            }
            Some(StructureKind::Unknown(kind)) => {
                self.error(format!("Unknown content kind '{kind}'."));
            }
            None => self.error("Missing content kind."),
        }
    }

    fn resolve_primitive(&mut self, doc: &'a SpecificationDocument, sd: &'a StructureDefinition) {
        let name = doc.id.as_str();
        let Some(&intrinsic) = self.options.primitives.get(name) else {
            self.error(format!("Unknown primitive type '{name}'."));
            return;
        };

        let description = sd.root_element().and_then(|e| e.definition.clone());
        self.create(
            doc,
            Type::Primitive(PrimitiveType {
                name: name.to_owned(),
                description,
                intrinsic,
            }),
        );
    }

    fn resolve_interface(&mut self, doc: &'a SpecificationDocument, sd: &'a StructureDefinition) {
        let category = match sd.kind {
            Some(StructureKind::Resource) => TypeCategory::Resource,
            _ => TypeCategory::DataType,
        };
        let mut interface = InterfaceType::new(&doc.id, category);
        interface.is_abstract = sd.is_abstract;
        let root = self.create(doc, Type::Interface(interface));

        let base = match sd.base_definition.as_deref() {
            Some(url) => match self.profile_name(url) {
                Some(base) => Some(base),
                None => return,
            },
            None => self.default_base(&doc.id, category),
        };

        if let Some(base) = base {
            if !self.documents.contains_key(base) {
                self.error(format!("Unknown base type '{base}'."));
                return;
            }
            self.interface_mut(root).base_type = Some(base.to_owned());
            self.reference(base);
        }

        for (index, element) in sd.elements().iter().enumerate() {
            if element.is_root() {
                self.interface_mut(root).description = element.short.clone();
                continue;
            }

            let name = element.name();
            if name.is_empty() {
                self.error(format!("Missing property name for element {index}."));
                return;
            }

            let Some(container) = self.containing_type(root, element) else {
                self.error(format!(
                    "Error getting containing type for property '{name}'."
                ));
                return;
            };

            if element.is_choice() && name.len() > CHOICE_SUFFIX.len() {
                let Some(references) = self.type_references(element) else {
                    return;
                };
                let properties = choice_properties(name, element, references);
                self.push_properties(container, properties);
            } else if !element.is_prohibited() {
                let Some(ty) = self.property_type(root, element) else {
                    self.error(format!("Error getting type for property '{name}'."));
                    return;
                };
                let property = Property::new(name, ty)
                    .optional(element.is_optional())
                    .description(element.short.clone());
                self.push_properties(container, vec![property]);
            }
        }

        self.apply_fixups(root);
    }

    /// Base used when a definition declares none.
    fn default_base(&self, name: &str, category: TypeCategory) -> Option<&'a str> {
        let base = match (name, category) {
            ("Element" | "Resource", _) => return None,
            ("DomainResource", _) => "Resource",
            (_, TypeCategory::Resource) => "DomainResource",
            _ => "Element",
        };
        self.key(base)
    }

    /// Strip the core profile prefix, leaving the resource name.
    fn profile_name<'u>(&mut self, url: &'u str) -> Option<&'u str> {
        let name = url.strip_prefix(PROFILE_BASE);
        if name.is_none() {
            self.error(format!("Unrecognized profile uri: '{url}'."));
        }
        name
    }

    fn interface_mut(&mut self, id: TypeId) -> &mut InterfaceType {
        match &mut self.types[id] {
            Type::Interface(interface) => interface,
            other => unreachable!("type {:?} is not an interface", other.name()),
        }
    }

    fn push_properties(&mut self, container: TypeId, properties: Vec<Property>) {
        match &mut self.types[container] {
            Type::Interface(InterfaceType { properties: p, .. }) => p.extend(properties),
            Type::Object(object) => object.properties.extend(properties),
            _ => {}
        }
    }

    /// True if the interface `id` is named `name` or inherits from it.
    fn has_base_interface(&mut self, id: TypeId, name: &str) -> bool {
        let mut current = Some(id);
        let mut seen = HashSet::new();
        while let Some(ty) = current {
            if !seen.insert(ty) {
                return false;
            }
            if self.type_name(ty) == name {
                return true;
            }
            let base = self.types[ty]
                .as_interface()
                .and_then(|i| i.base_type.clone());
            current = base.and_then(|b| self.type_by_name(&b));
        }
        false
    }

    /// Find the type an element's property belongs to by walking its path.
    fn containing_type(&mut self, root: TypeId, element: &ElementDefinition) -> Option<TypeId> {
        let segments: Vec<&str> = element.path.split('.').collect();
        let (head, rest) = segments.split_first()?;

        if !self.has_base_interface(root, head) {
            let expected = self.type_name(root).to_owned();
            self.error(format!("Expected '{head}' to be a '{expected}'."));
            return None;
        }

        let mut current = root;
        for segment in rest.iter().take(rest.len().saturating_sub(1)) {
            let property_type = self.types[current]
                .properties()
                .and_then(|props| props.iter().find(|p| p.name == *segment))
                .map(|p| p.ty.clone());

            let Some(property_type) = property_type else {
                let owner = self.type_name(current).to_owned();
                self.error(format!(
                    "Could not find property '{segment}' on type '{owner}'."
                ));
                return None;
            };

            let target = self.referenced_type(&property_type, None);
            match target {
                Some(id) if self.types[id].properties().is_some() => current = id,
                _ => {
                    self.error(format!(
                        "Expected property '{segment}' to reference an object type."
                    ));
                    return None;
                }
            }
        }

        Some(current)
    }

    /// Follow a (possibly array-wrapped) reference to the type it names.
    fn referenced_type(&mut self, ty: &Type, category: Option<TypeCategory>) -> Option<TypeId> {
        let mut ty = ty;
        while let Type::Array { element } = ty {
            ty = element.as_ref();
        }
        let Type::Reference(reference) = ty else {
            return None;
        };

        let Some(id) = self.type_by_name(&reference.name) else {
            self.error(format!(
                "Could not find type with name '{}'.",
                reference.name
            ));
            return None;
        };

        match category {
            Some(category) if self.types[id].category() != Some(category) => None,
            _ => Some(id),
        }
    }

    fn property_type(&mut self, root: TypeId, element: &'a ElementDefinition) -> Option<Type> {
        let fixed = match element.path.as_str() {
            "Element.id" => Some("string"),
            "Extension.url" => Some("uri"),
            _ => None,
        };
        if let Some(name) = fixed {
            self.reference_if_known(name);
            return Some(Type::reference(name));
        }

        let ty = if let Some(reference) = element.content_reference.as_deref() {
            let Some(path) = reference.strip_prefix('#') else {
                self.error(format!(
                    "Expected content reference '{reference}' to start with #."
                ));
                return None;
            };
            let name = path.rsplit('.').next().unwrap_or(path);
            self.named_reference(root, name, reference)?
        } else if let Some(reference) = element.name_reference.as_deref() {
            self.named_reference(root, reference, reference)?
        } else {
            self.declared_type(element)?
        };

        Some(if element.is_array() {
            Type::array(ty)
        } else {
            ty
        })
    }

    /// Type from the element's own type list, with any value set binding.
    fn declared_type(&mut self, element: &'a ElementDefinition) -> Option<Type> {
        let references = self.type_references(element)?;

        let mut ty = match <[TypeReference; 1]>::try_from(references) {
            Ok([reference]) if matches!(reference.name.as_str(), "Element" | "BackboneElement") => {
                self.create_sub_type(element, &reference.name)
            }
            Ok([reference]) => Type::Reference(reference),
            Err(references) => Type::union(references.into_iter().map(Type::Reference).collect()),
        };

        if let Some(binding) = self.binding_reference(element) {
            match &mut ty {
                Type::Reference(reference) => reference.binding = Some(binding),
                _ => self.error("Expected type reference"),
            }
        }

        Some(ty)
    }

    /// Resolve the element's type codes to references. Never returns an empty list.
    fn type_references(&mut self, element: &'a ElementDefinition) -> Option<Vec<TypeReference>> {
        let types = match &element.types {
            Some(types) if !types.as_slice().is_empty() => types,
            _ => {
                self.error(format!("No types specified for '{}'.", element.name()));
                return None;
            }
        };
        if types.is_scalar() {
            self.error("Expected array of types.");
            return None;
        }

        let mut pending: Vec<(Option<&'a str>, &'a [String])> = types
            .as_slice()
            .iter()
            .map(|t| (t.code.as_deref(), t.profiles()))
            .collect();
        let mut references = Vec::new();
        let mut index = 0;

        while let Some(&(code, profiles)) = pending.get(index) {
            index += 1;

            let Some(code) = code else {
                self.error("Missing type name.");
                return None;
            };

            let name = match code {
                "*" => {
                    pending.extend(OPEN_TYPES.iter().map(|&t| (Some(t), &[][..])));
                    continue;
                }
                "xhtml" => {
                    self.reference_if_known("string");
                    "string"
                }
                other => {
                    if !self.documents.contains_key(other) {
                        self.error(format!("Unknown type '{other}'."));
                        return None;
                    }
                    self.reference(other);
                    other
                }
            };

            let mut reference = TypeReference::new(name);
            match profiles {
                [] => {}
                [profile] => {
                    if let Some(resource) = self.profile_name(profile) {
                        if resource != "any" {
                            if self.documents.contains_key(resource) {
                                self.reference(resource);
                            } else {
                                self.error(format!("Unknown profile '{resource}'."));
                            }
                        }
                        reference.binding = Some(resource.to_owned());
                    }
                }
                _ => {
                    self.error("Multiple typeElement profiles.");
                    return None;
                }
            }
            references.push(reference);
        }

        Some(references)
    }

    /// Synthesize a named interface for an inline backbone element.
    fn create_sub_type(&mut self, element: &ElementDefinition, marker: &str) -> Type {
        let name = format_name(&element.path);
        let mut sub_type = InterfaceType::new(&name, TypeCategory::SubType);
        sub_type.description = element.short.clone();
        sub_type.base_type = Some(marker.to_owned());

        let id = self.alloc(Type::Interface(sub_type));
        self.add_to_results(id);
        Type::reference(name)
    }

    /// Resolve a reference to another element of the same structure.
    fn named_reference(&mut self, root: TypeId, name: &str, reference: &str) -> Option<Type> {
        let mut visited = HashSet::new();
        let found = self.find_property_type(root, name, &mut visited);
        let target = found.and_then(|ty| self.referenced_type(&ty, None));

        let Some(target) = target else {
            self.error(format!("Could not resolve content reference '{reference}'."));
            return None;
        };

        match &self.types[target] {
            Type::Interface(interface) => Some(Type::reference(interface.name.clone())),
            Type::Primitive(primitive) if primitive.name == "string" => {
                Some(Type::reference("string"))
            }
            _ => {
                self.error("Expected content reference to resolve to an interface type.");
                None
            }
        }
    }

    /// Depth-first search for the first property called `name`, descending
    /// into synthesized sub-types.
    fn find_property_type(
        &mut self,
        id: TypeId,
        name: &str,
        visited: &mut HashSet<TypeId>,
    ) -> Option<Type> {
        if !visited.insert(id) {
            return None;
        }

        let properties = self.types[id].properties()?.to_vec();
        for property in properties {
            if property.name == name {
                return Some(property.ty);
            }

            if let Some(sub_type) = self.referenced_type(&property.ty, Some(TypeCategory::SubType))
                && let Some(found) = self.find_property_type(sub_type, name, visited)
            {
                return Some(found);
            }
        }
        None
    }

    /// Name of the enumeration an element is bound to, if the binding is
    /// strong enough to emit.
    fn binding_reference(&mut self, element: &ElementDefinition) -> Option<String> {
        let binding = element.binding.as_ref()?;
        if binding.strength == Some(BindingStrength::Example) {
            return None;
        }
        let url = binding.value_set_url()?;

        let Some(key) = self.value_set_key(url) else {
            self.error(format!("Unknown binding reference '{url}'."));
            return None;
        };

        let doc = self.document(key)?;
        if doc.content.copyright() == Some(EXAMPLE_COPYRIGHT) {
            return None;
        }

        self.state(key)
            .symbol
            .get_or_insert_with(|| format_name(&element.path));

        let id = self.reference(key)?;
        Some(self.type_name(id).to_owned())
    }

    /// Insert the well-known properties the definitions leave implicit.
    fn apply_fixups(&mut self, root: TypeId) {
        let (name, ty, description) = match self.type_name(root) {
            "Resource" => (
                "resourceType",
                Type::reference("code"),
                "The type of the resource.",
            ),
            "Element" => (
                "fhir_comments",
                Type::array(Type::reference("string")),
                "Content that would be comments in an XML.",
            ),
            _ => return,
        };
        if self.interface_mut(root).has_property(name) {
            return;
        }

        if let Some(target) = ty.unwrap_array().as_reference() {
            let target = target.name.clone();
            self.reference_if_known(&target);
        }
        self.interface_mut(root).properties.insert(
            0,
            Property::new(name, ty)
                .optional(true)
                .description(Some(description.to_owned())),
        );
    }
}

/// Primitive structures are marked by kind or by their root element's short text.
fn is_primitive(sd: &StructureDefinition) -> bool {
    sd.kind == Some(StructureKind::PrimitiveType)
        || sd
            .root_element()
            .and_then(|e| e.short.as_deref())
            .is_some_and(|short| short.contains("Primitive"))
}

/// Expand `value[x]` into one optional property per alternative type.
///
/// Consecutive alternatives naming the same type share one property whose
/// type becomes a union.
fn choice_properties(
    name: &str,
    element: &ElementDefinition,
    references: Vec<TypeReference>,
) -> Vec<Property> {
    let mut properties: Vec<Property> = Vec::new();
    let mut last_name: Option<String> = None;

    for reference in references {
        if last_name.as_deref() == Some(reference.name.as_str())
            && let Some(last) = properties.last_mut()
        {
            match &mut last.ty {
                Type::Union { alternatives } => alternatives.push(Type::Reference(reference)),
                other => {
                    let first = std::mem::replace(other, Type::union(Vec::new()));
                    *other = Type::union(vec![first, Type::Reference(reference)]);
                }
            }
            continue;
        }

        last_name = Some(reference.name.clone());
        let property_name = name.replace(CHOICE_SUFFIX, &format_name(&reference.name));
        properties.push(
            Property::new(property_name, Type::Reference(reference))
                .optional(true)
                .description(element.short.clone()),
        );
    }
    properties
}
