//! Rendering of nested type expressions.

use fhirts_codegen::language::TypeMapper;
use fhirts_ir::{Property, Type};

/// Render the type of a property.
///
/// Named types render as their name and bindings are dropped. Unions first
/// collapse runs of alternatives naming the same type.
pub fn render_type(ty: &Type, mapper: &impl TypeMapper) -> String {
    match ty {
        Type::Reference(reference) => reference.name.clone(),
        Type::Array { element } => mapper.map_array(&render_type(element, mapper)),
        Type::Union { alternatives } => {
            let alternatives = trim_union(alternatives);
            match alternatives.as_slice() {
                [] => "never".to_string(),
                [single] => render_type(single, mapper),
                many => {
                    let rendered: Vec<_> = many.iter().map(|t| render_type(t, mapper)).collect();
                    format!("({})", rendered.join("|"))
                }
            }
        }
        Type::Object(object) => render_object(&object.properties, mapper),
        Type::Interface(_) | Type::Enum(_) | Type::Primitive(_) | Type::Alias(_) => {
            ty.name().unwrap_or_default().to_string()
        }
    }
}

/// Drop alternatives that name the same type as the one before them.
pub fn trim_union(alternatives: &[Type]) -> Vec<&Type> {
    let mut trimmed: Vec<&Type> = Vec::with_capacity(alternatives.len());
    for alt in alternatives {
        let repeat = match (trimmed.last().and_then(|t| t.name()), alt.name()) {
            (Some(last), Some(name)) => last == name,
            _ => false,
        };
        if !repeat {
            trimmed.push(alt);
        }
    }
    trimmed
}

fn render_object(properties: &[Property], mapper: &impl TypeMapper) -> String {
    if properties.is_empty() {
        return "{}".to_string();
    }
    let fields: Vec<_> = properties
        .iter()
        .map(|p| {
            let optional = if p.optional { "?" } else { "" };
            format!("{}{}: {};", p.name, optional, render_type(&p.ty, mapper))
        })
        .collect();
    format!("{{ {} }}", fields.join(" "))
}

#[cfg(test)]
mod tests {
    use fhirts_ir::{ObjectType, TypeReference};

    use super::*;
    use crate::TypeScriptTypeMapper;

    fn bound(name: &str, binding: &str) -> Type {
        Type::Reference(TypeReference::new(name).with_binding(binding))
    }

    fn render(ty: &Type) -> String {
        render_type(ty, &TypeScriptTypeMapper)
    }

    #[test]
    fn test_reference_drops_binding() {
        assert_eq!(render(&bound("code", "AdministrativeGender")), "code");
    }

    #[test]
    fn test_array() {
        assert_eq!(render(&Type::array(Type::reference("HumanName"))), "HumanName[]");
    }

    #[test]
    fn test_union_renders_parenthesized() {
        let ty = Type::union(vec![Type::reference("Quantity"), Type::reference("string")]);
        assert_eq!(render(&ty), "(Quantity|string)");
        assert_eq!(render(&Type::array(ty)), "(Quantity|string)[]");
    }

    #[test]
    fn test_union_of_same_type_collapses() {
        let ty = Type::union(vec![bound("Reference", "Patient"), bound("Reference", "Group")]);
        assert_eq!(render(&ty), "Reference");
    }

    #[test]
    fn test_only_consecutive_repeats_collapse() {
        let ty = Type::union(vec![
            Type::reference("A"),
            Type::reference("B"),
            Type::reference("A"),
        ]);
        assert_eq!(render(&ty), "(A|B|A)");
    }

    #[test]
    fn test_inline_object() {
        let ty = Type::Object(ObjectType {
            properties: vec![
                Property::new("system", Type::reference("uri")).optional(true),
                Property::new("value", Type::reference("string")),
            ],
        });
        assert_eq!(render(&ty), "{ system?: uri; value: string; }");
        assert_eq!(render(&Type::Object(ObjectType::default())), "{}");
    }
}
