//! fhir.d.ts declaration file generator.

use std::path::{Path, PathBuf};

use fhirts_codegen::language::TypeMapper;
use fhirts_core::GeneratedFile;
use fhirts_ir::{InterfaceType, Property, Type, TypeGraph};
use fhirts_spec::EmitConfig;

use crate::{
    TypeScriptTypeMapper,
    ast::{Interface, InterfaceField, Module, TypeAlias, Union},
    code_file::CodeFile,
    type_expr::render_type,
};

pub const FHIR_DTS: &str = "fhir.d.ts";

/// Root of the resource hierarchy; concrete descendants form the resource union.
const RESOURCE: &str = "Resource";
/// Type of the sibling property carrying a primitive's id and extensions.
const ELEMENT: &str = "Element";

/// Interfaces and primitive aliases of the whole graph, wrapped in an
/// ambient module.
pub struct FhirDts {
    file: CodeFile,
    errors: Vec<String>,
}

impl FhirDts {
    pub fn new(graph: &TypeGraph, emit: &EmitConfig) -> Self {
        let mapper = TypeScriptTypeMapper;
        let mut module = Module::new(&emit.namespace);
        let mut errors = Vec::new();

        for ty in graph {
            if !ty.is_root() {
                errors.push(format!("Expected root type instead of '{}'.", ty.kind()));
                continue;
            }
            if ty.name().is_none_or(str::is_empty) {
                errors.push("Type missing name.".to_string());
                continue;
            }

            match ty {
                Type::Interface(interface) => {
                    module.add(interface_declaration(interface, graph, &mapper));
                }
                Type::Primitive(primitive) => {
                    if !mapper.is_builtin(&primitive.name) {
                        module.add(
                            TypeAlias::new(&primitive.name, mapper.map_intrinsic(primitive.intrinsic))
                                .doc(primitive.description.as_deref()),
                        );
                    }
                }
                Type::Alias(alias) => {
                    module.add(TypeAlias::new(&alias.name, render_type(&alias.target, &mapper)));
                }
                // enumerations go to valueSets.ts
                _ => {}
            }
        }

        let resources = resource_union(graph, &emit.resource_union);
        if !resources.is_empty() {
            module.add(resources);
        }

        let file = CodeFile::new().headers(emit.header.iter().cloned()).add(module);
        Self { file, errors }
    }

    /// Problems found while converting the graph.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl GeneratedFile for FhirDts {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(FHIR_DTS)
    }

    fn render(&self) -> String {
        self.file.render()
    }
}

fn interface_declaration(
    interface: &InterfaceType,
    graph: &TypeGraph,
    mapper: &TypeScriptTypeMapper,
) -> Interface {
    let element = graph.contains(ELEMENT);
    let mut declaration = Interface::new(&interface.name)
        .doc(interface.description.as_deref())
        .extends(interface.base_type.as_deref());

    for property in &interface.properties {
        declaration = declaration.field_with(
            InterfaceField::new(&property.name, render_type(&property.ty, mapper))
                .doc(property.description.as_deref())
                .optional(property.optional),
        );
        if element && is_primitive_valued(property, graph) {
            declaration = declaration.field_with(extension_field(property, mapper));
        }
    }
    declaration
}

/// True if the property holds (a list of) a primitive.
fn is_primitive_valued(property: &Property, graph: &TypeGraph) -> bool {
    property
        .ty
        .unwrap_array()
        .as_reference()
        .and_then(|reference| graph.get(&reference.name))
        .is_some_and(|target| target.as_primitive().is_some())
}

/// `_name?: Element` (or `Element[]`) following a primitive property.
fn extension_field(property: &Property, mapper: &TypeScriptTypeMapper) -> InterfaceField {
    let ty = match property.ty {
        Type::Array { .. } => mapper.map_array(ELEMENT),
        _ => ELEMENT.to_string(),
    };
    InterfaceField::new(format!("_{}", property.name), ty)
        .doc(Some(format!(
            "Contains extended information for property '{}'.",
            property.name
        )))
        .optional(true)
}

/// Every concrete interface deriving from `Resource`, in graph order.
fn resource_union(graph: &TypeGraph, name: &str) -> Union {
    let resources = graph
        .interfaces()
        .filter(|i| !i.is_abstract && i.name != RESOURCE && graph.derives_from(&i.name, RESOURCE))
        .map(|i| i.name.clone());
    Union::new(name).doc("Any concrete resource").variants(resources)
}
