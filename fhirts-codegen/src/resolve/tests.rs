use std::path::Path;

use fhirts_ir::{IntrinsicType, Type, TypeCategory};
use fhirts_spec::{DocumentMap, parse_document};
use serde_json::{Value, json};

use super::*;

const PROFILE: &str = "http://hl7.org/fhir/StructureDefinition/";
const VALUE_SET: &str = "http://hl7.org/fhir/ValueSet/";

fn documents(files: Vec<(String, Value)>) -> DocumentMap {
    let mut map = DocumentMap::default();
    for (filename, json) in files {
        let doc = parse_document(Path::new(&filename), &json.to_string())
            .expect("fixture should parse")
            .expect("fixture should have an identifier");
        map.insert(doc.id.clone(), doc);
    }
    map
}

fn structure(id: &str, kind: &str, base: Option<&str>, elements: Value) -> (String, Value) {
    let mut json = json!({
        "resourceType": "StructureDefinition",
        "id": id,
        "kind": kind,
        "differential": { "element": elements },
    });
    if let Some(base) = base {
        json["baseDefinition"] = json!(format!("{PROFILE}{base}"));
    }
    (format!("{}.profile.json", id.to_lowercase()), json)
}

fn primitive(id: &str) -> (String, Value) {
    structure(
        id,
        "primitive-type",
        None,
        json!([{ "path": id, "short": format!("Primitive Type {id}") }]),
    )
}

fn value_set(name: &str, body: Value) -> (String, Value) {
    let mut json = json!({
        "resourceType": "ValueSet",
        "url": format!("{VALUE_SET}{name}"),
        "name": name,
    });
    if let (Value::Object(target), Value::Object(extra)) = (&mut json, body) {
        target.extend(extra);
    }
    (format!("valueset-{name}.json"), json)
}

/// Element, Resource and the primitives everything else leans on.
fn base_world() -> Vec<(String, Value)> {
    vec![
        primitive("string"),
        primitive("code"),
        primitive("uri"),
        structure(
            "Element",
            "complex-type",
            None,
            json!([
                { "path": "Element", "short": "Base for all elements" },
                { "path": "Element.id", "min": 0, "max": "1", "type": [{ "code": "id" }] },
            ]),
        ),
        structure(
            "BackboneElement",
            "complex-type",
            Some("Element"),
            json!([{ "path": "BackboneElement" }]),
        ),
        structure(
            "Resource",
            "resource",
            None,
            json!([
                { "path": "Resource", "short": "Base Resource" },
                { "path": "Resource.id", "min": 0, "max": "1", "type": [{ "code": "string" }] },
            ]),
        ),
        structure(
            "DomainResource",
            "resource",
            Some("Resource"),
            json!([{ "path": "DomainResource" }]),
        ),
    ]
}

fn patient_world() -> DocumentMap {
    let mut files = base_world();
    files.push(structure(
        "Patient",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Patient", "short": "Information about an individual" },
            { "path": "Patient.identifier", "min": 1, "max": "1", "type": [{ "code": "string" }] },
            {
                "path": "Patient.gender", "min": 0, "max": "1",
                "type": [{ "code": "code" }],
                "binding": {
                    "strength": "required",
                    "valueSetReference": { "reference": format!("{VALUE_SET}administrative-gender") },
                },
            },
            { "path": "Patient.contact", "min": 0, "max": "*", "type": [{ "code": "BackboneElement" }] },
            { "path": "Patient.contact.name", "min": 0, "max": "1", "type": [{ "code": "string" }] },
            { "path": "Patient.link", "min": 0, "max": "*", "contentReference": "#Patient.contact" },
            { "path": "Patient.deceased[x]", "min": 0, "max": "1", "type": [{ "code": "string" }, { "code": "code" }] },
            { "path": "Patient.text", "min": 0, "max": "0" },
        ]),
    ));
    files.push(value_set(
        "administrative-gender",
        json!({
            "name": "AdministrativeGender",
            "description": "The gender of a person.",
            "codeSystem": {
                "system": "http://hl7.org/fhir/administrative-gender",
                "caseSensitive": true,
                "concept": [
                    { "code": "male", "display": "Male" },
                    { "code": "female", "display": "Female" },
                ],
            },
        }),
    ));
    documents(files)
}

fn names(graph: &TypeGraph) -> Vec<&str> {
    graph.iter().filter_map(Type::name).collect()
}

fn errors(resolution: &Resolution) -> Vec<&str> {
    resolution
        .diagnostics
        .iter()
        .filter(|d| d.severity.is_error())
        .map(|d| d.message.as_str())
        .collect()
}

#[test]
fn test_resolves_patient_in_dependency_order() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());

    assert!(errors(&resolution).is_empty(), "{:?}", errors(&resolution));
    assert_eq!(
        names(&resolution.graph),
        [
            "string",
            "code",
            "Resource",
            "DomainResource",
            "AdministrativeGender",
            "Element",
            "BackboneElement",
            "PatientContact",
            "Patient",
        ]
    );
}

#[test]
fn test_interface_shape() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let patient = resolution.graph.interface("Patient").unwrap();

    assert_eq!(patient.base_type.as_deref(), Some("DomainResource"));
    assert_eq!(patient.category, TypeCategory::Resource);
    assert_eq!(
        patient.description.as_deref(),
        Some("Information about an individual")
    );

    let property_names: Vec<_> = patient.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        property_names,
        [
            "identifier",
            "gender",
            "contact",
            "link",
            "deceasedString",
            "deceasedCode"
        ]
    );
}

#[test]
fn test_optionality_follows_min_cardinality() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let patient = resolution.graph.interface("Patient").unwrap();

    assert!(!patient.property("identifier").unwrap().optional);
    assert!(patient.property("gender").unwrap().optional);
    assert!(patient.property("deceasedString").unwrap().optional);

    let mut files = base_world();
    files.push(structure(
        "Thing",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Thing" },
            { "path": "Thing.label", "max": "1", "type": [{ "code": "string" }] },
        ]),
    ));
    let resolution = resolve(&documents(files), &ResolveOptions::default());
    let thing = resolution.graph.interface("Thing").unwrap();
    assert!(!thing.property("label").unwrap().optional);
}

#[test]
fn test_binding_names_value_set() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let patient = resolution.graph.interface("Patient").unwrap();

    let gender = patient.property("gender").unwrap().ty.as_reference().unwrap();
    assert_eq!(gender.name, "code");
    assert_eq!(gender.binding.as_deref(), Some("AdministrativeGender"));

    let Some(Type::Enum(enumeration)) = resolution.graph.get("AdministrativeGender") else {
        panic!("expected enumeration");
    };
    let members: Vec<_> = enumeration
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.value.as_str()))
        .collect();
    assert_eq!(members, [("Male", "male"), ("Female", "female")]);
    assert!(enumeration.members[0].case_sensitive);
}

#[test]
fn test_backbone_element_becomes_sub_type() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let graph = &resolution.graph;

    let contact = graph.interface("PatientContact").unwrap();
    assert_eq!(contact.category, TypeCategory::SubType);
    assert_eq!(contact.base_type.as_deref(), Some("BackboneElement"));
    assert!(contact.has_property("name"));

    let patient = graph.interface("Patient").unwrap();
    let ty = &patient.property("contact").unwrap().ty;
    assert!(matches!(ty, Type::Array { .. }));
    assert_eq!(ty.unwrap_array().name(), Some("PatientContact"));
}

#[test]
fn test_content_reference_resolves_to_sub_type() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let patient = resolution.graph.interface("Patient").unwrap();

    let ty = &patient.property("link").unwrap().ty;
    assert!(matches!(ty, Type::Array { .. }));
    assert_eq!(ty.unwrap_array().name(), Some("PatientContact"));
}

#[test]
fn test_prohibited_property_omitted() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let patient = resolution.graph.interface("Patient").unwrap();
    assert!(!patient.has_property("text"));
}

#[test]
fn test_single_choice_is_not_union() {
    let mut files = base_world();
    files.push(structure(
        "Observation",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Observation" },
            { "path": "Observation.value[x]", "min": 0, "max": "1", "type": [{ "code": "string" }] },
        ]),
    ));
    let docs = documents(files);
    let resolution = resolve(&docs, &ResolveOptions::default());

    let observation = resolution.graph.interface("Observation").unwrap();
    let value = observation.property("valueString").unwrap();
    assert_eq!(value.ty, Type::reference("string"));
    assert!(value.optional);
}

#[test]
fn test_choice_with_repeated_type_merges_into_union() {
    let mut files = base_world();
    files.push(structure(
        "Observation",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Observation" },
            {
                "path": "Observation.subject[x]", "min": 0, "max": "1",
                "type": [
                    { "code": "Resource", "profile": format!("{PROFILE}Patient") },
                    { "code": "Resource", "profile": format!("{PROFILE}any") },
                ],
            },
        ]),
    ));
    let mut docs = documents(files);
    docs.extend(patient_world());
    let resolution = resolve(&docs, &ResolveOptions::default());

    let observation = resolution.graph.interface("Observation").unwrap();
    let subject = observation.property("subjectResource").unwrap();
    let Type::Union { alternatives } = &subject.ty else {
        panic!("expected union, got {:?}", subject.ty);
    };
    let bindings: Vec<_> = alternatives
        .iter()
        .filter_map(Type::as_reference)
        .map(|r| r.binding.as_deref())
        .collect();
    assert_eq!(bindings, [Some("Patient"), Some("any")]);
}

#[test]
fn test_primitive_types() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());

    let primitive = resolution.graph.get("code").unwrap().as_primitive().unwrap();
    assert_eq!(primitive.intrinsic, IntrinsicType::String);
}

#[test]
fn test_unknown_primitive_is_an_error() {
    let mut files = base_world();
    files.push(primitive("xml"));
    files.push(structure(
        "Binary",
        "resource",
        Some("Resource"),
        json!([
            { "path": "Binary" },
            { "path": "Binary.content", "min": 0, "max": "1", "type": [{ "code": "xml" }] },
        ]),
    ));
    let docs = documents(files);
    let resolution = resolve(&docs, &ResolveOptions::default());

    assert!(errors(&resolution).contains(&"Unknown primitive type 'xml'."));
    assert!(!resolution.graph.contains("xml"));
}

#[test]
fn test_fixups_added_once() {
    let docs = patient_world();
    let resolution = resolve(&docs, &ResolveOptions::default());
    let graph = &resolution.graph;

    let resource = graph.interface("Resource").unwrap();
    assert_eq!(resource.properties[0].name, "resourceType");
    assert!(resource.properties[0].optional);

    let element = graph.interface("Element").unwrap();
    assert_eq!(element.properties[0].name, "fhir_comments");
    assert_eq!(
        element.properties[0].ty,
        Type::array(Type::reference("string"))
    );
    assert_eq!(element.property("id").unwrap().ty, Type::reference("string"));
    assert_eq!(
        element
            .properties
            .iter()
            .filter(|p| p.name == "fhir_comments")
            .count(),
        1
    );
}

#[test]
fn test_missing_base_falls_back_by_category() {
    let mut files: Vec<_> = base_world()
        .into_iter()
        .filter(|(name, _)| name != "domainresource.profile.json")
        .collect();
    files.push(structure(
        "DomainResource",
        "resource",
        None,
        json!([{ "path": "DomainResource" }]),
    ));
    files.push(structure("Basic", "resource", None, json!([{ "path": "Basic" }])));
    files.push(structure("Quantity", "complex-type", None, json!([{ "path": "Quantity" }])));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference("Basic");
    resolver.reference("Quantity");
    let resolution = resolver.finish();
    assert!(errors(&resolution).is_empty(), "{:?}", errors(&resolution));

    let base = |name| resolution.graph.interface(name).unwrap().base_type.as_deref();
    assert_eq!(base("Basic"), Some("DomainResource"));
    assert_eq!(base("DomainResource"), Some("Resource"));
    assert_eq!(base("Resource"), None);
    assert_eq!(base("Quantity"), Some("Element"));
}

#[test]
fn test_base_resolved_before_derived_and_only_once() {
    let mut files = base_world();
    files.push(structure(
        "Money",
        "complex-type",
        Some("Quantity"),
        json!([{ "path": "Money" }]),
    ));
    files.push(structure(
        "Quantity",
        "complex-type",
        None,
        json!([
            { "path": "Quantity" },
            { "path": "Quantity.unit", "min": 0, "max": "1", "type": [{ "code": "string" }] },
        ]),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference("Money");
    resolver.reference("Quantity");

    let quantities = resolver
        .types
        .iter()
        .filter(|t| t.name() == Some("Quantity"))
        .count();
    assert_eq!(quantities, 1);

    let resolution = resolver.finish();
    assert!(errors(&resolution).is_empty(), "{:?}", errors(&resolution));
    let names = names(&resolution.graph);
    let quantity = names.iter().position(|n| *n == "Quantity").unwrap();
    let money = names.iter().position(|n| *n == "Money").unwrap();
    assert!(quantity < money);
}

#[test]
fn test_reference_cycle_uses_partial_type() {
    let mut files = base_world();
    files.retain(|(_, json)| json["id"] != "Element");
    files.push(structure(
        "Element",
        "complex-type",
        None,
        json!([
            { "path": "Element" },
            { "path": "Element.extension", "min": 0, "max": "*", "type": [{ "code": "Extension" }] },
        ]),
    ));
    files.push(structure(
        "Extension",
        "complex-type",
        Some("Element"),
        json!([
            { "path": "Extension" },
            { "path": "Extension.url", "min": 1, "max": "1", "type": [{ "code": "uri" }] },
        ]),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference("Element");
    let resolution = resolver.finish();

    assert!(errors(&resolution).is_empty(), "{:?}", errors(&resolution));
    let graph = &resolution.graph;
    assert_eq!(
        graph.interface("Extension").unwrap().base_type.as_deref(),
        Some("Element")
    );
    assert_eq!(
        graph.interface("Extension").unwrap().property("url").unwrap().ty,
        Type::reference("uri")
    );
    assert_eq!(
        graph
            .interface("Element")
            .unwrap()
            .property("extension")
            .unwrap()
            .ty,
        Type::array(Type::reference("Extension"))
    );
}

#[test]
fn test_constrained_resource_skipped_with_warning() {
    let mut files = base_world();
    let (filename, mut json) = structure(
        "bmi",
        "resource",
        Some("DomainResource"),
        json!([{ "path": "Observation" }]),
    );
    json["derivation"] = json!("constraint");
    files.push((filename, json));
    let docs = documents(files);
    let resolution = resolve(&docs, &ResolveOptions::default());

    assert!(errors(&resolution).is_empty());
    assert!(!resolution.graph.contains("bmi"));
    assert!(resolution.diagnostics.iter().any(|d| {
        d.severity.is_warning() && d.message == "Skipping constrained type resource definition."
    }));
}

#[test]
fn test_unknown_kind_is_an_error() {
    let mut files = base_world();
    files.push(structure(
        "Narrative",
        "logical",
        None,
        json!([{ "path": "Narrative" }]),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference("Narrative");
    let resolution = resolver.finish();

    assert_eq!(errors(&resolution), ["Unknown content kind 'logical'."]);
    assert_eq!(
        resolution.diagnostics[0].location.as_deref(),
        Some("narrative.profile.json")
    );
}

#[test]
fn test_unknown_base_aborts_document() {
    let mut files = base_world();
    files.push(structure(
        "Money",
        "complex-type",
        Some("Quantity"),
        json!([{ "path": "Money" }]),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference("Money");
    let resolution = resolver.finish();

    assert_eq!(errors(&resolution), ["Unknown base type 'Quantity'."]);
}

#[test]
fn test_imported_value_sets_resolve_member_collisions() {
    let concept_set = |name: &str, display: &str| {
        value_set(
            name,
            json!({
                "codeSystem": {
                    "system": format!("http://example.org/{name}"),
                    "concept": [{ "code": "low", "display": display }],
                },
            }),
        )
    };
    let files = vec![
        concept_set("a", "Low"),
        concept_set("b", "LOW"),
        value_set(
            "c",
            json!({
                "compose": { "import": [format!("{VALUE_SET}a"), format!("{VALUE_SET}b")] },
            }),
        ),
    ];
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}c"));
    let resolution = resolver.finish();

    let Some(Type::Enum(enumeration)) = resolution.graph.get("C") else {
        panic!("expected enumeration C");
    };
    let names: Vec<_> = enumeration.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Low", "Low_1"]);
    // imports are resolved but not selected for output on their own
    assert!(!resolution.graph.contains("A"));
}

#[test]
fn test_symbolic_code_names() {
    let docs = documents(vec![value_set(
        "quantity-comparator",
        json!({
            "codeSystem": {
                "system": "http://hl7.org/fhir/quantity-comparator",
                "concept": [
                    { "code": "<", "display": "Less than" },
                    { "code": "<=", "display": "Less or Equal to" },
                    { "code": ">=", "display": "Greater or Equal to" },
                ],
            },
        }),
    )]);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}quantity-comparator"));
    let resolution = resolver.finish();

    let Some(Type::Enum(enumeration)) = resolution.graph.get("QuantityComparator") else {
        panic!("expected enumeration");
    };
    let names: Vec<_> = enumeration.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["LessThan", "LessThanOrEqual", "GreaterThanOrEqual"]);
}

fn code_system_world() -> Vec<(String, Value)> {
    vec![(
        "codesystem-kingdom.json".to_owned(),
        json!({
            "resourceType": "CodeSystem",
            "url": "http://example.org/kingdom",
            "name": "Kingdom",
            "caseSensitive": true,
            "concept": [
                {
                    "code": "animal",
                    "display": "Animal",
                    "concept": [
                        { "code": "dog", "display": "Dog" },
                        { "code": "cat", "display": "Cat" },
                    ],
                },
                { "code": "plant", "display": "Plant", "definition": "Anything green." },
            ],
        }),
    )]
}

#[test]
fn test_include_filter_walks_parents() {
    let mut files = code_system_world();
    files.push(value_set(
        "animals",
        json!({
            "compose": {
                "include": [{
                    "system": "http://example.org/kingdom",
                    "filter": [{ "property": "concept", "op": "is-a", "value": "animal" }],
                }],
            },
        }),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}animals"));
    let resolution = resolver.finish();
    assert!(errors(&resolution).is_empty(), "{:?}", errors(&resolution));

    let Some(Type::Enum(enumeration)) = resolution.graph.get("Animals") else {
        panic!("expected enumeration");
    };
    let values: Vec<_> = enumeration.members.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, ["animal", "dog", "cat"]);
    assert!(enumeration.is_a(1, "animal"));
    assert!(enumeration.is_a(2, "animal"));
}

#[test]
fn test_include_without_concepts_or_filters_takes_whole_system() {
    let mut files = code_system_world();
    files.push(value_set(
        "kingdoms",
        json!({
            "compose": { "include": [{ "system": "http://example.org/kingdom" }] },
        }),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}kingdoms"));
    let resolution = resolver.finish();

    let Some(Type::Enum(enumeration)) = resolution.graph.get("Kingdoms") else {
        panic!("expected enumeration");
    };
    let values: Vec<_> = enumeration.members.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, ["animal", "dog", "cat", "plant"]);
    assert!(!enumeration.is_a(3, "animal"));
}

#[test]
fn test_unnamed_concept_keeps_children() {
    let docs = documents(vec![value_set(
        "marks",
        json!({
            "codeSystem": {
                "system": "http://example.org/marks",
                "concept": [
                    { "code": "root", "display": "Root", "concept": [
                        { "code": "-", "concept": [{ "code": "alpha", "display": "Alpha" }] },
                    ] },
                ],
            },
        }),
    )]);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}marks"));
    let resolution = resolver.finish();

    assert_eq!(
        errors(&resolution),
        ["Unable to determine name for value set concept."]
    );
    let Some(Type::Enum(enumeration)) = resolution.graph.get("Marks") else {
        panic!("expected enumeration");
    };
    let values: Vec<_> = enumeration.members.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, ["root", "alpha"]);
    assert_eq!(enumeration.members[1].parent, Some(0));
}

#[test]
fn test_include_substitutes_listed_concepts() {
    let mut files = code_system_world();
    files.push(value_set(
        "plants",
        json!({
            "compose": {
                "include": [{
                    "system": "http://example.org/kingdom",
                    "concept": [{ "code": "plant" }],
                }],
            },
        }),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}plants"));
    let resolution = resolver.finish();

    let Some(Type::Enum(enumeration)) = resolution.graph.get("Plants") else {
        panic!("expected enumeration");
    };
    assert_eq!(enumeration.members.len(), 1);
    assert_eq!(enumeration.members[0].name, "Plant");
    assert_eq!(
        enumeration.members[0].description.as_deref(),
        Some("Anything green.")
    );
    assert_eq!(
        enumeration.members[0].system.as_deref(),
        Some("http://example.org/kingdom")
    );
}

#[test]
fn test_unsupported_filter_is_an_error() {
    let mut files = code_system_world();
    files.push(value_set(
        "odd",
        json!({
            "compose": {
                "include": [{
                    "system": "http://example.org/kingdom",
                    "filter": [{ "property": "concept", "op": "regex", "value": "a.*" }],
                }],
            },
        }),
    ));
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}odd"));
    let resolution = resolver.finish();

    assert_eq!(
        errors(&resolution),
        ["Do not know how to process filter operation 'regex'."]
    );
}

#[test]
fn test_unknown_import_is_an_error() {
    let docs = documents(vec![value_set(
        "broken",
        json!({ "compose": { "import": ["http://example.org/missing"] } }),
    )]);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}broken"));
    let resolution = resolver.finish();

    assert_eq!(
        errors(&resolution),
        [
            "Unable to process import statement for 'http://example.org/missing' because value set with id 'http://example.org/missing' could not be found."
        ]
    );
}

#[test]
fn test_example_value_set_binding_dropped() {
    let mut files = base_world();
    files.push(structure(
        "Basic",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Basic" },
            {
                "path": "Basic.code", "min": 1, "max": "1",
                "type": [{ "code": "code" }],
                "binding": { "strength": "required", "valueSetUri": format!("{VALUE_SET}basic-resource-type") },
            },
        ]),
    ));
    files.push(value_set(
        "basic-resource-type",
        json!({ "copyright": "This is an example set" }),
    ));
    let docs = documents(files);
    let resolution = resolve(&docs, &ResolveOptions::default());

    let basic = resolution.graph.interface("Basic").unwrap();
    let code = basic.property("code").unwrap().ty.as_reference().unwrap();
    assert_eq!(code.binding, None);
    assert!(!resolution.graph.contains("BasicResourceType"));
}

#[test]
fn test_unnamed_value_set_uses_binding_symbol() {
    let mut files = base_world();
    files.push(structure(
        "Account",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Account" },
            {
                "path": "Account.status", "min": 0, "max": "1",
                "type": [{ "code": "code" }],
                "binding": { "strength": "required", "valueSetReference": { "reference": "http://hl7.org/fhir/ValueSet/account-status" } },
            },
        ]),
    ));
    // only reachable through the `vs` spelling of its URL
    files.push((
        "valueset-account-status.json".to_owned(),
        json!({
            "resourceType": "ValueSet",
            "url": "http://hl7.org/fhir/ValueSet/vs/account-status",
            "name": "Account Status Codes",
            "codeSystem": { "concept": [{ "code": "active" }] },
        }),
    ));
    let docs = documents(files);
    let resolution = resolve(&docs, &ResolveOptions::default());

    assert!(errors(&resolution).is_empty(), "{:?}", errors(&resolution));
    let account = resolution.graph.interface("Account").unwrap();
    let status = account.property("status").unwrap().ty.as_reference().unwrap();
    assert_eq!(status.binding.as_deref(), Some("AccountStatus"));
    assert!(resolution.graph.contains("AccountStatus"));
}

#[test]
fn test_duplicate_root_name_is_an_error() {
    let files = vec![
        value_set("status", json!({ "name": "Status" })),
        value_set("status-codes", json!({ "name": "status" })),
    ];
    let docs = documents(files);
    let options = ResolveOptions::default();

    let mut resolver = Resolver::new(&docs, &options);
    resolver.reference(&format!("{VALUE_SET}status"));
    resolver.reference(&format!("{VALUE_SET}status-codes"));
    let resolution = resolver.finish();

    assert_eq!(errors(&resolution), ["Duplicate type name 'Status'."]);
    assert_eq!(names(&resolution.graph), ["Status"]);
}

#[test]
fn test_unknown_type_code_reports_property() {
    let mut files = base_world();
    files.push(structure(
        "Device",
        "resource",
        Some("DomainResource"),
        json!([
            { "path": "Device" },
            { "path": "Device.udi", "min": 0, "max": "1", "type": [{ "code": "Udi" }] },
        ]),
    ));
    let docs = documents(files);
    let resolution = resolve(&docs, &ResolveOptions::default());

    assert_eq!(
        errors(&resolution),
        [
            "Unknown type 'Udi'.",
            "Error getting type for property 'udi'."
        ]
    );
    assert_eq!(
        resolution.diagnostics[0].location.as_deref(),
        Some("device.profile.json")
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let docs = patient_world();
    let options = ResolveOptions::default();

    let first = resolve(&docs, &options);
    let second = resolve(&docs, &options);

    assert_eq!(first.graph, second.graph);
    assert_eq!(
        serde_json::to_string(&first.diagnostics).unwrap(),
        serde_json::to_string(&second.diagnostics).unwrap()
    );
}
