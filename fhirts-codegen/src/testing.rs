//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{path::Path, process::Command};

use eyre::{Result, eyre};
use fhirts_spec::{DocumentMap, SpecificationDocument, parse_document};
use serde_json::{Value, json};

/// Canonical URL prefix of the core structure definitions.
pub const PROFILE: &str = "http://hl7.org/fhir/StructureDefinition/";
/// Canonical URL prefix of the core value sets.
pub const VALUE_SET: &str = "http://hl7.org/fhir/ValueSet/";

/// Parse a JSON fixture as if it had been read from `filename`.
///
/// # Panics
///
/// Panics if the fixture is not a well-formed document with an identifier.
pub fn document(filename: &str, json: Value) -> SpecificationDocument {
    parse_document(Path::new(filename), &json.to_string())
        .expect("fixture should parse")
        .expect("fixture should have an identifier")
}

/// A structure definition fixture with the given differential elements.
pub fn structure(id: &str, kind: &str, base: Option<&str>, elements: Value) -> SpecificationDocument {
    let mut json = json!({
        "resourceType": "StructureDefinition",
        "id": id,
        "url": format!("{PROFILE}{id}"),
        "name": id,
        "kind": kind,
        "differential": { "element": elements },
    });
    if let Some(base) = base {
        json["baseDefinition"] = json!(format!("{PROFILE}{base}"));
    }
    document(&format!("{}.profile.json", id.to_lowercase()), json)
}

/// An abstract resource fixture.
pub fn abstract_resource(id: &str, base: Option<&str>, elements: Value) -> SpecificationDocument {
    let mut json = json!({
        "resourceType": "StructureDefinition",
        "id": id,
        "kind": "resource",
        "abstract": true,
        "differential": { "element": elements },
    });
    if let Some(base) = base {
        json["baseDefinition"] = json!(format!("{PROFILE}{base}"));
    }
    document(&format!("{}.profile.json", id.to_lowercase()), json)
}

/// A primitive type fixture.
pub fn primitive(id: &str) -> SpecificationDocument {
    structure(
        id,
        "primitive-type",
        None,
        json!([{
            "path": id,
            "short": format!("Primitive Type {id}"),
            "definition": format!("A {id} value"),
        }]),
    )
}

/// A value set fixture; `body` is merged into the generated header fields.
pub fn value_set(id: &str, name: &str, body: Value) -> SpecificationDocument {
    let mut json = json!({
        "resourceType": "ValueSet",
        "url": format!("{VALUE_SET}{id}"),
        "name": name,
    });
    if let (Value::Object(target), Value::Object(extra)) = (&mut json, body) {
        target.extend(extra);
    }
    document(&format!("valueset-{id}.json"), json)
}

/// Collect documents into a map keyed by identifier, in the given order.
pub fn documents(documents: impl IntoIterator<Item = SpecificationDocument>) -> DocumentMap {
    documents
        .into_iter()
        .map(|doc| (doc.id.clone(), doc))
        .collect()
}

/// A small but complete specification: the base types, two resources, a
/// backbone element, choice properties and two bound value sets.
pub fn specification() -> DocumentMap {
    documents([
        primitive("string"),
        primitive("code"),
        primitive("boolean"),
        primitive("decimal"),
        primitive("uri"),
        primitive("dateTime"),
        structure(
            "Element",
            "complex-type",
            None,
            json!([
                { "path": "Element", "short": "Base for all elements" },
                { "path": "Element.id", "short": "xml:id (or equivalent in JSON)", "min": 0, "max": "1", "type": [{ "code": "string" }] },
                { "path": "Element.extension", "short": "Additional Content defined by implementations", "min": 0, "max": "*", "type": [{ "code": "Extension" }] },
            ]),
        ),
        structure(
            "Extension",
            "complex-type",
            Some("Element"),
            json!([
                { "path": "Extension", "short": "Optional Extensions Element" },
                { "path": "Extension.url", "short": "identifies the meaning of the extension", "min": 1, "max": "1", "type": [{ "code": "uri" }] },
                { "path": "Extension.value[x]", "short": "Value of extension", "min": 0, "max": "1", "type": [{ "code": "boolean" }, { "code": "string" }] },
            ]),
        ),
        structure(
            "BackboneElement",
            "complex-type",
            Some("Element"),
            json!([{ "path": "BackboneElement", "short": "Base for elements defined inside a resource" }]),
        ),
        structure(
            "Quantity",
            "complex-type",
            Some("Element"),
            json!([
                { "path": "Quantity", "short": "A measured amount" },
                { "path": "Quantity.value", "short": "Numerical value", "min": 0, "max": "1", "type": [{ "code": "decimal" }] },
                { "path": "Quantity.unit", "short": "Unit representation", "min": 0, "max": "1", "type": [{ "code": "string" }] },
            ]),
        ),
        abstract_resource(
            "Resource",
            None,
            json!([
                { "path": "Resource", "short": "Base Resource" },
                { "path": "Resource.id", "short": "Logical id of this artifact", "min": 0, "max": "1", "type": [{ "code": "string" }] },
            ]),
        ),
        abstract_resource(
            "DomainResource",
            Some("Resource"),
            json!([
                { "path": "DomainResource", "short": "A resource with narrative, extensions, and contained resources" },
                { "path": "DomainResource.contained", "short": "Contained, inline Resources", "min": 0, "max": "*", "type": [{ "code": "Resource" }] },
            ]),
        ),
        structure(
            "Patient",
            "resource",
            Some("DomainResource"),
            json!([
                { "path": "Patient", "short": "Information about an individual receiving health care services" },
                { "path": "Patient.active", "short": "Whether this patient's record is in active use", "min": 0, "max": "1", "type": [{ "code": "boolean" }] },
                {
                    "path": "Patient.gender", "short": "male | female | other | unknown", "min": 0, "max": "1",
                    "type": [{ "code": "code" }],
                    "binding": { "strength": "required", "valueSetReference": { "reference": format!("{VALUE_SET}administrative-gender") } },
                },
                { "path": "Patient.deceased[x]", "short": "Indicates if the individual is deceased or not", "min": 0, "max": "1", "type": [{ "code": "boolean" }, { "code": "dateTime" }] },
                { "path": "Patient.contact", "short": "A contact party for the patient", "min": 0, "max": "*", "type": [{ "code": "BackboneElement" }] },
                { "path": "Patient.contact.name", "short": "A name associated with the contact person", "min": 1, "max": "1", "type": [{ "code": "string" }] },
                { "path": "Patient.link", "short": "Related contacts", "min": 0, "max": "*", "contentReference": "#Patient.contact" },
            ]),
        ),
        structure(
            "Observation",
            "resource",
            Some("DomainResource"),
            json!([
                { "path": "Observation", "short": "Measurements and simple assertions" },
                {
                    "path": "Observation.status", "short": "registered | preliminary | final", "min": 1, "max": "1",
                    "type": [{ "code": "code" }],
                    "binding": { "strength": "required", "valueSetReference": { "reference": format!("{VALUE_SET}observation-status") } },
                },
                { "path": "Observation.value[x]", "short": "Actual result", "min": 0, "max": "1", "type": [{ "code": "Quantity" }, { "code": "string" }] },
            ]),
        ),
        value_set(
            "administrative-gender",
            "AdministrativeGender",
            json!({
                "description": "The gender of a person used for administrative purposes.",
                "codeSystem": {
                    "system": "http://hl7.org/fhir/administrative-gender",
                    "caseSensitive": true,
                    "concept": [
                        { "code": "male", "display": "Male" },
                        { "code": "female", "display": "Female" },
                        { "code": "other", "display": "Other" },
                        { "code": "unknown", "display": "Unknown", "definition": "Unknown." },
                    ],
                },
            }),
        ),
        document(
            "codesystem-observation-status.json",
            json!({
                "resourceType": "CodeSystem",
                "url": "http://hl7.org/fhir/observation-status",
                "name": "ObservationStatus",
                "caseSensitive": true,
                "concept": [
                    { "code": "registered", "display": "Registered", "definition": "The existence of the observation is registered." },
                    { "code": "preliminary", "display": "Preliminary" },
                    { "code": "final", "display": "Final" },
                ],
            }),
        ),
        value_set(
            "observation-status",
            "ObservationStatus",
            json!({
                "description": "Codes providing the status of an observation.",
                "compose": { "include": [{ "system": "http://hl7.org/fhir/observation-status" }] },
            }),
        ),
    ])
}

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated declarations type-check.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// TypeScript checker using `tsc --noEmit`.
pub struct TypeScriptChecker;

impl CompileChecker for TypeScriptChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let output = Command::new("npx")
            .args(["tsc", "--noEmit", "--strict"])
            .arg("fhir.d.ts")
            .current_dir(dir)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run tsc: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "tsc --noEmit failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Helper to run a generator and check that its output type-checks.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(entries) = std::fs::read_dir(temp_dir.path()) {
            for entry in entries.flatten() {
                eprintln!("  {}", entry.path().display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
