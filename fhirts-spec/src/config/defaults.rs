use fhirts_core::IntrinsicType;

pub const DEFAULT_SPEC_DIR: &str = "fhir-spec";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_NAMESPACE: &str = "fhir";
pub const DEFAULT_RESOURCE_UNION: &str = "FhirResource";

pub const DEFAULT_HEADER: &[&str] = &[
    "Type definitions for FHIR",
    "Project: http://www.hl7.org/fhir/",
];

/// Primitive structure names and the TypeScript type they are declared as.
pub const DEFAULT_PRIMITIVES: &[(&str, IntrinsicType)] = &[
    ("instant", IntrinsicType::String),
    ("time", IntrinsicType::String),
    ("date", IntrinsicType::String),
    ("dateTime", IntrinsicType::String),
    ("base64Binary", IntrinsicType::String),
    ("string", IntrinsicType::String),
    ("uri", IntrinsicType::String),
    ("code", IntrinsicType::String),
    ("id", IntrinsicType::String),
    ("oid", IntrinsicType::String),
    ("markdown", IntrinsicType::String),
    ("canonical", IntrinsicType::String),
    ("url", IntrinsicType::String),
    ("uuid", IntrinsicType::String),
    ("integer", IntrinsicType::Number),
    ("unsignedInt", IntrinsicType::Number),
    ("positiveInt", IntrinsicType::Number),
    ("boolean", IntrinsicType::Boolean),
    ("decimal", IntrinsicType::NumberOrString),
];

/// Member names for codes that are pure punctuation.
pub const DEFAULT_SYMBOLS: &[(&str, &str)] = &[
    ("=", "Equals"),
    ("<", "LessThan"),
    ("<=", "LessThanOrEqual"),
    (">", "GreaterThan"),
    (">=", "GreaterThanOrEqual"),
];
