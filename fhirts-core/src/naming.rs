//! Symbol naming for generated declarations.
//!
//! Every name that ends up in emitted code (type names, enum names, enum
//! member names) goes through [`format_name`], so the rules here decide what
//! a valid symbol looks like across the whole generator.

use heck::ToUpperCamelCase;

/// Convert an arbitrary string into a PascalCase symbol.
///
/// Words are split on non-alphanumeric characters and on case changes, each
/// word is capitalized and the words are concatenated. A result that starts
/// with a digit is prefixed with `_`.
///
/// ```
/// use fhirts_core::format_name;
///
/// assert_eq!(format_name("administrative-gender"), "AdministrativeGender");
/// assert_eq!(format_name("Observation.referenceRange"), "ObservationReferenceRange");
/// assert_eq!(format_name("1st reading"), "_1stReading");
/// ```
pub fn format_name(raw: &str) -> String {
    let name = raw.to_upper_camel_case();
    if starts_with_number(&name) {
        format!("_{}", name)
    } else {
        name
    }
}

/// True if the first character of `text` is an ASCII digit.
pub fn starts_with_number(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Append a numeric collision suffix (`Low` + 1 -> `Low_1`).
pub fn with_suffix(name: &str, n: usize) -> String {
    format!("{}_{}", name, n)
}
