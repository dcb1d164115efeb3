//! TypeScript type mapper implementation.

use fhirts_codegen::language::TypeMapper;
use fhirts_core::IntrinsicType;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_intrinsic(&self, intrinsic: IntrinsicType) -> &'static str {
        match intrinsic {
            IntrinsicType::String => "string",
            IntrinsicType::Number => "number",
            IntrinsicType::Boolean => "boolean",
            IntrinsicType::NumberOrString => "number | string",
        }
    }

    fn map_array(&self, element: &str) -> String {
        format!("{element}[]")
    }

    fn is_builtin(&self, name: &str) -> bool {
        matches!(name, "string" | "boolean")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_intrinsics() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_intrinsic(IntrinsicType::String), "string");
        assert_eq!(mapper.map_intrinsic(IntrinsicType::Number), "number");
        assert_eq!(mapper.map_intrinsic(IntrinsicType::Boolean), "boolean");
        assert_eq!(
            mapper.map_intrinsic(IntrinsicType::NumberOrString),
            "number | string"
        );
    }

    #[test]
    fn test_builtins_and_arrays() {
        let mapper = TypeScriptTypeMapper;

        assert!(mapper.is_builtin("string"));
        assert!(mapper.is_builtin("boolean"));
        assert!(!mapper.is_builtin("decimal"));
        assert_eq!(mapper.map_array("HumanName"), "HumanName[]");
    }
}
