//! Intrinsic representations for specification primitive types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The underlying representation a specification primitive maps to.
///
/// This is a language-agnostic representation; emitters decide how each
/// variant is spelled in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicType {
    String,
    Number,
    Boolean,
    /// Arbitrary-precision numbers that may be written as literals or strings.
    NumberOrString,
}

impl IntrinsicType {
    /// The name used for this intrinsic in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntrinsicType::String => "string",
            IntrinsicType::Number => "number",
            IntrinsicType::Boolean => "boolean",
            IntrinsicType::NumberOrString => "number | string",
        }
    }
}

impl fmt::Display for IntrinsicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an intrinsic name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntrinsicError(pub String);

impl fmt::Display for ParseIntrinsicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown intrinsic type '{}' (expected string, number, boolean or \"number | string\")",
            self.0
        )
    }
}

impl std::error::Error for ParseIntrinsicError {}

impl FromStr for IntrinsicType {
    type Err = ParseIntrinsicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        match normalized.as_str() {
            "string" => Ok(IntrinsicType::String),
            "number" => Ok(IntrinsicType::Number),
            "boolean" => Ok(IntrinsicType::Boolean),
            "number|string" | "string|number" => Ok(IntrinsicType::NumberOrString),
            _ => Err(ParseIntrinsicError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for IntrinsicType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for IntrinsicType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intrinsic() {
        assert_eq!("string".parse(), Ok(IntrinsicType::String));
        assert_eq!("number".parse(), Ok(IntrinsicType::Number));
        assert_eq!("boolean".parse(), Ok(IntrinsicType::Boolean));
        assert_eq!("number | string".parse(), Ok(IntrinsicType::NumberOrString));
        assert_eq!("string|number".parse(), Ok(IntrinsicType::NumberOrString));
        assert!("date".parse::<IntrinsicType>().is_err());
    }
}
