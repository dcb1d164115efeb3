//! Indentation of generated declarations.

/// The text written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, the layout of `fhir.d.ts` and `valueSets.ts`.
    pub const TYPESCRIPT: Self = Self::Spaces(4);

    pub fn unit(self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(width)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::TYPESCRIPT.unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }
}
