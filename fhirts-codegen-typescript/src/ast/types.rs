//! TypeScript type alias and union builders.

use fhirts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            exported: false,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    /// Prefix the declaration with `export`.
    pub fn export(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        vec![
            CodeFragment::doc(self.doc.as_deref()),
            CodeFragment::Line(format!("{}type {} = {};", export, self.name, self.ty)),
        ]
    }
}

/// Builder for named TypeScript union types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }

    pub fn variants(mut self, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.variants.extend(variants.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::doc(self.doc.as_deref()),
            CodeFragment::Line(format!(
                "type {} = {};",
                self.name,
                self.variants.join(" | ")
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("instant", "string").build();
        assert_eq!(t, "type instant = string;\n");
    }

    #[test]
    fn test_exported_type_alias_with_doc() {
        let t = TypeAlias::new("Narrative", "string")
            .doc(Some("Human readable text"))
            .export()
            .build();
        assert_eq!(
            t,
            "/**\n * Human readable text\n */\nexport type Narrative = string;\n"
        );
    }

    #[test]
    fn test_union() {
        let u = Union::new("FhirResource")
            .variant("Observation")
            .variant("Patient")
            .build();
        assert_eq!(u, "type FhirResource = Observation | Patient;\n");
    }

    #[test]
    fn test_union_with_doc() {
        let u = Union::new("FhirResource")
            .doc("Any concrete resource")
            .variants(["Patient"])
            .build();
        assert!(u.contains(" * Any concrete resource\n"));
        assert!(u.contains("type FhirResource = Patient;"));
    }
}
