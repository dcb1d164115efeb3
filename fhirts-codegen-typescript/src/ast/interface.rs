//! TypeScript interface builder.

use fhirts_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let optional = if self.optional { "?" } else { "" };
        vec![
            CodeFragment::doc(self.doc.as_deref()),
            CodeFragment::Line(format!("{}{}: {};", self.name, optional, self.ty)),
        ]
    }
}

/// Builder for TypeScript interfaces with single inheritance.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    extends: Option<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            extends: None,
            fields: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn extends(mut self, base: Option<impl Into<String>>) -> Self {
        self.extends = base.map(Into::into);
        self
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional(true));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    fn header(&self) -> String {
        match &self.extends {
            Some(base) => format!("interface {} extends {}", self.name, base),
            None => format!("interface {}", self.name),
        }
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::doc(self.doc.as_deref()),
            CodeFragment::braced(
                self.header(),
                self.fields
                    .iter()
                    .flat_map(InterfaceField::to_fragments)
                    .collect(),
            ),
        ]
    }
}
