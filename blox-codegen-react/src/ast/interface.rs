//! Interface declarations.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Quote a property name unless it is a plain identifier.
pub fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_ident {
        name.to_string()
    } else {
        serde_json::Value::from(name).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub doc: Option<String>,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let optional = if self.optional { "?" } else { "" };
        let line = CodeFragment::Line(format!(
            "{}{}: {};",
            property_key(&self.name),
            optional,
            self.ty
        ));
        match &self.doc {
            Some(doc) => vec![CodeFragment::JsDoc(doc.clone()), line],
            None => vec![line],
        }
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    pub fn optional_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty).optional());
        self
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::tsx();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "{}interface {} {{}}",
                export, self.name
            ))];
        }

        vec![CodeFragment::Block {
            header: format!("{}interface {} {{", export, self.name),
            body: self
                .fields
                .iter()
                .flat_map(InterfaceField::to_fragments)
                .collect(),
            close: Some("}".to_string()),
        }]
    }
}
