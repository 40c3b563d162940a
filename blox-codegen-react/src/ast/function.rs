//! Function declarations.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `function` declaration with a fragment body.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    doc: Option<String>,
    export: Exported,
    params: Vec<String>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exported {
    No,
    Named,
    Default,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            export: Exported::Named,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.export = Exported::No;
        self
    }

    /// `export default function ...`
    pub fn default_export(mut self) -> Self {
        self.export = Exported::Default;
        self
    }

    /// A parameter, written as-is (destructuring patterns included).
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    pub fn body_blank(mut self) -> Self {
        self.body.push(CodeFragment::Blank);
        self
    }

    /// Append any renderable node to the body.
    pub fn body_node(mut self, node: &impl Renderable) -> Self {
        self.body.extend(node.to_fragments());
        self
    }

    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let export = match self.export {
            Exported::No => "",
            Exported::Named => "export ",
            Exported::Default => "export default ",
        };
        let ret = self
            .return_type
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();
        format!(
            "{}function {}({}){} {{",
            export,
            self.name,
            self.params.join(", "),
            ret
        )
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::tsx();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }
        fragments.push(CodeFragment::Block {
            header: self.signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        });
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_component() {
        let f = Function::new("MainHeroCover1Bold")
            .default_export()
            .param("{ content }: MainHeroCover1BoldProps")
            .body_line("return null;")
            .build();
        assert_eq!(
            f,
            "export default function MainHeroCover1Bold({ content }: MainHeroCover1BoldProps) {\n  return null;\n}\n"
        );
    }

    #[test]
    fn test_private_with_return_type_and_doc() {
        let f = Function::new("pick")
            .private()
            .doc("First entry.")
            .param("items: CollectionItem[]")
            .returns("CollectionItem | undefined")
            .body_line("return items[0];")
            .build();
        assert!(f.starts_with("/** First entry. */\nfunction pick(items: CollectionItem[]): CollectionItem | undefined {"));
    }
}
