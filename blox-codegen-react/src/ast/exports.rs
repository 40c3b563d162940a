//! Export statements.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

#[derive(Debug, Clone)]
pub struct Export {
    from: Option<String>,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn new() -> Self {
        Self {
            from: None,
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> Option<String> {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.from, &self.default, self.named.is_empty()) {
            (Some(from), None, true) => Some(format!("export * from \"{}\";", from)),
            (Some(from), None, false) => Some(format!(
                "export {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                from
            )),
            (None, Some(def), true) => Some(format!("export default {};", def)),
            (None, None, false) => Some(format!(
                "export {}{{ {} }};",
                type_kw,
                self.named.join(", ")
            )),
            _ => None,
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::tsx();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.statement().map(CodeFragment::Line).into_iter().collect()
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}
