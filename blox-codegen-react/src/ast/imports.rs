//! Import statements.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import every name in `names`.
    pub fn named_all<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// `import type { ... }`
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from \"{}\";",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }

    pub fn build(&self) -> String {
        CodeBuilder::tsx().line(&self.statement()).build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("./main-hero-cover1-bold").default("MainHeroCover1Bold").build();
        assert_eq!(i, "import MainHeroCover1Bold from \"./main-hero-cover1-bold\";\n");
    }

    #[test]
    fn test_named_icons() {
        let i = Import::new("lucide-react")
            .named_all(["ArrowRight", "Menu"])
            .build();
        assert_eq!(i, "import { ArrowRight, Menu } from \"lucide-react\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("react").named("ComponentType").type_only().build();
        assert_eq!(i, "import type { ComponentType } from \"react\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("./globals.css").build(), "import \"./globals.css\";\n");
    }
}
