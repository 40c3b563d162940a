//! `const` declarations.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `const` binding. Multi-line values keep their own line structure.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
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

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let annotation = self
            .ty
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();
        let head = format!("{}const {}{} = ", export, self.name, annotation);

        let lines: Vec<&str> = self.value.lines().collect();
        match lines.as_slice() {
            [] => vec![CodeFragment::Line(format!("{}undefined;", head))],
            [single] => vec![CodeFragment::Line(format!("{}{};", head, single))],
            [first, middle @ .., last] => {
                let mut fragments = vec![CodeFragment::Line(format!("{}{}", head, first))];
                fragments.extend(middle.iter().map(|l| CodeFragment::Line(l.to_string())));
                fragments.push(CodeFragment::Line(format!("{};", last)));
                fragments
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_const() {
        assert_eq!(Const::new("limit", "3").build(), "export const limit = 3;\n");
    }

    #[test]
    fn test_private_typed_const() {
        let c = Const::new("defaults", "{}").ty("HeroData").private().build();
        assert_eq!(c, "const defaults: HeroData = {};\n");
    }

    #[test]
    fn test_multiline_value_ends_with_semicolon() {
        let c = Const::new("defaults", "{\n  \"heading\": \"Welcome\"\n}")
            .private()
            .build();
        assert_eq!(c, "const defaults = {\n  \"heading\": \"Welcome\"\n};\n");
    }
}
