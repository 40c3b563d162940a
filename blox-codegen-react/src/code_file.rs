//! Structured TypeScript/TSX file layout.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// A source file organized as imports, body and exports.
///
/// Sections render in that order, separated by blank lines, with a blank
/// line between body elements.
///
/// ```
/// use blox_codegen_react::{CodeFile, RawCode, ast::{Export, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("react").named("ComponentType").type_only())
///     .add(RawCode::new("const blocks = {};"))
///     .export(Export::new().default("blocks"))
///     .render();
///
/// assert_eq!(
///     code,
///     "import type { ComponentType } from \"react\";\n\nconst blocks = {};\n\nexport default blocks;\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render with two-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}

/// Verbatim source lines usable as a [`CodeFile`] body element.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}
