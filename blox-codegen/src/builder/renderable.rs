//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    Blank,
    /// Raw text without indentation or newline.
    Raw(String),
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments one level.
    Indent(Vec<CodeFragment>),
    Sequence(Vec<CodeFragment>),
    /// `/** text */`
    JsDoc(String),
    /// `// text`
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair;

    impl Renderable for Pair {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line("a"), CodeFragment::line("b")]
        }
    }

    #[test]
    fn test_slice_concatenates_fragments() {
        let nodes = [Pair, Pair];
        assert_eq!(nodes[..].to_fragments().len(), 4);
    }

    #[test]
    fn test_block_constructor() {
        let block = CodeFragment::block(
            "if (items.length === 0) {",
            vec![CodeFragment::line("return null;")],
            Some("}".to_string()),
        );
        let CodeFragment::Block { header, body, close } = block else {
            panic!("expected a block");
        };
        assert_eq!(header, "if (items.length === 0) {");
        assert_eq!(body.len(), 1);
        assert_eq!(close.as_deref(), Some("}"));
    }
}
