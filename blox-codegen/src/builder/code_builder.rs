//! Code builder for properly indented source text.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building indented code.
///
/// Consuming methods return `Self` for chaining; `push_*` methods take
/// `&mut self` for loops and AST emission.
///
/// # Example
///
/// ```
/// use blox_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::tsx()
///     .block_with_close("export default function Hero() {", "}", |b| {
///         b.line("return null;")
///     })
///     .build();
///
/// assert_eq!(code, "export default function Hero() {\n  return null;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Two-space indentation for TypeScript and TSX.
    pub fn tsx() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("// ");
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Emit a [`Renderable`] node at the current indentation.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Header line followed by an indented body, no closing line.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    pub fn jsdoc(mut self, text: &str) -> Self {
        self.push_jsdoc(text);
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::tsx()
    }
}
