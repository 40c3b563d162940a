//! JSX element trees.

use blox_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Children fitting within this width stay on the opening tag's line.
const INLINE_WIDTH: usize = 80;

/// A JSX element with attributes and children.
#[derive(Debug, Clone)]
pub struct JsxElement {
    tag: String,
    attrs: Vec<String>,
    children: Vec<JsxChild>,
}

/// A child of a [`JsxElement`].
#[derive(Debug, Clone)]
pub enum JsxChild {
    Element(JsxElement),
    /// `{expr}`
    Expr(String),
    Text(String),
    /// `{cond && <element />}`
    Conditional { cond: String, element: JsxElement },
    /// `{list.map((item) => <element />)}`
    Map {
        list: String,
        item: String,
        element: JsxElement,
    },
}

impl JsxElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `name="value"`
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push(format!("{}=\"{}\"", name, value));
        self
    }

    /// `name={expr}`
    pub fn expr_attr(mut self, name: &str, expr: &str) -> Self {
        self.attrs.push(format!("{}={{{}}}", name, expr));
        self
    }

    pub fn push(mut self, child: JsxChild) -> Self {
        self.children.push(child);
        self
    }

    pub fn child(mut self, element: JsxElement) -> Self {
        self.children.push(JsxChild::Element(element));
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = JsxElement>) -> Self {
        self.children
            .extend(elements.into_iter().map(JsxChild::Element));
        self
    }

    pub fn expr(mut self, expr: impl Into<String>) -> Self {
        self.children.push(JsxChild::Expr(expr.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(JsxChild::Text(text.into()));
        self
    }

    pub fn when(mut self, cond: impl Into<String>, element: JsxElement) -> Self {
        self.children.push(JsxChild::Conditional {
            cond: cond.into(),
            element,
        });
        self
    }

    pub fn map(mut self, list: impl Into<String>, item: impl Into<String>, element: JsxElement) -> Self {
        self.children.push(JsxChild::Map {
            list: list.into(),
            item: item.into(),
            element,
        });
        self
    }

    fn open_tag(&self) -> String {
        if self.attrs.is_empty() {
            format!("<{}", self.tag)
        } else {
            format!("<{} {}", self.tag, self.attrs.join(" "))
        }
    }

    /// The whole element on one line, if it has no nested elements and fits.
    fn inline(&self) -> Option<String> {
        if self.children.is_empty() {
            return Some(format!("{} />", self.open_tag()));
        }

        let mut inner = String::new();
        for child in &self.children {
            match child {
                JsxChild::Expr(expr) => inner.push_str(&format!("{{{}}}", expr)),
                JsxChild::Text(text) => inner.push_str(text),
                _ => return None,
            }
        }

        let line = format!("{}>{}</{}>", self.open_tag(), inner, self.tag);
        (line.len() <= INLINE_WIDTH).then_some(line)
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::tsx();
        builder.emit(self);
        builder.build()
    }
}

impl JsxChild {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            JsxChild::Element(element) => element.to_fragments(),
            JsxChild::Expr(expr) => vec![CodeFragment::Line(format!("{{{}}}", expr))],
            JsxChild::Text(text) => vec![CodeFragment::Line(text.clone())],
            JsxChild::Conditional { cond, element } => match element.inline() {
                Some(line) => vec![CodeFragment::Line(format!("{{{} && {}}}", cond, line))],
                None => vec![CodeFragment::Block {
                    header: format!("{{{} && (", cond),
                    body: element.to_fragments(),
                    close: Some(")}".to_string()),
                }],
            },
            JsxChild::Map {
                list,
                item,
                element,
            } => vec![CodeFragment::Block {
                header: format!("{{{}.map(({}) => (", list, item),
                body: element.to_fragments(),
                close: Some("))}".to_string()),
            }],
        }
    }
}

impl Renderable for JsxElement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if let Some(line) = self.inline() {
            return vec![CodeFragment::Line(line)];
        }

        vec![CodeFragment::Block {
            header: format!("{}>", self.open_tag()),
            body: self
                .children
                .iter()
                .flat_map(JsxChild::to_fragments)
                .collect(),
            close: Some(format!("</{}>", self.tag)),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing() {
        let img = JsxElement::new("img").expr_attr("src", "data.image").attr("alt", "");
        assert_eq!(img.build(), "<img src={data.image} alt=\"\" />\n");
    }

    #[test]
    fn test_short_children_stay_inline() {
        let h = JsxElement::new("h2").attr("className", "heading").expr("data.heading");
        assert_eq!(h.build(), "<h2 className=\"heading\">{data.heading}</h2>\n");
    }

    #[test]
    fn test_nested_elements_are_indented() {
        let section = JsxElement::new("section")
            .child(JsxElement::new("h2").expr("data.heading"))
            .when("data.blurb", JsxElement::new("p").expr("data.blurb"));
        assert_eq!(
            section.build(),
            "<section>\n  <h2>{data.heading}</h2>\n  {data.blurb && <p>{data.blurb}</p>}\n</section>\n"
        );
    }

    #[test]
    fn test_map_renders_arrow() {
        let list = JsxElement::new("ul").map(
            "items",
            "item",
            JsxElement::new("li").expr_attr("key", "item._id").expr("item.title"),
        );
        assert_eq!(
            list.build(),
            "<ul>\n  {items.map((item) => (\n    <li key={item._id}>{item.title}</li>\n  ))}\n</ul>\n"
        );
    }

    #[test]
    fn test_long_content_breaks_lines() {
        let p = JsxElement::new("p")
            .attr("className", "text-muted-foreground max-w-2xl text-lg leading-relaxed")
            .expr("data.blurb");
        assert_eq!(
            p.build(),
            "<p className=\"text-muted-foreground max-w-2xl text-lg leading-relaxed\">\n  {data.blurb}\n</p>\n"
        );
    }
}
