//! Deterministic TSX templates keyed on the template category.

use blox_codegen::{
    builder::{CodeFragment, Renderable},
    expansion::{BLURB_FIELD, HEADING_FIELD},
};
use blox_core::{Entry, FieldType, ResolvedCollections, TemplateCategory};
use blox_ir::{Block, DesignSystemIR, Field};
use eyre::{Result, WrapErr};

use super::ComponentStrategy;
use crate::{
    ast::{Const, Function, Import, Interface, InterfaceField, JsxChild, JsxElement, property_key},
    code_file::{CodeFile, RawCode},
};

/// Shape of every collection entry as seen by components.
const COLLECTION_ITEM: &str =
    "export type CollectionItem = { _id: string; _type: string; slug?: string; [key: string]: any };";

/// Entry keys that identify an entry rather than describe it.
const META_KEYS: [&str; 3] = ["_id", "_type", "slug"];

/// Built-in component templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateStrategy;

impl ComponentStrategy for TemplateStrategy {
    fn name(&self) -> &'static str {
        "template"
    }

    fn generate(
        &self,
        block: &Block,
        design_system: Option<&DesignSystemIR>,
        collections: &ResolvedCollections<'_>,
    ) -> Result<String> {
        let name = block.component_name();
        let data_type = format!("{}Data", name);
        let props_type = format!("{}Props", name);

        let defaults = serde_json::to_string_pretty(&block.data)
            .wrap_err_with(|| format!("failed to serialize defaults of {}", block.name))?;

        let mut file = CodeFile::new();
        if !block.lucide_icons.is_empty() {
            file = file.import(
                Import::new("lucide-react").named_all(block.lucide_icons.iter().cloned()),
            );
        }

        file = file
            .add(RawCode::new(COLLECTION_ITEM))
            .add(data_interface(&data_type, &block.fields))
            .add(props_interface(&props_type, &data_type, block.is_detail()))
            .add(Const::new("defaults", defaults).private());

        let has_collections = !block.collections.is_empty() || block.is_detail();
        if has_collections {
            let resolved = serde_json::to_string_pretty(collections)
                .wrap_err_with(|| format!("failed to serialize collections of {}", block.name))?;
            file = file.add(
                Const::new("defaultCollections", resolved)
                    .ty("Record<string, CollectionItem[]>")
                    .private(),
            );
        }

        let sample = detail_sample(block, collections);
        if let Some(content_type) = &block.content_type {
            file = file.add(RawCode::new(format!(
                "const sampleEntry: CollectionItem | undefined = defaultCollections[\"{}\"]?.[0];",
                content_type
            )));
        }

        let mut component = Function::new(&name)
            .default_export()
            .param(format!("{{ content }}: {}", props_type))
            .body_line(format!(
                "const data: {} = {{ ...defaults, ...content.data }};",
                data_type
            ));
        if has_collections {
            component = component.body_line(
                "const collections: Record<string, CollectionItem[]> = { ...defaultCollections, ...content.collections };",
            );
        }
        if block.content_type.is_some() {
            component = component.body_line("const entry = content.entry ?? sampleEntry;");
        }

        let root = render_root(block, design_system, sample);
        component = component.body_blank().body_fragment(CodeFragment::Block {
            header: "return (".to_string(),
            body: root.to_fragments(),
            close: Some(");".to_string()),
        });

        Ok(file.add(component).render())
    }
}

fn data_interface(name: &str, fields: &[Field]) -> Interface {
    fields.iter().fold(Interface::new(name), |interface, field| {
        let member = InterfaceField::new(&field.name, field.ty.ts_type());
        interface.field_with(if field.required {
            member
        } else {
            member.optional()
        })
    })
}

fn props_interface(name: &str, data_type: &str, is_detail: bool) -> Interface {
    let entry = if is_detail { "entry?: CollectionItem; " } else { "" };
    Interface::new(name).field(
        "content",
        format!(
            "{{ {}data?: Partial<{}>; collections?: Record<string, CollectionItem[]> }}",
            entry, data_type
        ),
    )
}

/// The first resolved entry of a detail block's content type.
fn detail_sample<'a>(block: &Block, collections: &ResolvedCollections<'a>) -> Option<&'a Entry> {
    let content_type = block.content_type.as_ref()?;
    collections.get(content_type)?.first()
}

fn render_root(
    block: &Block,
    design_system: Option<&DesignSystemIR>,
    sample: Option<&Entry>,
) -> JsxElement {
    let tag = match block.category {
        TemplateCategory::Headers => "header",
        _ => "section",
    };

    let mut root = JsxElement::new(tag).attr("data-block", &block.name);
    if let Some(ds) = design_system {
        root = root.attr("data-design-system", &ds.name);
    }
    root = root.attr("className", wrapper_class(block.category));

    for field in &block.fields {
        if let Some(child) = render_field(field, block.category) {
            root = root.push(child);
        }
    }

    if block.is_detail() {
        if let Some(content_type) = &block.content_type {
            root = root.when("entry", render_entry(content_type, sample));
        }
    } else {
        for name in block.collections.keys() {
            root = root.child(render_collection(name, block.category));
        }
    }

    if !block.lucide_icons.is_empty() {
        let icons = block
            .lucide_icons
            .iter()
            .map(|icon| JsxElement::new(icon).attr("className", "size-4"));
        root = root.child(
            JsxElement::new("span")
                .attr("aria-hidden", "true")
                .attr("className", "inline-flex gap-2")
                .children(icons),
        );
    }

    root
}

fn wrapper_class(category: TemplateCategory) -> &'static str {
    match category {
        TemplateCategory::Headers => "flex items-center justify-between px-6 py-4",
        TemplateCategory::Covers => "px-6 py-24 text-center",
        TemplateCategory::Cards | TemplateCategory::Blocks => "px-6 py-16",
        TemplateCategory::Lists => "px-6 py-12",
        TemplateCategory::Default => "px-6 py-8",
    }
}

fn accessor(object: &str, key: &str) -> String {
    let key = property_key(key);
    if key.starts_with('"') {
        format!("{}[{}]", object, key)
    } else {
        format!("{}.{}", object, key)
    }
}

/// Markup for one data field, or `None` for fields without a visual form.
fn render_field(field: &Field, category: TemplateCategory) -> Option<JsxChild> {
    let value = accessor("data", &field.name);

    if field.name == HEADING_FIELD {
        let tag = match category {
            TemplateCategory::Covers | TemplateCategory::Headers => "h1",
            _ => "h2",
        };
        return Some(JsxChild::Element(
            JsxElement::new(tag)
                .attr("className", "text-3xl font-bold tracking-tight")
                .expr(value),
        ));
    }

    let element = match field.ty {
        FieldType::String | FieldType::Text if field.name == BLURB_FIELD => {
            JsxElement::new("p")
                .attr("className", "text-muted-foreground")
                .expr(&value)
        }
        FieldType::String | FieldType::Text | FieldType::Number | FieldType::Date => {
            JsxElement::new("p").expr(&value)
        }
        FieldType::RichText => JsxElement::new("div")
            .expr_attr("dangerouslySetInnerHTML", &format!("{{ __html: {} }}", value)),
        FieldType::Image => JsxElement::new("img").expr_attr("src", &value).attr("alt", ""),
        FieldType::Url => JsxElement::new("a").expr_attr("href", &value).expr(&value),
        FieldType::List => JsxElement::new("ul").map(
            &value,
            "item",
            JsxElement::new("li").expr_attr("key", "item").expr("item"),
        ),
        FieldType::Boolean | FieldType::Object | FieldType::Reference => return None,
    };

    Some(JsxChild::Conditional {
        cond: value,
        element,
    })
}

fn render_collection(name: &str, category: TemplateCategory) -> JsxElement {
    let list = format!("(collections[\"{}\"] ?? [])", name);
    let label = "item.title ?? item.name ?? item.slug";

    match category {
        TemplateCategory::Cards | TemplateCategory::Covers => JsxElement::new("div")
            .attr("className", "grid gap-6 md:grid-cols-3")
            .map(
                list,
                "item",
                JsxElement::new("article")
                    .expr_attr("key", "item._id")
                    .attr("className", "rounded-lg border p-6")
                    .child(JsxElement::new("h3").attr("className", "font-semibold").expr(label)),
            ),
        _ => JsxElement::new("ul")
            .attr("className", "divide-y")
            .map(
                list,
                "item",
                JsxElement::new("li")
                    .expr_attr("key", "item._id")
                    .attr("className", "py-3")
                    .expr(label),
            ),
    }
}

/// Markup for a detail entry, one element per scalar field of the sample.
fn render_entry(content_type: &str, sample: Option<&Entry>) -> JsxElement {
    let mut article = JsxElement::new("article").attr("data-content-type", content_type);

    let Some(sample) = sample else {
        return article.child(JsxElement::new("h1").expr("entry.title ?? entry.slug"));
    };

    for (key, value) in sample.fields() {
        if META_KEYS.contains(&key.as_str()) || !(value.is_string() || value.is_number()) {
            continue;
        }
        let expr = accessor("entry", key);
        article = article.child(if key == "title" {
            JsxElement::new("h1").attr("className", "text-3xl font-bold").expr(expr)
        } else {
            JsxElement::new("p").expr(expr)
        });
    }
    article
}

#[cfg(test)]
mod tests {
    use blox_core::{BlockId, CollectionRefs};
    use blox_ir::MasterDetail;
    use serde_json::Map;

    use super::*;

    fn block(fields: Vec<Field>, category: TemplateCategory) -> Block {
        let id = BlockId::new("main", "stats", "list1", None);
        let mut data = Map::new();
        for field in &fields {
            data.insert(field.name.clone(), field.ty.default_value());
        }
        Block {
            name: id.name(),
            id,
            title: "Stats".into(),
            description: String::new(),
            category,
            fields,
            data,
            collections: CollectionRefs::new(),
            content_type: None,
            shadcn_components: vec![],
            lucide_icons: vec![],
            master_detail: MasterDetail::default(),
        }
    }

    #[test]
    fn test_accessor_quotes_non_identifiers() {
        assert_eq!(accessor("data", "heading"), "data.heading");
        assert_eq!(accessor("data", "cta-label"), "data[\"cta-label\"]");
    }

    #[test]
    fn test_field_markup_by_type() {
        let fields = vec![
            Field::new("cover", FieldType::Image),
            Field::new("tags", FieldType::List),
            Field::new("body", FieldType::RichText),
            Field::new("visible", FieldType::Boolean),
            Field::new("cta-url", FieldType::Url).required(),
        ];
        let source = TemplateStrategy
            .generate(&block(fields, TemplateCategory::Lists), None, &ResolvedCollections::new())
            .unwrap();

        assert!(source.contains("{data.cover && <img src={data.cover} alt=\"\" />}"));
        assert!(source.contains("{data.tags && (\n"));
        assert!(source.contains("{data.tags.map((item) => ("));
        assert!(source.contains("dangerouslySetInnerHTML={{ __html: data.body }}"));
        assert!(source.contains("visible?: boolean;"));
        assert!(!source.contains("{data.visible"));
        assert!(source.contains("\"cta-url\": string;"));
        assert!(source.contains("<a href={data[\"cta-url\"]}>{data[\"cta-url\"]}</a>"));
        assert!(source.contains("\"tags\": []"));
    }

    #[test]
    fn test_header_category_uses_header_element() {
        let source = TemplateStrategy
            .generate(
                &block(vec![], TemplateCategory::Headers),
                None,
                &ResolvedCollections::new(),
            )
            .unwrap();
        assert!(source.contains("<header data-block=\"main-stats-list1\""));
        assert!(!source.contains("defaultCollections"));
    }
}
