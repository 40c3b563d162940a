//! Section × template × design system expansion.
//!
//! [`plan`] enumerates block identities without building anything, so the
//! uniqueness check can run before any block is materialized. [`expand`]
//! turns the plan into a [`RegistryIR`].

use blox_core::{BlockId, CollectionRefs, FieldType, slugify};
use blox_ir::{
    Block, ContentTypeIR, DesignSystemIR, Field, MasterDetail, RegistryIR, RegistryMeta,
};
use blox_manifest::{Config, DesignSystem, FieldDef, ProjectConfig, Section, Template};
use serde_json::{Map, Value};

/// Name of the implicit title field of body sections.
pub const HEADING_FIELD: &str = "heading";
/// Name of the implicit intro text field of body sections.
pub const BLURB_FIELD: &str = "blurb";

/// One block identity with the config entries it came from.
#[derive(Debug, Clone)]
pub struct Planned<'a> {
    pub id: BlockId,
    pub name: String,
    pub section: &'a Section,
    pub template: &'a Template,
    /// `None` for layout sections.
    pub design_system: Option<&'a DesignSystem>,
}

/// Every block the config produces, in expansion order: modules (main
/// first), then sections, templates and design systems in config order.
pub fn plan(config: &Config) -> Vec<Planned<'_>> {
    let mut planned = Vec::new();

    for module in config.modules() {
        for section in module.sections {
            for template_name in &section.templates {
                let Some(template) = module.find_template(template_name) else {
                    // Unreachable after config validation.
                    tracing::warn!(
                        module = module.name,
                        section = %section.name,
                        template = %template_name,
                        "skipping unknown template"
                    );
                    continue;
                };

                if section.is_layout() {
                    let id = BlockId::new(module.name, &section.name, &template.name, None);
                    planned.push(Planned {
                        name: id.name(),
                        id,
                        section,
                        template,
                        design_system: None,
                    });
                    continue;
                }

                for ds in config.design_systems() {
                    let id = BlockId::new(
                        module.name,
                        &section.name,
                        &template.name,
                        Some(ds.name.clone()),
                    );
                    planned.push(Planned {
                        name: id.name(),
                        id,
                        section,
                        template,
                        design_system: Some(ds),
                    });
                }
            }
        }
    }

    planned
}

/// Build the registry IR. Block names are assumed unique.
pub fn expand(config: &Config, project: &ProjectConfig) -> RegistryIR {
    let default_limit = project.generator.default_limit;
    let blocks = plan(config)
        .iter()
        .map(|planned| build_block(planned, default_limit))
        .collect();

    RegistryIR {
        meta: meta(config, project),
        design_systems: config
            .design_systems()
            .iter()
            .map(|ds| DesignSystemIR {
                name: ds.name.clone(),
                label: ds.label().to_string(),
                description: ds.description.clone(),
            })
            .collect(),
        blocks,
        content_types: config
            .content_types
            .iter()
            .map(|(name, ct)| {
                let ir = ContentTypeIR {
                    name: ct.name.clone(),
                    title: ct.title().to_string(),
                    data_position: ct.data_position().to_string(),
                    fields: ct.fields.iter().map(to_field).collect(),
                };
                (name.clone(), ir)
            })
            .collect(),
        collections: config.collections.clone(),
    }
}

fn meta(config: &Config, project: &ProjectConfig) -> RegistryMeta {
    let settings = &project.registry;
    RegistryMeta {
        name: settings
            .name
            .clone()
            .unwrap_or_else(|| slugify(&config.theme.title)),
        version: settings.version.clone(),
        base_url: settings.base_url.clone(),
        title: config.theme.title.clone(),
        description: config.theme.description.clone(),
        dependencies: settings.dependencies.clone(),
    }
}

/// Materialize one planned block.
pub fn build_block(planned: &Planned<'_>, default_limit: usize) -> Block {
    let Planned {
        id,
        name,
        section,
        template,
        design_system,
    } = planned;

    let fields = block_fields(section);
    let data = block_data(section, &fields);
    let collections: CollectionRefs = section
        .collections
        .iter()
        .map(|(name, r)| (name.clone(), r.or_limit(default_limit)))
        .collect();

    let is_detail = template.is_detail();
    let master_detail = MasterDetail {
        is_master: !is_detail && !collections.is_empty(),
        is_detail,
    };

    Block {
        id: id.clone(),
        name: name.clone(),
        title: section.title().to_string(),
        description: describe(section, template, *design_system),
        category: template.category,
        fields,
        data,
        collections,
        content_type: template.content_type().map(str::to_string),
        shadcn_components: template.shadcn_components(),
        lucide_icons: template.lucide_icons(),
        master_detail,
    }
}

/// Section fields, with `heading` and `blurb` prepended to body sections
/// that do not declare them.
fn block_fields(section: &Section) -> Vec<Field> {
    let declared: Vec<Field> = section.fields.iter().map(to_field).collect();
    if section.is_layout() {
        return declared;
    }

    let has = |name: &str| declared.iter().any(|f| f.name == name);
    let mut fields = Vec::with_capacity(declared.len() + 2);
    if !has(HEADING_FIELD) {
        fields.push(Field::new(HEADING_FIELD, FieldType::String).required());
    }
    if !has(BLURB_FIELD) {
        fields.push(Field::new(BLURB_FIELD, FieldType::Text));
    }
    fields.extend(declared);
    fields
}

/// Section data completed with one value per field. Precedence: section
/// data, field default, section title for `heading`, type default.
fn block_data(section: &Section, fields: &[Field]) -> Map<String, Value> {
    let mut data = Map::new();

    for field in fields {
        let value = section
            .data
            .get(&field.name)
            .cloned()
            .or_else(|| field.default.clone())
            .unwrap_or_else(|| {
                if field.name == HEADING_FIELD {
                    Value::String(section.title().to_string())
                } else {
                    field.ty.default_value()
                }
            });
        data.insert(field.name.clone(), value);
    }

    for (key, value) in &section.data {
        if !data.contains_key(key) {
            data.insert(key.clone(), value.clone());
        }
    }

    data
}

fn describe(section: &Section, template: &Template, ds: Option<&DesignSystem>) -> String {
    match ds {
        Some(ds) => format!(
            "{} section using the {} template in the {} design system",
            section.title(),
            template.title(),
            ds.label()
        ),
        None => format!(
            "{} layout using the {} template",
            section.title(),
            template.title()
        ),
    }
}

fn to_field(def: &FieldDef) -> Field {
    Field {
        name: def.name.clone(),
        ty: def.ty,
        required: def.required,
        default: def.default.clone(),
    }
}
