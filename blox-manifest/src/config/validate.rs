//! Cross-reference validation of a loaded config directory.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use blox_core::slugify;

use super::{
    Theme,
    parse::{Loaded, Scope},
};
use crate::{Error, error::SourceContext};

pub(crate) fn validate(
    dir: &Path,
    theme: Option<&Loaded<Theme>>,
    main: &Scope,
    plugins: &[Scope],
    errors: &mut Vec<Error>,
) {
    if let Some(theme) = theme {
        check_duplicates(
            theme.value.design_systems.iter().map(|ds| ds.name.as_str()),
            &theme.src,
            "design system",
            "theme.json",
            errors,
        );
        check_slugs(
            theme.value.design_systems.iter().map(|ds| ds.name.as_str()),
            &theme.src,
            "design system",
            "theme.json",
            errors,
        );
    }

    let scopes: Vec<&Scope> = std::iter::once(main).chain(plugins).collect();

    let total_sections: usize = scopes.iter().map(|s| s.sections().len()).sum();
    let any_failed = scopes.iter().any(|s| s.sections_failed);
    if total_sections == 0 && !any_failed {
        errors.push(Error::NoSections {
            dir: dir.to_path_buf(),
        });
    }

    check_modules(&scopes, errors);

    for scope in &scopes {
        check_scope(scope, main, errors);
    }

    let content_types_failed = scopes.iter().any(|s| s.content_types_failed);

    let content_types = check_global(
        "content type",
        scopes
            .iter()
            .flat_map(|s| s.content_types().iter().map(move |ct| (ct.name.as_str(), *s))),
        errors,
    );
    check_global(
        "collection",
        scopes
            .iter()
            .flat_map(|s| s.collections.iter().map(move |c| (c.name.as_str(), *s))),
        errors,
    );

    for scope in &scopes {
        if let Some(templates) = &scope.templates {
            for template in &templates.value {
                if let Some(ct) = template.content_type()
                    && !content_types_failed
                    && !content_types.contains(ct)
                {
                    errors.push(Error::UnknownContentType {
                        src: templates.src.named_source(),
                        span: templates.src.find_string_in(&template.name, ct),
                        template: template.name.clone(),
                        content_type: ct.to_string(),
                    });
                }
            }
        }

        for collection in &scope.collections {
            let mut seen = HashMap::new();
            for entry in &collection.entries {
                let Some(slug) = entry.slug() else { continue };
                let count = seen.entry(slug).or_insert(0usize);
                if *count == 1 {
                    errors.push(Error::DuplicateSlug {
                        src: collection.src.named_source(),
                        span: collection.src.find_value("slug", slug, 1),
                        collection: collection.name.clone(),
                        slug: slug.to_string(),
                    });
                }
                *count += 1;
            }
        }
    }
}

/// Sections of one scope: names, template lists, template references.
fn check_scope(scope: &Scope, main: &Scope, errors: &mut Vec<Error>) {
    let label = scope.label();

    if let Some(templates) = &scope.templates {
        check_duplicates(
            templates.value.iter().map(|t| t.name.as_str()),
            &templates.src,
            "template",
            &label,
            errors,
        );
        check_slugs(
            templates.value.iter().map(|t| t.name.as_str()),
            &templates.src,
            "template",
            &label,
            errors,
        );
    }
    if let Some(content_types) = &scope.content_types {
        check_duplicates(
            content_types.value.iter().map(|ct| ct.name.as_str()),
            &content_types.src,
            "content type",
            &label,
            errors,
        );
    }

    let Some(sections) = &scope.sections else {
        return;
    };
    check_duplicates(
        sections.value.iter().map(|s| s.name.as_str()),
        &sections.src,
        "section",
        &label,
        errors,
    );
    check_slugs(
        sections.value.iter().map(|s| s.name.as_str()),
        &sections.src,
        "section",
        &label,
        errors,
    );

    let visible: HashSet<&str> = scope
        .templates()
        .iter()
        .chain(main.templates())
        .map(|t| t.name.as_str())
        .collect();

    let templates_failed = scope.templates_failed || main.templates_failed;

    for section in &sections.value {
        if section.templates.is_empty() {
            errors.push(Error::EmptyTemplates {
                src: sections.src.named_source(),
                span: sections.src.find_name(&section.name, 0),
                module: scope.module.clone(),
                section: section.name.clone(),
            });
            continue;
        }

        for template in &section.templates {
            if !templates_failed && !visible.contains(template.as_str()) {
                errors.push(Error::UnknownTemplate {
                    src: sections.src.named_source(),
                    span: sections.src.find_string_in(&section.name, template),
                    module: scope.module.clone(),
                    section: section.name.clone(),
                    template: template.clone(),
                });
            }
        }
    }
}

/// Plugin directories must map to distinct module names.
fn check_modules(scopes: &[&Scope], errors: &mut Vec<Error>) {
    let mut seen: HashMap<&str, &Scope> = HashMap::new();
    for &scope in scopes {
        if slugify(&scope.module).is_empty() {
            errors.push(Error::EmptyModuleSlug {
                dir: scope.dir.clone(),
            });
        }
        if let Some(first) = seen.insert(&scope.module, scope) {
            errors.push(Error::Redefined {
                kind: "module",
                name: scope.module.clone(),
                first: first.dir.display().to_string(),
                second: scope.dir.display().to_string(),
            });
        }
    }
}

/// Names that live in one flat map across every scope. Returns the name set.
fn check_global<'a>(
    kind: &'static str,
    names: impl Iterator<Item = (&'a str, &'a Scope)>,
    errors: &mut Vec<Error>,
) -> HashSet<&'a str> {
    let mut owners: HashMap<&str, &Scope> = HashMap::new();
    for (name, scope) in names {
        match owners.get(name) {
            // Same-scope duplicates are reported by check_scope.
            Some(first) if first.module != scope.module => errors.push(Error::Redefined {
                kind,
                name: name.to_string(),
                first: first.label(),
                second: scope.label(),
            }),
            Some(_) => {}
            None => {
                owners.insert(name, scope);
            }
        }
    }
    owners.into_keys().collect()
}

fn check_duplicates<'a>(
    names: impl Iterator<Item = &'a str>,
    src: &SourceContext,
    kind: &'static str,
    scope: &str,
    errors: &mut Vec<Error>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            errors.push(Error::DuplicateName {
                src: src.named_source(),
                first_span: src.find_name(name, 0),
                second_span: src.find_name(name, 1),
                kind,
                name: name.to_string(),
                scope: scope.to_string(),
            });
        }
    }
}

/// Names that become block name parts must keep at least one character
/// after slugifying.
fn check_slugs<'a>(
    names: impl Iterator<Item = &'a str>,
    src: &SourceContext,
    kind: &'static str,
    scope: &str,
    errors: &mut Vec<Error>,
) {
    for name in names.filter(|name| slugify(name).is_empty()) {
        errors.push(Error::EmptySlug {
            src: src.named_source(),
            span: src.find_name(name, 0),
            kind,
            name: name.to_string(),
            scope: scope.to_string(),
        });
    }
}
