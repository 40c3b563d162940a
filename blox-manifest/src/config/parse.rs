//! Loading a config directory from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use blox_core::{CollectionStore, Entry, MAIN_MODULE, slugify};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    Config, ContentType, Plugin, Section, Template, Theme, plugin::PluginMeta, validate,
};
use crate::{Error, Result, error::SourceContext};

pub(crate) const THEME_FILE: &str = "theme.json";
pub(crate) const SECTIONS_FILE: &str = "sections.json";
pub(crate) const TEMPLATES_FILE: &str = "templates.json";
pub(crate) const CONTENT_TYPES_FILE: &str = "content-types.json";
pub(crate) const PLUGIN_FILE: &str = "plugin.json";
pub(crate) const COLLECTIONS_DIR: &str = "collections";
pub(crate) const PLUGINS_DIR: &str = "plugins";

/// A parsed file together with its source for spanned errors.
pub(crate) struct Loaded<T> {
    pub value: T,
    pub src: SourceContext,
}

/// One collection file, entries already normalized.
pub(crate) struct LoadedCollection {
    pub name: String,
    pub entries: Vec<Entry>,
    pub src: SourceContext,
}

/// Raw contents of the main directory or one plugin directory.
pub(crate) struct Scope {
    pub module: String,
    pub dir: PathBuf,
    pub meta: PluginMeta,
    pub sections: Option<Loaded<Vec<Section>>>,
    pub templates: Option<Loaded<Vec<Template>>>,
    pub content_types: Option<Loaded<Vec<ContentType>>>,
    pub collections: Vec<LoadedCollection>,
    /// Set when sections.json exists but could not be read.
    pub sections_failed: bool,
    /// Set when templates.json or content-types.json exists but could not be read.
    /// Reference checks against them are skipped to avoid cascading errors.
    pub templates_failed: bool,
    pub content_types_failed: bool,
}

impl Scope {
    /// `main config` or `plugin 'name'`, for messages.
    pub fn label(&self) -> String {
        if self.module == MAIN_MODULE {
            "main config".to_string()
        } else {
            format!("plugin '{}'", self.module)
        }
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.as_ref().map_or(&[], |l| l.value.as_slice())
    }

    pub fn templates(&self) -> &[Template] {
        self.templates.as_ref().map_or(&[], |l| l.value.as_slice())
    }

    pub fn content_types(&self) -> &[ContentType] {
        self.content_types.as_ref().map_or(&[], |l| l.value.as_slice())
    }
}

impl Config {
    /// Parse and validate a config directory.
    ///
    /// Every violation found is reported; several are wrapped in
    /// [`Error::Invalid`].
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Box::new(Error::Io {
                path: dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "config directory not found",
                ),
            }));
        }

        let mut errors = Vec::new();

        let theme = read_json::<Theme>(&dir.join(THEME_FILE), &mut errors);
        if theme.is_none() && !dir.join(THEME_FILE).exists() {
            errors.push(Error::MissingTheme {
                dir: dir.to_path_buf(),
            });
        }

        let main = load_scope(dir, MAIN_MODULE.to_string(), &mut errors);
        let plugins = load_plugins(dir, &mut errors);

        validate::validate(dir, theme.as_ref(), &main, &plugins, &mut errors);

        if let Some(err) = Error::collect(errors) {
            return Err(err);
        }
        let Some(theme) = theme else {
            return Err(Box::new(Error::MissingTheme {
                dir: dir.to_path_buf(),
            }));
        };

        Ok(assemble(dir, theme.value, main, plugins))
    }
}

fn assemble(dir: &Path, theme: Theme, mut main: Scope, plugins: Vec<Scope>) -> Config {
    let mut content_types = IndexMap::new();
    let mut collections = CollectionStore::new();

    let mut absorb = |scope: &mut Scope| -> (Vec<String>, Vec<String>) {
        let mut ct_names = Vec::new();
        if let Some(loaded) = scope.content_types.take() {
            for ct in loaded.value {
                ct_names.push(ct.name.clone());
                content_types.insert(ct.name.clone(), ct);
            }
        }
        let mut coll_names = Vec::new();
        for collection in std::mem::take(&mut scope.collections) {
            coll_names.push(collection.name.clone());
            collections.insert(collection.name, collection.entries);
        }
        (ct_names, coll_names)
    };

    absorb(&mut main);

    let plugins = plugins
        .into_iter()
        .map(|mut scope| {
            let (ct_names, coll_names) = absorb(&mut scope);
            let title = scope.meta.title.take().unwrap_or_else(|| scope.module.clone());
            Plugin {
                name: scope.module,
                title,
                description: scope.meta.description,
                sections: scope.sections.map(|l| l.value).unwrap_or_default(),
                templates: scope.templates.map(|l| l.value).unwrap_or_default(),
                content_types: ct_names,
                collections: coll_names,
            }
        })
        .collect();

    Config {
        root: dir.to_path_buf(),
        theme,
        sections: main.sections.map(|l| l.value).unwrap_or_default(),
        templates: main.templates.map(|l| l.value).unwrap_or_default(),
        content_types,
        collections,
        plugins,
    }
}

fn load_scope(dir: &Path, module: String, errors: &mut Vec<Error>) -> Scope {
    let (sections, sections_failed) = read_tracked(&dir.join(SECTIONS_FILE), errors);
    let (templates, templates_failed) = read_tracked(&dir.join(TEMPLATES_FILE), errors);
    let (content_types, content_types_failed) =
        read_tracked(&dir.join(CONTENT_TYPES_FILE), errors);

    Scope {
        sections,
        templates,
        content_types,
        collections: load_collections(&dir.join(COLLECTIONS_DIR), errors),
        meta: PluginMeta::default(),
        module,
        dir: dir.to_path_buf(),
        sections_failed,
        templates_failed,
        content_types_failed,
    }
}

/// Read an optional file, also reporting whether it exists but failed to load.
fn read_tracked<T: DeserializeOwned>(
    path: &Path,
    errors: &mut Vec<Error>,
) -> (Option<Loaded<T>>, bool) {
    let loaded = read_optional(path, errors);
    let failed = loaded.is_none() && path.exists();
    (loaded, failed)
}

fn load_plugins(dir: &Path, errors: &mut Vec<Error>) -> Vec<Scope> {
    let plugins_dir = dir.join(PLUGINS_DIR);
    if !plugins_dir.is_dir() {
        return Vec::new();
    }

    let mut plugin_dirs = match list_dir(&plugins_dir) {
        Ok(paths) => paths.into_iter().filter(|p| p.is_dir()).collect::<Vec<_>>(),
        Err(e) => {
            errors.push(e);
            return Vec::new();
        }
    };
    plugin_dirs.sort();

    plugin_dirs
        .into_iter()
        .map(|plugin_dir| {
            let dir_name = plugin_dir
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let module = match slugify(&dir_name) {
                slug if slug.is_empty() => dir_name,
                slug => slug,
            };
            tracing::debug!(plugin = %module, "loading plugin");

            let mut scope = load_scope(&plugin_dir, module, errors);
            let meta_path = plugin_dir.join(PLUGIN_FILE);
            if meta_path.exists()
                && let Some(meta) = read_json::<PluginMeta>(&meta_path, errors)
            {
                scope.meta = meta.value;
            }
            scope
        })
        .collect()
}

fn load_collections(dir: &Path, errors: &mut Vec<Error>) -> Vec<LoadedCollection> {
    if !dir.is_dir() {
        tracing::warn!(path = %dir.display(), "no collections directory, using empty store");
        return Vec::new();
    }

    let mut files = match list_dir(dir) {
        Ok(paths) => paths
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect::<Vec<_>>(),
        Err(e) => {
            errors.push(e);
            return Vec::new();
        }
    };
    files.sort();

    files
        .into_iter()
        .filter_map(|path| {
            let name = file_stem(&path);
            let loaded = read_json::<Vec<Value>>(&path, errors)?;
            let entries = normalize_entries(&name, loaded.value, &loaded.src, errors);
            Some(LoadedCollection {
                name,
                entries,
                src: loaded.src,
            })
        })
        .collect()
}

/// Fill in `slug`, `_type` and `_id` where the author left them out.
fn normalize_entries(
    collection: &str,
    values: Vec<Value>,
    src: &SourceContext,
    errors: &mut Vec<Error>,
) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let Some(mut entry) = Entry::from_value(value) else {
            errors.push(src.validation_error(
                format!("entry {} of collection '{}' is not an object", index, collection),
                None,
            ));
            continue;
        };

        if entry.slug().is_none()
            && let Some(slug) = entry.label().map(slugify)
        {
            entry.insert("slug", slug);
        }
        if entry.content_type().is_none() {
            entry.insert("_type", collection);
        }
        if entry.id().is_none() {
            entry.insert("_id", format!("{}-{}", collection, index));
        }
        entries.push(entry);
    }

    entries
}

/// Read an optional file; a missing one is logged and yields `None`.
fn read_optional<T: DeserializeOwned>(path: &Path, errors: &mut Vec<Error>) -> Option<Loaded<T>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "optional config file not found");
        return None;
    }
    read_json(path, errors)
}

fn read_json<T: DeserializeOwned>(path: &Path, errors: &mut Vec<Error>) -> Option<Loaded<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return None,
        Err(source) => {
            errors.push(Error::Io {
                path: path.to_path_buf(),
                source,
            });
            return None;
        }
    };

    let src = SourceContext::new(content, path.display().to_string());
    match serde_json::from_str(src.src()) {
        Ok(value) => Some(Loaded { value, src }),
        Err(e) => {
            errors.push(src.parse_error(e));
            None
        }
    }
}

fn list_dir(dir: &Path) -> std::result::Result<Vec<PathBuf>, Error> {
    let read = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(read.filter_map(|entry| entry.ok().map(|e| e.path())).collect())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_normalize_entries_fills_identity() {
        let src = SourceContext::new("", "blogItem.json");
        let mut errors = Vec::new();
        let entries = normalize_entries(
            "blogItem",
            vec![
                json!({ "title": "Hello World" }),
                json!({ "_id": "x", "_type": "post", "slug": "kept", "title": "Other" }),
            ],
            &src,
            &mut errors,
        );

        assert!(errors.is_empty());
        assert_eq!(entries[0].slug(), Some("hello-world"));
        assert_eq!(entries[0].content_type(), Some("blogItem"));
        assert_eq!(entries[0].id(), Some("blogItem-0"));
        assert_eq!(entries[1].slug(), Some("kept"));
        assert_eq!(entries[1].content_type(), Some("post"));
        assert_eq!(entries[1].id(), Some("x"));
    }

    #[test]
    fn test_normalize_entries_rejects_non_objects() {
        let src = SourceContext::new("", "faq.json");
        let mut errors = Vec::new();
        let entries = normalize_entries("faq", vec![json!("nope"), json!({})], &src, &mut errors);

        assert_eq!(entries.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("entry 0 of collection 'faq'"));
    }
}
