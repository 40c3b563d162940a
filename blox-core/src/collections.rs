//! Collections store and reference resolution.
//!
//! The same two lookups run when components are generated and when a page
//! is rendered from the emitted artifacts. Both are stateless and never
//! fail: a missing collection or entry is logged and degrades to an empty
//! slot so the page can fall back to its built-in defaults.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item of a collection. Carries `_id`, `_type`, `slug` and free fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a JSON value; only objects are entries.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("_id")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.str_field("_type")
    }

    pub fn slug(&self) -> Option<&str> {
        self.str_field("slug")
    }

    /// Human label used when deriving slugs (`title`, then `name`).
    pub fn label(&self) -> Option<&str> {
        self.str_field("title").or_else(|| self.str_field("name"))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Name-keyed, insertion-ordered collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionStore(IndexMap<String, Vec<Entry>>);

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[Entry]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Insert a collection, returning the previous entries if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<Entry>) -> Option<Vec<Entry>> {
        self.0.insert(name.into(), entries)
    }

    /// Add an empty collection under `name` if none exists. Returns whether one was added.
    pub fn ensure(&mut self, name: &str) -> bool {
        if self.0.contains_key(name) {
            false
        } else {
            self.0.insert(name.to_string(), Vec::new());
            true
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<Entry>)> for CollectionStore {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Entry>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How a block consumes one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl CollectionRef {
    pub fn limited(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    /// Fill in `limit` when the author left it unspecified.
    pub fn or_limit(self, default: usize) -> Self {
        Self {
            limit: Some(self.limit.unwrap_or(default)),
        }
    }
}

/// Collection references of a block, keyed by collection name.
pub type CollectionRefs = IndexMap<String, CollectionRef>;

/// Resolved collection slices, keyed by collection name.
pub type ResolvedCollections<'a> = IndexMap<String, &'a [Entry]>;

/// Resolve every referenced collection against the store.
///
/// Absent collections are logged and omitted. A `limit` keeps the first
/// `limit` entries in stored order.
pub fn resolve_collections<'a>(
    refs: &CollectionRefs,
    store: &'a CollectionStore,
) -> ResolvedCollections<'a> {
    let mut resolved = ResolvedCollections::with_capacity(refs.len());

    for (name, reference) in refs {
        let Some(entries) = store.get(name) else {
            tracing::warn!(collection = %name, "collection not found in store, omitting");
            continue;
        };
        let take = reference.limit.map_or(entries.len(), |l| l.min(entries.len()));
        resolved.insert(name.clone(), &entries[..take]);
    }

    resolved
}

/// A pointer to one entry: `{contentType, slug}` or legacy `{ [contentType]: {slug} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", rename_all = "camelCase")]
pub struct EntryRef {
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl EntryRef {
    pub fn new(content_type: impl Into<String>, slug: Option<String>) -> Self {
        Self {
            content_type: content_type.into(),
            slug,
        }
    }

    /// Parse either reference shape from JSON.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        if let Some(content_type) = object.get("contentType") {
            let content_type = content_type.as_str()?;
            let slug = object.get("slug").and_then(Value::as_str).map(str::to_string);
            return Some(Self::new(content_type, slug));
        }

        // Legacy shape: a single key naming the content type.
        if object.len() == 1 {
            let (content_type, inner) = object.iter().next()?;
            let slug = match inner {
                Value::Object(inner) => inner.get("slug").and_then(Value::as_str).map(str::to_string),
                Value::Null => None,
                _ => return None,
            };
            return Some(Self::new(content_type, slug));
        }

        None
    }

    /// The slug when it is present and non-empty.
    pub fn effective_slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

impl TryFrom<Value> for EntryRef {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value).ok_or_else(|| format!("not an entry reference: {}", value))
    }
}

impl FromStr for EntryRef {
    type Err = String;

    /// `contentType` or `contentType:slug`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (content_type, slug) = match s.split_once(':') {
            Some((ct, slug)) => (ct, Some(slug.to_string())),
            None => (s, None),
        };
        if content_type.is_empty() {
            return Err(format!("invalid entry reference '{}', expected 'contentType[:slug]'", s));
        }
        Ok(Self::new(content_type, slug))
    }
}

/// Resolve a single entry.
///
/// An empty or absent slug selects the first entry of the collection;
/// otherwise the slug must match exactly. Any miss returns `None`.
pub fn resolve_entry_reference<'a>(
    reference: &EntryRef,
    store: &'a CollectionStore,
) -> Option<&'a Entry> {
    let Some(entries) = store.get(&reference.content_type) else {
        tracing::warn!(content_type = %reference.content_type, "no collection for content type");
        return None;
    };

    let found = match reference.effective_slug() {
        None => entries.first(),
        Some(slug) => entries.iter().find(|entry| entry.slug() == Some(slug)),
    };

    if found.is_none() {
        tracing::warn!(
            content_type = %reference.content_type,
            slug = reference.slug.as_deref().unwrap_or_default(),
            "entry not found, falling back to defaults"
        );
    }
    found
}

/// The `content` prop handed to a rendered block.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<&'a Entry>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub collections: ResolvedCollections<'a>,
}

impl<'a> PageContent<'a> {
    /// Build page content for one block from its defaults and the store.
    pub fn hydrate(
        data: &Value,
        refs: &CollectionRefs,
        store: &'a CollectionStore,
        entry: Option<&EntryRef>,
    ) -> Self {
        Self {
            entry: entry.and_then(|r| resolve_entry_reference(r, store)),
            data: data.clone(),
            collections: resolve_collections(refs, store),
        }
    }
}
