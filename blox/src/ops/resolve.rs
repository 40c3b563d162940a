//! Resolve operation - render-time content for one block.
//!
//! Reads only the emitted artifacts, never the config directory, so it sees
//! exactly what a deployed site sees.

use std::{fs, path::Path};

use blox_core::{CollectionStore, EntryRef, PageContent};
use blox_ir::artifact::{BLOCKS_INDEX_FILE, BlocksIndex, COLLECTIONS_DATA_FILE};
use eyre::{Context, Result, eyre};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::reports::ResolveReport;

/// Hydrate `block` from the artifacts in `artifacts_dir`.
///
/// A detail block without an explicit `entry` shows the first entry of its
/// content type.
pub fn resolve(artifacts_dir: &Path, block: &str, entry: Option<EntryRef>) -> Result<ResolveReport> {
    let index: BlocksIndex = read_artifact(&artifacts_dir.join(BLOCKS_INDEX_FILE))?;
    let store: CollectionStore = read_artifact(&artifacts_dir.join(COLLECTIONS_DATA_FILE))?;

    let indexed = index.get(block).ok_or_else(|| {
        eyre!(
            "block '{}' is not in {}",
            block,
            artifacts_dir.join(BLOCKS_INDEX_FILE).display()
        )
    })?;

    let entry = entry.or_else(|| {
        indexed
            .content_type
            .as_ref()
            .map(|ct| EntryRef::new(ct.clone(), None))
    });

    let data = Value::Object(indexed.data.clone());
    let content = PageContent::hydrate(&data, &indexed.collections, &store, entry.as_ref());

    Ok(ResolveReport {
        block: block.to_string(),
        entry_found: content.entry.is_some(),
        entry,
        content: serde_json::to_string_pretty(&content)?,
    })
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}; run `blox bake` first", path.display()))?;
    serde_json::from_str(&json).wrap_err_with(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use blox_codegen::testing::blog_config;
    use blox_manifest::ProjectConfig;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::bake::{BakeOptions, bake};

    fn baked() -> TempDir {
        let out = TempDir::new().unwrap();
        let opts = BakeOptions {
            output_dir: out.path(),
            dry_run: false,
            ai: false,
            visualize: false,
        };
        bake(blog_config().load(), ProjectConfig::default(), opts).unwrap();
        out
    }

    fn content(report: &ResolveReport) -> Value {
        serde_json::from_str(&report.content).unwrap()
    }

    #[test]
    fn test_resolve_master_block_limits_collection() {
        let out = baked();
        let report = resolve(out.path(), "main-blog-cards1-bold", None).unwrap();
        let content = content(&report);

        assert!(report.entry.is_none());
        assert_eq!(content["data"]["heading"], "From the blog");
        assert_eq!(content["collections"]["blogItem"].as_array().unwrap().len(), 2);
        assert_eq!(content["collections"]["faq"], serde_json::json!([]));
        assert!(content.get("entry").is_none());
    }

    #[test]
    fn test_resolve_detail_defaults_to_first_entry() {
        let out = baked();
        let report = resolve(out.path(), "main-blog-post1-bold", None).unwrap();

        assert!(report.entry_found);
        assert_eq!(content(&report)["entry"]["slug"], "first-post");
    }

    #[test]
    fn test_resolve_detail_by_slug_and_miss() {
        let out = baked();
        let hit = resolve(
            out.path(),
            "main-blog-post1-bold",
            Some("blogItem:third-post".parse().unwrap()),
        )
        .unwrap();
        assert_eq!(content(&hit)["entry"]["title"], "Third post");

        let miss = resolve(
            out.path(),
            "main-blog-post1-bold",
            Some("blogItem:nope".parse().unwrap()),
        )
        .unwrap();
        assert!(!miss.entry_found);
        assert!(content(&miss).get("entry").is_none());
    }

    #[test]
    fn test_resolve_unknown_block() {
        let out = baked();
        let err = resolve(out.path(), "main-nope-cover1-bold", None).unwrap_err();
        assert!(err.to_string().contains("main-nope-cover1-bold"));
    }

    #[test]
    fn test_resolve_without_artifacts() {
        let dir = TempDir::new().unwrap();
        let err = resolve(dir.path(), "main-hero-cover1-bold", None).unwrap_err();
        assert!(err.to_string().contains("blox bake"), "{}", err);
    }
}
