//! Generated registry on disk: artifacts, consistency, ejection and cleanup.

use std::{collections::BTreeSet, fs, path::Path};

use blox_codegen::{
    pipeline::Pipeline,
    testing::{ConfigDir, blog_config, hero_config},
};
use blox_codegen_react::{
    Generator, ReactGenerator,
    files::GENERATED_HEADER,
    strategy::{ComponentStrategy, FallbackStrategy},
};
use blox_core::{CollectionStore, EntryRef, PageContent, ResolvedCollections};
use blox_ir::{
    Block, DesignSystemIR,
    artifact::{BlocksIndex, ContentTypesJson, RegistryJson},
};
use blox_manifest::ProjectConfig;
use eyre::{Result, bail};
use serde::de::DeserializeOwned;
use tempfile::TempDir;

fn generator(dir: ConfigDir) -> ReactGenerator {
    let ctx = Pipeline::new()
        .run(dir.load(), ProjectConfig::default())
        .expect("pipeline failed");
    ReactGenerator::from_context(ctx).expect("context is complete")
}

fn read_json<T: DeserializeOwned>(root: &Path, file: &str) -> T {
    let content = fs::read_to_string(root.join(file)).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Block names listed in `index.ts`, in file order.
fn index_ts_keys(root: &Path) -> Vec<String> {
    let content = fs::read_to_string(root.join("components/blocks/index.ts")).unwrap();
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix('"'))
        .filter_map(|rest| rest.split_once("\":"))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[test]
fn test_hero_produces_one_block_per_design_system() {
    let out = TempDir::new().unwrap();
    generator(hero_config()).generate(out.path()).unwrap();

    let registry: RegistryJson = read_json(out.path(), "registry.json");
    let names: Vec<&str> = registry.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["main-hero-cover1-standard", "main-hero-cover1-bold"]);
    assert_eq!(registry.name, "acme-site");
    assert_eq!(registry.version, "0.1.0");

    let bold = registry.block("main-hero-cover1-bold").unwrap();
    assert_eq!(bold.id.design_system.as_deref(), Some("bold"));
    assert_eq!(bold.files, vec!["components/blocks/main-hero-cover1-bold.tsx"]);
    assert_eq!(bold.lucide_icons, vec!["ArrowRight"]);

    let index: BlocksIndex = read_json(out.path(), "blocks-index.json");
    let entry = &index["main-hero-cover1-standard"];
    let fields: Vec<&str> = entry.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["heading", "blurb"]);
    assert!(entry.fields[0].required);
    assert_eq!(entry.data["heading"], "Welcome");

    for name in names {
        assert!(out.path().join(format!("components/blocks/{}.tsx", name)).exists());
    }
}

#[test]
fn test_block_counts() {
    let out = TempDir::new().unwrap();
    let result = generator(blog_config()).generate(out.path()).unwrap();

    let registry: RegistryJson = read_json(out.path(), "registry.json");
    // hero: 1 template x 2 design systems, blog: 2 x 2, footer: layout, 1
    assert_eq!(registry.blocks.len(), 7);
    assert_eq!(
        registry.blocks.iter().filter(|b| b.id.design_system.is_none()).count(),
        1
    );
    // 4 indexes, 7 components, index.ts
    assert_eq!(result.written.len(), 12);
    assert!(result.skipped.is_empty());
    assert!(result.fallbacks.is_empty());
}

#[test]
fn test_artifact_keys_are_identical() {
    let out = TempDir::new().unwrap();
    generator(blog_config()).generate(out.path()).unwrap();

    let registry: RegistryJson = read_json(out.path(), "registry.json");
    let index: BlocksIndex = read_json(out.path(), "blocks-index.json");

    let registry_keys: Vec<String> = registry.blocks.iter().map(|b| b.name.clone()).collect();
    let index_keys: Vec<String> = index.keys().cloned().collect();

    assert_eq!(registry_keys, index_keys);
    assert_eq!(registry_keys, index_ts_keys(out.path()));
}

#[test]
fn test_every_referenced_collection_is_emitted() {
    let out = TempDir::new().unwrap();
    generator(blog_config()).generate(out.path()).unwrap();

    let index: BlocksIndex = read_json(out.path(), "blocks-index.json");
    let data: CollectionStore = read_json(out.path(), "collections-data.json");

    let referenced: BTreeSet<&str> = index
        .values()
        .flat_map(|entry| {
            entry
                .collections
                .keys()
                .map(String::as_str)
                .chain(entry.content_type.as_deref())
        })
        .collect();

    assert_eq!(referenced, BTreeSet::from(["blogItem", "faq"]));
    for name in referenced {
        assert!(data.contains(name), "{} missing from collections-data.json", name);
    }
    assert_eq!(data.get("faq"), Some(&[][..]));
    assert_eq!(data.get("blogItem").map(<[_]>::len), Some(3));
}

#[test]
fn test_content_types_artifact() {
    let out = TempDir::new().unwrap();
    generator(blog_config()).generate(out.path()).unwrap();

    let content_types: ContentTypesJson = read_json(out.path(), "content-types.json");
    let blog_item = &content_types["blogItem"];
    assert_eq!(blog_item.title, "Blog item");
    assert_eq!(blog_item.data_position, "post");
    assert_eq!(blog_item.fields.len(), 2);
}

#[test]
fn test_render_time_resolution_from_artifacts() {
    let out = TempDir::new().unwrap();
    generator(blog_config()).generate(out.path()).unwrap();

    let index: BlocksIndex = read_json(out.path(), "blocks-index.json");
    let store: CollectionStore = read_json(out.path(), "collections-data.json");
    let block = &index["main-blog-post1-standard"];
    let data = serde_json::Value::Object(block.data.clone());

    let hit = EntryRef::new("blogItem", Some("second-post".into()));
    let content = PageContent::hydrate(&data, &block.collections, &store, Some(&hit));
    assert_eq!(content.entry.and_then(|e| e.slug()), Some("second-post"));
    assert_eq!(content.collections["blogItem"].len(), 2);
    assert!(content.collections["faq"].is_empty());

    let miss = EntryRef::new("blogItem", Some("c".into()));
    let content = PageContent::hydrate(&data, &block.collections, &store, Some(&miss));
    assert!(content.entry.is_none());
}

#[test]
fn test_ejected_component_is_preserved() {
    let out = TempDir::new().unwrap();
    let generator = generator(hero_config());
    generator.generate(out.path()).unwrap();

    let path = out.path().join("components/blocks/main-hero-cover1-bold.tsx");
    fs::write(&path, "export default function Custom() { return null; }\n").unwrap();

    let result = generator.generate(out.path()).unwrap();
    assert_eq!(result.skipped, vec!["components/blocks/main-hero-cover1-bold.tsx"]);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "export default function Custom() { return null; }\n"
    );

    let standard =
        fs::read_to_string(out.path().join("components/blocks/main-hero-cover1-standard.tsx"))
            .unwrap();
    assert!(standard.starts_with(GENERATED_HEADER));
}

#[test]
fn test_clean_removes_generated_orphans_only() {
    let out = TempDir::new().unwrap();
    let generator = generator(hero_config());
    generator.generate(out.path()).unwrap();

    let blocks = out.path().join("components/blocks");
    fs::write(
        blocks.join("main-gallery-grid9-bold.tsx"),
        format!("{}\nexport default function Old() {{}}\n", GENERATED_HEADER),
    )
    .unwrap();
    fs::write(blocks.join("main-custom-cover1-bold.tsx"), "// mine\n").unwrap();

    let result = generator.generate(out.path()).unwrap();
    assert_eq!(
        result.orphans,
        vec![
            "components/blocks/main-custom-cover1-bold.tsx",
            "components/blocks/main-gallery-grid9-bold.tsx",
        ]
    );

    let preview = generator.preview_clean(out.path()).unwrap();
    assert_eq!(preview.deleted, vec!["components/blocks/main-gallery-grid9-bold.tsx"]);
    assert!(blocks.join("main-gallery-grid9-bold.tsx").exists());

    let cleaned = generator.clean(out.path()).unwrap();
    assert_eq!(cleaned.deleted, vec!["components/blocks/main-gallery-grid9-bold.tsx"]);
    assert_eq!(cleaned.skipped, vec!["components/blocks/main-custom-cover1-bold.tsx"]);
    assert!(!blocks.join("main-gallery-grid9-bold.tsx").exists());
    assert!(blocks.join("main-custom-cover1-bold.tsx").exists());
    assert!(blocks.join("main-hero-cover1-bold.tsx").exists());
}

#[test]
fn test_colliding_names_abort_before_output() {
    let dir = ConfigDir::new()
        .file(
            "sections.json",
            r#"[
  { "name": "hero banner", "templates": ["cover1"] },
  { "name": "hero-banner", "templates": ["cover1"] }
]"#,
        )
        .file("templates.json", r#"[{ "name": "cover1", "category": "covers" }]"#);

    let (ctx, result) = Pipeline::new().check(dir.load(), ProjectConfig::default());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("validation failed"), "{}", err);
    assert!(ctx.ir.is_none());

    let collision = ctx.errors().next().unwrap();
    assert!(collision.message.contains("main-hero-banner-cover1-standard"));
    assert!(collision.message.contains("section 'hero banner'"));
    assert!(collision.message.contains("section 'hero-banner'"));
    assert!(ReactGenerator::from_context(ctx).is_err());
}

struct Unreachable;

impl ComponentStrategy for Unreachable {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    fn generate(
        &self,
        _block: &Block,
        _design_system: Option<&DesignSystemIR>,
        _collections: &ResolvedCollections<'_>,
    ) -> Result<String> {
        bail!("connection refused")
    }
}

#[test]
fn test_failing_strategy_falls_back_per_block() {
    let out = TempDir::new().unwrap();
    let result = generator(hero_config())
        .with_strategy(FallbackStrategy::new(Box::new(Unreachable)))
        .generate(out.path())
        .unwrap();

    assert_eq!(
        result.fallbacks,
        vec!["main-hero-cover1-standard", "main-hero-cover1-bold"]
    );

    let registry: RegistryJson = read_json(out.path(), "registry.json");
    assert_eq!(registry.blocks.len(), 2);
    let bold =
        fs::read_to_string(out.path().join("components/blocks/main-hero-cover1-bold.tsx")).unwrap();
    assert!(bold.contains("export default function MainHeroCover1Bold("));
}
