//! Snapshot tests for generated component sources.
//!
//! Run `cargo insta review` to update snapshots after intentional changes.

use blox_codegen::{
    pipeline::Pipeline,
    testing::{ConfigDir, blog_config, hero_config},
};
use blox_codegen_react::{Generator, ReactGenerator};
use blox_manifest::ProjectConfig;

/// Preview every file of a config, sorted by path.
fn generate_files(dir: ConfigDir) -> Vec<(String, String)> {
    let ctx = Pipeline::new()
        .run(dir.load(), ProjectConfig::default())
        .expect("pipeline failed");
    let generator = ReactGenerator::from_context(ctx).expect("context is complete");
    let files = generator.preview().expect("preview failed");

    let mut result: Vec<(String, String)> =
        files.into_iter().map(|f| (f.path, f.content)).collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_hero_standard_component() {
    let files = generate_files(hero_config());
    let component = get_file(&files, "components/blocks/main-hero-cover1-standard.tsx")
        .expect("component not found");
    insta::assert_snapshot!("hero_standard_component", component);
}

#[test]
fn test_hero_bold_component() {
    let files = generate_files(hero_config());
    let component = get_file(&files, "components/blocks/main-hero-cover1-bold.tsx")
        .expect("component not found");
    insta::assert_snapshot!("hero_bold_component", component);
}

#[test]
fn test_hero_index_ts() {
    let files = generate_files(hero_config());
    let index = get_file(&files, "components/blocks/index.ts").expect("index.ts not found");
    insta::assert_snapshot!("hero_index_ts", index);
}

#[test]
fn test_preview_lists_every_file() {
    let files = generate_files(blog_config());
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();

    // 4 indexes, 7 components, index.ts
    assert_eq!(paths.len(), 12, "{:#?}", paths);
    for artifact in [
        "registry.json",
        "blocks-index.json",
        "collections-data.json",
        "content-types.json",
    ] {
        assert!(paths.contains(&artifact), "missing {}", artifact);
    }
}

#[test]
fn test_master_component_lists_collections() {
    let files = generate_files(blog_config());
    let cards = get_file(&files, "components/blocks/main-blog-cards1-bold.tsx").unwrap();

    assert!(cards.contains("export default function MainBlogCards1Bold("));
    assert!(cards.contains("ctaLabel?: string;"));
    assert!(cards.contains("\"heading\": \"From the blog\""));
    assert!(cards.contains("{(collections[\"blogItem\"] ?? []).map((item) => ("));
    assert!(cards.contains("{(collections[\"faq\"] ?? []).map((item) => ("));
    // Build-time resolution keeps the first two posts only.
    assert!(cards.contains("\"slug\": \"second-post\""));
    assert!(!cards.contains("\"slug\": \"third-post\""));
    assert!(cards.contains("\"faq\": []"));
}

#[test]
fn test_detail_component_takes_entry() {
    let files = generate_files(blog_config());
    let post = get_file(&files, "components/blocks/main-blog-post1-standard.tsx").unwrap();

    assert!(post.contains(
        "content: { entry?: CollectionItem; data?: Partial<MainBlogPost1StandardData>; collections?: Record<string, CollectionItem[]> };"
    ));
    assert!(post.contains("const entry = content.entry ?? sampleEntry;"));
    assert!(post.contains("defaultCollections[\"blogItem\"]?.[0]"));
    assert!(post.contains("<h1 className=\"text-3xl font-bold\">{entry.title}</h1>"));
    assert!(post.contains("<p>{entry.body}</p>"));
    // Detail blocks render one entry, not lists.
    assert!(!post.contains(".map((item)"));
}

#[test]
fn test_layout_component_has_no_design_system() {
    let files = generate_files(blog_config());
    let footer = get_file(&files, "components/blocks/main-footer-footer1.tsx").unwrap();

    assert!(footer.contains("data-block=\"main-footer-footer1\""));
    assert!(!footer.contains("data-design-system"));
    assert!(!footer.contains("lucide-react"));
    assert!(footer.contains("export interface MainFooterFooter1Data {}"));
}
