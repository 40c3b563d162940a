//! React/Next.js registry generator.

use std::{
    fs,
    path::{Path, PathBuf},
};

use blox_codegen::{
    CleanResult, ComputedData, GenerateResult, Generator, PreviewFile,
    pipeline::CompilationContext,
};
use blox_core::{
    CollectionRef, CollectionStore, FileRules, GeneratedFile, ResolvedCollections, WriteResult,
    resolve_collections,
};
use blox_ir::{
    Block, COMPONENTS_DIR, RegistryIR,
    artifact::{
        self, BLOCKS_INDEX_FILE, COLLECTIONS_DATA_FILE, CONTENT_TYPES_FILE, REGISTRY_FILE,
        RegistryJson,
    },
};
use eyre::{Result, WrapErr};
use rayon::prelude::*;

use crate::{
    files::{ComponentTsx, GENERATED_HEADER, IndexTs, JsonArtifact},
    strategy::FallbackStrategy,
};

/// Writes the JSON indexes, one component per block and the block map.
pub struct ReactGenerator {
    ir: RegistryIR,
    computed: ComputedData,
    /// The store as emitted: every referenced collection present.
    collections: CollectionStore,
    strategy: FallbackStrategy,
}

/// A rendered component and whether it came from the fallback.
struct Component {
    block: String,
    file: ComponentTsx,
    fallback: bool,
}

impl Generator for ReactGenerator {
    fn target(&self) -> &'static str {
        "react"
    }

    fn file_extension(&self) -> &'static str {
        "tsx"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }

    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        self.clean_orphans(output_dir, false)
    }

    fn preview_clean(&self, output_dir: &Path) -> Result<CleanResult> {
        self.clean_orphans(output_dir, true)
    }
}

impl ReactGenerator {
    /// A generator using the template strategy.
    pub fn new(ir: RegistryIR) -> Self {
        let computed = ComputedData::from_ir(&ir);
        Self::with_computed(ir, computed)
    }

    /// Take the IR and analysis out of a finished pipeline run.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let ir = ctx.take_ir()?;
        let computed = ctx.take_computed()?;
        Ok(Self::with_computed(ir, computed))
    }

    fn with_computed(ir: RegistryIR, computed: ComputedData) -> Self {
        Self {
            collections: ir.collections_data(),
            ir,
            computed,
            strategy: FallbackStrategy::template(),
        }
    }

    pub fn with_strategy(mut self, strategy: FallbackStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn ir(&self) -> &RegistryIR {
        &self.ir
    }

    pub fn computed(&self) -> &ComputedData {
        &self.computed
    }

    pub fn strategy(&self) -> &FallbackStrategy {
        &self.strategy
    }

    /// Collections a block's component is generated against: its own
    /// references plus the first entry of its detail content type.
    pub fn build_collections(&self, block: &Block) -> ResolvedCollections<'_> {
        let mut refs = block.collections.clone();
        if let Some(content_type) = &block.content_type {
            refs.entry(content_type.clone())
                .or_insert(CollectionRef::limited(1));
        }
        resolve_collections(&refs, &self.collections)
    }

    fn artifacts(&self) -> Result<Vec<JsonArtifact>> {
        Ok(vec![
            JsonArtifact::new(REGISTRY_FILE, &RegistryJson::from_ir(&self.ir))?,
            JsonArtifact::new(BLOCKS_INDEX_FILE, &artifact::blocks_index(&self.ir))?,
            JsonArtifact::new(COLLECTIONS_DATA_FILE, &self.collections)?,
            JsonArtifact::new(CONTENT_TYPES_FILE, &artifact::content_types(&self.ir))?,
        ])
    }

    fn index(&self) -> IndexTs {
        IndexTs::new(
            self.ir
                .blocks
                .iter()
                .map(|block| (block.name.clone(), block.component_name()))
                .collect(),
        )
    }

    fn components(&self) -> Result<Vec<Component>> {
        self.ir
            .blocks
            .par_iter()
            .map(|block| {
                let design_system = block
                    .id
                    .design_system
                    .as_deref()
                    .and_then(|name| self.ir.design_system(name));
                let collections = self.build_collections(block);

                let outcome = self
                    .strategy
                    .generate_or_fallback(block, design_system, &collections)
                    .wrap_err_with(|| format!("failed to generate component for {}", block.id))?;

                Ok(Component {
                    block: block.name.clone(),
                    fallback: outcome.is_fallback(),
                    file: ComponentTsx::new(&block.name, outcome.into_source()),
                })
            })
            .collect()
    }

    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        let mut files: Vec<PreviewFile> = self
            .artifacts()?
            .iter()
            .map(|artifact| PreviewFile {
                path: artifact.file().to_string(),
                content: artifact.render(),
            })
            .collect();

        for component in self.components()? {
            files.push(PreviewFile {
                path: component.file.relative_path(),
                content: component.file.rules().apply(&component.file.render()),
            });
        }

        let index = self.index();
        files.push(PreviewFile {
            path: format!("{}/index.ts", COMPONENTS_DIR),
            content: index.rules().apply(&index.render()),
        });

        Ok(files)
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for artifact in self.artifacts()? {
            artifact.write(output_dir)?;
            tracing::debug!(file = artifact.file(), "wrote artifact");
            result.written.push(artifact.file().to_string());
        }

        let components = self.components()?;
        let writes: Vec<WriteResult> = components
            .par_iter()
            .map(|component| component.file.write(output_dir))
            .collect::<Result<_>>()?;

        for (component, write) in components.iter().zip(writes) {
            let path = component.file.relative_path();
            match write {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => {
                    tracing::info!(path = %path, "component was edited by hand, keeping it");
                    result.skipped.push(path);
                }
            }
            if component.fallback {
                result.fallbacks.push(component.block.clone());
            }
        }

        self.index().write(output_dir)?;
        result.written.push(format!("{}/index.ts", COMPONENTS_DIR));

        result.orphans = self
            .orphans(output_dir)?
            .into_iter()
            .map(|(rel, _)| rel)
            .collect();

        Ok(result)
    }

    /// Component files on disk that no block produces, as relative and
    /// absolute paths, sorted.
    fn orphans(&self, output_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        let dir = output_dir.join(COMPONENTS_DIR);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut orphans = Vec::new();
        for entry in fs::read_dir(&dir).wrap_err_with(|| format!("failed to read {}", dir.display()))? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("tsx") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !self.computed.has_block(stem) {
                orphans.push((format!("{}/{}.tsx", COMPONENTS_DIR, stem), path.clone()));
            }
        }
        orphans.sort();
        Ok(orphans)
    }

    fn clean_orphans(&self, output_dir: &Path, dry_run: bool) -> Result<CleanResult> {
        let rules = FileRules::generated(GENERATED_HEADER);
        let mut result = CleanResult::default();

        for (rel, path) in self.orphans(output_dir)? {
            if rules.is_ejected(&path) {
                result.skipped.push(rel);
                continue;
            }
            if !dry_run {
                fs::remove_file(&path)
                    .wrap_err_with(|| format!("failed to remove {}", path.display()))?;
                tracing::debug!(path = %rel, "removed orphaned component");
            }
            result.deleted.push(rel);
        }

        Ok(result)
    }
}
