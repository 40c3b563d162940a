//! Pre-computed analysis of the registry IR.

use std::collections::HashSet;

use blox_ir::RegistryIR;
use indexmap::IndexMap;
use serde::Serialize;

/// Analysis results shared by the generator and the CLI reports.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedData {
    /// Every block name, for orphan detection.
    pub block_names: HashSet<String>,
    pub block_count: usize,
    pub body_count: usize,
    pub layout_count: usize,
    pub detail_count: usize,
    /// Block count per module, main first.
    pub module_counts: IndexMap<String, usize>,
    /// Registry-wide npm dependencies.
    pub dependencies: Vec<String>,
    /// Referenced collections absent from the store.
    pub missing_collections: Vec<String>,
}

impl ComputedData {
    pub fn from_ir(ir: &RegistryIR) -> Self {
        let mut module_counts = IndexMap::new();
        for block in &ir.blocks {
            *module_counts.entry(block.id.module.clone()).or_insert(0) += 1;
        }

        let layout_count = ir.blocks.iter().filter(|b| b.is_layout()).count();

        Self {
            block_names: ir.blocks.iter().map(|b| b.name.clone()).collect(),
            block_count: ir.blocks.len(),
            body_count: ir.blocks.len() - layout_count,
            layout_count,
            detail_count: ir.blocks.iter().filter(|b| b.is_detail()).count(),
            module_counts,
            dependencies: ir.dependencies(),
            missing_collections: ir
                .missing_collections()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn has_block(&self, name: &str) -> bool {
        self.block_names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use blox_manifest::ProjectConfig;

    use super::*;
    use crate::{expansion::expand, testing::blog_config};

    #[test]
    fn test_counts() {
        let config = blog_config().load();
        let computed = ComputedData::from_ir(&expand(&config, &ProjectConfig::default()));

        assert_eq!(computed.block_count, 7);
        assert_eq!(computed.body_count, 6);
        assert_eq!(computed.layout_count, 1);
        assert_eq!(computed.detail_count, 2);
        assert_eq!(computed.module_counts["main"], 7);
        assert!(computed.has_block("main-footer-footer1"));
        assert_eq!(computed.missing_collections, vec!["faq"]);
        assert_eq!(computed.dependencies, vec!["react", "lucide-react"]);
    }
}
