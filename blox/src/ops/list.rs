//! List operation - expanded blocks grouped by module.

use blox_codegen::pipeline::Pipeline;
use blox_manifest::{Config, ProjectConfig};
use eyre::Result;

use super::run_pipeline;
use crate::reports::{ListReport, ListedBlock};

pub fn list(config: Config, project: ProjectConfig) -> Result<ListReport> {
    let mut ctx = run_pipeline(Pipeline::new(), config, project)?;
    let ir = ctx.take_ir()?;

    let mut report = ListReport {
        registry_name: ir.meta.name.clone(),
        modules: Vec::new(),
    };

    for block in &ir.blocks {
        let listed = ListedBlock {
            name: block.name.clone(),
            category: block.category.as_str(),
            layout: block.is_layout(),
            detail: block.is_detail(),
        };
        match report.modules.last_mut() {
            Some((module, blocks)) if *module == block.id.module => blocks.push(listed),
            _ => report.modules.push((block.id.module.clone(), vec![listed])),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use blox_codegen::testing::blog_config;

    use super::*;

    #[test]
    fn test_list_groups_blocks_by_module() {
        let report = list(blog_config().load(), ProjectConfig::default()).unwrap();

        assert_eq!(report.registry_name, "acme-site");
        assert_eq!(report.modules.len(), 1);

        let (module, blocks) = &report.modules[0];
        assert_eq!(module, "main");
        assert_eq!(blocks.len(), 7);
        assert!(blocks.iter().any(|b| b.name == "main-blog-post1-bold" && b.detail));
        assert!(blocks.iter().any(|b| b.name == "main-footer-footer1" && b.layout));
    }
}
