//! `components/blocks/index.ts`, the name → component lookup map.

use std::path::{Path, PathBuf};

use blox_core::{FileRules, GeneratedFile, Overwrite};
use blox_ir::COMPONENTS_DIR;

use super::GENERATED_HEADER;
use crate::{
    ast::{Const, Export, Import},
    code_file::CodeFile,
};

/// Maps every registry block name to its default-exported component.
pub struct IndexTs {
    /// `(block name, component name)` in registry order.
    entries: Vec<(String, String)>,
}

impl IndexTs {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(COMPONENTS_DIR).join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
            header: Some(GENERATED_HEADER),
        }
    }

    fn render(&self) -> String {
        let mut map = String::from("{\n");
        for (block, component) in &self.entries {
            map.push_str(&format!("  \"{}\": {},\n", block, component));
        }
        map.push('}');

        CodeFile::new()
            .import(Import::new("react").named("ComponentType").type_only())
            .imports(
                self.entries
                    .iter()
                    .map(|(block, component)| Import::new(format!("./{}", block)).default(component)),
            )
            .add(Const::new("blocks", map).ty("Record<string, ComponentType<any>>"))
            .export(Export::new().default("blocks"))
            .render()
    }
}
