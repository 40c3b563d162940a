//! `components/blocks/<block-name>.tsx`

use std::path::{Path, PathBuf};

use blox_core::{FileRules, GeneratedFile};
use blox_ir::COMPONENTS_DIR;

/// First line of every generated source. Removing it ejects the file:
/// later runs leave it alone.
pub const GENERATED_HEADER: &str = "// @generated by blox. Remove this line to keep local edits.";

/// One block's component source.
pub struct ComponentTsx {
    block_name: String,
    source: String,
}

impl ComponentTsx {
    pub fn new(block_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            block_name: block_name.into(),
            source: source.into(),
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> String {
        format!("{}/{}.tsx", COMPONENTS_DIR, self.block_name)
    }
}

impl GeneratedFile for ComponentTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(COMPONENTS_DIR)
            .join(format!("{}.tsx", self.block_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.source.clone()
    }
}
