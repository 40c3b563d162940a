//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from cleaning orphaned components.
#[derive(Debug)]
pub struct CleanReport {
    pub dry_run: bool,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    /// Deleted components (or those that would be deleted).
    pub deleted: Vec<String>,
    /// Orphaned components kept because the user edited them.
    pub skipped: Vec<String>,
}

impl CleanReport {
    pub fn has_deletions(&self) -> bool {
        !self.deleted.is_empty()
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.has_deletions() && !self.has_skipped() {
            out.preformatted("No orphaned components found.");
            return;
        }

        if self.has_deletions() {
            if self.dry_run {
                out.section("Would delete");
            } else {
                out.section("Deleted");
            }
            for path in &self.deleted {
                out.removed_item(path);
            }
        }

        if self.has_skipped() {
            out.newline();
            out.section("Skipped (modified by user)");
            for path in &self.skipped {
                out.list_item(&format!("! {}", path));
            }
        }
    }
}
