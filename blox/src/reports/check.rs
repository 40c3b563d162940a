//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from config validation.
#[derive(Debug)]
pub struct CheckReport {
    /// The config directory that was checked.
    pub config_dir: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub section_count: usize,
    pub template_count: usize,
    pub plugin_count: usize,
    /// Blocks the config expands to, when expansion ran.
    pub block_count: Option<usize>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_dir.display()));
        out.newline();
        out.key_value_indented("sections", &self.section_count.to_string());
        out.key_value_indented("templates", &self.template_count.to_string());
        out.key_value_indented("plugins", &self.plugin_count.to_string());
        if let Some(blocks) = self.block_count {
            out.key_value_indented("blocks", &blocks.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(errors: Vec<String>) -> CheckReport {
        CheckReport {
            config_dir: PathBuf::from("data"),
            errors,
            warnings: vec!["collection 'faq' is empty".into()],
            infos: vec![],
            section_count: 3,
            template_count: 4,
            plugin_count: 0,
            block_count: Some(7),
        }
    }

    #[test]
    fn test_valid_report_prints_counts() {
        let mut out = RecordingOutput::default();
        report(vec![]).render(&mut out);
        let text = out.text();

        assert!(text.contains("warning: collection 'faq' is empty"));
        assert!(text.contains("✓ data is valid"));
        assert!(text.contains("  blocks: 7"));
    }

    #[test]
    fn test_invalid_report_lists_errors_only() {
        let mut out = RecordingOutput::default();
        report(vec!["duplicate block name".into()]).render(&mut out);
        let text = out.text();

        assert!(text.contains("warning: error: duplicate block name"));
        assert!(!text.contains("is valid"));
    }
}
