//! List command report data structures.

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ListReport {
    pub registry_name: String,
    /// Blocks grouped by module, in expansion order.
    pub modules: Vec<(String, Vec<ListedBlock>)>,
}

#[derive(Debug)]
pub struct ListedBlock {
    pub name: String,
    pub category: &'static str,
    pub layout: bool,
    pub detail: bool,
}

impl ListedBlock {
    fn label(&self) -> String {
        let mut tags = vec![self.category];
        if self.layout {
            tags.push("layout");
        }
        if self.detail {
            tags.push("detail");
        }
        format!("{} ({})", self.name, tags.join(", "))
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.modules.is_empty() {
            out.preformatted("No blocks defined");
            return;
        }

        out.key_value("Registry", &self.registry_name);
        for (module, blocks) in &self.modules {
            out.newline();
            out.section(&format!("{} ({})", module, blocks.len()));
            for block in blocks {
                out.list_item(&block.label());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_block_labels() {
        let report = ListReport {
            registry_name: "acme-site".into(),
            modules: vec![(
                "main".into(),
                vec![
                    ListedBlock {
                        name: "main-blog-post1-bold".into(),
                        category: "blocks",
                        layout: false,
                        detail: true,
                    },
                    ListedBlock {
                        name: "main-footer-footer1".into(),
                        category: "default",
                        layout: true,
                        detail: false,
                    },
                ],
            )],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Registry: acme-site",
                "",
                "main (2):",
                "  - main-blog-post1-bold (blocks, detail)",
                "  - main-footer-footer1 (default, layout)",
            ]
        );
    }
}
