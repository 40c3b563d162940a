//! Resolve command report data structures.

use blox_core::EntryRef;

use super::output::{Output, Report};

/// Hydrated page content of one block.
#[derive(Debug)]
pub struct ResolveReport {
    pub block: String,
    /// The entry that was looked up, if any.
    pub entry: Option<EntryRef>,
    pub entry_found: bool,
    /// Pretty-printed `PageContent` JSON.
    pub content: String,
}

impl Report for ResolveReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(entry) = &self.entry
            && !self.entry_found
        {
            out.warning(&format!(
                "no '{}' entry {}for {}, rendering defaults",
                entry.content_type,
                entry
                    .effective_slug()
                    .map(|slug| format!("'{}' ", slug))
                    .unwrap_or_default(),
                self.block
            ));
        }
        out.preformatted(&self.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_missing_entry_warns() {
        let report = ResolveReport {
            block: "main-blog-post1-bold".into(),
            entry: Some(EntryRef::new("blogItem", Some("nope".into()))),
            entry_found: false,
            content: "{}".into(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: no 'blogItem' entry 'nope' for main-blog-post1-bold, rendering defaults",
                "{}"
            ]
        );
    }
}
