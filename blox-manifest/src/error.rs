use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds one config file's content and display name so validation code can
/// build spanned errors without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Error {
        let span = line_col_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Error::Parse {
            file: self.filename.clone(),
            src: self.named_source(),
            span,
            source,
        }
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Error {
        let span = source.span().map(SourceSpan::from);
        Error::ProjectParse {
            file: self.filename.clone(),
            src: self.named_source(),
            span,
            source,
        }
    }

    pub fn validation_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Error {
        Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        }
    }

    /// Span of the JSON string literal `"value"` (quotes excluded).
    pub fn find_string(&self, value: &str) -> Option<SourceSpan> {
        find_string_span(&self.src, value, 0)
    }

    /// Span of `"value"` appearing after the object whose `name` is `owner`.
    ///
    /// Falls back to the first occurrence anywhere in the file.
    pub fn find_string_in(&self, owner: &str, value: &str) -> Option<SourceSpan> {
        find_key_offset(&self.src, "name", owner)
            .and_then(|start| find_string_span(&self.src, value, start))
            .or_else(|| self.find_string(value))
    }

    /// Span of the `"name": "<name>"` value, the n-th (0-based) time it appears.
    pub fn find_name(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        self.find_value("name", name, nth)
    }

    /// Span of the `"key": "<value>"` value, the n-th (0-based) time it appears.
    pub fn find_value(&self, key: &str, value: &str, nth: usize) -> Option<SourceSpan> {
        let mut from = 0;
        for _ in 0..nth {
            from = find_key_offset(&self.src[from..], key, value)
                .map(|o| from + o + value.len())?;
        }
        find_key_offset(&self.src[from..], key, value)
            .map(|offset| SourceSpan::from((from + offset, value.len())))
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(blox::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{file}'")]
    #[diagnostic(code(blox::parse_error))]
    Parse {
        file: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse '{file}'")]
    #[diagnostic(code(blox::project_parse_error))]
    ProjectParse {
        file: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("no theme found in '{}'", dir.display())]
    #[diagnostic(
        code(blox::missing_theme),
        help("create theme.json with a title and a designSystems list")
    )]
    MissingTheme { dir: PathBuf },

    #[error("no sections defined in '{}' or its plugins", dir.display())]
    #[diagnostic(
        code(blox::no_sections),
        help("add at least one section to sections.json")
    )]
    NoSections { dir: PathBuf },

    #[error("section '{section}' in module '{module}' has no templates")]
    #[diagnostic(
        code(blox::empty_templates),
        help("list at least one template name in the section's 'templates' array")
    )]
    EmptyTemplates {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        module: String,
        section: String,
    },

    #[error("section '{section}' references unknown template '{template}'")]
    #[diagnostic(
        code(blox::unknown_template),
        help("define '{template}' in templates.json of module '{module}' or the main config")
    )]
    UnknownTemplate {
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined in any visible templates.json")]
        span: Option<SourceSpan>,
        module: String,
        section: String,
        template: String,
    },

    #[error("template '{template}' uses unknown content type '{content_type}'")]
    #[diagnostic(
        code(blox::unknown_content_type),
        help("define '{content_type}' in content-types.json")
    )]
    UnknownContentType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown content type")]
        span: Option<SourceSpan>,
        template: String,
        content_type: String,
    },

    #[error("duplicate {kind} '{name}' in {scope}")]
    #[diagnostic(code(blox::duplicate_name), help("rename one of the {kind}s"))]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        kind: &'static str,
        name: String,
        scope: String,
    },

    #[error("{kind} name '{name}' in {scope} has no letters or digits to name blocks with")]
    #[diagnostic(
        code(blox::empty_slug),
        help("block names are built from ASCII letters and digits of each {kind} name")
    )]
    EmptySlug {
        #[source_code]
        src: NamedSource<String>,
        #[label("slugifies to an empty string")]
        span: Option<SourceSpan>,
        kind: &'static str,
        name: String,
        scope: String,
    },

    #[error("plugin directory {} has no letters or digits to name a module with", dir.display())]
    #[diagnostic(code(blox::empty_module_slug), help("rename the plugin directory"))]
    EmptyModuleSlug { dir: PathBuf },

    #[error("duplicate slug '{slug}' in collection '{collection}'")]
    #[diagnostic(
        code(blox::duplicate_slug),
        help("slugs identify entries and must be unique within a collection")
    )]
    DuplicateSlug {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate slug")]
        span: Option<SourceSpan>,
        collection: String,
        slug: String,
    },

    #[error("{kind} '{name}' is defined by both {first} and {second}")]
    #[diagnostic(
        code(blox::redefined),
        help("{kind} names are global; rename one of them")
    )]
    Redefined {
        kind: &'static str,
        name: String,
        first: String,
        second: String,
    },

    #[error("{message}")]
    #[diagnostic(code(blox::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid configuration: {} error(s)", errors.len())]
    #[diagnostic(code(blox::invalid_config), help("fix every error listed below"))]
    Invalid {
        #[related]
        errors: Vec<Error>,
    },
}

impl Error {
    /// Fold collected errors: one error is returned as is, several are wrapped.
    pub fn collect(mut errors: Vec<Error>) -> Option<Box<Self>> {
        match errors.len() {
            0 => None,
            1 => errors.pop().map(Box::new),
            _ => Some(Box::new(Error::Invalid { errors })),
        }
    }

    /// Number of individual violations carried by this error.
    pub fn count(&self) -> usize {
        match self {
            Error::Invalid { errors } => errors.len(),
            _ => 1,
        }
    }

    /// Iterate the individual violations.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Error> + '_> {
        match self {
            Error::Invalid { errors } => Box::new(errors.iter()),
            other => Box::new(std::iter::once(other)),
        }
    }
}

/// Byte offset of a 1-based line/column pair as reported by serde_json.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(text.len().saturating_sub(1));
            return Some(offset + col);
        }
        offset += text.len();
    }
    src.len().checked_sub(1)
}

/// Offset of `<value>` in `"key": "<value>"`, tolerating whitespace around the colon.
fn find_key_offset(src: &str, key: &str, value: &str) -> Option<usize> {
    let needle = format!("\"{}\"", value);
    let key = format!("\"{}\"", key);
    let mut from = 0;
    while let Some(pos) = src[from..].find(&needle) {
        let at = from + pos;
        let before = src[..at].trim_end();
        if let Some(rest) = before.strip_suffix(':')
            && rest.trim_end().ends_with(&key)
        {
            return Some(at + 1);
        }
        from = at + needle.len();
    }
    None
}

fn find_string_span(src: &str, value: &str, start: usize) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", value);
    src.get(start..)?
        .find(&needle)
        .map(|pos| SourceSpan::from((start + pos + 1, value.len())))
}
