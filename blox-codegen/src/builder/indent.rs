//! Indentation configuration for generated sources.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation used by TypeScript, TSX and JSON.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// One indent level as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Other widths render as two spaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
