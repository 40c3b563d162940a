use serde::Deserialize;

/// Site theme: `theme.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub design_systems: Vec<DesignSystem>,
}

/// A visual variant every body block is instantiated in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DesignSystem {
    pub name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl DesignSystem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: String::new(),
        }
    }

    /// Display label, the name when none is given.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
