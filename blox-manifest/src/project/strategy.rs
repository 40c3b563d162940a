//! Component generation strategy selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How component sources are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Deterministic built-in templates.
    #[default]
    Template,
    /// A chat-completion endpoint, falling back to templates on failure.
    Llm,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Template => "template",
            Strategy::Llm => "llm",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "template" => Ok(Strategy::Template),
            "llm" | "ai" => Ok(Strategy::Llm),
            _ => Err(format!(
                "unknown strategy '{}', expected 'template' or 'llm'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Strategy::from_str("template").unwrap(), Strategy::Template);
        assert_eq!(Strategy::from_str("LLM").unwrap(), Strategy::Llm);
        assert_eq!(Strategy::from_str("ai").unwrap(), Strategy::Llm);
        assert!(Strategy::from_str("gpt").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::Llm.to_string(), "llm");
    }
}
