//! Soft fallback from an optional strategy to the built-in templates.

use blox_core::ResolvedCollections;
use blox_ir::{Block, DesignSystemIR};
use eyre::Result;

use super::{ComponentStrategy, TemplateStrategy};

/// Which strategy produced a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Primary(String),
    Fallback(String),
}

impl Outcome {
    pub fn source(&self) -> &str {
        match self {
            Outcome::Primary(source) | Outcome::Fallback(source) => source,
        }
    }

    pub fn into_source(self) -> String {
        match self {
            Outcome::Primary(source) | Outcome::Fallback(source) => source,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

/// Runs the primary strategy and substitutes [`TemplateStrategy`] output on
/// any error. Without a primary the template strategy runs directly.
pub struct FallbackStrategy {
    primary: Option<Box<dyn ComponentStrategy>>,
    fallback: TemplateStrategy,
}

impl FallbackStrategy {
    pub fn new(primary: Box<dyn ComponentStrategy>) -> Self {
        Self {
            primary: Some(primary),
            fallback: TemplateStrategy,
        }
    }

    /// Template output only.
    pub fn template() -> Self {
        Self {
            primary: None,
            fallback: TemplateStrategy,
        }
    }

    /// Name of the strategy tried first.
    pub fn primary_name(&self) -> &'static str {
        self.primary
            .as_ref()
            .map_or(self.fallback.name(), |primary| primary.name())
    }

    pub fn generate_or_fallback(
        &self,
        block: &Block,
        design_system: Option<&DesignSystemIR>,
        collections: &ResolvedCollections<'_>,
    ) -> Result<Outcome> {
        let Some(primary) = &self.primary else {
            return self
                .fallback
                .generate(block, design_system, collections)
                .map(Outcome::Primary);
        };

        match primary.generate(block, design_system, collections) {
            Ok(source) => Ok(Outcome::Primary(source)),
            Err(err) => {
                let error = format!("{:#}", err);
                tracing::warn!(
                    block = %block.name,
                    strategy = primary.name(),
                    error = %error,
                    "component generation failed, using template"
                );
                self.fallback
                    .generate(block, design_system, collections)
                    .map(Outcome::Fallback)
            }
        }
    }
}

impl Default for FallbackStrategy {
    fn default() -> Self {
        Self::template()
    }
}

impl ComponentStrategy for FallbackStrategy {
    fn name(&self) -> &'static str {
        self.primary_name()
    }

    fn generate(
        &self,
        block: &Block,
        design_system: Option<&DesignSystemIR>,
        collections: &ResolvedCollections<'_>,
    ) -> Result<String> {
        self.generate_or_fallback(block, design_system, collections)
            .map(Outcome::into_source)
    }
}

#[cfg(test)]
mod tests {
    use blox_codegen::{expansion::expand, testing::hero_config};
    use blox_manifest::ProjectConfig;
    use eyre::bail;

    use super::*;

    struct Failing;

    impl ComponentStrategy for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn generate(
            &self,
            _block: &Block,
            _design_system: Option<&DesignSystemIR>,
            _collections: &ResolvedCollections<'_>,
        ) -> Result<String> {
            bail!("endpoint unreachable")
        }
    }

    struct Fixed;

    impl ComponentStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn generate(
            &self,
            _block: &Block,
            _design_system: Option<&DesignSystemIR>,
            _collections: &ResolvedCollections<'_>,
        ) -> Result<String> {
            Ok("export default function Fixed() { return null; }\n".to_string())
        }
    }

    fn hero() -> Block {
        let config = hero_config().load();
        expand(&config, &ProjectConfig::default()).blocks.remove(0)
    }

    #[test]
    fn test_failure_substitutes_template_output() {
        let block = hero();
        let strategy = FallbackStrategy::new(Box::new(Failing));

        let outcome = strategy
            .generate_or_fallback(&block, None, &ResolvedCollections::new())
            .unwrap();
        let expected = TemplateStrategy
            .generate(&block, None, &ResolvedCollections::new())
            .unwrap();

        assert!(outcome.is_fallback());
        assert_eq!(outcome.source(), expected);
    }

    #[test]
    fn test_primary_success_is_kept() {
        let strategy = FallbackStrategy::new(Box::new(Fixed));
        let outcome = strategy
            .generate_or_fallback(&hero(), None, &ResolvedCollections::new())
            .unwrap();

        assert_eq!(outcome, Outcome::Primary("export default function Fixed() { return null; }\n".into()));
        assert_eq!(strategy.primary_name(), "fixed");
    }

    #[test]
    fn test_template_only() {
        let strategy = FallbackStrategy::template();
        let outcome = strategy
            .generate_or_fallback(&hero(), None, &ResolvedCollections::new())
            .unwrap();
        assert!(!outcome.is_fallback());
        assert_eq!(strategy.primary_name(), "template");
    }
}
