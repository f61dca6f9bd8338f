//! The [`Normalizer`] entry point.
//!
//! Expansion methods live in [`crate::expand`], condensation methods in
//! [`crate::condense`].

use crate::config::NormalizerConfig;
use crate::grammar::{Css21Grammar, Grammar};

/// Expands and condenses CSS shorthands.
///
/// A normalizer is cheap to build and holds no state besides its grammar
/// and configuration, so one instance can be shared freely.
///
/// # Example
///
/// ```
/// use cssnorm::{Normalizer, NormalizerConfig, Style};
///
/// let normalizer = Normalizer::new().with_config(NormalizerConfig {
///     condense_border: false,
///     ..NormalizerConfig::default()
/// });
///
/// let mut style = Style::parse("margin: 1em 2em; border: 1px solid red");
/// normalizer.expand_style(&mut style);
/// assert_eq!(style.len(), 16);
///
/// normalizer.condense(&mut style);
/// assert_eq!(style.value("margin"), Some("1em 2em"));
/// assert!(style.contains("border-top-color"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer<G = Css21Grammar> {
    pub(crate) grammar: G,
    pub(crate) config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the CSS 2.1 grammar and default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: Grammar> Normalizer<G> {
    /// Create a normalizer validating tokens with a custom grammar.
    pub fn with_grammar(grammar: G) -> Self {
        Self {
            grammar,
            config: NormalizerConfig::default(),
        }
    }

    /// Configure the normalizer with custom settings.
    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }
}
