//! Normalizer configuration.

/// Configuration for a [`Normalizer`](crate::Normalizer).
///
/// Only condensation is configurable; expansion always produces the full
/// longhand set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizerConfig {
    /// Collapse `margin-<edge>` groups into `margin` (default true).
    pub condense_margin: bool,
    /// Collapse `padding-<edge>` groups into `padding` (default true).
    pub condense_padding: bool,
    /// Collapse `border-<edge>-<part>` groups into `border-<edge>` and
    /// `border` (default true).
    pub condense_border: bool,
    /// Condense groups whose members are all `!important` (default true).
    /// When false only normal-priority groups are condensed.
    pub condense_important: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            condense_margin: true,
            condense_padding: true,
            condense_border: true,
            condense_important: true,
        }
    }
}
