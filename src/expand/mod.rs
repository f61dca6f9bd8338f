//! Shorthand expansion.
//!
//! Every expander turns one shorthand value into the complete set of its
//! longhands, pre-filled with initial values, or into nothing at all when
//! the value cannot be resolved. There is no partial result.

mod border;
mod box_model;
mod composition;
mod font;

use std::collections::{BTreeMap, BTreeSet};

pub use font::FontShorthand;

use crate::defaults::initial_value;
use crate::error::Result;
use crate::grammar::Grammar;
use crate::normalizer::Normalizer;
use crate::properties::{Expander, LIST_STYLE_COMPOSITION, Shorthand};
use crate::style::{Declaration, Priority, Style};
use crate::value::{Token, Value};

/// Longhand values produced by expanding one shorthand.
///
/// Entries keep insertion order and names are unique: inserting an
/// existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedResult {
    entries: Vec<(String, String)>,
}

impl NormalizedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every member of `composition` set to its initial value.
    pub(crate) fn with_defaults(composition: &[&str]) -> Self {
        composition
            .iter()
            .map(|name| (name.to_string(), initial_value(name).unwrap_or_default().to_string()))
            .collect()
    }

    /// Every member of `composition` set to the same value.
    pub(crate) fn filled(composition: &[&str], value: &str) -> Self {
        composition
            .iter()
            .map(|name| (name.to_string(), value.to_string()))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the shorthand could not be expanded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy into a map sorted by property name.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }

    /// Turn every entry into a declaration with the given priority.
    pub fn into_declarations(self, priority: Priority) -> impl Iterator<Item = Declaration> {
        self.entries
            .into_iter()
            .map(move |(name, value)| Declaration::new(name, value, priority))
    }
}

impl FromIterator<(String, String)> for NormalizedResult {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut result = NormalizedResult::new();
        for (name, value) in iter {
            result.insert(name, value);
        }
        result
    }
}

impl IntoIterator for NormalizedResult {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<G: Grammar> Normalizer<G> {
    /// Expand a shorthand declaration into its longhands.
    ///
    /// Returns an empty result if `name` is not a known shorthand or the
    /// value cannot be resolved.
    pub fn expand(&self, name: &str, value: &Value) -> NormalizedResult {
        match Shorthand::from_css(name) {
            Some(shorthand) => self.expand_shorthand(shorthand, value),
            None => {
                log::trace!("not a shorthand: {}", name);
                NormalizedResult::new()
            }
        }
    }

    /// Expand a value for an already-identified shorthand.
    pub fn expand_shorthand(&self, shorthand: Shorthand, value: &Value) -> NormalizedResult {
        let result = match shorthand.expander() {
            Expander::Edge => box_model::expand_edges(shorthand.as_str(), value),
            Expander::Border => border::expand_border(&self.grammar, value),
            Expander::BorderEdge(edge) => composition::expand_composition(
                &self.grammar,
                edge.border_composition(),
                value,
                false,
            ),
            Expander::ListStyle => composition::expand_composition(
                &self.grammar,
                LIST_STYLE_COMPOSITION,
                value,
                true,
            ),
            Expander::Font => font::expand_font(&self.grammar, value)
                .map(FontShorthand::into_longhands)
                .unwrap_or_default(),
        };

        if result.is_empty() {
            log::debug!("rejected {} shorthand: {}", shorthand.as_str(), value);
        }
        result
    }

    /// Tokenize a declaration's value text and expand it.
    pub fn expand_declaration(&self, declaration: &Declaration) -> Result<NormalizedResult> {
        let value = declaration.parsed_value()?;
        Ok(self.expand(declaration.name(), &value))
    }

    /// Expand a `font` value keeping the family list unjoined.
    pub fn expand_font(&self, value: &Value) -> Option<FontShorthand> {
        font::expand_font(&self.grammar, value)
    }

    /// Replace every shorthand in `style` with its longhands.
    ///
    /// Longhands take the position and priority of their shorthand; a later
    /// declaration of the same property replaces an earlier one in place,
    /// except that a normal declaration never replaces an important one.
    /// Shorthands that fail to tokenize or expand are kept as written.
    pub fn expand_style(&self, style: &mut Style) {
        let declarations = std::mem::take(style);
        let mut expanded = Style::new();

        for declaration in &declarations {
            let longhands = match Shorthand::from_css(declaration.name()) {
                Some(shorthand) => match declaration.parsed_value() {
                    Ok(value) => self.expand_shorthand(shorthand, &value),
                    Err(err) => {
                        log::debug!("cannot tokenize {}: {}", declaration.name(), err);
                        NormalizedResult::new()
                    }
                },
                None => NormalizedResult::new(),
            };

            if longhands.is_empty() {
                set_cascaded(&mut expanded, declaration.clone());
            } else {
                for longhand in longhands.into_declarations(declaration.priority()) {
                    set_cascaded(&mut expanded, longhand);
                }
            }
        }

        *style = expanded;
    }

    /// Every property name in `names`, plus the longhands of any shorthand
    /// among them.
    pub fn closure<I, S>(&self, names: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut closure = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            closure.insert(name.to_string());
            if let Some(shorthand) = Shorthand::from_css(name) {
                let value = Value::Single(Token::new(shorthand.default_value()));
                closure.extend(self.expand_shorthand(shorthand, &value).names().map(String::from));
            }
        }
        closure
    }
}

fn set_cascaded(style: &mut Style, declaration: Declaration) {
    let keeps_existing = style
        .get(declaration.name())
        .is_some_and(|existing| existing.is_important() && !declaration.is_important());
    if !keeps_existing {
        style.set(declaration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(name: &str, value: &str) -> NormalizedResult {
        Normalizer::new().expand(name, &Value::parse(value).unwrap())
    }

    #[test]
    fn test_result_insert_replaces_in_place() {
        let mut result = NormalizedResult::new();
        result.insert("a", "1");
        result.insert("b", "2");
        result.insert("a", "3");
        let pairs: Vec<_> = result.iter().collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_unknown_shorthand_is_empty() {
        assert!(expand("color", "red").is_empty());
        assert!(expand("margin-top", "1px").is_empty());
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(expand("margin", "1em 2em 3em").len(), 4);
        assert_eq!(expand("border", "1px solid red").len(), 12);
        assert_eq!(expand("border-left", "1px").len(), 3);
        assert_eq!(expand("list-style", "square").len(), 3);
        assert_eq!(expand("font", "12px serif").len(), 6);
    }

    #[test]
    fn test_expand_declaration() {
        let normalizer = Normalizer::new();
        let result = normalizer
            .expand_declaration(&Declaration::normal("padding", "1px 2px"))
            .unwrap();
        assert_eq!(result.get("padding-left"), Some("2px"));

        let err = normalizer.expand_declaration(&Declaration::normal("padding", " "));
        assert!(err.is_err());
    }

    #[test]
    fn test_expand_style_in_place() {
        let mut style = Style::parse("color: red; margin: 0 1px; font: bogus");
        Normalizer::new().expand_style(&mut style);

        let names: Vec<_> = style.names().collect();
        assert_eq!(
            names,
            [
                "color",
                "margin-top",
                "margin-right",
                "margin-bottom",
                "margin-left",
                "font"
            ]
        );
        assert_eq!(style.value("margin-right"), Some("1px"));
        assert_eq!(style.value("font"), Some("bogus"));
    }

    #[test]
    fn test_expand_style_cascade() {
        let mut style = Style::parse("margin: 0; margin-top: 1px");
        Normalizer::new().expand_style(&mut style);
        assert_eq!(style.value("margin-top"), Some("1px"));

        let mut style = Style::parse("margin-top: 1px; margin: 0");
        Normalizer::new().expand_style(&mut style);
        assert_eq!(style.value("margin-top"), Some("0"));
    }

    #[test]
    fn test_expand_style_keeps_important() {
        let mut style = Style::parse("margin-left: 5px !important; margin: 0");
        Normalizer::new().expand_style(&mut style);
        assert_eq!(style.value("margin-left"), Some("5px"));
        assert_eq!(style.value("margin-right"), Some("0"));

        let mut style = Style::parse("margin-left: 5px; margin: 0 !important");
        Normalizer::new().expand_style(&mut style);
        let left = style.get("margin-left").unwrap();
        assert_eq!(left.value(), "0");
        assert!(left.is_important());
    }

    #[test]
    fn test_closure_of_plain_names() {
        let closure = Normalizer::new().closure(["color", "margin-top"]);
        let names: Vec<_> = closure.iter().map(String::as_str).collect();
        assert_eq!(names, ["color", "margin-top"]);
    }
}
