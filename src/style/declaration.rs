//! Declarations and declaration blocks.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::error::Result;
use crate::value::Value;

use super::ToCss;

/// Declaration priority (the `!important` flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    #[default]
    Normal,
    Important,
}

/// A CSS property-value pair with its priority.
///
/// The value is kept as source text; [`Declaration::parsed_value`] tokenizes
/// it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    name: String,
    value: String,
    priority: Priority,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            priority,
        }
    }

    /// A declaration with normal priority.
    pub fn normal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, Priority::Normal)
    }

    /// A declaration with `!important` priority.
    pub fn important(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, Priority::Important)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_important(&self) -> bool {
        self.priority == Priority::Important
    }

    /// Tokenize the value text.
    pub fn parsed_value(&self) -> Result<Value> {
        Value::parse(&self.value)
    }
}

impl ToCss for Declaration {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.name);
        buf.push_str(": ");
        buf.push_str(&self.value);
        if self.is_important() {
            buf.push_str(" !important");
        }
    }
}

/// An ordered declaration block with unique property names.
///
/// Setting a property that already exists replaces it in place; new
/// properties are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    declarations: Vec<Declaration>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a declaration block such as `margin: 0; color: red !important`.
    ///
    /// Parsing is lenient: declarations that fail to parse are dropped.
    /// Property names are lowercased.
    pub fn parse(css: &str) -> Self {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        Self::parse_block(&mut parser)
    }

    pub(crate) fn parse_block(input: &mut Parser<'_, '_>) -> Self {
        let mut style = Style::new();
        let mut decl_parser = DeclarationListParser { style: &mut style };

        for result in RuleBodyParser::new(input, &mut decl_parser) {
            // Ignore errors - lenient parsing
            let _ = result;
        }

        style
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// The value text of a property, if set.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(Declaration::value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Add a declaration, replacing any existing one with the same name.
    pub fn set(&mut self, declaration: Declaration) {
        match self
            .declarations
            .iter_mut()
            .find(|d| d.name == declaration.name)
        {
            Some(existing) => *existing = declaration,
            None => self.declarations.push(declaration),
        }
    }

    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        priority: Priority,
    ) {
        self.set(Declaration::new(name, value, priority));
    }

    /// Remove a property by name, returning it if it was set.
    pub fn remove(&mut self, name: &str) -> Option<Declaration> {
        let index = self.declarations.iter().position(|d| d.name == name)?;
        Some(self.declarations.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// Property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(Declaration::name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Declaration> for Style {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        let mut style = Style::new();
        for declaration in iter {
            style.set(declaration);
        }
        style
    }
}

impl ToCss for Style {
    fn to_css(&self, buf: &mut String) {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                buf.push_str("; ");
            }
            declaration.to_css(buf);
        }
    }
}

struct DeclarationListParser<'a> {
    style: &'a mut Style,
}

impl<'i> AtRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();
}

impl<'i> DeclarationParser<'i> for DeclarationListParser<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        let mut end = start;
        let mut priority = Priority::Normal;

        while !input.is_exhausted() {
            if input.try_parse(cssparser::parse_important).is_ok() {
                priority = Priority::Important;
                input.expect_exhausted()?;
                break;
            }
            input.next()?;
            end = input.position();
        }

        let value = input.slice(start..end).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }

        self.style
            .set(Declaration::new(name.to_ascii_lowercase(), value, priority));
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationListParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
