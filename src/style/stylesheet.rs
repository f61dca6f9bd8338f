//! CSS stylesheet parsing and rule structures.

use cssparser::{
    AtRuleParser, CowRcStr, ParseError, Parser, ParserInput, ParserState, QualifiedRuleParser,
    StyleSheetParser,
};

use super::{Style, ToCss};

/// A parsed CSS stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stylesheet {
    pub rules: Vec<CssRule>,
}

/// A top-level rule of a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssRule {
    /// `selectors { declarations }`
    Style(StyleRule),
    /// Any at-rule, kept verbatim.
    Other(AtRule),
}

/// A style rule: selector text plus its declaration block.
///
/// Selectors are kept as source text; they are never matched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRule {
    pub selectors: String,
    pub style: Style,
}

/// An at-rule such as `@media` or `@import`, kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtRule {
    pub name: String,
    pub prelude: String,
    /// Block contents, or `None` for statement at-rules like `@import`.
    pub block: Option<String>,
}

impl Stylesheet {
    /// Parse a CSS stylesheet from a string.
    pub fn parse(css: &str) -> Self {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rules = Vec::new();

        let mut rule_parser = TopLevelRuleParser { rules: &mut rules };
        let stylesheet_parser = StyleSheetParser::new(&mut parser, &mut rule_parser);

        for result in stylesheet_parser {
            // Ignore errors - lenient parsing
            let _ = result;
        }

        Self { rules }
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|rule| match rule {
            CssRule::Style(style_rule) => Some(style_rule),
            CssRule::Other(_) => None,
        })
    }

    pub fn style_rules_mut(&mut self) -> impl Iterator<Item = &mut StyleRule> {
        self.rules.iter_mut().filter_map(|rule| match rule {
            CssRule::Style(style_rule) => Some(style_rule),
            CssRule::Other(_) => None,
        })
    }
}

impl ToCss for StyleRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.selectors);
        buf.push_str(" { ");
        self.style.to_css(buf);
        buf.push_str(" }");
    }
}

impl ToCss for AtRule {
    fn to_css(&self, buf: &mut String) {
        buf.push('@');
        buf.push_str(&self.name);
        if !self.prelude.is_empty() {
            buf.push(' ');
            buf.push_str(&self.prelude);
        }
        match &self.block {
            Some(block) => {
                buf.push_str(" { ");
                buf.push_str(block);
                buf.push_str(" }");
            }
            None => buf.push(';'),
        }
    }
}

impl ToCss for CssRule {
    fn to_css(&self, buf: &mut String) {
        match self {
            CssRule::Style(rule) => rule.to_css(buf),
            CssRule::Other(rule) => rule.to_css(buf),
        }
    }
}

impl ToCss for Stylesheet {
    fn to_css(&self, buf: &mut String) {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                buf.push('\n');
            }
            rule.to_css(buf);
        }
    }
}

/// Parser for top-level stylesheet rules.
struct TopLevelRuleParser<'a> {
    rules: &'a mut Vec<CssRule>,
}

/// Consume the rest of the input and return its source text.
fn remaining_text<'i>(input: &mut Parser<'i, '_>) -> &'i str {
    let start = input.position();
    while input.next().is_ok() {}
    input.slice_from(start).trim()
}

impl<'i> AtRuleParser<'i> for TopLevelRuleParser<'_> {
    /// (name, prelude text)
    type Prelude = (String, String);
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Ok((name.to_ascii_lowercase(), remaining_text(input).to_string()))
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        let (name, prelude) = prelude;
        self.rules.push(CssRule::Other(AtRule {
            name,
            prelude,
            block: None,
        }));
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        let (name, prelude) = prelude;
        let block = remaining_text(input).to_string();
        self.rules.push(CssRule::Other(AtRule {
            name,
            prelude,
            block: Some(block),
        }));
        Ok(())
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = String;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selectors = remaining_text(input);
        if selectors.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(selectors.to_string())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        self.rules.push(CssRule::Style(StyleRule {
            selectors: prelude,
            style: Style::parse_block(input),
        }));
        Ok(())
    }
}
