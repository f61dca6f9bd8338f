//! Component value classification.
//!
//! Grammar profiles never look at raw tokens: each candidate token is first
//! reduced to a [`Component`], then matched against the property's profile.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::keywords::{LENGTH_UNITS, is_named_color};

/// A single CSS component value, reduced to what the profiles care about.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Component {
    /// Identifier, lowercased.
    Keyword(String),
    Length(f32),
    /// Percentage, scaled so `50%` is `50.0`.
    Percentage(f32),
    Number { value: f32, int_value: Option<i32> },
    /// Hex color or color function.
    Color,
    Url,
    String,
    Other,
}

impl Component {
    /// Classify the text of one token.
    ///
    /// Returns `None` unless the text is exactly one component.
    pub(crate) fn parse(text: &str) -> Option<Self> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let component = parse_component(&mut parser)?;
        if parser.is_exhausted() {
            Some(component)
        } else {
            None
        }
    }

    pub(crate) fn keyword(&self) -> Option<&str> {
        match self {
            Component::Keyword(keyword) => Some(keyword.as_str()),
            _ => None,
        }
    }

    pub(crate) fn is_inherit(&self) -> bool {
        self.keyword() == Some("inherit")
    }

    /// `<length>`, optionally rejecting negative values.
    pub(crate) fn is_length(&self, allow_negative: bool) -> bool {
        matches!(self, Component::Length(v) if allow_negative || *v >= 0.0)
    }

    pub(crate) fn is_percentage(&self, allow_negative: bool) -> bool {
        matches!(self, Component::Percentage(v) if allow_negative || *v >= 0.0)
    }

    pub(crate) fn is_non_negative_number(&self) -> bool {
        matches!(self, Component::Number { value, .. } if *value >= 0.0)
    }

    pub(crate) fn is_color(&self) -> bool {
        match self {
            Component::Color => true,
            Component::Keyword(keyword) => is_named_color(keyword),
            _ => false,
        }
    }
}

fn parse_component(input: &mut Parser<'_, '_>) -> Option<Component> {
    let token = input.next().ok()?.clone();
    let component = match token {
        Token::Ident(ident) => Component::Keyword(ident.to_ascii_lowercase()),
        Token::Dimension { value, unit, .. } => {
            if LENGTH_UNITS.contains(&unit.to_ascii_lowercase().as_str()) {
                Component::Length(value)
            } else {
                Component::Other
            }
        }
        // Unitless zero is a valid length
        Token::Number { value, .. } if value == 0.0 => Component::Length(0.0),
        Token::Number {
            value, int_value, ..
        } => Component::Number { value, int_value },
        Token::Percentage { unit_value, .. } => Component::Percentage(unit_value * 100.0),
        Token::IDHash(hash) | Token::Hash(hash) => {
            if is_hex_color(&hash) {
                Component::Color
            } else {
                Component::Other
            }
        }
        Token::UnquotedUrl(_) => Component::Url,
        Token::QuotedString(_) => Component::String,
        Token::Function(name) => {
            let name = name.to_ascii_lowercase();
            let args = input.parse_nested_block(parse_function_args).ok()?;
            match name.as_str() {
                "url" if args.len() == 1 && args[0] == FunctionArg::String => Component::Url,
                "rgb" | "rgba" | "hsl" | "hsla"
                    if (3..=4).contains(&args.len())
                        && args.iter().all(|arg| *arg == FunctionArg::Numeric) =>
                {
                    Component::Color
                }
                _ => Component::Other,
            }
        }
        _ => Component::Other,
    };
    Some(component)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionArg {
    Numeric,
    String,
    Other,
}

fn parse_function_args<'i>(
    input: &mut Parser<'i, '_>,
) -> Result<Vec<FunctionArg>, ParseError<'i, ()>> {
    let mut args = Vec::new();
    while let Ok(token) = input.next() {
        let arg = match token {
            Token::Comma | Token::Delim('/') => continue,
            Token::Number { .. } | Token::Percentage { .. } | Token::Dimension { .. } => {
                FunctionArg::Numeric
            }
            Token::QuotedString(_) => FunctionArg::String,
            _ => FunctionArg::Other,
        };
        args.push(arg);
    }
    Ok(args)
}

fn is_hex_color(hex: &str) -> bool {
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}
