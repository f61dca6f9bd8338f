//! Tokenized CSS values.
//!
//! A [`Value`] is the ordered list of component tokens of a declaration
//! value, each kept as its serialized source text. Whitespace, commas and
//! the `/` delimiter separate components and are not kept, so
//! `12px/1.5 "My Font", serif` yields `12px`, `1.5`, `"My Font"`, `serif`.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token as CssToken};

use crate::error::{Error, Result};
use crate::style::ToCss;

/// A single CSS component value, serialized as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

/// A declaration value: one token, or an ordered sequence of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Single(Token),
    List(Vec<Token>),
}

impl Value {
    /// Tokenize raw value text.
    ///
    /// Functions and blocks (`rgb(0, 1, 1)`, `url(a.png)`) become a single
    /// token holding their exact source text. Quoted strings keep their
    /// quotes.
    pub fn parse(text: &str) -> Result<Self> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        let mut tokens = Vec::new();

        loop {
            parser.skip_whitespace();
            let start = parser.position();
            let token = match parser.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                CssToken::Comma | CssToken::Delim('/') => continue,
                CssToken::Function(_)
                | CssToken::ParenthesisBlock
                | CssToken::SquareBracketBlock
                | CssToken::CurlyBracketBlock => {
                    parser
                        .parse_nested_block(skip_block)
                        .map_err(|e| Error::Syntax {
                            line: e.location.line,
                            column: e.location.column,
                        })?;
                }
                CssToken::BadString(_)
                | CssToken::BadUrl(_)
                | CssToken::CloseParenthesis
                | CssToken::CloseSquareBracket
                | CssToken::CloseCurlyBracket => {
                    return Err(Error::InvalidToken(parser.slice_from(start).to_string()));
                }
                _ => {}
            }

            tokens.push(Token::new(parser.slice_from(start).trim_end()));
        }

        Self::from_tokens(tokens).ok_or(Error::EmptyValue)
    }

    /// Build a value from already-tokenized components.
    ///
    /// Returns `None` for an empty token list.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Option<Self> {
        match tokens.len() {
            0 => None,
            1 => tokens.pop().map(Value::Single),
            _ => Some(Value::List(tokens)),
        }
    }

    /// The component tokens, in declaration order.
    pub fn tokens(&self) -> &[Token] {
        match self {
            Value::Single(token) => std::slice::from_ref(token),
            Value::List(tokens) => tokens,
        }
    }

    /// Number of component tokens.
    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    /// Always false: a value has at least one token.
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    /// The token text if this value is a single token.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Value::Single(token) => Some(token.as_str()),
            Value::List(_) => None,
        }
    }
}

impl ToCss for Value {
    fn to_css(&self, buf: &mut String) {
        for (i, token) in self.tokens().iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            buf.push_str(token.as_str());
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

fn skip_block<'i>(input: &mut Parser<'i, '_>) -> std::result::Result<(), ParseError<'i, ()>> {
    while input.next().is_ok() {}
    Ok(())
}
