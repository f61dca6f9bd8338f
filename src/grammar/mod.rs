//! Property value grammars.
//!
//! The expanders never inspect token text themselves. Whenever they need to
//! know whether a token could be the value of some longhand (is `larger` a
//! `font-size`? is `#aaa` a `border-top-color`?) they ask a [`Grammar`].
//!
//! [`Css21Grammar`] is the default implementation. Callers can inject their
//! own, including plain closures:
//!
//! ```
//! use cssnorm::{Normalizer, Value};
//!
//! let only_red = |property: &str, token: &str| property.ends_with("-color") && token == "red";
//! let normalizer = Normalizer::with_grammar(only_red);
//! let result = normalizer.expand("border-top", &Value::parse("solid red").unwrap());
//! assert_eq!(result.get("border-top-color"), Some("red"));
//! assert_eq!(result.get("border-top-style"), Some("none"));
//! ```

mod keywords;
mod values;

pub use keywords::{
    BorderStyle, BorderWidth, FontSize, FontStyle, FontVariant, FontWeight, ListStylePosition,
    ListStyleType, SystemFont,
};

use crate::properties::{BorderPart, Edge};
use values::Component;

/// Decides whether a single token is a valid value for a longhand property.
pub trait Grammar {
    fn accepts(&self, property: &str, token: &str) -> bool;
}

impl<F> Grammar for F
where
    F: Fn(&str, &str) -> bool,
{
    fn accepts(&self, property: &str, token: &str) -> bool {
        self(property, token)
    }
}

/// CSS 2.1 value profiles for the longhands produced by shorthand expansion.
///
/// Extended with CSS3 named colors, `currentColor`, `rem`/`ch` and viewport
/// units. Every profile accepts `inherit`; properties without a profile
/// accept nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Css21Grammar;

impl Css21Grammar {
    pub fn new() -> Self {
        Self
    }
}

impl Grammar for Css21Grammar {
    fn accepts(&self, property: &str, token: &str) -> bool {
        let Some(profile) = Profile::for_property(property) else {
            return false;
        };
        let Some(component) = Component::parse(token) else {
            return false;
        };
        component.is_inherit() || profile.matches(&component)
    }
}

/// The value grammar of one longhand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Profile {
    FontStyle,
    FontVariant,
    FontWeight,
    FontSize,
    LineHeight,
    FontFamily,
    ListStyleType,
    ListStylePosition,
    ListStyleImage,
    BorderColor,
    BorderStyle,
    BorderWidth,
    Margin,
    Padding,
}

impl Profile {
    fn for_property(property: &str) -> Option<Self> {
        let profile = match property {
            "font-style" => Profile::FontStyle,
            "font-variant" => Profile::FontVariant,
            "font-weight" => Profile::FontWeight,
            "font-size" => Profile::FontSize,
            "line-height" => Profile::LineHeight,
            "font-family" => Profile::FontFamily,
            "list-style-type" => Profile::ListStyleType,
            "list-style-position" => Profile::ListStylePosition,
            "list-style-image" => Profile::ListStyleImage,
            _ => return Self::for_edge_property(property),
        };
        Some(profile)
    }

    /// `margin-<edge>`, `padding-<edge>` and `border-<edge>-<part>`.
    fn for_edge_property(property: &str) -> Option<Self> {
        let (head, rest) = property.split_once('-')?;
        let (edge, part) = match rest.split_once('-') {
            Some((edge, part)) => (edge, Some(part)),
            None => (rest, None),
        };
        Edge::from_css(edge)?;

        match (head, part) {
            ("margin", None) => Some(Profile::Margin),
            ("padding", None) => Some(Profile::Padding),
            ("border", Some(part)) => match BorderPart::from_css(part)? {
                BorderPart::Color => Some(Profile::BorderColor),
                BorderPart::Style => Some(Profile::BorderStyle),
                BorderPart::Width => Some(Profile::BorderWidth),
            },
            _ => None,
        }
    }

    fn matches(self, component: &Component) -> bool {
        let keyword = component.keyword();
        match self {
            Profile::FontStyle => keyword.and_then(FontStyle::from_css).is_some(),
            Profile::FontVariant => keyword.and_then(FontVariant::from_css).is_some(),
            Profile::FontWeight => {
                keyword.and_then(FontWeight::from_css).is_some() || is_numeric_weight(component)
            }
            Profile::FontSize => {
                keyword.and_then(FontSize::from_css).is_some()
                    || component.is_length(false)
                    || component.is_percentage(false)
            }
            Profile::LineHeight => {
                keyword == Some("normal")
                    || component.is_non_negative_number()
                    || component.is_length(false)
                    || component.is_percentage(false)
            }
            Profile::FontFamily => matches!(component, Component::Keyword(_) | Component::String),
            Profile::ListStyleType => keyword.and_then(ListStyleType::from_css).is_some(),
            Profile::ListStylePosition => keyword.and_then(ListStylePosition::from_css).is_some(),
            Profile::ListStyleImage => keyword == Some("none") || *component == Component::Url,
            Profile::BorderColor => component.is_color(),
            Profile::BorderStyle => keyword.and_then(BorderStyle::from_css).is_some(),
            Profile::BorderWidth => {
                keyword.and_then(BorderWidth::from_css).is_some() || component.is_length(false)
            }
            Profile::Margin => {
                keyword == Some("auto") || component.is_length(true) || component.is_percentage(true)
            }
            Profile::Padding => component.is_length(false) || component.is_percentage(false),
        }
    }
}

/// `100`, `200`, ... `900`.
fn is_numeric_weight(component: &Component) -> bool {
    match component {
        Component::Number {
            int_value: Some(weight),
            ..
        } => (100..=900).contains(weight) && weight % 100 == 0,
        _ => false,
    }
}
