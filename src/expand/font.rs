//! The `font` shorthand.
//!
//! ```text
//! [ <font-style> || <font-variant> || <font-weight> ]?
//!     <font-size> [ / <line-height> ]? <font-family>
//! ```
//!
//! Tokens are classified purely by which grammar accepts them. The family
//! list is collected from the end until a size is found; whatever precedes
//! the size must be style, variant or weight keywords.

use crate::defaults::initial_value;
use crate::grammar::{Grammar, SystemFont};
use crate::properties::FONT_COMPOSITION;
use crate::value::Value;

use super::NormalizedResult;

/// The six components of an expanded `font` shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontShorthand {
    pub style: String,
    pub variant: String,
    pub weight: String,
    pub size: String,
    pub line_height: String,
    /// Font families in declaration order, quotes kept.
    pub family: Vec<String>,
}

impl FontShorthand {
    /// Every component at its initial value.
    pub fn initial() -> Self {
        let initial = |name: &str| initial_value(name).unwrap_or_default().to_string();
        Self {
            style: initial("font-style"),
            variant: initial("font-variant"),
            weight: initial("font-weight"),
            size: initial("font-size"),
            line_height: initial("line-height"),
            family: vec![initial("font-family")],
        }
    }

    fn inherit() -> Self {
        let inherit = || "inherit".to_string();
        Self {
            style: inherit(),
            variant: inherit(),
            weight: inherit(),
            size: inherit(),
            line_height: inherit(),
            family: vec![inherit()],
        }
    }

    /// The family list as a `font-family` value.
    pub fn family_css(&self) -> String {
        self.family.join(", ")
    }

    /// Longhand declarations, in `font` composition order.
    pub fn into_longhands(self) -> NormalizedResult {
        let family = self.family_css();
        let values = [
            self.style,
            self.variant,
            self.weight,
            self.size,
            self.line_height,
            family,
        ];
        FONT_COMPOSITION
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    fn slot(&mut self, keyword: KeywordSlot) -> &mut String {
        match keyword {
            KeywordSlot::Style => &mut self.style,
            KeywordSlot::Variant => &mut self.variant,
            KeywordSlot::Weight => &mut self.weight,
        }
    }
}

/// The optional keywords allowed before the size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordSlot {
    Style,
    Variant,
    Weight,
}

impl KeywordSlot {
    fn property(self) -> &'static str {
        match self {
            KeywordSlot::Style => "font-style",
            KeywordSlot::Variant => "font-variant",
            KeywordSlot::Weight => "font-weight",
        }
    }
}

pub(super) fn expand_font<G: Grammar>(grammar: &G, value: &Value) -> Option<FontShorthand> {
    if let Some(keyword) = value.as_keyword() {
        if keyword == "inherit" {
            return Some(FontShorthand::inherit());
        }
        if SystemFont::from_css(keyword).is_some() {
            return Some(FontShorthand::initial());
        }
    }

    // Size and family are both mandatory
    let tokens = value.tokens();
    if tokens.len() < 2 {
        return None;
    }

    let mut font = FontShorthand::initial();
    // Collected back to front
    let mut family: Vec<&str> = Vec::new();
    let mut found_size = false;
    let mut end = tokens.len();

    while end > 0 {
        end -= 1;
        let text = tokens[end].as_str();

        if family.is_empty() && text == "inherit" {
            family.push(text);
            continue;
        }

        if grammar.accepts("line-height", text) {
            let size = end.checked_sub(1).map(|i| tokens[i].as_str());
            match size {
                Some(size) if grammar.accepts("font-size", size) => {
                    font.size = size.to_string();
                    font.line_height = text.to_string();
                    end -= 1;
                }
                _ if grammar.accepts("font-size", text) => font.size = text.to_string(),
                _ => {
                    log::debug!("font: line height {} without a size", text);
                    return None;
                }
            }
            found_size = true;
            break;
        }

        if grammar.accepts("font-size", text) {
            font.size = text.to_string();
            found_size = true;
            break;
        }

        if family == ["inherit"] {
            log::debug!("font: family {} after inherit", text);
            return None;
        }
        family.push(text);
    }

    if !found_size || family.is_empty() {
        log::debug!("font: missing size or family");
        return None;
    }
    family.reverse();
    font.family = family.into_iter().map(String::from).collect();

    let mut unassigned = vec![KeywordSlot::Style, KeywordSlot::Variant, KeywordSlot::Weight];
    for token in &tokens[..end] {
        let text = token.as_str();
        let Some(index) = unassigned
            .iter()
            .position(|slot| grammar.accepts(slot.property(), text))
        else {
            log::debug!("font: unexpected {} before size", text);
            return None;
        };
        let slot = unassigned.remove(index);
        *font.slot(slot) = text.to_string();
    }

    Some(font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Css21Grammar;

    fn expand(value: &str) -> Option<FontShorthand> {
        expand_font(&Css21Grammar, &Value::parse(value).unwrap())
    }

    #[test]
    fn test_size_and_family() {
        let font = expand("10% serif").unwrap();
        assert_eq!(font.size, "10%");
        assert_eq!(font.family, ["serif"]);
        assert_eq!(font.style, "normal");
        assert_eq!(font.line_height, "normal");
    }

    #[test]
    fn test_size_with_line_height() {
        let font = expand("1.2pt/1.4 A_Font").unwrap();
        assert_eq!(font.size, "1.2pt");
        assert_eq!(font.line_height, "1.4");
        assert_eq!(font.family, ["A_Font"]);
    }

    #[test]
    fn test_family_list_keeps_order_and_quotes() {
        let font = expand("12px \"My Font\", serif").unwrap();
        assert_eq!(font.family, ["\"My Font\"", "serif"]);
        assert_eq!(font.family_css(), "\"My Font\", serif");
    }

    #[test]
    fn test_leading_keywords() {
        let font = expand("bold italic small-caps larger/normal serif").unwrap();
        assert_eq!(font.weight, "bold");
        assert_eq!(font.style, "italic");
        assert_eq!(font.variant, "small-caps");
        assert_eq!(font.size, "larger");
        assert_eq!(font.line_height, "normal");

        let font = expand("700 12px serif").unwrap();
        assert_eq!(font.weight, "700");
    }

    #[test]
    fn test_normal_fills_first_free_keyword() {
        let font = expand("normal bold 12px serif").unwrap();
        assert_eq!(font.style, "normal");
        assert_eq!(font.weight, "bold");

        let font = expand("italic normal 12px serif").unwrap();
        assert_eq!(font.style, "italic");
        assert_eq!(font.variant, "normal");
    }

    #[test]
    fn test_repeated_keyword_is_invalid() {
        assert_eq!(expand("italic oblique 12px serif"), None);
    }

    #[test]
    fn test_invalid_fonts() {
        assert_eq!(expand("some_font"), None);
        assert_eq!(expand("none"), None);
        assert_eq!(expand("bad font"), None);
        assert_eq!(expand("bogus 12px serif"), None);
    }

    #[test]
    fn test_inherit_family_placeholder() {
        let font = expand("12px inherit").unwrap();
        assert_eq!(font.family, ["inherit"]);

        assert_eq!(expand("12px serif inherit"), None);
    }

    #[test]
    fn test_whole_value_keywords() {
        let font = expand("inherit").unwrap();
        assert_eq!(font.size, "inherit");
        assert_eq!(font.family, ["inherit"]);

        let font = expand("message-box").unwrap();
        assert_eq!(font, FontShorthand::initial());
    }

    #[test]
    fn test_longhands_order() {
        let result = expand("bold 12px/1.5 serif").unwrap().into_longhands();
        let names: Vec<_> = result.names().collect();
        assert_eq!(names, FONT_COMPOSITION);
        assert_eq!(result.get("font-family"), Some("serif"));
        assert_eq!(result.get("line-height"), Some("1.5"));
    }
}
