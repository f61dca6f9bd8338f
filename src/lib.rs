//! # cssnorm
//!
//! CSS shorthand normalization: expand shorthands into canonical longhands,
//! and condense longhands back into the most compact shorthand.
//!
//! ## Features
//!
//! - Expand `margin`, `padding`, `border-style`/`-width`/`-color`, `border`,
//!   `border-<edge>`, `list-style` and `font` into their longhands, filling
//!   omitted parts with CSS 2.1 initial values
//! - Condense `margin-*`, `padding-*` and `border-*` groups back into
//!   shorthands when every member shares one priority
//! - Pluggable value [`Grammar`] used to tell shorthand components apart
//! - Lenient declaration block and stylesheet parsing built on `cssparser`
//!
//! ## Quick Start
//!
//! ```
//! use cssnorm::{Style, ToCss, Value, condense, expand};
//!
//! let font = expand("font", &Value::parse("bold 12px/1.5 \"My Font\", serif").unwrap());
//! assert_eq!(font.get("font-weight"), Some("bold"));
//! assert_eq!(font.get("font-family"), Some("\"My Font\", serif"));
//!
//! let mut style = Style::parse(
//!     "margin-top: 0; margin-right: 1em; margin-bottom: 0; margin-left: 1em",
//! );
//! condense(&mut style);
//! assert_eq!(style.to_css_string(), "margin: 0 1em");
//! ```
//!
//! Unresolvable shorthands expand to nothing rather than to a partial
//! result:
//!
//! ```
//! use cssnorm::{Value, expand};
//!
//! assert!(expand("font", &Value::parse("some_font").unwrap()).is_empty());
//! ```

pub mod condense;
pub mod config;
pub mod defaults;
pub mod error;
pub mod expand;
pub mod grammar;
mod normalizer;
pub mod properties;
pub mod style;
pub mod value;

use std::collections::BTreeSet;

pub use condense::condense_edges;
pub use config::NormalizerConfig;
pub use defaults::initial_value;
pub use error::{Error, Result};
pub use expand::{FontShorthand, NormalizedResult};
pub use grammar::{Css21Grammar, Grammar};
pub use normalizer::Normalizer;
pub use properties::{BorderPart, Edge, Expander, Shorthand, is_shorthand};
pub use style::{AtRule, CssRule, Declaration, Priority, Style, StyleRule, Stylesheet, ToCss};
pub use value::{Token, Value};

/// Expand a shorthand into its longhands with the default [`Normalizer`].
pub fn expand(name: &str, value: &Value) -> NormalizedResult {
    Normalizer::new().expand(name, value)
}

/// Property names plus the longhands of every shorthand among them.
pub fn closure<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::new().closure(names)
}

/// Condense longhand groups of a declaration block in place.
pub fn condense(style: &mut Style) {
    Normalizer::new().condense(style);
}

/// Condense every style rule of a stylesheet in place.
pub fn condense_sheet(sheet: &mut Stylesheet) {
    Normalizer::new().condense_sheet(sheet);
}
