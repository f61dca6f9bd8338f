//! Style model: declarations, declaration blocks and stylesheets.
//!
//! This module contains:
//! - The `ToCss` serialization trait
//! - `Declaration` and `Priority`
//! - `Style`, an ordered declaration block with unique property names
//! - `Stylesheet` and `CssRule` parsing

mod declaration;
mod stylesheet;

/// Serialize a value back to CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

pub use declaration::{Declaration, Priority, Style};
pub use stylesheet::{AtRule, CssRule, StyleRule, Stylesheet};
