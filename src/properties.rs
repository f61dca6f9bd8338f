//! Property name tables: edges, border parts, and the shorthand dispatch table.
//!
//! Also home of the `enum_property!` macro used for every keyword enum in
//! the crate.

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// Inspired by lightningcss's `enum_property!` macro, this reduces boilerplate
/// for enums that map directly to CSS keywords.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Font style (normal, italic, oblique).
///     pub enum FontStyle {
///         Normal => "normal",
///         Italic => "italic",
///         Oblique => "oblique",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every keyword of this enum, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a CSS keyword into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::style::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }
    };
}

pub(crate) use enum_property;

enum_property! {
    /// The four box edges, in canonical top/right/bottom/left order.
    pub enum Edge {
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
    }
}

impl Edge {
    /// Build the directional longhand name for a box-edge shorthand.
    ///
    /// Hyphenated bases get the edge inserted after their first segment
    /// (`border-width` → `border-top-width`); plain bases get it appended
    /// (`margin` → `margin-top`).
    pub fn longhand(self, base: &str) -> String {
        match base.split_once('-') {
            Some((head, tail)) => format!("{head}-{}-{tail}", self.as_str()),
            None => format!("{base}-{}", self.as_str()),
        }
    }

    /// The `border-<edge>` shorthand for this edge.
    pub fn border_shorthand(self) -> Shorthand {
        match self {
            Edge::Top => Shorthand::BorderTop,
            Edge::Right => Shorthand::BorderRight,
            Edge::Bottom => Shorthand::BorderBottom,
            Edge::Left => Shorthand::BorderLeft,
        }
    }

    /// The `border-<edge>-{color,style,width}` composition for this edge.
    pub fn border_composition(self) -> &'static [&'static str] {
        match self {
            Edge::Top => &["border-top-color", "border-top-style", "border-top-width"],
            Edge::Right => &[
                "border-right-color",
                "border-right-style",
                "border-right-width",
            ],
            Edge::Bottom => &[
                "border-bottom-color",
                "border-bottom-style",
                "border-bottom-width",
            ],
            Edge::Left => &[
                "border-left-color",
                "border-left-style",
                "border-left-width",
            ],
        }
    }
}

enum_property! {
    /// Components of a single border edge.
    ///
    /// Declaration order (color, style, width) is the matching order used
    /// when expanding and the token order used when condensing.
    pub enum BorderPart {
        Color => "color",
        Style => "style",
        Width => "width",
    }
}

/// Longhands of the `list-style` shorthand, in matching order.
pub(crate) const LIST_STYLE_COMPOSITION: &[&str] = &[
    "list-style-type",
    "list-style-position",
    "list-style-image",
];

/// Longhands of the `font` shorthand, in matching order.
pub const FONT_COMPOSITION: &[&str] = &[
    "font-style",
    "font-variant",
    "font-weight",
    "font-size",
    "line-height",
    "font-family",
];

enum_property! {
    /// Shorthand properties the normalizer knows how to expand.
    pub enum Shorthand {
        Margin => "margin",
        Padding => "padding",
        BorderStyle => "border-style",
        BorderWidth => "border-width",
        BorderColor => "border-color",
        Border => "border",
        BorderTop => "border-top",
        BorderRight => "border-right",
        BorderBottom => "border-bottom",
        BorderLeft => "border-left",
        ListStyle => "list-style",
        Font => "font",
    }
}

/// Expansion strategy for a shorthand.
///
/// The set is closed: every [`Shorthand`] maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expander {
    /// 1-4 values spread over the four edges.
    Edge,
    /// One color/style/width triple copied to every edge.
    Border,
    /// The color/style/width triple of a single edge.
    BorderEdge(Edge),
    ListStyle,
    Font,
}

impl Shorthand {
    /// How this shorthand is expanded.
    pub fn expander(self) -> Expander {
        match self {
            Shorthand::Margin
            | Shorthand::Padding
            | Shorthand::BorderStyle
            | Shorthand::BorderWidth
            | Shorthand::BorderColor => Expander::Edge,
            Shorthand::Border => Expander::Border,
            Shorthand::BorderTop => Expander::BorderEdge(Edge::Top),
            Shorthand::BorderRight => Expander::BorderEdge(Edge::Right),
            Shorthand::BorderBottom => Expander::BorderEdge(Edge::Bottom),
            Shorthand::BorderLeft => Expander::BorderEdge(Edge::Left),
            Shorthand::ListStyle => Expander::ListStyle,
            Shorthand::Font => Expander::Font,
        }
    }

    /// Raw value used to discover which longhands this shorthand touches.
    ///
    /// Coarser than the per-longhand initial values: it only has to produce
    /// a successful expansion.
    pub fn default_value(self) -> &'static str {
        match self {
            Shorthand::Margin | Shorthand::Padding | Shorthand::BorderWidth => "0",
            Shorthand::BorderStyle
            | Shorthand::Border
            | Shorthand::BorderTop
            | Shorthand::BorderRight
            | Shorthand::BorderBottom
            | Shorthand::BorderLeft => "none",
            Shorthand::BorderColor => "currentColor",
            Shorthand::ListStyle | Shorthand::Font => "inherit",
        }
    }
}

/// Check whether a property name is a shorthand this crate expands.
pub fn is_shorthand(name: &str) -> bool {
    Shorthand::from_css(name).is_some()
}
