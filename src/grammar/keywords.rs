//! CSS keyword tables used by the grammar profiles.
//!
//! Keyword enums are generated with `enum_property!`; lookups expect the
//! keyword already lowercased.

use crate::properties::enum_property;

enum_property! {
    /// Font style (normal, italic, oblique).
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

enum_property! {
    /// Font variant (normal, small-caps).
    pub enum FontVariant {
        Normal => "normal",
        SmallCaps => "small-caps",
    }
}

enum_property! {
    /// Font weight keywords. Numeric weights are checked separately.
    pub enum FontWeight {
        Normal => "normal",
        Bold => "bold",
        Bolder => "bolder",
        Lighter => "lighter",
    }
}

enum_property! {
    /// Absolute and relative font-size keywords.
    pub enum FontSize {
        XxSmall => "xx-small",
        XSmall => "x-small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x-large",
        XxLarge => "xx-large",
        Smaller => "smaller",
        Larger => "larger",
    }
}

enum_property! {
    /// System font keywords, valid only as the whole `font` value.
    pub enum SystemFont {
        Caption => "caption",
        Icon => "icon",
        Menu => "menu",
        MessageBox => "message-box",
        SmallCaption => "small-caption",
        StatusBar => "status-bar",
    }
}

enum_property! {
    /// List marker types.
    pub enum ListStyleType {
        Disc => "disc",
        Circle => "circle",
        Square => "square",
        Decimal => "decimal",
        DecimalLeadingZero => "decimal-leading-zero",
        LowerRoman => "lower-roman",
        UpperRoman => "upper-roman",
        LowerGreek => "lower-greek",
        LowerLatin => "lower-latin",
        UpperLatin => "upper-latin",
        LowerAlpha => "lower-alpha",
        UpperAlpha => "upper-alpha",
        Armenian => "armenian",
        Georgian => "georgian",
        None => "none",
    }
}

enum_property! {
    /// List style position.
    pub enum ListStylePosition {
        Outside => "outside",
        Inside => "inside",
    }
}

enum_property! {
    /// Border style values.
    pub enum BorderStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

enum_property! {
    /// Border width keywords.
    pub enum BorderWidth {
        Thin => "thin",
        Medium => "medium",
        Thick => "thick",
    }
}

/// Length units, lowercased.
pub(crate) const LENGTH_UNITS: &[&str] = &[
    "em", "ex", "ch", "rem", "vw", "vh", "vmin", "vmax", "px", "in", "cm", "mm", "q", "pt", "pc",
];

/// Named colors: CSS3 color keywords, `transparent`, `currentcolor` and the
/// CSS 2.1 system colors. Sorted and lowercased.
static NAMED_COLORS: &[&str] = &[
    "activeborder", "activecaption", "aliceblue", "antiquewhite", "appworkspace", "aqua",
    "aquamarine", "azure", "background", "beige", "bisque", "black", "blanchedalmond", "blue",
    "blueviolet", "brown", "burlywood", "buttonface", "buttonhighlight", "buttonshadow",
    "buttontext", "cadetblue", "captiontext", "chartreuse", "chocolate", "coral", "cornflowerblue",
    "cornsilk", "crimson", "currentcolor", "cyan", "darkblue", "darkcyan", "darkgoldenrod",
    "darkgray", "darkgreen", "darkgrey", "darkkhaki", "darkmagenta", "darkolivegreen",
    "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen", "darkslateblue",
    "darkslategray", "darkslategrey", "darkturquoise", "darkviolet", "deeppink", "deepskyblue",
    "dimgray", "dimgrey", "dodgerblue", "firebrick", "floralwhite", "forestgreen", "fuchsia",
    "gainsboro", "ghostwhite", "gold", "goldenrod", "gray", "graytext", "green", "greenyellow",
    "grey", "highlight", "highlighttext", "honeydew", "hotpink", "inactiveborder",
    "inactivecaption", "inactivecaptiontext", "indianred", "indigo", "infobackground", "infotext",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred", "menu",
    "menutext", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite", "navy",
    "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue", "saddlebrown",
    "salmon", "sandybrown", "scrollbar", "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "threeddarkshadow", "threedface", "threedhighlight", "threedlightshadow",
    "threedshadow", "tomato", "transparent", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "window", "windowframe", "windowtext", "yellow", "yellowgreen",
];

pub(crate) fn is_named_color(keyword: &str) -> bool {
    NAMED_COLORS.binary_search(&keyword).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_sorted() {
        for pair in NAMED_COLORS.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_named_color_lookup() {
        assert!(is_named_color("red"));
        assert!(is_named_color("currentcolor"));
        assert!(is_named_color("windowtext"));
        assert!(!is_named_color("solid"));
        assert!(!is_named_color("Red"));
    }

    #[test]
    fn test_keyword_round_trip() {
        assert_eq!(FontSize::from_css("xx-large"), Some(FontSize::XxLarge));
        assert_eq!(BorderStyle::from_css("groove").map(|s| s.as_str()), Some("groove"));
        assert_eq!(ListStyleType::from_css("inside"), None);
        assert_eq!(SystemFont::ALL.len(), 6);
    }
}
