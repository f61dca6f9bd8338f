//! CSS 2.1 initial values for every longhand the normalizer can produce.
//!
//! The table is sorted by property name so lookups can binary search it.

/// Initial values, sorted by property name.
///
/// Length-valued properties whose initial value is zero store `"0"`.
static INITIAL_VALUES: &[(&str, &str)] = &[
    ("azimuth", "center"),
    ("background-attachment", "scroll"),
    ("background-color", "transparent"),
    ("background-image", "none"),
    ("background-position", "0% 0%"),
    ("background-repeat", "repeat"),
    ("border-bottom-color", "currentColor"),
    ("border-bottom-style", "none"),
    ("border-bottom-width", "medium"),
    ("border-collapse", "separate"),
    ("border-left-color", "currentColor"),
    ("border-left-style", "none"),
    ("border-left-width", "medium"),
    ("border-right-color", "currentColor"),
    ("border-right-style", "none"),
    ("border-right-width", "medium"),
    ("border-spacing", "0"),
    ("border-top-color", "currentColor"),
    ("border-top-style", "none"),
    ("border-top-width", "medium"),
    ("bottom", "auto"),
    ("caption-side", "top"),
    ("clear", "none"),
    ("clip", "auto"),
    ("color", "black"),
    ("content", "normal"),
    ("counter-increment", "none"),
    ("counter-reset", "none"),
    ("cue-after", "none"),
    ("cue-before", "none"),
    ("cursor", "auto"),
    ("direction", "ltr"),
    ("display", "inline"),
    ("elevation", "level"),
    ("empty-cells", "show"),
    ("float", "none"),
    ("font-family", "serif"),
    ("font-size", "medium"),
    ("font-style", "normal"),
    ("font-variant", "normal"),
    ("font-weight", "normal"),
    ("height", "auto"),
    ("left", "auto"),
    ("letter-spacing", "normal"),
    ("line-height", "normal"),
    ("list-style-image", "none"),
    ("list-style-position", "outside"),
    ("list-style-type", "disc"),
    ("margin-bottom", "0"),
    ("margin-left", "0"),
    ("margin-right", "0"),
    ("margin-top", "0"),
    ("max-height", "none"),
    ("max-width", "none"),
    ("min-height", "0"),
    ("min-width", "0"),
    ("orphans", "2"),
    ("outline-color", "invert"),
    ("outline-style", "none"),
    ("outline-width", "medium"),
    ("overflow", "visible"),
    ("padding-bottom", "0"),
    ("padding-left", "0"),
    ("padding-right", "0"),
    ("padding-top", "0"),
    ("page-break-after", "auto"),
    ("page-break-before", "auto"),
    ("page-break-inside", "auto"),
    ("pause-after", "0"),
    ("pause-before", "0"),
    ("pitch", "medium"),
    ("pitch-range", "50"),
    ("play-during", "auto"),
    ("position", "static"),
    ("quotes", "'“' '”' '‘' '’'"),
    ("richness", "50"),
    ("right", "auto"),
    ("speak", "normal"),
    ("speak-header", "once"),
    ("speak-numeral", "continuous"),
    ("speak-punctuation", "none"),
    ("speech-rate", "medium"),
    ("stress", "50"),
    ("table-layout", "auto"),
    ("text-align", "auto"),
    ("text-decoration", "none"),
    ("text-indent", "0"),
    ("text-shadow", "none"),
    ("text-transform", "none"),
    ("top", "auto"),
    ("unicode-bidi", "normal"),
    ("vertical-align", "baseline"),
    ("visibility", "visible"),
    ("voice-family", "default"),
    ("volume", "medium"),
    ("white-space", "normal"),
    ("widows", "2"),
    ("width", "auto"),
    ("word-spacing", "normal"),
    ("z-index", "auto"),
];

/// Look up the CSS initial value of a longhand property.
pub fn initial_value(name: &str) -> Option<&'static str> {
    INITIAL_VALUES
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|i| INITIAL_VALUES[i].1)
}

/// Iterate over every `(property, initial value)` pair, sorted by property.
pub fn initial_values() -> impl Iterator<Item = (&'static str, &'static str)> {
    INITIAL_VALUES.iter().copied()
}
