//! Condensation tests: edge groups, border groups and whole stylesheets.

use cssnorm::{
    Edge, Normalizer, Priority, Style, Stylesheet, ToCss, Value, closure, condense,
    condense_edges, condense_sheet, expand,
};
use proptest::prelude::*;

/// Expand `name: raw` into a fresh style.
fn expanded_style(name: &str, raw: &str) -> Style {
    let value = Value::parse(raw).expect("Failed to tokenize value");
    let mut style = Style::new();
    for (property, value) in expand(name, &value) {
        style.set_property(property, value, Priority::Normal);
    }
    style
}

// ============================================================================
// Edge condensation
// ============================================================================

#[test]
fn test_edge_condensation() {
    // (left, top, right, bottom)
    let cases: &[([&str; 4], &str)] = &[
        (["1pt", "2pt", "3pt", "4pt"], "2pt 3pt 4pt 1pt"),
        (["1pt", "2pt", "3pt", "2pt"], "2pt 3pt 2pt 1pt"),
        (["1pt", "2pt", "1pt", "3pt"], "2pt 1pt 3pt"),
        (["1pt", "2pt", "1pt", "2pt"], "2pt 1pt"),
        (["1pt", "1pt", "1pt", "1pt"], "1pt"),
        (["2%", "2%", "2%", "2%"], "2%"),
        (["0", "0", "0", "0"], "0"),
    ];

    for prefix in ["margin", "padding"] {
        for ([left, top, right, bottom], expected) in cases {
            let css = format!(
                "{prefix}-left: {left}; {prefix}-top: {top}; \
                 {prefix}-right: {right}; {prefix}-bottom: {bottom}"
            );
            let mut style = Style::parse(&css);
            condense(&mut style);
            assert_eq!(
                style.to_css_string(),
                format!("{prefix}: {expected}"),
                "{css}"
            );
        }
    }
}

#[test]
fn test_incomplete_edges_are_kept() {
    let css = "margin-left: 1pt; margin-top: 1pt; margin-right: 3pt";
    let mut style = Style::parse(css);
    condense(&mut style);
    assert_eq!(style.to_css_string(), css);
}

#[test]
fn test_expand_then_condense_is_minimal() {
    let cases = [
        ("margin", "2px", "2px"),
        ("margin", "2px 2px", "2px"),
        ("margin", "1em 2em 1em", "1em 2em"),
        ("padding", "1px 2px 3px 2px", "1px 2px 3px"),
        ("padding", "1px 2px 3px 4px", "1px 2px 3px 4px"),
    ];
    for (name, raw, expected) in cases {
        let mut style = expanded_style(name, raw);
        assert_eq!(style.len(), 4);
        condense(&mut style);
        assert_eq!(style.value(name), Some(expected), "{name}: {raw}");
        assert_eq!(style.len(), 1);
    }
}

// ============================================================================
// Border condensation
// ============================================================================

#[test]
fn test_border_condensation() {
    let vals = "red solid 5px";

    let mut style = expanded_style("border", vals);
    condense(&mut style);
    for edge in Edge::ALL {
        for part in ["color", "style", "width"] {
            assert!(!style.contains(&format!("border-{}-{}", edge.as_str(), part)));
        }
        assert!(!style.contains(&format!("border-{}", edge.as_str())));
    }
    assert_eq!(style.value("border"), Some(vals));
    assert_eq!(style.len(), 1);

    let mut style = expanded_style("border-top", vals);
    condense(&mut style);
    assert_eq!(style.to_css_string(), format!("border-top: {vals}"));

    let mut style = expanded_style("border", vals);
    style.set_property("border-top-color", "red", Priority::Normal);
    for edge in [Edge::Right, Edge::Bottom, Edge::Left] {
        style.set_property(
            format!("border-{}-color", edge.as_str()),
            "green",
            Priority::Normal,
        );
    }
    condense(&mut style);
    assert_eq!(style.len(), 4);
    assert_eq!(style.value("border-top"), Some(vals));
    assert_eq!(style.value("border-left"), Some("green solid 5px"));
}

#[test]
fn test_border_group_with_mixed_priority_is_kept() {
    let mut style = expanded_style("border", "red solid 5px");
    style.set_property("border-top-color", "red", Priority::Important);
    condense(&mut style);
    assert_eq!(style.len(), 12);
}

#[test]
fn test_important_border_keeps_priority() {
    let mut style = Style::parse("border: 1px solid red !important");
    let normalizer = Normalizer::new();
    normalizer.expand_style(&mut style);
    normalizer.condense(&mut style);

    let border = style.get("border").expect("border should be condensed");
    assert_eq!(border.value(), "red solid 1px");
    assert!(border.is_important());
}

// ============================================================================
// Stylesheets
// ============================================================================

#[test]
fn test_condense_sheet() {
    let css = r#"
        @import url(base.css);
        p { margin-top: 0; margin-right: 0; margin-bottom: 0; margin-left: 0; color: red }
        h1 { padding-top: 1em; padding-right: 2em; padding-bottom: 1em; padding-left: 2em }
        @font-face { font-family: X; src: url(x.ttf) }
    "#;
    let mut sheet = Stylesheet::parse(css);
    condense_sheet(&mut sheet);

    let rules: Vec<String> = sheet.style_rules().map(|rule| rule.to_css_string()).collect();
    assert_eq!(
        rules,
        ["p { color: red; margin: 0 }", "h1 { padding: 1em 2em }"]
    );
    assert_eq!(sheet.rules.len(), 4);
}

// ============================================================================
// Properties
// ============================================================================

fn edge_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        Just("auto".to_string()),
        (1u32..4).prop_map(|n| format!("{n}px")),
        (1u32..4).prop_map(|n| format!("{n}%")),
    ]
}

proptest! {
    #[test]
    fn prop_condensed_edges_expand_back(
        top in edge_value(),
        right in edge_value(),
        bottom in edge_value(),
        left in edge_value(),
    ) {
        let condensed = condense_edges(&top, &right, &bottom, &left);
        let value = Value::parse(&condensed).unwrap();
        prop_assert!(value.len() <= 4);

        let result = expand("margin", &value);
        prop_assert_eq!(result.get("margin-top"), Some(top.as_str()));
        prop_assert_eq!(result.get("margin-right"), Some(right.as_str()));
        prop_assert_eq!(result.get("margin-bottom"), Some(bottom.as_str()));
        prop_assert_eq!(result.get("margin-left"), Some(left.as_str()));
    }

    #[test]
    fn prop_condensing_is_idempotent(
        top in edge_value(),
        right in edge_value(),
        bottom in edge_value(),
        left in edge_value(),
    ) {
        let condensed = condense_edges(&top, &right, &bottom, &left);
        let value = Value::parse(&condensed).unwrap();
        let result = expand("padding", &value);
        let again = condense_edges(
            result.get("padding-top").unwrap(),
            result.get("padding-right").unwrap(),
            result.get("padding-bottom").unwrap(),
            result.get("padding-left").unwrap(),
        );
        prop_assert_eq!(again, condensed);
    }

    #[test]
    fn prop_closure_contains_its_input(
        names in prop::collection::vec(
            prop_oneof![
                Just("margin"),
                Just("padding"),
                Just("border"),
                Just("border-top"),
                Just("border-color"),
                Just("font"),
                Just("list-style"),
                Just("color"),
                Just("margin-top"),
            ],
            0..5
        )
    ) {
        let result = closure(names.iter().copied());
        for name in &names {
            prop_assert!(result.contains(*name));
        }
        prop_assert_eq!(closure(result.iter()), result.clone());
    }
}
