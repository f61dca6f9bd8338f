//! Serialization of the style model and expansion results.

#![cfg(feature = "serde")]

use cssnorm::{NormalizedResult, NormalizerConfig, Stylesheet, Value, expand};

#[test]
fn test_stylesheet_json() {
    let sheet = Stylesheet::parse("p { margin: 0 !important } @media print { p { color: red } }");
    let json = serde_json::to_string(&sheet).expect("Failed to serialize stylesheet");
    let back: Stylesheet = serde_json::from_str(&json).expect("Failed to deserialize stylesheet");
    assert_eq!(back, sheet);
}

#[test]
fn test_normalized_result_json() {
    let result = expand("margin", &Value::parse("1px 2px").unwrap());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["entries"][1], serde_json::json!(["margin-right", "2px"]));

    let back: NormalizedResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_config_json() {
    let config: NormalizerConfig = serde_json::from_str(
        r#"{"condense_margin":true,"condense_padding":false,"condense_border":true,"condense_important":false}"#,
    )
    .unwrap();
    assert!(!config.condense_padding);
    assert!(!config.condense_important);
}
