use super::*;
use serde_json::json;

#[test]
fn missing_or_unknown_type_is_auto() {
    assert_eq!(AccessibilityType::from_params(&Params::new()), AccessibilityType::Auto);

    let mut p = Params::new();
    p.insert("accessibilityType".into(), json!("default"));
    assert_eq!(AccessibilityType::from_params(&p), AccessibilityType::Auto);
}

#[test]
fn element_reads_optional_attributes() {
    let mut p = Params::new();
    p.insert("accessibilityType".into(), json!("element"));
    p.insert("accessibilityLabel".into(), json!("Close"));
    p.insert("accessibilityRole".into(), json!("button"));
    p.insert("accessibilityStates".into(), json!(["selected", 3]));

    let AccessibilityType::Element(el) = AccessibilityType::from_params(&p) else {
        panic!("expected element");
    };
    assert_eq!(el.label.as_deref(), Some("Close"));
    assert_eq!(el.hint, None);
    assert_eq!(el.role, Some(AccessibilityRole::Button));
    assert_eq!(el.states, vec!["selected".to_string()]);
}

#[test]
fn container_encodes_type_and_elements() {
    let ty = AccessibilityType::Container(vec!["b".into(), "a".into()]);
    let p = ty.to_params();
    assert_eq!(p.get("accessibilityType"), Some(&json!("container")));
    assert_eq!(p.get("accessibilityElements"), Some(&json!(["b", "a"])));
    assert_eq!(AccessibilityType::from_params(&p), ty);
    assert_eq!(ty.elements(), ["b".to_string(), "a".to_string()]);
}

#[test]
fn writing_clears_stale_reserved_keys() {
    let mut p = Params::new();
    p.insert("accessibilityType".into(), json!("element"));
    p.insert("accessibilityLabel".into(), json!("Old"));
    p.insert("backgroundColor".into(), json!("red"));

    write_accessibility(&mut p, &AccessibilityType::None);

    assert_eq!(p.get("accessibilityType"), Some(&json!("none")));
    assert!(!p.contains_key("accessibilityLabel"));
    assert_eq!(p.get("backgroundColor"), Some(&json!("red")));

    write_accessibility(&mut p, &AccessibilityType::Auto);
    assert!(!p.contains_key("accessibilityType"));
}

#[test]
fn roles_parse_from_document_spelling() {
    assert_eq!(
        "imagebutton".parse::<AccessibilityRole>().unwrap(),
        AccessibilityRole::ImageButton
    );
    assert!("widget".parse::<AccessibilityRole>().is_err());
    assert_eq!(AccessibilityRole::ALL.len(), 12);
}
