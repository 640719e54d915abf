use super::*;

#[test]
fn prefixed_and_legacy_names_resolve_to_built_ins() {
    assert_eq!(LayerType::parse("Lona:View").unwrap(), LayerType::VIEW);
    assert_eq!(LayerType::parse("Text").unwrap(), LayerType::TEXT);
    assert_eq!(
        LayerType::parse("Lona:Children").unwrap(),
        LayerType::CHILDREN
    );
}

#[test]
fn unknown_prefixed_name_is_a_decode_error() {
    let err = LayerType::parse("Lona:Bogus").unwrap_err();
    assert!(matches!(err, LayerError::Decode(_)));
    assert!(err.to_string().contains("Lona:Bogus"));
}

#[test]
fn other_names_are_component_references() {
    let t = LayerType::parse("PrimaryButton").unwrap();
    assert_eq!(t, LayerType::Custom("PrimaryButton".to_string()));
    assert_eq!(t.component_name(), Some("PrimaryButton"));
    assert_eq!(t.to_document_string(), "PrimaryButton");
}

#[test]
fn built_ins_encode_with_prefix() {
    assert_eq!(LayerType::IMAGE.to_document_string(), "Lona:Image");
    assert_eq!(LayerType::IMAGE.display_name(), "Image");
    assert!(LayerType::CHILDREN.is_children_placeholder());
    assert!(!LayerType::VIEW.is_children_placeholder());
}

#[test]
fn empty_type_is_rejected() {
    assert!(LayerType::parse("").is_err());
}
