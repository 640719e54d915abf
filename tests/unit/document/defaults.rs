use super::*;

#[test]
fn every_defaulted_key_has_a_value() {
    for key in DEFAULTED_PARAMS {
        assert!(default_param_value(key).is_some(), "{key}");
    }
    assert_eq!(default_param_value("width"), None);
}

#[test]
fn normalization_drops_defaults_and_nulls_only() {
    let mut params = Params::new();
    params.insert("flex".into(), json!(0.0));
    params.insert("opacity".into(), json!(0.5));
    params.insert("visible".into(), json!(true));
    params.insert("flexDirection".into(), json!("row"));
    params.insert("backgroundColor".into(), Value::Null);
    params.insert("width".into(), json!(0));

    let out = normalize_params(&params);

    assert_eq!(out.len(), 3);
    assert_eq!(out.get("opacity"), Some(&json!(0.5)));
    assert_eq!(out.get("flexDirection"), Some(&json!("row")));
    assert_eq!(out.get("width"), Some(&json!(0)));
}

#[test]
fn normalization_is_idempotent() {
    let mut params = Params::new();
    params.insert("borderStyle".into(), json!("solid"));
    params.insert("borderWidth".into(), json!(2));
    let once = normalize_params(&params);
    assert_eq!(normalize_params(&once), once);
}
