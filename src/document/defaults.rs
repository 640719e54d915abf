use crate::layer::params::{Params, values_equal};
use serde_json::{Value, json};

/// Parameters that have a document default and are dropped from encoded output when they
/// hold it.
pub const DEFAULTED_PARAMS: [&str; 20] = [
    "alignItems",
    "aspectRatio",
    "borderRadius",
    "borderWidth",
    "borderStyle",
    "flex",
    "flexDirection",
    "justifyContent",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
    "opacity",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "resizeMode",
    "textAlign",
    "visible",
];

/// Default value of a parameter, if it has one.
pub fn default_param_value(key: &str) -> Option<Value> {
    let value = match key {
        "alignItems" | "justifyContent" => json!("flex-start"),
        "aspectRatio" => json!(-1),
        "borderRadius" | "borderWidth" | "flex" => json!(0),
        "marginTop" | "marginRight" | "marginBottom" | "marginLeft" => json!(0),
        "paddingTop" | "paddingRight" | "paddingBottom" | "paddingLeft" => json!(0),
        "borderStyle" => json!("solid"),
        "flexDirection" => json!("column"),
        "opacity" => json!(1),
        "resizeMode" => json!("cover"),
        "textAlign" => json!("left"),
        "visible" => json!(true),
        _ => return None,
    };
    Some(value)
}

/// Copy of `params` without nulls and without values equal to their default.
pub fn normalize_params(params: &Params) -> Params {
    params
        .iter()
        .filter(|(_, v)| !v.is_null())
        .filter(|(k, v)| !default_param_value(k).is_some_and(|d| values_equal(v, &d)))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/document/defaults.rs"]
mod tests;
