use crate::layer::params::{Params, ParamsExt};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Parameter keys owned by [`AccessibilityType`]; setting accessibility clears all of them.
pub const ACCESSIBILITY_KEYS: [&str; 7] = [
    "accessibilityType",
    "accessibilityLabel",
    "accessibilityHint",
    "accessibilityValue",
    "accessibilityRole",
    "accessibilityStates",
    "accessibilityElements",
];

const TYPE_KEY: &str = "accessibilityType";
const LABEL_KEY: &str = "accessibilityLabel";
const HINT_KEY: &str = "accessibilityHint";
const VALUE_KEY: &str = "accessibilityValue";
const ROLE_KEY: &str = "accessibilityRole";
const STATES_KEY: &str = "accessibilityStates";
const ELEMENTS_KEY: &str = "accessibilityElements";

/// Semantic role announced by assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessibilityRole {
    None,
    Button,
    Link,
    Checkbox,
    Search,
    Image,
    KeyboardKey,
    Text,
    Adjustable,
    ImageButton,
    Header,
    Summary,
}

impl AccessibilityRole {
    /// Every role, in the order the inspector lists them.
    pub const ALL: [Self; 12] = [
        Self::None,
        Self::Button,
        Self::Link,
        Self::Checkbox,
        Self::Search,
        Self::Image,
        Self::KeyboardKey,
        Self::Text,
        Self::Adjustable,
        Self::ImageButton,
        Self::Header,
        Self::Summary,
    ];

    /// Document spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Button => "button",
            Self::Link => "link",
            Self::Checkbox => "checkbox",
            Self::Search => "search",
            Self::Image => "image",
            Self::KeyboardKey => "keyboardkey",
            Self::Text => "text",
            Self::Adjustable => "adjustable",
            Self::ImageButton => "imagebutton",
            Self::Header => "header",
            Self::Summary => "summary",
        }
    }
}

impl FromStr for AccessibilityRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("unknown accessibility role '{s}'"))
    }
}

impl fmt::Display for AccessibilityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of a layer exposed as a single accessibility element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessibilityElement {
    /// Spoken label.
    pub label: Option<String>,
    /// Usage hint.
    pub hint: Option<String>,
    /// Current value (sliders, inputs).
    pub value: Option<String>,
    /// Semantic role.
    pub role: Option<AccessibilityRole>,
    /// Extra state flags such as `selected` or `disabled`.
    pub states: Vec<String>,
}

/// How a layer participates in the accessibility tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccessibilityType {
    /// Not an element itself; children are considered in tree order.
    #[default]
    Auto,
    /// Hidden together with its subtree.
    None,
    /// A leaf element.
    Element(AccessibilityElement),
    /// Exposes the named descendants, in this order.
    Container(Vec<String>),
}

impl AccessibilityType {
    /// Decode from the reserved keys of a parameter map.
    pub fn from_params(params: &Params) -> Self {
        match params.string(TYPE_KEY) {
            Some("none") => Self::None,
            Some("element") => Self::Element(AccessibilityElement {
                label: params.string(LABEL_KEY).map(str::to_string),
                hint: params.string(HINT_KEY).map(str::to_string),
                value: params.string(VALUE_KEY).map(str::to_string),
                role: params.string(ROLE_KEY).and_then(|r| r.parse().ok()),
                states: string_list(params.get(STATES_KEY)),
            }),
            Some("container") => Self::Container(string_list(params.get(ELEMENTS_KEY))),
            _ => Self::Auto,
        }
    }

    /// Encode into reserved keys. `Auto` encodes to nothing.
    pub fn to_params(&self) -> Params {
        let mut out = Params::new();
        match self {
            Self::Auto => {}
            Self::None => {
                out.insert(TYPE_KEY.into(), "none".into());
            }
            Self::Element(el) => {
                out.insert(TYPE_KEY.into(), "element".into());
                let optional = [
                    (LABEL_KEY, el.label.as_deref()),
                    (HINT_KEY, el.hint.as_deref()),
                    (VALUE_KEY, el.value.as_deref()),
                    (ROLE_KEY, el.role.map(AccessibilityRole::as_str)),
                ];
                for (key, value) in optional {
                    if let Some(v) = value {
                        out.insert(key.into(), v.into());
                    }
                }
                if !el.states.is_empty() {
                    out.insert(STATES_KEY.into(), el.states.clone().into());
                }
            }
            Self::Container(names) => {
                out.insert(TYPE_KEY.into(), "container".into());
                out.insert(ELEMENTS_KEY.into(), names.clone().into());
            }
        }
        out
    }

    /// Names listed by a container (empty otherwise).
    pub fn elements(&self) -> &[String] {
        match self {
            Self::Container(names) => names,
            _ => &[],
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Replace every reserved accessibility key in `params` with the encoding of `ty`.
pub(crate) fn write_accessibility(params: &mut Params, ty: &AccessibilityType) {
    for key in ACCESSIBILITY_KEYS {
        params.remove(key);
    }
    params.extend(ty.to_params());
}

#[cfg(test)]
#[path = "../../tests/unit/layer/accessibility.rs"]
mod tests;
