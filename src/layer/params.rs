use serde_json::Value;
use std::collections::BTreeMap;

/// Loosely typed parameter bag attached to every layer (and reused for metadata).
///
/// Keys are kept sorted so encoded documents are stable.
pub type Params = BTreeMap<String, Value>;

/// Read helpers over a [`Params`] map.
pub trait ParamsExt {
    /// Numeric value for `key`, if present and a number.
    fn number(&self, key: &str) -> Option<f64>;
    /// String value for `key`, if present and a string.
    fn string(&self, key: &str) -> Option<&str>;
    /// Boolean value for `key`, if present and a bool.
    fn boolean(&self, key: &str) -> Option<bool>;
}

impl ParamsExt for Params {
    fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }
}

/// Encode a number the way documents spell it: integral values without a fraction.
pub fn number_value(v: f64) -> Value {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

/// Structural equality where numbers compare by value (`1 == 1.0`).
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

/// [`values_equal`] lifted to whole parameter maps.
pub fn params_equal(a: &Params, b: &Params) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .all(|(k, x)| b.get(k).is_some_and(|y| values_equal(x, y)))
}

/// An ordered list of parameter writes; `None` removes the key.
///
/// Derived-property setters compute a patch first and apply it second, which keeps
/// the rewrite rules testable without a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamPatch {
    ops: Vec<(String, Option<Value>)>,
}

impl ParamPatch {
    /// Empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `key = value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.ops.push((key.into(), Some(value.into())));
        self
    }

    /// Queue removal of `key`.
    pub fn remove(&mut self, key: impl Into<String>) -> &mut Self {
        self.ops.push((key.into(), None));
        self
    }

    /// Value the patch leaves for `key`: `Some(Some(v))` set, `Some(None)` removed,
    /// `None` untouched.
    pub fn get(&self, key: &str) -> Option<Option<&Value>> {
        self.ops
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Apply the queued writes in order.
    pub fn apply(&self, params: &mut Params) {
        for (key, value) in &self.ops {
            match value {
                Some(v) => {
                    params.insert(key.clone(), v.clone());
                }
                None => {
                    params.remove(key);
                }
            }
        }
    }

    /// `true` when no writes are queued.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/params.rs"]
mod tests;
