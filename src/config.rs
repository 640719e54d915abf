//! Runtime attribute overrides keyed by layer name.

use crate::foundation::error::LayerResult;
use crate::layer::params::Params;
use crate::layer::tree::{LayerId, LayerTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const CHILDREN_ATTRIBUTE: &str = "children";
const VISIBLE_ATTRIBUTE: &str = "visible";

/// Per-layer attribute values supplied when a component is rendered.
///
/// Serialized as `{ "<layer>": { "<attribute>": value } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentConfiguration {
    layers: BTreeMap<String, Params>,
}

impl ComponentConfiguration {
    /// Empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `attribute` for the layer called `layer_name`.
    pub fn get(&self, attribute: &str, layer_name: &str) -> Option<&Value> {
        self.layers.get(layer_name)?.get(attribute)
    }

    /// Set `attribute` for `layer_name`, returning the previous value.
    pub fn set(
        &mut self,
        attribute: impl Into<String>,
        layer_name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.layers
            .entry(layer_name.into())
            .or_default()
            .insert(attribute.into(), value.into())
    }

    /// Drop `attribute` for `layer_name`.
    pub fn remove(&mut self, attribute: &str, layer_name: &str) -> Option<Value> {
        let attrs = self.layers.get_mut(layer_name)?;
        let old = attrs.remove(attribute);
        if attrs.is_empty() {
            self.layers.remove(layer_name);
        }
        old
    }

    /// `true` when no override is set.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl LayerTree {
    /// Children of `id` that are shown under `config`.
    ///
    /// Layer documents listed in the `children` attribute for this layer's name are
    /// decoded into the arena as detached layers and follow the declared children. Entries
    /// that fail to decode are skipped. Each candidate is then kept when its `visible`
    /// override, or else its own `visible` parameter, is true.
    ///
    /// Configured layers that end up hidden are freed again. The ones returned stay
    /// detached and belong to the caller, who releases them with
    /// [`LayerTree::delete_subtree`] once the pass is over.
    pub fn visible_children(
        &mut self,
        id: LayerId,
        config: &ComponentConfiguration,
    ) -> LayerResult<Vec<LayerId>> {
        let node = self.node(id)?;
        let mut shown: Vec<LayerId> = node
            .children
            .iter()
            .copied()
            .filter(|&child| self.shown_under(child, config))
            .collect();
        let name = node.name.clone();

        if let Some(Value::Array(docs)) = config.get(CHILDREN_ATTRIBUTE, &name) {
            for doc in docs {
                let child = match self.load_subtree(doc) {
                    Ok(child) => child,
                    Err(err) => {
                        tracing::warn!(%err, "skipping configured child");
                        continue;
                    }
                };
                if self.shown_under(child, config) {
                    shown.push(child);
                } else {
                    self.delete_subtree(child)?;
                }
            }
        }
        Ok(shown)
    }

    fn shown_under(&self, id: LayerId, config: &ComponentConfiguration) -> bool {
        config
            .get(VISIBLE_ATTRIBUTE, &self[id].name)
            .and_then(Value::as_bool)
            .unwrap_or_else(|| self.visible(id))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
