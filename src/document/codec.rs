use crate::document::defaults::normalize_params;
use crate::foundation::error::{LayerError, LayerResult};
use crate::layer::kind::LayerType;
use crate::layer::params::Params;
use crate::layer::tree::{LayerId, LayerTree};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Boundary JSON shape of one layer.
///
/// Legacy documents spell `id` as `name` and `params` as `parameters`; both are accepted
/// on read and never written. When both spellings are present the current one wins, and
/// `null` stands for an empty map or list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawLayerDef")]
pub struct LayerDef {
    /// Layer name.
    pub id: String,
    /// Type string: `Lona:<BuiltIn>`, legacy `<BuiltIn>`, or a component name.
    #[serde(rename = "type")]
    pub layer_type: String,
    /// Parameters; defaults and nulls are stripped on write.
    pub params: Params,
    /// Child layers, omitted when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerDef>,
    /// Tool annotations, omitted when empty.
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub metadata: Params,
}

#[derive(Deserialize)]
struct RawLayerDef {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    layer_type: String,
    #[serde(default)]
    params: Option<Params>,
    #[serde(default)]
    parameters: Option<Params>,
    #[serde(default)]
    children: Option<Vec<LayerDef>>,
    #[serde(default)]
    metadata: Option<Params>,
}

impl TryFrom<RawLayerDef> for LayerDef {
    type Error = String;

    fn try_from(raw: RawLayerDef) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.name)
            .ok_or_else(|| "missing field `id`".to_string())?;
        Ok(Self {
            id,
            layer_type: raw.layer_type,
            params: raw.params.or(raw.parameters).unwrap_or_default(),
            children: raw.children.unwrap_or_default(),
            metadata: raw.metadata.unwrap_or_default(),
        })
    }
}

impl LayerDef {
    /// Parse from a JSON value.
    pub fn from_value(value: &Value) -> LayerResult<Self> {
        Self::deserialize(value).map_err(|e| LayerError::decode(e.to_string()))
    }
}

impl LayerTree {
    /// Normalized boundary model of the subtree at `id`.
    pub fn to_def(&self, id: LayerId) -> LayerResult<LayerDef> {
        let node = self.node(id)?;
        Ok(LayerDef {
            id: node.name.clone(),
            layer_type: node.layer_type.to_document_string(),
            params: normalize_params(&node.params),
            children: node
                .children
                .iter()
                .map(|&c| self.to_def(c))
                .collect::<LayerResult<_>>()?,
            metadata: node.metadata.clone(),
        })
    }

    /// Encode the subtree at `id` as a document value.
    pub fn to_data(&self, id: LayerId) -> LayerResult<Value> {
        serde_json::to_value(self.to_def(id)?).map_err(|e| LayerError::serde(e.to_string()))
    }

    /// Encode the whole document as pretty JSON.
    pub fn to_json_string_pretty(&self) -> LayerResult<String> {
        serde_json::to_string_pretty(&self.to_def(self.root())?)
            .map_err(|e| LayerError::serde(e.to_string()))
    }

    /// Build a tree whose root is decoded from `def`.
    pub fn from_def(def: &LayerDef) -> LayerResult<Self> {
        let root_type = LayerType::parse(&def.layer_type).map_err(|e| at_layer(&def.id, e))?;
        let mut tree = LayerTree::new(def.id.clone(), root_type);
        let root = tree.root();
        tree.fill_from_def(root, def)?;
        Ok(tree)
    }

    /// Decode a tree from a document value.
    #[tracing::instrument(skip(value))]
    pub fn from_data(value: &Value) -> LayerResult<Self> {
        Self::from_def(&LayerDef::from_value(value)?)
    }

    /// Decode a tree from JSON text.
    pub fn from_json_str(s: &str) -> LayerResult<Self> {
        let def: LayerDef =
            serde_json::from_str(s).map_err(|e| LayerError::decode(e.to_string()))?;
        Self::from_def(&def)
    }

    /// Decode a tree from a JSON file.
    pub fn from_path(path: &Path) -> LayerResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| LayerError::io(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    /// Decode `def` into this arena as a detached subtree.
    ///
    /// On error nothing decoded so far is left behind.
    pub fn load_def(&mut self, def: &LayerDef) -> LayerResult<LayerId> {
        let layer_type = LayerType::parse(&def.layer_type).map_err(|e| at_layer(&def.id, e))?;
        let id = self.create_layer(def.id.clone(), layer_type);
        if let Err(e) = self.fill_from_def(id, def) {
            self.free_detached(id);
            return Err(e);
        }
        Ok(id)
    }

    /// Decode a document value into this arena as a detached subtree.
    pub fn load_subtree(&mut self, value: &Value) -> LayerResult<LayerId> {
        let def = LayerDef::from_value(value)?;
        self.load_def(&def)
    }

    fn fill_from_def(&mut self, id: LayerId, def: &LayerDef) -> LayerResult<()> {
        {
            let node = self.node_mut(id)?;
            node.params = def.params.clone();
            node.metadata = def.metadata.clone();
        }
        for child_def in &def.children {
            let child = self.load_def(child_def)?;
            self.append_child(id, child)?;
        }
        Ok(())
    }

    fn free_detached(&mut self, id: LayerId) {
        if id == self.root() {
            return;
        }
        if let Err(e) = self.delete_subtree(id) {
            tracing::warn!(%e, "failed to release partially decoded layer");
        }
    }

    /// Deep copy of the subtree at `id`, made by encoding and decoding it.
    ///
    /// The copy lives in this arena, shares no state with the original, and records the
    /// original's parent as its own without being inserted into that parent's children.
    pub fn copy_layer(&mut self, id: LayerId) -> LayerResult<LayerId> {
        let def = self.to_def(id)?;
        let parent = self.node(id)?.parent;
        let copy = self.load_def(&def)?;
        self.node_mut(copy)?.parent = parent;
        Ok(copy)
    }
}

fn at_layer(name: &str, err: LayerError) -> LayerError {
    match err {
        LayerError::Decode(msg) => LayerError::decode(format!("layer '{name}': {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/codec.rs"]
mod tests;
