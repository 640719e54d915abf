//! `.component` documents and the library that resolves component references.

use crate::document::codec::LayerDef;
use crate::foundation::error::{LayerError, LayerResult};
use crate::layer::params::Params;
use crate::layer::tree::LayerTree;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// File extension of component documents.
pub const COMPONENT_EXTENSION: &str = "component";

/// Looks up the root layer tree of a component by name.
///
/// Custom layer types name a component; accessibility resolution uses this seam to
/// descend into the referenced component.
pub trait ComponentResolver {
    /// Layer tree of the component called `name`.
    fn resolve_component(&self, name: &str) -> Option<&LayerTree>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComponentDef {
    #[serde(rename = "rootLayer")]
    root_layer: LayerDef,
    #[serde(default)]
    params: Vec<ComponentParameter>,
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    metadata: Params,
}

/// Declared input of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentParameter {
    /// Parameter name.
    pub name: String,
    /// Type annotation, kept as written.
    #[serde(rename = "type", default)]
    pub ty: Value,
}

/// A loaded component: its layer tree plus declared parameters.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    root: LayerTree,
    params: Vec<ComponentParameter>,
    metadata: Params,
}

impl Component {
    /// Wrap an existing tree.
    pub fn new(name: impl Into<String>, root: LayerTree) -> Self {
        Self {
            name: name.into(),
            root,
            params: Vec::new(),
            metadata: Params::new(),
        }
    }

    /// Decode a component document, or a bare layer document used as a root.
    pub fn from_value(name: impl Into<String>, value: &Value) -> LayerResult<Self> {
        let name = name.into();
        if value.get("rootLayer").is_some() {
            let def = ComponentDef::deserialize(value)
                .map_err(|e| LayerError::component(format!("component '{name}': {e}")))?;
            return Ok(Self {
                root: LayerTree::from_def(&def.root_layer)?,
                params: def.params,
                metadata: def.metadata,
                name,
            });
        }
        Ok(Self::new(name, LayerTree::from_data(value)?))
    }

    /// Load a component from disk; its name is the file stem.
    #[tracing::instrument]
    pub fn load(path: &Path) -> LayerResult<Self> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                LayerError::component(format!("no component name in '{}'", path.display()))
            })?
            .to_string();
        let s = std::fs::read_to_string(path)
            .map_err(|e| LayerError::io(format!("read '{}': {e}", path.display())))?;
        let value: Value = serde_json::from_str(&s)
            .map_err(|e| LayerError::decode(format!("'{}': {e}", path.display())))?;
        Self::from_value(name, &value)
    }

    /// Encode as a component document with a normalized root layer.
    pub fn to_data(&self) -> LayerResult<Value> {
        let def = ComponentDef {
            root_layer: self.root.to_def(self.root.root())?,
            params: self.params.clone(),
            metadata: self.metadata.clone(),
        };
        serde_json::to_value(def).map_err(|e| LayerError::serde(e.to_string()))
    }

    /// Component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Layer tree.
    pub fn root(&self) -> &LayerTree {
        &self.root
    }

    /// Mutable layer tree.
    pub fn root_mut(&mut self) -> &mut LayerTree {
        &mut self.root
    }

    /// Declared parameters.
    pub fn params(&self) -> &[ComponentParameter] {
        &self.params
    }

    /// Document-level metadata.
    pub fn metadata(&self) -> &Params {
        &self.metadata
    }
}

/// Components of a workspace, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ComponentLibrary {
    components: BTreeMap<String, Component>,
}

impl ComponentLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.component` file below `root`.
    ///
    /// Documents that fail to decode are logged and skipped so one broken file does not
    /// take the workspace down; a missing or unreadable `root` is an error.
    #[tracing::instrument]
    pub fn load_workspace(root: &Path) -> LayerResult<Self> {
        if !root.is_dir() {
            return Err(LayerError::io(format!(
                "workspace '{}' is not a directory",
                root.display()
            )));
        }
        let mut library = Self::new();
        for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| LayerError::io(e.to_string()))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(COMPONENT_EXTENSION)
            {
                continue;
            }
            match Component::load(path) {
                Ok(component) => {
                    if library.contains(component.name()) {
                        tracing::warn!(path = %path.display(), "duplicate component name; keeping the first");
                        continue;
                    }
                    library.insert(component);
                }
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping component"),
            }
        }
        tracing::debug!(count = library.len(), "workspace loaded");
        Ok(library)
    }

    /// Add or replace a component.
    pub fn insert(&mut self, component: Component) -> Option<Component> {
        self.components.insert(component.name.clone(), component)
    }

    /// Component by name.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    /// `true` if a component called `name` is loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Sorted component names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` when no component is loaded.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentResolver for ComponentLibrary {
    fn resolve_component(&self, name: &str) -> Option<&LayerTree> {
        self.get(name).map(Component::root)
    }
}

#[cfg(test)]
#[path = "../tests/unit/component.rs"]
mod tests;
