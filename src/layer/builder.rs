use crate::foundation::error::LayerResult;
use crate::layer::kind::LayerType;
use crate::layer::params::Params;
use crate::layer::sizing::{Dimension, SizingRule};
use crate::layer::tree::{LayerId, LayerTree};
use serde_json::Value;

const WIDTH_RULE_KEY: &str = "widthSizingRule";
const HEIGHT_RULE_KEY: &str = "heightSizingRule";

/// Declarative construction of a layer subtree.
///
/// The pseudo-parameters `widthSizingRule` and `heightSizingRule` are not stored; once
/// the layer is attached they are turned into the raw parameters that produce the rule
/// relative to the parent's direction.
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    name: String,
    layer_type: LayerType,
    params: Params,
    metadata: Params,
    children: Vec<LayerBuilder>,
}

impl LayerBuilder {
    /// Start a layer of any type.
    pub fn new(name: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            name: name.into(),
            layer_type,
            params: Params::new(),
            metadata: Params::new(),
            children: Vec::new(),
        }
    }

    /// Start a `View` layer.
    pub fn view(name: impl Into<String>) -> Self {
        Self::new(name, LayerType::VIEW)
    }

    /// Start a `Text` layer with its text.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, LayerType::TEXT).param("text", text.into())
    }

    /// Start an `Image` layer with its source URL.
    pub fn image(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(name, LayerType::IMAGE).param("image", source.into())
    }

    /// Start an instance of another component.
    pub fn component(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self::new(name, LayerType::Custom(component.into()))
    }

    /// Set a raw parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set a metadata entry.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Request a width sizing rule.
    pub fn width_sizing(self, rule: SizingRule) -> Self {
        self.param(WIDTH_RULE_KEY, rule.as_str())
    }

    /// Request a height sizing rule.
    pub fn height_sizing(self, rule: SizingRule) -> Self {
        self.param(HEIGHT_RULE_KEY, rule.as_str())
    }

    /// Append a child.
    pub fn child(mut self, child: LayerBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Build a standalone tree rooted at this layer.
    pub fn build(self) -> LayerResult<LayerTree> {
        let mut tree = LayerTree::new(self.name.clone(), self.layer_type.clone());
        let root = tree.root();
        self.fill(&mut tree, root)?;
        Ok(tree)
    }

    /// Build into an existing arena and append the result to `parent`.
    pub fn build_into(self, tree: &mut LayerTree, parent: LayerId) -> LayerResult<LayerId> {
        let id = tree.create_layer(self.name.clone(), self.layer_type.clone());
        tree.append_child(parent, id)?;
        self.fill(tree, id)?;
        Ok(id)
    }

    fn fill(mut self, tree: &mut LayerTree, id: LayerId) -> LayerResult<()> {
        let width_rule = self.params.remove(WIDTH_RULE_KEY);
        let height_rule = self.params.remove(HEIGHT_RULE_KEY);
        {
            let node = tree.node_mut(id)?;
            node.params = std::mem::take(&mut self.params);
            node.metadata = std::mem::take(&mut self.metadata);
        }
        for (dimension, rule) in [
            (Dimension::Width, width_rule),
            (Dimension::Height, height_rule),
        ] {
            if let Some(rule) = rule {
                let rule = rule.as_str().map_or(SizingRule::Shrink, SizingRule::from_str_lossy);
                tree.set_sizing_rule(id, dimension, rule)?;
            }
        }
        // Children read this layer's direction, so they are attached after its params.
        for child in self.children {
            child.build_into(tree, id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/builder.rs"]
mod tests;
