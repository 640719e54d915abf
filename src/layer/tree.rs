//! Arena-backed layer tree.
//!
//! Nodes are owned by [`LayerTree`] and addressed by generation-checked [`LayerId`]s.
//! Children are owned top-down through their parent's child list; the `parent` link
//! is a plain id and never keeps anything alive.

use crate::foundation::error::{LayerError, LayerResult};
use crate::layer::kind::LayerType;
use crate::layer::params::{Params, params_equal};
use crate::layer::traverse::Descendants;
use std::ops::Index;

/// Handle to a layer inside a [`LayerTree`].
///
/// Ids stay valid until the layer is deleted; a reused slot gets a new generation so
/// stale ids are detected instead of aliasing a different layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

/// A single layer.
#[derive(Debug, Clone)]
pub struct LayerNode {
    pub(crate) name: String,
    pub(crate) layer_type: LayerType,
    pub(crate) params: Params,
    pub(crate) metadata: Params,
    pub(crate) children: Vec<LayerId>,
    pub(crate) parent: Option<LayerId>,
}

impl LayerNode {
    fn new(name: String, layer_type: LayerType) -> Self {
        Self {
            name,
            layer_type,
            params: Params::new(),
            metadata: Params::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Layer name, unique among siblings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Built-in kind or component reference.
    pub fn layer_type(&self) -> &LayerType {
        &self.layer_type
    }

    /// Raw style/behaviour parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Tool-only annotations.
    pub fn metadata(&self) -> &Params {
        &self.metadata
    }

    /// Child ids in order.
    pub fn children(&self) -> &[LayerId] {
        &self.children
    }

    /// Parent id, if attached.
    pub fn parent(&self) -> Option<LayerId> {
        self.parent
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<LayerNode>,
}

/// Owner of every layer of one document, with a designated root.
///
/// The tree is single-threaded by construction: mutation needs `&mut self`, so callers
/// that share it across threads must bring their own lock.
#[derive(Debug, Clone)]
pub struct LayerTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: LayerId,
}

impl LayerTree {
    /// Create a tree whose root is a fresh layer.
    pub fn new(name: impl Into<String>, layer_type: LayerType) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: LayerId {
                idx: 0,
                generation: 0,
            },
        };
        tree.root = tree.create_layer(name, layer_type);
        tree
    }

    /// Document root.
    pub fn root(&self) -> LayerId {
        self.root
    }

    /// Make a live, detached layer the document root.
    pub fn set_root(&mut self, id: LayerId) -> LayerResult<()> {
        let node = self.node(id)?;
        if node.parent.is_some() {
            return Err(LayerError::structure(format!(
                "layer '{}' has a parent and cannot become the root",
                node.name
            )));
        }
        self.root = id;
        Ok(())
    }

    /// Allocate a detached layer.
    pub fn create_layer(&mut self, name: impl Into<String>, layer_type: LayerType) -> LayerId {
        let node = LayerNode::new(name.into(), layer_type);
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.node = Some(node);
            LayerId {
                idx,
                generation: slot.generation,
            }
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            LayerId { idx, generation: 0 }
        }
    }

    /// `true` if `id` refers to a live layer.
    pub fn contains(&self, id: LayerId) -> bool {
        self.get(id).is_some()
    }

    /// Live layer for `id`.
    pub fn get(&self, id: LayerId) -> Option<&LayerNode> {
        self.slots
            .get(id.idx as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Number of live layers, attached or not.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// `true` when no layer is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn node(&self, id: LayerId) -> LayerResult<&LayerNode> {
        self.get(id)
            .ok_or_else(|| LayerError::structure(format!("stale layer id {id:?}")))
    }

    pub(crate) fn node_mut(&mut self, id: LayerId) -> LayerResult<&mut LayerNode> {
        self.slots
            .get_mut(id.idx as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or_else(|| LayerError::structure(format!("stale layer id {id:?}")))
    }

    /// Rename a layer.
    pub fn set_name(&mut self, id: LayerId, name: impl Into<String>) -> LayerResult<()> {
        self.node_mut(id)?.name = name.into();
        Ok(())
    }

    /// Change a layer's type.
    pub fn set_layer_type(&mut self, id: LayerId, layer_type: LayerType) -> LayerResult<()> {
        self.node_mut(id)?.layer_type = layer_type;
        Ok(())
    }

    /// Mutable access to a layer's metadata.
    pub fn metadata_mut(&mut self, id: LayerId) -> LayerResult<&mut Params> {
        Ok(&mut self.node_mut(id)?.metadata)
    }

    /// Insert `child` into `parent`'s children at `index`, detaching it from any
    /// previous parent first.
    ///
    /// `index` is interpreted after the detach, so moving a layer within the same parent
    /// addresses the list without it. Fails without touching the tree on stale ids, an
    /// out-of-range index, or when `child` is `parent` or one of its ancestors.
    pub fn insert_child(&mut self, parent: LayerId, child: LayerId, index: usize) -> LayerResult<()> {
        self.node(child)?;
        self.node(parent)?;
        if self.is_ancestor_or_self(child, parent) {
            let err = LayerError::structure(format!(
                "inserting '{}' under '{}' would create a cycle",
                self[child].name, self[parent].name
            ));
            tracing::warn!(%err, "rejected insert");
            return Err(err);
        }

        let siblings = &self[parent].children;
        let len_after_detach = siblings.len() - usize::from(siblings.contains(&child));
        if index > len_after_detach {
            let err = LayerError::structure(format!(
                "insert index {index} out of range for '{}' with {len_after_detach} children",
                self[parent].name
            ));
            tracing::warn!(%err, "rejected insert");
            return Err(err);
        }

        self.remove_from_parent(child);
        self.node_mut(parent)?.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        if child == self.root {
            tracing::debug!("former root attached; root moves to its new ancestor");
            self.root = self.root_ancestor(child);
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: LayerId, child: LayerId) -> LayerResult<()> {
        let siblings = &self.node(parent)?.children;
        let count = siblings.len() - usize::from(siblings.contains(&child));
        self.insert_child(parent, child, count)
    }

    /// Detach `id` from its parent, returning its former index.
    ///
    /// Returns `None` when the layer has no parent (or the id is stale). Removal matches
    /// by id, so structurally identical siblings are never confused.
    pub fn remove_from_parent(&mut self, id: LayerId) -> Option<usize> {
        let parent = self.get(id)?.parent?;
        let index = self
            .get(parent)
            .and_then(|p| p.children.iter().position(|&c| c == id));
        if let Some(p) = self.slot_node_mut(parent) {
            if let Some(i) = index {
                p.children.remove(i);
            }
        }
        if let Some(node) = self.slot_node_mut(id) {
            node.parent = None;
        }
        index
    }

    fn slot_node_mut(&mut self, id: LayerId) -> Option<&mut LayerNode> {
        self.node_mut(id).ok()
    }

    /// Detach `id` and free it together with all of its descendants.
    ///
    /// The document root cannot be deleted.
    pub fn delete_subtree(&mut self, id: LayerId) -> LayerResult<()> {
        self.node(id)?;
        if id == self.root {
            return Err(LayerError::structure("cannot delete the document root"));
        }
        self.remove_from_parent(id);
        let doomed: Vec<LayerId> = self.descendants(id).collect();
        for &d in &doomed {
            let slot = &mut self.slots[d.idx as usize];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(d.idx);
        }
        // Copies point at a parent without being listed in its children.
        for slot in &mut self.slots {
            if let Some(node) = slot.node.as_mut() {
                if node.parent.is_some_and(|p| doomed.contains(&p)) {
                    node.parent = None;
                }
            }
        }
        Ok(())
    }

    /// Parent of `id` when the parent is live and lists `id` among its children.
    fn attached_parent(&self, id: LayerId) -> Option<LayerId> {
        let parent = self.get(id)?.parent?;
        self.get(parent)?.children.contains(&id).then_some(parent)
    }

    /// Topmost ancestor of `id` (itself when detached).
    pub fn root_ancestor(&self, id: LayerId) -> LayerId {
        let mut current = id;
        while let Some(parent) = self.attached_parent(current) {
            current = parent;
        }
        current
    }

    /// `true` if `ancestor` is `id` or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: LayerId, id: LayerId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.attached_parent(c);
        }
        false
    }

    /// Number of children of `id`.
    pub fn child_count(&self, id: LayerId) -> usize {
        self.get(id).map_or(0, |n| n.children.len())
    }

    /// Child of `id` at `index`.
    pub fn child_at(&self, id: LayerId, index: usize) -> Option<LayerId> {
        self.get(id).and_then(|n| n.children.get(index).copied())
    }

    /// Position of `id` within its parent's children.
    pub fn index_in_parent(&self, id: LayerId) -> Option<usize> {
        let parent = self.get(id)?.parent?;
        self.get(parent)?.children.iter().position(|&c| c == id)
    }

    /// Pre-order walk over `id` and all of its descendants.
    pub fn descendants(&self, id: LayerId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// `id` and every transitive child, pre-order.
    pub fn descendant_layers(&self, id: LayerId) -> Vec<LayerId> {
        self.descendants(id).collect()
    }

    /// Names of `id`'s descendants.
    ///
    /// With `including_self` the names come back in pre-order. Without it, every name equal
    /// to this layer's own name is dropped and the rest are sorted.
    pub fn descendant_layer_names(&self, id: LayerId, including_self: bool) -> Vec<String> {
        let names = self.descendants(id).map(|d| self[d].name.clone());
        if including_self {
            return names.collect();
        }
        let own = self.get(id).map(|n| n.name.as_str()).unwrap_or_default();
        let mut names: Vec<String> = names.filter(|n| n != own).collect();
        names.sort();
        names
    }

    /// First layer named `name` in a pre-order walk from `id`.
    pub fn find_descendant_by_name(&self, id: LayerId, name: &str) -> Option<LayerId> {
        self.descendants(id).find(|&d| self[d].name == name)
    }

    /// Content equality of two subtrees: name, type, children, parameters, metadata.
    ///
    /// Parents are ignored, so equal subtrees may sit at different places.
    pub fn layers_equal(&self, a: LayerId, other: &LayerTree, b: LayerId) -> bool {
        let (Some(x), Some(y)) = (self.get(a), other.get(b)) else {
            return false;
        };
        x.name == y.name
            && x.layer_type == y.layer_type
            && params_equal(&x.params, &y.params)
            && params_equal(&x.metadata, &y.metadata)
            && x.children.len() == y.children.len()
            && x
                .children
                .iter()
                .zip(&y.children)
                .all(|(&ca, &cb)| self.layers_equal(ca, other, cb))
    }
}

impl Index<LayerId> for LayerTree {
    type Output = LayerNode;

    /// Panics if `id` is stale; use [`LayerTree::get`] for a checked lookup.
    fn index(&self, id: LayerId) -> &LayerNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale layer id {id:?}"),
        }
    }
}

impl PartialEq for LayerTree {
    fn eq(&self, other: &Self) -> bool {
        self.layers_equal(self.root, other, other.root)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/tree.rs"]
mod tests;
