//! Tree traversal utilities.

use super::tree::{LayerId, LayerTree};

/// Pre-order iterator over a layer and all of its descendants.
///
/// Created by [`LayerTree::descendants`]. A stale starting id yields nothing.
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a LayerTree,
    stack: Vec<LayerId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a LayerTree, start: LayerId) -> Self {
        let stack = if tree.contains(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Self { tree, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = LayerId;

    fn next(&mut self) -> Option<LayerId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.get(id) {
            self.stack.extend(node.children().iter().rev().copied());
        }
        Some(id)
    }
}
