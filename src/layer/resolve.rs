//! Accessibility element resolution.
//!
//! `Auto` layers defer to their children, `None` hides a subtree, `Element` is a leaf,
//! and `Container` exposes named descendants in the listed order. Names that match no
//! descendant are skipped.

use crate::component::ComponentResolver;
use crate::layer::accessibility::AccessibilityType;
use crate::layer::tree::{LayerId, LayerTree};

impl LayerTree {
    /// Name paths of the accessibility elements reachable from `id`.
    ///
    /// Paths are component-qualified: entering a component reference prepends that
    /// layer's name, otherwise a path is just the element's name. With `subcomponents`
    /// set, custom layers whose component resolves are replaced by that component's own
    /// elements; a component already being expanded is not entered again.
    pub fn accessibility_element_paths(
        &self,
        id: LayerId,
        subcomponents: Option<&dyn ComponentResolver>,
    ) -> Vec<Vec<String>> {
        let mut walk = PathWalk {
            subcomponents,
            expanding: Vec::new(),
        };
        walk.paths_from(self, id)
    }

    /// Layers exposed as accessibility elements below `id`, in announcement order.
    ///
    /// Container names resolve against the container's own descendants.
    pub fn accessibility_element_hierarchy(&self, id: LayerId) -> Vec<LayerId> {
        let mut out = Vec::new();
        self.collect_hierarchy(id, &mut out);
        out
    }

    fn collect_hierarchy(&self, id: LayerId, out: &mut Vec<LayerId>) {
        let node = &self[id];
        match AccessibilityType::from_params(&node.params) {
            AccessibilityType::Auto => {
                for &child in &node.children {
                    self.collect_hierarchy(child, out);
                }
            }
            AccessibilityType::None => {}
            AccessibilityType::Element(_) => out.push(id),
            AccessibilityType::Container(names) => {
                let scope = self.descendant_layers(id);
                for target in self.resolve_names(&names, &scope) {
                    // A container naming itself would otherwise recurse forever.
                    if target == id {
                        continue;
                    }
                    self.collect_hierarchy(target, out);
                }
            }
        }
    }

    fn resolve_names(&self, names: &[String], scope: &[LayerId]) -> Vec<LayerId> {
        names
            .iter()
            .filter_map(|name| scope.iter().copied().find(|&l| self[l].name == *name))
            .collect()
    }
}

struct PathWalk<'r> {
    subcomponents: Option<&'r dyn ComponentResolver>,
    /// Components currently being expanded, outermost first.
    expanding: Vec<String>,
}

impl PathWalk<'_> {
    fn paths_from(&mut self, tree: &LayerTree, id: LayerId) -> Vec<Vec<String>> {
        let scope = tree.descendant_layers(id);
        let mut containers = Vec::new();
        let mut out = Vec::new();
        self.collect(tree, id, &scope, &mut containers, &mut out);
        out
    }

    fn collect(
        &mut self,
        tree: &LayerTree,
        id: LayerId,
        scope: &[LayerId],
        containers: &mut Vec<LayerId>,
        out: &mut Vec<Vec<String>>,
    ) {
        let node = &tree[id];

        if let (Some(resolver), Some(component)) =
            (self.subcomponents, node.layer_type().component_name())
        {
            if self.expanding.iter().any(|c| c == component) {
                tracing::warn!(component, "recursive component reference; not expanding");
            } else if let Some(inner) = resolver.resolve_component(component) {
                self.expanding.push(component.to_string());
                let paths = self.paths_from(inner, inner.root());
                self.expanding.pop();
                out.extend(paths.into_iter().map(|path| {
                    let mut full = vec![node.name().to_string()];
                    full.extend(path);
                    full
                }));
                return;
            }
        }

        match AccessibilityType::from_params(node.params()) {
            AccessibilityType::Auto => {
                for &child in node.children() {
                    self.collect(tree, child, scope, containers, out);
                }
            }
            AccessibilityType::None => {}
            AccessibilityType::Element(_) => out.push(vec![node.name().to_string()]),
            AccessibilityType::Container(names) => {
                if containers.contains(&id) {
                    tracing::warn!(layer = node.name(), "accessibility container cycle");
                    return;
                }
                containers.push(id);
                for target in tree.resolve_names(&names, scope) {
                    self.collect(tree, target, scope, containers, out);
                }
                containers.pop();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/resolve.rs"]
mod tests;
