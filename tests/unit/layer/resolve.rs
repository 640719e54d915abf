use super::*;
use crate::component::{Component, ComponentLibrary};
use crate::layer::accessibility::AccessibilityElement;
use crate::layer::kind::LayerType;

fn element() -> AccessibilityType {
    AccessibilityType::Element(AccessibilityElement::default())
}

fn add(tree: &mut LayerTree, parent: LayerId, name: &str, ty: LayerType) -> LayerId {
    let id = tree.create_layer(name, ty);
    tree.append_child(parent, id).unwrap();
    id
}

#[test]
fn container_order_follows_declared_list() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    let a = add(&mut tree, root, "a", LayerType::VIEW);
    let b = add(&mut tree, root, "b", LayerType::VIEW);
    tree.set_accessibility(a, &element()).unwrap();
    tree.set_accessibility(b, &element()).unwrap();
    tree.set_accessibility(root, &AccessibilityType::Container(vec!["b".into(), "a".into()]))
        .unwrap();

    assert_eq!(tree.accessibility_element_hierarchy(root), vec![b, a]);
    assert_eq!(
        tree.accessibility_element_paths(root, None),
        vec![vec!["b".to_string()], vec!["a".to_string()]]
    );
}

#[test]
fn unknown_container_names_are_skipped() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    let a = add(&mut tree, root, "a", LayerType::VIEW);
    tree.set_accessibility(a, &element()).unwrap();
    tree.set_accessibility(
        root,
        &AccessibilityType::Container(vec!["ghost".into(), "a".into(), "Root".into()]),
    )
    .unwrap();

    assert_eq!(tree.accessibility_element_hierarchy(root), vec![a]);
    assert_eq!(tree.accessibility_element_paths(root, None).len(), 1);
}

#[test]
fn auto_recurses_and_none_hides_subtree() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    let group = add(&mut tree, root, "Group", LayerType::VIEW);
    let hidden = add(&mut tree, root, "Hidden", LayerType::VIEW);
    let label = add(&mut tree, group, "Label", LayerType::TEXT);
    let secret = add(&mut tree, hidden, "Secret", LayerType::TEXT);
    tree.set_accessibility(label, &element()).unwrap();
    tree.set_accessibility(secret, &element()).unwrap();
    tree.set_accessibility(hidden, &AccessibilityType::None).unwrap();

    assert_eq!(tree.accessibility_element_hierarchy(root), vec![label]);
}

#[test]
fn element_does_not_expose_its_children() {
    let mut tree = LayerTree::new("Button", LayerType::VIEW);
    let root = tree.root();
    let inner = add(&mut tree, root, "Text", LayerType::TEXT);
    tree.set_accessibility(root, &element()).unwrap();
    tree.set_accessibility(inner, &element()).unwrap();

    assert_eq!(tree.accessibility_element_hierarchy(root), vec![root]);
}

fn button_component() -> Component {
    let mut tree = LayerTree::new("ButtonRoot", LayerType::VIEW);
    let root = tree.root();
    let title = add(&mut tree, root, "Title", LayerType::TEXT);
    let icon = add(&mut tree, root, "Icon", LayerType::IMAGE);
    tree.set_accessibility(title, &element()).unwrap();
    tree.set_accessibility(icon, &element()).unwrap();
    Component::new("Button", tree)
}

#[test]
fn subcomponents_expand_with_qualified_paths() {
    let mut library = ComponentLibrary::new();
    library.insert(button_component());

    let mut screen = LayerTree::new("Screen", LayerType::VIEW);
    let root = screen.root();
    add(&mut screen, root, "Save", LayerType::Custom("Button".into()));

    assert_eq!(
        screen.accessibility_element_paths(root, Some(&library)),
        vec![
            vec!["Save".to_string(), "Title".to_string()],
            vec!["Save".to_string(), "Icon".to_string()],
        ]
    );
    // Without expansion the custom layer is an ordinary auto layer with no children.
    assert!(screen.accessibility_element_paths(root, None).is_empty());
}

#[test]
fn unresolvable_component_falls_back_to_own_accessibility() {
    let library = ComponentLibrary::new();
    let mut screen = LayerTree::new("Screen", LayerType::VIEW);
    let root = screen.root();
    let missing = add(&mut screen, root, "Missing", LayerType::Custom("Nope".into()));
    screen.set_accessibility(missing, &element()).unwrap();

    assert_eq!(
        screen.accessibility_element_paths(root, Some(&library)),
        vec![vec!["Missing".to_string()]]
    );
}

#[test]
fn recursive_components_terminate() {
    let mut tree = LayerTree::new("LoopRoot", LayerType::VIEW);
    let root = tree.root();
    add(&mut tree, root, "Again", LayerType::Custom("Loop".into()));
    let mut library = ComponentLibrary::new();
    library.insert(Component::new("Loop", tree));

    let mut screen = LayerTree::new("Screen", LayerType::VIEW);
    let screen_root = screen.root();
    add(&mut screen, screen_root, "Entry", LayerType::Custom("Loop".into()));

    assert!(
        screen
            .accessibility_element_paths(screen_root, Some(&library))
            .is_empty()
    );
}

#[test]
fn mutually_referencing_containers_terminate() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    let x = add(&mut tree, root, "X", LayerType::VIEW);
    let y = add(&mut tree, root, "Y", LayerType::VIEW);
    tree.set_accessibility(x, &AccessibilityType::Container(vec!["Y".into()]))
        .unwrap();
    tree.set_accessibility(y, &AccessibilityType::Container(vec!["X".into()]))
        .unwrap();

    assert!(tree.accessibility_element_paths(root, None).is_empty());
}
