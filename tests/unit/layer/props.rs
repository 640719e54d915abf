use super::*;
use crate::layer::kind::LayerType;
use serde_json::json;

fn row_with_child() -> (LayerTree, LayerId, LayerId) {
    let mut tree = LayerTree::new("Row", LayerType::VIEW);
    let root = tree.root();
    tree.set_param(root, "flexDirection", "row").unwrap();
    let child = tree.create_layer("Child", LayerType::VIEW);
    tree.append_child(root, child).unwrap();
    (tree, root, child)
}

#[test]
fn expand_on_row_sets_flex_and_removes_width() {
    let (mut tree, _, child) = row_with_child();
    tree.set_width(child, Some(120.0)).unwrap();

    tree.set_width_sizing_rule(child, SizingRule::Expand).unwrap();

    assert_eq!(tree.width_sizing_rule(child), SizingRule::Expand);
    assert_eq!(tree.flex(child), Some(1.0));
    assert_eq!(tree.width(child), None);
}

#[test]
fn fixed_on_row_keeps_width_and_drops_flex() {
    let (mut tree, _, child) = row_with_child();
    tree.set_width_sizing_rule(child, SizingRule::Expand).unwrap();

    tree.set_width_sizing_rule(child, SizingRule::Fixed).unwrap();

    assert_eq!(tree.width_sizing_rule(child), SizingRule::Fixed);
    assert_eq!(tree.width(child), Some(0.0));
    assert_eq!(tree.flex(child), None);
}

#[test]
fn shrink_on_row_drops_both() {
    let (mut tree, _, child) = row_with_child();
    tree.set_width(child, Some(5.0)).unwrap();
    tree.set_flex(child, Some(1.0)).unwrap();

    tree.set_width_sizing_rule(child, SizingRule::Shrink).unwrap();

    assert_eq!(tree.width_sizing_rule(child), SizingRule::Shrink);
    assert_eq!(tree.width(child), None);
    assert_eq!(tree.flex(child), None);
}

#[test]
fn detached_layers_size_as_if_in_a_column() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    tree.set_flex(root, Some(1.0)).unwrap();
    assert_eq!(tree.height_sizing_rule(root), SizingRule::Expand);
    assert_eq!(tree.width_sizing_rule(root), SizingRule::Shrink);
}

#[test]
fn raw_axis_flip_reinterprets_flex_along_the_new_main_axis() {
    let (mut tree, root, child) = row_with_child();
    tree.set_width_sizing_rule(child, SizingRule::Expand).unwrap();

    tree.set_param(root, "flexDirection", "column").unwrap();

    assert_eq!(tree.height_sizing_rule(child), SizingRule::Expand);
    assert_eq!(tree.width_sizing_rule(child), SizingRule::Shrink);
}

#[test]
fn preserving_axis_flip_keeps_each_childs_rules() {
    let (mut tree, root, child) = row_with_child();
    tree.set_width_sizing_rule(child, SizingRule::Expand).unwrap();
    tree.set_height_sizing_rule(child, SizingRule::Fixed).unwrap();
    tree.set_height(child, Some(30.0)).unwrap();

    tree.set_flex_direction(root, Some(FlexDirection::Column))
        .unwrap();

    assert_eq!(tree.flex_direction(root), FlexDirection::Column);
    assert_eq!(tree.width_sizing_rule(child), SizingRule::Expand);
    assert_eq!(tree.height_sizing_rule(child), SizingRule::Fixed);
    assert_eq!(tree.align_self(child), Some("stretch"));
    assert_eq!(tree.flex(child), None);
    assert_eq!(tree.height(child), Some(30.0));
}

#[test]
fn axis_flip_preserves_alignment() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    tree.set_horizontal_alignment(root, "center").unwrap();
    tree.set_vertical_alignment(root, "flex-end").unwrap();
    assert_eq!(tree.align_items(root), Some("center"));
    assert_eq!(tree.justify_content(root), Some("flex-end"));

    tree.set_flex_direction(root, Some(FlexDirection::Row)).unwrap();

    assert_eq!(tree.horizontal_alignment(root), "center");
    assert_eq!(tree.vertical_alignment(root), "flex-end");
    assert_eq!(tree.justify_content(root), Some("center"));
    assert_eq!(tree.align_items(root), Some("flex-end"));
}

#[test]
fn accessibility_setter_replaces_reserved_keys() {
    let mut tree = LayerTree::new("Root", LayerType::VIEW);
    let root = tree.root();
    tree.set_param(root, "accessibilityLabel", "stale").unwrap();

    tree.set_accessibility(root, &AccessibilityType::Container(vec!["b".into()]))
        .unwrap();

    assert_eq!(
        tree.accessibility(root),
        AccessibilityType::Container(vec!["b".into()])
    );
    assert_eq!(tree.param(root, "accessibilityLabel"), None);
}

#[test]
fn typed_accessors_and_defaults() {
    let mut tree = LayerTree::new("Title", LayerType::TEXT);
    let id = tree.root();

    assert!(tree.visible(id));
    assert_eq!(tree.border_style(id), BorderStyle::Solid);
    assert_eq!(tree.param_or_default(id, "opacity"), Some(json!(1)));
    assert_eq!(tree.param_or_default(id, "text"), None);

    tree.set_visible(id, false).unwrap();
    tree.set_param(id, "font", "body").unwrap();
    tree.set_param(id, "textStyle", "headline").unwrap();
    tree.set_number_of_lines(id, Some(2)).unwrap();
    tree.set_border_style(id, BorderStyle::Dashed).unwrap();
    tree.set_resize_mode(id, Some(ResizeMode::Contain)).unwrap();
    tree.set_position(id, Some(PositionType::Absolute)).unwrap();
    tree.set_top(id, Some(4.0)).unwrap();

    assert!(!tree.visible(id));
    assert_eq!(tree.font(id), Some("headline"));
    assert_eq!(tree.number_of_lines(id), Some(2));
    assert_eq!(tree.border_style(id), BorderStyle::Dashed);
    assert_eq!(tree.resize_mode(id), Some(ResizeMode::Contain));
    assert_eq!(tree.position(id), Some(PositionType::Absolute));
    assert_eq!(tree.top(id), Some(4.0));

    tree.set_top(id, None).unwrap();
    assert_eq!(tree.param(id, "top"), None);
}

#[test]
fn border_style_index_mapping() {
    assert_eq!(BorderStyle::from_index(1), BorderStyle::Dotted);
    assert_eq!(BorderStyle::from_index(9), BorderStyle::Solid);
    assert_eq!(BorderStyle::Dashed.index(), 2);
    assert_eq!("dotted".parse::<BorderStyle>().unwrap(), BorderStyle::Dotted);
}
