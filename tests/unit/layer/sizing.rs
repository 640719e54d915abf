use super::*;
use serde_json::json;

fn params(pairs: &[(&str, serde_json::Value)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn applied(p: &Params, dim: Dimension, rule: SizingRule, parent: FlexDirection) -> Params {
    let mut out = p.clone();
    apply_sizing_rule(p, dim, rule, parent).apply(&mut out);
    out
}

#[test]
fn main_axis_uses_flex_then_extent() {
    let row = FlexDirection::Row;
    assert_eq!(
        derive_sizing_rule(&params(&[("flex", json!(1))]), Dimension::Width, row),
        SizingRule::Expand
    );
    assert_eq!(
        derive_sizing_rule(&params(&[("width", json!(20))]), Dimension::Width, row),
        SizingRule::Fixed
    );
    assert_eq!(
        derive_sizing_rule(&Params::new(), Dimension::Width, row),
        SizingRule::Shrink
    );
    // Flex other than 1 does not count as expanding.
    assert_eq!(
        derive_sizing_rule(&params(&[("flex", json!(2))]), Dimension::Width, row),
        SizingRule::Shrink
    );
}

#[test]
fn cross_axis_uses_align_self_then_extent() {
    let col = FlexDirection::Column;
    assert_eq!(
        derive_sizing_rule(
            &params(&[("alignSelf", json!("stretch"))]),
            Dimension::Width,
            col
        ),
        SizingRule::Expand
    );
    assert_eq!(
        derive_sizing_rule(&params(&[("width", json!(0))]), Dimension::Width, col),
        SizingRule::Fixed
    );
    assert_eq!(
        derive_sizing_rule(&params(&[("flex", json!(1))]), Dimension::Width, col),
        SizingRule::Shrink
    );
}

#[test]
fn expand_on_row_sets_flex_and_drops_width() {
    let p = applied(
        &params(&[("width", json!(100))]),
        Dimension::Width,
        SizingRule::Expand,
        FlexDirection::Row,
    );
    assert_eq!(p.number("flex"), Some(1.0));
    assert!(!p.contains_key("width"));
    assert_eq!(
        derive_sizing_rule(&p, Dimension::Width, FlexDirection::Row),
        SizingRule::Expand
    );
}

#[test]
fn fixed_keeps_existing_extent_or_zero() {
    let p = applied(
        &params(&[("flex", json!(1)), ("height", json!(40))]),
        Dimension::Height,
        SizingRule::Fixed,
        FlexDirection::Column,
    );
    assert!(!p.contains_key("flex"));
    assert_eq!(p.number("height"), Some(40.0));

    let p = applied(
        &Params::new(),
        Dimension::Width,
        SizingRule::Fixed,
        FlexDirection::Row,
    );
    assert_eq!(p.number("width"), Some(0.0));
}

#[test]
fn shrink_removes_governing_and_extent() {
    let p = applied(
        &params(&[("alignSelf", json!("stretch")), ("height", json!(3))]),
        Dimension::Height,
        SizingRule::Shrink,
        FlexDirection::Row,
    );
    assert!(p.is_empty());
}

#[test]
fn every_rule_round_trips_on_both_axes() {
    for parent in [FlexDirection::Row, FlexDirection::Column] {
        for dim in [Dimension::Width, Dimension::Height] {
            for rule in [SizingRule::Fixed, SizingRule::Shrink, SizingRule::Expand] {
                let p = applied(&Params::new(), dim, rule, parent);
                assert_eq!(derive_sizing_rule(&p, dim, parent), rule);
            }
        }
    }
}

#[test]
fn alignment_keys_swap_with_direction() {
    let row = params(&[("flexDirection", json!("row")), ("justifyContent", json!("center"))]);
    assert_eq!(derive_alignment(&row, AlignmentAxis::Horizontal), "center");
    assert_eq!(derive_alignment(&row, AlignmentAxis::Vertical), "flex-start");

    let col = params(&[("justifyContent", json!("center"))]);
    assert_eq!(derive_alignment(&col, AlignmentAxis::Vertical), "center");

    let mut out = col.clone();
    apply_alignment(&col, AlignmentAxis::Horizontal, "flex-end").apply(&mut out);
    assert_eq!(out.string("alignItems"), Some("flex-end"));
}

#[test]
fn sizing_rule_names_parse_leniently() {
    assert_eq!(SizingRule::from_str_lossy("Expand"), SizingRule::Expand);
    assert_eq!(SizingRule::from_str_lossy("Fixed"), SizingRule::Fixed);
    assert_eq!(SizingRule::from_str_lossy("whatever"), SizingRule::Shrink);
    assert!("whatever".parse::<SizingRule>().is_err());
}
