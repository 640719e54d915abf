//! Typed parameter access and derived layout properties.
//!
//! Reads index the tree and panic on stale ids like [`LayerTree`]'s `Index` impl;
//! writes return [`LayerResult`].

use crate::document::defaults::default_param_value;
use crate::foundation::error::LayerResult;
use crate::layer::accessibility::{AccessibilityType, write_accessibility};
use crate::layer::params::{ParamPatch, ParamsExt, number_value};
use crate::layer::sizing::{
    AlignmentAxis, Dimension, FlexDirection, SizingRule, apply_alignment, apply_sizing_rule,
    derive_alignment, derive_sizing_rule, keys,
};
use crate::layer::tree::{LayerId, LayerTree};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Stroke pattern of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dotted,
    Dashed,
}

impl BorderStyle {
    /// Document spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }

    /// Position in the inspector's picker; unknown indices map to `Solid`.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Dotted,
            2 => Self::Dashed,
            _ => Self::Solid,
        }
    }

    /// Inverse of [`BorderStyle::from_index`].
    pub fn index(self) -> usize {
        match self {
            Self::Solid => 0,
            Self::Dotted => 1,
            Self::Dashed => 2,
        }
    }
}

/// How an image or animation fits its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeMode {
    Contain,
    #[default]
    Cover,
    Stretch,
}

impl ResizeMode {
    /// Document spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Stretch => "stretch",
        }
    }
}

/// Whether a layer participates in flex flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionType {
    Relative,
    Absolute,
}

impl PositionType {
    /// Document spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

macro_rules! string_enum_parse {
    ($ty:ty, [$($variant:ident),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == <$ty>::$variant.as_str() {
                        return Ok(<$ty>::$variant);
                    }
                )+
                Err(format!("unknown {} '{s}'", stringify!($ty)))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum_parse!(BorderStyle, [Solid, Dotted, Dashed]);
string_enum_parse!(ResizeMode, [Contain, Cover, Stretch]);
string_enum_parse!(PositionType, [Relative, Absolute]);

macro_rules! number_params {
    ($($get:ident, $set:ident => $key:literal;)+) => {
        impl LayerTree {
            $(
                #[doc = concat!("`", $key, "` parameter.")]
                pub fn $get(&self, id: LayerId) -> Option<f64> {
                    self[id].params.number($key)
                }

                #[doc = concat!("Set or clear the `", $key, "` parameter.")]
                pub fn $set(&mut self, id: LayerId, value: Option<f64>) -> LayerResult<()> {
                    self.set_optional_param(id, $key, value.map(number_value))
                }
            )+
        }
    };
}

macro_rules! string_params {
    ($($get:ident, $set:ident => $key:literal;)+) => {
        impl LayerTree {
            $(
                #[doc = concat!("`", $key, "` parameter.")]
                pub fn $get(&self, id: LayerId) -> Option<&str> {
                    self[id].params.string($key)
                }

                #[doc = concat!("Set or clear the `", $key, "` parameter.")]
                pub fn $set(&mut self, id: LayerId, value: Option<&str>) -> LayerResult<()> {
                    self.set_optional_param(id, $key, value.map(Value::from))
                }
            )+
        }
    };
}

number_params! {
    flex, set_flex => "flex";
    width, set_width => "width";
    height, set_height => "height";
    top, set_top => "top";
    right, set_right => "right";
    bottom, set_bottom => "bottom";
    left, set_left => "left";
    padding_top, set_padding_top => "paddingTop";
    padding_right, set_padding_right => "paddingRight";
    padding_bottom, set_padding_bottom => "paddingBottom";
    padding_left, set_padding_left => "paddingLeft";
    margin_top, set_margin_top => "marginTop";
    margin_right, set_margin_right => "marginRight";
    margin_bottom, set_margin_bottom => "marginBottom";
    margin_left, set_margin_left => "marginLeft";
    aspect_ratio, set_aspect_ratio => "aspectRatio";
    opacity, set_opacity => "opacity";
    border_radius, set_border_radius => "borderRadius";
    border_width, set_border_width => "borderWidth";
    animation_speed, set_animation_speed => "animationSpeed";
}

string_params! {
    align_self, set_align_self => "alignSelf";
    align_items, set_align_items => "alignItems";
    justify_content, set_justify_content => "justifyContent";
    border_color, set_border_color => "borderColor";
    shadow, set_shadow => "shadow";
    background_color, set_background_color => "backgroundColor";
    background_gradient, set_background_gradient => "backgroundGradient";
    text, set_text => "text";
    text_align, set_text_align => "textAlign";
    image, set_image => "image";
    animation, set_animation => "animation";
}

impl LayerTree {
    /// Raw parameter value.
    pub fn param(&self, id: LayerId, key: &str) -> Option<&Value> {
        self[id].params.get(key)
    }

    /// Raw parameter value, or the document default for `key` when absent.
    pub fn param_or_default(&self, id: LayerId, key: &str) -> Option<Value> {
        self.param(id, key)
            .cloned()
            .or_else(|| default_param_value(key))
    }

    /// Store a raw parameter. No derived-property rewrites happen here.
    pub fn set_param(
        &mut self,
        id: LayerId,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> LayerResult<()> {
        self.node_mut(id)?.params.insert(key.into(), value.into());
        Ok(())
    }

    /// Remove a raw parameter.
    pub fn remove_param(&mut self, id: LayerId, key: &str) -> LayerResult<Option<Value>> {
        Ok(self.node_mut(id)?.params.remove(key))
    }

    fn set_optional_param(&mut self, id: LayerId, key: &str, value: Option<Value>) -> LayerResult<()> {
        let params = &mut self.node_mut(id)?.params;
        match value {
            Some(v) => {
                params.insert(key.to_string(), v);
            }
            None => {
                params.remove(key);
            }
        }
        Ok(())
    }

    /// Apply a precomputed patch to a layer's parameters.
    pub fn apply_patch(&mut self, id: LayerId, patch: &ParamPatch) -> LayerResult<()> {
        patch.apply(&mut self.node_mut(id)?.params);
        Ok(())
    }

    /// Whether the layer renders; `true` unless set otherwise.
    pub fn visible(&self, id: LayerId) -> bool {
        self[id].params.boolean("visible").unwrap_or(true)
    }

    /// Set the `visible` parameter.
    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> LayerResult<()> {
        self.set_param(id, "visible", visible)
    }

    /// Maximum text lines, truncated to an integer.
    pub fn number_of_lines(&self, id: LayerId) -> Option<i64> {
        self[id].params.number("numberOfLines").map(|n| n as i64)
    }

    /// Set or clear `numberOfLines`.
    pub fn set_number_of_lines(&mut self, id: LayerId, lines: Option<i64>) -> LayerResult<()> {
        self.set_optional_param(id, "numberOfLines", lines.map(Value::from))
    }

    /// Text style name; `textStyle` wins over the older `font` key.
    pub fn font(&self, id: LayerId) -> Option<&str> {
        let params = &self[id].params;
        params.string("textStyle").or_else(|| params.string("font"))
    }

    /// Set or clear the `font` parameter.
    pub fn set_font(&mut self, id: LayerId, font: Option<&str>) -> LayerResult<()> {
        self.set_optional_param(id, "font", font.map(Value::from))
    }

    /// Border stroke pattern; unknown or missing values read as `Solid`.
    pub fn border_style(&self, id: LayerId) -> BorderStyle {
        self[id]
            .params
            .string("borderStyle")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Set the `borderStyle` parameter.
    pub fn set_border_style(&mut self, id: LayerId, style: BorderStyle) -> LayerResult<()> {
        self.set_param(id, "borderStyle", style.as_str())
    }

    /// Image fit, if set to a known mode.
    pub fn resize_mode(&self, id: LayerId) -> Option<ResizeMode> {
        self[id]
            .params
            .string("resizeMode")
            .and_then(|s| s.parse().ok())
    }

    /// Set or clear `resizeMode`.
    pub fn set_resize_mode(&mut self, id: LayerId, mode: Option<ResizeMode>) -> LayerResult<()> {
        self.set_optional_param(id, "resizeMode", mode.map(|m| Value::from(m.as_str())))
    }

    /// Positioning scheme, if set to a known one.
    pub fn position(&self, id: LayerId) -> Option<PositionType> {
        self[id]
            .params
            .string("position")
            .and_then(|s| s.parse().ok())
    }

    /// Set or clear `position`.
    pub fn set_position(&mut self, id: LayerId, position: Option<PositionType>) -> LayerResult<()> {
        self.set_optional_param(id, "position", position.map(|p| Value::from(p.as_str())))
    }

    /// Raw `flexDirection` value.
    pub fn flex_direction_raw(&self, id: LayerId) -> Option<&str> {
        self[id].params.string(keys::FLEX_DIRECTION)
    }

    /// Layout axis of `id` as a container.
    pub fn flex_direction(&self, id: LayerId) -> FlexDirection {
        FlexDirection::of(&self[id].params)
    }

    /// Axis of the container holding `id`; detached layers behave as if in a column.
    pub fn parent_direction(&self, id: LayerId) -> FlexDirection {
        self[id]
            .parent
            .and_then(|p| self.get(p))
            .map_or(FlexDirection::Column, |p| FlexDirection::of(&p.params))
    }

    /// Change the layout axis of `id` while keeping the observed sizing of its children
    /// and its own horizontal/vertical alignment.
    ///
    /// `flex` and `alignSelf` swap meaning with the axis, so every child's raw parameters
    /// are rewritten from the rules captured before the change. `None` clears the
    /// parameter, which means column.
    pub fn set_flex_direction(
        &mut self,
        id: LayerId,
        direction: Option<FlexDirection>,
    ) -> LayerResult<()> {
        let children = self.node(id)?.children.clone();
        let widths: Vec<SizingRule> = children
            .iter()
            .map(|&c| self.width_sizing_rule(c))
            .collect();
        let heights: Vec<SizingRule> = children
            .iter()
            .map(|&c| self.height_sizing_rule(c))
            .collect();
        let horizontal = self.horizontal_alignment(id);
        let vertical = self.vertical_alignment(id);

        self.set_optional_param(
            id,
            keys::FLEX_DIRECTION,
            direction.map(|d| Value::from(d.as_str())),
        )?;

        for (&child, rule) in children.iter().zip(widths) {
            self.set_width_sizing_rule(child, rule)?;
        }
        for (&child, rule) in children.iter().zip(heights) {
            self.set_height_sizing_rule(child, rule)?;
        }
        self.set_horizontal_alignment(id, &horizontal)?;
        self.set_vertical_alignment(id, &vertical)?;
        tracing::debug!(layer = %self[id].name, children = children.len(), "flex direction rewritten");
        Ok(())
    }

    /// Derived sizing rule for a dimension.
    pub fn sizing_rule(&self, id: LayerId, dimension: Dimension) -> SizingRule {
        derive_sizing_rule(&self[id].params, dimension, self.parent_direction(id))
    }

    /// Rewrite raw parameters so `dimension` follows `rule`.
    pub fn set_sizing_rule(
        &mut self,
        id: LayerId,
        dimension: Dimension,
        rule: SizingRule,
    ) -> LayerResult<()> {
        let node = self.node(id)?;
        let patch = apply_sizing_rule(&node.params, dimension, rule, self.parent_direction(id));
        self.apply_patch(id, &patch)
    }

    /// Derived width sizing rule.
    pub fn width_sizing_rule(&self, id: LayerId) -> SizingRule {
        self.sizing_rule(id, Dimension::Width)
    }

    /// Derived height sizing rule.
    pub fn height_sizing_rule(&self, id: LayerId) -> SizingRule {
        self.sizing_rule(id, Dimension::Height)
    }

    /// Rewrite raw parameters for a width sizing rule.
    pub fn set_width_sizing_rule(&mut self, id: LayerId, rule: SizingRule) -> LayerResult<()> {
        self.set_sizing_rule(id, Dimension::Width, rule)
    }

    /// Rewrite raw parameters for a height sizing rule.
    pub fn set_height_sizing_rule(&mut self, id: LayerId, rule: SizingRule) -> LayerResult<()> {
        self.set_sizing_rule(id, Dimension::Height, rule)
    }

    /// Left/right alignment of children.
    pub fn horizontal_alignment(&self, id: LayerId) -> String {
        derive_alignment(&self[id].params, AlignmentAxis::Horizontal)
    }

    /// Top/bottom alignment of children.
    pub fn vertical_alignment(&self, id: LayerId) -> String {
        derive_alignment(&self[id].params, AlignmentAxis::Vertical)
    }

    /// Set left/right alignment of children.
    pub fn set_horizontal_alignment(&mut self, id: LayerId, value: &str) -> LayerResult<()> {
        let patch = apply_alignment(&self.node(id)?.params, AlignmentAxis::Horizontal, value);
        self.apply_patch(id, &patch)
    }

    /// Set top/bottom alignment of children.
    pub fn set_vertical_alignment(&mut self, id: LayerId, value: &str) -> LayerResult<()> {
        let patch = apply_alignment(&self.node(id)?.params, AlignmentAxis::Vertical, value);
        self.apply_patch(id, &patch)
    }

    /// Accessibility participation derived from the reserved parameter keys.
    pub fn accessibility(&self, id: LayerId) -> AccessibilityType {
        AccessibilityType::from_params(&self[id].params)
    }

    /// Replace all reserved accessibility keys with the encoding of `ty`.
    pub fn set_accessibility(&mut self, id: LayerId, ty: &AccessibilityType) -> LayerResult<()> {
        write_accessibility(&mut self.node_mut(id)?.params, ty);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/props.rs"]
mod tests;
