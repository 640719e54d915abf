//! Sizing rules and alignment as pure functions over raw flex parameters.
//!
//! Which raw parameter governs a dimension depends on the parent's flex direction:
//! along the main axis `flex: 1` means "expand", across it `alignSelf: stretch` does.
//! A layer without a parent is treated as sitting in a column.

use crate::layer::params::{ParamPatch, Params, ParamsExt, number_value};
use std::fmt;
use std::str::FromStr;

/// How a layer sizes itself along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizingRule {
    /// Explicit `width`/`height`.
    Fixed,
    /// Fit content.
    Shrink,
    /// Fill the parent.
    Expand,
}

impl SizingRule {
    /// Canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Shrink => "Shrink",
            Self::Expand => "Expand",
        }
    }

    /// Lenient parse used for builder pseudo-parameters: unknown names mean `Shrink`.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Shrink)
    }
}

impl FromStr for SizingRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fixed" => Ok(Self::Fixed),
            "Shrink" => Ok(Self::Shrink),
            "Expand" => Ok(Self::Expand),
            other => Err(format!("unknown sizing rule '{other}'")),
        }
    }
}

impl fmt::Display for SizingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexDirection {
    /// Children laid out left to right.
    Row,
    /// Children laid out top to bottom.
    #[default]
    Column,
}

impl FlexDirection {
    /// Document spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }

    /// Interpret a raw `flexDirection` value; only `"row"` is a row.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("row") => Self::Row,
            _ => Self::Column,
        }
    }

    /// Read the direction stored in `params`.
    pub fn of(params: &Params) -> Self {
        Self::from_param(params.string(keys::FLEX_DIRECTION))
    }
}

/// One of the two layout dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Dimension {
    fn extent_key(self) -> &'static str {
        match self {
            Self::Width => keys::WIDTH,
            Self::Height => keys::HEIGHT,
        }
    }

    fn is_main_axis(self, parent: FlexDirection) -> bool {
        matches!(
            (self, parent),
            (Self::Width, FlexDirection::Row) | (Self::Height, FlexDirection::Column)
        )
    }
}

/// Screen axis an alignment refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentAxis {
    /// Left/right placement of children.
    Horizontal,
    /// Top/bottom placement of children.
    Vertical,
}

pub(crate) mod keys {
    pub(crate) const FLEX: &str = "flex";
    pub(crate) const WIDTH: &str = "width";
    pub(crate) const HEIGHT: &str = "height";
    pub(crate) const ALIGN_SELF: &str = "alignSelf";
    pub(crate) const ALIGN_ITEMS: &str = "alignItems";
    pub(crate) const JUSTIFY_CONTENT: &str = "justifyContent";
    pub(crate) const FLEX_DIRECTION: &str = "flexDirection";
}

const STRETCH: &str = "stretch";
const FLEX_START: &str = "flex-start";

/// Classify `dimension` of a layer with raw `params` inside a `parent` container.
pub fn derive_sizing_rule(
    params: &Params,
    dimension: Dimension,
    parent: FlexDirection,
) -> SizingRule {
    let extent = params.number(dimension.extent_key());
    if dimension.is_main_axis(parent) {
        if params.number(keys::FLEX) == Some(1.0) {
            SizingRule::Expand
        } else if extent.is_some() {
            SizingRule::Fixed
        } else {
            SizingRule::Shrink
        }
    } else if params.string(keys::ALIGN_SELF) == Some(STRETCH) {
        SizingRule::Expand
    } else if extent.is_none() {
        SizingRule::Shrink
    } else {
        SizingRule::Fixed
    }
}

/// Raw parameter writes that make [`derive_sizing_rule`] return `rule`.
///
/// Parameters irrelevant to the new rule are removed; a `Fixed` rule keeps an existing
/// extent and falls back to `0`.
pub fn apply_sizing_rule(
    params: &Params,
    dimension: Dimension,
    rule: SizingRule,
    parent: FlexDirection,
) -> ParamPatch {
    let extent_key = dimension.extent_key();
    let governing_key = if dimension.is_main_axis(parent) {
        keys::FLEX
    } else {
        keys::ALIGN_SELF
    };

    let mut patch = ParamPatch::new();
    match rule {
        SizingRule::Expand => {
            if governing_key == keys::FLEX {
                patch.set(keys::FLEX, number_value(1.0));
            } else {
                patch.set(keys::ALIGN_SELF, STRETCH);
            }
            patch.remove(extent_key);
        }
        SizingRule::Shrink => {
            patch.remove(governing_key).remove(extent_key);
        }
        SizingRule::Fixed => {
            let extent = params.number(extent_key).unwrap_or(0.0);
            patch
                .remove(governing_key)
                .set(extent_key, number_value(extent));
        }
    }
    patch
}

/// Raw parameter that stores alignment along `axis` for a container laid out in `direction`.
pub fn alignment_key(axis: AlignmentAxis, direction: FlexDirection) -> &'static str {
    match (axis, direction) {
        (AlignmentAxis::Horizontal, FlexDirection::Row)
        | (AlignmentAxis::Vertical, FlexDirection::Column) => keys::JUSTIFY_CONTENT,
        (AlignmentAxis::Horizontal, FlexDirection::Column)
        | (AlignmentAxis::Vertical, FlexDirection::Row) => keys::ALIGN_ITEMS,
    }
}

/// Alignment of a container's children along `axis`; `flex-start` when unset.
pub fn derive_alignment(params: &Params, axis: AlignmentAxis) -> String {
    let key = alignment_key(axis, FlexDirection::of(params));
    params.string(key).unwrap_or(FLEX_START).to_string()
}

/// Raw parameter write that sets the alignment along `axis`.
pub fn apply_alignment(params: &Params, axis: AlignmentAxis, value: &str) -> ParamPatch {
    let mut patch = ParamPatch::new();
    patch.set(alignment_key(axis, FlexDirection::of(params)), value);
    patch
}

#[cfg(test)]
#[path = "../../tests/unit/layer/sizing.rs"]
mod tests;
