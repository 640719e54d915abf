//! `lona-layers` is the layer tree model of a component-based UI design tool.
//!
//! A component is a tree of layers. Each layer has a name, a type and an open-ended set of
//! JSON parameters. On top of the raw parameters the crate derives:
//!
//! - Sizing rules (`Fixed`, `Shrink`, `Expand`) relative to the parent's flex direction
//! - Child alignment along screen axes
//! - The ordered accessibility elements a screen reader would announce
//!
//! Layers live in a [`LayerTree`] arena and are addressed by [`LayerId`]. Documents are
//! read and written through [`LayerDef`], with default parameter values stripped on write.
#![forbid(unsafe_code)]

mod foundation;

pub mod component;
pub mod config;
pub(crate) mod document;
pub(crate) mod layer;

pub use crate::foundation::error::{LayerError, LayerResult};

pub use crate::component::{
    COMPONENT_EXTENSION, Component, ComponentLibrary, ComponentParameter, ComponentResolver,
};
pub use crate::config::ComponentConfiguration;
pub use crate::document::codec::LayerDef;
pub use crate::document::defaults::{DEFAULTED_PARAMS, default_param_value, normalize_params};
pub use crate::layer::accessibility::{
    ACCESSIBILITY_KEYS, AccessibilityElement, AccessibilityRole, AccessibilityType,
};
pub use crate::layer::builder::LayerBuilder;
pub use crate::layer::kind::{BuiltInLayerType, LayerType};
pub use crate::layer::params::{
    ParamPatch, Params, ParamsExt, number_value, params_equal, values_equal,
};
pub use crate::layer::props::{BorderStyle, PositionType, ResizeMode};
pub use crate::layer::sizing::{
    AlignmentAxis, Dimension, FlexDirection, SizingRule, alignment_key, apply_alignment,
    apply_sizing_rule, derive_alignment, derive_sizing_rule,
};
pub use crate::layer::traverse::Descendants;
pub use crate::layer::tree::{LayerId, LayerNode, LayerTree};
