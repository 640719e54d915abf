use crate::foundation::error::{LayerError, LayerResult};
use std::fmt;

const BUILT_IN_PREFIX: &str = "Lona:";

/// Layer kinds the design tool knows how to render natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInLayerType {
    /// Flex container.
    View,
    /// Text run.
    Text,
    /// Raster image.
    Image,
    /// SVG-backed vector graphic.
    VectorGraphic,
    /// Lottie animation.
    Animation,
    /// Placeholder where a component's caller injects its children.
    Children,
}

impl BuiltInLayerType {
    /// Every built-in kind.
    pub const ALL: [Self; 6] = [
        Self::View,
        Self::Text,
        Self::Image,
        Self::VectorGraphic,
        Self::Animation,
        Self::Children,
    ];

    /// Unprefixed name, e.g. `"View"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::VectorGraphic => "VectorGraphic",
            Self::Animation => "Animation",
            Self::Children => "Children",
        }
    }

    /// Look up a kind by its unprefixed name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

/// Type of a layer: a built-in kind or a reference to another component by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayerType {
    /// Natively rendered kind.
    BuiltIn(BuiltInLayerType),
    /// Instance of the named component.
    Custom(String),
}

impl LayerType {
    /// Shorthand for `BuiltIn(View)`.
    pub const VIEW: Self = Self::BuiltIn(BuiltInLayerType::View);
    /// Shorthand for `BuiltIn(Text)`.
    pub const TEXT: Self = Self::BuiltIn(BuiltInLayerType::Text);
    /// Shorthand for `BuiltIn(Image)`.
    pub const IMAGE: Self = Self::BuiltIn(BuiltInLayerType::Image);
    /// Shorthand for `BuiltIn(VectorGraphic)`.
    pub const VECTOR_GRAPHIC: Self = Self::BuiltIn(BuiltInLayerType::VectorGraphic);
    /// Shorthand for `BuiltIn(Animation)`.
    pub const ANIMATION: Self = Self::BuiltIn(BuiltInLayerType::Animation);
    /// Shorthand for `BuiltIn(Children)`.
    pub const CHILDREN: Self = Self::BuiltIn(BuiltInLayerType::Children);

    /// Resolve a document type string.
    ///
    /// Accepts `Lona:<BuiltIn>`, the legacy bare `<BuiltIn>` spelling, and treats anything
    /// else as a component name. A `Lona:` prefix followed by an unknown name is an error.
    pub fn parse(s: &str) -> LayerResult<Self> {
        if let Some(built_in) = BuiltInLayerType::from_name(s) {
            return Ok(Self::BuiltIn(built_in));
        }
        if let Some(suffix) = s.strip_prefix(BUILT_IN_PREFIX) {
            return BuiltInLayerType::from_name(suffix)
                .map(Self::BuiltIn)
                .ok_or_else(|| LayerError::decode(format!("unknown built-in layer type '{s}'")));
        }
        if s.is_empty() {
            return Err(LayerError::decode("layer type must be non-empty"));
        }
        Ok(Self::Custom(s.to_string()))
    }

    /// Spelling used when encoding documents.
    pub fn to_document_string(&self) -> String {
        match self {
            Self::BuiltIn(t) => format!("{BUILT_IN_PREFIX}{}", t.as_str()),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Name shown to designers (no prefix).
    pub fn display_name(&self) -> &str {
        match self {
            Self::BuiltIn(t) => t.as_str(),
            Self::Custom(name) => name,
        }
    }

    /// Component referenced by a custom layer.
    pub fn component_name(&self) -> Option<&str> {
        match self {
            Self::Custom(name) => Some(name),
            Self::BuiltIn(_) => None,
        }
    }

    /// `true` for the children placeholder.
    pub fn is_children_placeholder(&self) -> bool {
        matches!(self, Self::BuiltIn(BuiltInLayerType::Children))
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/kind.rs"]
mod tests;
