//! Boundary JSON model for layers and the codec between it and [`crate::LayerTree`].

pub(crate) mod codec;
pub(crate) mod defaults;
