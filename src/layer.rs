//! The layer tree: arena storage, derived layout facts and accessibility resolution.

pub(crate) mod accessibility;
pub(crate) mod builder;
pub(crate) mod kind;
pub(crate) mod params;
pub(crate) mod props;
pub(crate) mod resolve;
pub(crate) mod sizing;
pub(crate) mod traverse;
pub(crate) mod tree;
