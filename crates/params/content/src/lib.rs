//! Data-driven parameter definitions and loaders.
//!
//! This crate turns declarative parameter catalogs into `params-core` shapes:
//! - Parameter specs (name, kind, bounds, default, display style)
//! - The built-in modifier catalog shared by skills, equipment and buffs
//! - Passive-effect summaries listing what a modifier source changes
//!
//! Catalogs are read from RON or TOML files when the `loaders` feature is on.

pub mod catalog;
pub mod passive;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ParameterCatalog, ParameterSpec};
pub use passive::{NO_FEATURES_TEXT, PassiveEffect, PassiveEffects};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, LoadResult};
