//! Shared types for the lagoon demo.
//!
//! # Invariants
//! - Light settings never leave the slider ranges.
//! - A validated [`SceneConfig`] always describes a buildable scene.

mod config;
mod types;

pub use config::{ConfigError, SceneConfig, TexturePaths, TextureSource};
pub use types::{LightSettings, TextureSlot};
