//! wgpu render backend for the lagoon scene.
//!
//! Draws the offscreen distortion pass into two float maps, then the water
//! composite, skybox and terrain into the surface. Camera uses an orbit model
//! driven by mouse drag and scroll.
//!
//! # Invariants
//! - The offscreen maps are written before the water pass samples them each frame.
//! - Textures start as 1x1 black placeholders and are swapped in as decodes finish.
//! - A failed texture load never aborts rendering.

mod camera;
mod error;
mod gpu;
mod offscreen;
pub mod shaders;
mod textures;
mod uniforms;

pub use camera::OrbitCamera;
pub use error::RenderError;
pub use gpu::{FrameRecorder, SceneRenderer};
pub use offscreen::{OFFSCREEN_COLOR_FORMAT, OFFSCREEN_DEPTH_FORMAT, OffscreenTarget};
pub use textures::{PLACEHOLDER_COLOR, SceneTextures, TEXTURE_FORMAT, linear_surface_format};
