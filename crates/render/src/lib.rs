//! Renderer-agnostic core of the lagoon scene.
//!
//! Builds the static meshes, describes the fixed pass sequence, and derives
//! each frame's uniforms from the camera and light. Backends (see
//! `lagoon-render-wgpu`) only translate these into GPU calls.
//!
//! # Invariants
//! - The offscreen distortion pass runs before the water pass that samples it.
//! - Meshes are immutable after construction.
//! - Uniforms are recomputed every frame and never persisted.

pub mod frame;
pub mod mesh;
mod renderer;
pub mod shading;
pub mod transforms;

pub use frame::{DrawCall, FramePlan, PassDesc, PassKind, RenderTarget, SampledTexture};
pub use mesh::{MAX_GRID_RESOLUTION, Mesh, MeshError, SceneMeshes, TERRAIN_GRID_RESOLUTION};
pub use renderer::{DebugTextRenderer, Renderer};
pub use transforms::{FrameInputs, FrameUniforms};

pub fn crate_info() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"))
}
