//! GPU-side uniform blocks. Layouts mirror the WGSL structs in `shaders.rs`.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use lagoon_render::transforms::{DistortionParams, SkyboxParams, TerrainParams, WaterParams};

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct DistortionUniforms {
    time: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct WaterUniforms {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct SkyboxUniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct TerrainUniforms {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    // mat3 padded to mat4 to keep WGSL and Rust layouts trivially equal
    normal_matrix: [[f32; 4]; 4],
    light_position: [f32; 3],
    light_intensity: f32,
    grid_step: f32,
    _pad: [f32; 3],
}

impl From<&DistortionParams> for DistortionUniforms {
    fn from(p: &DistortionParams) -> Self {
        Self {
            time: p.time,
            _pad: [0.0; 3],
        }
    }
}

impl From<&WaterParams> for WaterUniforms {
    fn from(p: &WaterParams) -> Self {
        Self {
            projection: p.projection.to_cols_array_2d(),
            view: p.view.to_cols_array_2d(),
            model: p.model.to_cols_array_2d(),
        }
    }
}

impl From<&SkyboxParams> for SkyboxUniforms {
    fn from(p: &SkyboxParams) -> Self {
        Self {
            view_proj: p.view_projection.to_cols_array_2d(),
        }
    }
}

impl From<&TerrainParams> for TerrainUniforms {
    fn from(p: &TerrainParams) -> Self {
        Self {
            projection: p.projection.to_cols_array_2d(),
            view: p.view.to_cols_array_2d(),
            model: p.model.to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(p.normal_matrix).to_cols_array_2d(),
            light_position: p.light_position.to_array(),
            light_intensity: p.light_intensity,
            grid_step: p.grid_step,
            _pad: [0.0; 3],
        }
    }
}
