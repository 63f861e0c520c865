use glam::{Mat3, Mat4, Vec3};
use lagoon_common::LightSettings;

/// Uniform scale shared by the water and terrain models.
pub const SCENE_SCALE: f32 = 0.6;
/// The terrain sits this far below the water plane, along its model z.
pub const TERRAIN_DROP: f32 = -0.8;

/// Everything that changes between frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs {
    pub view: Mat4,
    pub projection: Mat4,
    pub light: LightSettings,
    /// Seconds since startup.
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterParams {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyboxParams {
    pub view_projection: Mat4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
    /// Inverse transpose of the model-view upper 3x3.
    pub normal_matrix: Mat3,
    /// Light position in view space.
    pub light_position: Vec3,
    pub light_intensity: f32,
    /// Grid spacing used for the finite-difference normal.
    pub grid_step: f32,
}

/// Per-draw parameters for one frame, derived from [`FrameInputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub distortion: DistortionParams,
    pub water: WaterParams,
    pub skybox: SkyboxParams,
    pub terrain: TerrainParams,
}

/// Lay the z-up model flat: scale, then rotate -90 degrees about x.
pub fn water_model() -> Mat4 {
    Mat4::from_scale(Vec3::splat(SCENE_SCALE)) * Mat4::from_rotation_x((-90.0_f32).to_radians())
}

pub fn terrain_model() -> Mat4 {
    water_model() * Mat4::from_translation(Vec3::new(0.0, 0.0, TERRAIN_DROP))
}

/// View-projection with the camera translation removed, so the cube stays
/// centred on the eye.
pub fn skybox_view_projection(view: Mat4, projection: Mat4) -> Mat4 {
    projection * Mat4::from_mat3(Mat3::from_mat4(view))
}

impl FrameUniforms {
    pub fn compute(inputs: &FrameInputs, grid_resolution: u32) -> Self {
        let water_model = water_model();
        let terrain_model = terrain_model();
        let model_view = inputs.view * terrain_model;

        Self {
            distortion: DistortionParams { time: inputs.time },
            water: WaterParams {
                projection: inputs.projection,
                view: inputs.view,
                model: water_model,
            },
            skybox: SkyboxParams {
                view_projection: skybox_view_projection(inputs.view, inputs.projection),
            },
            terrain: TerrainParams {
                projection: inputs.projection,
                view: inputs.view,
                model: terrain_model,
                normal_matrix: Mat3::from_mat4(model_view).inverse().transpose(),
                light_position: model_view.transform_point3(inputs.light.position),
                light_intensity: inputs.light.intensity,
                grid_step: 1.0 / grid_resolution.max(1) as f32,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> FrameInputs {
        FrameInputs {
            view: Mat4::look_at_rh(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y),
            projection: Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.01, 100.0),
            light: LightSettings::default(),
            time: 2.5,
        }
    }

    #[test]
    fn water_model_lays_quad_flat() {
        // Model +z (the quad normal) becomes world +y.
        let n = water_model().transform_vector3(Vec3::Z).normalize();
        assert!((n - Vec3::Y).length() < 1e-6);
        let corner = water_model().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((corner - Vec3::new(SCENE_SCALE, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn terrain_sits_below_water() {
        let origin = terrain_model().transform_point3(Vec3::ZERO);
        assert!((origin.y - SCENE_SCALE * TERRAIN_DROP).abs() < 1e-6);
    }

    #[test]
    fn skybox_ignores_camera_translation() {
        let projection = inputs().projection;
        let a = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 4.0), Vec3::Y);
        let b = Mat4::look_at_rh(Vec3::new(9.0, -3.0, 5.0), Vec3::new(9.0, -3.0, 4.0), Vec3::Y);
        let sa = skybox_view_projection(a, projection);
        let sb = skybox_view_projection(b, projection);
        assert!(sa.abs_diff_eq(sb, 1e-5));
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular() {
        let frame = inputs();
        let uniforms = FrameUniforms::compute(&frame, 100);
        let mv = frame.view * uniforms.terrain.model;

        // Tangent along model x, normal along model z.
        let tangent = mv.transform_vector3(Vec3::X);
        let normal = uniforms.terrain.normal_matrix * Vec3::Z;
        assert!(tangent.dot(normal).abs() < 1e-5);
    }

    #[test]
    fn light_is_moved_into_view_space() {
        let frame = inputs();
        let uniforms = FrameUniforms::compute(&frame, 100);
        let expected = (frame.view * terrain_model()).transform_point3(frame.light.position);
        assert!((uniforms.terrain.light_position - expected).length() < 1e-4);
        assert_eq!(uniforms.terrain.light_intensity, 20.0);
    }

    #[test]
    fn grid_step_and_time_pass_through() {
        let uniforms = FrameUniforms::compute(&inputs(), 100);
        assert_eq!(uniforms.terrain.grid_step, 0.01);
        assert_eq!(uniforms.distortion.time, 2.5);
        assert_eq!(uniforms.water.model, water_model());
    }
}
