//! CPU reference of the per-vertex and per-fragment math the shaders run.
//!
//! The WGSL in the wgpu backend evaluates exactly these formulas, and its tests
//! check the literals there against the constants here. Keeping a
//! Rust copy lets the masks and the distortion be previewed and tested
//! without a GPU.

use glam::{Vec2, Vec3};
use serde::Serialize;
use std::f32::consts::PI;

/// Radius of the base circle every island cutout is offset from.
pub const ISLAND_RADIUS: f32 = 0.1;
/// Terrain fragments farther than this from [`TERRAIN_CENTER`] are discarded.
pub const TERRAIN_CUTOFF: f32 = 0.45;
pub const TERRAIN_CENTER: Vec2 = Vec2::new(0.5, 0.5);
/// Centre of the sand/grass band.
pub const SHORE_CENTER: Vec2 = Vec2::new(0.52, 0.53);
pub const SHORE_OUTER: f32 = 0.38;
pub const SHORE_INNER: f32 = 0.12;
pub const WATER_CENTER: Vec2 = Vec2::new(0.03, 0.05);
pub const WATER_CUTOFF: f32 = 0.41;

/// Repeat count of the grass and sand textures, and of the distorted uv.
pub const TEXTURE_TILING: f32 = 5.0;
pub const DISTORTION_TILING: f32 = 8.0;
/// Scale applied to the [-1, 1] offset read from the distortion map.
pub const DISTORTION_STRENGTH: f32 = 1.0 / 50.0;
/// Share of the Lambertian term that reaches the framebuffer.
pub const TERRAIN_EXPOSURE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainSurface {
    /// Outside the island silhouette; the fragment is discarded.
    Cut,
    Sand,
    Grass,
}

pub fn sd_circle(p: Vec2, radius: f32) -> f32 {
    p.length() - radius
}

/// `x - floor(x)` per component, matching GLSL `mod(x, 1.0)` and WGSL `fract`.
pub fn wrap_unit(v: Vec2) -> Vec2 {
    v - v.floor()
}

/// Classify a terrain texture coordinate.
pub fn terrain_surface(uv: Vec2) -> TerrainSurface {
    if sd_circle(uv - TERRAIN_CENTER, ISLAND_RADIUS) > TERRAIN_CUTOFF {
        return TerrainSurface::Cut;
    }
    let band = sd_circle(uv - SHORE_CENTER, ISLAND_RADIUS);
    if band > SHORE_OUTER || band < SHORE_INNER {
        TerrainSurface::Sand
    } else {
        TerrainSurface::Grass
    }
}

/// Whether a water fragment at model-space `xy` survives the cutout.
pub fn water_visible(xy: Vec2) -> bool {
    sd_circle(xy - WATER_CENTER, ISLAND_RADIUS) <= WATER_CUTOFF
}

/// Clip-space corner of the full-screen triangle for a vertex index.
///
/// Indices 0, 1, 2 give (-1,-1), (3,-1), (-1,3): one triangle covering the
/// whole viewport.
pub fn fullscreen_vertex(index: u32) -> Vec2 {
    let x = -1.0 + ((index & 1) << 2) as f32;
    let y = -1.0 + ((index & 2) << 1) as f32;
    Vec2::new(x, y)
}

/// Where the distortion map is read for a clip-space coordinate.
pub fn distortion_lookup(clip: Vec2) -> Vec2 {
    wrap_unit(DISTORTION_TILING * (0.5 * clip + Vec2::splat(0.5)))
}

/// Distorted coordinate written to both offscreen attachments.
///
/// `sample` is the distortion map's red/green in [0, 1].
pub fn distorted_uv(clip: Vec2, sample: Vec2, time: f32) -> Vec2 {
    let offset = (2.0 * sample - Vec2::ONE) * DISTORTION_STRENGTH;
    wrap_unit(TEXTURE_TILING * (clip + offset * time.sin()))
}

/// Colors the distortion pass writes: (reflection, refraction).
pub fn offscreen_colors(uv: Vec2) -> ([f32; 4], [f32; 4]) {
    ([0.0, uv.x, uv.y, 1.0], [uv.x, uv.y, 0.0, 1.0])
}

/// View-angle blend factor: 1 looking straight down the normal, 0 at grazing.
pub fn fresnel(view_position: Vec3, view_normal: Vec3) -> f32 {
    let to_eye = (-view_position).normalize_or_zero();
    to_eye.dot(view_normal.normalize_or_zero()).max(0.0)
}

pub fn composite_water(reflection: Vec3, refraction: Vec3, fresnel: f32) -> Vec3 {
    fresnel * reflection + (1.0 - fresnel) * refraction
}

/// Terrain position for a grid coordinate and height.
pub fn displace(uv: Vec2, height: f32) -> Vec3 {
    (2.0 * uv - Vec2::ONE).extend(height)
}

/// Model-space normal from the four axis neighbours `step` apart.
pub fn terrain_normal(height: impl Fn(Vec2) -> f32, uv: Vec2, step: f32) -> Vec3 {
    let p = displace(uv, height(uv));
    let neighbour = |d: Vec2| {
        let q = uv + d;
        displace(q, height(q)) - p
    };
    let a = neighbour(Vec2::new(step, 0.0));
    let b = neighbour(Vec2::new(0.0, step));
    let c = neighbour(Vec2::new(-step, 0.0));
    let d = neighbour(Vec2::new(0.0, -step));

    let sum = a.cross(b).normalize_or_zero()
        + b.cross(c).normalize_or_zero()
        + c.cross(d).normalize_or_zero()
        + d.cross(a).normalize_or_zero();
    (sum / 4.0).normalize_or_zero()
}

/// Lit terrain color for a view-space point.
pub fn shade_terrain(
    albedo: Vec3,
    normal: Vec3,
    position: Vec3,
    light_position: Vec3,
    intensity: f32,
) -> Vec3 {
    let diffuse = normal
        .normalize_or_zero()
        .dot((light_position - position).normalize_or_zero())
        .max(0.0);
    TERRAIN_EXPOSURE * intensity * albedo * diffuse / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_center_is_sand_beach_ring_is_grass() {
        // Centre of the band circle: distance -0.1, inside the inner sand disk.
        assert_eq!(terrain_surface(SHORE_CENTER), TerrainSurface::Sand);
        // 0.35 from the band centre: band distance 0.25, between the rings.
        let grass = SHORE_CENTER + Vec2::new(0.35, 0.0);
        assert_eq!(terrain_surface(grass), TerrainSurface::Grass);
    }

    #[test]
    fn terrain_corners_are_cut() {
        for corner in [Vec2::ZERO, Vec2::ONE, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)] {
            assert_eq!(terrain_surface(corner), TerrainSurface::Cut);
        }
    }

    #[test]
    fn outer_beach_is_sand() {
        // 0.52 from the terrain centre along x: inside the cutout (0.55),
        // beyond the outer band ring.
        let uv = Vec2::new(0.5 - 0.52, 0.5);
        assert_eq!(terrain_surface(uv), TerrainSurface::Sand);
    }

    #[test]
    fn water_cutout() {
        assert!(water_visible(WATER_CENTER));
        assert!(water_visible(Vec2::new(0.5, 0.0)));
        assert!(!water_visible(Vec2::new(0.55, 0.55)));
    }

    #[test]
    fn fullscreen_triangle_covers_viewport() {
        assert_eq!(fullscreen_vertex(0), Vec2::new(-1.0, -1.0));
        assert_eq!(fullscreen_vertex(1), Vec2::new(3.0, -1.0));
        assert_eq!(fullscreen_vertex(2), Vec2::new(-1.0, 3.0));
    }

    #[test]
    fn distortion_vanishes_at_time_zero() {
        let clip = Vec2::new(0.13, -0.42);
        let undistorted = wrap_unit(TEXTURE_TILING * clip);
        let uv = distorted_uv(clip, Vec2::new(1.0, 0.0), 0.0);
        assert!((uv - undistorted).length() < 1e-6);
    }

    #[test]
    fn neutral_distortion_sample_is_a_no_op() {
        let clip = Vec2::new(0.25, 0.6);
        let uv = distorted_uv(clip, Vec2::splat(0.5), 1.3);
        assert!((uv - wrap_unit(TEXTURE_TILING * clip)).length() < 1e-6);
    }

    #[test]
    fn distorted_uv_stays_in_unit_square() {
        for i in 0..50 {
            let clip = Vec2::new(-1.0 + i as f32 * 0.08, 1.0 - i as f32 * 0.05);
            let uv = distorted_uv(clip, Vec2::new(0.9, 0.1), i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
        }
    }

    #[test]
    fn offscreen_attachments_share_the_coordinate() {
        let (reflection, refraction) = offscreen_colors(Vec2::new(0.25, 0.75));
        assert_eq!(reflection, [0.0, 0.25, 0.75, 1.0]);
        assert_eq!(refraction, [0.25, 0.75, 0.0, 1.0]);
    }

    #[test]
    fn fresnel_bounds() {
        let up = Vec3::Y;
        assert!((fresnel(Vec3::new(0.0, -2.0, 0.0), up) - 1.0).abs() < 1e-6);
        assert_eq!(fresnel(Vec3::new(0.0, 2.0, 0.0), up), 0.0);
        let grazing = fresnel(Vec3::new(-5.0, -0.01, 0.0), up);
        assert!(grazing < 0.01);
    }

    #[test]
    fn composite_blends_linearly() {
        let c = composite_water(Vec3::ONE, Vec3::ZERO, 0.25);
        assert_eq!(c, Vec3::splat(0.25));
    }

    #[test]
    fn flat_terrain_normal_points_up() {
        let n = terrain_normal(|_| 0.3, Vec2::splat(0.5), 0.01);
        assert!((n - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn sloped_terrain_normal_leans_downhill() {
        // Height grows with u, so the normal tilts towards -x.
        let n = terrain_normal(|uv| uv.x, Vec2::splat(0.5), 0.01);
        assert!(n.x < 0.0);
        assert!(n.z > 0.0);
        assert!((n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn unlit_when_light_behind_surface() {
        let c = shade_terrain(Vec3::ONE, Vec3::Z, Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0), 20.0);
        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn lit_color_scales_with_intensity() {
        let light = Vec3::new(0.0, 0.0, 10.0);
        let c = shade_terrain(Vec3::ONE, Vec3::Z, Vec3::ZERO, light, 10.0);
        let expected = TERRAIN_EXPOSURE * 10.0 / PI;
        assert!((c.x - expected).abs() < 1e-6);
    }
}
