//! The fixed per-frame pass sequence.

use crate::mesh::SceneMeshes;
use lagoon_common::TextureSlot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Distortion,
    Water,
    Skybox,
    Terrain,
}

impl PassKind {
    pub fn name(self) -> &'static str {
        match self {
            PassKind::Distortion => "distortion",
            PassKind::Water => "water",
            PassKind::Skybox => "skybox",
            PassKind::Terrain => "terrain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderTarget {
    /// Reflection + refraction colors and a depth buffer.
    Offscreen,
    /// The window surface and its depth buffer.
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawCall {
    /// Non-indexed draw generating positions from the vertex index.
    Vertices(u32),
    Indexed(u32),
}

impl DrawCall {
    pub fn count(self) -> u32 {
        match self {
            DrawCall::Vertices(n) | DrawCall::Indexed(n) => n,
        }
    }
}

/// A texture read by a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampledTexture {
    Asset(TextureSlot),
    Reflection,
    Refraction,
}

impl SampledTexture {
    pub fn name(self) -> &'static str {
        match self {
            SampledTexture::Asset(slot) => slot.name(),
            SampledTexture::Reflection => "reflection",
            SampledTexture::Refraction => "refraction",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassDesc {
    pub kind: PassKind,
    pub target: RenderTarget,
    pub draw: DrawCall,
    pub samples: Vec<SampledTexture>,
}

/// Ordered list of passes drawn every frame.
///
/// The offscreen distortion pass always comes first so the water pass can
/// read its output; the surface passes then draw water, skybox, terrain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FramePlan {
    passes: Vec<PassDesc>,
}

impl FramePlan {
    pub fn new(meshes: &SceneMeshes) -> Self {
        use SampledTexture::*;
        let passes = vec![
            PassDesc {
                kind: PassKind::Distortion,
                target: RenderTarget::Offscreen,
                draw: DrawCall::Vertices(3),
                samples: vec![Asset(TextureSlot::Distortion)],
            },
            PassDesc {
                kind: PassKind::Water,
                target: RenderTarget::Surface,
                draw: DrawCall::Indexed(meshes.water.index_count()),
                samples: vec![Reflection, Refraction],
            },
            PassDesc {
                kind: PassKind::Skybox,
                target: RenderTarget::Surface,
                draw: DrawCall::Indexed(meshes.skybox.index_count()),
                samples: vec![Asset(TextureSlot::Skybox)],
            },
            PassDesc {
                kind: PassKind::Terrain,
                target: RenderTarget::Surface,
                draw: DrawCall::Indexed(meshes.terrain.index_count()),
                samples: vec![
                    Asset(TextureSlot::Heightmap),
                    Asset(TextureSlot::Grass),
                    Asset(TextureSlot::Sand),
                ],
            },
        ];
        Self { passes }
    }

    pub fn passes(&self) -> &[PassDesc] {
        &self.passes
    }

    /// Runs of consecutive passes sharing a target; each run is one render pass.
    pub fn target_groups(&self) -> impl Iterator<Item = &[PassDesc]> {
        self.passes.chunk_by(|a, b| a.target == b.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FramePlan {
        FramePlan::new(&SceneMeshes::build(100).unwrap())
    }

    #[test]
    fn passes_run_in_fixed_order() {
        let kinds: Vec<PassKind> = plan().passes().iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PassKind::Distortion,
                PassKind::Water,
                PassKind::Skybox,
                PassKind::Terrain
            ]
        );
    }

    #[test]
    fn offscreen_pass_precedes_its_reader() {
        let plan = plan();
        let writer = plan
            .passes()
            .iter()
            .position(|p| p.target == RenderTarget::Offscreen)
            .unwrap();
        let reader = plan
            .passes()
            .iter()
            .position(|p| p.samples.contains(&SampledTexture::Reflection))
            .unwrap();
        assert!(writer < reader);
    }

    #[test]
    fn groups_by_target() {
        let plan = plan();
        let groups: Vec<(RenderTarget, usize)> = plan
            .target_groups()
            .map(|g| (g[0].target, g.len()))
            .collect();
        assert_eq!(
            groups,
            vec![(RenderTarget::Offscreen, 1), (RenderTarget::Surface, 3)]
        );
    }

    #[test]
    fn draw_sizes_come_from_meshes() {
        let plan = plan();
        let draws: Vec<DrawCall> = plan.passes().iter().map(|p| p.draw).collect();
        assert_eq!(
            draws,
            vec![
                DrawCall::Vertices(3),
                DrawCall::Indexed(6),
                DrawCall::Indexed(36),
                DrawCall::Indexed(6 * 99 * 99),
            ]
        );
    }

    #[test]
    fn every_asset_slot_is_sampled_once() {
        let mut slots: Vec<TextureSlot> = plan()
            .passes()
            .iter()
            .flat_map(|p| p.samples.iter())
            .filter_map(|s| match s {
                SampledTexture::Asset(slot) => Some(*slot),
                _ => None,
            })
            .collect();
        slots.sort();
        assert_eq!(slots, TextureSlot::ALL.to_vec());
    }
}
