use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the five textures the scene samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureSlot {
    Heightmap,
    Grass,
    Sand,
    Distortion,
    Skybox,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 5] = [
        TextureSlot::Heightmap,
        TextureSlot::Grass,
        TextureSlot::Sand,
        TextureSlot::Distortion,
        TextureSlot::Skybox,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextureSlot::Heightmap => "heightmap",
            TextureSlot::Grass => "grass",
            TextureSlot::Sand => "sand",
            TextureSlot::Distortion => "distortion",
            TextureSlot::Skybox => "skybox",
        }
    }

    /// The skybox is the only cubemap; every other slot is a plain 2D image.
    pub fn is_cubemap(self) -> bool {
        matches!(self, TextureSlot::Skybox)
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point light driven by the UI sliders.
///
/// The position is expressed in the terrain's model space and is always kept
/// inside [`LightSettings::POSITION_RANGE`]; the intensity inside
/// [`LightSettings::INTENSITY_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSettings {
    pub position: Vec3,
    pub intensity: f32,
}

impl LightSettings {
    pub const POSITION_RANGE: (f32, f32) = (-100.0, 100.0);
    pub const INTENSITY_RANGE: (f32, f32) = (0.0, 50.0);

    pub fn new(position: Vec3, intensity: f32) -> Self {
        let mut light = Self {
            position,
            intensity,
        };
        light.clamp();
        light
    }

    /// Pull every component back inside the slider ranges.
    pub fn clamp(&mut self) {
        let (lo, hi) = Self::POSITION_RANGE;
        self.position = self.position.clamp(Vec3::splat(lo), Vec3::splat(hi));
        let (lo, hi) = Self::INTENSITY_RANGE;
        self.intensity = self.intensity.clamp(lo, hi);
    }
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 50.0),
            intensity: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_matches_slider_defaults() {
        let light = LightSettings::default();
        assert_eq!(light.position, Vec3::new(0.0, 0.0, 50.0));
        assert_eq!(light.intensity, 20.0);
    }

    #[test]
    fn light_is_clamped_to_slider_ranges() {
        let light = LightSettings::new(Vec3::new(-500.0, 12.0, 101.0), 80.0);
        assert_eq!(light.position, Vec3::new(-100.0, 12.0, 100.0));
        assert_eq!(light.intensity, 50.0);

        let dark = LightSettings::new(Vec3::ZERO, -3.0);
        assert_eq!(dark.intensity, 0.0);
    }

    #[test]
    fn only_skybox_is_a_cubemap() {
        let cubemaps: Vec<_> = TextureSlot::ALL
            .iter()
            .filter(|slot| slot.is_cubemap())
            .collect();
        assert_eq!(cubemaps, vec![&TextureSlot::Skybox]);
    }

    #[test]
    fn slot_display_uses_snake_name() {
        assert_eq!(TextureSlot::Heightmap.to_string(), "heightmap");
        assert_eq!(TextureSlot::Distortion.to_string(), "distortion");
    }
}
