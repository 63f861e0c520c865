//! Scene configuration, loaded from YAML.
//!
//! Every field has a default matching the stock demo, so an empty document
//! (or no file at all) yields a runnable scene.

use crate::types::{LightSettings, TextureSlot};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a [`SceneConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where a texture's pixels come from on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureSource {
    Image(PathBuf),
    /// Faces in +X, -X, +Y, -Y, +Z, -Z order.
    Cubemap([PathBuf; 6]),
}

impl TextureSource {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            TextureSource::Image(path) => vec![path.as_path()],
            TextureSource::Cubemap(faces) => faces.iter().map(PathBuf::as_path).collect(),
        }
    }
}

/// Texture file locations, relative to [`SceneConfig::asset_root`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TexturePaths {
    pub heightmap: PathBuf,
    pub grass: PathBuf,
    pub sand: PathBuf,
    pub distortion: PathBuf,
    pub skybox: [PathBuf; 6],
}

impl Default for TexturePaths {
    fn default() -> Self {
        Self {
            heightmap: "textures/Heightmap.png".into(),
            grass: "textures/grass.png".into(),
            sand: "textures/sand.png".into(),
            distortion: "textures/distortion_map.png".into(),
            skybox: [
                "textures/skybox/right.bmp".into(),
                "textures/skybox/left.bmp".into(),
                "textures/skybox/top.bmp".into(),
                "textures/skybox/bottom.bmp".into(),
                "textures/skybox/front.bmp".into(),
                "textures/skybox/back.bmp".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory every texture path is resolved against.
    pub asset_root: PathBuf,
    pub textures: TexturePaths,
    /// Size of the reflection/refraction target, independent of the window.
    pub offscreen_size: [u32; 2],
    /// Vertices per side of the terrain grid.
    pub grid_resolution: u32,
    /// Initial slider values.
    pub light: LightSettings,
    pub clear_color: [f64; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("."),
            textures: TexturePaths::default(),
            offscreen_size: [1024, 1024],
            grid_resolution: 100,
            light: LightSettings::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl SceneConfig {
    /// Largest offscreen edge accepted; matches the default wgpu 2D texture limit.
    pub const MAX_OFFSCREEN_EDGE: u32 = 8192;
    /// Largest grid whose index count `6 * (n - 1)^2` fits in a `u32`.
    pub const MAX_GRID_RESOLUTION: u32 = 26_755;

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(text)?;
        config.light.clamp();
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Read and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded scene config");
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=Self::MAX_GRID_RESOLUTION).contains(&self.grid_resolution) {
            return Err(ConfigError::Invalid(format!(
                "grid_resolution {} is outside 2..={}",
                self.grid_resolution,
                Self::MAX_GRID_RESOLUTION
            )));
        }
        let [w, h] = self.offscreen_size;
        if w == 0 || h == 0 || w > Self::MAX_OFFSCREEN_EDGE || h > Self::MAX_OFFSCREEN_EDGE {
            return Err(ConfigError::Invalid(format!(
                "offscreen_size {w}x{h} is outside 1..={}",
                Self::MAX_OFFSCREEN_EDGE
            )));
        }
        Ok(())
    }

    /// Resolve the on-disk source for `slot` against the asset root.
    pub fn texture_source(&self, slot: TextureSlot) -> TextureSource {
        let root = &self.asset_root;
        let t = &self.textures;
        match slot {
            TextureSlot::Heightmap => TextureSource::Image(root.join(&t.heightmap)),
            TextureSlot::Grass => TextureSource::Image(root.join(&t.grass)),
            TextureSlot::Sand => TextureSource::Image(root.join(&t.sand)),
            TextureSlot::Distortion => TextureSource::Image(root.join(&t.distortion)),
            TextureSlot::Skybox => TextureSource::Cubemap(t.skybox.clone().map(|p| root.join(p))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SceneConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.offscreen_size, [1024, 1024]);
        assert_eq!(config.grid_resolution, 100);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let yaml = "grid_resolution: 32\nlight:\n  position: [10.0, -5.0, 20.0]\n  intensity: 7.5\n";
        let config = SceneConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.grid_resolution, 32);
        assert_eq!(config.light.position, Vec3::new(10.0, -5.0, 20.0));
        assert_eq!(config.light.intensity, 7.5);
        assert_eq!(config.textures, TexturePaths::default());
    }

    #[test]
    fn out_of_range_light_is_clamped_on_load() {
        let yaml = "light:\n  position: [0.0, 0.0, 900.0]\n  intensity: 99.0\n";
        let config = SceneConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.light.position.z, 100.0);
        assert_eq!(config.light.intensity, 50.0);
    }

    #[test]
    fn rejects_degenerate_grid() {
        let err = SceneConfig::from_yaml_str("grid_resolution: 1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_grid_whose_index_count_overflows() {
        let err = SceneConfig::from_yaml_str("grid_resolution: 30000").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let max = SceneConfig::MAX_GRID_RESOLUTION;
        let cells = u64::from(max - 1);
        assert!(6 * cells * cells <= u64::from(u32::MAX));
        assert!(6 * (cells + 1) * (cells + 1) > u64::from(u32::MAX));
        let config = SceneConfig::from_yaml_str(&format!("grid_resolution: {max}")).unwrap();
        assert_eq!(config.grid_resolution, max);
    }

    #[test]
    fn rejects_zero_offscreen_size() {
        let err = SceneConfig::from_yaml_str("offscreen_size: [0, 512]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn yaml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        let mut config = SceneConfig::default();
        config.asset_root = PathBuf::from("/data/lagoon");
        config.offscreen_size = [512, 256];
        std::fs::write(&path, config.to_yaml().unwrap()).unwrap();

        let loaded = SceneConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SceneConfig::load("/nonexistent/lagoon/scene.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn texture_sources_resolve_against_root() {
        let config = SceneConfig {
            asset_root: PathBuf::from("assets"),
            ..SceneConfig::default()
        };
        assert_eq!(
            config.texture_source(TextureSlot::Sand),
            TextureSource::Image(PathBuf::from("assets/textures/sand.png"))
        );
        match config.texture_source(TextureSlot::Skybox) {
            TextureSource::Cubemap(faces) => {
                assert_eq!(faces[0], PathBuf::from("assets/textures/skybox/right.bmp"));
                assert_eq!(faces[5], PathBuf::from("assets/textures/skybox/back.bmp"));
            }
            other => panic!("expected cubemap, got {other:?}"),
        }
    }
}
