use std::collections::BTreeSet;

use lagoon_assets::{DecodedCubemap, DecodedImage, DecodedTexture};
use lagoon_common::TextureSlot;

use crate::error::RenderError;

/// Color shown in place of a texture that has not finished loading.
pub const PLACEHOLDER_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Format of every asset texture. Bytes are sampled as stored, with no sRGB
/// decode, so a non-sRGB surface shows them unchanged.
pub const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Pick a surface format that stores shader output without sRGB encoding.
///
/// Falls back to the first reported format when every one is sRGB.
pub fn linear_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first())
        .copied()
}

/// The five scene textures, each starting as a 1x1 placeholder.
pub struct SceneTextures {
    heightmap: wgpu::TextureView,
    grass: wgpu::TextureView,
    sand: wgpu::TextureView,
    distortion: wgpu::TextureView,
    skybox: wgpu::TextureView,
    loaded: BTreeSet<TextureSlot>,
}

impl SceneTextures {
    pub fn placeholders(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let image = DecodedImage::solid(PLACEHOLDER_COLOR);
        let cube = DecodedCubemap::solid(PLACEHOLDER_COLOR);
        Self {
            heightmap: create_2d(device, queue, TextureSlot::Heightmap, &image),
            grass: create_2d(device, queue, TextureSlot::Grass, &image),
            sand: create_2d(device, queue, TextureSlot::Sand, &image),
            distortion: create_2d(device, queue, TextureSlot::Distortion, &image),
            skybox: create_cube(device, queue, TextureSlot::Skybox, &cube),
            loaded: BTreeSet::new(),
        }
    }

    /// Replace the texture in `slot` with decoded pixels.
    ///
    /// Bind groups referencing the old view must be rebuilt afterwards.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        slot: TextureSlot,
        decoded: &DecodedTexture,
    ) -> Result<(), RenderError> {
        let (width, height) = decoded.dimensions();
        let max = device.limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(RenderError::TextureTooLarge {
                slot,
                width,
                height,
                max,
            });
        }

        let view = match (slot.is_cubemap(), decoded) {
            (false, DecodedTexture::Image(image)) => create_2d(device, queue, slot, image),
            (true, DecodedTexture::Cubemap(cube)) => create_cube(device, queue, slot, cube),
            (true, DecodedTexture::Image(_)) => {
                return Err(RenderError::TextureKind {
                    slot,
                    expected: "cubemap",
                    actual: "image",
                });
            }
            (false, DecodedTexture::Cubemap(_)) => {
                return Err(RenderError::TextureKind {
                    slot,
                    expected: "image",
                    actual: "cubemap",
                });
            }
        };

        *self.view_mut(slot) = view;
        self.loaded.insert(slot);
        tracing::debug!(%slot, width, height, "texture uploaded");
        Ok(())
    }

    pub fn view(&self, slot: TextureSlot) -> &wgpu::TextureView {
        match slot {
            TextureSlot::Heightmap => &self.heightmap,
            TextureSlot::Grass => &self.grass,
            TextureSlot::Sand => &self.sand,
            TextureSlot::Distortion => &self.distortion,
            TextureSlot::Skybox => &self.skybox,
        }
    }

    fn view_mut(&mut self, slot: TextureSlot) -> &mut wgpu::TextureView {
        match slot {
            TextureSlot::Heightmap => &mut self.heightmap,
            TextureSlot::Grass => &mut self.grass,
            TextureSlot::Sand => &mut self.sand,
            TextureSlot::Distortion => &mut self.distortion,
            TextureSlot::Skybox => &mut self.skybox,
        }
    }

    pub fn is_loaded(&self, slot: TextureSlot) -> bool {
        self.loaded.contains(&slot)
    }

    pub fn loaded_slots(&self) -> impl Iterator<Item = TextureSlot> + '_ {
        self.loaded.iter().copied()
    }
}

fn create_2d(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    slot: TextureSlot,
    image: &DecodedImage,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(slot.name()),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TEXTURE_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    write_layer(queue, &texture, 0, image);
    texture.create_view(&Default::default())
}

fn create_cube(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    slot: TextureSlot,
    cube: &DecodedCubemap,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(slot.name()),
        size: wgpu::Extent3d {
            width: cube.size(),
            height: cube.size(),
            depth_or_array_layers: 6,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TEXTURE_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    for (layer, face) in cube.faces().iter().enumerate() {
        write_layer(queue, &texture, layer as u32, face);
    }
    texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some(slot.name()),
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    })
}

fn write_layer(queue: &wgpu::Queue, texture: &wgpu::Texture, layer: u32, image: &DecodedImage) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d {
                x: 0,
                y: 0,
                z: layer,
            },
            aspect: wgpu::TextureAspect::All,
        },
        &image.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(image.bytes_per_row()),
            rows_per_image: Some(image.height),
        },
        wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat;

    #[test]
    fn asset_textures_skip_srgb_decode() {
        assert_eq!(TEXTURE_FORMAT, TextureFormat::Rgba8Unorm);
        assert!(!TEXTURE_FORMAT.is_srgb());
    }

    #[test]
    fn surface_prefers_non_srgb_format() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(
            linear_surface_format(&formats),
            Some(TextureFormat::Bgra8Unorm)
        );

        let formats = [TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(
            linear_surface_format(&formats),
            Some(TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn surface_falls_back_when_only_srgb_is_offered() {
        assert_eq!(
            linear_surface_format(&[TextureFormat::Bgra8UnormSrgb]),
            Some(TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(linear_surface_format(&[]), None);
    }
}
