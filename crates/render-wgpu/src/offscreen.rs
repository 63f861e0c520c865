/// Float format of both offscreen color attachments.
pub const OFFSCREEN_COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba32Float;
pub const OFFSCREEN_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Reflection and refraction maps written by the distortion pass.
///
/// Sized once from the scene config; independent of the window size.
pub struct OffscreenTarget {
    reflection: wgpu::TextureView,
    refraction: wgpu::TextureView,
    depth: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl OffscreenTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            reflection: Self::create_view(device, "reflection_map", OFFSCREEN_COLOR_FORMAT, width, height),
            refraction: Self::create_view(device, "refraction_map", OFFSCREEN_COLOR_FORMAT, width, height),
            depth: Self::create_view(device, "offscreen_depth", OFFSCREEN_DEPTH_FORMAT, width, height),
            width,
            height,
        }
    }

    pub fn reflection(&self) -> &wgpu::TextureView {
        &self.reflection
    }

    pub fn refraction(&self) -> &wgpu::TextureView {
        &self.refraction
    }

    pub fn depth(&self) -> &wgpu::TextureView {
        &self.depth
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn create_view(
        device: &wgpu::Device,
        label: &str,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let usage = if format == OFFSCREEN_DEPTH_FORMAT {
            wgpu::TextureUsages::RENDER_ATTACHMENT
        } else {
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}
