use std::iter;

use lagoon_assets::LoadEvent;
use lagoon_common::{SceneConfig, TextureSlot};
use lagoon_render::{
    DrawCall, FrameInputs, FramePlan, FrameUniforms, Mesh, PassDesc, PassKind, RenderTarget,
    Renderer, SceneMeshes,
};
use wgpu::util::DeviceExt;

use crate::error::RenderError;
use crate::offscreen::{OFFSCREEN_COLOR_FORMAT, OFFSCREEN_DEPTH_FORMAT, OffscreenTarget};
use crate::shaders;
use crate::textures::SceneTextures;
use crate::uniforms::{DistortionUniforms, SkyboxUniforms, TerrainUniforms, WaterUniforms};

const SURFACE_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const POSITION_2D_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const POSITION_3D_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

struct MeshBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
}

impl MeshBuffers {
    fn new<const D: usize>(device: &wgpu::Device, label: &str, mesh: &Mesh<D>) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_vertex_buffer")),
            contents: bytemuck::cast_slice(mesh.vertices().as_flattened()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}_index_buffer")),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self { vertices, indices }
    }
}

struct BindGroupLayouts {
    distortion: wgpu::BindGroupLayout,
    water: wgpu::BindGroupLayout,
    skybox: wgpu::BindGroupLayout,
    terrain: wgpu::BindGroupLayout,
}

struct UniformBuffers {
    distortion: wgpu::Buffer,
    water: wgpu::Buffer,
    skybox: wgpu::Buffer,
    terrain: wgpu::Buffer,
}

struct Samplers {
    /// Mag linear, min nearest, clamp to edge. Shared by every loaded texture.
    asset: wgpu::Sampler,
    /// Nearest, repeating. Float offscreen maps are not filterable.
    offscreen: wgpu::Sampler,
}

struct BindGroups {
    distortion: wgpu::BindGroup,
    water: wgpu::BindGroup,
    skybox: wgpu::BindGroup,
    terrain: wgpu::BindGroup,
}

struct PipelineDesc<'a> {
    label: &'a str,
    source: &'a str,
    layout: &'a wgpu::BindGroupLayout,
    buffers: &'a [wgpu::VertexBufferLayout<'a>],
    targets: &'a [Option<wgpu::ColorTargetState>],
    depth_format: wgpu::TextureFormat,
    depth_write: bool,
    depth_compare: wgpu::CompareFunction,
}

/// GPU state for the lagoon scene: four pipelines, meshes, textures and targets.
pub struct SceneRenderer {
    distortion_pipeline: wgpu::RenderPipeline,
    water_pipeline: wgpu::RenderPipeline,
    skybox_pipeline: wgpu::RenderPipeline,
    terrain_pipeline: wgpu::RenderPipeline,
    layouts: BindGroupLayouts,
    uniforms: UniformBuffers,
    samplers: Samplers,
    bind_groups: BindGroups,
    terrain_mesh: MeshBuffers,
    water_mesh: MeshBuffers,
    skybox_mesh: MeshBuffers,
    textures: SceneTextures,
    offscreen: OffscreenTarget,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
    surface_size: (u32, u32),
    plan: FramePlan,
    grid_resolution: u32,
    clear_color: wgpu::Color,
}

impl SceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        config: &SceneConfig,
    ) -> Result<Self, RenderError> {
        let meshes = SceneMeshes::build(config.grid_resolution)?;
        let plan = FramePlan::new(&meshes);

        let layouts = create_layouts(device);
        let uniforms = UniformBuffers {
            distortion: uniform_buffer(device, "distortion", std::mem::size_of::<DistortionUniforms>()),
            water: uniform_buffer(device, "water", std::mem::size_of::<WaterUniforms>()),
            skybox: uniform_buffer(device, "skybox", std::mem::size_of::<SkyboxUniforms>()),
            terrain: uniform_buffer(device, "terrain", std::mem::size_of::<TerrainUniforms>()),
        };
        let samplers = Samplers {
            asset: device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("asset_sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Nearest,
                ..Default::default()
            }),
            offscreen: device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("offscreen_sampler"),
                address_mode_u: wgpu::AddressMode::Repeat,
                address_mode_v: wgpu::AddressMode::Repeat,
                ..Default::default()
            }),
        };

        let [offscreen_width, offscreen_height] = config.offscreen_size;
        let offscreen = OffscreenTarget::new(device, offscreen_width, offscreen_height);
        let textures = SceneTextures::placeholders(device, queue);
        let bind_groups = create_bind_groups(device, &layouts, &uniforms, &samplers, &textures, &offscreen);

        let surface_target = [Some(wgpu::ColorTargetState {
            format: surface_format,
            blend: Some(wgpu::BlendState::REPLACE),
            write_mask: wgpu::ColorWrites::ALL,
        })];
        let offscreen_target = Some(wgpu::ColorTargetState {
            format: OFFSCREEN_COLOR_FORMAT,
            blend: None,
            write_mask: wgpu::ColorWrites::ALL,
        });
        let position_3d = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_3D_ATTRIBUTES,
        };
        let position_2d = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 2]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_2D_ATTRIBUTES,
        };

        let distortion_pipeline = create_pipeline(
            device,
            &PipelineDesc {
                label: "distortion",
                source: shaders::DISTORTION_SHADER,
                layout: &layouts.distortion,
                buffers: &[],
                targets: &[offscreen_target.clone(), offscreen_target],
                depth_format: OFFSCREEN_DEPTH_FORMAT,
                depth_write: true,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );
        let water_pipeline = create_pipeline(
            device,
            &PipelineDesc {
                label: "water",
                source: shaders::WATER_SHADER,
                layout: &layouts.water,
                buffers: &[position_3d.clone()],
                targets: &surface_target,
                depth_format: SURFACE_DEPTH_FORMAT,
                depth_write: true,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );
        // the sky sits at depth 1.0 and only fills pixels nothing else covered
        let skybox_pipeline = create_pipeline(
            device,
            &PipelineDesc {
                label: "skybox",
                source: shaders::SKYBOX_SHADER,
                layout: &layouts.skybox,
                buffers: &[position_3d],
                targets: &surface_target,
                depth_format: SURFACE_DEPTH_FORMAT,
                depth_write: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
            },
        );
        let terrain_pipeline = create_pipeline(
            device,
            &PipelineDesc {
                label: "terrain",
                source: shaders::TERRAIN_SHADER,
                layout: &layouts.terrain,
                buffers: &[position_2d],
                targets: &surface_target,
                depth_format: SURFACE_DEPTH_FORMAT,
                depth_write: true,
                depth_compare: wgpu::CompareFunction::Less,
            },
        );

        let [r, g, b, a] = config.clear_color;
        tracing::info!(
            ?surface_format,
            offscreen = ?offscreen.size(),
            grid_resolution = config.grid_resolution,
            "scene renderer ready"
        );

        Ok(Self {
            distortion_pipeline,
            water_pipeline,
            skybox_pipeline,
            terrain_pipeline,
            terrain_mesh: MeshBuffers::new(device, "terrain", &meshes.terrain),
            water_mesh: MeshBuffers::new(device, "water", &meshes.water),
            skybox_mesh: MeshBuffers::new(device, "skybox", &meshes.skybox),
            layouts,
            uniforms,
            samplers,
            bind_groups,
            textures,
            offscreen,
            depth_texture: create_depth_texture(device, width, height),
            surface_format,
            surface_size: (width.max(1), height.max(1)),
            plan,
            grid_resolution: config.grid_resolution,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = create_depth_texture(device, width, height);
        self.surface_size = (width.max(1), height.max(1));
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    pub fn offscreen_size(&self) -> (u32, u32) {
        self.offscreen.size()
    }

    pub fn plan(&self) -> &FramePlan {
        &self.plan
    }

    pub fn is_loaded(&self, slot: TextureSlot) -> bool {
        self.textures.is_loaded(slot)
    }

    pub fn loaded_slots(&self) -> impl Iterator<Item = TextureSlot> + '_ {
        self.textures.loaded_slots()
    }

    /// Swap a finished decode into its slot. Failures keep the placeholder.
    ///
    /// Returns whether the texture was replaced.
    pub fn apply_loaded(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, event: LoadEvent) -> bool {
        let slot = event.slot;
        let decoded = match event.result {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(%slot, error = %err, "texture failed to load, keeping placeholder");
                return false;
            }
        };
        if let Err(err) = self.textures.upload(device, queue, slot, &decoded) {
            tracing::warn!(%slot, error = %err, "texture rejected, keeping placeholder");
            return false;
        }
        self.bind_groups = create_bind_groups(
            device,
            &self.layouts,
            &self.uniforms,
            &self.samplers,
            &self.textures,
            &self.offscreen,
        );
        tracing::info!(%slot, "texture loaded");
        true
    }

    /// Recorder for one frame into `target`.
    pub fn frame<'a>(
        &'a self,
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        target: &'a wgpu::TextureView,
    ) -> FrameRecorder<'a> {
        FrameRecorder {
            scene: self,
            device,
            queue,
            target,
        }
    }

    /// Record and submit one frame.
    pub fn draw(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        inputs: &FrameInputs,
    ) {
        let commands = self.frame(device, queue, target).render(&self.plan, inputs);
        queue.submit(iter::once(commands));
    }

    fn write_uniforms(&self, queue: &wgpu::Queue, frame: &FrameUniforms) {
        queue.write_buffer(
            &self.uniforms.distortion,
            0,
            bytemuck::bytes_of(&DistortionUniforms::from(&frame.distortion)),
        );
        queue.write_buffer(
            &self.uniforms.water,
            0,
            bytemuck::bytes_of(&WaterUniforms::from(&frame.water)),
        );
        queue.write_buffer(
            &self.uniforms.skybox,
            0,
            bytemuck::bytes_of(&SkyboxUniforms::from(&frame.skybox)),
        );
        queue.write_buffer(
            &self.uniforms.terrain,
            0,
            bytemuck::bytes_of(&TerrainUniforms::from(&frame.terrain)),
        );
    }

    fn begin_offscreen<'e>(&self, encoder: &'e mut wgpu::CommandEncoder) -> wgpu::RenderPass<'e> {
        let clear = wgpu::Operations {
            load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
            store: wgpu::StoreOp::Store,
        };
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("offscreen_pass"),
            color_attachments: &[
                Some(wgpu::RenderPassColorAttachment {
                    view: self.offscreen.reflection(),
                    resolve_target: None,
                    ops: clear,
                }),
                Some(wgpu::RenderPassColorAttachment {
                    view: self.offscreen.refraction(),
                    resolve_target: None,
                    ops: clear,
                }),
            ],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: self.offscreen.depth(),
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            ..Default::default()
        })
    }

    fn begin_surface<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) -> wgpu::RenderPass<'e> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("surface_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_texture,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            ..Default::default()
        })
    }

    fn record(&self, pass: &mut wgpu::RenderPass<'_>, desc: &PassDesc) {
        let (pipeline, bind_group, mesh) = match desc.kind {
            PassKind::Distortion => (&self.distortion_pipeline, &self.bind_groups.distortion, None),
            PassKind::Water => (&self.water_pipeline, &self.bind_groups.water, Some(&self.water_mesh)),
            PassKind::Skybox => (&self.skybox_pipeline, &self.bind_groups.skybox, Some(&self.skybox_mesh)),
            PassKind::Terrain => (
                &self.terrain_pipeline,
                &self.bind_groups.terrain,
                Some(&self.terrain_mesh),
            ),
        };

        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, bind_group, &[]);
        if let Some(mesh) = mesh {
            pass.set_vertex_buffer(0, mesh.vertices.slice(..));
            pass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
        }
        match desc.draw {
            DrawCall::Vertices(count) => pass.draw(0..count, 0..1),
            DrawCall::Indexed(count) => pass.draw_indexed(0..count, 0, 0..1),
        }
    }
}

/// Records one frame of a [`FramePlan`] into a command buffer.
///
/// Every run of passes sharing a target becomes one render pass that clears
/// its attachments first.
pub struct FrameRecorder<'a> {
    scene: &'a SceneRenderer,
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    target: &'a wgpu::TextureView,
}

impl Renderer for FrameRecorder<'_> {
    type Output = wgpu::CommandBuffer;

    fn render(&mut self, plan: &FramePlan, inputs: &FrameInputs) -> wgpu::CommandBuffer {
        let uniforms = FrameUniforms::compute(inputs, self.scene.grid_resolution);
        self.scene.write_uniforms(self.queue, &uniforms);

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_encoder"),
        });
        for group in plan.target_groups() {
            let mut pass = match group[0].target {
                RenderTarget::Offscreen => self.scene.begin_offscreen(&mut encoder),
                RenderTarget::Surface => self.scene.begin_surface(&mut encoder, self.target),
            };
            for desc in group {
                self.scene.record(&mut pass, desc);
            }
        }
        encoder.finish()
    }
}

fn uniform_buffer(device: &wgpu::Device, label: &str, size: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label}_uniform_buffer")),
        size: size as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
    filterable: bool,
    view_dimension: wgpu::TextureViewDimension,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable },
            view_dimension,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
    kind: wgpu::SamplerBindingType,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Sampler(kind),
        count: None,
    }
}

fn create_layouts(device: &wgpu::Device) -> BindGroupLayouts {
    use wgpu::SamplerBindingType::{Filtering, NonFiltering};
    use wgpu::ShaderStages as Stage;
    use wgpu::TextureViewDimension::{Cube, D2};

    let layout = |label: &str, entries: &[wgpu::BindGroupLayoutEntry]| {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries,
        })
    };

    BindGroupLayouts {
        distortion: layout(
            "distortion_layout",
            &[
                uniform_entry(0, Stage::FRAGMENT),
                texture_entry(1, Stage::FRAGMENT, true, D2),
                sampler_entry(2, Stage::FRAGMENT, Filtering),
            ],
        ),
        water: layout(
            "water_layout",
            &[
                uniform_entry(0, Stage::VERTEX),
                texture_entry(1, Stage::FRAGMENT, false, D2),
                texture_entry(2, Stage::FRAGMENT, false, D2),
                sampler_entry(3, Stage::FRAGMENT, NonFiltering),
            ],
        ),
        skybox: layout(
            "skybox_layout",
            &[
                uniform_entry(0, Stage::VERTEX),
                texture_entry(1, Stage::FRAGMENT, true, Cube),
                sampler_entry(2, Stage::FRAGMENT, Filtering),
            ],
        ),
        terrain: layout(
            "terrain_layout",
            &[
                uniform_entry(0, Stage::VERTEX_FRAGMENT),
                texture_entry(1, Stage::VERTEX, true, D2),
                texture_entry(2, Stage::FRAGMENT, true, D2),
                texture_entry(3, Stage::FRAGMENT, true, D2),
                sampler_entry(4, Stage::VERTEX_FRAGMENT, Filtering),
            ],
        ),
    }
}

fn create_bind_groups(
    device: &wgpu::Device,
    layouts: &BindGroupLayouts,
    uniforms: &UniformBuffers,
    samplers: &Samplers,
    textures: &SceneTextures,
    offscreen: &OffscreenTarget,
) -> BindGroups {
    use wgpu::BindingResource::{Sampler, TextureView};

    BindGroups {
        distortion: bind_group(
            device,
            "distortion_bind_group",
            &layouts.distortion,
            &[
                uniforms.distortion.as_entire_binding(),
                TextureView(textures.view(TextureSlot::Distortion)),
                Sampler(&samplers.asset),
            ],
        ),
        water: bind_group(
            device,
            "water_bind_group",
            &layouts.water,
            &[
                uniforms.water.as_entire_binding(),
                TextureView(offscreen.reflection()),
                TextureView(offscreen.refraction()),
                Sampler(&samplers.offscreen),
            ],
        ),
        skybox: bind_group(
            device,
            "skybox_bind_group",
            &layouts.skybox,
            &[
                uniforms.skybox.as_entire_binding(),
                TextureView(textures.view(TextureSlot::Skybox)),
                Sampler(&samplers.asset),
            ],
        ),
        terrain: bind_group(
            device,
            "terrain_bind_group",
            &layouts.terrain,
            &[
                uniforms.terrain.as_entire_binding(),
                TextureView(textures.view(TextureSlot::Heightmap)),
                TextureView(textures.view(TextureSlot::Grass)),
                TextureView(textures.view(TextureSlot::Sand)),
                Sampler(&samplers.asset),
            ],
        ),
    }
}

fn bind_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    resources: &[wgpu::BindingResource<'_>],
) -> wgpu::BindGroup {
    let entries: Vec<wgpu::BindGroupEntry<'_>> = resources
        .iter()
        .enumerate()
        .map(|(binding, resource)| wgpu::BindGroupEntry {
            binding: binding as u32,
            resource: resource.clone(),
        })
        .collect();
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

fn create_pipeline(device: &wgpu::Device, desc: &PipelineDesc<'_>) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{}_shader", desc.label)),
        source: wgpu::ShaderSource::Wgsl(desc.source.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{}_pipeline_layout", desc.label)),
        bind_group_layouts: &[desc.layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{}_pipeline", desc.label)),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: desc.buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: desc.targets,
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: desc.depth_format,
            depth_write_enabled: desc.depth_write,
            depth_compare: desc.depth_compare,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    })
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("surface_depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SURFACE_DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&Default::default())
}
