/// Full-screen pass writing the distorted reflection and refraction maps.
///
/// The triangle is generated from the vertex index; no vertex buffer is bound.
pub const DISTORTION_SHADER: &str = r#"
struct DistortionUniforms {
    time: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: DistortionUniforms;
@group(0) @binding(1)
var distortion_map: texture_2d<f32>;
@group(0) @binding(2)
var distortion_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) coord: vec2<f32>,
};

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> VertexOutput {
    let x = -1.0 + f32((index & 1u) << 2u);
    let y = -1.0 + f32((index & 2u) << 1u);

    var out: VertexOutput;
    out.coord = vec2<f32>(x, y);
    out.clip_position = vec4<f32>(x, y, 0.0, 1.0);
    return out;
}

struct OffscreenOutput {
    @location(0) reflection: vec4<f32>,
    @location(1) refraction: vec4<f32>,
};

@fragment
fn fs_main(in: VertexOutput) -> OffscreenOutput {
    let lookup = fract(8.0 * (0.5 * in.coord + vec2<f32>(0.5)));
    let disto = textureSample(distortion_map, distortion_sampler, lookup);
    let offset = (2.0 * disto.xy - vec2<f32>(1.0)) / 50.0;
    let uv = fract(5.0 * (in.coord + offset * sin(uniforms.time)));

    var out: OffscreenOutput;
    out.reflection = vec4<f32>(0.0, uv, 1.0);
    out.refraction = vec4<f32>(uv, 0.0, 1.0);
    return out;
}
"#;

/// Water quad blending the two offscreen maps by a view-angle Fresnel term.
pub const WATER_SHADER: &str = r#"
struct WaterUniforms {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: WaterUniforms;
@group(0) @binding(1)
var reflection_map: texture_2d<f32>;
@group(0) @binding(2)
var refraction_map: texture_2d<f32>;
@group(0) @binding(3)
var offscreen_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
    @location(1) fresnel: f32,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    let model_view = uniforms.view * uniforms.model;
    let view_position = model_view * vec4<f32>(position, 1.0);
    let view_normal = normalize((model_view * vec4<f32>(0.0, 0.0, 1.0, 0.0)).xyz);
    let to_eye = normalize(-view_position.xyz);

    var out: VertexOutput;
    out.clip_position = uniforms.projection * view_position;
    out.tex_coord = position.xy;
    out.fresnel = max(0.0, dot(to_eye, view_normal));
    return out;
}

fn sd_circle(p: vec2<f32>, r: f32) -> f32 {
    return length(p) - r;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // sampled before the discard so derivatives stay in uniform control flow
    let reflection = textureSample(reflection_map, offscreen_sampler, in.tex_coord);
    let refraction = textureSample(refraction_map, offscreen_sampler, in.tex_coord);

    if (sd_circle(in.tex_coord - vec2<f32>(0.03, 0.05), 0.1) > 0.41) {
        discard;
    }

    let color = in.fresnel * reflection.rgb + (1.0 - in.fresnel) * refraction.rgb;
    return vec4<f32>(color, 1.0);
}
"#;

/// Cube-mapped sky pinned to the far plane.
pub const SKYBOX_SHADER: &str = r#"
struct SkyboxUniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: SkyboxUniforms;
@group(0) @binding(1)
var sky_map: texture_cube<f32>;
@group(0) @binding(2)
var sky_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) direction: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    let clip = uniforms.view_proj * vec4<f32>(position, 1.0);

    var out: VertexOutput;
    out.direction = position;
    out.clip_position = clip.xyww;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(sky_map, sky_sampler, in.direction);
}
"#;

/// Heightmap-displaced island with a sand/grass mask and Lambert lighting.
pub const TERRAIN_SHADER: &str = r#"
struct TerrainUniforms {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    light_position: vec3<f32>,
    light_intensity: f32,
    grid_step: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: TerrainUniforms;
@group(0) @binding(1)
var heightmap: texture_2d<f32>;
@group(0) @binding(2)
var grass_map: texture_2d<f32>;
@group(0) @binding(3)
var sand_map: texture_2d<f32>;
@group(0) @binding(4)
var terrain_sampler: sampler;

const PI: f32 = 3.14159265358979;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coord: vec2<f32>,
    @location(1) view_position: vec3<f32>,
    @location(2) normal: vec3<f32>,
};

fn displaced(uv: vec2<f32>) -> vec3<f32> {
    let height = textureSampleLevel(heightmap, terrain_sampler, uv, 0.0).r;
    return vec3<f32>(2.0 * uv - vec2<f32>(1.0), height);
}

@vertex
fn vs_main(@location(0) grid: vec2<f32>) -> VertexOutput {
    let p = displaced(grid);
    let spacing = uniforms.grid_step;
    let a = displaced(grid + vec2<f32>(spacing, 0.0)) - p;
    let b = displaced(grid + vec2<f32>(0.0, spacing)) - p;
    let c = displaced(grid - vec2<f32>(spacing, 0.0)) - p;
    let d = displaced(grid - vec2<f32>(0.0, spacing)) - p;
    let normal = (normalize(cross(a, b))
        + normalize(cross(b, c))
        + normalize(cross(c, d))
        + normalize(cross(d, a))) / 4.0;

    let model_view = uniforms.view * uniforms.model;
    let view_position = model_view * vec4<f32>(p, 1.0);

    var out: VertexOutput;
    out.clip_position = uniforms.projection * view_position;
    out.tex_coord = grid;
    out.view_position = view_position.xyz;
    out.normal = normalize((uniforms.normal_matrix * vec4<f32>(normal, 0.0)).xyz);
    return out;
}

fn sd_circle(p: vec2<f32>, r: f32) -> f32 {
    return length(p) - r;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let tiled = fract(5.0 * in.tex_coord);
    let grass = textureSample(grass_map, terrain_sampler, tiled);
    let sand = textureSample(sand_map, terrain_sampler, tiled);

    let shore = sd_circle(in.tex_coord - vec2<f32>(0.52, 0.53), 0.1);
    let albedo = select(grass.rgb, sand.rgb, shore > 0.38 || shore < 0.12);

    let n = normalize(in.normal);
    let light_dir = normalize(uniforms.light_position - in.view_position);
    let diffuse = max(0.0, dot(n, light_dir));
    let radiance = uniforms.light_intensity * albedo * diffuse / PI;

    if (sd_circle(in.tex_coord - vec2<f32>(0.5), 0.1) > 0.45) {
        discard;
    }
    return vec4<f32>(0.2 * radiance, 1.0);
}
"#;
