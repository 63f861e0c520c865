use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use glam::{Mat4, Vec2, Vec3};
use lagoon_assets::TextureLoader;
use lagoon_common::{SceneConfig, TextureSlot};
use lagoon_render::mesh::WATER_CORNERS;
use lagoon_render::shading::{self, TerrainSurface};
use lagoon_render::{
    DebugTextRenderer, FrameInputs, FramePlan, Renderer, SceneMeshes, TERRAIN_GRID_RESOLUTION,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lagoon-cli", about = "Inspect the lagoon scene without a window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the default scene config
    Info,
    /// Report vertex and index counts of the scene meshes
    Mesh {
        /// Vertices per side of the terrain grid
        #[arg(short, long, default_value_t = TERRAIN_GRID_RESOLUTION)]
        resolution: u32,
    },
    /// Show the per-frame pass sequence
    Plan {
        /// Emit the plan as JSON instead of a text trace
        #[arg(long)]
        json: bool,
    },
    /// ASCII preview of the terrain mask (left) and water cutout (right), seen from above
    Island {
        /// Characters per side
        #[arg(short, long, default_value_t = 48)]
        size: u32,
    },
    /// Decode every configured texture and report the result
    Assets {
        /// Scene config (YAML); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seconds to wait for each decode
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// Evaluate the shader math at one texture coordinate
    Probe {
        #[arg(long, allow_negative_numbers = true)]
        u: f32,
        #[arg(long, allow_negative_numbers = true)]
        v: f32,
        /// Seconds since start
        #[arg(long, default_value_t = 0.0)]
        time: f32,
        /// Red and green of the distortion map sample, in [0, 1]
        #[arg(long, num_args = 2, default_values_t = vec![0.5, 0.5])]
        disto: Vec<f32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("lagoon-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", lagoon_render::crate_info());
            println!("assets: {}", lagoon_assets::crate_info());
            println!();
            print!("{}", SceneConfig::default().to_yaml()?);
        }
        Commands::Mesh { resolution } => {
            let meshes = SceneMeshes::build(resolution)?;
            println!(
                "terrain: {}x{} grid, {} vertices, {} indices ({} triangles)",
                resolution,
                resolution,
                meshes.terrain.vertex_count(),
                meshes.terrain.index_count(),
                meshes.terrain.index_count() / 3
            );
            println!(
                "water:   {} vertices, {} indices",
                meshes.water.vertex_count(),
                meshes.water.index_count()
            );
            println!(
                "skybox:  {} vertices, {} indices",
                meshes.skybox.vertex_count(),
                meshes.skybox.index_count()
            );
        }
        Commands::Plan { json } => {
            let config = SceneConfig::default();
            let meshes = SceneMeshes::build(config.grid_resolution)?;
            let plan = FramePlan::new(&meshes);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                let inputs = FrameInputs {
                    view: Mat4::look_at_rh(Vec3::new(0.0, 1.0, 2.3), Vec3::ZERO, Vec3::Y),
                    projection: Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.01, 100.0),
                    light: config.light,
                    time: 0.0,
                };
                let [w, h] = config.offscreen_size;
                let mut renderer = DebugTextRenderer::new((1280, 720), (w, h));
                print!("{}", renderer.render(&plan, &inputs));
            }
        }
        Commands::Island { size } => {
            if size < 2 {
                bail!("size must be at least 2");
            }
            for line in island_preview(size) {
                println!("{line}");
            }
            println!("\n# grass  . sand  ~ water (left: terrain, right: water)");
        }
        Commands::Assets { config, timeout } => {
            let config = SceneConfig::load_or_default(config.as_deref())?;
            let mut loader = TextureLoader::new();
            loader.request_scene(&config)?;

            let mut failed = 0;
            while loader.in_flight() > 0 {
                let event = loader
                    .wait(Duration::from_secs(timeout))
                    .context("timed out waiting for texture decodes")?;
                let path = config.texture_source(event.slot);
                match event.result {
                    Ok(decoded) => {
                        let (w, h) = decoded.dimensions();
                        let kind = if event.slot.is_cubemap() { " x6" } else { "" };
                        println!("{:<10} ok    {w}x{h}{kind}", event.slot.name());
                    }
                    Err(e) => {
                        failed += 1;
                        println!("{:<10} FAIL  {e}", event.slot.name());
                        tracing::debug!(source = ?path, "decode failed");
                    }
                }
            }
            if failed > 0 {
                bail!("{failed} of {} textures failed to load", TextureSlot::ALL.len());
            }
        }
        Commands::Probe { u, v, time, disto } => {
            let uv = Vec2::new(u, v);
            let clip = 2.0 * uv - Vec2::ONE;
            let sample = Vec2::new(disto[0], disto[1]);

            let lookup = shading::distortion_lookup(clip);
            let distorted = shading::distorted_uv(clip, sample, time);
            let (reflection, refraction) = shading::offscreen_colors(distorted);
            println!("uv:               ({u:.4}, {v:.4})");
            println!("clip:             ({:.4}, {:.4})", clip.x, clip.y);
            println!("distortion read:  ({:.4}, {:.4})", lookup.x, lookup.y);
            println!("distorted uv:     ({:.4}, {:.4})", distorted.x, distorted.y);
            println!("reflection:       {reflection:?}");
            println!("refraction:       {refraction:?}");
            println!("terrain surface:  {:?}", shading::terrain_surface(uv));
            println!("water visible:    {}", water_at(clip));
        }
    }

    Ok(())
}

/// Whether the water quad covers `xy` and its cutout keeps it.
///
/// Terrain and water share the same scale and rotation, so terrain
/// positions `2uv - 1` and water positions live in one plane.
fn water_at(xy: Vec2) -> bool {
    let min = Vec2::new(WATER_CORNERS[0][0], WATER_CORNERS[0][1]);
    let max = Vec2::new(WATER_CORNERS[2][0], WATER_CORNERS[2][1]);
    let inside = xy.cmpge(min).all() && xy.cmple(max).all();
    inside && shading::water_visible(xy)
}

fn island_preview(size: u32) -> Vec<String> {
    let cell = |col: u32, row: u32| {
        Vec2::new(
            (col as f32 + 0.5) / size as f32,
            (row as f32 + 0.5) / size as f32,
        )
    };
    (0..size)
        .rev()
        .map(|row| {
            let terrain: String = (0..size)
                .map(|col| match shading::terrain_surface(cell(col, row)) {
                    TerrainSurface::Grass => '#',
                    TerrainSurface::Sand => '.',
                    TerrainSurface::Cut => ' ',
                })
                .collect();
            let water: String = (0..size)
                .map(|col| {
                    if water_at(2.0 * cell(col, row) - Vec2::ONE) {
                        '~'
                    } else {
                        ' '
                    }
                })
                .collect();
            format!("{terrain}  {water}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_has_requested_shape() {
        let lines = island_preview(16);
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|l| l.chars().count() == 2 * 16 + 2));
    }

    #[test]
    fn preview_shows_island_and_water() {
        let text = island_preview(48).concat();
        assert!(text.contains('#'));
        assert!(text.contains('.'));
        assert!(text.contains('~'));
    }

    #[test]
    fn water_stops_at_quad_edge() {
        assert!(water_at(Vec2::new(0.03, 0.05)));
        assert!(!water_at(Vec2::new(0.9, 0.0)));
    }
}
