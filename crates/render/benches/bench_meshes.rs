use std::hint::black_box;
use std::time::Instant;

use glam::{Mat4, Vec3};
use lagoon_common::LightSettings;
use lagoon_render::mesh::terrain_grid;
use lagoon_render::{FrameInputs, FrameUniforms};

fn bench_terrain_grid(resolution: u32, iterations: usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(terrain_grid(black_box(resolution)));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  terrain grid ({resolution}x{resolution}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_frame_uniforms(iterations: usize) {
    let mut inputs = FrameInputs {
        view: Mat4::look_at_rh(Vec3::new(0.0, 1.5, 2.5), Vec3::ZERO, Vec3::Y),
        projection: Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.01, 100.0),
        light: LightSettings::default(),
        time: 0.0,
    };

    let start = Instant::now();
    for i in 0..iterations {
        inputs.time = i as f32 / 60.0;
        let _ = black_box(FrameUniforms::compute(black_box(&inputs), 100));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  frame uniforms ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn main() {
    println!("=== Scene Mesh Benchmarks ===\n");

    println!("Terrain grid build:");
    bench_terrain_grid(100, 200);
    bench_terrain_grid(256, 50);
    bench_terrain_grid(1024, 5);

    println!("\nPer-frame uniform math:");
    bench_frame_uniforms(100_000);

    println!("\n=== Done ===");
}
