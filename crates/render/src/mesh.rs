//! Static scene geometry, built once at startup.

/// Vertices per side of the stock terrain grid.
pub const TERRAIN_GRID_RESOLUTION: u32 = 100;

/// Largest grid whose index count `6 * (n - 1)^2` fits in a `u32`.
pub const MAX_GRID_RESOLUTION: u32 = lagoon_common::SceneConfig::MAX_GRID_RESOLUTION;

/// Water quad corners in model space (z = 0 plane).
pub const WATER_CORNERS: [[f32; 3]; 4] = [
    [-0.45, -0.6, 0.0],
    [0.55, -0.6, 0.0],
    [0.55, 0.55, 0.0],
    [-0.45, 0.55, 0.0],
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("grid resolution must be at least 2, got {0}")]
    ResolutionTooSmall(u32),
    #[error("grid resolution {0} exceeds {max}: index count overflows u32", max = MAX_GRID_RESOLUTION)]
    ResolutionTooLarge(u32),
}

/// Indexed triangle list with `D`-component positions. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<const D: usize> {
    vertices: Vec<[f32; D]>,
    indices: Vec<u32>,
}

impl<const D: usize> Mesh<D> {
    pub fn vertices(&self) -> &[[f32; D]] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Index count of an `n`x`n` grid: two triangles per cell.
///
/// `None` when the count does not fit in a `u32`.
pub fn grid_index_count(resolution: u32) -> Option<u32> {
    let cells = resolution.saturating_sub(1);
    cells.checked_mul(cells)?.checked_mul(6)
}

/// Regular `n`x`n` grid over the unit square.
///
/// Vertex `(i, j)` sits at index `i + j * n` and position
/// `(i / (n - 1), j / (n - 1))`, so the corners land exactly on 0 and 1.
/// Every cell emits two counter-clockwise triangles.
pub fn terrain_grid(resolution: u32) -> Result<Mesh<2>, MeshError> {
    if resolution < 2 {
        return Err(MeshError::ResolutionTooSmall(resolution));
    }
    let index_count =
        grid_index_count(resolution).ok_or(MeshError::ResolutionTooLarge(resolution))?;
    let n = resolution;
    let last = (n - 1) as f32;

    let mut vertices = Vec::with_capacity(n as usize * n as usize);
    for j in 0..n {
        for i in 0..n {
            vertices.push([i as f32 / last, j as f32 / last]);
        }
    }

    let mut indices = Vec::with_capacity(index_count as usize);
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let a = i + j * n;
            let b = (i + 1) + j * n;
            let c = i + (j + 1) * n;
            let d = (i + 1) + (j + 1) * n;
            indices.extend_from_slice(&[a, b, c, c, b, d]);
        }
    }

    Ok(Mesh { vertices, indices })
}

/// The single water quad.
pub fn water_quad() -> Mesh<3> {
    Mesh {
        vertices: WATER_CORNERS.to_vec(),
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

/// Cube spanning [-1, 1] on every axis, sampled from the inside.
pub fn skybox_cube() -> Mesh<3> {
    #[rustfmt::skip]
    let vertices = vec![
        [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],
        [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0],
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1, 0, 3, 2, // -Z
        4, 5, 6, 4, 6, 7, // +Z
        0, 4, 7, 0, 7, 3, // -X
        1, 2, 6, 1, 6, 5, // +X
        0, 1, 5, 0, 5, 4, // -Y
        3, 7, 6, 3, 6, 2, // +Y
    ];
    Mesh { vertices, indices }
}

/// The three meshes the scene draws.
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    pub terrain: Mesh<2>,
    pub water: Mesh<3>,
    pub skybox: Mesh<3>,
}

impl SceneMeshes {
    pub fn build(grid_resolution: u32) -> Result<Self, MeshError> {
        let meshes = Self {
            terrain: terrain_grid(grid_resolution)?,
            water: water_quad(),
            skybox: skybox_cube(),
        };
        tracing::debug!(
            grid_resolution,
            terrain_indices = meshes.terrain.index_count(),
            "scene meshes built"
        );
        Ok(meshes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
        0.5 * ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]))
    }

    #[test]
    fn grid_counts() {
        for n in [2u32, 3, 10, 100] {
            let mesh = terrain_grid(n).unwrap();
            assert_eq!(mesh.vertex_count(), n * n);
            assert_eq!(mesh.index_count(), 6 * (n - 1) * (n - 1));
            assert_eq!(Some(mesh.index_count()), grid_index_count(n));
        }
    }

    #[test]
    fn grid_indices_reference_valid_vertices() {
        let n = 17;
        let mesh = terrain_grid(n).unwrap();
        assert!(mesh.indices().iter().all(|&i| i < n * n));
    }

    #[test]
    fn grid_spans_unit_square_inclusive() {
        let n = TERRAIN_GRID_RESOLUTION;
        let mesh = terrain_grid(n).unwrap();
        let v = mesh.vertices();
        assert_eq!(v[0], [0.0, 0.0]);
        assert_eq!(v[(n - 1) as usize], [1.0, 0.0]);
        assert_eq!(v[((n - 1) * n) as usize], [0.0, 1.0]);
        assert_eq!(v[(n * n - 1) as usize], [1.0, 1.0]);
        assert!(v.iter().flatten().all(|&c| (0.0..=1.0).contains(&c)));
    }

    #[test]
    fn grid_winding_is_consistent() {
        let mesh = terrain_grid(8).unwrap();
        let v = mesh.vertices();
        for [a, b, c] in mesh.triangles() {
            let area = signed_area(v[a as usize], v[b as usize], v[c as usize]);
            assert!(area > 0.0, "triangle {a},{b},{c} is not counter-clockwise");
        }
    }

    #[test]
    fn grid_rejects_degenerate_resolution() {
        assert_eq!(terrain_grid(1), Err(MeshError::ResolutionTooSmall(1)));
        assert_eq!(terrain_grid(0), Err(MeshError::ResolutionTooSmall(0)));
    }

    #[test]
    fn grid_index_count_stops_at_u32() {
        let max = grid_index_count(MAX_GRID_RESOLUTION).unwrap();
        assert_eq!(max, 6 * (MAX_GRID_RESOLUTION - 1) * (MAX_GRID_RESOLUTION - 1));
        assert_eq!(grid_index_count(MAX_GRID_RESOLUTION + 1), None);
        assert_eq!(grid_index_count(30_000), None);
        assert_eq!(grid_index_count(u32::MAX), None);
    }

    #[test]
    fn grid_rejects_oversized_resolution() {
        assert_eq!(
            terrain_grid(30_000),
            Err(MeshError::ResolutionTooLarge(30_000))
        );
        assert_eq!(
            SceneMeshes::build(MAX_GRID_RESOLUTION + 1).unwrap_err(),
            MeshError::ResolutionTooLarge(MAX_GRID_RESOLUTION + 1)
        );
    }

    #[test]
    fn water_quad_is_two_triangles_covering_the_quad() {
        let mesh = water_quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);

        let v = mesh.vertices();
        let total: f32 = mesh
            .triangles()
            .map(|[a, b, c]| {
                let p = |i: u32| [v[i as usize][0], v[i as usize][1]];
                signed_area(p(a), p(b), p(c))
            })
            .sum();
        let quad_area = (0.55 - -0.45) * (0.55 - -0.6);
        assert!((total - quad_area).abs() < 1e-5);

        let mut used: Vec<u32> = mesh.indices().to_vec();
        used.sort();
        used.dedup();
        assert_eq!(used, vec![0, 1, 2, 3]);
    }

    #[test]
    fn skybox_cube_is_closed_and_valid() {
        let mesh = skybox_cube();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.index_count(), 36);
        assert!(mesh.indices().iter().all(|&i| i < 8));
        assert!(mesh.vertices().iter().flatten().all(|c| c.abs() == 1.0));
        for [a, b, c] in mesh.triangles() {
            assert!(a != b && b != c && a != c);
        }
    }

    #[test]
    fn scene_meshes_follow_resolution() {
        let meshes = SceneMeshes::build(12).unwrap();
        assert_eq!(meshes.terrain.vertex_count(), 144);
        assert_eq!(meshes.water.index_count(), 6);
        assert_eq!(meshes.skybox.index_count(), 36);
    }
}
