//! Helper functions: error type, fixture constructors, mesh math.

use mesh_types::Mesh;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("STL error: {reason}")]
    StlError { reason: String },

    #[error("header parse error on line {line}: {reason}")]
    HeaderParse { line: usize, reason: String },
}

// ── Fixtures ────────────────────────────────────────────────────────────────

/// An indexed mesh that is written out as ASCII STL triangle soup.
///
/// `normals`, when set, overrides the per-facet normal otherwise computed
/// from the winding of each triangle.
#[derive(Debug, Clone)]
pub struct StlFixture {
    pub positions: Vec<[f64; 3]>,
    pub triangles: Vec<[usize; 3]>,
    pub normals: Option<Vec<[f64; 3]>>,
}

impl StlFixture {
    pub fn new(positions: Vec<[f64; 3]>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            positions,
            triangles,
            normals: None,
        }
    }

    pub fn with_normals(mut self, normals: Vec<[f64; 3]>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Vertex records the STL text will contain.
    pub fn occurrence_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Declared normal for triangle `t`, or the unit winding normal.
    pub fn facet_normal(&self, t: usize) -> [f64; 3] {
        if let Some(n) = self.normals.as_ref().and_then(|n| n.get(t)) {
            return *n;
        }
        let [i0, i1, i2] = self.triangles[t];
        winding_normal(self.positions[i0], self.positions[i1], self.positions[i2])
    }

    /// Positions of the STL vertex records, in file order.
    pub fn soup(&self) -> Vec<[f64; 3]> {
        self.triangles
            .iter()
            .flat_map(|tri| tri.iter().map(|&i| self.positions[i]))
            .collect()
    }
}

/// Triangle (0,0,0) (1,0,0) (0,1,0) facing +Z.
pub fn single_triangle() -> StlFixture {
    StlFixture::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0, 1, 2]],
    )
}

/// Unit square in the XY plane split along its diagonal.
pub fn shared_edge_quad() -> StlFixture {
    StlFixture::new(
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// Axis-aligned cube of edge `size` at the origin: 8 corners, 12 outward triangles.
pub fn cube(size: f64) -> StlFixture {
    let s = size;
    StlFixture::new(
        vec![
            [0.0, 0.0, 0.0],
            [s, 0.0, 0.0],
            [s, s, 0.0],
            [0.0, s, 0.0],
            [0.0, 0.0, s],
            [s, 0.0, s],
            [s, s, s],
            [0.0, s, s],
        ],
        vec![
            [0, 2, 1],
            [0, 3, 2], // bottom
            [4, 5, 6],
            [4, 6, 7], // top
            [0, 1, 5],
            [0, 5, 4], // front
            [2, 3, 7],
            [2, 7, 6], // back
            [0, 4, 7],
            [0, 7, 3], // left
            [1, 2, 6],
            [1, 6, 5], // right
        ],
    )
}

/// Flat `n`×`n` grid of quads: `(n+1)^2` positions, `2n^2` triangles.
pub fn grid(n: usize, spacing: f64) -> StlFixture {
    let stride = n + 1;
    let positions = (0..stride)
        .flat_map(|j| (0..stride).map(move |i| [i as f64 * spacing, j as f64 * spacing, 0.0]))
        .collect();
    let mut triangles = Vec::with_capacity(2 * n * n);
    for j in 0..n {
        for i in 0..n {
            let a = j * stride + i;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
    }
    StlFixture::new(positions, triangles)
}

// ── Mesh Math ───────────────────────────────────────────────────────────────

/// Unit normal of triangle (a, b, c) by counter-clockwise winding, or +Z
/// for a degenerate triangle.
pub fn winding_normal(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> [f64; 3] {
    let (ax, ay, az) = (b[0] - a[0], b[1] - a[1], b[2] - a[2]);
    let (bx, by, bz) = (c[0] - a[0], c[1] - a[1], c[2] - a[2]);
    let nx = ay * bz - az * by;
    let ny = az * bx - ax * bz;
    let nz = ax * by - ay * bx;
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-12 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Axis-aligned bounding box of a mesh's unique vertices.
pub fn mesh_bounding_box(mesh: &Mesh) -> ([f64; 3], [f64; 3]) {
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    for v in &mesh.vertices {
        for k in 0..3 {
            min[k] = min[k].min(v.position[k]);
            max[k] = max[k].max(v.position[k]);
        }
    }
    (min, max)
}

/// Count (total edges, boundary edges) by vertex index.
pub fn count_mesh_edges(mesh: &Mesh) -> (usize, usize) {
    let counts = crate::oracle::edge_use_counts(mesh);
    let boundary = counts.values().filter(|&&c| c == 1).count();
    (counts.len(), boundary)
}
