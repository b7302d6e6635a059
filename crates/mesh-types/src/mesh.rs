use serde::{Deserialize, Serialize};

use crate::vertex::{Normal, Vertex};

/// Three indices into a mesh's unique-vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [u32; 3],
}

impl Triangle {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { indices: [a, b, c] }
    }

    /// Largest index referenced by this triangle.
    pub fn max_index(&self) -> u32 {
        self.indices.iter().copied().max().unwrap_or(0)
    }
}

impl From<[u32; 3]> for Triangle {
    fn from(indices: [u32; 3]) -> Self {
        Self { indices }
    }
}

/// A deduplicated triangle mesh.
///
/// `vertices` holds each distinct position once, in first-seen order.
/// `triangles` holds one entry per source facet, in file order.
/// `normals` is `Some` only when facet normals were collected; the Nth
/// normal belongs to the Nth triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
    pub normals: Option<Vec<Normal>>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    pub fn with_normals(mut self, normals: Vec<Normal>) -> Self {
        self.normals = Some(normals);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Normals in triangle order, or an empty slice when none were collected.
    pub fn normals(&self) -> &[Normal] {
        self.normals.as_deref().unwrap_or(&[])
    }

    /// Summary counts for logging.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            occurrences: self.triangles.len() * 3,
            unique_vertices: self.vertices.len(),
            triangles: self.triangles.len(),
            normals: self.normals.as_ref().map(Vec::len),
        }
    }
}

/// Counts describing a converted mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Vertex records in the source (three per triangle).
    pub occurrences: usize,
    pub unique_vertices: usize,
    pub triangles: usize,
    /// Collected facet normals, if normals were requested.
    pub normals: Option<usize>,
}
