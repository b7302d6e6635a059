use std::collections::HashMap;

use mesh_types::{Vertex, VertexKey};
use tracing::{debug, instrument};

/// Unique vertex positions in first-seen order, with a lookup from
/// position to index.
///
/// Identity is numeric equality of the parsed components (see
/// [`VertexKey`]). The same table answers both the dedup pass and the
/// rebuild pass, so the two can never disagree on what "equal" means.
#[derive(Debug, Clone, Default)]
pub struct VertexTable {
    vertices: Vec<Vertex>,
    index: HashMap<VertexKey, u32>,
}

impl VertexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex if its position is new.
    ///
    /// Returns the vertex's index and whether it was newly added.
    pub fn insert(&mut self, vertex: &Vertex) -> (u32, bool) {
        let key = vertex.key();
        if let Some(&existing) = self.index.get(&key) {
            return (existing, false);
        }
        // Face indices are narrowed to a byte at emission, far below u32.
        let next = self.vertices.len() as u32;
        self.vertices.push(vertex.clone());
        self.index.insert(key, next);
        (next, true)
    }

    /// Index of the first vertex equal to `vertex`.
    pub fn index_of(&self, vertex: &Vertex) -> Option<u32> {
        self.index.get(&vertex.key()).copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

/// Build the unique-vertex table from vertex occurrences in file order.
#[instrument(skip_all)]
pub fn dedup_vertices<'a, I>(occurrences: I) -> VertexTable
where
    I: IntoIterator<Item = &'a Vertex>,
{
    let mut table = VertexTable::new();
    for vertex in occurrences {
        let (index, added) = table.insert(vertex);
        if added {
            let [x, y, z] = &vertex.tokens;
            debug!(index, "unique vertex {}, {}, {}", x, y, z);
        }
    }
    table
}
