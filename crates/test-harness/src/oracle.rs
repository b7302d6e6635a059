//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets tests collect all failures in one pass.

use std::collections::{HashMap, HashSet};

use mesh_types::Mesh;

use crate::header::HeaderTables;
use crate::helpers::{HarnessError, StlFixture};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    /// Convert a failed verdict into an error.
    pub fn into_result(self) -> Result<(), HarnessError> {
        if self.passed {
            Ok(())
        } else {
            Err(HarnessError::OracleFailure {
                oracle: self.oracle_name,
                detail: self.detail,
            })
        }
    }
}

/// Run every mesh-level oracle.
pub fn check_all(mesh: &Mesh, occurrences: usize) -> Vec<OracleVerdict> {
    vec![
        check_index_validity(mesh),
        check_occurrence_partition(mesh, occurrences),
        check_unique_vertices(mesh),
        check_normal_correspondence(mesh),
    ]
}

// ── Mesh Oracles ────────────────────────────────────────────────────────────

/// Check that every triangle index addresses the unique-vertex table.
pub fn check_index_validity(mesh: &Mesh) -> OracleVerdict {
    let n = mesh.vertex_count();
    let bad: Vec<(usize, u32)> = mesh
        .triangles
        .iter()
        .enumerate()
        .flat_map(|(t, tri)| tri.indices.iter().map(move |&i| (t, i)))
        .filter(|&(_, i)| i as usize >= n)
        .collect();

    if bad.is_empty() {
        OracleVerdict::pass(
            "index_validity",
            format!("all {} triangles index within [0, {})", mesh.triangle_count(), n),
        )
    } else {
        OracleVerdict::fail(
            "index_validity",
            format!(
                "{} out-of-range indices (vertex count = {}): {:?}",
                bad.len(),
                n,
                &bad[..bad.len().min(5)]
            ),
        )
    }
}

/// Check that `occurrences` vertex records became exactly `occurrences / 3`
/// triangles.
pub fn check_occurrence_partition(mesh: &Mesh, occurrences: usize) -> OracleVerdict {
    let indexed = mesh.triangle_count() * 3;
    if indexed == occurrences {
        OracleVerdict::pass_val(
            "occurrence_partition",
            format!("{} occurrences -> {} triangles", occurrences, mesh.triangle_count()),
            mesh.triangle_count() as f64,
        )
    } else {
        OracleVerdict::fail(
            "occurrence_partition",
            format!(
                "{} occurrences but {} indices in {} triangles",
                occurrences,
                indexed,
                mesh.triangle_count()
            ),
        )
    }
}

/// Check that no two table entries are numerically equal.
pub fn check_unique_vertices(mesh: &Mesh) -> OracleVerdict {
    let mut seen = HashMap::new();
    for (i, v) in mesh.vertices.iter().enumerate() {
        if let Some(first) = seen.insert(v.key(), i) {
            return OracleVerdict::fail(
                "unique_vertices",
                format!("vertex {} repeats vertex {} at {:?}", i, first, v.position),
            );
        }
    }
    OracleVerdict::pass_val(
        "unique_vertices",
        format!("{} distinct vertices", mesh.vertex_count()),
        mesh.vertex_count() as f64,
    )
}

/// Check that collected normals pair one-to-one with triangles.
pub fn check_normal_correspondence(mesh: &Mesh) -> OracleVerdict {
    match &mesh.normals {
        None => OracleVerdict::pass("normal_correspondence", "normals not collected".to_string()),
        Some(normals) if normals.len() == mesh.triangle_count() => OracleVerdict::pass(
            "normal_correspondence",
            format!("{} normals for {} triangles", normals.len(), mesh.triangle_count()),
        ),
        Some(normals) => OracleVerdict::fail(
            "normal_correspondence",
            format!("{} normals for {} triangles", normals.len(), mesh.triangle_count()),
        ),
    }
}

/// Check that the mesh reproduces the fixture it was converted from: same
/// distinct positions in first-seen order, same triangle corners in order.
pub fn check_matches_fixture(mesh: &Mesh, fixture: &StlFixture) -> OracleVerdict {
    let soup = fixture.soup();
    let mut expected: Vec<[f64; 3]> = Vec::new();
    for p in &soup {
        if !expected.contains(p) {
            expected.push(*p);
        }
    }
    let actual: Vec<[f64; 3]> = mesh.vertices.iter().map(|v| v.position).collect();
    if actual != expected {
        return OracleVerdict::fail(
            "matches_fixture",
            format!(
                "unique vertices differ: expected {}, got {}",
                expected.len(),
                actual.len()
            ),
        );
    }

    for (t, tri) in mesh.triangles.iter().enumerate() {
        for k in 0..3 {
            let got = actual[tri.indices[k] as usize];
            let want = soup[t * 3 + k];
            if got != want {
                return OracleVerdict::fail(
                    "matches_fixture",
                    format!("triangle {} corner {}: expected {:?}, got {:?}", t, k, want, got),
                );
            }
        }
    }

    OracleVerdict::pass(
        "matches_fixture",
        format!("{} vertices, {} triangles match", actual.len(), mesh.triangle_count()),
    )
}

/// Check that every index edge is used by exactly two triangles.
///
/// Only meaningful after deduplication: a closed soup becomes closed in
/// index space once shared corners collapse.
pub fn check_watertight_mesh(mesh: &Mesh) -> OracleVerdict {
    let counts = edge_use_counts(mesh);
    let non_paired: Vec<_> = counts.iter().filter(|(_, &c)| c != 2).collect();

    if non_paired.is_empty() {
        OracleVerdict::pass(
            "watertight_mesh",
            format!("all {} edges paired", counts.len()),
        )
    } else {
        OracleVerdict::fail(
            "watertight_mesh",
            format!(
                "{} unpaired edges out of {} total",
                non_paired.len(),
                counts.len()
            ),
        )
    }
}

pub(crate) fn edge_use_counts(mesh: &Mesh) -> HashMap<(u32, u32), usize> {
    let mut counts = HashMap::new();
    for tri in &mesh.triangles {
        let [a, b, c] = tri.indices;
        for (u, v) in [(a, b), (b, c), (c, a)] {
            let edge = if u <= v { (u, v) } else { (v, u) };
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}

// ── Header Oracles ──────────────────────────────────────────────────────────

/// Check that header counts and row counts agree with the mesh.
pub fn check_header_counts(tables: &HeaderTables, mesh: &Mesh) -> OracleVerdict {
    let mut problems = Vec::new();
    if tables.node_count != mesh.vertex_count() || tables.nodes.len() != mesh.vertex_count() {
        problems.push(format!(
            "NODECOUNT={} rows={} expected {}",
            tables.node_count,
            tables.nodes.len(),
            mesh.vertex_count()
        ));
    }
    if tables.tri_count != mesh.triangle_count() || tables.faces.len() != mesh.triangle_count() {
        problems.push(format!(
            "TRICOUNT={} rows={} expected {}",
            tables.tri_count,
            tables.faces.len(),
            mesh.triangle_count()
        ));
    }
    let header_normals = tables.normals.as_ref().map(Vec::len);
    let mesh_normals = mesh.normals.as_ref().map(Vec::len);
    if header_normals != mesh_normals {
        problems.push(format!(
            "normals rows {:?} expected {:?}",
            header_normals, mesh_normals
        ));
    }

    if problems.is_empty() {
        OracleVerdict::pass(
            "header_counts",
            format!(
                "{} nodes, {} faces",
                tables.nodes.len(),
                tables.faces.len()
            ),
        )
    } else {
        OracleVerdict::fail("header_counts", problems.join("; "))
    }
}

/// Check that emitted face rows equal the mesh's triangles.
pub fn check_header_faces(tables: &HeaderTables, mesh: &Mesh) -> OracleVerdict {
    let expected: Vec<[u32; 3]> = mesh.triangles.iter().map(|t| t.indices).collect();
    if tables.faces == expected {
        OracleVerdict::pass("header_faces", format!("{} rows match", expected.len()))
    } else {
        let first = tables
            .faces
            .iter()
            .zip(&expected)
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| tables.faces.len().min(expected.len()));
        OracleVerdict::fail(
            "header_faces",
            format!("first differing face row: {}", first),
        )
    }
}

/// Check that every face row references distinct node rows, i.e. the
/// header is free of degenerate triangles after rounding.
pub fn check_header_distinct_corners(tables: &HeaderTables) -> OracleVerdict {
    let degenerate = tables
        .faces
        .iter()
        .filter(|f| f.iter().collect::<HashSet<_>>().len() < 3)
        .count();
    if degenerate == 0 {
        OracleVerdict::pass(
            "distinct_corners",
            format!("all {} faces have 3 distinct corners", tables.faces.len()),
        )
    } else {
        OracleVerdict::fail(
            "distinct_corners",
            format!("{} of {} faces repeat a corner", degenerate, tables.faces.len()),
        )
    }
}
