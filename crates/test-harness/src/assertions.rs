//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual and a caller-supplied context
//! string.

use mesh_types::Mesh;

use crate::header::HeaderTables;
use crate::helpers::HarnessError;

/// Assert exact unique-vertex and triangle counts.
pub fn assert_counts(
    mesh: &Mesh,
    expected_vertices: usize,
    expected_triangles: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let v = mesh.vertex_count();
    let t = mesh.triangle_count();
    if v == expected_vertices && t == expected_triangles {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} vertices / {} triangles, got {} / {}",
                ctx, expected_vertices, expected_triangles, v, t,
            ),
        })
    }
}

/// Assert the mesh bounding box matches expected values within tolerance.
pub fn assert_bounding_box(
    mesh: &Mesh,
    expected_min: [f64; 3],
    expected_max: [f64; 3],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let (actual_min, actual_max) = crate::helpers::mesh_bounding_box(mesh);

    for i in 0..3 {
        if (actual_min[i] - expected_min[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box min[{}]: expected {:.5}, got {:.5} (tol={})",
                    ctx, i, expected_min[i], actual_min[i], tol,
                ),
            });
        }
        if (actual_max[i] - expected_max[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box max[{}]: expected {:.5}, got {:.5} (tol={})",
                    ctx, i, expected_max[i], actual_max[i], tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert that every emitted node literal equals `round(coord, 5) * scale`
/// for the matching mesh vertex.
pub fn assert_scaled_nodes(
    tables: &HeaderTables,
    mesh: &Mesh,
    scale: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if tables.nodes.len() != mesh.vertex_count() {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] {} node rows for {} vertices",
                ctx,
                tables.nodes.len(),
                mesh.vertex_count()
            ),
        });
    }
    for (row, (emitted, vertex)) in tables.nodes.iter().zip(&mesh.vertices).enumerate() {
        for k in 0..3 {
            let expected = (vertex.position[k] * 1e5).round() / 1e5 * scale;
            if (emitted[k] - expected).abs() > tol {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{}] node {} component {}: expected {}, got {} (tol={})",
                        ctx, row, k, expected, emitted[k], tol,
                    ),
                });
            }
        }
    }
    Ok(())
}
