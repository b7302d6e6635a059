//! ASCII STL export of fixtures.

use crate::helpers::{HarnessError, StlFixture};

/// Export a fixture as an ASCII STL string.
///
/// Every facet repeats its three vertices in full, as real exporters do,
/// so the converter has to rediscover shared vertices.
pub fn export_ascii_stl(fixture: &StlFixture, name: &str) -> Result<String, HarnessError> {
    let tri_count = fixture.triangles.len();
    if tri_count == 0 {
        return Err(HarnessError::StlError {
            reason: "fixture has no triangles".to_string(),
        });
    }

    let vertex_count = fixture.positions.len();
    for tri in &fixture.triangles {
        for &idx in tri {
            if idx >= vertex_count {
                return Err(HarnessError::StlError {
                    reason: format!(
                        "index {} out of range (vertex count = {})",
                        idx, vertex_count
                    ),
                });
            }
        }
    }

    if let Some(normals) = &fixture.normals {
        if normals.len() != tri_count {
            return Err(HarnessError::StlError {
                reason: format!(
                    "{} declared normals for {} triangles",
                    normals.len(),
                    tri_count
                ),
            });
        }
    }

    let mut out = String::with_capacity(tri_count * 300);
    out.push_str(&format!("solid {}\n", name));

    for (t, tri) in fixture.triangles.iter().enumerate() {
        let [nx, ny, nz] = fixture.facet_normal(t);
        out.push_str(&format!("  facet normal {} {} {}\n", nx, ny, nz));
        out.push_str("    outer loop\n");
        for &idx in tri {
            let [x, y, z] = fixture.positions[idx];
            out.push_str(&format!("      vertex {} {} {}\n", x, y, z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {}\n", name));
    Ok(out)
}
