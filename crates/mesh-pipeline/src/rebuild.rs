use mesh_types::Triangle;
use tracing::{debug, instrument};

use crate::dedup::VertexTable;
use crate::errors::ConvertError;
use crate::scan::VertexRecord;

/// Verify that `occurrences` vertex records form whole triangles.
pub fn check_occurrence_count(occurrences: usize) -> Result<(), ConvertError> {
    if occurrences == 0 {
        return Err(ConvertError::NoTriangles);
    }
    match occurrences % 3 {
        0 => Ok(()),
        rem => Err(ConvertError::IncompleteTriangle {
            occurrences,
            missing: 3 - rem,
        }),
    }
}

/// Partition vertex records into consecutive runs of three and map each
/// record to its unique index.
///
/// Triangle boundaries come from counting alone; `endloop`/`endfacet`
/// lines play no part. The Mth triangle is the Mth run of three records.
#[instrument(skip_all, fields(records = records.len(), unique = table.len()))]
pub fn rebuild_triangles(
    records: &[VertexRecord],
    table: &VertexTable,
) -> Result<Vec<Triangle>, ConvertError> {
    check_occurrence_count(records.len())?;

    let mut triangles = Vec::with_capacity(records.len() / 3);
    for run in records.chunks_exact(3) {
        let mut indices = [0u32; 3];
        for (slot, record) in indices.iter_mut().zip(run) {
            *slot = table
                .index_of(&record.vertex)
                .ok_or(ConvertError::UnindexedVertex { line: record.line })?;
        }
        debug!("triangle {}, {}, {}", indices[0], indices[1], indices[2]);
        triangles.push(Triangle::from(indices));
    }
    Ok(triangles)
}
