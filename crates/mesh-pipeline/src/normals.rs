use mesh_types::Normal;
use tracing::{debug, instrument};

use crate::errors::ConvertError;
use crate::scan::{parse_components, NormalRecord};

/// Parse facet normals in file order, one per record.
///
/// No count check happens here; the emitter rejects a table whose length
/// differs from the triangle count.
#[instrument(skip_all, fields(records = records.len()))]
pub fn collect_normals(records: &[NormalRecord]) -> Result<Vec<Normal>, ConvertError> {
    records
        .iter()
        .map(|record| {
            let direction = parse_components(
                [
                    record.tokens[0].as_str(),
                    record.tokens[1].as_str(),
                    record.tokens[2].as_str(),
                ],
                record.line,
            )?;
            debug!(line = record.line, "normal {}, {}, {}", record.tokens[0], record.tokens[1], record.tokens[2]);
            Ok(Normal::new(direction, record.tokens.clone()))
        })
        .collect()
}
