use std::io::BufRead;

use header_format::emit_header;
use mesh_types::{Mesh, MeshStats};
use tracing::{debug, info, instrument};

use crate::config::ConvertConfig;
use crate::dedup::dedup_vertices;
use crate::errors::ConvertError;
use crate::normals::collect_normals;
use crate::rebuild::{check_occurrence_count, rebuild_triangles};
use crate::scan::{scan_reader, scan_str, StlRecords};

/// The outcome of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub mesh: Mesh,
    /// Generated header text, ready to be written out.
    pub header: String,
}

impl Conversion {
    pub fn stats(&self) -> MeshStats {
        self.mesh.stats()
    }
}

/// Run the dedup, rebuild and (optionally) normal passes over scanned records.
#[instrument(skip_all, fields(normals = collect))]
pub fn build_mesh(records: &StlRecords, collect: bool) -> Result<Mesh, ConvertError> {
    let occurrences = records.vertices.len();
    info!(occurrences, "gathered vertices");

    let check = check_occurrence_count(occurrences);
    info!(
        "STL file check: {}",
        if check.is_ok() { "good" } else { "bad" }
    );
    check?;

    info!("keeping unique vertices");
    let table = dedup_vertices(records.vertices.iter().map(|r| &r.vertex));

    info!("gathering triangles");
    let triangles = rebuild_triangles(&records.vertices, &table)?;

    let mut mesh = Mesh::new(table.into_vertices(), triangles);
    if collect {
        info!("gathering normals");
        mesh = mesh.with_normals(collect_normals(&records.normals)?);
    }

    let stats = mesh.stats();
    info!("vertices: {}", stats.unique_vertices);
    info!("triangles: {}", stats.triangles);
    if let Some(normals) = stats.normals {
        info!("normals: {}", normals);
    }
    Ok(mesh)
}

/// Convert scanned records into a mesh and its header.
pub fn convert_records(
    records: &StlRecords,
    config: &ConvertConfig,
) -> Result<Conversion, ConvertError> {
    if config.normals {
        info!("saving facet normals information");
    }
    let mesh = build_mesh(records, config.normals)?;
    let header = emit_header(&mesh, &config.emit_config())?;
    debug!("generated header:\n{}", header);
    Ok(Conversion { mesh, header })
}

/// Convert ASCII STL text held in memory.
pub fn convert_str(text: &str, config: &ConvertConfig) -> Result<Conversion, ConvertError> {
    let records = scan_str(text)?;
    convert_records(&records, config)
}

/// Convert ASCII STL read from `reader`. The input is consumed entirely
/// before any pass runs.
pub fn convert_reader<R: BufRead>(
    reader: R,
    config: &ConvertConfig,
) -> Result<Conversion, ConvertError> {
    info!("gathering vertices");
    let records = scan_reader(reader)?;
    convert_records(&records, config)
}
