//! ASCII STL to fixed-point header conversion.
//!
//! The pipeline scans the input once into ordered record lists, then walks
//! them in three passes:
//!
//! - [`dedup`] assigns each distinct vertex position a stable index in
//!   first-seen order,
//! - [`rebuild`] maps every vertex record to its index and groups the
//!   indices into triangles of three, in file order,
//! - [`normals`] optionally collects facet normals, one per triangle by
//!   position.
//!
//! The resulting [`Mesh`](mesh_types::Mesh) is rendered by `header-format`.

pub mod config;
pub mod convert;
pub mod dedup;
pub mod errors;
pub mod normals;
pub mod rebuild;
pub mod scan;

pub use config::ConvertConfig;
pub use convert::{build_mesh, convert_reader, convert_records, convert_str, Conversion};
pub use dedup::{dedup_vertices, VertexTable};
pub use errors::ConvertError;
pub use normals::collect_normals;
pub use rebuild::{check_occurrence_count, rebuild_triangles};
pub use scan::{
    classify_line, scan_reader, scan_str, NormalRecord, RecordKind, StlRecords, VertexRecord,
};
