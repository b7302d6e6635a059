//! Fixed-point C header generation for deduplicated meshes.
//!
//! The generated header declares three constant tables (`nodes`, `faces`
//! and optionally `normals`) plus accessor macros. Coordinates are written
//! as `(long)(<literal>*PRES)` so the consuming firmware chooses the
//! fixed-point resolution at compile time.

pub mod emit;
pub mod errors;
pub mod fixed;
pub mod target;

pub use emit::{emit_header, EmitConfig, GUARD, MAX_VERTICES, TOOL_NAME};
pub use errors::EmitError;
pub use fixed::LiteralStyle;
pub use target::TableTarget;
