/// Errors detected while validating a mesh for emission.
///
/// All checks run before any text is produced, so a failed emit never
/// yields a partial header.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmitError {
    #[error("scale factor must be finite, got {0}")]
    InvalidScale(f64),

    #[error("collected {normals} facet normals for {triangles} triangles")]
    NormalCountMismatch { normals: usize, triangles: usize },

    #[error("{count} unique vertices exceed the {max} addressable by an unsigned char face table")]
    TooManyVertices { count: usize, max: usize },

    #[error("triangle {triangle} references vertex {index} (vertex count = {vertex_count})")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("{table} row {row} component {component} is not finite after rounding and scaling")]
    NonFiniteLiteral {
        table: &'static str,
        row: usize,
        component: usize,
    },
}
