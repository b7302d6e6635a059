use header_format::EmitError;

/// Errors that abort a conversion before any output is produced.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidCoordinate { line: usize, token: String },

    #[error("each triangle should be made of 3 vertices: {occurrences} vertex records found (missing {missing} vertex)")]
    IncompleteTriangle { occurrences: usize, missing: usize },

    #[error("input contains no vertex records")]
    NoTriangles,

    #[error("line {line}: vertex is missing from the unique-vertex table")]
    UnindexedVertex { line: usize },

    #[error(transparent)]
    Emit(#[from] EmitError),
}
