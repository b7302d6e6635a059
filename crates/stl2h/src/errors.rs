use std::path::PathBuf;

use mesh_pipeline::ConvertError;

/// Failures of a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit status: 2 for configuration and validation failures,
    /// 1 for I/O failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 2,
            CliError::Convert(ConvertError::Io(_)) => 1,
            CliError::Convert(_) => 2,
            CliError::Io { .. } => 1,
        }
    }
}
