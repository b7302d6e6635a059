use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use header_format::{LiteralStyle, TableTarget};
use mesh_pipeline::ConvertConfig;

use crate::errors::CliError;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "stl2h",
    version,
    about = "Convert a 3D mesh saved as ASCII STL to a header for a tiny 3D engine",
    after_help = "EXAMPLES:\n  \
                  stl2h -i cube.stl -o mesh.h\n  \
                  stl2h -i ship.stl -o mesh.h --scale 0.5 --normals\n  \
                  stl2h -i ship.stl -o mesh.h --target portable -y"
)]
pub struct Args {
    /// 3D mesh in ASCII STL file format
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file name of the converted data
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Scale ratio applied to vertex coordinates
    #[arg(short, long, default_value_t = 1.0)]
    pub scale: f64,

    /// Save face normals
    #[arg(short, long)]
    pub normals: bool,

    /// Answer yes to all requests
    #[arg(short, long)]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Storage convention of the generated tables
    #[arg(long, value_enum, default_value_t = Target::Avr)]
    pub target: Target,

    /// Write every literal with a decimal point (14.0*PRES), so the product
    /// is evaluated in floating point even where int is 16 bits
    #[arg(long)]
    pub float_literals: bool,
}

/// Command-line spelling of [`TableTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// PROGMEM tables read through pgm_read_* (AVR)
    Avr,
    /// Plain static const tables
    Portable,
}

impl From<Target> for TableTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Avr => TableTarget::Avr,
            Target::Portable => TableTarget::Portable,
        }
    }
}

impl Args {
    /// Reject argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(CliError::Config(
                "you need to specify both input and output files".to_string(),
            ));
        }
        if same_file(&self.input, &self.output) {
            return Err(CliError::Config(
                "input and output files are the same".to_string(),
            ));
        }
        if !self.scale.is_finite() {
            return Err(CliError::Config(format!(
                "scale must be a finite number, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    pub fn convert_config(&self, command_line: String) -> ConvertConfig {
        ConvertConfig {
            scale: self.scale,
            normals: self.normals,
            target: self.target.into(),
            literals: if self.float_literals {
                LiteralStyle::Float
            } else {
                LiteralStyle::Plain
            },
            command_line,
        }
    }
}

/// Paths name the same file when spelled identically, or when both exist
/// and canonicalize to the same location.
pub(crate) fn same_file(a: &std::path::Path, b: &std::path::Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
