use header_format::{EmitConfig, LiteralStyle, TableTarget};

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Multiplier for vertex coordinates after rounding. Normals are never scaled.
    pub scale: f64,
    /// Collect facet normals and emit the `normals` table.
    pub normals: bool,
    /// Storage convention of the generated tables.
    pub target: TableTarget,
    /// Spelling of the numeric literals.
    pub literals: LiteralStyle,
    /// Invocation recorded in the header comment.
    pub command_line: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            normals: false,
            target: TableTarget::Avr,
            literals: LiteralStyle::Plain,
            command_line: String::new(),
        }
    }
}

impl ConvertConfig {
    /// Default options with facet normals collected.
    pub fn with_normals() -> Self {
        Self {
            normals: true,
            ..Self::default()
        }
    }

    pub fn emit_config(&self) -> EmitConfig {
        EmitConfig {
            scale: self.scale,
            target: self.target,
            literals: self.literals,
            command_line: self.command_line.clone(),
        }
    }
}
