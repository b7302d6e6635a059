use serde::{Deserialize, Serialize};

/// Where the generated tables live and how they are read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableTarget {
    /// AVR program memory: `PROGMEM` tables read through `pgm_read_*`.
    #[default]
    Avr,
    /// Ordinary read-only tables with direct-indexing accessors.
    Portable,
}

impl TableTarget {
    pub fn name(&self) -> &'static str {
        match self {
            TableTarget::Avr => "avr",
            TableTarget::Portable => "portable",
        }
    }

    /// Declaration prefix and suffix around `<type> <name>[..][3]`.
    pub fn qualifiers(&self) -> (&'static str, &'static str) {
        match self {
            TableTarget::Avr => ("const", " PROGMEM"),
            TableTarget::Portable => ("static const", ""),
        }
    }

    pub fn node_accessor(&self) -> &'static str {
        match self {
            TableTarget::Avr => "(long)(pgm_read_dword(&nodes[a][b]))",
            TableTarget::Portable => "((long)(nodes[a][b]))",
        }
    }

    pub fn edge_accessor(&self) -> &'static str {
        match self {
            TableTarget::Avr => "pgm_read_byte(&faces[a][b])",
            TableTarget::Portable => "(faces[a][b])",
        }
    }

    pub fn normal_accessor(&self) -> &'static str {
        match self {
            TableTarget::Avr => "(long)(pgm_read_dword(&normals[a][b]))",
            TableTarget::Portable => "((long)(normals[a][b]))",
        }
    }

    /// Full declaration line opening a table initializer.
    pub fn declaration(&self, ty: &str, name: &str, rows: &str) -> String {
        let (prefix, suffix) = self.qualifiers();
        format!("{} {} {}[{}][3]{} = {{", prefix, ty, name, rows, suffix)
    }
}
