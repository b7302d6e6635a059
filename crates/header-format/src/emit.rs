use mesh_types::Mesh;
use tracing::{debug, instrument};

use crate::errors::EmitError;
use crate::fixed::{pres_row, round_places, scaled, LiteralStyle};
use crate::target::TableTarget;

/// Name written in the first comment line of every header.
pub const TOOL_NAME: &str = "stl2h";

/// Include guard wrapped around the tables.
pub const GUARD: &str = "MESH_H";

/// Face indices are stored as `unsigned char`.
pub const MAX_VERTICES: usize = u8::MAX as usize + 1;

/// Parameters controlling header generation.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Multiplier applied to rounded vertex coordinates (never to normals).
    pub scale: f64,
    /// Storage convention of the generated tables.
    pub target: TableTarget,
    /// Spelling of the numeric literals.
    pub literals: LiteralStyle,
    /// Invocation recorded in the second comment line.
    pub command_line: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            target: TableTarget::Avr,
            literals: LiteralStyle::Plain,
            command_line: String::new(),
        }
    }
}

/// Render a mesh as an include-guarded C header.
///
/// The normals table is written only when `mesh.normals` is `Some`, and
/// then must hold exactly one normal per triangle.
#[instrument(skip_all, fields(vertices = mesh.vertex_count(), triangles = mesh.triangle_count()))]
pub fn emit_header(mesh: &Mesh, config: &EmitConfig) -> Result<String, EmitError> {
    validate(mesh, config)?;

    let target = config.target;
    let mut out = String::with_capacity(256 + mesh.vertex_count() * 64 + mesh.triangle_count() * 80);

    out.push_str(&format!("// exported with {}\n", TOOL_NAME));
    out.push_str(&format!("// {}\n", config.command_line.replace(['\r', '\n'], " ")));
    out.push_str(&format!("#ifndef {}\n", GUARD));
    out.push_str(&format!("#define {}\n", GUARD));
    out.push('\n');
    out.push_str(&format!("#define NODECOUNT {}\n", mesh.vertex_count()));
    out.push_str(&format!("#define TRICOUNT {}\n", mesh.triangle_count()));
    out.push('\n');
    out.push_str(&format!("#define NODE(a, b) {}\n", target.node_accessor()));
    out.push_str(&format!("#define EDGE(a, b) {}\n", target.edge_accessor()));
    out.push_str(&format!("#define NORMAL(a, b) {}\n", target.normal_accessor()));
    out.push('\n');

    out.push_str(&target.declaration("long", "nodes", "NODECOUNT"));
    out.push('\n');
    for vertex in &mesh.vertices {
        let row = vertex.position.map(|c| scaled(c, config.scale));
        out.push_str(&format!("  {},\n", pres_row(row, config.literals)));
    }
    out.push_str("};\n\n");

    out.push_str(&target.declaration("unsigned char", "faces", "TRICOUNT"));
    out.push('\n');
    for tri in &mesh.triangles {
        let [a, b, c] = tri.indices;
        out.push_str(&format!("  {{{}, {}, {}}},\n", a, b, c));
    }
    out.push_str("};\n\n");

    if let Some(normals) = &mesh.normals {
        out.push_str(&target.declaration("long", "normals", "TRICOUNT"));
        out.push('\n');
        for normal in normals {
            let row = normal.direction.map(round_places);
            out.push_str(&format!("  {},\n", pres_row(row, config.literals)));
        }
        out.push_str("};\n\n");
    }

    out.push_str(&format!("#endif // {}\n", GUARD));

    debug!(bytes = out.len(), table_target = target.name(), "header generated");
    Ok(out)
}

fn validate(mesh: &Mesh, config: &EmitConfig) -> Result<(), EmitError> {
    if !config.scale.is_finite() {
        return Err(EmitError::InvalidScale(config.scale));
    }

    if let Some(normals) = &mesh.normals {
        if normals.len() != mesh.triangle_count() {
            return Err(EmitError::NormalCountMismatch {
                normals: normals.len(),
                triangles: mesh.triangle_count(),
            });
        }
    }

    if mesh.vertex_count() > MAX_VERTICES {
        return Err(EmitError::TooManyVertices {
            count: mesh.vertex_count(),
            max: MAX_VERTICES,
        });
    }

    let vertex_count = mesh.vertex_count();
    for (triangle, tri) in mesh.triangles.iter().enumerate() {
        if let Some(&index) = tri.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(EmitError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
    }

    for (row, vertex) in mesh.vertices.iter().enumerate() {
        let values = vertex.position.map(|c| scaled(c, config.scale));
        check_finite("nodes", row, values)?;
    }
    for (row, normal) in mesh.normals().iter().enumerate() {
        check_finite("normals", row, normal.direction.map(round_places))?;
    }

    Ok(())
}

fn check_finite(table: &'static str, row: usize, values: [f64; 3]) -> Result<(), EmitError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(component) => Err(EmitError::NonFiniteLiteral {
            table,
            row,
            component,
        }),
        None => Ok(()),
    }
}
