//! Read a generated header back into numeric tables.
//!
//! Understands exactly the layout `header-format` writes: `#define`
//! counts, then `nodes`, `faces` and optional `normals` initializers with
//! one `{a, b, c},` row per line.

use crate::helpers::HarnessError;

/// Tables recovered from a header. Literals are the values before the
/// `*PRES` multiplication.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderTables {
    pub node_count: usize,
    pub tri_count: usize,
    pub nodes: Vec<[f64; 3]>,
    pub faces: Vec<[u32; 3]>,
    pub normals: Option<Vec<[f64; 3]>>,
}

#[derive(Clone, Copy)]
enum Section {
    Nodes,
    Faces,
    Normals,
}

/// Parse header text produced by `emit_header`.
pub fn parse_header(text: &str) -> Result<HeaderTables, HarnessError> {
    let mut tables = HeaderTables::default();
    let mut section: Option<Section> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix("#define NODECOUNT ") {
            tables.node_count = parse_usize(rest, line_no)?;
            continue;
        }
        if let Some(rest) = line.strip_prefix("#define TRICOUNT ") {
            tables.tri_count = parse_usize(rest, line_no)?;
            continue;
        }

        if line.ends_with("= {") {
            section = if line.contains(" nodes[") {
                Some(Section::Nodes)
            } else if line.contains(" faces[") {
                Some(Section::Faces)
            } else if line.contains(" normals[") {
                tables.normals = Some(Vec::new());
                Some(Section::Normals)
            } else {
                return Err(parse_error(line_no, "unknown table"));
            };
            continue;
        }
        if line == "};" {
            section = None;
            continue;
        }

        let Some(current) = section else { continue };
        let cells = row_cells(line, line_no)?;
        match current {
            Section::Nodes => tables.nodes.push(pres_cells(&cells, line_no)?),
            Section::Normals => {
                let row = pres_cells(&cells, line_no)?;
                if let Some(normals) = tables.normals.as_mut() {
                    normals.push(row);
                }
            }
            Section::Faces => {
                let mut row = [0u32; 3];
                for (slot, cell) in row.iter_mut().zip(&cells) {
                    *slot = cell
                        .parse()
                        .map_err(|_| parse_error(line_no, &format!("bad index {:?}", cell)))?;
                }
                tables.faces.push(row);
            }
        }
    }

    Ok(tables)
}

fn row_cells(line: &str, line_no: usize) -> Result<Vec<&str>, HarnessError> {
    let inner = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix("},"))
        .ok_or_else(|| parse_error(line_no, "row must look like {a, b, c},"))?;
    let cells: Vec<&str> = inner.split(", ").collect();
    if cells.len() != 3 {
        return Err(parse_error(line_no, "row must have 3 cells"));
    }
    Ok(cells)
}

fn pres_cells(cells: &[&str], line_no: usize) -> Result<[f64; 3], HarnessError> {
    let mut out = [0.0; 3];
    for (slot, cell) in out.iter_mut().zip(cells) {
        let literal = cell
            .strip_prefix("(long)(")
            .and_then(|c| c.strip_suffix("*PRES)"))
            .ok_or_else(|| parse_error(line_no, &format!("not a PRES term: {:?}", cell)))?;
        *slot = literal
            .parse()
            .map_err(|_| parse_error(line_no, &format!("bad literal {:?}", literal)))?;
    }
    Ok(out)
}

fn parse_usize(text: &str, line_no: usize) -> Result<usize, HarnessError> {
    text.trim()
        .parse()
        .map_err(|_| parse_error(line_no, &format!("bad count {:?}", text)))
}

fn parse_error(line: usize, reason: &str) -> HarnessError {
    HarnessError::HeaderParse {
        line,
        reason: reason.to_string(),
    }
}
