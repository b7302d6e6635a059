//! Line classification for ASCII STL.
//!
//! Only two record shapes matter: `vertex x y z` (exactly 4 tokens) and
//! `facet normal nx ny nz` (exactly 5 tokens). Everything else, including
//! `solid`, `outer loop`, `endloop`, `endfacet`, `endsolid` and malformed
//! lines, is skipped without error.

use std::io::BufRead;

use mesh_types::Vertex;
use tracing::{debug, instrument};

use crate::errors::ConvertError;

/// Payload tokens of a recognized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind<'a> {
    Vertex([&'a str; 3]),
    FacetNormal([&'a str; 3]),
}

/// A parsed `vertex` record.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRecord {
    /// 1-based source line.
    pub line: usize,
    pub vertex: Vertex,
}

/// A `facet normal` record. Components stay as text until normals are
/// requested, so a file with odd normal tokens still converts without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalRecord {
    /// 1-based source line.
    pub line: usize,
    pub tokens: [String; 3],
}

/// All recognized records of an input, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StlRecords {
    pub vertices: Vec<VertexRecord>,
    pub normals: Vec<NormalRecord>,
}

/// Classify a single line by token shape.
pub fn classify_line(line: &str) -> Option<RecordKind<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["vertex", x, y, z] => Some(RecordKind::Vertex([*x, *y, *z])),
        ["facet", "normal", x, y, z] => Some(RecordKind::FacetNormal([*x, *y, *z])),
        _ => None,
    }
}

/// Scan in-memory text.
pub fn scan_str(text: &str) -> Result<StlRecords, ConvertError> {
    let mut records = StlRecords::default();
    for (i, line) in text.lines().enumerate() {
        push_line(&mut records, i + 1, line)?;
    }
    Ok(records)
}

/// Scan a reader to the end, buffering every record.
///
/// Lines are read as bytes and decoded lossily: text outside the
/// recognized records (a `solid` name in Latin-1, say) never fails the
/// scan, while a bad byte inside a coordinate still fails to parse.
#[instrument(skip_all)]
pub fn scan_reader<R: BufRead>(mut reader: R) -> Result<StlRecords, ConvertError> {
    let mut records = StlRecords::default();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        push_line(&mut records, line_no, &String::from_utf8_lossy(&buf))?;
    }
    debug!(
        vertices = records.vertices.len(),
        normals = records.normals.len(),
        "scan complete"
    );
    Ok(records)
}

fn push_line(records: &mut StlRecords, line_no: usize, line: &str) -> Result<(), ConvertError> {
    match classify_line(line) {
        Some(RecordKind::Vertex(tokens)) => {
            let position = parse_components(tokens, line_no)?;
            debug!(line = line_no, "vertex {} {} {}", tokens[0], tokens[1], tokens[2]);
            records.vertices.push(VertexRecord {
                line: line_no,
                vertex: Vertex::new(position, tokens.map(str::to_string)),
            });
        }
        Some(RecordKind::FacetNormal(tokens)) => {
            records.normals.push(NormalRecord {
                line: line_no,
                tokens: tokens.map(str::to_string),
            });
        }
        None => {}
    }
    Ok(())
}

/// Parse three coordinate tokens. Non-finite values (`inf`, `NaN`) are
/// rejected since they have no numeric identity for deduplication.
pub(crate) fn parse_components<S: AsRef<str>>(
    tokens: [S; 3],
    line: usize,
) -> Result<[f64; 3], ConvertError> {
    let mut out = [0.0; 3];
    for (slot, token) in out.iter_mut().zip(tokens.iter()) {
        let token: &str = token.as_ref();
        *slot = match token.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                return Err(ConvertError::InvalidCoordinate {
                    line,
                    token: token.to_string(),
                })
            }
        };
    }
    Ok(out)
}
