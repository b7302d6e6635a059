use serde::{Deserialize, Serialize};

/// A vertex position read from a `vertex x y z` record.
///
/// The source tokens are kept next to the parsed values so diagnostics can
/// echo the input exactly as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Parsed coordinates [x, y, z].
    pub position: [f64; 3],
    /// Source tokens for x, y and z.
    pub tokens: [String; 3],
}

impl Vertex {
    pub fn new(position: [f64; 3], tokens: [String; 3]) -> Self {
        Self { position, tokens }
    }

    /// Build a vertex from coordinates alone, rendering the tokens with `Display`.
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: [x, y, z],
            tokens: [x.to_string(), y.to_string(), z.to_string()],
        }
    }

    /// The deduplication key for this position.
    pub fn key(&self) -> VertexKey {
        VertexKey::from_position(self.position)
    }
}

/// A facet normal read from a `facet normal nx ny nz` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    /// Parsed components [nx, ny, nz].
    pub direction: [f64; 3],
    /// Source tokens for nx, ny and nz.
    pub tokens: [String; 3],
}

impl Normal {
    pub fn new(direction: [f64; 3], tokens: [String; 3]) -> Self {
        Self { direction, tokens }
    }

    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self {
            direction: [x, y, z],
            tokens: [x.to_string(), y.to_string(), z.to_string()],
        }
    }
}

/// Hashable identity of a vertex position.
///
/// Two keys are equal iff every component compares equal as `f64`, so `1`,
/// `1.0` and `1e0` share a key and `-0` equals `0`. Only valid for finite
/// coordinates; NaN has no numeric identity and is rejected before keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey([u64; 3]);

impl VertexKey {
    pub fn from_position(position: [f64; 3]) -> Self {
        Self(position.map(canonical_bits))
    }
}

fn canonical_bits(value: f64) -> u64 {
    // -0.0 == 0.0 numerically but not bitwise
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
