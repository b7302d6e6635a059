//! Test harness for the STL to header pipeline.
//!
//! Provides fixtures, verification oracles and a reader for generated
//! headers so tests can check results numerically instead of by string
//! matching alone.
//!
//! # Key Components
//!
//! - [`StlFixture`]: Indexed meshes written out as ASCII STL triangle soup
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`header`]: Parse a generated header back into its tables
//! - [`stl`]: ASCII STL export of fixtures
//! - [`helpers`]: Error type, fixture constructors, mesh math
//! - [`assertions`]: Rich assertion helpers with diagnostics

pub mod assertions;
pub mod header;
pub mod helpers;
pub mod oracle;
pub mod stl;

pub use header::{parse_header, HeaderTables};
pub use helpers::{HarnessError, StlFixture};
pub use oracle::OracleVerdict;
