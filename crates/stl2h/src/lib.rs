//! Command-line shell around the conversion pipeline.
//!
//! Parses arguments, resolves the output path through an injected
//! [`OverwritePrompt`], runs the conversion and writes the header only
//! after it has been generated in full.

pub mod args;
pub mod errors;
pub mod overwrite;
pub mod run;

pub use args::{Args, Target};
pub use errors::CliError;
pub use overwrite::{
    resolve_output_path, AlwaysOverwrite, Decision, OverwritePrompt, TerminalPrompt,
};
pub use run::{run, RunSummary};
