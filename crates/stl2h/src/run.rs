use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use mesh_pipeline::convert_reader;
use mesh_types::MeshStats;
use tracing::{info, instrument};

use crate::args::{same_file, Args};
use crate::errors::CliError;
use crate::overwrite::{resolve_output_path, AlwaysOverwrite, OverwritePrompt};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Path actually written (may differ from `--output` after a rename).
    pub output: PathBuf,
    pub stats: MeshStats,
}

/// Convert `args.input` and write the header.
///
/// `prompt` is consulted for an existing output file unless `--yes` was
/// given. Nothing is written unless the whole conversion succeeds.
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn run(
    args: &Args,
    command_line: String,
    prompt: &mut dyn OverwritePrompt,
) -> Result<RunSummary, CliError> {
    args.validate()?;
    if args.verbose {
        info!("parsing STL file with verbose output");
    }

    let output = if args.yes {
        resolve_output_path(&args.output, &mut AlwaysOverwrite)
    } else {
        resolve_output_path(&args.output, prompt)
    }
    .map_err(|source| CliError::Io {
        path: args.output.clone(),
        source,
    })?;
    if same_file(&args.input, &output) {
        return Err(CliError::Config(
            "input and output files are the same".to_string(),
        ));
    }

    info!("input STL file: {}", args.input.display());
    info!("output header file: {}", output.display());

    let file = File::open(&args.input).map_err(|source| CliError::Io {
        path: args.input.clone(),
        source,
    })?;
    let conversion = convert_reader(BufReader::new(file), &args.convert_config(command_line))?;

    info!("saving output file: {}", output.display());
    fs::write(&output, &conversion.header).map_err(|source| CliError::Io {
        path: output.clone(),
        source,
    })?;
    info!("done");

    Ok(RunSummary {
        output,
        stats: conversion.stats(),
    })
}
