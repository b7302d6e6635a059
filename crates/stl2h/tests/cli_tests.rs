//! Command-line runs against real files in a temporary directory.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use clap::Parser;
use stl2h::{run, AlwaysOverwrite, Args, CliError, TerminalPrompt};

const TRIANGLE: &str = "\
solid tri
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid tri
";

fn args(input: &Path, output: &Path, extra: &[&str]) -> Args {
    let mut argv = vec![
        "stl2h".to_string(),
        "-i".to_string(),
        input.display().to_string(),
        "-o".to_string(),
        output.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn writes_header_for_valid_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tri.stl");
    let output = dir.path().join("tri.h");
    fs::write(&input, TRIANGLE).unwrap();

    let summary = run(
        &args(&input, &output, &["-n"]),
        "stl2h -i tri.stl -o tri.h -n".to_string(),
        &mut AlwaysOverwrite,
    )
    .unwrap();

    assert_eq!(summary.output, output);
    assert_eq!(summary.stats.unique_vertices, 3);
    assert_eq!(summary.stats.triangles, 1);
    assert_eq!(summary.stats.normals, Some(1));

    let header = fs::read_to_string(&output).unwrap();
    assert!(header.starts_with("// exported with stl2h\n// stl2h -i tri.stl -o tri.h -n\n"));
    assert!(header.contains("  {0, 1, 2},\n"));
    assert!(header.contains("  {(long)(0*PRES), (long)(0*PRES), (long)(1*PRES)},\n"));
}

#[test]
fn incomplete_triangle_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.stl");
    let output = dir.path().join("bad.h");
    fs::write(&input, "solid bad\nvertex 0 0 0\nvertex 1 0 0\nendsolid bad\n").unwrap();

    let err = run(&args(&input, &output, &[]), String::new(), &mut AlwaysOverwrite).unwrap_err();
    assert!(matches!(err, CliError::Convert(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("missing 1 vertex"));
    assert!(!output.exists());
}

#[test]
fn unreadable_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.stl");
    let output = dir.path().join("out.h");

    let err = run(&args(&input, &output, &[]), String::new(), &mut AlwaysOverwrite).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists());
}

#[test]
fn same_input_and_output_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tri.stl");
    fs::write(&input, TRIANGLE).unwrap();

    let err = run(&args(&input, &input, &[]), String::new(), &mut AlwaysOverwrite).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(fs::read_to_string(&input).unwrap(), TRIANGLE);
}

#[test]
fn existing_output_is_renamed_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tri.stl");
    let output = dir.path().join("mesh.h");
    let renamed = dir.path().join("mesh2.h");
    fs::write(&input, TRIANGLE).unwrap();
    fs::write(&output, "keep me").unwrap();

    let answers = format!("n\n{}\n", renamed.display());
    let mut prompt = TerminalPrompt::new(Cursor::new(answers.into_bytes()), Vec::new());
    let summary = run(&args(&input, &output, &[]), String::new(), &mut prompt).unwrap();

    assert_eq!(summary.output, renamed);
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
    assert!(fs::read_to_string(&renamed).unwrap().contains("#define TRICOUNT 1"));
}

#[test]
fn yes_flag_skips_the_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tri.stl");
    let output = dir.path().join("mesh.h");
    fs::write(&input, TRIANGLE).unwrap();
    fs::write(&output, "old").unwrap();

    // an exhausted prompt would fail if it were consulted
    let mut prompt = TerminalPrompt::new(Cursor::new(Vec::new()), Vec::new());
    run(&args(&input, &output, &["-y"]), String::new(), &mut prompt).unwrap();
    assert!(fs::read_to_string(&output).unwrap().contains("#ifndef MESH_H"));
}

#[test]
fn portable_target_and_scale_reach_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tri.stl");
    let output = dir.path().join("tri.h");
    fs::write(&input, TRIANGLE).unwrap();

    run(
        &args(&input, &output, &["--target", "portable", "--scale", "0.5"]),
        String::new(),
        &mut AlwaysOverwrite,
    )
    .unwrap();
    let header = fs::read_to_string(&output).unwrap();
    assert!(header.contains("static const long nodes[NODECOUNT][3] = {\n"));
    assert!(header.contains("  {(long)(0.5*PRES), (long)(0*PRES), (long)(0*PRES)},\n"));
    assert!(!header.contains("normals[TRICOUNT]"));
}
