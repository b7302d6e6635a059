//! End-to-end conversion tests over inline ASCII STL.

use header_format::{EmitError, LiteralStyle, TableTarget};
use mesh_pipeline::{convert_reader, convert_str, ConvertConfig, ConvertError};
use mesh_types::Triangle;

fn facet(normal: [&str; 3], vertices: [[&str; 3]; 3]) -> String {
    let mut out = format!("  facet normal {} {} {}\n    outer loop\n", normal[0], normal[1], normal[2]);
    for v in vertices {
        out.push_str(&format!("      vertex {} {} {}\n", v[0], v[1], v[2]));
    }
    out.push_str("    endloop\n  endfacet\n");
    out
}

fn solid(facets: &[String]) -> String {
    let mut out = String::from("solid test\n");
    for f in facets {
        out.push_str(f);
    }
    out.push_str("endsolid test\n");
    out
}

fn single_triangle() -> String {
    solid(&[facet(
        ["0", "0", "1"],
        [["0", "0", "0"], ["1", "0", "0"], ["0", "1", "0"]],
    )])
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn single_triangle_without_shared_vertices() {
    let conv = convert_str(&single_triangle(), &ConvertConfig::default()).unwrap();
    assert_eq!(conv.mesh.vertex_count(), 3);
    assert_eq!(conv.mesh.triangles, vec![Triangle::new(0, 1, 2)]);
    assert!(conv.header.contains("#define NODECOUNT 3\n"));
    assert!(conv.header.contains("#define TRICOUNT 1\n"));
    assert!(conv.header.contains("  {0, 1, 2},\n"));
    assert!(!conv.header.contains("normals[TRICOUNT]"));
}

#[test]
fn two_triangles_sharing_an_edge() {
    let text = solid(&[
        facet(
            ["0", "0", "1"],
            [["0", "0", "0"], ["1", "0", "0"], ["1", "1", "0"]],
        ),
        facet(
            ["0", "0", "1"],
            [["0", "0", "0"], ["1", "1", "0"], ["0", "1", "0"]],
        ),
    ]);
    let conv = convert_str(&text, &ConvertConfig::default()).unwrap();
    assert_eq!(conv.mesh.vertex_count(), 4);
    assert_eq!(
        conv.mesh.triangles,
        vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)]
    );
    assert!(conv.header.contains("#define NODECOUNT 4\n"));
    assert!(conv.header.contains("#define TRICOUNT 2\n"));
    assert!(conv.header.contains("  {0, 1, 2},\n  {0, 2, 3},\n"));
}

#[test]
fn declared_normal_is_emitted() {
    let conv = convert_str(&single_triangle(), &ConvertConfig::with_normals()).unwrap();
    let normals = conv.mesh.normals.as_ref().unwrap();
    assert_eq!(normals.len(), 1);
    assert!(conv.header.contains(
        "const long normals[TRICOUNT][3] PROGMEM = {\n  {(long)(0*PRES), (long)(0*PRES), (long)(1*PRES)},\n};\n"
    ));
}

#[test]
fn scale_applies_to_vertices_only() {
    let text = solid(&[facet(
        ["0", "0", "1"],
        [["1.23456", "0", "0"], ["0", "1", "0"], ["0", "0", "1"]],
    )]);
    let config = ConvertConfig {
        scale: 2.0,
        normals: true,
        ..ConvertConfig::default()
    };
    let conv = convert_str(&text, &config).unwrap();
    assert!(conv
        .header
        .contains("  {(long)(2.46912*PRES), (long)(0*PRES), (long)(0*PRES)},\n"));
    assert!(conv
        .header
        .contains("  {(long)(0*PRES), (long)(2*PRES), (long)(0*PRES)},\n"));
    // the normal row keeps its unit length
    assert!(conv
        .header
        .ends_with("  {(long)(0*PRES), (long)(0*PRES), (long)(1*PRES)},\n};\n\n#endif // MESH_H\n"));
}

// ── Structural validation ────────────────────────────────────────────────

#[test]
fn partial_triangles_are_rejected() {
    let base = single_triangle();
    let one_extra = base.replace("endsolid test\n", "vertex 5 5 5\nendsolid test\n");
    let two_extra = base.replace(
        "endsolid test\n",
        "vertex 5 5 5\nvertex 6 6 6\nendsolid test\n",
    );

    match convert_str(&one_extra, &ConvertConfig::default()) {
        Err(ConvertError::IncompleteTriangle {
            occurrences,
            missing,
        }) => {
            assert_eq!(occurrences, 4);
            assert_eq!(missing, 2);
        }
        other => panic!("expected IncompleteTriangle, got {:?}", other),
    }
    match convert_str(&two_extra, &ConvertConfig::default()) {
        Err(ConvertError::IncompleteTriangle { missing, .. }) => assert_eq!(missing, 1),
        other => panic!("expected IncompleteTriangle, got {:?}", other),
    }
}

#[test]
fn file_without_vertices_is_rejected() {
    let err = convert_str("solid empty\nendsolid empty\n", &ConvertConfig::default()).unwrap_err();
    assert!(matches!(err, ConvertError::NoTriangles));
}

#[test]
fn deficit_is_reported_in_message() {
    let err = convert_str("vertex 0 0 0\n", &ConvertConfig::default()).unwrap_err();
    assert!(err.to_string().contains("missing 2 vertex"), "{}", err);
}

#[test]
fn extra_normals_are_a_mismatch() {
    let text = single_triangle().replace(
        "endsolid test\n",
        "facet normal 1 0 0\nendsolid test\n",
    );
    let err = convert_str(&text, &ConvertConfig::with_normals()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Emit(EmitError::NormalCountMismatch {
            normals: 2,
            triangles: 1
        })
    ));
}

// ── Equality and formatting ──────────────────────────────────────────────

#[test]
fn equal_numbers_in_different_spellings_share_an_index() {
    let text = solid(&[
        facet(
            ["0", "0", "1"],
            [["0", "0", "0"], ["1", "0", "0"], ["0", "1", "0"]],
        ),
        facet(
            ["0", "0", "1"],
            [["0.0", "-0", "0e0"], ["1.000", "0", "0"], ["0", "0", "2"]],
        ),
    ]);
    let conv = convert_str(&text, &ConvertConfig::default()).unwrap();
    assert_eq!(conv.mesh.vertex_count(), 4);
    assert_eq!(conv.mesh.triangles[1], Triangle::new(0, 1, 3));
}

#[test]
fn coordinates_round_to_five_places() {
    let text = solid(&[facet(
        ["0", "0", "1"],
        [
            ["0.123456789", "-2.000004", "10"],
            ["1e-6", "0", "0"],
            ["0", "0", "3.3333333"],
        ],
    )]);
    let conv = convert_str(&text, &ConvertConfig::default()).unwrap();
    assert!(conv
        .header
        .contains("  {(long)(0.12346*PRES), (long)(-2*PRES), (long)(10*PRES)},\n"));
    assert!(conv
        .header
        .contains("  {(long)(0*PRES), (long)(0*PRES), (long)(0*PRES)},\n"));
    assert!(conv
        .header
        .contains("  {(long)(0*PRES), (long)(0*PRES), (long)(3.33333*PRES)},\n"));
}

#[test]
fn portable_target_drops_program_memory_qualifiers() {
    let config = ConvertConfig {
        target: TableTarget::Portable,
        ..ConvertConfig::default()
    };
    let conv = convert_str(&single_triangle(), &config).unwrap();
    assert!(!conv.header.contains("PROGMEM"));
    assert!(!conv.header.contains("pgm_read"));
    assert!(conv
        .header
        .contains("static const long nodes[NODECOUNT][3] = {\n"));
}

#[test]
fn command_line_is_recorded() {
    let config = ConvertConfig {
        command_line: "stl2h --input a.stl --output a.h --normals".to_string(),
        normals: true,
        ..ConvertConfig::default()
    };
    let conv = convert_str(&single_triangle(), &config).unwrap();
    assert!(conv.header.starts_with(
        "// exported with stl2h\n// stl2h --input a.stl --output a.h --normals\n#ifndef MESH_H\n#define MESH_H\n"
    ));
}

#[test]
fn latin1_solid_name_still_converts() {
    let mut bytes = b"solid caf\xe9\n".to_vec();
    bytes.extend_from_slice(
        facet(
            ["0", "0", "1"],
            [["0", "0", "0"], ["1", "0", "0"], ["0", "1", "0"]],
        )
        .as_bytes(),
    );
    bytes.extend_from_slice(b"endsolid caf\xe9\n");

    let conv = convert_reader(std::io::Cursor::new(bytes), &ConvertConfig::default()).unwrap();
    assert_eq!(conv.mesh.vertex_count(), 3);
    assert_eq!(conv.mesh.triangles, vec![Triangle::new(0, 1, 2)]);
}

#[test]
fn coordinate_overflowing_on_rounding_is_rejected() {
    let err = convert_str(
        "vertex 1e305 0 0\nvertex 1 0 0\nvertex 0 1 0\n",
        &ConvertConfig::default(),
    )
    .unwrap_err();
    assert!(
        matches!(
            err,
            ConvertError::Emit(EmitError::NonFiniteLiteral {
                table: "nodes",
                row: 0,
                component: 0
            })
        ),
        "{:?}",
        err
    );
}

#[test]
fn scaled_literals_carry_no_binary_noise() {
    let text = solid(&[facet(
        ["0", "0", "1"],
        [["0.1", "0", "0"], ["0", "0.7", "0"], ["0", "0", "1"]],
    )]);
    let config = ConvertConfig {
        scale: 3.0,
        ..ConvertConfig::default()
    };
    let conv = convert_str(&text, &config).unwrap();
    assert!(conv
        .header
        .contains("  {(long)(0.3*PRES), (long)(0*PRES), (long)(0*PRES)},\n"));
    assert!(conv
        .header
        .contains("  {(long)(0*PRES), (long)(2.1*PRES), (long)(0*PRES)},\n"));
    assert!(!conv.header.contains("0000000"));
}

#[test]
fn float_literal_style_reaches_the_header() {
    let config = ConvertConfig {
        scale: 14.0,
        literals: LiteralStyle::Float,
        ..ConvertConfig::default()
    };
    let conv = convert_str(&single_triangle(), &config).unwrap();
    assert!(conv
        .header
        .contains("  {(long)(14.0*PRES), (long)(0.0*PRES), (long)(0.0*PRES)},\n"));
}
