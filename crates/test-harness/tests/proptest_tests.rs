//! Property-based round trips through STL text and back out of the header.

use proptest::prelude::*;

use mesh_pipeline::{convert_str, ConvertConfig};
use test_harness::oracle::*;
use test_harness::stl::export_ascii_stl;
use test_harness::{parse_header, StlFixture};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Triangle soups over a small lattice, so many corners coincide.
fn arb_fixture() -> impl Strategy<Value = StlFixture> {
    prop::collection::vec([0i32..4, 0i32..4, 0i32..4], 3..24)
        .prop_flat_map(|points| {
            let n = points.len();
            let triangles = prop::collection::vec([0..n, 0..n, 0..n], 1..30);
            (Just(points), triangles)
        })
        .prop_map(|(points, triangles)| {
            let positions = points
                .iter()
                .map(|p| [p[0] as f64 * 0.25, p[1] as f64 * -0.5, p[2] as f64])
                .collect();
            StlFixture::new(positions, triangles)
        })
}

fn arb_scale() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), Just(10.0), Just(0.5), Just(-2.0)]
}

// ---------------------------------------------------------------------------
// 1. The converted mesh reproduces the soup exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn mesh_reproduces_fixture(fixture in arb_fixture()) {
        let stl = export_ascii_stl(&fixture, "soup").unwrap();
        let conversion = convert_str(&stl, &ConvertConfig::default()).unwrap();

        for v in check_all(&conversion.mesh, fixture.occurrence_count()) {
            prop_assert!(v.passed, "{}: {}", v.oracle_name, v.detail);
        }
        let matched = check_matches_fixture(&conversion.mesh, &fixture);
        prop_assert!(matched.passed, "{}", matched.detail);
    }
}

// ---------------------------------------------------------------------------
// 2. The header carries the same tables as the mesh
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn header_matches_mesh(fixture in arb_fixture(), scale in arb_scale()) {
        let stl = export_ascii_stl(&fixture, "soup").unwrap();
        let config = ConvertConfig { scale, ..ConvertConfig::with_normals() };
        let conversion = convert_str(&stl, &config).unwrap();
        let tables = parse_header(&conversion.header).unwrap();

        let counts = check_header_counts(&tables, &conversion.mesh);
        prop_assert!(counts.passed, "{}", counts.detail);
        let faces = check_header_faces(&tables, &conversion.mesh);
        prop_assert!(faces.passed, "{}", faces.detail);

        for (row, vertex) in tables.nodes.iter().zip(&conversion.mesh.vertices) {
            for k in 0..3 {
                prop_assert!((row[k] - vertex.position[k] * scale).abs() < 1e-9);
            }
        }
    }
}
