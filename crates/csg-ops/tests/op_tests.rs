//! Operation-level tests against the mock kernel.

use case_types::{Axis, Transform};
use csg_ops::{
    execute_boolean, execute_extrude, execute_fillet, execute_transform, BooleanKind, EdgeQuery,
    OpError, VertexQuery,
};
use kernel_bridge::{
    Kernel, KernelIntrospect, MockKernel, PathSegment, PlanarFace, TopoKind, WirePath,
};

fn rect_face(width: f64, height: f64) -> PlanarFace {
    let (w, h) = (width / 2.0, height / 2.0);
    PlanarFace {
        outer: WirePath {
            start: [-w, -h],
            segments: vec![
                PathSegment::LineTo { to: [w, -h] },
                PathSegment::LineTo { to: [w, h] },
                PathSegment::LineTo { to: [-w, h] },
                PathSegment::LineTo { to: [-w, -h] },
            ],
        },
        holes: vec![],
        plane_origin: [0.0, 0.0, 0.0],
        plane_normal: [0.0, 0.0, 1.0],
        plane_x_axis: [1.0, 0.0, 0.0],
    }
}

#[test]
fn union_merges_both_bodies() {
    let mut kernel = MockKernel::new();
    let a = kernel.make_box(10.0, 10.0, 10.0).unwrap();
    let b = kernel.make_box(4.0, 4.0, 20.0).unwrap();

    let result = execute_boolean(&mut kernel, &a, &b, BooleanKind::Union).unwrap();
    assert_eq!(kernel.list_faces(&result.handle).len(), 12);
}

#[test]
fn subtract_keeps_cut_surfaces_addressable() {
    let mut kernel = MockKernel::new();
    let shell = kernel.make_box(215.4, 88.9, 75.4).unwrap();
    let window = kernel.make_box(190.0, 5.0, 50.0).unwrap();

    let result = execute_boolean(&mut kernel, &shell, &window, BooleanKind::Subtract).unwrap();
    assert_eq!(kernel.list_edges(&result.handle).len(), 24);
}

#[test]
fn subtract_swallowing_target_is_an_error() {
    let mut kernel = MockKernel::new();
    let wall = kernel.make_box(2.0, 2.0, 2.0).unwrap();
    let cutout = kernel.make_box(50.0, 50.0, 50.0).unwrap();

    let err = execute_boolean(&mut kernel, &wall, &cutout, BooleanKind::Subtract).unwrap_err();
    assert!(matches!(err, OpError::EmptyResult { .. }));
}

#[test]
fn extrude_produces_solid_from_closed_profile() {
    let mut kernel = MockKernel::new();
    let face = rect_face(190.0, 50.0);

    let result = execute_extrude(&mut kernel, &face, [0.0, 0.0, 1.0], 5.0).unwrap();
    assert_eq!(kernel.list_faces(&result.handle).len(), 6);
}

#[test]
fn extrude_rejects_nonpositive_depth() {
    let mut kernel = MockKernel::new();
    let face = rect_face(10.0, 10.0);

    let err = execute_extrude(&mut kernel, &face, [0.0, 0.0, 1.0], 0.0).unwrap_err();
    assert!(matches!(err, OpError::InvalidParameter { .. }));
}

#[test]
fn extrude_rejects_open_profile() {
    let mut kernel = MockKernel::new();
    let face = PlanarFace {
        outer: WirePath {
            start: [0.0, 0.0],
            segments: vec![
                PathSegment::LineTo { to: [1.0, 0.0] },
                PathSegment::LineTo { to: [1.0, 1.0] },
            ],
        },
        holes: vec![],
        plane_origin: [0.0, 0.0, 0.0],
        plane_normal: [0.0, 0.0, 1.0],
        plane_x_axis: [1.0, 0.0, 0.0],
    };

    let err = execute_extrude(&mut kernel, &face, [0.0, 0.0, 1.0], 1.0).unwrap_err();
    assert!(matches!(err, OpError::Kernel(_)));
}

#[test]
fn fillet_by_axis_query_rounds_four_edges() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(215.4, 88.9, 75.4).unwrap();

    let query = EdgeQuery::new().along(Axis::Y).expect_count(4);
    let result = execute_fillet(&mut kernel, &solid, &query, 10.0).unwrap();

    let cylindrical = kernel
        .compute_all_signatures(&result.handle, TopoKind::Face)
        .into_iter()
        .filter(|(_, sig)| sig.surface_type.as_deref() == Some("cylindrical"))
        .count();
    assert_eq!(cylindrical, 4);
}

#[test]
fn fillet_count_assertion_catches_bad_selection() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = EdgeQuery::new().along(Axis::Y).expect_count(2);
    let err = execute_fillet(&mut kernel, &solid, &query, 1.0).unwrap_err();
    assert!(matches!(
        err,
        OpError::Selection(csg_ops::SelectionError::CountMismatch {
            expected: 2,
            actual: 4
        })
    ));
}

#[test]
fn chamfer_by_axis_query_bevels_four_edges() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = EdgeQuery::new().along(Axis::Z).expect_count(4);
    let result = csg_ops::execute_chamfer(&mut kernel, &solid, &query, 2.0).unwrap();

    // Bevel faces are planar, so the face count grows by four.
    assert_eq!(kernel.list_faces(&result.handle).len(), 10);
}

#[test]
fn chamfer_rejects_nonpositive_distance() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = EdgeQuery::new().along(Axis::Z);
    let err = csg_ops::execute_chamfer(&mut kernel, &solid, &query, 0.0).unwrap_err();
    assert!(matches!(err, OpError::InvalidParameter { .. }));
}

#[test]
fn fillet_rejects_nonpositive_radius() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = EdgeQuery::new().along(Axis::Y);
    let err = execute_fillet(&mut kernel, &solid, &query, -1.0).unwrap_err();
    assert!(matches!(err, OpError::InvalidParameter { .. }));
}

#[test]
fn ordinal_fallback_picks_within_filtered_set() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = EdgeQuery::new().along(Axis::Z).nth(&[0, 1]).expect_count(2);
    let edges = query.resolve(&kernel, &solid).unwrap();
    assert_eq!(edges.len(), 2);
    assert_ne!(edges[0], edges[1]);
}

#[test]
fn ordinal_out_of_range_is_reported() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = EdgeQuery::new().along(Axis::Z).nth(&[7]);
    let err = query.resolve(&kernel, &solid).unwrap_err();
    assert!(matches!(
        err,
        csg_ops::SelectionError::OrdinalOutOfRange {
            ordinal: 7,
            available: 4
        }
    ));
}

#[test]
fn selections_resolve_against_the_current_solid_only() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();
    let query = EdgeQuery::new().along(Axis::Y).expect_count(4);
    let before = query.resolve(&kernel, &solid).unwrap();

    let cutter = kernel.make_box(4.0, 20.0, 4.0).unwrap();
    let result = execute_boolean(&mut kernel, &solid, &cutter, BooleanKind::Subtract).unwrap();

    // Ids from before the boolean do not appear in the new solid.
    let after_edges = kernel.list_edges(&result.handle);
    for id in &before {
        assert!(!after_edges.contains(id));
    }
}

#[test]
fn vertex_query_selects_the_top_corners() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = VertexQuery::new()
        .matching(|sig| sig.centroid.is_some_and(|c| c[2] > 0.0))
        .expect_count(4);
    let vertices = query.resolve(&kernel, &solid).unwrap();
    assert_eq!(vertices.len(), 4);
}

#[test]
fn vertex_query_without_matches_is_an_error() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let query = VertexQuery::new().matching(|sig| sig.centroid.is_some_and(|c| c[2] > 100.0));
    let err = query.resolve(&kernel, &solid).unwrap_err();
    assert!(matches!(err, csg_ops::SelectionError::NoMatch));
}

#[test]
fn transform_produces_new_solid_and_keeps_input() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let t = Transform::translation(case_types::Vec3::new(0.0, -15.0, 0.0))
        .then(&Transform::rotation(Axis::X, 90.0));
    let result = execute_transform(&mut kernel, &solid, &t).unwrap();

    assert_ne!(result.handle, solid);
    assert_eq!(kernel.list_faces(&solid).len(), 6, "input still usable");
    assert_eq!(kernel.list_faces(&result.handle).len(), 6);
}

#[test]
fn identity_transform_is_a_noop() {
    let mut kernel = MockKernel::new();
    let solid = kernel.make_box(10.0, 10.0, 10.0).unwrap();

    let result = execute_transform(&mut kernel, &solid, &Transform::identity()).unwrap();
    assert_eq!(result.handle, solid);
}
