//! The enclosure shell.
//!
//! Built in the same order a machinist would rough it out: hollow the
//! box, round the long edges, then cut the window and every opening,
//! and finally weld the standoffs onto the floor. The edge rounding has
//! to come before the window cut because the rounding queries select
//! the four uninterrupted long edges of the hollowed box.

use case_types::{Axis, Transform, Vec3};
use csg_ops::{EdgeQuery, KernelBundle};

use crate::error::BuildError;
use crate::params::ResolvedParams;
use crate::pipeline::{
    placed, risers, solid_box, solid_cylinder, SealedSolid, WorkingSolid, LATERAL_NORMAL,
    LATERAL_X_AXIS,
};
use crate::placement;
use crate::profile::{planar_face, Profile, ProfileError};

const EDGE_EPS: f64 = 1e-6;

pub fn build_shell(
    kb: &mut dyn KernelBundle,
    params: &ResolvedParams,
    round_edges: bool,
) -> Result<SealedSolid, BuildError> {
    let c = &params.constants;

    let outer = solid_box(
        kb,
        params.width,
        params.length,
        params.height,
        "shell outer box",
    )?;
    let mut shell = WorkingSolid::primitive(outer);

    // Hollow the interior. The cavity is shorter than the box and sits
    // toward the front, leaving a thick rear wall for the recess and a
    // front wall for the window to pierce.
    let cavity = solid_box(
        kb,
        params.inner_width,
        params.length - c.cavity_length_margin,
        params.inner_height,
        "shell cavity box",
    )?;
    let cavity = placed(
        kb,
        &cavity,
        &Transform::translation(Vec3::new(0.0, -c.cavity_setback, 0.0)),
        "shell cavity placement",
    )?;
    shell.cut(kb, &cavity, "shell cavity")?;

    if round_edges {
        let (half_iw, half_ih) = (params.inner_width / 2.0, params.inner_height / 2.0);

        // The four outermost long edges.
        let outer_edges = EdgeQuery::new()
            .along(Axis::Y)
            .matching(move |sig| {
                sig.centroid.is_some_and(|cen| {
                    cen[0].abs() > half_iw + EDGE_EPS && cen[2].abs() > half_ih + EDGE_EPS
                })
            })
            .expect_count(4);
        shell.round_edges(kb, &outer_edges, params.outer_radius, "shell outer rounding")?;

        // The four long edges of the cavity.
        let inner_edges = EdgeQuery::new()
            .along(Axis::Y)
            .matching(move |sig| {
                sig.centroid.is_some_and(|cen| {
                    (cen[0].abs() - half_iw).abs() < EDGE_EPS
                        && (cen[2].abs() - half_ih).abs() < EDGE_EPS
                })
            })
            .expect_count(4);
        shell.round_edges(kb, &inner_edges, params.inner_radius, "shell inner rounding")?;
    }

    // Viewing window through the front wall.
    let window = Profile::rounded_rect(
        params.window_width,
        params.window_height,
        params.window_radius,
    )?;
    let face = planar_face(
        &window,
        &[],
        [0.0, -params.length / 2.0, 0.0],
        LATERAL_NORMAL,
        LATERAL_X_AXIS,
    )?;
    shell.cut_profile(kb, &face, [0.0, 1.0, 0.0], c.window_cut_depth, "window cut")?;

    // Recess that seats the rear panel flush with the back face.
    let recess =
        Profile::rounded_rect(params.inner_width, params.inner_height, params.inner_radius)?;
    let face = planar_face(
        &recess,
        &[],
        [0.0, params.length / 2.0, 0.0],
        LATERAL_NORMAL,
        LATERAL_X_AXIS,
    )?;
    shell.cut_profile(kb, &face, [0.0, -1.0, 0.0], c.rear_recess_depth, "rear recess")?;

    // Access opening behind the recess, leaving a lip for the panel
    // fasteners to bite into.
    let access = rear_access_profile(params)?;
    let face = planar_face(
        &access,
        &[],
        [0.0, params.length / 2.0 - c.rear_recess_depth, 0.0],
        LATERAL_NORMAL,
        LATERAL_X_AXIS,
    )?;
    shell.cut_profile(kb, &face, [0.0, -1.0, 0.0], c.rear_access_depth, "rear access cut")?;

    // Pilot bores for the heat-set inserts behind both panel seats.
    for entry in placement::rear_insert_table(params).entries {
        let bore = Profile::circle([entry.position.x, entry.position.z], c.insert_bore_radius);
        let face = planar_face(
            &bore,
            &[],
            [0.0, entry.position.y, 0.0],
            LATERAL_NORMAL,
            LATERAL_X_AXIS,
        )?;
        shell.cut_profile(kb, &face, [0.0, -1.0, 0.0], c.rear_insert_depth, "rear insert bore")?;
    }
    for entry in placement::front_insert_table(params).entries {
        let bore = Profile::circle([entry.position.x, entry.position.z], c.insert_bore_radius);
        let face = planar_face(
            &bore,
            &[],
            [0.0, entry.position.y, 0.0],
            LATERAL_NORMAL,
            LATERAL_X_AXIS,
        )?;
        shell.cut_profile(kb, &face, [0.0, -1.0, 0.0], c.front_insert_depth, "front insert bore")?;
    }

    // Rocker switch opening through the right wall.
    let switch = solid_box(
        kb,
        params.wall_thickness,
        c.switch_cut_width,
        c.switch_cut_height,
        "switch cut box",
    )?;
    let switch = placed(
        kb,
        &switch,
        &Transform::translation(Vec3::new(
            params.inner_width / 2.0 + params.wall_thickness / 2.0,
            params.inner_length / 2.0 - c.switch_rear_setback,
            c.switch_drop,
        )),
        "switch cut placement",
    )?;
    shell.cut(kb, &switch, "switch cut")?;

    // Motion sensor bores through both side walls.
    for side in [1.0, -1.0] {
        let bore = solid_cylinder(
            kb,
            c.motion_bore_radius,
            params.wall_thickness,
            "motion bore cylinder",
        )?;
        let bore = placed(
            kb,
            &bore,
            &Transform::rotation(Axis::Y, 90.0).translate(Vec3::new(
                side * (params.inner_width / 2.0 + params.wall_thickness / 2.0),
                0.0,
                0.0,
            )),
            "motion bore placement",
        )?;
        shell.cut(kb, &bore, "motion bore")?;
    }

    // Speaker grille opening, screw bores, and wire pass-through in the
    // top wall.
    let grille = solid_box(
        kb,
        c.speaker_cut_width,
        c.speaker_cut_depth,
        params.wall_thickness,
        "speaker cut box",
    )?;
    let grille = placed(
        kb,
        &grille,
        &Transform::translation(Vec3::new(
            0.0,
            c.speaker_offset_y,
            params.inner_height / 2.0 + params.wall_thickness / 2.0,
        )),
        "speaker cut placement",
    )?;
    shell.cut(kb, &grille, "speaker cut")?;

    for side in [1.0, -1.0] {
        let screw = solid_cylinder(
            kb,
            c.speaker_screw_radius,
            c.speaker_screw_depth,
            "speaker screw cylinder",
        )?;
        let screw = placed(
            kb,
            &screw,
            &Transform::translation(Vec3::new(
                side * c.speaker_screw_spread,
                c.speaker_offset_y,
                params.inner_height / 2.0 + 1.5,
            )),
            "speaker screw placement",
        )?;
        shell.cut(kb, &screw, "speaker screw bore")?;
    }

    let wire = solid_cylinder(
        kb,
        c.speaker_wire_radius,
        params.wall_thickness,
        "speaker wire cylinder",
    )?;
    let wire = placed(
        kb,
        &wire,
        &Transform::translation(Vec3::new(
            0.0,
            c.speaker_wire_offset_y,
            params.inner_height / 2.0 + params.wall_thickness / 2.0,
        )),
        "speaker wire placement",
    )?;
    shell.cut(kb, &wire, "speaker wire hole")?;

    // Standoffs go on last so their edges never feed the shell's own
    // rounding queries.
    for entry in placement::clock_riser_table(params).entries {
        let riser = risers::build_riser(kb, params, false, round_edges)?;
        let seated = placed(
            kb,
            &riser.handle,
            &Transform::translation(entry.position),
            "clock riser placement",
        )?;
        shell.attach(kb, &seated, "clock riser union")?;
    }
    for entry in placement::converter_riser_table(params).entries {
        let riser = risers::build_riser(kb, params, true, round_edges)?;
        let seated = placed(
            kb,
            &riser.handle,
            &Transform::translation(entry.position),
            "converter riser placement",
        )?;
        shell.attach(kb, &seated, "converter riser union")?;
    }

    Ok(shell.seal())
}

/// Rear access boundary: the inner rectangle with a notch at each
/// corner, keeping a lip wide enough to hold the insert bores. Runs
/// counter-clockwise from the right edge; the four re-entrant notch
/// corners are rounded.
fn rear_access_profile(params: &ResolvedParams) -> Result<Profile, ProfileError> {
    let c = &params.constants;
    let (hw, hh) = (params.inner_width / 2.0, params.inner_height / 2.0);
    let lip = c.rear_access_lip;

    Profile::polyline(&[
        [hw, hh - lip],
        [hw - lip, hh - lip],
        [hw - lip, hh],
        [-hw + lip, hh],
        [-hw + lip, hh - lip],
        [-hw, hh - lip],
        [-hw, -hh + lip],
        [-hw + lip, -hh + lip],
        [-hw + lip, -hh],
        [hw - lip, -hh],
        [hw - lip, -hh + lip],
        [hw, -hh + lip],
    ])
    .close()?
    .fillet_vertices(&[1, 4, 7, 10], c.rear_access_corner_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;
    use crate::profile::ProfileSegment;
    use kernel_bridge::{MockKernel, MockOp};

    fn params() -> ResolvedParams {
        ParamSet::default().resolve().unwrap()
    }

    #[test]
    fn shell_builds_on_default_parameters() {
        let mut kb = MockKernel::new();
        build_shell(&mut kb, &params(), true).unwrap();
    }

    #[test]
    fn window_cut_matches_window_dimensions() {
        let mut kb = MockKernel::new();
        build_shell(&mut kb, &params(), true).unwrap();

        let found = kb.oplog().iter().any(|op| match op {
            MockOp::ExtrudeFace {
                width,
                height,
                depth,
                arc_segments,
                ..
            } => {
                (width - 190.0).abs() < 1e-9
                    && (height - 50.0).abs() < 1e-9
                    && (depth - 5.0).abs() < 1e-9
                    && *arc_segments == 4
            }
            _ => false,
        });
        assert!(found, "window extrusion not recorded");
    }

    #[test]
    fn both_shell_roundings_run_on_four_edges() {
        let mut kb = MockKernel::new();
        let p = params();
        build_shell(&mut kb, &p, true).unwrap();

        let fillets: Vec<f64> = kb
            .oplog()
            .iter()
            .filter_map(|op| match op {
                MockOp::Fillet { edge_count: 4, radius } => Some(*radius),
                _ => None,
            })
            .collect();
        assert!(fillets.contains(&p.outer_radius));
        assert!(fillets.contains(&p.inner_radius));
    }

    #[test]
    fn skipping_edge_rounding_leaves_no_shell_fillet() {
        let mut kb = MockKernel::new();
        build_shell(&mut kb, &params(), false).unwrap();
        assert!(!kb
            .oplog()
            .iter()
            .any(|op| matches!(op, MockOp::Fillet { .. })));
    }

    #[test]
    fn six_standoffs_are_attached() {
        let mut kb = MockKernel::new();
        build_shell(&mut kb, &params(), true).unwrap();
        let unions = kb
            .oplog()
            .iter()
            .filter(|op| matches!(op, MockOp::Union))
            .count();
        assert_eq!(unions, 6);
    }

    #[test]
    fn rear_access_keeps_the_lip() {
        let p = params();
        let profile = rear_access_profile(&p).unwrap();
        assert!(profile.is_closed());

        let arcs = profile
            .segments
            .iter()
            .filter(|s| matches!(s, ProfileSegment::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 4);

        // No boundary point reaches past the inner rectangle.
        let (hw, hh) = (p.inner_width / 2.0, p.inner_height / 2.0);
        for segment in &profile.segments {
            let to = match segment {
                ProfileSegment::LineTo { to } => to,
                ProfileSegment::ArcTo { to, .. } => to,
            };
            assert!(to[0].abs() <= hw + 1e-9);
            assert!(to[1].abs() <= hh + 1e-9);
        }
    }
}
