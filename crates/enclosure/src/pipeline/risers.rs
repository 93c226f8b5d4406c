//! Internal standoffs: square posts with rounded vertical edges,
//! optionally bored for a heat-set insert.

use case_types::Axis;
use csg_ops::{EdgeQuery, KernelBundle};

use crate::error::BuildError;
use crate::params::ResolvedParams;
use crate::pipeline::{solid_box, WorkingSolid};
use crate::profile::{planar_face, Profile};

/// Build one standoff at the origin. The caller moves it into place and
/// unions it onto the shell.
pub fn build_riser(
    kb: &mut dyn KernelBundle,
    params: &ResolvedParams,
    with_insert_bore: bool,
    round_edges: bool,
) -> Result<WorkingSolid, BuildError> {
    let c = &params.constants;

    let body = solid_box(
        kb,
        c.riser_footprint,
        c.riser_footprint,
        c.riser_height,
        "riser body",
    )?;
    let mut riser = WorkingSolid::primitive(body);

    if with_insert_bore {
        // Pilot bore for the insert, cut down from the top face.
        let bore = Profile::circle([0.0, 0.0], c.insert_bore_radius);
        let face = planar_face(
            &bore,
            &[],
            [0.0, 0.0, c.riser_height / 2.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
        )?;
        riser.cut_profile(
            kb,
            &face,
            [0.0, 0.0, -1.0],
            c.riser_insert_depth,
            "riser insert bore",
        )?;
    }

    if round_edges {
        let half = c.riser_footprint / 2.0;
        let corner_edges = EdgeQuery::new()
            .along(Axis::Z)
            .matching(move |sig| {
                sig.centroid.is_some_and(|cen| {
                    (cen[0].abs() - half).abs() < 1e-6 && (cen[1].abs() - half).abs() < 1e-6
                })
            })
            .expect_count(4);
        riser.round_edges(kb, &corner_edges, c.riser_corner_radius, "riser rounding")?;
    }

    Ok(riser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;
    use case_types::TopoKind;
    use kernel_bridge::{KernelIntrospect, MockKernel};

    #[test]
    fn bored_riser_records_the_pilot_bore() {
        let mut kb = MockKernel::new();
        let params = ParamSet::default().resolve().unwrap();
        build_riser(&mut kb, &params, true, true).unwrap();

        use kernel_bridge::MockOp;
        assert!(kb.oplog().iter().any(|op| matches!(
            op,
            MockOp::ExtrudeFace { depth, .. } if (depth - 6.0).abs() < 1e-9
        )));
    }

    #[test]
    fn rounded_riser_gains_cylindrical_corner_faces() {
        let mut kb = MockKernel::new();
        let params = ParamSet::default().resolve().unwrap();
        let riser = build_riser(&mut kb, &params, false, true).unwrap();

        let cylindrical = kb
            .compute_all_signatures(&riser.handle, TopoKind::Face)
            .into_iter()
            .filter(|(_, sig)| sig.surface_type.as_deref() == Some("cylindrical"))
            .count();
        assert_eq!(cylindrical, 4);
    }

    #[test]
    fn flat_riser_keeps_sharp_corners() {
        let mut kb = MockKernel::new();
        let params = ParamSet::default().resolve().unwrap();
        let riser = build_riser(&mut kb, &params, false, false).unwrap();

        let cylindrical = kb
            .compute_all_signatures(&riser.handle, TopoKind::Face)
            .into_iter()
            .filter(|(_, sig)| sig.surface_type.as_deref() == Some("cylindrical"))
            .count();
        assert_eq!(cylindrical, 0);
    }
}
