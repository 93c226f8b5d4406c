//! Front panel: a rounded plate that drops into the window recess,
//! pierced for the display tubes, the indicator lamps, and the
//! fasteners that hold both the panel and the display board.

use csg_ops::KernelBundle;

use crate::error::BuildError;
use crate::params::ResolvedParams;
use crate::pipeline::{extruded, SealedSolid, LATERAL_NORMAL, LATERAL_X_AXIS};
use crate::placement::{self, TUBE_XS};
use crate::profile::{planar_face, Profile};

pub fn build_front_panel(
    kb: &mut dyn KernelBundle,
    params: &ResolvedParams,
) -> Result<SealedSolid, BuildError> {
    let c = &params.constants;

    let outer = Profile::rounded_rect(
        params.inner_width - c.front_panel_clearance,
        params.inner_height - c.front_panel_clearance,
        params.inner_radius,
    )?;

    let mut holes = Vec::new();

    // Indicator lamp bores between the tube pairs.
    for (x, y) in case_types::four_corners(27.05, 6.0) {
        holes.push(Profile::circle([x, y], c.indicator_bore_diameter / 2.0));
    }

    // One stadium-shaped aperture per tube pair, centered between them.
    let aperture = tube_aperture();
    let pitch = (TUBE_XS[1] + TUBE_XS[2]) / 2.0;
    for x in [0.0, pitch, -pitch] {
        holes.push(aperture.translated(x, 0.0));
    }

    // Panel anchors plus the display board's mounting grid.
    let bore_radius = c.fastener_bore_diameter / 2.0;
    for (x, y) in placement::panel_anchor_corners(params) {
        holes.push(Profile::circle([x, y], bore_radius));
    }
    for (x, y) in placement::board_grid_corners(params) {
        holes.push(Profile::circle([x, y], bore_radius));
    }

    let face = planar_face(
        &outer,
        &holes,
        [0.0, -params.length / 2.0 + c.front_panel_inset, 0.0],
        LATERAL_NORMAL,
        LATERAL_X_AXIS,
    )?;
    let handle = extruded(kb, &face, [0.0, 1.0, 0.0], c.panel_thickness, "front panel extrusion")?;
    Ok(SealedSolid { handle })
}

/// Opening for one pair of display tubes: two bulged arcs top and
/// bottom, joined by straight sides.
fn tube_aperture() -> Profile {
    Profile::new([-21.0, 11.5])
        .arc_to([-10.5, 15.75], [0.0, 12.5])
        .arc_to([10.5, 15.75], [21.0, 11.5])
        .line_to([21.0, -11.5])
        .arc_to([10.5, -15.75], [0.0, -12.5])
        .arc_to([-10.5, -15.75], [-21.0, -11.5])
        .line_to([-21.0, 11.5])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;
    use kernel_bridge::{MockKernel, MockOp};

    #[test]
    fn panel_face_carries_fifteen_holes() {
        let mut kb = MockKernel::new();
        let params = ParamSet::default().resolve().unwrap();
        build_front_panel(&mut kb, &params).unwrap();

        // 4 indicator bores, 3 tube apertures, 8 fastener bores.
        match kb.oplog().last().unwrap() {
            MockOp::ExtrudeFace { holes, depth, direction, .. } => {
                assert_eq!(*holes, 15);
                assert_eq!(*depth, 3.0);
                assert_eq!(*direction, [0.0, 1.0, 0.0]);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn panel_sits_in_the_window_recess() {
        let mut kb = MockKernel::new();
        let params = ParamSet::default().resolve().unwrap();
        build_front_panel(&mut kb, &params).unwrap();

        match kb.oplog().last().unwrap() {
            MockOp::ExtrudeFace { plane_origin, width, height, .. } => {
                assert!((plane_origin[1] - (-params.length / 2.0 + 5.0)).abs() < 1e-9);
                // Outline is the inner cross-section less the drop-in
                // clearance.
                assert!((width - (params.inner_width - 25.4 / 16.0)).abs() < 1e-9);
                assert!((height - (params.inner_height - 25.4 / 16.0)).abs() < 1e-9);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn tube_aperture_is_closed_and_symmetric() {
        let aperture = tube_aperture();
        assert!(aperture.is_closed());
        // Widest extent is the straight sides at x = ±21.
        assert_eq!(aperture.start, [-21.0, 11.5]);
        assert_eq!(aperture.end(), [-21.0, 11.5]);
    }
}
