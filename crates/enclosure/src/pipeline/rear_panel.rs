//! Rear panel: a rounded plate seated in the rear recess, with the four
//! anchor bores and a power cable slot along the bottom edge.

use csg_ops::KernelBundle;

use crate::error::BuildError;
use crate::params::ResolvedParams;
use crate::pipeline::{extruded, SealedSolid, LATERAL_NORMAL, LATERAL_X_AXIS};
use crate::placement;
use crate::profile::{planar_face, Profile};

pub fn build_rear_panel(
    kb: &mut dyn KernelBundle,
    params: &ResolvedParams,
) -> Result<SealedSolid, BuildError> {
    let c = &params.constants;

    let outer = Profile::rounded_rect(
        params.inner_width - c.rear_panel_clearance,
        params.inner_height - c.rear_panel_clearance,
        params.inner_radius,
    )?;

    let mut holes = Vec::new();
    let bore_radius = c.fastener_bore_diameter / 2.0;
    for (x, y) in placement::panel_anchor_corners(params) {
        holes.push(Profile::circle([x, y], bore_radius));
    }

    // Cable slot, sharp-cornered, near the bottom edge.
    holes.push(
        Profile::rectangle(c.cable_cut_width, c.cable_cut_height)
            .translated(0.0, -params.inner_height / 2.0 + c.cable_cut_rise),
    );

    let face = planar_face(
        &outer,
        &holes,
        [0.0, params.length / 2.0 - c.rear_panel_inset, 0.0],
        LATERAL_NORMAL,
        LATERAL_X_AXIS,
    )?;
    let handle = extruded(kb, &face, [0.0, 1.0, 0.0], c.panel_thickness, "rear panel extrusion")?;
    Ok(SealedSolid { handle })
}
