use kernel_bridge::PlanarFace;

use crate::kernel_ext::KernelBundle;
use crate::types::{OpError, OpResult};

/// Build a planar face from a closed boundary and extrude it along a
/// direction vector by a positive depth.
///
/// The face is created and consumed in one step so callers always hand
/// a fully-formed volume to the next boolean, never a bare sketch.
pub fn execute_extrude(
    kb: &mut dyn KernelBundle,
    face: &PlanarFace,
    direction: [f64; 3],
    depth: f64,
) -> Result<OpResult, OpError> {
    if depth <= 0.0 {
        return Err(OpError::InvalidParameter {
            reason: format!("extrude depth must be positive, got {depth}"),
        });
    }
    let dir_len =
        (direction[0] * direction[0] + direction[1] * direction[1] + direction[2] * direction[2])
            .sqrt();
    if dir_len < 1e-12 {
        return Err(OpError::InvalidParameter {
            reason: "extrude direction has zero length".to_string(),
        });
    }

    let face_id = kb.make_planar_face(face)?;
    let handle = kb.extrude_face(face_id, direction, depth)?;

    tracing::debug!(depth, result = handle.id(), "profile extruded");
    Ok(OpResult::new(handle))
}
