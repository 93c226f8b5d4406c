use kernel_bridge::KernelSolidHandle;

use crate::kernel_ext::KernelBundle;
use crate::select::EdgeQuery;
use crate::types::{OpError, OpResult};

/// Resolve an edge query against the solid and chamfer the selected
/// edges with the given setback distance.
pub fn execute_chamfer(
    kb: &mut dyn KernelBundle,
    solid: &KernelSolidHandle,
    query: &EdgeQuery,
    distance: f64,
) -> Result<OpResult, OpError> {
    if distance <= 0.0 {
        return Err(OpError::InvalidParameter {
            reason: "chamfer distance must be positive".to_string(),
        });
    }

    let edges = query.resolve(kb.as_introspect(), solid)?;
    let handle = kb.chamfer_edges(solid, &edges, distance)?;

    tracing::debug!(
        edge_count = edges.len(),
        distance,
        result = handle.id(),
        "edges chamfered"
    );
    Ok(OpResult::new(handle))
}
