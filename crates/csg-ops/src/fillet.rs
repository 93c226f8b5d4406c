use kernel_bridge::KernelSolidHandle;

use crate::kernel_ext::KernelBundle;
use crate::select::EdgeQuery;
use crate::types::{OpError, OpResult};

/// Resolve an edge query against the solid and fillet the selected
/// edges with the given radius.
///
/// The query is resolved here, not earlier: entity ids from before the
/// previous operation are stale.
pub fn execute_fillet(
    kb: &mut dyn KernelBundle,
    solid: &KernelSolidHandle,
    query: &EdgeQuery,
    radius: f64,
) -> Result<OpResult, OpError> {
    if radius <= 0.0 {
        return Err(OpError::InvalidParameter {
            reason: "fillet radius must be positive".to_string(),
        });
    }

    let edges = query.resolve(kb.as_introspect(), solid)?;
    let handle = kb.fillet_edges(solid, &edges, radius)?;

    tracing::debug!(
        edge_count = edges.len(),
        radius,
        result = handle.id(),
        "edges filleted"
    );
    Ok(OpResult::new(handle))
}
