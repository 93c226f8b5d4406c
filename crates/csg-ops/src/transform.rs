use case_types::Transform;
use kernel_bridge::KernelSolidHandle;

use crate::kernel_ext::KernelBundle;
use crate::types::{OpError, OpResult};

/// Apply a rigid transform to a solid, producing a new solid.
///
/// The input solid is left untouched in the kernel; the caller decides
/// whether to keep using it.
pub fn execute_transform(
    kb: &mut dyn KernelBundle,
    solid: &KernelSolidHandle,
    transform: &Transform,
) -> Result<OpResult, OpError> {
    if transform.steps.is_empty() {
        return Ok(OpResult::new(*solid));
    }
    let handle = kb.transform_solid(solid, &transform.steps)?;
    tracing::debug!(
        step_count = transform.steps.len(),
        result = handle.id(),
        "solid transformed"
    );
    Ok(OpResult::new(handle))
}
