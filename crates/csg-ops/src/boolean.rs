use kernel_bridge::KernelSolidHandle;

use crate::kernel_ext::KernelBundle;
use crate::types::{OpError, OpResult};

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanKind {
    Union,
    Subtract,
}

/// Execute a boolean operation between two solids.
///
/// A cutout that swallows the whole target is a kernel-reported empty
/// result, surfaced here as `OpError::EmptyResult` rather than being
/// silently clipped.
pub fn execute_boolean(
    kb: &mut dyn KernelBundle,
    body_a: &KernelSolidHandle,
    body_b: &KernelSolidHandle,
    kind: BooleanKind,
) -> Result<OpResult, OpError> {
    let handle = match kind {
        BooleanKind::Union => kb.boolean_union(body_a, body_b)?,
        BooleanKind::Subtract => kb.boolean_subtract(body_a, body_b)?,
    };

    if kb.as_introspect().list_faces(&handle).is_empty() {
        let operation = match kind {
            BooleanKind::Union => "union",
            BooleanKind::Subtract => "subtraction",
        };
        return Err(OpError::EmptyResult {
            operation: operation.to_string(),
        });
    }

    tracing::debug!(?kind, result = handle.id(), "boolean executed");
    Ok(OpResult::new(handle))
}
