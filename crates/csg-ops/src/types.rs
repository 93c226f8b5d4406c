use kernel_bridge::KernelSolidHandle;

use crate::select::SelectionError;

/// Result of a modeling operation: the new working solid, plus any
/// non-fatal warnings.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// Handle to the solid in the kernel. Runtime-only, not persisted.
    pub handle: KernelSolidHandle,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl OpResult {
    pub fn new(handle: KernelSolidHandle) -> Self {
        Self {
            handle,
            warnings: Vec::new(),
        }
    }
}

/// Errors from modeling operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("kernel error: {0}")]
    Kernel(#[from] kernel_bridge::KernelError),

    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("{operation} produced an empty solid")]
    EmptyResult { operation: String },
}
