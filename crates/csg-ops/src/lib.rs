//! Modeling operations on top of the kernel bridge.
//!
//! Each operation takes the working solid as an explicit value and
//! returns the new solid handle; nothing here mutates a shared model
//! state. Selections are resolved against the solid they will be
//! applied to, immediately before the operation, because every boolean
//! and fillet invalidates previously computed entity ids.

pub mod boolean;
pub mod chamfer;
pub mod extrude;
pub mod fillet;
pub mod kernel_ext;
pub mod select;
pub mod transform;
pub mod types;

pub use boolean::{execute_boolean, BooleanKind};
pub use chamfer::execute_chamfer;
pub use extrude::execute_extrude;
pub use fillet::execute_fillet;
pub use kernel_ext::KernelBundle;
pub use select::{EdgeQuery, SelectionError, VertexQuery};
pub use transform::execute_transform;
pub use types::*;
