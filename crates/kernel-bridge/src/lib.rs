pub mod mock_kernel;
pub mod primitives;
pub mod tessellation;
pub mod traits;
pub mod truck_kernel;
mod truck_introspect;
pub mod types;

pub use mock_kernel::{MockKernel, MockOp};
pub use traits::{Kernel, KernelIntrospect};
pub use truck_kernel::TruckKernel;
pub use types::*;
