pub mod placement;
pub mod topo;
pub mod transform;
pub mod units;

pub use placement::*;
pub use topo::*;
pub use transform::*;
pub use units::*;
