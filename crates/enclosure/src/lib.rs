//! Parametric generator for a multi-part hardware enclosure.
//!
//! From a small set of named dimensions this crate builds the solid
//! geometry of a hollow display enclosure: the shell with its viewing
//! window and connector openings, a front and a rear panel, and the
//! internal standoffs, then places externally supplied component models
//! for fit verification and exports the manufacturable solids as STL.

pub mod assembly;
pub mod build;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod placement;
pub mod profile;
pub mod revision;

pub use build::{run_build, BuildOptions, BuildOutput};
pub use error::BuildError;
pub use params::{ParamSet, ParameterError, ResolvedParams};
pub use profile::{Profile, ProfileError};
pub use revision::DesignRevision;
