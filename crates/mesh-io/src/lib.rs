//! Mesh and component file I/O.
//!
//! Exports terminal solids as binary STL (with a watertightness gate)
//! and imports externally authored components in either a discrete-mesh
//! format (STL) or a boundary-exchange format (STEP), for fit-check
//! placement.

pub mod component;
pub mod errors;
pub mod step_import;
pub mod stl_export;
pub mod stl_import;

pub use component::load_component;
pub use errors::{ExportError, ImportError};
pub use step_import::import_step;
pub use stl_export::{export_binary_stl, write_stl_file};
pub use stl_import::import_stl;
