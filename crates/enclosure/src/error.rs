use crate::params::ParameterError;
use crate::profile::ProfileError;
use case_types::TableError;
use csg_ops::OpError;

/// A failed kernel operation, tagged with the build step it belongs to.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{step}: {source}")]
pub struct ConstructionError {
    pub step: &'static str,
    #[source]
    pub source: OpError,
}

impl ConstructionError {
    pub fn new(step: &'static str, source: OpError) -> Self {
        Self { step, source }
    }
}

/// Top-level build failure. Any variant aborts the whole build; nothing
/// partial is exported.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    #[error("placement table error: {0}")]
    Placement(#[from] TableError),

    #[error("import error: {0}")]
    Import(#[from] mesh_io::ImportError),

    #[error("export error: {0}")]
    Export(#[from] mesh_io::ExportError),
}
