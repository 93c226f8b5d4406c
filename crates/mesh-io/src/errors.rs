/// Errors during component import.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImportError {
    #[error("component file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("unsupported component format: {extension}")]
    UnsupportedFormat { extension: String },
}

/// Errors during mesh export.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("mesh is not watertight: {reason}")]
    NotWatertight { reason: String },

    #[error("failed to write {path}: {reason}")]
    Io { path: String, reason: String },
}
