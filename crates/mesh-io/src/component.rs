//! Component loading by file extension.

use std::path::Path;

use kernel_bridge::types::RenderMesh;

use crate::errors::ImportError;
use crate::{step_import, stl_import};

/// Load an externally authored component as a positionable mesh.
///
/// Dispatches on the file extension: `.stl` for discrete meshes,
/// `.step`/`.stp` for boundary-exchange solids.
pub fn load_component(path: &Path) -> Result<RenderMesh, ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "stl" => stl_import::import_stl(path),
        "step" | "stp" => step_import::import_step(path),
        other => Err(ImportError::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_component(Path::new("tube.obj")).unwrap_err();
        assert!(matches!(
            err,
            ImportError::UnsupportedFormat { extension } if extension == "obj"
        ));
    }

    #[test]
    fn missing_stl_component_is_not_found() {
        let err = load_component(Path::new("/nonexistent/in14.stl")).unwrap_err();
        assert!(matches!(err, ImportError::NotFound { .. }));
    }
}
