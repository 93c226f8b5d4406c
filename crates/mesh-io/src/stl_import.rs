//! STL import to RenderMesh.
//!
//! stl_io handles both ASCII and binary STL and returns an indexed
//! triangle mesh; we only have to flatten it into the RenderMesh layout
//! and compute per-vertex normals from the per-face ones.

use std::io::BufReader;
use std::path::Path;

use kernel_bridge::types::RenderMesh;

use crate::errors::ImportError;

/// Load an STL file as a RenderMesh.
pub fn import_stl(path: &Path) -> Result<RenderMesh, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound {
            path: path.display().to_string(),
        });
    }
    let file = std::fs::File::open(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut reader = BufReader::new(file);

    let mesh = stl_io::read_stl(&mut reader).map_err(|e| ImportError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut vertices = Vec::with_capacity(mesh.vertices.len() * 3);
    let mut normals = vec![0.0f32; mesh.vertices.len() * 3];
    for v in &mesh.vertices {
        vertices.extend_from_slice(&[v[0], v[1], v[2]]);
    }

    let mut indices = Vec::with_capacity(mesh.faces.len() * 3);
    for face in &mesh.faces {
        for &vi in &face.vertices {
            indices.push(vi as u32);
            // Accumulate the face normal onto each touched vertex.
            normals[vi * 3] += face.normal[0];
            normals[vi * 3 + 1] += face.normal[1];
            normals[vi * 3 + 2] += face.normal[2];
        }
    }

    for n in normals.chunks_mut(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len > 1e-12 {
            n[0] /= len;
            n[1] /= len;
            n[2] /= len;
        }
    }

    tracing::debug!(
        path = %path.display(),
        triangles = mesh.faces.len(),
        "STL component loaded"
    );
    Ok(RenderMesh {
        vertices,
        normals,
        indices,
        face_ranges: vec![],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stl_export::write_stl_file;
    use kernel_bridge::types::RenderMesh;

    #[test]
    fn missing_file_is_not_found() {
        let err = import_stl(Path::new("/nonexistent/socket.stl")).unwrap_err();
        assert!(matches!(err, ImportError::NotFound { .. }));
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.stl");
        std::fs::write(&path, b"not an stl at all").unwrap();

        let err = import_stl(&path).unwrap_err();
        assert!(matches!(err, ImportError::Parse { .. }));
    }

    #[test]
    fn exported_mesh_reimports_with_same_triangle_count() {
        let mesh = RenderMesh {
            vertices: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
            normals: vec![0.0; 12],
            indices: vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 0, 3, 2],
            face_ranges: vec![],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tet.stl");
        write_stl_file(&mesh, &path).unwrap();

        let loaded = import_stl(&path).unwrap();
        assert_eq!(loaded.indices.len(), mesh.indices.len());
        assert_eq!(loaded.vertices.len() / 3, 4);
    }
}
