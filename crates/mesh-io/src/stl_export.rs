//! STL export from RenderMesh — binary format.

use std::collections::HashMap;
use std::path::Path;

use kernel_bridge::types::RenderMesh;

use crate::errors::ExportError;

/// Export a RenderMesh as a binary STL file.
///
/// Binary STL format:
/// - 80-byte header (arbitrary text)
/// - u32 triangle count (little-endian)
/// - For each triangle: 3×f32 normal + 3×(3×f32 vertex) + u16 attribute = 50 bytes
///
/// The mesh must be watertight: every undirected edge shared by exactly
/// two triangles. Meshes that fail this gate are rejected rather than
/// written, since downstream slicers treat open shells as errors.
pub fn export_binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, ExportError> {
    let tri_count = mesh.indices.len() / 3;
    if tri_count == 0 {
        return Err(ExportError::EmptyMesh);
    }

    // Validate indices
    let vertex_count = mesh.vertices.len() / 3;
    for &idx in &mesh.indices {
        if idx as usize >= vertex_count {
            return Err(ExportError::IndexOutOfRange {
                index: idx,
                vertex_count,
            });
        }
    }

    check_watertight(mesh)?;

    let file_size = 80 + 4 + tri_count * 50;
    let mut buf = Vec::with_capacity(file_size);

    // 80-byte header
    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    // Triangle count
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    // Triangles
    for tri in mesh.indices.chunks(3) {
        let i0 = tri[0] as usize * 3;
        let i1 = tri[1] as usize * 3;
        let i2 = tri[2] as usize * 3;

        // Compute face normal from cross product
        let (ax, ay, az) = (
            mesh.vertices[i1] - mesh.vertices[i0],
            mesh.vertices[i1 + 1] - mesh.vertices[i0 + 1],
            mesh.vertices[i1 + 2] - mesh.vertices[i0 + 2],
        );
        let (bx, by, bz) = (
            mesh.vertices[i2] - mesh.vertices[i0],
            mesh.vertices[i2 + 1] - mesh.vertices[i0 + 1],
            mesh.vertices[i2 + 2] - mesh.vertices[i0 + 2],
        );
        let nx = ay * bz - az * by;
        let ny = az * bx - ax * bz;
        let nz = ax * by - ay * bx;
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-12 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0f32, 0.0, 1.0)
        };

        // Normal
        buf.extend_from_slice(&nx.to_le_bytes());
        buf.extend_from_slice(&ny.to_le_bytes());
        buf.extend_from_slice(&nz.to_le_bytes());

        // 3 vertices
        for &idx in tri {
            let vi = idx as usize * 3;
            buf.extend_from_slice(&mesh.vertices[vi].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 1].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 2].to_le_bytes());
        }

        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Serialize a RenderMesh to a binary STL file at `path`. The file stem
/// becomes the STL header name, so identical meshes written to the same
/// file name produce identical bytes.
pub fn write_stl_file(mesh: &RenderMesh, path: &Path) -> Result<(), ExportError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    let bytes = export_binary_stl(mesh, name)?;
    std::fs::write(path, &bytes).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), triangles = mesh.indices.len() / 3, "STL written");
    Ok(())
}

/// Every undirected edge must be shared by exactly two triangles.
fn check_watertight(mesh: &RenderMesh) -> Result<(), ExportError> {
    let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
    for tri in mesh.indices.chunks(3) {
        if tri.len() != 3 {
            return Err(ExportError::NotWatertight {
                reason: "index count is not a multiple of 3".to_string(),
            });
        }
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            *edge_counts.entry(key).or_insert(0) += 1;
        }
    }
    for (edge, count) in &edge_counts {
        if *count != 2 {
            return Err(ExportError::NotWatertight {
                reason: format!(
                    "edge ({}, {}) is shared by {} triangles, expected 2",
                    edge.0, edge.1, count
                ),
            });
        }
    }
    Ok(())
}
