//! Tessellation wrapper with face-range metadata.
//!
//! Wraps truck-meshalgo to produce a RenderMesh with FaceRange entries
//! mapping triangle index ranges back to logical faces.

use crate::types::*;
use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::MeshableShape;

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a RenderMesh with per-face tracking.
pub fn tessellate_solid(
    solid: &TruckSolid,
    tolerance: f64,
    next_id: &mut u64,
) -> std::result::Result<RenderMesh, KernelError> {
    let meshed_solid = solid.triangulation(tolerance);

    let mut all_vertices: Vec<f32> = Vec::new();
    let mut all_normals: Vec<f32> = Vec::new();
    let mut all_indices: Vec<u32> = Vec::new();
    let mut face_ranges: Vec<FaceRange> = Vec::new();

    for shell in meshed_solid.boundaries().iter() {
        for face in shell.face_iter() {
            let face_id = KernelId(*next_id);
            *next_id += 1;

            let maybe_mesh: Option<PolygonMesh> = face.surface();
            let Some(face_mesh) = maybe_mesh else {
                continue;
            };

            // If face is inverted, the mesh needs inversion too
            let face_mesh = if !face.orientation() {
                let mut m = face_mesh;
                m.invert();
                m
            } else {
                face_mesh
            };

            let start_index = all_indices.len() as u32;
            let base_vertex = (all_vertices.len() / 3) as u32;

            let positions = face_mesh.positions();
            let normals = face_mesh.normals();
            let tri_faces = face_mesh.tri_faces();

            for pos in positions {
                all_vertices.push(pos[0] as f32);
                all_vertices.push(pos[1] as f32);
                all_vertices.push(pos[2] as f32);
            }

            if normals.is_empty() {
                for _ in 0..positions.len() {
                    all_normals.extend_from_slice(&[0.0, 0.0, 1.0]);
                }
            } else {
                for norm in normals {
                    all_normals.push(norm[0] as f32);
                    all_normals.push(norm[1] as f32);
                    all_normals.push(norm[2] as f32);
                }
            }

            for tri in tri_faces {
                for v in tri.iter() {
                    all_indices.push(v.pos as u32 + base_vertex);
                }
            }

            let end_index = all_indices.len() as u32;
            if end_index > start_index {
                face_ranges.push(FaceRange {
                    face_id,
                    start_index,
                    end_index,
                });
            }
        }
    }

    if all_vertices.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "solid produced an empty mesh".to_string(),
        });
    }

    Ok(RenderMesh {
        vertices: all_vertices,
        normals: all_normals,
        indices: all_indices,
        face_ranges,
    })
}
