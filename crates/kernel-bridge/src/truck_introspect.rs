//! KernelIntrospect for TruckKernel.
//!
//! Entity ids encode handle and ordinal: faces at `handle*10000 + i`,
//! edges at `handle*10000 + 1000 + i`, vertices at `handle*10000 + 2000
//! + i`, where `i` is the position in the deduplicated shell iteration
//! order. Ids are therefore only meaningful for the solid that produced
//! them.

use crate::traits::KernelIntrospect;
use crate::truck_kernel::TruckKernel;
use crate::types::*;

use truck_modeling::topology::{Edge, Face, Solid, Vertex};
use truck_modeling::Surface;

const EDGE_BASE: u64 = 1000;
const VERT_BASE: u64 = 2000;

impl KernelIntrospect for TruckKernel {
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        let Some(truck_solid) = self.get_solid(solid) else {
            return Vec::new();
        };
        let mut ids = Vec::new();
        for shell in truck_solid.boundaries().iter() {
            for (i, _face) in shell.face_iter().enumerate() {
                ids.push(KernelId(solid.id() * 10000 + i as u64));
            }
        }
        ids
    }

    fn list_edges(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        let Some(truck_solid) = self.get_solid(solid) else {
            return Vec::new();
        };
        let mut seen = std::collections::HashSet::new();
        let mut ids = Vec::new();
        let mut idx = 0u64;
        for shell in truck_solid.boundaries().iter() {
            for edge in shell.edge_iter() {
                if seen.insert(edge.id()) {
                    ids.push(KernelId(solid.id() * 10000 + EDGE_BASE + idx));
                    idx += 1;
                }
            }
        }
        ids
    }

    fn list_vertices(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        let Some(truck_solid) = self.get_solid(solid) else {
            return Vec::new();
        };
        let mut seen = std::collections::HashSet::new();
        let mut ids = Vec::new();
        let mut idx = 0u64;
        for shell in truck_solid.boundaries().iter() {
            for v in shell.vertex_iter() {
                if seen.insert(v.id()) {
                    ids.push(KernelId(solid.id() * 10000 + VERT_BASE + idx));
                    idx += 1;
                }
            }
        }
        ids
    }

    fn compute_signature(&self, entity: KernelId, kind: TopoKind) -> TopoSignature {
        let handle = KernelSolidHandle(entity.0 / 10000);
        let Some(truck_solid) = self.get_solid(&handle) else {
            return TopoSignature::empty();
        };

        match kind {
            TopoKind::Face => {
                let face_idx = (entity.0 % 10000) as usize;
                if let Some(face) = nth_face(truck_solid, face_idx) {
                    return face_signature(face);
                }
            }
            TopoKind::Edge => {
                let edge_offset = (entity.0 % 10000).saturating_sub(EDGE_BASE) as usize;
                if let Some(edge) = nth_unique_edge(truck_solid, edge_offset) {
                    return edge_signature(&edge);
                }
            }
            TopoKind::Vertex => {
                let vert_offset = (entity.0 % 10000).saturating_sub(VERT_BASE) as usize;
                if let Some(vertex) = nth_unique_vertex(truck_solid, vert_offset) {
                    return vertex_signature(&vertex);
                }
            }
        }
        TopoSignature::empty()
    }

    fn compute_all_signatures(
        &self,
        solid: &KernelSolidHandle,
        kind: TopoKind,
    ) -> Vec<(KernelId, TopoSignature)> {
        let ids = match kind {
            TopoKind::Face => self.list_faces(solid),
            TopoKind::Edge => self.list_edges(solid),
            TopoKind::Vertex => self.list_vertices(solid),
        };
        ids.into_iter()
            .map(|id| (id, self.compute_signature(id, kind)))
            .collect()
    }
}

fn nth_face(solid: &Solid, idx: usize) -> Option<&Face> {
    let mut i = 0usize;
    for shell in solid.boundaries().iter() {
        for face in shell.face_iter() {
            if i == idx {
                return Some(face);
            }
            i += 1;
        }
    }
    None
}

fn nth_unique_edge(solid: &Solid, idx: usize) -> Option<Edge> {
    let mut seen = std::collections::HashSet::new();
    let mut i = 0usize;
    for shell in solid.boundaries().iter() {
        for edge in shell.edge_iter() {
            if seen.insert(edge.id()) {
                if i == idx {
                    return Some(edge.clone());
                }
                i += 1;
            }
        }
    }
    None
}

fn nth_unique_vertex(solid: &Solid, idx: usize) -> Option<Vertex> {
    let mut seen = std::collections::HashSet::new();
    let mut i = 0usize;
    for shell in solid.boundaries().iter() {
        for v in shell.vertex_iter() {
            if seen.insert(v.id()) {
                if i == idx {
                    return Some(v.clone());
                }
                i += 1;
            }
        }
    }
    None
}

fn face_signature(face: &Face) -> TopoSignature {
    let surface = face.oriented_surface();
    let surface_type = classify_surface(&surface);
    let (centroid, normal) = sample_face_center(face, &surface);

    TopoSignature {
        surface_type: Some(surface_type),
        area: None,
        centroid: Some(centroid),
        normal: Some(normal),
        direction: None,
        length: None,
    }
}

/// Edge direction is the normalized chord between endpoints; exact for
/// straight edges, which is all the selection layer filters on.
fn edge_signature(edge: &Edge) -> TopoSignature {
    let front = edge.front().point();
    let back = edge.back().point();

    let centroid = [
        (front[0] + back[0]) / 2.0,
        (front[1] + back[1]) / 2.0,
        (front[2] + back[2]) / 2.0,
    ];

    let d = [back[0] - front[0], back[1] - front[1], back[2] - front[2]];
    let length = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
    let direction = if length > 1e-12 {
        Some([d[0] / length, d[1] / length, d[2] / length])
    } else {
        None
    };

    TopoSignature {
        surface_type: Some("line".to_string()),
        area: None,
        centroid: Some(centroid),
        normal: None,
        direction,
        length: Some(length),
    }
}

fn vertex_signature(vertex: &Vertex) -> TopoSignature {
    let p = vertex.point();
    TopoSignature {
        surface_type: Some("point".to_string()),
        area: None,
        centroid: Some([p[0], p[1], p[2]]),
        normal: None,
        direction: None,
        length: None,
    }
}

fn classify_surface(surface: &Surface) -> String {
    match surface {
        Surface::Plane(_) => "planar".to_string(),
        Surface::RevolutedCurve(_) => "revolved".to_string(),
        Surface::BSplineSurface(_) => "nurbs".to_string(),
        Surface::NurbsSurface(_) => "nurbs".to_string(),
    }
}

fn sample_face_center(face: &Face, surface: &Surface) -> ([f64; 3], [f64; 3]) {
    match surface {
        Surface::Plane(plane) => {
            let p = plane.origin();
            let n = plane.normal();
            ([p[0], p[1], p[2]], [n[0], n[1], n[2]])
        }
        _ => {
            // For non-planar surfaces, average the boundary vertices.
            let mut c = [0.0; 3];
            let mut count = 0.0;
            for wire in face.boundaries() {
                for v in wire.vertex_iter() {
                    let p = v.point();
                    c[0] += p[0];
                    c[1] += p[1];
                    c[2] += p[2];
                    count += 1.0;
                }
            }
            if count > 0.0 {
                ([c[0] / count, c[1] / count, c[2] / count], [0.0, 0.0, 1.0])
            } else {
                ([0.0; 3], [0.0, 0.0, 1.0])
            }
        }
    }
}
