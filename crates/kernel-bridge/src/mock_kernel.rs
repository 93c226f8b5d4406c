//! MockKernel — deterministic test double implementing Kernel +
//! KernelIntrospect.
//!
//! Produces synthetic topology with predictable entity counts and
//! signatures, and records every construction call in an op log so tests
//! can assert on the exact build sequence. Every operation reallocates
//! entity ids, mirroring the real kernel's behavior of invalidating
//! selections after each boolean.

use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;
use case_types::TransformStep;
use std::collections::HashMap;

/// A recorded kernel call, for sequence assertions in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum MockOp {
    MakeBox {
        width: f64,
        depth: f64,
        height: f64,
    },
    MakeCylinder {
        radius: f64,
        height: f64,
    },
    ExtrudeFace {
        /// Outer-boundary extent in plane coordinates.
        width: f64,
        height: f64,
        depth: f64,
        direction: [f64; 3],
        plane_origin: [f64; 3],
        /// Number of arc segments in the outer boundary.
        arc_segments: usize,
        /// Number of hole boundaries in the face.
        holes: usize,
    },
    Union,
    Subtract,
    Fillet {
        edge_count: usize,
        radius: f64,
    },
    Chamfer {
        edge_count: usize,
        distance: f64,
    },
    Transform {
        step_count: usize,
    },
}

#[derive(Debug, Clone)]
struct MockVertex {
    id: KernelId,
    position: [f64; 3],
}

#[derive(Debug, Clone)]
struct MockEdge {
    id: KernelId,
    start: [f64; 3],
    end: [f64; 3],
}

#[derive(Debug, Clone)]
struct MockFace {
    id: KernelId,
    normal: [f64; 3],
    centroid: [f64; 3],
    area: f64,
    surface_type: String,
}

#[derive(Debug, Clone)]
struct MockSolid {
    vertices: Vec<MockVertex>,
    edges: Vec<MockEdge>,
    faces: Vec<MockFace>,
    bbox: [f64; 6],
}

#[derive(Debug, Clone)]
struct MockPlanarFace {
    face: PlanarFace,
    bounds: [f64; 4],
    arc_segments: usize,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_id: u64,
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    standalone_faces: HashMap<u64, MockPlanarFace>,
    oplog: Vec<MockOp>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            next_handle: 1,
            solids: HashMap::new(),
            standalone_faces: HashMap::new(),
            oplog: Vec::new(),
        }
    }

    /// Every kernel call made so far, in order.
    pub fn oplog(&self) -> &[MockOp] {
        &self.oplog
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn store(&mut self, solid: MockSolid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn require(&self, handle: &KernelSolidHandle) -> Result<MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .cloned()
            .ok_or(KernelError::EntityNotFound {
                id: KernelId(handle.id()),
            })
    }

    /// Build an axis-aligned hexahedron from 8 corner positions laid out
    /// as two quads: bottom 0..4 (counter-clockwise), top 4..8 above them.
    fn hexahedron(&mut self, corners: [[f64; 3]; 8]) -> MockSolid {
        let vertices: Vec<MockVertex> = corners
            .iter()
            .map(|&position| MockVertex {
                id: self.alloc_id(),
                position,
            })
            .collect();

        let edge_pairs = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        let edges: Vec<MockEdge> = edge_pairs
            .iter()
            .map(|&(s, e)| MockEdge {
                id: self.alloc_id(),
                start: corners[s],
                end: corners[e],
            })
            .collect();

        // Face quads with outward winding; normals from the cross product.
        let face_quads = [
            [0, 3, 2, 1],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
            [1, 2, 6, 5],
        ];
        let faces: Vec<MockFace> = face_quads
            .iter()
            .map(|quad| {
                let pts: Vec<[f64; 3]> = quad.iter().map(|&i| corners[i]).collect();
                let centroid = [
                    (pts[0][0] + pts[1][0] + pts[2][0] + pts[3][0]) / 4.0,
                    (pts[0][1] + pts[1][1] + pts[2][1] + pts[3][1]) / 4.0,
                    (pts[0][2] + pts[1][2] + pts[2][2] + pts[3][2]) / 4.0,
                ];
                let u = sub(pts[1], pts[0]);
                let v = sub(pts[3], pts[0]);
                let n = cross(u, v);
                let area = norm(n);
                MockFace {
                    id: self.alloc_id(),
                    normal: normalize(n),
                    centroid,
                    area,
                    surface_type: "planar".to_string(),
                }
            })
            .collect();

        let bbox = bbox_of(&corners);
        MockSolid {
            vertices,
            edges,
            faces,
            bbox,
        }
    }

    /// Merge two solids into one, reallocating every entity id.
    fn merge(&mut self, a: &MockSolid, b: &MockSolid, bbox: [f64; 6]) -> MockSolid {
        let mut vertices = Vec::with_capacity(a.vertices.len() + b.vertices.len());
        let mut edges = Vec::with_capacity(a.edges.len() + b.edges.len());
        let mut faces = Vec::with_capacity(a.faces.len() + b.faces.len());

        for v in a.vertices.iter().chain(&b.vertices) {
            vertices.push(MockVertex {
                id: self.alloc_id(),
                position: v.position,
            });
        }
        for e in a.edges.iter().chain(&b.edges) {
            edges.push(MockEdge {
                id: self.alloc_id(),
                start: e.start,
                end: e.end,
            });
        }
        for f in a.faces.iter().chain(&b.faces) {
            faces.push(MockFace {
                id: self.alloc_id(),
                normal: f.normal,
                centroid: f.centroid,
                area: f.area,
                surface_type: f.surface_type.clone(),
            });
        }

        MockSolid {
            vertices,
            edges,
            faces,
            bbox,
        }
    }

    fn find_edge(&self, solid: &MockSolid, id: KernelId) -> Option<MockEdge> {
        solid.edges.iter().find(|e| e.id == id).cloned()
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_box(
        &mut self,
        width: f64,
        depth: f64,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        if width <= 0.0 || depth <= 0.0 || height <= 0.0 {
            return Err(KernelError::Other {
                message: format!("degenerate box {width} x {depth} x {height}"),
            });
        }
        let (w, d, h) = (width / 2.0, depth / 2.0, height / 2.0);
        let corners = [
            [-w, -d, -h],
            [w, -d, -h],
            [w, d, -h],
            [-w, d, -h],
            [-w, -d, h],
            [w, -d, h],
            [w, d, h],
            [-w, d, h],
        ];
        let solid = self.hexahedron(corners);
        self.oplog.push(MockOp::MakeBox {
            width,
            depth,
            height,
        });
        Ok(self.store(solid))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<KernelSolidHandle, KernelError> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(KernelError::Other {
                message: format!("degenerate cylinder r={radius} h={height}"),
            });
        }
        let h = height / 2.0;
        let vertices = vec![
            MockVertex {
                id: self.alloc_id(),
                position: [radius, 0.0, -h],
            },
            MockVertex {
                id: self.alloc_id(),
                position: [radius, 0.0, h],
            },
        ];
        // Two rim circles, represented as closed edges (start == end).
        let edges = vec![
            MockEdge {
                id: self.alloc_id(),
                start: [radius, 0.0, -h],
                end: [radius, 0.0, -h],
            },
            MockEdge {
                id: self.alloc_id(),
                start: [radius, 0.0, h],
                end: [radius, 0.0, h],
            },
        ];
        let faces = vec![
            MockFace {
                id: self.alloc_id(),
                normal: [0.0, 0.0, -1.0],
                centroid: [0.0, 0.0, -h],
                area: std::f64::consts::PI * radius * radius,
                surface_type: "planar".to_string(),
            },
            MockFace {
                id: self.alloc_id(),
                normal: [0.0, 0.0, 1.0],
                centroid: [0.0, 0.0, h],
                area: std::f64::consts::PI * radius * radius,
                surface_type: "planar".to_string(),
            },
            MockFace {
                id: self.alloc_id(),
                normal: [1.0, 0.0, 0.0],
                centroid: [0.0, 0.0, 0.0],
                area: 2.0 * std::f64::consts::PI * radius * height,
                surface_type: "cylindrical".to_string(),
            },
        ];
        let solid = MockSolid {
            vertices,
            edges,
            faces,
            bbox: [-radius, -radius, -h, radius, radius, h],
        };
        self.oplog.push(MockOp::MakeCylinder { radius, height });
        Ok(self.store(solid))
    }

    fn make_planar_face(&mut self, face: &PlanarFace) -> Result<KernelId, KernelError> {
        if !face.outer.is_closed() {
            return Err(KernelError::FaceFailed {
                reason: "boundary path is not closed".to_string(),
            });
        }
        for hole in &face.holes {
            if !hole.is_closed() {
                return Err(KernelError::FaceFailed {
                    reason: "hole path is not closed".to_string(),
                });
            }
        }

        let arc_segments = face
            .outer
            .segments
            .iter()
            .filter(|s| matches!(s, PathSegment::ArcTo { .. }))
            .count();
        let id = self.alloc_id();
        self.standalone_faces.insert(
            id.0,
            MockPlanarFace {
                face: face.clone(),
                bounds: face.outer.bounds(),
                arc_segments,
            },
        );
        Ok(id)
    }

    fn extrude_face(
        &mut self,
        face: KernelId,
        direction: [f64; 3],
        depth: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let mock_face = self
            .standalone_faces
            .remove(&face.0)
            .ok_or(KernelError::EntityNotFound { id: face })?;

        let dir_len = norm(direction);
        if dir_len < 1e-12 {
            return Err(KernelError::Other {
                message: "extrude direction has zero length".to_string(),
            });
        }
        let dir = normalize(direction);
        let sweep = [dir[0] * depth, dir[1] * depth, dir[2] * depth];

        let pf = &mock_face.face;
        let origin = pf.plane_origin;
        let x_axis = normalize(pf.plane_x_axis);
        let y_axis = normalize(cross(normalize(pf.plane_normal), x_axis));
        let [u0, v0, u1, v1] = mock_face.bounds;

        let corner = |u: f64, v: f64| {
            [
                origin[0] + x_axis[0] * u + y_axis[0] * v,
                origin[1] + x_axis[1] * u + y_axis[1] * v,
                origin[2] + x_axis[2] * u + y_axis[2] * v,
            ]
        };
        let base = [corner(u0, v0), corner(u1, v0), corner(u1, v1), corner(u0, v1)];
        let corners = [
            base[0],
            base[1],
            base[2],
            base[3],
            add(base[0], sweep),
            add(base[1], sweep),
            add(base[2], sweep),
            add(base[3], sweep),
        ];
        let solid = self.hexahedron(corners);

        self.oplog.push(MockOp::ExtrudeFace {
            width: u1 - u0,
            height: v1 - v0,
            depth,
            direction: dir,
            plane_origin: origin,
            arc_segments: mock_face.arc_segments,
            holes: pf.holes.len(),
        });
        Ok(self.store(solid))
    }

    fn boolean_union(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.require(a)?;
        let solid_b = self.require(b)?;
        let bbox = bbox_union(solid_a.bbox, solid_b.bbox);
        let merged = self.merge(&solid_a, &solid_b, bbox);
        self.oplog.push(MockOp::Union);
        Ok(self.store(merged))
    }

    fn boolean_subtract(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.require(a)?;
        let solid_b = self.require(b)?;

        self.oplog.push(MockOp::Subtract);

        // Tool swallowing the whole target leaves nothing: an empty
        // solid, which the ops layer reports as a construction failure.
        if bbox_contains(solid_b.bbox, solid_a.bbox) {
            return Ok(self.store(MockSolid {
                vertices: Vec::new(),
                edges: Vec::new(),
                faces: Vec::new(),
                bbox: [0.0; 6],
            }));
        }

        let bbox = solid_a.bbox;
        let merged = self.merge(&solid_a, &solid_b, bbox);
        Ok(self.store(merged))
    }

    fn fillet_edges(
        &mut self,
        solid: &KernelSolidHandle,
        edges: &[KernelId],
        radius: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let mock_solid = self.require(solid)?;

        let mut rounded = Vec::new();
        for &edge_id in edges {
            let edge = self
                .find_edge(&mock_solid, edge_id)
                .ok_or(KernelError::EntityNotFound { id: edge_id })?;
            rounded.push(edge);
        }

        // Replace each filleted edge with a cylindrical blend face, and
        // reallocate every id (fillets reorder kernel topology).
        let kept_edges: Vec<MockEdge> = mock_solid
            .edges
            .iter()
            .filter(|e| !edges.contains(&e.id))
            .cloned()
            .collect();

        let mut result = MockSolid {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            bbox: mock_solid.bbox,
        };
        for v in &mock_solid.vertices {
            result.vertices.push(MockVertex {
                id: self.alloc_id(),
                position: v.position,
            });
        }
        for e in &kept_edges {
            result.edges.push(MockEdge {
                id: self.alloc_id(),
                start: e.start,
                end: e.end,
            });
        }
        for f in &mock_solid.faces {
            result.faces.push(MockFace {
                id: self.alloc_id(),
                normal: f.normal,
                centroid: f.centroid,
                area: f.area,
                surface_type: f.surface_type.clone(),
            });
        }
        for e in &rounded {
            let mid = [
                (e.start[0] + e.end[0]) / 2.0,
                (e.start[1] + e.end[1]) / 2.0,
                (e.start[2] + e.end[2]) / 2.0,
            ];
            let length = norm(sub(e.end, e.start));
            result.faces.push(MockFace {
                id: self.alloc_id(),
                normal: [0.0, 0.0, 0.0],
                centroid: mid,
                area: std::f64::consts::FRAC_PI_2 * radius * length,
                surface_type: "cylindrical".to_string(),
            });
        }

        self.oplog.push(MockOp::Fillet {
            edge_count: edges.len(),
            radius,
        });
        Ok(self.store(result))
    }

    fn chamfer_edges(
        &mut self,
        solid: &KernelSolidHandle,
        edges: &[KernelId],
        distance: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        // Same topology rewrite as fillet, with planar bevel faces.
        let handle = self.fillet_edges(solid, edges, distance)?;
        self.oplog.pop();
        if let Some(result) = self.solids.get_mut(&handle.id()) {
            for f in result.faces.iter_mut().rev().take(edges.len()) {
                f.surface_type = "planar".to_string();
            }
        }
        self.oplog.push(MockOp::Chamfer {
            edge_count: edges.len(),
            distance,
        });
        Ok(handle)
    }

    fn transform_solid(
        &mut self,
        solid: &KernelSolidHandle,
        steps: &[TransformStep],
    ) -> Result<KernelSolidHandle, KernelError> {
        let mock_solid = self.require(solid)?;

        let full = case_types::Transform {
            steps: steps.to_vec(),
        };
        let rotation = case_types::Transform {
            steps: steps
                .iter()
                .filter(|s| matches!(s, TransformStep::Rotate { .. }))
                .copied()
                .collect(),
        };
        let apply =
            |p: [f64; 3]| -> [f64; 3] { full.apply_point(case_types::Vec3::from_array(p)).to_array() };
        let rotate_only = |p: [f64; 3]| -> [f64; 3] {
            rotation
                .apply_point(case_types::Vec3::from_array(p))
                .to_array()
        };

        let mut result = MockSolid {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            bbox: [0.0; 6],
        };
        let mut positions = Vec::new();
        for v in &mock_solid.vertices {
            let p = apply(v.position);
            positions.push(p);
            result.vertices.push(MockVertex {
                id: self.alloc_id(),
                position: p,
            });
        }
        for e in &mock_solid.edges {
            result.edges.push(MockEdge {
                id: self.alloc_id(),
                start: apply(e.start),
                end: apply(e.end),
            });
        }
        for f in &mock_solid.faces {
            result.faces.push(MockFace {
                id: self.alloc_id(),
                normal: rotate_only(f.normal),
                centroid: apply(f.centroid),
                area: f.area,
                surface_type: f.surface_type.clone(),
            });
        }
        result.bbox = if positions.is_empty() {
            mock_solid.bbox
        } else {
            let mut b = [f64::MAX, f64::MAX, f64::MAX, f64::MIN, f64::MIN, f64::MIN];
            for p in &positions {
                for i in 0..3 {
                    b[i] = b[i].min(p[i]);
                    b[i + 3] = b[i + 3].max(p[i]);
                }
            }
            b
        };

        self.oplog.push(MockOp::Transform {
            step_count: steps.len(),
        });
        Ok(self.store(result))
    }

    fn tessellate(
        &mut self,
        solid: &KernelSolidHandle,
        _tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let mock_solid = self.require(solid)?;
        if mock_solid.faces.is_empty() {
            return Err(KernelError::TessellationFailed {
                reason: "solid produced an empty mesh".to_string(),
            });
        }

        // Deterministic closed box mesh over the solid's bounding box:
        // 8 shared vertices, 12 triangles, watertight by construction.
        let [x0, y0, z0, x1, y1, z1] = mock_solid.bbox;
        let corners = [
            [x0, y0, z0],
            [x1, y0, z0],
            [x1, y1, z0],
            [x0, y1, z0],
            [x0, y0, z1],
            [x1, y0, z1],
            [x1, y1, z1],
            [x0, y1, z1],
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let cx = (x0 + x1) / 2.0;
        let cy = (y0 + y1) / 2.0;
        let cz = (z0 + z1) / 2.0;
        for c in &corners {
            vertices.extend_from_slice(&[c[0] as f32, c[1] as f32, c[2] as f32]);
            let n = normalize([c[0] - cx, c[1] - cy, c[2] - cz]);
            normals.extend_from_slice(&[n[0] as f32, n[1] as f32, n[2] as f32]);
        }

        #[rustfmt::skip]
        let indices: Vec<u32> = vec![
            0, 2, 1, 0, 3, 2, // bottom
            4, 5, 6, 4, 6, 7, // top
            0, 1, 5, 0, 5, 4, // front
            2, 3, 7, 2, 7, 6, // back
            3, 0, 4, 3, 4, 7, // left
            1, 2, 6, 1, 6, 5, // right
        ];

        let face_id = self.alloc_id();
        let face_ranges = vec![FaceRange {
            face_id,
            start_index: 0,
            end_index: indices.len() as u32,
        }];

        Ok(RenderMesh {
            vertices,
            normals,
            indices,
            face_ranges,
        })
    }
}

impl KernelIntrospect for MockKernel {
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.faces.iter().map(|f| f.id).collect())
            .unwrap_or_default()
    }

    fn list_edges(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.edges.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    fn list_vertices(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.vertices.iter().map(|v| v.id).collect())
            .unwrap_or_default()
    }

    fn compute_signature(&self, entity: KernelId, kind: TopoKind) -> TopoSignature {
        for solid in self.solids.values() {
            match kind {
                TopoKind::Face => {
                    if let Some(f) = solid.faces.iter().find(|f| f.id == entity) {
                        return TopoSignature {
                            surface_type: Some(f.surface_type.clone()),
                            area: Some(f.area),
                            centroid: Some(f.centroid),
                            normal: Some(f.normal),
                            direction: None,
                            length: None,
                        };
                    }
                }
                TopoKind::Edge => {
                    if let Some(e) = solid.edges.iter().find(|e| e.id == entity) {
                        let d = sub(e.end, e.start);
                        let length = norm(d);
                        return TopoSignature {
                            surface_type: Some("line".to_string()),
                            area: None,
                            centroid: Some([
                                (e.start[0] + e.end[0]) / 2.0,
                                (e.start[1] + e.end[1]) / 2.0,
                                (e.start[2] + e.end[2]) / 2.0,
                            ]),
                            normal: None,
                            direction: if length > 1e-12 {
                                Some(normalize(d))
                            } else {
                                None
                            },
                            length: Some(length),
                        };
                    }
                }
                TopoKind::Vertex => {
                    if let Some(v) = solid.vertices.iter().find(|v| v.id == entity) {
                        return TopoSignature {
                            surface_type: Some("point".to_string()),
                            area: None,
                            centroid: Some(v.position),
                            normal: None,
                            direction: None,
                            length: None,
                        };
                    }
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

fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: [f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

fn normalize(a: [f64; 3]) -> [f64; 3] {
    let n = norm(a);
    if n < 1e-12 {
        [0.0, 0.0, 0.0]
    } else {
        [a[0] / n, a[1] / n, a[2] / n]
    }
}

fn bbox_of(points: &[[f64; 3]]) -> [f64; 6] {
    let mut b = [f64::MAX, f64::MAX, f64::MAX, f64::MIN, f64::MIN, f64::MIN];
    for p in points {
        for i in 0..3 {
            b[i] = b[i].min(p[i]);
            b[i + 3] = b[i + 3].max(p[i]);
        }
    }
    b
}

fn bbox_union(a: [f64; 6], b: [f64; 6]) -> [f64; 6] {
    [
        a[0].min(b[0]),
        a[1].min(b[1]),
        a[2].min(b[2]),
        a[3].max(b[3]),
        a[4].max(b[4]),
        a[5].max(b[5]),
    ]
}

/// True when `outer` fully contains `inner`.
fn bbox_contains(outer: [f64; 6], inner: [f64; 6]) -> bool {
    outer[0] <= inner[0]
        && outer[1] <= inner[1]
        && outer[2] <= inner[2]
        && outer[3] >= inner[3]
        && outer[4] >= inner[4]
        && outer[5] >= inner[5]
}
