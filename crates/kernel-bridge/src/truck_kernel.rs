//! TruckKernel — real geometry kernel wrapping truck's API.

use crate::primitives;
use crate::tessellation;
use crate::traits::Kernel;
use crate::types::*;
use case_types::{Axis, TransformStep};
use std::collections::HashMap;

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Solid, Wire};
use truck_modeling::{InnerSpace, Point3, Rad, Vector3};

/// Real geometry kernel backed by the truck B-rep library.
pub struct TruckKernel {
    next_handle: u64,
    next_id: u64,
    solids: HashMap<u64, Solid>,
    /// Standalone faces created by make_planar_face, awaiting extrude.
    standalone_faces: HashMap<u64, Face>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_id: 1,
            solids: HashMap::new(),
            standalone_faces: HashMap::new(),
        }
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register an externally built truck solid (used by the component
    /// importer) and return its handle.
    pub fn store_solid(&mut self, solid: Solid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    pub(crate) fn get_solid(&self, handle: &KernelSolidHandle) -> Option<&Solid> {
        self.solids.get(&handle.id())
    }

    fn require_solid(&self, handle: &KernelSolidHandle) -> Result<Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .cloned()
            .ok_or(KernelError::EntityNotFound {
                id: KernelId(handle.id()),
            })
    }

    /// Build one truck wire from a closed path in plane coordinates.
    fn build_wire(
        path: &WirePath,
        to_3d: &dyn Fn([f64; 2]) -> Point3,
    ) -> Result<Wire, KernelError> {
        if !path.is_closed() {
            return Err(KernelError::FaceFailed {
                reason: "boundary path is not closed".to_string(),
            });
        }

        // Create all endpoint vertices first so edges share endpoints;
        // the final segment reuses the start vertex to close the loop.
        let n = path.segments.len();
        let start_vertex = builder::vertex(to_3d(path.start));
        let mut vertices = Vec::with_capacity(n);
        for (i, seg) in path.segments.iter().enumerate() {
            if i + 1 == n {
                vertices.push(start_vertex.clone());
            } else {
                vertices.push(builder::vertex(to_3d(seg.end())));
            }
        }

        let mut wire_edges: Vec<Edge> = Vec::with_capacity(n);
        let mut prev = start_vertex;
        for (seg, vertex) in path.segments.iter().zip(&vertices) {
            let edge = match *seg {
                PathSegment::LineTo { .. } => builder::line(&prev, vertex),
                PathSegment::ArcTo { via, .. } => builder::circle_arc(&prev, vertex, to_3d(via)),
            };
            wire_edges.push(edge);
            prev = vertex.clone();
        }

        Ok(Wire::from_iter(wire_edges))
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
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
        let solid = primitives::make_box_centered(width, depth, height);
        Ok(self.store_solid(solid))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<KernelSolidHandle, KernelError> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(KernelError::Other {
                message: format!("degenerate cylinder r={radius} h={height}"),
            });
        }
        let solid = primitives::make_cylinder_centered(radius, height);
        Ok(self.store_solid(solid))
    }

    fn make_planar_face(&mut self, face: &PlanarFace) -> Result<KernelId, KernelError> {
        let origin = Point3::new(
            face.plane_origin[0],
            face.plane_origin[1],
            face.plane_origin[2],
        );
        let normal = Vector3::new(
            face.plane_normal[0],
            face.plane_normal[1],
            face.plane_normal[2],
        );
        let x_axis = Vector3::new(
            face.plane_x_axis[0],
            face.plane_x_axis[1],
            face.plane_x_axis[2],
        );
        if normal.magnitude() < 1e-12 || x_axis.magnitude() < 1e-12 {
            return Err(KernelError::FaceFailed {
                reason: "degenerate plane frame".to_string(),
            });
        }
        let normal = normal.normalize();
        let x_axis = x_axis.normalize();
        let y_axis = normal.cross(x_axis).normalize();
        let to_3d = move |p: [f64; 2]| origin + x_axis * p[0] + y_axis * p[1];

        let mut wires = vec![Self::build_wire(&face.outer, &to_3d)?];
        for hole in &face.holes {
            wires.push(Self::build_wire(hole, &to_3d)?);
        }

        let truck_face =
            builder::try_attach_plane(&wires).map_err(|e| KernelError::FaceFailed {
                reason: format!("failed to attach plane: {e}"),
            })?;

        let face_id = self.alloc_id();
        self.standalone_faces.insert(face_id.0, truck_face);
        Ok(face_id)
    }

    fn extrude_face(
        &mut self,
        face: KernelId,
        direction: [f64; 3],
        depth: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let truck_face = self
            .standalone_faces
            .remove(&face.0)
            .ok_or(KernelError::EntityNotFound { id: face })?;

        let dir = Vector3::new(direction[0], direction[1], direction[2]);
        let dir_len = dir.magnitude();
        if dir_len < 1e-12 {
            return Err(KernelError::Other {
                message: "extrude direction has zero length".to_string(),
            });
        }
        let sweep_vec = dir.normalize() * depth;

        let solid = builder::tsweep(&truck_face, sweep_vec);
        Ok(self.store_solid(solid))
    }

    fn boolean_union(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.require_solid(a)?;
        let solid_b = self.require_solid(b)?;

        let result = truck_shapeops::or(&solid_a, &solid_b, 0.05).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn boolean_subtract(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.require_solid(a)?;
        let mut solid_b = self.require_solid(b)?;

        // Subtraction = A ∩ ¬B. not() mutates in place.
        solid_b.not();
        let result = truck_shapeops::and(&solid_a, &solid_b, 0.05).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck and() returned None for subtraction".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn fillet_edges(
        &mut self,
        _solid: &KernelSolidHandle,
        _edges: &[KernelId],
        _radius: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        // truck has no B-rep fillet; shell edge rounding requires a
        // backend that provides one. See DESIGN.md.
        Err(KernelError::NotSupported {
            operation: "fillet_edges".to_string(),
        })
    }

    fn chamfer_edges(
        &mut self,
        _solid: &KernelSolidHandle,
        _edges: &[KernelId],
        _distance: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "chamfer_edges".to_string(),
        })
    }

    fn transform_solid(
        &mut self,
        solid: &KernelSolidHandle,
        steps: &[TransformStep],
    ) -> Result<KernelSolidHandle, KernelError> {
        let mut current = self.require_solid(solid)?;

        for step in steps {
            current = match *step {
                TransformStep::Translate { offset } => builder::translated(
                    &current,
                    Vector3::new(offset.x, offset.y, offset.z),
                ),
                TransformStep::Rotate { axis, degrees } => {
                    let axis_vec = match axis {
                        Axis::X => Vector3::unit_x(),
                        Axis::Y => Vector3::unit_y(),
                        Axis::Z => Vector3::unit_z(),
                    };
                    builder::rotated(
                        &current,
                        Point3::new(0.0, 0.0, 0.0),
                        axis_vec,
                        Rad(degrees.to_radians()),
                    )
                }
            };
        }

        Ok(self.store_solid(current))
    }

    fn tessellate(
        &mut self,
        solid: &KernelSolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let truck_solid = self
            .solids
            .get(&solid.id())
            .ok_or(KernelError::EntityNotFound {
                id: KernelId(solid.id()),
            })?;

        tessellation::tessellate_solid(truck_solid, tolerance, &mut self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_path(w: f64, h: f64) -> WirePath {
        WirePath {
            start: [-w / 2.0, -h / 2.0],
            segments: vec![
                PathSegment::LineTo { to: [w / 2.0, -h / 2.0] },
                PathSegment::LineTo { to: [w / 2.0, h / 2.0] },
                PathSegment::LineTo { to: [-w / 2.0, h / 2.0] },
                PathSegment::LineTo { to: [-w / 2.0, -h / 2.0] },
            ],
        }
    }

    fn xy_face(outer: WirePath, holes: Vec<WirePath>) -> PlanarFace {
        PlanarFace {
            outer,
            holes,
            plane_origin: [0.0, 0.0, 0.0],
            plane_normal: [0.0, 0.0, 1.0],
            plane_x_axis: [1.0, 0.0, 0.0],
        }
    }

    #[test]
    fn make_face_and_extrude_rectangle() {
        let mut kernel = TruckKernel::new();
        let face_id = kernel.make_planar_face(&xy_face(rect_path(2.0, 3.0), vec![])).unwrap();
        let handle = kernel.extrude_face(face_id, [0.0, 0.0, 1.0], 2.0).unwrap();

        let solid = kernel.get_solid(&handle).unwrap();
        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1);
        let faces: Vec<_> = boundaries[0].face_iter().collect();
        assert_eq!(faces.len(), 6, "extruded rectangle should have 6 faces");
    }

    #[test]
    fn open_path_is_rejected() {
        let mut kernel = TruckKernel::new();
        let open = WirePath {
            start: [0.0, 0.0],
            segments: vec![
                PathSegment::LineTo { to: [1.0, 0.0] },
                PathSegment::LineTo { to: [1.0, 1.0] },
            ],
        };
        let err = kernel.make_planar_face(&xy_face(open, vec![])).unwrap_err();
        assert!(matches!(err, KernelError::FaceFailed { .. }));
    }

    #[test]
    fn rounded_corner_path_builds_face() {
        let mut kernel = TruckKernel::new();
        // Unit square with one corner replaced by a quarter arc of r=0.25.
        let r = 0.25;
        let (s45, c45) = std::f64::consts::FRAC_PI_4.sin_cos();
        let via = [1.0 - r + r * c45, 1.0 - r + r * s45];
        let path = WirePath {
            start: [0.0, 0.0],
            segments: vec![
                PathSegment::LineTo { to: [1.0, 0.0] },
                PathSegment::LineTo { to: [1.0, 1.0 - r] },
                PathSegment::ArcTo { via, to: [1.0 - r, 1.0] },
                PathSegment::LineTo { to: [0.0, 1.0] },
                PathSegment::LineTo { to: [0.0, 0.0] },
            ],
        };
        let face_id = kernel.make_planar_face(&xy_face(path, vec![])).unwrap();
        let handle = kernel.extrude_face(face_id, [0.0, 0.0, 1.0], 0.5).unwrap();
        assert!(kernel.get_solid(&handle).is_some());
    }

    #[test]
    fn face_with_hole_extrudes() {
        let mut kernel = TruckKernel::new();
        let face = xy_face(rect_path(10.0, 10.0), vec![rect_path(2.0, 2.0)]);
        let face_id = kernel.make_planar_face(&face).unwrap();
        let handle = kernel.extrude_face(face_id, [0.0, 0.0, 1.0], 1.0).unwrap();

        let solid = kernel.get_solid(&handle).unwrap();
        let faces: Vec<_> = solid.boundaries()[0].face_iter().collect();
        assert!(faces.len() > 6, "hollow extrusion has more than 6 faces");
    }

    #[test]
    fn transform_translates_solid() {
        let mut kernel = TruckKernel::new();
        let handle = kernel.make_box(2.0, 2.0, 2.0).unwrap();
        let moved = kernel
            .transform_solid(
                &handle,
                &[TransformStep::Translate {
                    offset: case_types::Vec3::new(5.0, 0.0, 0.0),
                }],
            )
            .unwrap();

        let solid = kernel.get_solid(&moved).unwrap();
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        for v in solid.boundaries()[0].vertex_iter() {
            min_x = min_x.min(v.point()[0]);
            max_x = max_x.max(v.point()[0]);
        }
        assert!((min_x - 4.0).abs() < 1e-10);
        assert!((max_x - 6.0).abs() < 1e-10);

        // Original solid untouched
        let orig = kernel.get_solid(&handle).unwrap();
        let mut omin = f64::MAX;
        for v in orig.boundaries()[0].vertex_iter() {
            omin = omin.min(v.point()[0]);
        }
        assert!((omin + 1.0).abs() < 1e-10);
    }

    #[test]
    fn transform_rotates_about_the_origin() {
        let mut kernel = TruckKernel::new();
        let handle = kernel.make_box(2.0, 4.0, 6.0).unwrap();
        let rotated = kernel
            .transform_solid(
                &handle,
                &[TransformStep::Rotate {
                    axis: Axis::Z,
                    degrees: 90.0,
                }],
            )
            .unwrap();

        // A quarter turn about Z swaps the X and Y extents.
        let solid = kernel.get_solid(&rotated).unwrap();
        let mut max = [f64::MIN; 3];
        for v in solid.boundaries()[0].vertex_iter() {
            for i in 0..3 {
                max[i] = max[i].max(v.point()[i]);
            }
        }
        assert!((max[0] - 2.0).abs() < 1e-10);
        assert!((max[1] - 1.0).abs() < 1e-10);
        assert!((max[2] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn fillet_is_not_supported_by_truck_backend() {
        let mut kernel = TruckKernel::new();
        let handle = kernel.make_box(1.0, 1.0, 1.0).unwrap();
        let err = kernel.fillet_edges(&handle, &[], 2.0).unwrap_err();
        assert!(matches!(err, KernelError::NotSupported { .. }));
    }
}
