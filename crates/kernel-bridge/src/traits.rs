use crate::types::*;
use case_types::TransformStep;

/// Core geometry kernel capability set (primitive construction, booleans,
/// fillet/chamfer, profile faces, extrusion, rigid placement,
/// tessellation). Implemented by TruckKernel (real B-rep backend) and
/// MockKernel (deterministic test double).
pub trait Kernel {
    /// Create a box centered at the origin: width along X, depth along Y,
    /// height along Z.
    fn make_box(&mut self, width: f64, depth: f64, height: f64)
        -> Result<KernelSolidHandle, KernelError>;

    /// Create a cylinder centered at the origin with its axis along Z.
    fn make_cylinder(&mut self, radius: f64, height: f64)
        -> Result<KernelSolidHandle, KernelError>;

    /// Create a planar face from a closed boundary path plus holes.
    /// Fails on an open path.
    fn make_planar_face(&mut self, face: &PlanarFace) -> Result<KernelId, KernelError>;

    /// Extrude a planar face along a direction vector by a signed depth.
    fn extrude_face(
        &mut self,
        face: KernelId,
        direction: [f64; 3],
        depth: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn boolean_union(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean subtraction: a minus b.
    fn boolean_subtract(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Fillet (round) the specified edges with the given radius.
    fn fillet_edges(
        &mut self,
        solid: &KernelSolidHandle,
        edges: &[KernelId],
        radius: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Chamfer (bevel) the specified edges with the given distance.
    fn chamfer_edges(
        &mut self,
        solid: &KernelSolidHandle,
        edges: &[KernelId],
        distance: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Apply rigid placement steps (axis rotations about the origin and
    /// translations, in order) returning a new positioned solid. The
    /// input solid is left untouched.
    fn transform_solid(
        &mut self,
        solid: &KernelSolidHandle,
        steps: &[TransformStep],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Tessellate a solid to a triangle mesh.
    fn tessellate(
        &mut self,
        solid: &KernelSolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError>;
}

/// Read-only topology queries used by the selection layer.
pub trait KernelIntrospect {
    /// List all faces of a solid, in kernel order.
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// List all edges of a solid, in kernel order.
    fn list_edges(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// List all vertices of a solid, in kernel order.
    fn list_vertices(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// Compute the geometric signature of a single entity.
    fn compute_signature(&self, entity: KernelId, kind: TopoKind) -> TopoSignature;

    /// Compute signatures for all entities of a given kind in a solid.
    fn compute_all_signatures(
        &self,
        solid: &KernelSolidHandle,
        kind: TopoKind,
    ) -> Vec<(KernelId, TopoSignature)>;
}
