use serde::{Deserialize, Serialize};

pub use case_types::{TopoKind, TopoSignature};

/// Opaque handle to a solid in the geometry kernel.
/// Valid only for the current kernel session, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub(crate) u64);

impl KernelSolidHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Transient kernel-internal entity identifier. Stable within one kernel
/// session for one construction sequence, NOT across differently built
/// solids — select entities through geometric queries, not stored ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelId(pub u64);

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("fillet failed: {reason}")]
    FilletFailed { reason: String },

    #[error("planar face construction failed: {reason}")]
    FaceFailed { reason: String },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("entity not found: {id:?}")]
    EntityNotFound { id: KernelId },

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },

    #[error("kernel error: {message}")]
    Other { message: String },
}

/// One segment of a planar boundary path, in plane coordinates (u, v).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PathSegment {
    /// Straight segment to `to`.
    LineTo { to: [f64; 2] },
    /// Circular arc through `via` to `to`.
    ArcTo { via: [f64; 2], to: [f64; 2] },
}

impl PathSegment {
    pub fn end(&self) -> [f64; 2] {
        match *self {
            PathSegment::LineTo { to } => to,
            PathSegment::ArcTo { to, .. } => to,
        }
    }
}

/// A closed boundary path in plane coordinates. The final segment must
/// end at `start`; the kernel rejects open paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePath {
    pub start: [f64; 2],
    pub segments: Vec<PathSegment>,
}

impl WirePath {
    pub fn is_closed(&self) -> bool {
        match self.segments.last() {
            None => false,
            Some(seg) => {
                let end = seg.end();
                (end[0] - self.start[0]).abs() < 1e-9 && (end[1] - self.start[1]).abs() < 1e-9
            }
        }
    }

    /// Axis-aligned extent of the path's segment endpoints and arc
    /// transit points, as (min_u, min_v, max_u, max_v).
    pub fn bounds(&self) -> [f64; 4] {
        let mut b = [self.start[0], self.start[1], self.start[0], self.start[1]];
        let mut grow = |p: [f64; 2]| {
            b[0] = b[0].min(p[0]);
            b[1] = b[1].min(p[1]);
            b[2] = b[2].max(p[0]);
            b[3] = b[3].max(p[1]);
        };
        for seg in &self.segments {
            match *seg {
                PathSegment::LineTo { to } => grow(to),
                PathSegment::ArcTo { via, to } => {
                    grow(via);
                    grow(to);
                }
            }
        }
        b
    }
}

/// A planar face request: one outer boundary, optional hole boundaries,
/// positioned by plane origin, normal and in-plane x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarFace {
    pub outer: WirePath,
    pub holes: Vec<WirePath>,
    pub plane_origin: [f64; 3],
    pub plane_normal: [f64; 3],
    pub plane_x_axis: [f64; 3],
}

/// Tessellated triangle mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals, parallel to `vertices`.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
    /// Mapping from triangle ranges to logical faces.
    pub face_ranges: Vec<FaceRange>,
}

/// Maps a contiguous range of triangles to a logical face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceRange {
    pub face_id: KernelId,
    /// Start index in the indices array (inclusive).
    pub start_index: u32,
    /// End index in the indices array (exclusive).
    pub end_index: u32,
}

impl Serialize for KernelId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KernelId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(KernelId)
    }
}
