use serde::{Deserialize, Serialize};

/// The kind of topological entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TopoKind {
    Vertex,
    Edge,
    Face,
}

/// Geometric signature of a topological entity, used by the selection
/// layer to filter edges and vertices by geometry instead of by bare
/// kernel ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopoSignature {
    /// Surface type for faces (planar, cylindrical, nurbs).
    pub surface_type: Option<String>,
    /// Surface area (for faces).
    pub area: Option<f64>,
    /// Centroid / midpoint position [x, y, z].
    pub centroid: Option<[f64; 3]>,
    /// Outward-pointing normal at centroid (for faces).
    pub normal: Option<[f64; 3]>,
    /// Unit direction (for straight edges).
    pub direction: Option<[f64; 3]>,
    /// Edge length (for edges).
    pub length: Option<f64>,
}

impl TopoSignature {
    pub fn empty() -> Self {
        Self {
            surface_type: None,
            area: None,
            centroid: None,
            normal: None,
            direction: None,
            length: None,
        }
    }
}
