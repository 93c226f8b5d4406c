//! Closed 2D boundary construction.
//!
//! Profiles are built from lines, polylines, and three-point arcs in
//! plane coordinates, closed explicitly, optionally rounded at selected
//! vertices, and finally lowered to the kernel's wire representation for
//! face creation and extrusion.

use case_types::units::LINEAR_EPS;
use kernel_bridge::{PathSegment, PlanarFace, WirePath};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ProfileError {
    #[error("profile is not closed")]
    NotClosed,

    #[error("profile needs at least {needed} segments, has {actual}")]
    TooFewSegments { needed: usize, actual: usize },

    #[error("vertex {index} cannot be rounded: {reason}")]
    VertexNotRoundable { index: usize, reason: String },

    #[error("rounding radius {radius} is too large at vertex {index}")]
    RadiusTooLarge { index: usize, radius: f64 },
}

/// A 2D curve segment, continuing from the previous endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileSegment {
    LineTo { to: [f64; 2] },
    /// Circular arc through `via` to `to`.
    ArcTo { via: [f64; 2], to: [f64; 2] },
}

impl ProfileSegment {
    fn end(&self) -> [f64; 2] {
        match self {
            ProfileSegment::LineTo { to } => *to,
            ProfileSegment::ArcTo { to, .. } => *to,
        }
    }
}

/// An ordered 2D boundary path.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub start: [f64; 2],
    pub segments: Vec<ProfileSegment>,
}

fn pts_eq(a: [f64; 2], b: [f64; 2]) -> bool {
    (a[0] - b[0]).abs() < LINEAR_EPS && (a[1] - b[1]).abs() < LINEAR_EPS
}

impl Profile {
    pub fn new(start: [f64; 2]) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Open polyline through the given points.
    pub fn polyline(points: &[[f64; 2]]) -> Self {
        let mut profile = Self::new(points[0]);
        for &p in &points[1..] {
            profile.segments.push(ProfileSegment::LineTo { to: p });
        }
        profile
    }

    /// Axis-aligned rectangle centered on the origin, closed,
    /// counter-clockwise from the lower-left corner.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (w, h) = (width / 2.0, height / 2.0);
        let mut profile = Self::polyline(&[[-w, -h], [w, -h], [w, h], [-w, h]]);
        profile.segments.push(ProfileSegment::LineTo {
            to: profile.start,
        });
        profile
    }

    /// Full circle from two half arcs.
    pub fn circle(center: [f64; 2], radius: f64) -> Self {
        let [cx, cy] = center;
        let mut profile = Self::new([cx + radius, cy]);
        profile.segments.push(ProfileSegment::ArcTo {
            via: [cx, cy + radius],
            to: [cx - radius, cy],
        });
        profile.segments.push(ProfileSegment::ArcTo {
            via: [cx, cy - radius],
            to: [cx + radius, cy],
        });
        profile
    }

    /// Rectangle with all four corners rounded.
    pub fn rounded_rect(width: f64, height: f64, radius: f64) -> Result<Self, ProfileError> {
        Self::rectangle(width, height).fillet_vertices(&[0, 1, 2, 3], radius)
    }

    pub fn line_to(mut self, to: [f64; 2]) -> Self {
        self.segments.push(ProfileSegment::LineTo { to });
        self
    }

    pub fn arc_to(mut self, via: [f64; 2], to: [f64; 2]) -> Self {
        self.segments.push(ProfileSegment::ArcTo { via, to });
        self
    }

    pub fn end(&self) -> [f64; 2] {
        self.segments
            .last()
            .map(|s| s.end())
            .unwrap_or(self.start)
    }

    pub fn is_closed(&self) -> bool {
        !self.segments.is_empty() && pts_eq(self.end(), self.start)
    }

    /// Close the boundary. Inserts exactly one straight segment when the
    /// endpoint does not coincide with the start; a profile that is
    /// already closed is left untouched.
    pub fn close(mut self) -> Result<Self, ProfileError> {
        if self.segments.len() < 2 {
            return Err(ProfileError::TooFewSegments {
                needed: 2,
                actual: self.segments.len(),
            });
        }
        if !self.is_closed() {
            self.segments.push(ProfileSegment::LineTo {
                to: self.start,
            });
        }
        Ok(self)
    }

    /// Translate every point of the profile in the plane.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let shift = |p: [f64; 2]| [p[0] + dx, p[1] + dy];
        Self {
            start: shift(self.start),
            segments: self
                .segments
                .iter()
                .map(|s| match s {
                    ProfileSegment::LineTo { to } => ProfileSegment::LineTo { to: shift(*to) },
                    ProfileSegment::ArcTo { via, to } => ProfileSegment::ArcTo {
                        via: shift(*via),
                        to: shift(*to),
                    },
                })
                .collect(),
        }
    }

    /// Round the selected vertices of a closed, all-line profile with a
    /// circular arc of the given radius. Vertex `i` is the junction at
    /// the start of segment `i`, so vertex 0 is the profile start.
    pub fn fillet_vertices(&self, indices: &[usize], radius: f64) -> Result<Self, ProfileError> {
        if !self.is_closed() {
            return Err(ProfileError::NotClosed);
        }
        // Vertices are only well defined between straight segments.
        let mut points = vec![self.start];
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                ProfileSegment::LineTo { to } => points.push(*to),
                ProfileSegment::ArcTo { .. } => {
                    return Err(ProfileError::VertexNotRoundable {
                        index: i,
                        reason: "adjacent segment is an arc".to_string(),
                    })
                }
            }
        }
        points.pop(); // closing point duplicates the start
        let n = points.len();

        for &index in indices {
            if index >= n {
                return Err(ProfileError::VertexNotRoundable {
                    index,
                    reason: format!("profile has {n} vertices"),
                });
            }
        }

        enum Corner {
            Sharp([f64; 2]),
            Round {
                entry: [f64; 2],
                via: [f64; 2],
                exit: [f64; 2],
            },
        }

        // Tangent setback consumed at each vertex; 0.0 at sharp corners.
        let mut tangents = vec![0.0f64; n];
        for &i in indices {
            let p = points[i];
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            let a = unit([prev[0] - p[0], prev[1] - p[1]]);
            let b = unit([next[0] - p[0], next[1] - p[1]]);
            let cos_phi = (a[0] * b[0] + a[1] * b[1]).clamp(-1.0, 1.0);
            let phi = cos_phi.acos();
            if phi < 1e-9 || (std::f64::consts::PI - phi) < 1e-9 {
                return Err(ProfileError::VertexNotRoundable {
                    index: i,
                    reason: "segments are collinear".to_string(),
                });
            }
            tangents[i] = radius / (phi / 2.0).tan();
        }

        // Both ends of an edge must fit their setbacks on it.
        for i in 0..n {
            let j = (i + 1) % n;
            let edge_len = dist(points[i], points[j]);
            if tangents[i] + tangents[j] > edge_len + LINEAR_EPS {
                let index = if tangents[i] >= tangents[j] { i } else { j };
                return Err(ProfileError::RadiusTooLarge { index, radius });
            }
        }

        let mut corners = Vec::with_capacity(n);
        for i in 0..n {
            if !indices.contains(&i) {
                corners.push(Corner::Sharp(points[i]));
                continue;
            }
            let p = points[i];
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];

            let a = unit([prev[0] - p[0], prev[1] - p[1]]);
            let b = unit([next[0] - p[0], next[1] - p[1]]);
            let phi = (a[0] * b[0] + a[1] * b[1]).clamp(-1.0, 1.0).acos();
            let tangent = tangents[i];

            let entry = [p[0] + a[0] * tangent, p[1] + a[1] * tangent];
            let exit = [p[0] + b[0] * tangent, p[1] + b[1] * tangent];
            let bisector = unit([a[0] + b[0], a[1] + b[1]]);
            let center_dist = radius / (phi / 2.0).sin();
            let center = [p[0] + bisector[0] * center_dist, p[1] + bisector[1] * center_dist];
            // Arc midpoint sits on the center-to-corner ray.
            let back = unit([p[0] - center[0], p[1] - center[1]]);
            let via = [center[0] + back[0] * radius, center[1] + back[1] * radius];

            corners.push(Corner::Round { entry, via, exit });
        }

        let start = match &corners[0] {
            Corner::Sharp(p) => *p,
            Corner::Round { exit, .. } => *exit,
        };
        let mut result = Profile::new(start);
        for i in 1..=n {
            match &corners[i % n] {
                Corner::Sharp(p) => {
                    result.segments.push(ProfileSegment::LineTo { to: *p });
                }
                Corner::Round { entry, via, exit } => {
                    result.segments.push(ProfileSegment::LineTo { to: *entry });
                    result.segments.push(ProfileSegment::ArcTo {
                        via: *via,
                        to: *exit,
                    });
                }
            }
        }
        Ok(result)
    }

    /// Lower to the kernel wire representation. The profile must already
    /// be closed.
    pub fn to_wire_path(&self) -> Result<WirePath, ProfileError> {
        if !self.is_closed() {
            return Err(ProfileError::NotClosed);
        }
        Ok(WirePath {
            start: self.start,
            segments: self
                .segments
                .iter()
                .map(|s| match s {
                    ProfileSegment::LineTo { to } => PathSegment::LineTo { to: *to },
                    ProfileSegment::ArcTo { via, to } => PathSegment::ArcTo {
                        via: *via,
                        to: *to,
                    },
                })
                .collect(),
        })
    }
}

/// Embed a closed outer profile (and hole profiles) into a 3D plane.
pub fn planar_face(
    outer: &Profile,
    holes: &[Profile],
    plane_origin: [f64; 3],
    plane_normal: [f64; 3],
    plane_x_axis: [f64; 3],
) -> Result<PlanarFace, ProfileError> {
    Ok(PlanarFace {
        outer: outer.to_wire_path()?,
        holes: holes
            .iter()
            .map(|h| h.to_wire_path())
            .collect::<Result<Vec<_>, _>>()?,
        plane_origin,
        plane_normal,
        plane_x_axis,
    })
}

fn unit(v: [f64; 2]) -> [f64; 2] {
    let len = (v[0] * v[0] + v[1] * v[1]).sqrt();
    if len < 1e-12 {
        [0.0, 0.0]
    } else {
        [v[0] / len, v[1] / len]
    }
}

fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_polyline_closes_with_exactly_one_segment() {
        let open = Profile::polyline(&[[0.0, 0.0], [10.0, 0.0], [10.0, 5.0]]);
        assert!(!open.is_closed());
        let before = open.segments.len();

        let closed = open.close().unwrap();
        assert!(closed.is_closed());
        assert_eq!(closed.segments.len(), before + 1);
    }

    #[test]
    fn closed_profile_gains_no_extra_segment() {
        let rect = Profile::rectangle(10.0, 5.0);
        let before = rect.segments.len();
        let closed = rect.close().unwrap();
        assert_eq!(closed.segments.len(), before);
    }

    #[test]
    fn single_segment_cannot_close() {
        let stub = Profile::polyline(&[[0.0, 0.0], [1.0, 0.0]]);
        assert!(matches!(
            stub.close(),
            Err(ProfileError::TooFewSegments { .. })
        ));
    }

    #[test]
    fn rounded_rect_has_four_arcs() {
        let profile = Profile::rounded_rect(190.0, 50.0, 3.5).unwrap();
        assert!(profile.is_closed());
        let arcs = profile
            .segments
            .iter()
            .filter(|s| matches!(s, ProfileSegment::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 4);
    }

    #[test]
    fn corner_fillet_tangent_points_are_on_the_edges() {
        let profile = Profile::rounded_rect(20.0, 10.0, 2.0).unwrap();
        // Every point of the rounded profile stays within the rectangle.
        for segment in &profile.segments {
            let (x, y) = match segment {
                ProfileSegment::LineTo { to } => (to[0], to[1]),
                ProfileSegment::ArcTo { to, .. } => (to[0], to[1]),
            };
            assert!(x.abs() <= 10.0 + 1e-9);
            assert!(y.abs() <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn fillet_radius_larger_than_edge_is_rejected() {
        let err = Profile::rounded_rect(10.0, 4.0, 3.0).unwrap_err();
        assert!(matches!(err, ProfileError::RadiusTooLarge { .. }));
    }

    #[test]
    fn fillet_on_open_profile_is_rejected() {
        let open = Profile::polyline(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert_eq!(
            open.fillet_vertices(&[1], 0.1),
            Err(ProfileError::NotClosed)
        );
    }

    #[test]
    fn fillet_through_arc_segment_is_rejected() {
        let profile = Profile::circle([0.0, 0.0], 5.0);
        assert!(matches!(
            profile.fillet_vertices(&[0], 1.0),
            Err(ProfileError::VertexNotRoundable { .. })
        ));
    }

    #[test]
    fn selective_fillet_keeps_other_corners_sharp() {
        let profile = Profile::rectangle(20.0, 10.0)
            .fillet_vertices(&[1, 2], 2.0)
            .unwrap();
        let arcs = profile
            .segments
            .iter()
            .filter(|s| matches!(s, ProfileSegment::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert!(profile.is_closed());
    }

    #[test]
    fn open_profile_does_not_lower_to_a_wire() {
        let open = Profile::polyline(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert_eq!(open.to_wire_path().unwrap_err(), ProfileError::NotClosed);
    }

    #[test]
    fn circle_lowers_to_two_arc_segments() {
        let wire = Profile::circle([3.0, -2.0], 1.625).to_wire_path().unwrap();
        assert_eq!(wire.segments.len(), 2);
        assert!(wire.is_closed());
    }

    #[test]
    fn translated_moves_every_point() {
        let profile = Profile::circle([0.0, 0.0], 2.0).translated(27.05, 6.0);
        assert_eq!(profile.start, [29.05, 6.0]);
    }
}
