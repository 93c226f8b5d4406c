use serde::{Deserialize, Serialize};

use crate::units::LINEAR_EPS;

/// A 3D vector / point in enclosure coordinates (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn approx_eq(self, other: Vec3) -> bool {
        (self.x - other.x).abs() < LINEAR_EPS
            && (self.y - other.y).abs() < LINEAR_EPS
            && (self.z - other.z).abs() < LINEAR_EPS
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Principal coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::new(1.0, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, 1.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

/// A single rigid-placement step. Rotations are about the origin,
/// right-handed, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransformStep {
    Rotate { axis: Axis, degrees: f64 },
    Translate { offset: Vec3 },
}

impl TransformStep {
    fn apply_point(self, p: Vec3) -> Vec3 {
        match self {
            TransformStep::Translate { offset } => p + offset,
            TransformStep::Rotate { axis, degrees } => {
                let a = degrees.to_radians();
                let (s, c) = a.sin_cos();
                match axis {
                    Axis::X => Vec3::new(p.x, c * p.y - s * p.z, s * p.y + c * p.z),
                    Axis::Y => Vec3::new(c * p.x + s * p.z, p.y, -s * p.x + c * p.z),
                    Axis::Z => Vec3::new(c * p.x - s * p.y, s * p.x + c * p.y, p.z),
                }
            }
        }
    }
}

/// An ordered sequence of rigid-placement steps.
///
/// Steps apply in list order, so rotation order is always explicit.
/// Transforms are pure operators: application returns a new value and
/// composition (`then`) concatenates step lists, which makes it
/// associative by construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub steps: Vec<TransformStep>,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn translation(offset: Vec3) -> Self {
        Self {
            steps: vec![TransformStep::Translate { offset }],
        }
    }

    pub fn rotation(axis: Axis, degrees: f64) -> Self {
        Self {
            steps: vec![TransformStep::Rotate { axis, degrees }],
        }
    }

    /// Append a rotation step.
    pub fn rotate(mut self, axis: Axis, degrees: f64) -> Self {
        self.steps.push(TransformStep::Rotate { axis, degrees });
        self
    }

    /// Append a translation step.
    pub fn translate(mut self, offset: Vec3) -> Self {
        self.steps.push(TransformStep::Translate { offset });
        self
    }

    /// Compose: apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());
        Transform { steps }
    }

    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        self.steps.iter().fold(p, |acc, step| step.apply_point(acc))
    }

    /// Batch-apply to every point of a table.
    pub fn apply_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        points.iter().map(|&p| self.apply_point(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_x_90_maps_y_to_z() {
        let t = Transform::rotation(Axis::X, 90.0);
        let p = t.apply_point(Vec3::new(0.0, 1.0, 0.0));
        assert!(p.approx_eq(Vec3::new(0.0, 0.0, 1.0)), "got {:?}", p);
    }

    #[test]
    fn rotation_order_is_explicit() {
        let xz = Transform::identity()
            .rotate(Axis::X, 90.0)
            .rotate(Axis::Z, 90.0);
        let zx = Transform::identity()
            .rotate(Axis::Z, 90.0)
            .rotate(Axis::X, 90.0);
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(!xz.apply_point(p).approx_eq(zx.apply_point(p)));
    }

    #[test]
    fn composition_is_associative() {
        let a = Transform::rotation(Axis::X, 90.0);
        let b = Transform::translation(Vec3::new(5.0, -2.0, 1.0));
        let c = Transform::rotation(Axis::Z, 45.0);
        let p = Vec3::new(1.0, 2.0, 3.0);

        let left = a.then(&b).then(&c);
        let right = a.then(&b.then(&c));
        assert!(left.apply_point(p).approx_eq(right.apply_point(p)));
    }

    #[test]
    fn then_equals_sequential_application() {
        let rot = Transform::rotation(Axis::X, 90.0);
        let trans = Transform::translation(Vec3::new(0.0, -15.0, 0.0));
        let p = Vec3::new(10.05, 0.0, 9.5);

        let composed = rot.then(&trans).apply_point(p);
        let sequential = trans.apply_point(rot.apply_point(p));
        assert!(composed.approx_eq(sequential));
    }

    #[test]
    fn batch_application_matches_pointwise() {
        let t = Transform::rotation(Axis::X, 90.0).translate(Vec3::new(0.0, -15.0, 0.0));
        let points = [
            Vec3::new(10.05, 0.0, 9.5),
            Vec3::new(-10.05, 0.0, 9.5),
            Vec3::ZERO,
        ];

        let batch = t.apply_points(&points);
        assert_eq!(batch.len(), points.len());
        for (moved, &p) in batch.iter().zip(&points) {
            assert!(moved.approx_eq(t.apply_point(p)));
        }
    }

    #[test]
    fn apply_never_mutates_input() {
        let t = Transform::translation(Vec3::new(1.0, 0.0, 0.0));
        let p = Vec3::new(2.0, 2.0, 2.0);
        let _ = t.apply_point(p);
        assert!(p.approx_eq(Vec3::new(2.0, 2.0, 2.0)));
    }
}
