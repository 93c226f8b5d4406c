use serde::{Deserialize, Serialize};

use crate::transform::{Transform, Vec3};

/// What a placement table positions. Keys tables by component role so
/// tables are data, not anonymous coordinate lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum ComponentRole {
    DisplayTube,
    SocketPin,
    IndicatorLamp,
    ClockRiser,
    ConverterRiser,
    PanelInsert,
    FastenerBore,
    HeatSetInsert,
}

/// One placement-table entry: a position, an optional per-item rotation,
/// and where in the pattern it came from (for patterned tables).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementEntry {
    pub position: Vec3,
    /// Per-item rotation applied before the table-wide transform, if any.
    pub rotation: Option<Transform>,
    /// Row index in the generating pattern, if the table is patterned.
    pub row: Option<u32>,
    /// Column index within the row, if the table is patterned.
    pub col: Option<u32>,
}

impl PlacementEntry {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: None,
            row: None,
            col: None,
        }
    }

    pub fn patterned(position: Vec3, row: u32, col: u32) -> Self {
        Self {
            position,
            rotation: None,
            row: Some(row),
            col: Some(col),
        }
    }
}

/// An ordered list of placements for one component role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementTable {
    pub role: ComponentRole,
    pub entries: Vec<PlacementEntry>,
}

/// Placement-table validation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    #[error("{role} table: entries {a} and {b} coincide")]
    DuplicateEntry { role: String, a: usize, b: usize },

    #[error("{role} table: entry {index} at {x}, {y}, {z} has no mirror partner")]
    AsymmetricEntry {
        role: String,
        index: usize,
        x: f64,
        y: f64,
        z: f64,
    },
}

impl PlacementTable {
    pub fn new(role: ComponentRole, entries: Vec<PlacementEntry>) -> Self {
        Self { role, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.entries.iter().map(|e| e.position).collect()
    }

    /// Batch-apply a transform to every entry, returning a new table.
    pub fn transformed(&self, transform: &Transform) -> PlacementTable {
        PlacementTable {
            role: self.role,
            entries: self
                .entries
                .iter()
                .map(|e| PlacementEntry {
                    position: transform.apply_point(e.position),
                    ..e.clone()
                })
                .collect(),
        }
    }

    /// No two entries may coincide.
    pub fn check_unique(&self) -> Result<(), TableError> {
        for (i, a) in self.entries.iter().enumerate() {
            for (j, b) in self.entries.iter().enumerate().skip(i + 1) {
                if a.position.approx_eq(b.position) {
                    return Err(TableError::DuplicateEntry {
                        role: format!("{:?}", self.role),
                        a: i,
                        b: j,
                    });
                }
            }
        }
        Ok(())
    }

    /// Every entry must have a partner mirrored in x (tables for this
    /// enclosure are laid out symmetrically about the centerline).
    pub fn check_mirror_x(&self) -> Result<(), TableError> {
        for (i, e) in self.entries.iter().enumerate() {
            let mirrored = Vec3::new(-e.position.x, e.position.y, e.position.z);
            let found = self
                .entries
                .iter()
                .any(|other| other.position.approx_eq(mirrored));
            if !found {
                return Err(TableError::AsymmetricEntry {
                    role: format!("{:?}", self.role),
                    index: i,
                    x: e.position.x,
                    y: e.position.y,
                    z: e.position.z,
                });
            }
        }
        Ok(())
    }

    /// Mirror symmetry in both x and y.
    pub fn check_mirror_xy(&self) -> Result<(), TableError> {
        self.check_mirror_x()?;
        for (i, e) in self.entries.iter().enumerate() {
            let mirrored = Vec3::new(e.position.x, -e.position.y, e.position.z);
            let found = self
                .entries
                .iter()
                .any(|other| other.position.approx_eq(mirrored));
            if !found {
                return Err(TableError::AsymmetricEntry {
                    role: format!("{:?}", self.role),
                    index: i,
                    x: e.position.x,
                    y: e.position.y,
                    z: e.position.z,
                });
            }
        }
        Ok(())
    }
}

/// 2D helper used by panel profiles: four corner points mirrored about
/// both axes, at `(±x, ±y)`.
pub fn four_corners(x: f64, y: f64) -> [(f64, f64); 4] {
    [(x, y), (-x, y), (-x, -y), (x, -y)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(points: &[(f64, f64, f64)]) -> PlacementTable {
        PlacementTable::new(
            ComponentRole::FastenerBore,
            points
                .iter()
                .map(|&(x, y, z)| PlacementEntry::at(Vec3::new(x, y, z)))
                .collect(),
        )
    }

    #[test]
    fn unique_rejects_coincident_entries() {
        let t = table(&[(1.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        assert!(t.check_unique().is_err());
    }

    #[test]
    fn mirror_x_accepts_symmetric_table() {
        let t = table(&[(4.0, 1.0, 0.0), (-4.0, 1.0, 0.0)]);
        t.check_unique().unwrap();
        t.check_mirror_x().unwrap();
    }

    #[test]
    fn mirror_x_rejects_lone_entry() {
        let t = table(&[(4.0, 1.0, 0.0), (-4.0, 2.0, 0.0)]);
        assert!(t.check_mirror_x().is_err());
    }

    #[test]
    fn transformed_moves_every_entry() {
        let t = table(&[(1.0, 0.0, 0.0), (-1.0, 0.0, 0.0)]);
        let moved = t.transformed(&Transform::translation(Vec3::new(0.0, -15.0, 0.0)));
        assert!(moved.entries[0].position.approx_eq(Vec3::new(1.0, -15.0, 0.0)));
        assert_eq!(moved.role, t.role);
    }
}
