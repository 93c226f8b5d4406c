//! Placement tables for repeated components and bores.
//!
//! Board-frame tables (tubes, socket pins, indicators) are in the
//! display board's local coordinates before the board assembly transform
//! is applied. Shell-frame tables (risers, inserts) are in enclosure
//! coordinates. Tables are data: generated from row patterns, validated
//! for uniqueness and mirror symmetry before any geometry consumes them.

use case_types::{
    four_corners, Axis, ComponentRole, PlacementEntry, PlacementTable, TableError, Transform, Vec3,
};

use crate::params::ResolvedParams;

/// Display tube seats: three per side, mirrored about the centerline.
pub const TUBE_XS: [f64; 3] = [10.05, 44.1, 64.2];
const TUBE_Z: f64 = 9.5;

/// Socket pins sit below the tubes on the board.
const PIN_Z: f64 = -6.6;

/// One mirrored socket-pin row: `first` is the innermost pin offset from
/// the centerline, `gaps` the successive spacings moving outward.
struct PinRow {
    y: f64,
    first: f64,
    gaps: &'static [f64],
}

const PIN_ROWS: &[PinRow] = &[
    PinRow {
        y: 0.0,
        first: 4.325,
        gaps: &[11.5, 22.5, 11.5, 8.6, 11.5],
    },
    PinRow {
        y: 4.5,
        first: 4.325,
        gaps: &[11.5, 22.5, 11.5, 8.6, 11.5],
    },
    PinRow {
        y: -4.5,
        first: 4.325,
        gaps: &[11.5, 22.5, 11.5, 8.6, 11.5],
    },
    PinRow {
        y: 8.0,
        first: 6.075,
        gaps: &[8.0, 26.0, 8.0, 12.1, 8.0],
    },
    PinRow {
        y: -8.0,
        first: 6.075,
        gaps: &[8.0, 26.0, 8.0, 12.1, 8.0],
    },
    PinRow {
        y: 9.0,
        first: 10.07,
        gaps: &[34.0, 20.1],
    },
    PinRow {
        y: -9.0,
        first: 10.07,
        gaps: &[34.0, 20.1],
    },
];

pub fn tube_table() -> PlacementTable {
    let mut entries = Vec::with_capacity(TUBE_XS.len() * 2);
    for (col, &x) in TUBE_XS.iter().enumerate() {
        entries.push(PlacementEntry::patterned(
            Vec3::new(x, 0.0, TUBE_Z),
            0,
            col as u32,
        ));
        entries.push(PlacementEntry::patterned(
            Vec3::new(-x, 0.0, TUBE_Z),
            0,
            col as u32,
        ));
    }
    PlacementTable::new(ComponentRole::DisplayTube, entries)
}

pub fn socket_pin_table() -> PlacementTable {
    let mut entries = Vec::new();
    for (row, pattern) in PIN_ROWS.iter().enumerate() {
        let mut x = pattern.first;
        let mut xs = vec![x];
        for gap in pattern.gaps {
            x += gap;
            xs.push(x);
        }
        for (col, &x) in xs.iter().enumerate() {
            entries.push(PlacementEntry::patterned(
                Vec3::new(x, pattern.y, PIN_Z),
                row as u32,
                col as u32,
            ));
            entries.push(PlacementEntry::patterned(
                Vec3::new(-x, pattern.y, PIN_Z),
                row as u32,
                col as u32,
            ));
        }
    }
    PlacementTable::new(ComponentRole::SocketPin, entries)
}

/// Neon indicator lamps between the tube pairs.
pub fn indicator_table() -> PlacementTable {
    let mut entries = Vec::new();
    for (x, y) in four_corners(27.05, 6.0) {
        let mut entry = PlacementEntry::at(Vec3::new(x, y, 13.0));
        entry.rotation = Some(Transform::rotation(Axis::X, 90.0).rotate(Axis::Z, 90.0));
        entries.push(entry);
    }
    PlacementTable::new(ComponentRole::IndicatorLamp, entries)
}

/// Standoffs under the display board's long edges.
pub fn clock_riser_table(params: &ResolvedParams) -> PlacementTable {
    let c = params.constants;
    let z = -params.inner_height / 2.0 + c.riser_height / 2.0;
    let x = params.inner_width / 2.0 - 20.0;
    PlacementTable::new(
        ComponentRole::ClockRiser,
        vec![
            PlacementEntry::at(Vec3::new(x, -16.0, z)),
            PlacementEntry::at(Vec3::new(-x, -16.0, z)),
        ],
    )
}

/// Converter mount hole grid (37.34 mm apart), placed as a symmetric
/// four-corner pattern around origin and then moved to the converter's
/// seat on the floor.
pub fn converter_riser_table(params: &ResolvedParams) -> PlacementTable {
    let c = params.constants;
    let z = -params.inner_height / 2.0 + c.riser_height / 2.0;
    let entries = four_corners(37.34 / 2.0, 16.0)
        .into_iter()
        .map(|(x, y)| PlacementEntry::at(Vec3::new(x, y, 0.0)))
        .collect();
    PlacementTable::new(ComponentRole::ConverterRiser, entries)
        .transformed(&Transform::translation(Vec3::new(-60.0, 14.5, z)))
}

/// Front/rear panel anchor points in panel plane coordinates.
pub fn panel_anchor_corners(params: &ResolvedParams) -> [(f64, f64); 4] {
    let c = params.constants;
    four_corners(
        params.inner_width / 2.0 - c.anchor_margin,
        params.inner_height / 2.0 - c.anchor_margin,
    )
}

/// Display board mounting grid in panel plane coordinates.
pub fn board_grid_corners(params: &ResolvedParams) -> [(f64, f64); 4] {
    let c = params.constants;
    four_corners(c.board_grid_width / 2.0, c.board_grid_height / 2.0)
}

/// Heat-set insert bores in the shell, behind the rear panel seat.
pub fn rear_insert_table(params: &ResolvedParams) -> PlacementTable {
    let c = params.constants;
    let y = params.length / 2.0 - c.rear_panel_inset;
    let entries = panel_anchor_corners(params)
        .into_iter()
        .map(|(x, z)| PlacementEntry::at(Vec3::new(x, y, z)))
        .collect();
    PlacementTable::new(ComponentRole::HeatSetInsert, entries)
}

/// Heat-set insert bores in the shell, behind the front panel seat.
pub fn front_insert_table(params: &ResolvedParams) -> PlacementTable {
    let c = params.constants;
    let y = -params.length / 2.0 + c.front_panel_inset;
    let entries = panel_anchor_corners(params)
        .into_iter()
        .map(|(x, z)| PlacementEntry::at(Vec3::new(x, y, z)))
        .collect();
    PlacementTable::new(ComponentRole::HeatSetInsert, entries)
}

/// Validate every table used by a build. Runs before construction so a
/// bad table is a parameterization failure, not a geometry failure.
pub fn validate_tables(params: &ResolvedParams) -> Result<(), TableError> {
    let tubes = tube_table();
    tubes.check_unique()?;
    tubes.check_mirror_x()?;

    let pins = socket_pin_table();
    pins.check_unique()?;
    pins.check_mirror_xy()?;

    let indicators = indicator_table();
    indicators.check_unique()?;
    indicators.check_mirror_xy()?;

    clock_riser_table(params).check_unique()?;
    converter_riser_table(params).check_unique()?;
    rear_insert_table(params).check_unique()?;
    front_insert_table(params).check_unique()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamSet;

    fn params() -> ResolvedParams {
        ParamSet::default().resolve().unwrap()
    }

    #[test]
    fn socket_table_has_seventy_two_pins() {
        assert_eq!(socket_pin_table().len(), 72);
    }

    #[test]
    fn socket_table_matches_known_positions() {
        let positions = socket_pin_table().positions();
        // Outermost middle-row pin and innermost top-row pin.
        assert!(positions
            .iter()
            .any(|p| p.approx_eq(Vec3::new(69.925, 0.0, -6.6))));
        assert!(positions
            .iter()
            .any(|p| p.approx_eq(Vec3::new(-10.07, 9.0, -6.6))));
        assert!(positions
            .iter()
            .any(|p| p.approx_eq(Vec3::new(68.175, 8.0, -6.6))));
    }

    #[test]
    fn all_build_tables_validate() {
        validate_tables(&params()).unwrap();
    }

    #[test]
    fn tube_table_is_mirrored_about_centerline() {
        let t = tube_table();
        assert_eq!(t.len(), 6);
        t.check_mirror_x().unwrap();
    }

    #[test]
    fn converter_risers_sit_on_the_floor() {
        let p = params();
        let t = converter_riser_table(&p);
        assert_eq!(t.len(), 4);
        let z = -p.inner_height / 2.0 + p.constants.riser_height / 2.0;
        for e in &t.entries {
            assert!((e.position.z - z).abs() < 1e-9);
        }
        // Centered on the converter seat, not the enclosure centerline.
        let cx: f64 = t.entries.iter().map(|e| e.position.x).sum::<f64>() / 4.0;
        assert!((cx + 60.0).abs() < 1e-9);
    }

    #[test]
    fn insert_tables_share_anchor_pattern() {
        let p = params();
        let front = front_insert_table(&p);
        let rear = rear_insert_table(&p);
        assert_eq!(front.len(), 4);
        assert_eq!(rear.len(), 4);
        for (f, r) in front.entries.iter().zip(&rear.entries) {
            assert!((f.position.x - r.position.x).abs() < 1e-9);
            assert!((f.position.z - r.position.z).abs() < 1e-9);
            assert!(f.position.y < 0.0 && r.position.y > 0.0);
        }
    }
}
