//! Versioned design revisions.
//!
//! Several cutout depths and offsets were tuned empirically against the
//! physical components they clear (socket pins, heat-set inserts, the
//! rear cable lip). They are not derivable from the parameter graph, so
//! each coherent bundle of them is pinned under a named revision rather
//! than left as loose literals.

use case_types::units::IN;
use serde::{Deserialize, Serialize};

/// A named, coherent bundle of empirically validated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignRevision {
    /// Second clock build: deeper rear access (11 mm) and the 6 mm rear
    /// recess that seats the rear panel flush.
    #[default]
    ClockV2,
}

impl DesignRevision {
    pub fn constants(self) -> RevisionConstants {
        match self {
            DesignRevision::ClockV2 => RevisionConstants {
                cavity_setback: 6.0,
                cavity_length_margin: 22.0,
                window_cut_depth: 5.0,
                rear_recess_depth: 6.0,
                rear_access_depth: 11.0,
                rear_access_lip: 10.0,
                rear_access_corner_radius: 3.0,
                panel_thickness: 3.0,
                front_panel_clearance: IN / 16.0,
                rear_panel_clearance: IN / 32.0,
                front_panel_inset: 5.0,
                rear_panel_inset: 6.0,
                anchor_margin: 3.0 / 16.0 * IN,
                fastener_bore_diameter: 3.25,
                board_grid_width: 182.88,
                board_grid_height: 42.901,
                indicator_bore_diameter: 7.5,
                insert_bore_radius: 2.0,
                front_insert_depth: 3.0,
                rear_insert_depth: 6.0,
                riser_insert_depth: 6.0,
                riser_footprint: 10.0,
                riser_height: 5.0 / 16.0 * IN,
                riser_corner_radius: 2.0,
                switch_cut_width: 8.5,
                switch_cut_height: 14.0,
                switch_rear_setback: 10.0,
                switch_drop: -12.5,
                motion_bore_radius: 5.0,
                speaker_cut_width: 28.5,
                speaker_cut_depth: 31.5,
                speaker_offset_y: 5.5,
                speaker_screw_radius: 1.0,
                speaker_screw_spread: 28.0 / 2.0 + 4.6,
                speaker_screw_depth: 3.0,
                speaker_wire_radius: 3.0,
                speaker_wire_offset_y: 21.0,
                cable_cut_width: 14.0,
                cable_cut_height: 6.0,
                cable_cut_rise: 10.0,
            },
        }
    }
}

/// Constants carried by one design revision. All lengths in millimeters,
/// in the shell coordinate frame (x width, y length, z height, origin at
/// the enclosure center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevisionConstants {
    /// Cavity center offset toward the front (negative y).
    pub cavity_setback: f64,
    /// Length removed from the cavity so front and rear walls remain.
    pub cavity_length_margin: f64,
    /// Depth of the viewing-window cut into the front wall.
    pub window_cut_depth: f64,
    /// Depth of the recess that seats the rear panel.
    pub rear_recess_depth: f64,
    /// Depth of the rear access cut behind the retaining lip.
    pub rear_access_depth: f64,
    /// Width of the retaining lip left around the rear access opening.
    pub rear_access_lip: f64,
    pub rear_access_corner_radius: f64,
    pub panel_thickness: f64,
    /// Panel outline shrink so the front panel drops into the recess.
    pub front_panel_clearance: f64,
    pub rear_panel_clearance: f64,
    /// Front panel plane offset from the front face.
    pub front_panel_inset: f64,
    pub rear_panel_inset: f64,
    /// Corner fastener inset from the inner wall.
    pub anchor_margin: f64,
    /// M3 free-fit bore.
    pub fastener_bore_diameter: f64,
    /// Mounting hole grid of the display board.
    pub board_grid_width: f64,
    pub board_grid_height: f64,
    pub indicator_bore_diameter: f64,
    /// M3 heat-set insert pilot bore.
    pub insert_bore_radius: f64,
    pub front_insert_depth: f64,
    pub rear_insert_depth: f64,
    pub riser_insert_depth: f64,
    /// Square standoff footprint.
    pub riser_footprint: f64,
    pub riser_height: f64,
    pub riser_corner_radius: f64,
    pub switch_cut_width: f64,
    pub switch_cut_height: f64,
    /// Switch opening offset forward from the inner rear wall.
    pub switch_rear_setback: f64,
    pub switch_drop: f64,
    pub motion_bore_radius: f64,
    pub speaker_cut_width: f64,
    pub speaker_cut_depth: f64,
    pub speaker_offset_y: f64,
    pub speaker_screw_radius: f64,
    pub speaker_screw_spread: f64,
    pub speaker_screw_depth: f64,
    pub speaker_wire_radius: f64,
    /// Wire pass-through center, behind the speaker body.
    pub speaker_wire_offset_y: f64,
    /// Cable pass-through in the rear panel.
    pub cable_cut_width: f64,
    pub cable_cut_height: f64,
    /// Cable cut center height above the panel's bottom edge.
    pub cable_cut_rise: f64,
}
