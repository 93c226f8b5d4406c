//! Linear units. All geometry is in millimetres; imperial stock sizes
//! (wall thickness, riser height) are specified in inches.

/// One inch in millimetres.
pub const IN: f64 = 25.4;

/// Comparison tolerance for coordinates and dimensions, in mm.
pub const LINEAR_EPS: f64 = 1e-9;
