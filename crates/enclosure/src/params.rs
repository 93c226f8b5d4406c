//! Parameter graph: primary inputs and derived dimensions.
//!
//! Every derived value has exactly one formula and is recomputed on each
//! resolve; nothing is cached across builds. A parameter combination
//! that produces a non-positive derived dimension fails here, before any
//! geometry is constructed.

use case_types::units::IN;
use serde::{Deserialize, Serialize};

use crate::revision::{DesignRevision, RevisionConstants};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{dimension} ({outer}) must exceed twice the wall thickness ({wall})")]
    WallTooThick {
        dimension: &'static str,
        outer: f64,
        wall: f64,
    },

    #[error("window {axis} plus corner clearance ({window}) does not fit the inner {axis} ({inner})")]
    WindowTooLarge {
        axis: &'static str,
        window: f64,
        inner: f64,
    },

    #[error("{name} ({radius}) is too large for the {span} span it rounds")]
    RadiusTooLarge {
        name: &'static str,
        radius: f64,
        span: f64,
    },
}

/// Primary inputs. All lengths in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamSet {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub wall_thickness: f64,
    pub window_width: f64,
    pub window_height: f64,
    /// Rounding of the enclosure's outward-facing long edges.
    pub outer_radius: f64,
    /// Rounding of internal and recess edges.
    pub inner_radius: f64,
    pub window_radius: f64,
    pub revision: DesignRevision,
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            width: 215.4,
            height: 75.4,
            length: 3.5 * IN,
            wall_thickness: 3.0 / 16.0 * IN,
            window_width: 190.0,
            window_height: 50.0,
            outer_radius: 10.0,
            inner_radius: 5.25,
            window_radius: 3.5,
            revision: DesignRevision::ClockV2,
        }
    }
}

impl ParamSet {
    /// Compute every derived dimension, in dependency order.
    pub fn resolve(&self) -> Result<ResolvedParams, ParameterError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("wall_thickness", self.wall_thickness),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("window_radius", self.window_radius),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { name, value });
            }
        }

        for (dimension, outer) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
        ] {
            if outer <= 2.0 * self.wall_thickness {
                return Err(ParameterError::WallTooThick {
                    dimension,
                    outer,
                    wall: self.wall_thickness,
                });
            }
        }

        let inner_width = self.width - 2.0 * self.wall_thickness;
        let inner_height = self.height - 2.0 * self.wall_thickness;
        let inner_length = self.length - 2.0 * self.wall_thickness;

        // A fillet radius must leave room on both ends of the shortest
        // span it rounds, or the arc tangent points cross.
        for (name, radius, span) in [
            ("outer_radius", self.outer_radius, self.width.min(self.height)),
            (
                "inner_radius",
                self.inner_radius,
                inner_width.min(inner_height),
            ),
            (
                "window_radius",
                self.window_radius,
                self.window_width.min(self.window_height),
            ),
        ] {
            if 2.0 * radius >= span {
                return Err(ParameterError::RadiusTooLarge { name, radius, span });
            }
        }

        // The window cut needs clearance for its rounded corners inside
        // the inner face, not just the nominal rectangle.
        let padded_width = self.window_width + 2.0 * self.window_radius;
        let padded_height = self.window_height + 2.0 * self.window_radius;
        if padded_width >= inner_width {
            return Err(ParameterError::WindowTooLarge {
                axis: "width",
                window: padded_width,
                inner: inner_width,
            });
        }
        if padded_height >= inner_height {
            return Err(ParameterError::WindowTooLarge {
                axis: "height",
                window: padded_height,
                inner: inner_height,
            });
        }

        Ok(ResolvedParams {
            width: self.width,
            height: self.height,
            length: self.length,
            wall_thickness: self.wall_thickness,
            inner_width,
            inner_height,
            inner_length,
            window_width: self.window_width,
            window_height: self.window_height,
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            window_radius: self.window_radius,
            revision: self.revision,
            constants: self.revision.constants(),
        })
    }
}

/// Primary plus derived dimensions, fixed for the duration of one build.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParams {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub wall_thickness: f64,
    pub inner_width: f64,
    pub inner_height: f64,
    pub inner_length: f64,
    pub window_width: f64,
    pub window_height: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub window_radius: f64,
    pub revision: DesignRevision,
    pub constants: RevisionConstants,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_resolves() {
        let p = ParamSet::default().resolve().unwrap();
        assert!((p.inner_width - 205.875).abs() < 1e-9);
        assert!((p.inner_height - 65.875).abs() < 1e-9);
        assert!((p.inner_length - 79.375).abs() < 1e-9);
    }

    #[test]
    fn inner_dimensions_positive_for_valid_inputs() {
        for wall in [1.0, 3.0, 4.7625, 10.0] {
            let set = ParamSet {
                wall_thickness: wall,
                window_width: 50.0,
                window_height: 20.0,
                ..ParamSet::default()
            };
            let p = set.resolve().unwrap();
            assert!(p.inner_width > 0.0);
            assert!(p.inner_height > 0.0);
            assert!(p.inner_length > 0.0);
        }
    }

    #[test]
    fn degenerate_wall_fails_fast() {
        let set = ParamSet {
            wall_thickness: 40.0,
            ..ParamSet::default()
        };
        let err = set.resolve().unwrap_err();
        assert!(matches!(
            err,
            ParameterError::WallTooThick {
                dimension: "height",
                ..
            }
        ));
    }

    #[test]
    fn zero_dimension_fails_fast() {
        let set = ParamSet {
            length: 0.0,
            ..ParamSet::default()
        };
        assert!(matches!(
            set.resolve().unwrap_err(),
            ParameterError::NonPositive { name: "length", .. }
        ));
    }

    #[test]
    fn oversized_window_fails_fast() {
        let set = ParamSet {
            window_width: 210.0,
            ..ParamSet::default()
        };
        assert!(matches!(
            set.resolve().unwrap_err(),
            ParameterError::WindowTooLarge { axis: "width", .. }
        ));
    }

    #[test]
    fn window_radius_exceeding_half_span_fails_fast() {
        let set = ParamSet {
            window_height: 6.0,
            ..ParamSet::default()
        };
        assert!(matches!(
            set.resolve().unwrap_err(),
            ParameterError::RadiusTooLarge {
                name: "window_radius",
                ..
            }
        ));
    }

    #[test]
    fn window_needs_corner_clearance_inside_the_inner_face() {
        // 204 alone fits the 205.875 inner width, but not once padded
        // by the 3.5 corner radius on each side.
        let set = ParamSet {
            window_width: 204.0,
            ..ParamSet::default()
        };
        assert!(matches!(
            set.resolve().unwrap_err(),
            ParameterError::WindowTooLarge { axis: "width", .. }
        ));
    }

    #[test]
    fn param_set_round_trips_through_json() {
        let set = ParamSet::default();
        let json = serde_json::to_string(&set).unwrap();
        let back: ParamSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ParamSet, _> = serde_json::from_str("{\"wdith\": 100.0}");
        assert!(result.is_err());
    }
}
