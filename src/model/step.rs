//! Per-segment route steps and bearing classes.

use serde::{Deserialize, Serialize};

/// One of nine discrete turn labels derived from the signed angle between
/// consecutive movement vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bearing {
    Straight,
    SlightRight,
    TurnRight,
    SharpRight,
    Around,
    SharpLeft,
    TurnLeft,
    SlightLeft,
    /// Defensive fallback. The classification chain covers all of [0, 360),
    /// so this is unreachable from `classify`.
    Go,
}

impl Bearing {
    /// Bucket a signed angle (degrees) into a bearing class.
    ///
    /// The boundaries and their evaluation order are load-bearing: the
    /// straight band is checked first, so its overlap with the slight-right
    /// band resolves to straight for 30-45 degrees.
    pub fn classify(angle_deg: f64) -> Self {
        let a = angle_deg.rem_euclid(360.0);
        if a < 45.0 || a > 315.0 {
            Bearing::Straight
        } else if (30.0..60.0).contains(&a) {
            Bearing::SlightRight
        } else if (60.0..120.0).contains(&a) {
            Bearing::TurnRight
        } else if (120.0..165.0).contains(&a) {
            Bearing::SharpRight
        } else if (165.0..195.0).contains(&a) {
            Bearing::Around
        } else if (195.0..240.0).contains(&a) {
            Bearing::SharpLeft
        } else if (240.0..300.0).contains(&a) {
            Bearing::TurnLeft
        } else if (300.0..=330.0).contains(&a) {
            Bearing::SlightLeft
        } else {
            Bearing::Go
        }
    }

    /// True for straight-ahead and turn-class motions. Drives the
    /// enter/reach verb choice for named waypoints.
    pub fn is_walk_through(&self) -> bool {
        matches!(
            self,
            Bearing::Straight | Bearing::TurnRight | Bearing::TurnLeft | Bearing::Around
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bearing::Straight => "keep walking straight",
            Bearing::SlightRight => "slightly right",
            Bearing::TurnRight => "turn right",
            Bearing::SharpRight => "sharp right",
            Bearing::Around => "turn around",
            Bearing::SharpLeft => "sharp left",
            Bearing::TurnLeft => "turn left",
            Bearing::SlightLeft => "slightly left",
            Bearing::Go => "go",
        }
    }
}

impl std::fmt::Display for Bearing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One segment of a route: movement from `from` to `to`.
///
/// `bearing` is `None` for the leading segment, which has no prior heading
/// to turn from. `Display` renders the rider-facing sentence; the landmark
/// optimizer consumes the structured fields directly and never re-parses
/// the rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub from: String,
    pub to: String,
    pub bearing: Option<Bearing>,
    /// Straight-line segment length in meters.
    pub distance_m: f64,
}

impl std::fmt::Display for RouteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bearing {
            None => write!(f, "Exit {} and go toward {}.", self.from, self.to),
            Some(bearing) => write!(
                f,
                "Then {} to {} (~{:.1} meters).",
                bearing, self.to, self.distance_m
            ),
        }
    }
}
