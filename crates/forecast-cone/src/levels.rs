//! Probability levels of the forecast cone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five wind-probability bands drawn around each track point.
///
/// Higher probability means a *smaller* zone: the 90% band hugs the track
/// point, the 10% band is the widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ProbabilityLevel {
    P10,
    P30,
    P50,
    P70,
    P90,
}

impl ProbabilityLevel {
    /// All levels in emission order (descending probability).
    pub const DESCENDING: [ProbabilityLevel; 5] = [
        ProbabilityLevel::P90,
        ProbabilityLevel::P70,
        ProbabilityLevel::P50,
        ProbabilityLevel::P30,
        ProbabilityLevel::P10,
    ];

    /// Probability in percent.
    pub fn percent(&self) -> u8 {
        match self {
            ProbabilityLevel::P90 => 90,
            ProbabilityLevel::P70 => 70,
            ProbabilityLevel::P50 => 50,
            ProbabilityLevel::P30 => 30,
            ProbabilityLevel::P10 => 10,
        }
    }

    /// Factor applied to the base uncertainty radius.
    pub fn radius_multiplier(&self) -> f64 {
        match self {
            ProbabilityLevel::P90 => 0.3,
            ProbabilityLevel::P70 => 0.5,
            ProbabilityLevel::P50 => 0.7,
            ProbabilityLevel::P30 => 0.9,
            ProbabilityLevel::P10 => 1.2,
        }
    }

    /// Fill colour of the zone.
    pub fn color(&self) -> &'static str {
        match self {
            ProbabilityLevel::P90 => "#800080",
            ProbabilityLevel::P70 => "#FF0000",
            ProbabilityLevel::P50 => "#FF8000",
            ProbabilityLevel::P30 => "#FFFF00",
            ProbabilityLevel::P10 => "#00FF00",
        }
    }

    /// Tooltip text shown for the zone.
    pub fn label(&self) -> String {
        format!(
            "Wind Probability {}%: chance of sustained 34+ knot winds",
            self.percent()
        )
    }

    /// Zone radius for a given base radius.
    pub fn zone_radius_km(&self, base_radius_km: f64) -> f64 {
        base_radius_km * self.radius_multiplier()
    }
}

impl From<ProbabilityLevel> for u8 {
    fn from(level: ProbabilityLevel) -> Self {
        level.percent()
    }
}

/// Error for a percentage that is not one of the cone levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported probability level: {0}%")]
pub struct UnknownProbabilityLevel(pub u8);

impl TryFrom<u8> for ProbabilityLevel {
    type Error = UnknownProbabilityLevel;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        ProbabilityLevel::DESCENDING
            .into_iter()
            .find(|level| level.percent() == percent)
            .ok_or(UnknownProbabilityLevel(percent))
    }
}

impl fmt::Display for ProbabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
