use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::graph::Location;
use crate::Error;

/// Distance between two locations used as an A* estimate.
///
/// Whether an estimate is admissible depends on how edge weights relate to
/// locations: Manhattan suits 4-connected grids with unit steps, Euclidean
/// suits graphs weighted by straight-line distance, Chebyshev suits
/// 8-connected grids where a diagonal costs the same as a straight step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// |dx| + |dy|
    #[default]
    Manhattan,
    /// sqrt(dx^2 + dy^2)
    Euclidean,
    /// max(|dx|, |dy|)
    Chebyshev,
}

impl DistanceMetric {
    pub fn distance(&self, a: &Location, b: &Location) -> f64 {
        let (dx, dy) = a.delta(b);
        match self {
            DistanceMetric::Manhattan => dx.abs() + dy.abs(),
            DistanceMetric::Euclidean => dx.hypot(dy),
            DistanceMetric::Chebyshev => dx.abs().max(dy.abs()),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`] and written by serde
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Chebyshev => "chebyshev",
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        [
            DistanceMetric::Manhattan,
            DistanceMetric::Euclidean,
            DistanceMetric::Chebyshev,
        ]
        .into_iter()
        .find(|metric| metric.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownName {
            kind: "distance metric",
            name: name.to_string(),
        })
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
