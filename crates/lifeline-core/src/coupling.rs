//! Influence-coupling policies.
//!
//! A coupling mode maps an upstream asset's condition and the connecting
//! edge's weight to a downstream impact contribution. Pure functions of
//! their inputs; the simulator selects one mode per scenario.

use crate::error::ParseTagError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tagged coupling variant with exactly one operation, [`impact`].
///
/// Unknown tags are rejected at parse time rather than silently falling back
/// to [`CouplingMode::Linear`].
///
/// [`impact`]: CouplingMode::impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouplingMode {
    /// Proportional transfer: a fully healthy upstream asset contributes 0,
    /// a fully failed one contributes its full edge weight.
    #[default]
    Linear,
    /// Binary trigger: the upstream asset contributes its full edge weight
    /// only once it has itself crossed the failure threshold.
    Threshold,
}

impl CouplingMode {
    /// Impact contribution of one predecessor. Always >= 0 for conditions
    /// in [0, 1] and positive weights.
    #[inline]
    #[must_use]
    pub fn impact(self, source_condition: f64, weight: f64, threshold: f64) -> f64 {
        match self {
            CouplingMode::Linear => (1.0 - source_condition) * weight,
            CouplingMode::Threshold => {
                if source_condition <= threshold {
                    weight
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for CouplingMode {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(CouplingMode::Linear),
            "threshold" => Ok(CouplingMode::Threshold),
            other => Err(ParseTagError::new("coupling mode", other)),
        }
    }
}

impl fmt::Display for CouplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CouplingMode::Linear => write!(f, "linear"),
            CouplingMode::Threshold => write!(f, "threshold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_impact_scales_with_degradation() {
        let mode = CouplingMode::Linear;
        assert_eq!(mode.impact(1.0, 0.9, 0.5), 0.0);
        assert_eq!(mode.impact(0.0, 0.9, 0.5), 0.9);
        assert!((mode.impact(0.5, 0.8, 0.5) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn threshold_impact_is_all_or_nothing() {
        let mode = CouplingMode::Threshold;
        assert_eq!(mode.impact(0.51, 0.9, 0.5), 0.0);
        assert_eq!(mode.impact(0.5, 0.9, 0.5), 0.9);
        assert_eq!(mode.impact(0.0, 0.9, 0.5), 0.9);
    }

    #[test]
    fn unknown_tag_is_an_error_not_a_fallback() {
        let err = "quadratic".parse::<CouplingMode>().unwrap_err();
        assert_eq!(err.tag, "quadratic");
        assert_eq!("linear".parse::<CouplingMode>().unwrap(), CouplingMode::Linear);
        assert_eq!(
            "threshold".parse::<CouplingMode>().unwrap(),
            CouplingMode::Threshold
        );
    }
}
