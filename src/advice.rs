use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{core::estimator::EmissionEstimate, quantity::emission::KilogramsCo2};

/// Share of the total footprint saved monthly by moving 20% of the load to solar.
pub const SOLAR_SHIFT_SHARE: f64 = 0.1;

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SolarShiftAdvice {
    /// Monthly, whole kilograms.
    pub extra_savings: KilogramsCo2,
}

impl From<&EmissionEstimate> for SolarShiftAdvice {
    fn from(estimate: &EmissionEstimate) -> Self {
        Self { extra_savings: (estimate.total_co2 * SOLAR_SHIFT_SHARE).round() }
    }
}

impl Display for SolarShiftAdvice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Based on your energy profile, switching 20% load to solar can save extra {:.0} monthly.",
            self.extra_savings,
        )
    }
}
