use std::array;

use serde::{Deserialize, Serialize};

use crate::{core::draw::Draw, quantity::energy::KilowattHours};

pub const N_HOURS: usize = 24;

/// Lowest possible hourly reading.
const MIN_READING: KilowattHours = KilowattHours(20.0);

/// Number of distinct whole-kWh readings above the minimum.
const READING_SPAN: f64 = 50.0;

/// Power usage per hour of the day, from `0:00` to `23:00`.
///
/// Readings are whole kilowatt-hours in `[20, 70)`.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourlyPowerSample([KilowattHours; N_HOURS]);

impl HourlyPowerSample {
    /// Draw a fresh sample, one reading per hour in order.
    pub fn generate(source: &mut impl Draw) -> Self {
        Self(array::from_fn(|_| KilowattHours((source.draw() * READING_SPAN).floor()) + MIN_READING))
    }

    pub fn total(&self) -> KilowattHours {
        self.0.iter().copied().sum()
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn mean(&self) -> KilowattHours {
        self.total() / N_HOURS as f64
    }

    pub fn max(&self) -> KilowattHours {
        self.0.iter().copied().max().unwrap_or(MIN_READING)
    }

    /// Iterate over `(hour, reading)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, KilowattHours)> + '_ {
        self.0.iter().copied().enumerate()
    }
}
