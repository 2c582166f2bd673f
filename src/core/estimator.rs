use serde::{Deserialize, Serialize};

use crate::{
    core::{draw::Draw, sample::HourlyPowerSample},
    prelude::*,
    quantity::{
        emission::{DieselEmissionFactor, GridEmissionFactor, KilogramsCo2},
        fuel::Litres,
    },
};

pub const EF_GRID: GridEmissionFactor = GridEmissionFactor(0.82);

pub const EF_DIESEL: DieselEmissionFactor = DieselEmissionFactor(2.68);

/// Share of the grid emissions reported as green savings.
pub const GREEN_SAVINGS_SHARE: f64 = 0.15;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionEstimate {
    /// Grid and fuel emissions combined.
    pub total_co2: KilogramsCo2,

    /// Whole kilograms.
    pub green_savings: KilogramsCo2,
}

impl EmissionEstimate {
    pub fn from_parts(sample: &HourlyPowerSample, fuel_volume: Litres) -> Self {
        let fuel_co2 = fuel_volume * EF_DIESEL;
        let grid_co2 = sample.total() * EF_GRID;
        Self {
            total_co2: fuel_co2 + grid_co2,
            green_savings: (grid_co2 * GREEN_SAVINGS_SHARE).round(),
        }
    }
}

/// Sample and estimate computed together from the same inputs.
///
/// The fields are private so that an estimate can never be paired with a foreign sample.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    fuel_volume: Litres,
    sample: HourlyPowerSample,
    estimate: EmissionEstimate,
}

impl Snapshot {
    pub fn new(sample: HourlyPowerSample, fuel_volume: Litres) -> Self {
        let estimate = EmissionEstimate::from_parts(&sample, fuel_volume);
        Self { fuel_volume, sample, estimate }
    }

    pub const fn fuel_volume(&self) -> Litres {
        self.fuel_volume
    }

    pub const fn sample(&self) -> &HourlyPowerSample {
        &self.sample
    }

    pub const fn estimate(&self) -> EmissionEstimate {
        self.estimate
    }
}

pub struct EmissionsEstimator<D = fastrand::Rng> {
    source: D,
}

impl Default for EmissionsEstimator {
    fn default() -> Self {
        Self::new(fastrand::Rng::new())
    }
}

impl<D: Draw> EmissionsEstimator<D> {
    pub const fn new(source: D) -> Self {
        Self { source }
    }

    /// Draw a new hourly sample and estimate the emissions for it and the fuel volume.
    ///
    /// Any fuel volume is accepted as is, including negative and non-finite values.
    #[instrument(skip_all, fields(fuel_volume = ?fuel_volume))]
    pub fn recompute(&mut self, fuel_volume: Litres) -> Snapshot {
        let snapshot = Snapshot::new(HourlyPowerSample::generate(&mut self.source), fuel_volume);
        debug!(
            total_co2 = ?snapshot.estimate.total_co2,
            green_savings = ?snapshot.estimate.green_savings,
            "recomputed"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{draw::Replay, sample::N_HOURS};

    fn snapshot(fuel_volume: f64, draw: f64) -> Snapshot {
        EmissionsEstimator::new(Replay::new([draw])).recompute(Litres(fuel_volume))
    }

    #[test]
    fn test_minimum_readings_default_fuel() {
        let snapshot = snapshot(60.0, 0.0);
        let estimate = snapshot.estimate();
        assert_abs_diff_eq!(estimate.total_co2.0, 554.4, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.green_savings.0, 59.0);
        assert_eq!(snapshot.fuel_volume(), Litres(60.0));
    }

    #[test]
    fn test_maximum_readings_no_fuel() {
        let estimate = snapshot(0.0, 0.999).estimate();
        assert_abs_diff_eq!(estimate.total_co2.0, 1357.92, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.green_savings.0, 204.0);
    }

    #[test]
    fn test_grid_alone_is_not_zero() {
        let estimate = snapshot(0.0, 0.0).estimate();
        assert!(estimate.total_co2 > KilogramsCo2(0.0));
        assert_abs_diff_eq!(estimate.total_co2.0, 393.6, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_fuel_is_propagated() {
        let estimate = snapshot(-100.0, 0.0).estimate();
        assert_abs_diff_eq!(estimate.total_co2.0, 393.6 - 268.0, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.green_savings.0, 59.0);
    }

    #[test]
    fn test_nan_fuel_is_propagated() {
        let estimate = snapshot(f64::NAN, 0.0).estimate();
        assert!(estimate.total_co2.0.is_nan());
        assert_abs_diff_eq!(estimate.green_savings.0, 59.0);
    }

    #[test]
    fn test_random_invariants() {
        let mut estimator = EmissionsEstimator::default();
        for fuel_volume in [0.0, 0.5, 60.0, 1234.5] {
            let snapshot = estimator.recompute(Litres(fuel_volume));
            let total: f64 = snapshot.sample().iter().map(|(_, reading)| reading.0).sum();
            let estimate = snapshot.estimate();
            assert_eq!(snapshot.sample().iter().count(), N_HOURS);
            assert_abs_diff_eq!(
                estimate.total_co2.0,
                fuel_volume * 2.68 + total * 0.82,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(estimate.green_savings.0, (total * 0.82 * 0.15).round());
        }
    }

    #[test]
    fn test_same_fuel_gives_fresh_samples() {
        let mut estimator = EmissionsEstimator::new(fastrand::Rng::with_seed(7));
        let first = estimator.recompute(Litres(60.0));
        let second = estimator.recompute(Litres(60.0));
        assert_ne!(first.sample(), second.sample());
        assert_eq!(first.fuel_volume(), second.fuel_volume());
    }
}
