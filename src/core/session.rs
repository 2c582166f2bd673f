use bon::bon;

use crate::{
    core::{
        draw::Draw,
        estimator::{EmissionsEstimator, Snapshot},
    },
    prelude::*,
    quantity::fuel::Litres,
};

#[derive(Copy, Clone, Debug)]
pub enum Event {
    FuelVolumeUpdated(Litres),
}

/// Dashboard state: the estimator and the latest snapshot it produced.
pub struct Session<D = fastrand::Rng> {
    estimator: EmissionsEstimator<D>,
    snapshot: Snapshot,
}

#[bon]
impl<D: Draw> Session<D> {
    /// Start the session with an initial estimate for the fuel volume.
    #[builder]
    pub fn new(estimator: EmissionsEstimator<D>, fuel_volume: Litres) -> Self {
        let mut estimator = estimator;
        let snapshot = estimator.recompute(fuel_volume);
        Self { estimator, snapshot }
    }

    /// Recompute and replace the whole snapshot.
    ///
    /// Repeating the same fuel volume still draws a new sample.
    pub fn handle(&mut self, event: Event) -> &Snapshot {
        match event {
            Event::FuelVolumeUpdated(fuel_volume) => {
                info!(?fuel_volume, previous = ?self.fuel_volume(), "fuel volume updated");
                self.snapshot = self.estimator.recompute(fuel_volume);
            }
        }
        &self.snapshot
    }

    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub const fn fuel_volume(&self) -> Litres {
        self.snapshot.fuel_volume()
    }
}
