use std::io;

use clap::Parser;

use crate::{
    cli::output::OutputArgs,
    core::{estimator::EmissionsEstimator, session::Session},
    prelude::*,
    quantity::fuel::Litres,
};

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    output: OutputArgs,
}

impl ShowArgs {
    #[instrument(skip_all)]
    pub fn run(self, fuel_volume: Litres) -> Result {
        let session = Session::builder()
            .estimator(EmissionsEstimator::default())
            .fuel_volume(fuel_volume)
            .build();
        self.output.format.write(session.snapshot(), &mut io::stdout().lock())
    }
}
