use std::io::{self, BufRead, Write};

use clap::Parser;

use crate::{
    cli::output::{OutputArgs, OutputFormat},
    core::{
        draw::Draw,
        estimator::EmissionsEstimator,
        session::{Event, Session},
    },
    prelude::*,
    quantity::fuel::Litres,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    output: OutputArgs,
}

impl WatchArgs {
    pub fn run(self, fuel_volume: Litres) -> Result {
        let mut session = Session::builder()
            .estimator(EmissionsEstimator::default())
            .fuel_volume(fuel_volume)
            .build();
        let n_updates =
            watch(&mut session, io::stdin().lock(), &mut io::stdout().lock(), self.output.format)?;
        info!(n_updates, final_fuel_volume = ?session.fuel_volume(), "input closed");
        Ok(())
    }
}

/// Print the current snapshot, then turn every numeric input line into a fuel volume update.
///
/// Returns the number of handled updates.
#[instrument(skip_all)]
fn watch<D: Draw>(
    session: &mut Session<D>,
    input: impl BufRead,
    output: &mut impl Write,
    format: OutputFormat,
) -> Result<usize> {
    format.write(session.snapshot(), output)?;
    let mut n_updates = 0;
    for line in input.lines() {
        let line = line.context("failed to read the input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Litres>() {
            Ok(fuel_volume) => {
                let snapshot = session.handle(Event::FuelVolumeUpdated(fuel_volume));
                format.write(snapshot, output)?;
                n_updates += 1;
            }
            Err(error) => {
                warn!(line, %error, "not a fuel volume, skipping");
            }
        }
    }
    Ok(n_updates)
}
