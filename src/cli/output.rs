use std::io::Write;

use clap::Parser;
use serde::Serialize;

use crate::{
    advice::SolarShiftAdvice,
    core::estimator::Snapshot,
    prelude::*,
    tables::{build_advice_table, build_cards_table, build_power_usage_table},
};

#[derive(Parser)]
pub struct OutputArgs {
    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// One JSON object per snapshot, each on its own line.
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot,

    advice: SolarShiftAdvice,
}

impl OutputFormat {
    pub fn write(self, snapshot: &Snapshot, writer: &mut impl Write) -> Result {
        let advice = SolarShiftAdvice::from(&snapshot.estimate());
        match self {
            Self::Table => {
                writeln!(writer, "{}", build_cards_table(snapshot))?;
                writeln!(writer, "{}", build_power_usage_table(snapshot.sample()))?;
                writeln!(writer, "{}", build_advice_table(&advice))?;
            }
            Self::Json => {
                serde_json::to_writer(&mut *writer, &Report { snapshot, advice })
                    .context("failed to serialize the snapshot")?;
                writeln!(writer)?;
            }
        }
        writer.flush().context("failed to flush the output")
    }
}
