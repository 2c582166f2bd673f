mod output;
mod show;
mod watch;

use clap::{Parser, Subcommand};

pub use self::{show::ShowArgs, watch::WatchArgs};
use crate::{prelude::*, quantity::fuel::Litres};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Burnt diesel volume in litres.
    #[clap(
        long = "fuel-litres",
        env = "FUEL_LITRES",
        default_value = "60",
        global = true,
        allow_negative_numbers = true
    )]
    pub fuel_volume: Litres,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Show(args) => args.run(self.fuel_volume),
            Command::Watch(args) => args.run(self.fuel_volume),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the emissions once and print the dashboard.
    #[clap(name = "show")]
    Show(ShowArgs),

    /// Print the dashboard, then re-estimate on every fuel volume read from the standard input.
    #[clap(name = "watch")]
    Watch(WatchArgs),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let args =
            Args::try_parse_from(["smartcarbon", "--fuel-litres=12.5", "show", "--format", "json"])
                .unwrap();
        assert_eq!(args.fuel_volume, Litres(12.5));
        assert!(matches!(args.command, Command::Show(_)));
    }

    #[test]
    fn test_parse_negative_fuel_after_subcommand() {
        let args = Args::try_parse_from(["smartcarbon", "watch", "--fuel-litres", "-5"]).unwrap();
        assert_eq!(args.fuel_volume, Litres(-5.0));
        assert!(matches!(args.command, Command::Watch(_)));
    }

    #[test]
    fn test_reject_non_numeric_fuel() {
        assert!(Args::try_parse_from(["smartcarbon", "--fuel-litres", "lots", "show"]).is_err());
    }
}
