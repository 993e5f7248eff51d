mod bars;
mod resolve;

use std::str::FromStr;

use jqfeed_core::{DatafeedSettings, Exchange, Interval};
use serde_json::Value;

use crate::cli::{Cli, Command, InstrumentArgs};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Bars(args) => bars::run(args, load_settings(cli)?),
        Command::Resolve(args) => resolve::run(args),
    }
}

fn load_settings(cli: &Cli) -> Result<DatafeedSettings, CliError> {
    let settings = match &cli.settings {
        Some(path) => {
            log::info!("loading datafeed settings from {}", path.display());
            DatafeedSettings::from_json_file(path)?
        }
        None => DatafeedSettings::from_env()?,
    };
    Ok(settings)
}

fn parse_instrument(args: &InstrumentArgs) -> Result<(Exchange, Interval), CliError> {
    let exchange = Exchange::from_str(&args.exchange)?;
    let interval = Interval::from_str(&args.interval)?;
    Ok((exchange, interval))
}
