mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let data = commands::run(cli)?;
    output::render(&data, cli.format, cli.pretty)
}

fn init_logging(level: Option<&str>) {
    let mut builder = match level {
        Some(filters) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(filters);
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("info")),
    };
    builder.init();
}
