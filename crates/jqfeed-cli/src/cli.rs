//! CLI argument definitions for jqfeed.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `bars` | Fetch historical bars from JQData |
//! | `resolve` | Show the vendor query a request would produce, offline |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--settings` | env | Settings JSON with `datafeed.username` / `datafeed.password` |
//! | `--format` | `json` | Output format (json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--log-level` | `RUST_LOG` or `info` | Log filter |
//!
//! # Examples
//!
//! ```bash
//! jqfeed bars 600000 --exchange SSE --interval 1m --start "2023-01-03 09:30" --end "2023-01-03 15:00"
//! jqfeed resolve 999999 --exchange SSE --interval d
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// jqfeed - JQData historical bar datafeed
#[derive(Debug, Parser)]
#[command(
    name = "jqfeed",
    author,
    version,
    about = "Fetch JQData history as platform bars"
)]
pub struct Cli {
    /// Settings JSON file. Without it, credentials come from
    /// JQFEED_DATAFEED_USERNAME / JQFEED_DATAFEED_PASSWORD.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log filter (e.g. info, debug, jqfeed_core=debug). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document.
    Json,
    /// Newline-delimited JSON (one bar per line).
    Ndjson,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch historical bars.
    ///
    /// Datetimes accept RFC3339 or "YYYY-MM-DD[ HH:MM[:SS]]" read as Beijing time.
    ///
    /// # Examples
    ///
    ///   jqfeed bars 600000 --interval 1m --start 2023-01-03 --end "2023-01-03 15:00"
    ///   jqfeed bars 000852 --exchange SSE --start 2023-01-01 --end 2023-01-31 --format ndjson
    Bars(BarsArgs),

    /// Show the vendor code, frequency, and bounds a request would use.
    ///
    /// No credentials or network access are needed.
    Resolve(ResolveArgs),
}

/// Instrument selection shared by the commands.
#[derive(Debug, Args)]
pub struct InstrumentArgs {
    /// Platform symbol (e.g. 600000, 999999, 000852).
    pub symbol: String,

    /// Platform exchange code.
    #[arg(long, default_value = "SSE")]
    pub exchange: String,

    /// Bar interval: 1m, 1h, d (default), w.
    #[arg(long, default_value = "d")]
    pub interval: String,
}

/// Arguments for the `bars` command.
#[derive(Debug, Args)]
pub struct BarsArgs {
    #[command(flatten)]
    pub instrument: InstrumentArgs,

    /// Range start.
    #[arg(long)]
    pub start: String,

    /// Range end (inclusive).
    #[arg(long)]
    pub end: String,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub instrument: InstrumentArgs,

    /// Range start (default: now).
    #[arg(long)]
    pub start: Option<String>,

    /// Range end (default: now).
    #[arg(long)]
    pub end: Option<String>,
}
