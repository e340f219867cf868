//! CLI argument definitions for the patent dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use patent_model::YearRange;

#[derive(Parser)]
#[command(
    name = "patent-dashboard",
    version,
    about = "Patent analytics dashboard - filter and aggregate patent extracts",
    long_about = "Filter pre-aggregated patent extracts by country, year range and\n\
                  technology domain, and print the derived chart series.\n\n\
                  Reads country_year_aggregation.csv, technology_aggregation.csv,\n\
                  tidy_data.csv and authority_aggregation.csv from the data directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Dashboard configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the summary and every chart series for a selection.
    Report(ReportArgs),

    /// List the countries and technologies offered by the pickers.
    Options(OptionsArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Directory containing the four CSV extracts (default: from config, else ./data).
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Country to select (repeatable). Without any, the first countries of
    /// the country-year extract are selected.
    #[arg(long = "country", value_name = "NAME", conflicts_with = "all_countries")]
    pub countries: Vec<String>,

    /// Select every country in the country-year extract.
    #[arg(long = "all-countries")]
    pub all_countries: bool,

    /// Inclusive year range, e.g. 2017-2021 or 2019.
    #[arg(long = "years", value_name = "MIN-MAX")]
    pub years: Option<YearRange>,

    /// Technology domain to filter by (repeatable).
    #[arg(long = "technology", value_name = "LABEL")]
    pub technologies: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Case-insensitive filter for country names.
    #[arg(long = "country-search", value_name = "TEXT", default_value = "")]
    pub country_search: String,

    /// Case-insensitive filter for technology labels.
    #[arg(long = "technology-search", value_name = "TEXT", default_value = "")]
    pub technology_search: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
