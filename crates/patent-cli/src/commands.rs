use std::path::Path;

use anyhow::{Context, Result};

use patent_cli::report::{OptionsRequest, ReportRequest, run_options, run_report};

use crate::cli::{OptionsArgs, OutputFormatArg, ReportArgs};
use crate::render::{print_options, print_report};

pub fn report(args: &ReportArgs, config: Option<&Path>) -> Result<()> {
    let request = ReportRequest {
        data_dir: args.data.data_dir.clone(),
        config_path: config.map(Path::to_path_buf),
        countries: args.countries.clone(),
        all_countries: args.all_countries,
        years: args.years,
        technologies: args.technologies.clone(),
    };
    let snapshot = run_report(&request)?;
    match args.format {
        OutputFormatArg::Table => print_report(&snapshot),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&snapshot).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn options(args: &OptionsArgs, config: Option<&Path>) -> Result<()> {
    let request = OptionsRequest {
        data_dir: args.data.data_dir.clone(),
        config_path: config.map(Path::to_path_buf),
        country_search: args.country_search.clone(),
        technology_search: args.technology_search.clone(),
    };
    let listing = run_options(&request)?;
    print_options(&listing);
    Ok(())
}
