//! Loading the extracts and running the dashboard for one CLI invocation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info_span;

use patent_core::{Dashboard, DashboardConfig, DashboardSnapshot};
use patent_ingest::load_dataset_store;
use patent_model::YearRange;

/// Selection requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub data_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    /// Explicit countries; empty keeps the seeded selection.
    pub countries: Vec<String>,
    pub all_countries: bool,
    pub years: Option<YearRange>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionsRequest {
    pub data_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub country_search: String,
    pub technology_search: String,
}

/// Picker options after search narrowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionsListing {
    pub countries: Vec<String>,
    pub technologies: Vec<String>,
}

/// Reads the config file if one was given; `data_dir` overrides its value.
pub fn resolve_config(
    config_path: Option<&Path>,
    data_dir: Option<&Path>,
) -> Result<DashboardConfig> {
    let mut config = match config_path {
        Some(path) => DashboardConfig::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(dir) = data_dir {
        config.data_dir = dir.to_path_buf();
    }
    Ok(config)
}

/// Builds a dashboard with the extracts from the configured data directory.
pub fn open_dashboard(config: DashboardConfig) -> Result<Dashboard> {
    let data_dir = config.data_dir.clone();
    let store = load_dataset_store(&data_dir)
        .with_context(|| format!("load patent extracts from {}", data_dir.display()))?;
    let mut dashboard = Dashboard::new(config);
    dashboard
        .attach_store(store)
        .context("attach dataset store")?;
    Ok(dashboard)
}

pub fn run_report(request: &ReportRequest) -> Result<DashboardSnapshot> {
    let config = resolve_config(request.config_path.as_deref(), request.data_dir.as_deref())?;
    let span = info_span!("report", data_dir = %config.data_dir.display());
    let _guard = span.enter();

    let mut dashboard = open_dashboard(config)?;
    if request.all_countries {
        dashboard.select_all_countries();
    } else if !request.countries.is_empty() {
        dashboard.set_countries(request.countries.iter().cloned());
    }
    if let Some(years) = request.years {
        dashboard.set_year_range(years.min(), years.max());
    }
    dashboard.set_technologies(request.technologies.iter().cloned());

    Ok(dashboard.snapshot())
}

pub fn run_options(request: &OptionsRequest) -> Result<OptionsListing> {
    let config = resolve_config(request.config_path.as_deref(), request.data_dir.as_deref())?;
    let mut dashboard = open_dashboard(config)?;
    let state = dashboard.state_mut();
    state.set_country_search(request.country_search.as_str());
    state.set_technology_search(request.technology_search.as_str());

    Ok(OptionsListing {
        countries: dashboard.offered_countries(),
        technologies: dashboard.offered_technologies(),
    })
}
