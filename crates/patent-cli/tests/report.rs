//! Integration tests for the report and options commands.

use std::fs;
use std::path::Path;

use patent_cli::report::{OptionsRequest, ReportRequest, resolve_config, run_options, run_report};
use patent_model::YearRange;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write file");
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    write(
        dir.path(),
        "country_year_aggregation.csv",
        "COUNTRY_NAME,YEAR,OBS_VALUE_sum\n\
         United States,2018,100\n\
         United States,2019,150\n\
         Germany,2018,80\n\
         Japan,2020,60\n",
    );
    write(
        dir.path(),
        "technology_aggregation.csv",
        "COUNTRY_NAME,Selected OECD technology domains,OBS_VALUE_sum\n\
         United States,Biotechnology,30\n\
         Germany,ICT,12\n\
         Japan,ICT,40\n",
    );
    write(dir.path(), "tidy_data.csv", "country,year,patent_count\n");
    write(
        dir.path(),
        "authority_aggregation.csv",
        "PATENT_AUTHORITIES,COUNTRY_NAME,OBS_VALUE_sum\n\
         EPO,Germany,40\n\
         USPTO,United States,90\n\
         JPO,Japan,55\n",
    );
    dir
}

fn request(dir: &TempDir) -> ReportRequest {
    ReportRequest {
        data_dir: Some(dir.path().to_path_buf()),
        ..ReportRequest::default()
    }
}

#[test]
fn default_report_uses_seeded_countries() {
    let dir = data_dir();
    let snapshot = run_report(&request(&dir)).expect("run report");

    assert_eq!(snapshot.selection.countries.len(), 3);
    assert_eq!(snapshot.selection.year_range, YearRange::new(2018, 2020));
    assert_eq!(snapshot.summary.total_patents, 390);
    assert_eq!(snapshot.summary.top_country, "United States");
    assert_eq!(snapshot.technology_filter_label, None);
}

#[test]
fn explicit_selection_narrows_series() {
    let dir = data_dir();
    let snapshot = run_report(&ReportRequest {
        countries: vec!["Germany".to_string(), "Japan".to_string()],
        years: Some(YearRange::new(2018, 2019)),
        technologies: vec!["ICT".to_string()],
        ..request(&dir)
    })
    .expect("run report");

    assert_eq!(snapshot.country_totals.len(), 1);
    assert_eq!(snapshot.country_totals[0].country, "Germany");
    assert_eq!(snapshot.technology_totals[0].value, 52.0);
    assert_eq!(snapshot.authority_totals.len(), 2);
    assert_eq!(snapshot.technology_filter_label.as_deref(), Some("ICT"));
}

#[test]
fn report_serializes_to_json() {
    let dir = data_dir();
    let snapshot = run_report(&ReportRequest {
        all_countries: true,
        ..request(&dir)
    })
    .expect("run report");
    let json = serde_json::to_value(&snapshot).expect("serialize");

    assert_eq!(json["summary"]["avg_growth"], 5.2);
    assert_eq!(json["summary"]["avg_growth_is_placeholder"], true);
    assert_eq!(json["multi_country_trend"][0]["year"], 2018);
    assert_eq!(json["multi_country_trend"][0]["Germany"], 80.0);
}

#[test]
fn missing_data_dir_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let err = run_report(&ReportRequest {
        data_dir: Some(dir.path().join("missing")),
        ..ReportRequest::default()
    })
    .expect_err("report should fail");
    let message = format!("{err:#}");
    assert!(message.contains("load patent extracts"));
    assert!(message.contains("data directory not found"));
}

#[test]
fn options_apply_search() {
    let dir = data_dir();
    let listing = run_options(&OptionsRequest {
        data_dir: Some(dir.path().to_path_buf()),
        country_search: "an".to_string(),
        technology_search: String::new(),
        ..OptionsRequest::default()
    })
    .expect("run options");

    assert_eq!(listing.countries, vec!["Germany", "Japan"]);
    assert_eq!(listing.technologies, vec!["Biotechnology", "ICT"]);
}

#[test]
fn config_file_and_data_dir_override() {
    let dir = data_dir();
    let config_path = dir.path().join("dashboard.toml");
    write(
        dir.path(),
        "dashboard.toml",
        "data_dir = \"/does/not/exist\"\nseed_country_count = 1\n",
    );

    let config =
        resolve_config(Some(config_path.as_path()), Some(dir.path())).expect("resolve config");
    assert_eq!(config.data_dir, dir.path());
    assert_eq!(config.seed_country_count, 1);

    let snapshot = run_report(&ReportRequest {
        config_path: Some(config_path),
        ..request(&dir)
    })
    .expect("run report");
    assert_eq!(
        snapshot.selection.countries.iter().collect::<Vec<_>>(),
        vec!["United States"]
    );
}
