//! Filter-and-aggregation pipeline for the patent analytics dashboard.
//!
//! Given a [`patent_model::DatasetStore`] and a
//! [`patent_model::FilterSelection`], this crate resolves the effective
//! country set, filters the four extracts and derives the chart series.
//! All of it is pure and synchronous; [`Dashboard`] recomputes everything on
//! each call.
//!
//! # Example
//!
//! ```ignore
//! use patent_core::{Dashboard, DashboardConfig};
//!
//! let mut dashboard = Dashboard::new(DashboardConfig::default());
//! dashboard.attach_store(store)?;
//! dashboard.set_year_range(2019, 2021);
//! for total in dashboard.country_totals() {
//!     println!("{}: {}", total.country, total.patents);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod options;
pub mod resolve;
pub mod state;
pub mod summary;

pub use aggregate::{
    AggregationLimits, all_country_totals, authority_totals, country_totals, multi_country_trend,
    technology_totals, top_countries, with_shares, yearly_totals,
};
pub use config::{DEFAULT_FALLBACK_YEARS, DashboardConfig};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use error::{CoreError, Result};
pub use filter::{
    FilteredRows, filter_authority, filter_country_year, filter_store, filter_technology,
    filter_tidy,
};
pub use options::{matches_search, offered_countries, offered_technologies};
pub use resolve::resolve_effective_countries;
pub use state::{FilterState, SeedState};
pub use summary::{compute_summary, measured_growth};
