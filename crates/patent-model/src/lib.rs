//! Data model for the patent analytics dashboard.
//!
//! Rows for the four extracts, the filter selection, and the series the
//! aggregation pipeline hands to charts. Numeric cells are kept as text and
//! parsed leniently on demand (see [`values`]).

pub mod error;
pub mod rows;
pub mod selection;
pub mod series;
pub mod store;
pub mod values;

pub use error::{ModelError, Result};
pub use rows::{AuthorityRow, CountryYearRow, Dataset, TechnologyRow, TidyRow};
pub use selection::{FilterSelection, YearRange};
pub use series::{
    AuthorityTotal, CountryTotal, PLACEHOLDER_AVG_GROWTH, Share, Summary, TechnologyTotal,
    TrendPoint, YearTotal,
};
pub use store::DatasetStore;
pub use values::{format_numeric, parse_observation, parse_year};
