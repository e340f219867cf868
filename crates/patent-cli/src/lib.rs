//! CLI library components for the patent analytics dashboard.

pub mod logging;
pub mod report;
