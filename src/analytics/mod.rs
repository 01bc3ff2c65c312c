//! Travel statistics
//!
//! Read-only metrics over any slice of visit records. Callers that want a
//! single year either pre-filter with [`crate::ledger::visits_in_year`] or use
//! [`StatisticsReport::build`] with a year.

pub mod aggregator;
pub mod models;
pub mod report;

pub use aggregator::{
    average_visits_per_country, least_visited_countries, monthly_breakdown,
    most_visited_countries, most_visited_country, total_countries_visited, total_visits,
    visits_by_country,
};
pub use models::{CountryCount, MonthlyStats, RankedCountry};
pub use report::StatisticsReport;
