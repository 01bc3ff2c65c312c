//! Data models for travel statistics

use serde::{Deserialize, Serialize};

/// Number of visits recorded for one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCount {
    pub country_code: String,
    pub count: usize,
}

impl CountryCount {
    pub fn new(country_code: impl Into<String>, count: usize) -> Self {
        Self {
            country_code: country_code.into(),
            count,
        }
    }
}

/// Visit totals for one month of a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// Month index, 0 = January
    pub month: u32,

    pub visit_count: usize,

    /// Distinct country codes seen in the month
    pub unique_countries: usize,
}

/// Entry of a ranking list, rank starting at 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCountry {
    pub rank: usize,
    pub country_code: String,
    pub count: usize,
}
