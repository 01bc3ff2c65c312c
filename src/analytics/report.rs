//! Summary shown by a statistics view

use serde::Serialize;

use crate::analytics::aggregator::{
    average_visits_per_country, most_visited_countries, total_countries_visited, total_visits,
};
use crate::analytics::models::RankedCountry;
use crate::ledger::visits_in_year;
use crate::models::CountryVisit;

/// Headline numbers plus the most-visited ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    /// Year the visits were filtered to, `None` for all time
    pub year: Option<i32>,
    pub total_countries: usize,
    pub total_visits: usize,
    pub average_visits_per_country: f64,
    pub most_visited: Vec<RankedCountry>,
}

impl StatisticsReport {
    pub fn build(visits: &[CountryVisit], year: Option<i32>, ranking_limit: usize) -> Self {
        let filtered;
        let visits = match year {
            Some(year) => {
                filtered = visits_in_year(visits, year);
                filtered.as_slice()
            }
            None => visits,
        };

        let most_visited = most_visited_countries(visits, ranking_limit)
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| RankedCountry {
                rank: idx + 1,
                country_code: entry.country_code,
                count: entry.count,
            })
            .collect();

        Self {
            year,
            total_countries: total_countries_visited(visits),
            total_visits: total_visits(visits),
            average_visits_per_country: average_visits_per_country(visits),
            most_visited,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_visits == 0
    }
}
