//! Statistics over a visit collection
//!
//! Every function here is total: an empty collection yields zero counts,
//! empty rankings and an average of 0. Collections that break the per-day
//! capacity rule are counted as they are.
//!
//! Rankings order by count and then by country code ascending, so equal
//! counts always come out in the same order.

use chrono::Datelike;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use crate::analytics::models::{CountryCount, MonthlyStats};
use crate::models::CountryVisit;

/// Number of distinct country codes
pub fn total_countries_visited(visits: &[CountryVisit]) -> usize {
    visits
        .iter()
        .map(|visit| visit.country_code.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of records, repeats included
pub fn total_visits(visits: &[CountryVisit]) -> usize {
    visits.len()
}

/// Record count per country code
pub fn visits_by_country(visits: &[CountryVisit]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for visit in visits {
        *counts.entry(visit.country_code.clone()).or_insert(0) += 1;
    }
    counts
}

fn ranked(
    visits: &[CountryVisit],
    limit: usize,
    by_count: fn(usize, usize) -> Ordering,
) -> Vec<CountryCount> {
    let mut entries: Vec<CountryCount> = visits_by_country(visits)
        .into_iter()
        .map(|(country_code, count)| CountryCount { country_code, count })
        .collect();

    entries.sort_by(|a, b| {
        by_count(a.count, b.count).then_with(|| a.country_code.cmp(&b.country_code))
    });

    if limit > 0 {
        entries.truncate(limit);
    }
    entries
}

/// Countries by visit count, highest first. `limit == 0` returns all.
pub fn most_visited_countries(visits: &[CountryVisit], limit: usize) -> Vec<CountryCount> {
    ranked(visits, limit, |a, b| b.cmp(&a))
}

/// Countries by visit count, lowest first. `limit == 0` returns all.
pub fn least_visited_countries(visits: &[CountryVisit], limit: usize) -> Vec<CountryCount> {
    ranked(visits, limit, |a, b| a.cmp(&b))
}

/// Twelve entries (January first) for `year`; other years are ignored
pub fn monthly_breakdown(visits: &[CountryVisit], year: i32) -> Vec<MonthlyStats> {
    let mut countries: Vec<HashSet<&str>> = vec![HashSet::new(); 12];
    let mut breakdown: Vec<MonthlyStats> = (0..12)
        .map(|month| MonthlyStats {
            month,
            ..MonthlyStats::default()
        })
        .collect();

    for visit in visits.iter().filter(|visit| visit.date.year() == year) {
        let month = visit.date.month0() as usize;
        breakdown[month].visit_count += 1;
        countries[month].insert(visit.country_code.as_str());
    }

    for (stats, seen) in breakdown.iter_mut().zip(&countries) {
        stats.unique_countries = seen.len();
    }
    breakdown
}

/// Records per distinct country, unrounded; 0 for an empty collection
pub fn average_visits_per_country(visits: &[CountryVisit]) -> f64 {
    let countries = total_countries_visited(visits);
    if countries == 0 {
        return 0.0;
    }
    visits.len() as f64 / countries as f64
}

/// Top entry of [`most_visited_countries`]
pub fn most_visited_country(visits: &[CountryVisit]) -> Option<CountryCount> {
    most_visited_countries(visits, 1).into_iter().next()
}
