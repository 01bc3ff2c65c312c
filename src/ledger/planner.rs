//! Validated add: turns a country plus date range into new visit records
//!
//! Capacity is checked against the ledger as it stood before the request.
//! Days inside the requested range do not count against each other, and a
//! single full day rejects the whole range.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use super::capacity::find_full_day;
use super::ids::IdGenerator;
use super::range::expand_date_range;
use crate::models::CountryVisit;

/// Input the caller failed to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Country,
    Date,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Country => f.write_str("country"),
            MissingField::Date => f.write_str("date"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("please select a {0}")]
    MissingSelection(MissingField),

    #[error("end date {end} cannot be before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("maximum 2 countries per day exceeded for {date}")]
    DayAtCapacity { date: NaiveDate },
}

/// A request to record one country over a range of days
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitRequest {
    pub country_code: Option<String>,
    pub start: Option<NaiveDate>,
    /// Defaults to `start` for a single-day visit
    pub end: Option<NaiveDate>,
}

impl VisitRequest {
    pub fn new(country_code: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            country_code: Some(country_code.into()),
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn single_day(country_code: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            country_code: Some(country_code.into()),
            start: Some(date),
            end: None,
        }
    }
}

/// Build the records for `request`, or explain why none can be created.
///
/// On success there is exactly one record per day of the range, in ascending
/// date order, each with a fresh id from `ids`. `existing` is only read.
pub fn plan_visits(
    request: &VisitRequest,
    existing: &[CountryVisit],
    ids: &dyn IdGenerator,
) -> Result<Vec<CountryVisit>, PlanError> {
    let country_code = request
        .country_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or(PlanError::MissingSelection(MissingField::Country))?;

    let start = request
        .start
        .ok_or(PlanError::MissingSelection(MissingField::Date))?;
    let end = request.end.unwrap_or(start);

    if end < start {
        debug!(%start, %end, "Rejected visit range: end before start");
        return Err(PlanError::InvalidRange { start, end });
    }

    let days = expand_date_range(start, end);

    if let Some(date) = find_full_day(&days, existing) {
        debug!(country_code, %date, "Rejected visit range: day at capacity");
        return Err(PlanError::DayAtCapacity { date });
    }

    debug!(country_code, days = days.len(), "Planned visits");

    Ok(days
        .into_iter()
        .map(|date| CountryVisit::new(ids.next_id(), country_code, date))
        .collect())
}
