//! Visit ledger and day-constraint engine
//!
//! The ledger itself is a plain `[CountryVisit]` owned by the caller. Nothing
//! in this module mutates a collection; every operation reads the current
//! snapshot and returns new values for the caller to swap in.

pub mod capacity;
pub mod ids;
pub mod planner;
pub mod range;

use chrono::Datelike;

use crate::models::{CountryVisit, VisitId};

pub use capacity::{can_add_visit_to_date, find_full_day, visits_for_date, MAX_COUNTRIES_PER_DAY};
pub use ids::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use planner::{plan_visits, MissingField, PlanError, VisitRequest};
pub use range::{day_span, expand_date_range};

/// Append-only union: existing records first, then `new` in its own order
pub fn merge_visits(ledger: &[CountryVisit], new: &[CountryVisit]) -> Vec<CountryVisit> {
    let mut merged = Vec::with_capacity(ledger.len() + new.len());
    merged.extend_from_slice(ledger);
    merged.extend_from_slice(new);
    merged
}

/// The ledger without the record `id`
pub fn remove_visit(ledger: &[CountryVisit], id: &VisitId) -> Vec<CountryVisit> {
    ledger.iter().filter(|visit| &visit.id != id).cloned().collect()
}

/// Records whose date falls in `year`
pub fn visits_in_year(visits: &[CountryVisit], year: i32) -> Vec<CountryVisit> {
    visits
        .iter()
        .filter(|visit| visit.date.year() == year)
        .cloned()
        .collect()
}
