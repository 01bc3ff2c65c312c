//! Per-day capacity rule
//!
//! A calendar day holds at most [`MAX_COUNTRIES_PER_DAY`] visit records. The
//! rule only counts records; it does not look at which countries they name.

use chrono::NaiveDate;

use crate::models::CountryVisit;

/// Maximum number of visit records on one calendar day
pub const MAX_COUNTRIES_PER_DAY: usize = 2;

/// Records that fall on `date`, in ledger order
pub fn visits_for_date<'a>(date: NaiveDate, visits: &'a [CountryVisit]) -> Vec<&'a CountryVisit> {
    visits.iter().filter(|visit| visit.date == date).collect()
}

/// True when `date` still has room for another record
pub fn can_add_visit_to_date(date: NaiveDate, visits: &[CountryVisit]) -> bool {
    visits.iter().filter(|visit| visit.date == date).count() < MAX_COUNTRIES_PER_DAY
}

/// First day of `days` (in the given order) that is already full
pub fn find_full_day(days: &[NaiveDate], visits: &[CountryVisit]) -> Option<NaiveDate> {
    days.iter()
        .copied()
        .find(|day| !can_add_visit_to_date(*day, visits))
}
