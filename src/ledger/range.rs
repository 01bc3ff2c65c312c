use chrono::NaiveDate;

/// Every calendar day from `start` to `end`, both inclusive, in ascending order.
///
/// Returns an empty list when `end` falls before `start`; callers that need to
/// report that case check the bounds first (see [`super::planner::plan_visits`]).
pub fn expand_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if end < start {
        return Vec::new();
    }

    let mut days = Vec::with_capacity(day_span(start, end));
    days.extend(start.iter_days().take_while(|day| *day <= end));
    days
}

/// Number of days in the inclusive range, 0 when reversed
pub fn day_span(start: NaiveDate, end: NaiveDate) -> usize {
    if end < start {
        0
    } else {
        ((end - start).num_days() + 1) as usize
    }
}
