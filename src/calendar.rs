//! Month layout for calendar views
//!
//! Months are indexed 0-11 throughout, matching the monthly breakdown.

use chrono::{Datelike, Days, NaiveDate};

/// One calendar row, Sunday first; `None` pads days outside the month
pub type Week = [Option<NaiveDate>; 7];

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if month > 11 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
}

/// Number of days in month `month` (0-11) of `year`
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Weeks of month `month` (0-11) of `year`, padded to full rows
pub fn month_weeks(year: i32, month: u32) -> Option<Vec<Week>> {
    let first = first_of_month(year, month)?;
    let len = days_in_month(year, month)?;
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    for offset in 0..len {
        cells.push(first.checked_add_days(Days::new(u64::from(offset))));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    Some(
        cells
            .chunks(7)
            .map(|chunk| {
                let mut week: Week = [None; 7];
                week.copy_from_slice(chunk);
                week
            })
            .collect(),
    )
}
