//! Rental period rules.
//!
//! Two distinct day computations coexist here on purpose. The period check
//! uses the day component of the normalized calendar period between the two
//! dates (day-of-month delta with a month borrow, whole months ignored),
//! while billing in [`crate::pricing`] uses the signed epoch-day difference.
//! They disagree for spans crossing a month boundary; both semantics are
//! load-bearing and must not be merged (see the tests at the bottom and in
//! `tests/rental_workflow.rs`).

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{DomainError, DomainResult};

/// Longest allowed rental, in period-day-component days.
pub const MAX_RENTAL_DAYS: i64 = 25;

/// Month count since year 0, used to normalize calendar periods.
fn proleptic_month(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

fn length_of_month(date: NaiveDate) -> i64 {
    match date.month() {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if date.leap_year() {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Day component of the normalized calendar period from `start` to `end`.
///
/// Whole months and years are folded away: one exact month yields 0, a month
/// and three days yields 3. When the day-of-month delta is negative inside a
/// positive month span, a month is borrowed and the leftover is counted in
/// real days from the borrowed anchor date.
pub fn period_day_component(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut total_months = proleptic_month(end) - proleptic_month(start);
    let mut days = end.day() as i64 - start.day() as i64;

    if total_months > 0 && days < 0 {
        total_months -= 1;
        // Month addition clamps the day-of-month (Jan 31 + 1 month = Feb 29),
        // so the anchor is always representable; the fallback is unreachable
        // for in-range dates.
        if let Some(anchor) = start.checked_add_months(Months::new(total_months as u32)) {
            days = (end - anchor).num_days();
        }
    } else if total_months < 0 && days > 0 {
        days -= length_of_month(end);
    }
    days
}

/// Signed day difference `end - start` (epoch-day subtraction).
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Enforce rental period preconditions.
///
/// Fails if `start` is strictly after `end`, or if the period's day component
/// exceeds [`MAX_RENTAL_DAYS`]. Note that the length check sees only the day
/// component: a span of exactly one calendar month has component 0 and
/// passes, however many real days it covers.
pub fn check_rental_period(start: NaiveDate, end: NaiveDate) -> DomainResult<()> {
    let rental_days = period_day_component(start, end);

    if start > end {
        return Err(DomainError::BusinessRule(
            "start date must be before the rental end date".to_string(),
        ));
    }
    if rental_days > MAX_RENTAL_DAYS {
        return Err(DomainError::BusinessRule(format!(
            "a car can be rented for a maximum of {MAX_RENTAL_DAYS} days"
        )));
    }
    Ok(())
}
