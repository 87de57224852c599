//! Pure price computation for a rental.

use chrono::NaiveDate;

use crate::discount::Discount;
use crate::period::elapsed_days;

/// Total chargeable price for the span `start..end` at `daily_price`, after
/// applying `discount`.
///
/// The billed day count is the signed epoch-day difference, not the period
/// day component used by the length check in [`crate::period`]. The result
/// is clamped at 0.0 and never negative, which also means a reversed date
/// range silently yields 0.0; callers must run
/// [`crate::period::check_rental_period`] first to reject those.
pub fn total_price(
    start: NaiveDate,
    end: NaiveDate,
    daily_price: f64,
    discount: &Discount,
) -> f64 {
    let days = elapsed_days(start, end) as f64;
    let total_discount = (discount.percentage / 100.0) * daily_price * days;
    let total = daily_price * days - total_discount;
    total.max(0.0)
}
