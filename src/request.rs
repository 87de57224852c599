//! Rental request value type handed over by the request layer.

use chrono::NaiveDate;
use validator::Validate;

/// A proposed rental, as received from the surrounding request layer.
///
/// Not persisted by this crate; it only carries the fields the rule set
/// needs. Field-level bounds are enforced with [`validator`], cross-field
/// rules (date ordering, mileage direction, participant existence) live in
/// [`crate::validator::RentalPricingValidator`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Validate)]
pub struct RentalRequest {
    pub car_id: i32,
    pub customer_id: i32,
    pub employee_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub daily_price: f64,
    pub discount_code: Option<String>,
    pub current_kilometer: u32,
    pub end_kilometer: u32,
}
