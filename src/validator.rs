//! Rental precondition checks and price calculation over injected lookups.

use chrono::NaiveDate;
use validator::Validate;

use crate::directory::{CarDirectory, CustomerDirectory, EmployeeDirectory};
use crate::discount::{Discount, DiscountDirectory, DEFAULT_DISCOUNT_CODE};
use crate::error::{DomainError, DomainResult};
use crate::mileage::check_mileage;
use crate::period::check_rental_period;
use crate::pricing::total_price;
use crate::request::RentalRequest;

/// Validates a proposed rental and computes its total price.
///
/// Holds only read-only references to its collaborators, so a single
/// instance is safe to share across request-handling tasks. All operations
/// are stateless; collaborator lookups are assumed synchronous and
/// side-effect-free.
pub struct RentalPricingValidator<'a> {
    cars: &'a dyn CarDirectory,
    customers: &'a dyn CustomerDirectory,
    employees: &'a dyn EmployeeDirectory,
    discounts: &'a dyn DiscountDirectory,
}

impl<'a> RentalPricingValidator<'a> {
    pub fn new(
        cars: &'a dyn CarDirectory,
        customers: &'a dyn CustomerDirectory,
        employees: &'a dyn EmployeeDirectory,
        discounts: &'a dyn DiscountDirectory,
    ) -> Self {
        Self {
            cars,
            customers,
            employees,
            discounts,
        }
    }

    /// Check that all three rental participants exist.
    ///
    /// Lookups run in the order car, customer, employee and the first
    /// missing participant short-circuits, so error messages are
    /// deterministic even when several references dangle.
    pub fn check_participants_exist(
        &self,
        car_id: i32,
        customer_id: i32,
        employee_id: i32,
    ) -> DomainResult<()> {
        if !self.cars.exists(car_id) {
            return Err(DomainError::NotFound {
                entity: "Car",
                id: car_id,
            });
        }
        if !self.customers.exists(customer_id) {
            return Err(DomainError::NotFound {
                entity: "Customer",
                id: customer_id,
            });
        }
        if !self.employees.exists(employee_id) {
            return Err(DomainError::NotFound {
                entity: "Employee",
                id: employee_id,
            });
        }
        Ok(())
    }

    /// Resolve a discount code to its record, falling back to the
    /// [`DEFAULT_DISCOUNT_CODE`] discount for missing, empty, or unknown
    /// codes.
    ///
    /// Fails with [`DomainError::DiscountNotFound`] only when the fallback
    /// itself is not registered.
    pub fn resolve_discount(&self, code: Option<&str>) -> DomainResult<Discount> {
        if let Some(code) = code.filter(|c| !c.is_empty()) {
            if let Some(discount) = self.discounts.find_by_code(code) {
                return Ok(discount);
            }
            tracing::debug!(code, "unknown discount code, falling back to default");
        }

        self.discounts
            .find_by_code(DEFAULT_DISCOUNT_CODE)
            .ok_or_else(|| DomainError::DiscountNotFound {
                code: DEFAULT_DISCOUNT_CODE.to_string(),
            })
    }

    /// Total chargeable price for the span at `daily_price`, after the
    /// discount resolved from `discount_code`.
    ///
    /// Does not validate date ordering; run [`check_rental_period`] first,
    /// otherwise a reversed range is silently clamped to 0.0.
    pub fn calculate_total_price(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        daily_price: f64,
        discount_code: Option<&str>,
    ) -> DomainResult<f64> {
        let discount = self.resolve_discount(discount_code)?;
        Ok(total_price(start, end, daily_price, &discount))
    }

    /// Run the full rental-creation rule set over `request` and return the
    /// total price.
    ///
    /// Order: field bounds, participant existence, rental period, mileage,
    /// then pricing.
    pub fn price_rental(&self, request: &RentalRequest) -> DomainResult<f64> {
        request
            .validate()
            .map_err(|err| DomainError::BusinessRule(err.to_string()))?;

        self.check_participants_exist(request.car_id, request.customer_id, request.employee_id)?;
        check_rental_period(request.start_date, request.end_date)?;
        check_mileage(request.current_kilometer, request.end_kilometer)?;

        let total = self.calculate_total_price(
            request.start_date,
            request.end_date,
            request.daily_price,
            request.discount_code.as_deref(),
        )?;

        tracing::debug!(
            car_id = request.car_id,
            customer_id = request.customer_id,
            total,
            "rental request priced"
        );
        Ok(total)
    }
}
