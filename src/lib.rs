//! Domain rules for a car-rental backend.
//!
//! Validates proposed rentals (participant existence, date range, mileage)
//! and computes the total price after discount. The crate is a library
//! consumed by a request-handling layer; persistence and HTTP mapping stay
//! outside. External lookups are injected through the traits in
//! [`directory`] and [`discount`].

pub mod directory;
pub mod discount;
pub mod error;
pub mod mileage;
pub mod period;
pub mod pricing;
pub mod request;
pub mod validator;

pub use directory::{CarDirectory, CustomerDirectory, EmployeeDirectory};
pub use discount::{Discount, DiscountDirectory, DEFAULT_DISCOUNT_CODE};
pub use error::{DomainError, DomainResult};
pub use request::RentalRequest;
pub use validator::RentalPricingValidator;
