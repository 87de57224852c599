//! In-memory collaborator fixtures shared by the integration tests.

use rentigo_core::{
    CarDirectory, CustomerDirectory, Discount, DiscountDirectory, EmployeeDirectory,
    DEFAULT_DISCOUNT_CODE,
};

pub struct Fleet(pub Vec<i32>);

impl CarDirectory for Fleet {
    fn exists(&self, id: i32) -> bool {
        self.0.contains(&id)
    }
}

pub struct Customers(pub Vec<i32>);

impl CustomerDirectory for Customers {
    fn exists(&self, id: i32) -> bool {
        self.0.contains(&id)
    }
}

pub struct Staff(pub Vec<i32>);

impl EmployeeDirectory for Staff {
    fn exists(&self, id: i32) -> bool {
        self.0.contains(&id)
    }
}

pub struct DiscountBook(pub Vec<Discount>);

impl DiscountDirectory for DiscountBook {
    fn find_by_code(&self, code: &str) -> Option<Discount> {
        self.0.iter().find(|d| d.code == code).cloned()
    }
}

/// Discount book with a zero-percent default and a 20% seasonal code.
pub fn seeded_discounts() -> DiscountBook {
    DiscountBook(vec![
        Discount::new(DEFAULT_DISCOUNT_CODE, 0.0),
        Discount::new("SPRING", 20.0),
    ])
}
