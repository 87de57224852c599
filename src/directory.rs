//! Existence-check collaborators for rental participants.
//!
//! The rules module never loads full entities; it only needs to know whether
//! a referenced identifier is present in its owning collection. The
//! surrounding system (repository layer, remote service, test fixture)
//! implements these traits and injects them at construction time.

/// Boolean existence query over the car fleet.
pub trait CarDirectory: Send + Sync {
    fn exists(&self, id: i32) -> bool;
}

/// Boolean existence query over registered customers.
pub trait CustomerDirectory: Send + Sync {
    fn exists(&self, id: i32) -> bool;
}

/// Boolean existence query over employed staff.
pub trait EmployeeDirectory: Send + Sync {
    fn exists(&self, id: i32) -> bool;
}
