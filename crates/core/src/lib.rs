//! Pure domain logic for the programme-management service.
//!
//! Nothing in this crate performs I/O. The persistence layer (`pmo-db`) and
//! the HTTP layer (`pmo-api`) build on the types and rules defined here.

pub mod delivery;
pub mod error;
pub mod financials;
pub mod period;
pub mod roles;
pub mod tenancy;
pub mod types;
pub mod validation;
