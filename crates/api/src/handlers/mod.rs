//! Request handlers, one module per resource family.
//!
//! Every tenant-scoped handler follows the same sequence: authenticate
//! (`AuthUser`), validate the body, authorize through [`crate::tenancy`],
//! persist, and answer with the matching status code.

pub mod absence;
pub mod allocation;
pub mod auth;
pub mod cost_item;
pub mod dashboard;
pub mod feature;
pub mod monthly_record;
pub mod project;
pub mod resource;
pub mod sprint;
