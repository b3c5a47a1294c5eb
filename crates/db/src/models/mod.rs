//! Row structs (`FromRow + Serialize`) and create/update DTOs per table.
//!
//! JSON uses camelCase field names. Update DTOs carry only `Option` fields:
//! an absent field keeps its stored value.

pub mod absence;
pub mod allocation;
pub mod company;
pub mod cost_item;
pub mod feature;
pub mod monthly_record;
pub mod project;
pub mod resource;
pub mod sprint;
pub mod user;
