//! Tenant ownership rules.
//!
//! Every tenant-scoped entity names its direct owner through [`TenantOwned`].
//! Owners are either a company (terminal) or a project/resource, which in
//! turn belong to a company. Resolving an owner to a company id needs the
//! database and lives in the API crate; deciding the outcome once the
//! company is known is [`check_owner`].

use crate::error::CoreError;
use crate::types::DbId;

/// The direct parent through which an entity belongs to a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Company(DbId),
    Project(DbId),
    Resource(DbId),
}

impl Owner {
    /// Entity name used in not-found errors for a missing parent.
    pub fn entity(self) -> &'static str {
        match self {
            Owner::Company(_) => "Company",
            Owner::Project(_) => "Project",
            Owner::Resource(_) => "Resource",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            Owner::Company(id) | Owner::Project(id) | Owner::Resource(id) => id,
        }
    }
}

/// An entity that belongs to exactly one company through its [`Owner`].
pub trait TenantOwned {
    /// Entity name used in error messages (e.g. `"Sprint"`).
    const ENTITY: &'static str;

    fn id(&self) -> DbId;

    fn owner(&self) -> Owner;
}

/// Decide access once `owner` has been resolved to its company.
///
/// `owning_company` is `None` when the owner row no longer exists, which is
/// reported as not-found for the owner. A company mismatch is forbidden.
pub fn check_owner(
    owner: Owner,
    owning_company: Option<DbId>,
    caller_company: DbId,
) -> Result<(), CoreError> {
    match owning_company {
        None => Err(CoreError::NotFound {
            entity: owner.entity(),
            id: owner.id(),
        }),
        Some(company_id) if company_id == caller_company => Ok(()),
        Some(_) => Err(CoreError::Forbidden(
            "Record belongs to another company".into(),
        )),
    }
}
