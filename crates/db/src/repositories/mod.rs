//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Company-wide listings filter
//! through the owning project or resource so a caller only ever sees rows of
//! its own company.

pub mod absence_repo;
pub mod allocation_repo;
pub mod company_repo;
pub mod cost_item_repo;
pub mod feature_repo;
pub mod monthly_record_repo;
pub mod project_repo;
pub mod resource_repo;
pub mod sprint_repo;
pub mod user_repo;

pub use absence_repo::AbsenceRepo;
pub use allocation_repo::AllocationRepo;
pub use company_repo::CompanyRepo;
pub use cost_item_repo::CostItemRepo;
pub use feature_repo::FeatureRepo;
pub use monthly_record_repo::MonthlyRecordRepo;
pub use project_repo::ProjectRepo;
pub use resource_repo::ResourceRepo;
pub use sprint_repo::SprintRepo;
pub use user_repo::UserRepo;
