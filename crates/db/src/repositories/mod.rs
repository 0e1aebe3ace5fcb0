//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` (or any SQLite executor) as the first argument. Every
//! method picks its own sqlx call (`fetch_*` for reads, `execute` for
//! writes) instead of inferring it from the SQL text.

pub mod component_repo;
pub mod inspect_repo;
pub mod user_repo;

pub use component_repo::ComponentRepo;
pub use inspect_repo::InspectRepo;
pub use user_repo::{UpdateAtomicity, UserRepo};
