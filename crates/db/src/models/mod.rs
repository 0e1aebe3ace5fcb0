//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the table and, where
//! clients send bodies, a `Deserialize` DTO.

pub mod component;
pub mod inspect;
pub mod user;
