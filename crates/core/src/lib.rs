//! Domain types and validation rules for the onboarding wizard backend.
//!
//! This crate has no database dependencies. The `db` crate maps rows onto
//! these types and the `api` crate exposes them over HTTP.

pub mod error;
pub mod types;
pub mod us_states;
pub mod user_profile;
