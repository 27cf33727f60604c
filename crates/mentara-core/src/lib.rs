//! mentara-core
//!
//! Pure domain types shared by the Mentara services. No HTTP or storage
//! dependency.

pub mod error;
pub mod models;
