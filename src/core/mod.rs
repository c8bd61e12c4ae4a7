//! Business logic
//!
//! Resolution, matching, verification and the install orchestrators.

pub mod catalog;
pub mod checksum;
pub mod install;
pub mod matcher;
pub mod platform;
pub mod version;
