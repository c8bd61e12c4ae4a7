//! Infrastructure layer
//!
//! Network and filesystem operations.

pub mod download;
pub mod extract;
