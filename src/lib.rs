//! classdivider: divide a class of students into groups (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod divider;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod roster;
