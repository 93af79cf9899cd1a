//! Shared types used across all modules.
//!
//! Students, groups, and partitions live here so that the divider, the
//! roster loader, and the renderers import from one place rather than
//! reaching into each other's internals.

pub mod group;
pub mod student;

pub use group::{Group, Partition};
pub use student::{NameIndex, Student};
