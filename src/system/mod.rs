//! System abstraction for filesystem existence checks
//!
//! Configuration construction touches the filesystem in exactly one place:
//! verifying that the two required input paths exist. This trait isolates
//! that check so tests can run against an in-memory filesystem.

use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Trait for the filesystem queries performed during validation
///
/// # Implementations
/// - `RealSystem`: production implementation delegating to `std::path`
/// - `MockSystem`: test implementation backed by in-memory path sets
pub trait System: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;
}
