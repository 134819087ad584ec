//! Real system implementation using `std::path`

use super::System;
use std::path::Path;

/// Production implementation of the System trait
///
/// Delegates directly to the standard library. A zero-cost abstraction with
/// no overhead in production.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
