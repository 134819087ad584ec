//! Error handling module
//!
//! Defines the error taxonomy raised during configuration construction

pub mod types;

pub use types::*;
