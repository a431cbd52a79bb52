//! Common test utilities and helpers.
//!
//! This module provides shared functionality for integration tests:
//! - Test PDF builders
//! - Count report assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
