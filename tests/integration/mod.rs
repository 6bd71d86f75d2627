//! Integration tests for Pikalang.
//!
//! This module organises integration tests by component.

pub mod fallback;
pub mod unit;
