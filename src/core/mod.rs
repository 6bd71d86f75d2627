//! Core types for the PIKALANG virtual machine.
//!
//! - **Value**: signed integers plus the poison marker
//! - **Stack**: operand stack with contaminating arithmetic
//! - **Error**: structural violations
//!
//! # Layer 0 - No Internal Dependencies

pub mod error;
pub mod value;
pub mod stack;

pub use error::{StructuralViolation, ViolationKind};
pub use value::{render, OutputItem, Value};
pub use stack::Stack;
