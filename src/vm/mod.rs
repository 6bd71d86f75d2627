//! Virtual machine for PIKALANG.
//!
//! # Architecture
//!
//! The VM owns a [`Reader`](crate::parser::Reader) over the program and two
//! operand stacks. Each step fetches one line, decodes it by token count and
//! executes the resulting [`Instruction`](crate::ast::Instruction).
//!
//! Execution has no instruction limit. Conditional jumps can loop forever,
//! and bounding a run is left to whoever drives the VM.

pub mod executor;

pub use executor::{run, Executor, VmState};
