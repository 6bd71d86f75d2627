//! Structural violations: malformed Pikalang lines.
//!
//! A violation is fatal to the primary run and the trigger for the Brainfuck
//! fallback.

use std::fmt;

use thiserror::Error;

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Fewer than two tokens on a line.
    TooFewTokens { count: usize },
    /// The same token appears three or more times in a row.
    RepeatedToken { token: String },
    /// A two-token line that is not one of the six commands.
    UnknownCommand { command: String },
    /// The trailing two tokens do not name a stack.
    UnknownStack { selector: String },
    /// A conditional jump on the last line, with nothing to measure.
    MissingJumpTarget,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::TooFewTokens { count } => {
                write!(f, "expected at least 2 tokens, found {}", count)
            }
            ViolationKind::RepeatedToken { token } => {
                write!(f, "token '{}' repeated three or more times", token)
            }
            ViolationKind::UnknownCommand { command } => {
                write!(f, "unknown command '{}'", command)
            }
            ViolationKind::UnknownStack { selector } => {
                write!(f, "'{}' does not name a stack", selector)
            }
            ViolationKind::MissingJumpTarget => {
                write!(f, "conditional jump has no following line to measure")
            }
        }
    }
}

/// A malformed line halted the primary interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error on line {}: {kind}", .line + 1)]
pub struct StructuralViolation {
    /// 0-based index of the offending line.
    pub line: usize,
    pub kind: ViolationKind,
}

impl StructuralViolation {
    pub fn new(line: usize, kind: ViolationKind) -> Self {
        Self { line, kind }
    }
}
