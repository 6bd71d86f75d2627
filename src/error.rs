//! Crate-wide error type.
//!
//! The interpreter has three failure families, each with its own type:
//!
//! - **Structural violations**: malformed Pikalang lines. Fatal to the primary
//!   run and the trigger for the Brainfuck fallback.
//! - **Secondary interpreter failures**: invalid Brainfuck after
//!   transliteration. Treated as "no result" by the unit.
//! - **Applicability failures**: the gate rejected the input before any
//!   interpretation happened.
//!
//! `PikaError` wraps all three for callers that want a single error type.

use std::fmt;

use thiserror::Error;

use crate::core::StructuralViolation;
use crate::fallback::BrainfuckError;
use crate::gate::NotApplicable;

/// Broad classification, used for logging and the CLI's JSON records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Secondary,
    Applicability,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Secondary => "secondary",
            ErrorCategory::Applicability => "applicability",
        };
        f.write_str(name)
    }
}

/// Any error the crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PikaError {
    #[error(transparent)]
    Structural(#[from] StructuralViolation),

    #[error("brainfuck: {0}")]
    Secondary(#[from] BrainfuckError),

    #[error("not applicable: {0}")]
    NotApplicable(#[from] NotApplicable),
}

impl PikaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PikaError::Structural(_) => ErrorCategory::Syntax,
            PikaError::Secondary(_) => ErrorCategory::Secondary,
            PikaError::NotApplicable(_) => ErrorCategory::Applicability,
        }
    }
}

/// Result type alias for PIKALANG operations.
pub type PikaResult<T> = Result<T, PikaError>;
