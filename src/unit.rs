//! Evaluation of one candidate input: gate, primary run, fallback.
//!
//! The unit is best effort. It yields an [`Evaluation`] when either dialect
//! produced non-empty output and `None` otherwise. Failures are logged, never
//! returned.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::UnitConfig;
use crate::error::{PikaError, PikaResult};
use crate::fallback::{self, Brainfuck, SecondaryInterpreter};
use crate::gate;
use crate::vm;

/// Which dialect produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Native Pikalang.
    Primary,
    /// Transliterated Brainfuck.
    Fallback,
}

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub dialect: Dialect,
    pub output: String,
}

/// Interprets candidate inputs as Pikalang.
pub struct PikalangUnit<I = Brainfuck> {
    config: UnitConfig,
    secondary: I,
}

impl PikalangUnit<Brainfuck> {
    /// A unit that falls back to the built-in Brainfuck interpreter.
    pub fn new(config: UnitConfig) -> Self {
        let secondary = Brainfuck::with_config(config.brainfuck.clone());
        Self { config, secondary }
    }
}

impl<I: SecondaryInterpreter> PikalangUnit<I> {
    pub fn with_interpreter(config: UnitConfig, secondary: I) -> Self {
        Self { config, secondary }
    }

    pub fn config(&self) -> &UnitConfig {
        &self.config
    }

    /// Check that `source` passes the gate. Always passes when `force` is set.
    pub fn applicable(&self, source: &str) -> PikaResult<()> {
        if self.config.force {
            return Ok(());
        }
        gate::check(source, &self.config)?;
        Ok(())
    }

    /// Run the primary interpreter, falling back to Brainfuck on a
    /// structural violation. Does not consult the gate.
    pub fn interpret(&self, source: &str) -> PikaResult<Evaluation> {
        match vm::run(source, &self.config.args) {
            Ok(output) => Ok(Evaluation {
                dialect: Dialect::Primary,
                output,
            }),
            Err(violation) if self.config.fallback => {
                debug!(%violation, "primary interpreter rejected source, trying brainfuck");
                let output = fallback::evaluate(&self.secondary, source)?;
                Ok(Evaluation {
                    dialect: Dialect::Fallback,
                    output,
                })
            }
            Err(violation) => Err(violation.into()),
        }
    }

    /// Gate, interpret, and discard empty or failed results.
    pub fn evaluate(&self, source: &str) -> Option<Evaluation> {
        let result = self.applicable(source).and_then(|()| self.interpret(source));
        match result {
            Ok(evaluation) if evaluation.output.is_empty() => {
                debug!(dialect = ?evaluation.dialect, "no output");
                None
            }
            Ok(evaluation) => {
                info!(dialect = ?evaluation.dialect, bytes = evaluation.output.len(), "produced output");
                Some(evaluation)
            }
            Err(err) => {
                log_failure(&err);
                None
            }
        }
    }

    /// Gate raw bytes before evaluating them.
    pub fn evaluate_bytes(&self, bytes: &[u8]) -> Option<Evaluation> {
        match std::str::from_utf8(bytes) {
            Ok(source) => self.evaluate(source),
            Err(_) if self.config.force => self.evaluate(&String::from_utf8_lossy(bytes)),
            Err(_) => {
                log_failure(&PikaError::NotApplicable(gate::NotApplicable::NotText));
                None
            }
        }
    }
}

fn log_failure(err: &PikaError) {
    debug!(category = %err.category(), error = %err, "no result");
}
