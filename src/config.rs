//! Configuration for evaluating a candidate input.

use crate::fallback::BrainfuckConfig;

/// Marker word the gate looks for.
pub const DEFAULT_MARKER: &str = "pi";

/// Minimum number of marker occurrences before an input is interpreted.
pub const DEFAULT_MARKER_THRESHOLD: usize = 10;

/// Configuration for a [`PikalangUnit`](crate::unit::PikalangUnit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConfig {
    /// Initial arguments, pushed onto the primary stack in order.
    pub args: Vec<i64>,
    /// Marker substring required by the gate.
    pub marker: String,
    /// Minimum occurrences of `marker`.
    pub marker_threshold: usize,
    /// Skip the gate and interpret every input.
    pub force: bool,
    /// Retry rejected sources as transliterated Brainfuck.
    pub fallback: bool,
    /// Settings for the Brainfuck fallback.
    pub brainfuck: BrainfuckConfig,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            marker: DEFAULT_MARKER.to_string(),
            marker_threshold: DEFAULT_MARKER_THRESHOLD,
            force: false,
            fallback: true,
            brainfuck: BrainfuckConfig::default(),
        }
    }
}

impl UnitConfig {
    pub fn with_args(args: Vec<i64>) -> Self {
        Self {
            args,
            ..Self::default()
        }
    }
}
