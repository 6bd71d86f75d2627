//! Brainfuck interpreter used as the secondary dialect.
//!
//! Cells are wrapping `u8`s. Bytes other than the eight commands are ignored.
//! `,` reads the next input byte, or 0 once input is exhausted.

use thiserror::Error;
use tracing::debug;

/// Default tape length.
pub const TAPE_LEN: usize = 30_000;

/// Why a Brainfuck program was rejected or aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrainfuckError {
    #[error("unbalanced bracket at offset {position}")]
    UnbalancedBracket { position: usize },

    #[error("pointer moved left of cell 0 at offset {position}")]
    PointerUnderflow { position: usize },

    #[error("pointer moved past the end of the tape at offset {position}")]
    PointerOverflow { position: usize },

    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
}

/// The contract the fallback needs from a secondary interpreter.
pub trait SecondaryInterpreter {
    /// Evaluate `code` with `input` and return everything it printed.
    fn evaluate(&self, code: &str, input: &[u8]) -> Result<String, BrainfuckError>;
}

/// Configuration for the Brainfuck interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrainfuckConfig {
    pub tape_len: usize,
    /// Abort after this many commands. `None` runs without a bound.
    pub max_steps: Option<u64>,
}

impl Default for BrainfuckConfig {
    fn default() -> Self {
        Self {
            tape_len: TAPE_LEN,
            max_steps: None,
        }
    }
}

/// Tree-walking Brainfuck interpreter.
#[derive(Debug, Clone, Default)]
pub struct Brainfuck {
    pub config: BrainfuckConfig,
}

impl Brainfuck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BrainfuckConfig) -> Self {
        Self { config }
    }
}

impl SecondaryInterpreter for Brainfuck {
    fn evaluate(&self, code: &str, input: &[u8]) -> Result<String, BrainfuckError> {
        let program: Vec<u8> = code.bytes().filter(|b| b"<>+-.,[]".contains(b)).collect();
        let jumps = match_brackets(&program)?;

        let mut tape = vec![0u8; self.config.tape_len.max(1)];
        let mut ptr = 0usize;
        let mut pc = 0usize;
        let mut input = input.iter().copied();
        let mut output = Vec::new();
        let mut steps = 0u64;

        while pc < program.len() {
            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    debug!(limit, "brainfuck step limit reached");
                    return Err(BrainfuckError::StepLimitExceeded { limit });
                }
            }
            steps += 1;

            match program[pc] {
                b'>' => {
                    ptr += 1;
                    if ptr >= tape.len() {
                        return Err(BrainfuckError::PointerOverflow { position: pc });
                    }
                }
                b'<' => {
                    ptr = ptr
                        .checked_sub(1)
                        .ok_or(BrainfuckError::PointerUnderflow { position: pc })?;
                }
                b'+' => tape[ptr] = tape[ptr].wrapping_add(1),
                b'-' => tape[ptr] = tape[ptr].wrapping_sub(1),
                b'.' => output.push(tape[ptr]),
                b',' => tape[ptr] = input.next().unwrap_or(0),
                b'[' if tape[ptr] == 0 => pc = jumps[pc],
                b']' if tape[ptr] != 0 => pc = jumps[pc],
                _ => {}
            }
            pc += 1;
        }

        debug!(steps, bytes = output.len(), "brainfuck finished");
        Ok(output.into_iter().map(char::from).collect())
    }
}

/// For every bracket, the index of its partner.
fn match_brackets(program: &[u8]) -> Result<Vec<usize>, BrainfuckError> {
    let mut jumps = vec![0; program.len()];
    let mut open = Vec::new();
    for (pc, &byte) in program.iter().enumerate() {
        match byte {
            b'[' => open.push(pc),
            b']' => {
                let start = open
                    .pop()
                    .ok_or(BrainfuckError::UnbalancedBracket { position: pc })?;
                jumps[start] = pc;
                jumps[pc] = start;
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(position) => Err(BrainfuckError::UnbalancedBracket { position }),
        None => Ok(jumps),
    }
}
