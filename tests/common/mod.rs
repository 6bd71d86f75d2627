//! Shared test utilities for Pikalang integration tests.
//!
//! This module provides:
//! - Source builders for token-counted literals
//! - Unit configuration helpers
//! - Assertion helpers for run results
//! - Canned programs
//!
//! ## AAA Pattern
//!
//! All tests follow the Arrange-Act-Assert pattern:
//! - Arrange: Set up the source and configuration
//! - Act: Run the program or unit under test
//! - Assert: Verify the expected outcome

#![allow(dead_code)]

use pikalang::*;

// =============================================================================
// Source Builders
// =============================================================================

/// Join lines with `\n` and no trailing newline.
pub fn program(lines: &[&str]) -> String {
    lines.join("\n")
}

/// Selector suffix for a stack.
pub fn selector(stack: StackId) -> &'static str {
    match stack {
        StackId::Pi => "pi pikachu",
        StackId::Pika => "pika pikachu",
    }
}

/// A line that pushes `n` (n >= 1) onto `stack`.
///
/// Uses alternating filler words so no token repeats three times.
pub fn push_line(n: usize, stack: StackId) -> String {
    assert!(n >= 1, "token counting cannot encode {}", n);
    let filler: Vec<&str> = (0..n).map(|i| if i % 2 == 0 { "chu" } else { "ka" }).collect();
    format!("{} {}", filler.join(" "), selector(stack))
}

/// A line that prints the top of `stack` as a character.
pub fn print_char_line(stack: StackId) -> String {
    format!("pikachu pikachu {}", selector(stack))
}

/// A program that prints `text` through the primary stack.
pub fn echo_program(text: &str) -> String {
    let mut lines = Vec::new();
    for c in text.chars() {
        lines.push(push_line(c as usize, StackId::Pi));
        lines.push(print_char_line(StackId::Pi));
    }
    lines.join("\n")
}

// =============================================================================
// Configuration Builders
// =============================================================================

/// A unit that skips the gate.
pub fn forced_unit() -> PikalangUnit {
    PikalangUnit::new(UnitConfig {
        force: true,
        ..UnitConfig::default()
    })
}

/// A gated unit with initial arguments.
pub fn unit_with_args(args: Vec<i64>) -> PikalangUnit {
    PikalangUnit::new(UnitConfig::with_args(args))
}

// =============================================================================
// Assertion Helpers
// =============================================================================

/// Run a program that must not violate the grammar.
pub fn run_ok(source: &str, args: &[i64]) -> String {
    match run(source, args) {
        Ok(output) => output,
        Err(err) => panic!("Expected a clean run, got {}", err),
    }
}

/// Assert that a program is rejected on the given 0-based line.
pub fn assert_violation_at(source: &str, line: usize) -> ViolationKind {
    match run(source, &[]) {
        Err(err) => {
            assert_eq!(err.line, line, "violation reported on the wrong line: {}", err);
            err.kind
        }
        Ok(output) => panic!("Expected a violation, got output {:?}", output),
    }
}

// =============================================================================
// Canned Programs
// =============================================================================

pub mod programs {
    /// Counts down from the argument on the primary stack, printing each
    /// value, until it reaches 0.
    pub const COUNTDOWN: &str = "\
x pika pikachu
x pika pikachu
pika pi pika pikachu
pi pika
pika pikachu pika pikachu
x pi pikachu
pika pi pi pikachu
pika pika
a b c d";

    /// COUNTDOWN with comments and blank lines. Line numbers of the loop body
    /// shift, so the jump target line has more tokens.
    pub const COUNTDOWN_COMMENTED: &str = "\
// seed the secondary stack with 0
x pika pikachu
x pika pikachu // one
pika pi pika pikachu // 1 - 1

pi pika          // loop: copy counter
pika pikachu pika pikachu  // print it
x pi pikachu
pika pi pi pikachu // counter - 1
pika pika        // loop while counter != 0
a b c d e f";

    /// Prints the primary top unless it matches the secondary top.
    pub const JUMP_EQUAL: &str = "\
pikachu pikachu
a b c d e
pika pikachu pi pikachu
x pika pikachu
pika pikachu pika pikachu";

    /// Brainfuck spelled in Pikalang words; prints "A".
    pub fn brainfuck_a() -> String {
        let mut source = "pi ".repeat(65);
        source.push_str("pikachu");
        source
    }
}
