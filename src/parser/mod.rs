//! Reader and decoder for PIKALANG.
//!
//! Syntax:
//! - One instruction per line, built from whitespace-separated words
//! - The number of tokens on a line selects the instruction family
//! - The last two tokens name the target stack (`pi pikachu`, `pika pikachu`)
//! - Comments: `//` to end of line
//!
//! # Architecture
//!
//! - `reader`: line storage, comment stripping, cursor and `goto`
//! - `keyword_map`: the fixed vocabulary, resolved to `StackId`/`Instruction`
//!
//! Decoding is stateless. Conditional jumps need the *following* line to
//! find their target, so that part is left to the executor.

pub mod keyword_map;
pub mod reader;

pub use reader::{Program, Reader};

use crate::ast::{Instruction, StackId};
use crate::core::ViolationKind;

/// Decode the tokens of one line.
pub fn decode(tokens: &[&str]) -> Result<Instruction, ViolationKind> {
    match tokens {
        [] | [_] => Err(ViolationKind::TooFewTokens { count: tokens.len() }),
        [first, second] => keyword_map::command(first, second).ok_or_else(|| {
            ViolationKind::UnknownCommand { command: format!("{} {}", first, second) }
        }),
        [word, _, _] => Ok(keyword_map::unary_op(word, selector(tokens)?)),
        [first, second, _, _] => Ok(keyword_map::binary_op(first, second, selector(tokens)?)),
        _ => Ok(Instruction::Push(selector(tokens)?, (tokens.len() - 2) as i64)),
    }
}

/// Split a line into tokens and decode it.
pub fn decode_line(line: &str) -> Result<Instruction, ViolationKind> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    decode(&tokens)
}

fn selector(tokens: &[&str]) -> Result<StackId, ViolationKind> {
    let [.., first, second] = tokens else {
        return Err(ViolationKind::TooFewTokens { count: tokens.len() });
    };
    keyword_map::stack_selector(first, second).ok_or_else(|| ViolationKind::UnknownStack {
        selector: format!("{} {}", first, second),
    })
}
