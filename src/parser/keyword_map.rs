//! Pikalang vocabulary.
//!
//! Maps the fixed token pairs of the surface language to stacks and
//! commands. Nothing downstream of this module compares strings.

use crate::ast::{Instruction, JumpCondition, StackId};

pub const PI: &str = "pi";
pub const PIKA: &str = "pika";
pub const PIKACHU: &str = "pikachu";

/// Resolve a trailing token pair to a stack.
pub fn stack_selector(first: &str, second: &str) -> Option<StackId> {
    match (first, second) {
        (PI, PIKACHU) => Some(StackId::Pi),
        (PIKA, PIKACHU) => Some(StackId::Pika),
        _ => None,
    }
}

/// Two-token lines: transfers, pops and conditional jumps.
pub fn command(first: &str, second: &str) -> Option<Instruction> {
    let instruction = match (first, second) {
        (PI, PIKACHU) => Instruction::Pop(StackId::Pi),
        (PIKA, PIKACHU) => Instruction::Pop(StackId::Pika),
        (PI, PIKA) => Instruction::Transfer { from: StackId::Pi },
        (PIKA, PI) => Instruction::Transfer { from: StackId::Pika },
        (PIKACHU, PIKACHU) => Instruction::Jump(JumpCondition::Equal),
        (PIKA, PIKA) => Instruction::Jump(JumpCondition::NotEqual),
        _ => return None,
    };
    Some(instruction)
}

/// Three-token lines: `pikachu` divides, any other word pushes 1.
pub fn unary_op(word: &str, stack: StackId) -> Instruction {
    if word == PIKACHU {
        Instruction::Div(stack)
    } else {
        Instruction::Push(stack, 1)
    }
}

/// Four-token lines: arithmetic and output, with an unrecognised pair pushing 2.
pub fn binary_op(first: &str, second: &str, stack: StackId) -> Instruction {
    match (first, second) {
        (PI, PIKA) => Instruction::Add(stack),
        (PIKA, PI) => Instruction::Sub(stack),
        (PI, PIKACHU) => Instruction::Mult(stack),
        (PIKA, PIKACHU) => Instruction::PrintNumber(stack),
        (PIKACHU, PIKACHU) => Instruction::PrintChar(stack),
        _ => Instruction::Push(stack, 2),
    }
}
