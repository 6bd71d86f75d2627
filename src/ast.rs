//! Instruction set for PIKALANG.
//!
//! Every Pikalang line decodes to exactly one instruction. Operands are never
//! written as numerals: literal values and jump targets are encoded by counting
//! tokens, and the target stack is named by the last two tokens of the line.

use std::fmt;

/// One of the two operand stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackId {
    /// The primary stack, selected by `pi pikachu`. Initial arguments land here.
    Pi,
    /// The secondary stack, selected by `pika pikachu`.
    Pika,
}

impl StackId {
    /// The stack on the other side of a transfer.
    pub fn other(self) -> StackId {
        match self {
            StackId::Pi => StackId::Pika,
            StackId::Pika => StackId::Pi,
        }
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackId::Pi => f.write_str("pi"),
            StackId::Pika => f.write_str("pika"),
        }
    }
}

/// When a conditional jump is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpCondition {
    /// Taken when the two stack tops match.
    Equal,
    /// Taken when the two stack tops do not match.
    NotEqual,
}

/// All operations available in PIKALANG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // ═══════════════════════════════════════════════════════════════════
    // Two-token commands
    // ═══════════════════════════════════════════════════════════════════

    /// Pop and discard.
    /// Stack: ( a -- )
    Pop(StackId),

    /// Copy the top of one stack onto the other. No-op when the source is empty.
    /// Source: ( a -- a )  Destination: ( -- a )
    Transfer { from: StackId },

    /// Jump to the line whose 1-based number is the token count of the next
    /// line. The next line is always consumed, never executed.
    Jump(JumpCondition),

    // ═══════════════════════════════════════════════════════════════════
    // Literals
    // ═══════════════════════════════════════════════════════════════════

    /// Push a literal counted from the line's tokens.
    /// Stack: ( -- n )
    Push(StackId, i64),

    // ═══════════════════════════════════════════════════════════════════
    // Arithmetic
    // ═══════════════════════════════════════════════════════════════════

    /// Stack: ( a b -- a+b )
    Add(StackId),

    /// Stack: ( a b -- a-b )
    Sub(StackId),

    /// Stack: ( a b -- a*b )
    Mult(StackId),

    /// Floor division; poison on a zero divisor.
    /// Stack: ( a b -- a//b )
    Div(StackId),

    // ═══════════════════════════════════════════════════════════════════
    // Output
    // ═══════════════════════════════════════════════════════════════════

    /// Pop and append the number to the output.
    /// Stack: ( n -- )
    PrintNumber(StackId),

    /// Pop and append the character with that code point to the output.
    /// Stack: ( n -- )
    PrintChar(StackId),
}

impl Instruction {
    /// The mnemonic used in trace logs.
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Pop(_) => "POP",
            Instruction::Transfer { .. } => "TRANSFER",
            Instruction::Jump(JumpCondition::Equal) => "JEQ",
            Instruction::Jump(JumpCondition::NotEqual) => "JNE",
            Instruction::Push(..) => "PUSH",
            Instruction::Add(_) => "ADD",
            Instruction::Sub(_) => "SUB",
            Instruction::Mult(_) => "MULT",
            Instruction::Div(_) => "DIV",
            Instruction::PrintNumber(_) => "PRINT",
            Instruction::PrintChar(_) => "EMIT",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Transfer { from } => write!(f, "TRANSFER {} -> {}", from, from.other()),
            Instruction::Jump(_) => f.write_str(self.name()),
            Instruction::Push(stack, n) => write!(f, "PUSH {} {}", stack, n),
            Instruction::Pop(stack)
            | Instruction::Add(stack)
            | Instruction::Sub(stack)
            | Instruction::Mult(stack)
            | Instruction::Div(stack)
            | Instruction::PrintNumber(stack)
            | Instruction::PrintChar(stack) => write!(f, "{} {}", self.name(), stack),
        }
    }
}
