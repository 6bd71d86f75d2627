// ═══════════════════════════════════════════════════════════════════════════
// Layer 0: Core (No internal dependencies)
// ═══════════════════════════════════════════════════════════════════════════
pub mod core;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 1: Instruction set & Reader (depends on core)
// ═══════════════════════════════════════════════════════════════════════════
pub mod ast;
pub mod parser;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 2: VM (depends on core, parser)
// ═══════════════════════════════════════════════════════════════════════════
pub mod vm;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 3: Secondary dialect
// ═══════════════════════════════════════════════════════════════════════════
pub mod fallback;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 4: Unit (gate, primary run, fallback)
// ═══════════════════════════════════════════════════════════════════════════
pub mod config;
pub mod error;
pub mod gate;
pub mod unit;
pub mod flags;

pub use self::core::{OutputItem, Stack, StructuralViolation, Value, ViolationKind};
pub use ast::{Instruction, JumpCondition, StackId};
pub use parser::{decode, decode_line, Program, Reader};
pub use vm::{run, Executor, VmState};
pub use fallback::{transliterate, Brainfuck, BrainfuckConfig, BrainfuckError, SecondaryInterpreter};
pub use config::UnitConfig;
pub use error::{ErrorCategory, PikaError, PikaResult};
pub use gate::NotApplicable;
pub use unit::{Dialect, Evaluation, PikalangUnit};
pub use flags::FlagScanner;
