//! Fetch-decode-execute loop for Pikalang.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::trace;

use crate::ast::{Instruction, JumpCondition, StackId};
use crate::core::{render, OutputItem, Stack, StructuralViolation, Value, ViolationKind};
use crate::parser::{self, Reader};

/// Complete state of the VM during a run.
#[derive(Debug, Clone, Default)]
pub struct VmState {
    /// Primary stack (`pi pikachu`).
    pub pi: Stack,
    /// Secondary stack (`pika pikachu`).
    pub pika: Stack,
    /// Output buffer.
    pub output: Vec<OutputItem>,
    /// Instructions executed so far, jumps included.
    pub instructions_executed: u64,
}

impl VmState {
    /// Fresh state with `args` pushed onto the primary stack in order.
    pub fn with_args(args: &[i64]) -> Self {
        let mut state = Self::default();
        for &arg in args {
            state.pi.push(Value::from(arg));
        }
        state
    }

    pub fn stack(&self, id: StackId) -> &Stack {
        match id {
            StackId::Pi => &self.pi,
            StackId::Pika => &self.pika,
        }
    }

    pub fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        match id {
            StackId::Pi => &mut self.pi,
            StackId::Pika => &mut self.pika,
        }
    }

    /// Whether the two stack tops match. Two empty stacks match; poison and
    /// an empty stack match nothing.
    pub fn tops_match(&self) -> bool {
        match (self.pi.peek(), self.pika.peek()) {
            (None, None) => true,
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        }
    }

    /// The output flattened to a string.
    pub fn rendered_output(&self) -> String {
        render(&self.output)
    }
}

/// The Pikalang virtual machine. One executor runs one program once.
#[derive(Debug, Clone)]
pub struct Executor {
    reader: Reader,
    state: VmState,
}

impl Executor {
    pub fn new(source: &str, args: &[i64]) -> Self {
        Self {
            reader: Reader::new(source),
            state: VmState::with_args(args),
        }
    }

    pub fn state(&self) -> &VmState {
        &self.state
    }

    pub fn into_state(self) -> VmState {
        self.state
    }

    /// Run until the program is exhausted. Does not return for programs that
    /// loop forever.
    pub fn execute(&mut self) -> Result<(), StructuralViolation> {
        loop {
            let Some(line) = self.reader.next_line()? else {
                return Ok(());
            };
            let decoded = parser::decode_line(line);
            let index = self.reader.line_index();
            let instruction = decoded.map_err(|kind| StructuralViolation::new(index, kind))?;
            trace!(line = index + 1, %instruction, "execute");
            self.execute_instruction(instruction, index)?;
        }
    }

    /// Execute a single decoded instruction. `index` is the instruction's own
    /// 0-based line, used to report a jump with nothing to measure.
    fn execute_instruction(
        &mut self,
        instruction: Instruction,
        index: usize,
    ) -> Result<(), StructuralViolation> {
        let state = &mut self.state;
        state.instructions_executed += 1;

        match instruction {
            Instruction::Pop(id) => {
                state.stack_mut(id).pop();
            }
            Instruction::Transfer { from } => {
                let top = state.stack(from).peek().cloned();
                if let Some(value) = top {
                    state.stack_mut(from.other()).push(value);
                }
            }
            Instruction::Jump(condition) => {
                let target = match self.reader.next_line()? {
                    Some(line) => line.split_whitespace().count(),
                    None => {
                        return Err(StructuralViolation::new(index, ViolationKind::MissingJumpTarget))
                    }
                };
                let taken = match condition {
                    JumpCondition::Equal => state.tops_match(),
                    JumpCondition::NotEqual => !state.tops_match(),
                };
                trace!(jump_to = target, taken, "conditional jump");
                if taken {
                    self.reader.goto(target);
                }
            }
            Instruction::Push(id, n) => state.stack_mut(id).push(Value::from(n)),
            Instruction::Add(id) => state.stack_mut(id).add(),
            Instruction::Sub(id) => state.stack_mut(id).sub(),
            Instruction::Mult(id) => state.stack_mut(id).mult(),
            Instruction::Div(id) => state.stack_mut(id).div(),
            Instruction::PrintNumber(id) => {
                if let Some(Value::Int(n)) = state.stack_mut(id).pop() {
                    state.output.push(OutputItem::Number(n));
                }
            }
            Instruction::PrintChar(id) => {
                let popped = state.stack_mut(id).pop();
                if let Some(c) = popped.as_ref().and_then(Value::as_int).and_then(code_point) {
                    state.output.push(OutputItem::Char(c));
                }
            }
        }
        Ok(())
    }
}

fn code_point(n: &BigInt) -> Option<char> {
    n.to_u32().and_then(char::from_u32)
}

/// Run a Pikalang program and return its output.
///
/// `args` are pushed onto the primary stack in order, so the last argument is
/// on top when the first line executes. A structural violation discards all
/// output produced so far.
pub fn run(source: &str, args: &[i64]) -> Result<String, StructuralViolation> {
    let mut executor = Executor::new(source, args);
    executor.execute()?;
    Ok(executor.state().rendered_output())
}
