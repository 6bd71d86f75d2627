//! Operand stack for the PIKALANG virtual machine.
//!
//! Binary arithmetic never fails. An empty stack ignores the operation and a
//! single-element stack is contaminated: its only element becomes poison.

use std::fmt;

use super::value::Value;

/// One of the two operand stacks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    elements: Vec<Value>,
}

impl Stack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Get the current depth of the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    /// Pop a value, returning None if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<Value> {
        self.elements.pop()
    }

    /// Peek at the top value, returning None if empty.
    #[inline]
    pub fn peek(&self) -> Option<&Value> {
        self.elements.last()
    }

    /// Elements bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// `second + top`
    pub fn add(&mut self) {
        self.binary_op(|top, second| second.add(top));
    }

    /// `second - top`
    pub fn sub(&mut self) {
        self.binary_op(|top, second| second.sub(top));
    }

    /// `second * top`
    pub fn mult(&mut self) {
        self.binary_op(|top, second| second.mul(top));
    }

    /// `second // top`, poison when `top` is zero.
    pub fn div(&mut self) {
        self.binary_op(|top, second| second.floor_div(top));
    }

    fn binary_op(&mut self, op: impl FnOnce(Value, Value) -> Value) {
        match self.elements.len() {
            0 => {}
            1 => self.elements[0] = Value::Poisoned,
            _ => {
                if let (Some(top), Some(second)) = (self.elements.pop(), self.elements.pop()) {
                    self.elements.push(op(top, second));
                }
            }
        }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter().map(|v| v.to_string())).finish()
    }
}

impl From<Vec<Value>> for Stack {
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}
