//! Value type for PIKALANG: an unbounded signed integer or the poison marker.
//!
//! Arithmetic never overflows. Any operation that touches a poisoned operand
//! produces poison.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// A stack slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// An ordinary integer.
    Int(BigInt),
    /// "Not a number": produced by underflow contamination and division by
    /// zero. Never equal to anything under [`Value::matches`].
    Poisoned,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Poisoned => f.write_str("NaN"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl Value {
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(self, Value::Poisoned)
    }

    /// The integer payload, if any.
    #[inline]
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(n),
            Value::Poisoned => None,
        }
    }

    /// Equality as observed by the conditional jumps: poison matches nothing,
    /// not even another poison.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            _ => false,
        }
    }

    #[inline]
    fn lift(self, other: Value, op: impl FnOnce(BigInt, BigInt) -> Option<BigInt>) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => op(a, b).map_or(Value::Poisoned, Value::Int),
            _ => Value::Poisoned,
        }
    }

    pub fn add(self, other: Value) -> Value {
        self.lift(other, |a, b| Some(a + b))
    }

    pub fn sub(self, other: Value) -> Value {
        self.lift(other, |a, b| Some(a - b))
    }

    pub fn mul(self, other: Value) -> Value {
        self.lift(other, |a, b| Some(a * b))
    }

    /// Floor division (rounds toward negative infinity). A zero divisor
    /// yields poison.
    pub fn floor_div(self, divisor: Value) -> Value {
        self.lift(divisor, |a, b| {
            if b.is_zero() {
                return None;
            }
            let q = &a / &b;
            if !(&a % &b).is_zero() && (a.is_negative() != b.is_negative()) {
                Some(q - BigInt::one())
            } else {
                Some(q)
            }
        })
    }
}

/// An entry in the output accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputItem {
    /// A number, rendered in decimal.
    Number(BigInt),
    /// A single character.
    Char(char),
}

impl fmt::Display for OutputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputItem::Number(n) => write!(f, "{}", n),
            OutputItem::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Flatten an output buffer to a string.
pub fn render(items: &[OutputItem]) -> String {
    items.iter().map(|item| item.to_string()).collect()
}
