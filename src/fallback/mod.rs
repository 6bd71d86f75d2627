//! Brainfuck fallback for sources that are not valid Pikalang.
//!
//! Some Pikalang programs in the wild are a straight word-for-symbol
//! substitution of Brainfuck. When the primary interpreter rejects a source,
//! it is rewritten into Brainfuck and run there instead.

pub mod brainfuck;

pub use brainfuck::{Brainfuck, BrainfuckConfig, BrainfuckError, SecondaryInterpreter};

use tracing::debug;

/// Word-to-symbol table, longest words first. Replacement is applied in this
/// order across the whole text, so later entries only see what earlier ones
/// left behind.
pub const TRANSLITERATION: [(&str, &str); 8] = [
    ("pikachu", "."),
    ("pikapi", ","),
    ("pichu", "<"),
    ("pika", "["),
    ("pipi", ">"),
    ("chu", "]"),
    ("ka", "-"),
    ("pi", "+"),
];

/// Rewrite Pikalang words into Brainfuck symbols and drop all whitespace.
pub fn transliterate(source: &str) -> String {
    let replaced = TRANSLITERATION
        .iter()
        .fold(source.to_string(), |text, &(word, symbol)| text.replace(word, symbol));
    replaced.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Transliterate `source` and evaluate it with no input.
pub fn evaluate<I: SecondaryInterpreter + ?Sized>(
    interpreter: &I,
    source: &str,
) -> Result<String, BrainfuckError> {
    let code = transliterate(source);
    debug!(len = code.len(), "evaluating transliterated source");
    interpreter.evaluate(&code, &[])
}
