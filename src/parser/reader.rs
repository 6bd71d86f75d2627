//! Line-addressed program reader.
//!
//! The reader owns the program text and a cursor. Sequential fetches skip
//! blank and comment-only lines and reject any line with a token repeated
//! three times in a row. `goto` repositions the cursor by 1-based line number.

use crate::core::{StructuralViolation, ViolationKind};

/// Line comment marker.
pub const COMMENT: &str = "//";

/// Longest run of one token allowed on a line.
pub const MAX_REPEAT: usize = 2;

/// Program text split into stripped lines, indexed from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    /// Split on `\n` and strip each line. A trailing newline yields a final
    /// empty line, which counts toward [`Program::len`].
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.split('\n').map(|line| line.trim().to_string()).collect(),
        }
    }

    /// Total line count, including blank lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Stripped text of a 0-based line.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

/// Cursor over a [`Program`].
#[derive(Debug, Clone)]
pub struct Reader {
    program: Program,
    /// Index the next sequential fetch starts from.
    next: usize,
}

impl Reader {
    pub fn new(source: &str) -> Self {
        Self::from_program(Program::new(source))
    }

    pub fn from_program(program: Program) -> Self {
        Self { program, next: 0 }
    }

    /// 0-based index of the line most recently returned (or examined).
    pub fn line_index(&self) -> usize {
        self.next.saturating_sub(1)
    }

    /// Fetch the next non-empty line, with any comment removed.
    ///
    /// Returns `Ok(None)` once the cursor has passed the last line.
    pub fn next_line(&mut self) -> Result<Option<&str>, StructuralViolation> {
        let index = loop {
            let index = self.next;
            let Some(raw) = self.program.line(index) else {
                return Ok(None);
            };
            self.next += 1;
            if !strip_comment(raw).trim().is_empty() {
                break index;
            }
        };

        let text = self.program.line(index).map(strip_comment).unwrap_or_default();
        check_repetition(text).map_err(|kind| StructuralViolation::new(index, kind))?;
        Ok(Some(text))
    }

    /// Position the cursor so the next fetch returns 1-based line `target`.
    /// Targets past the end clamp to the last line.
    pub fn goto(&mut self, target: usize) {
        let target = target.min(self.program.len());
        self.next = target.saturating_sub(1);
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn check_repetition(line: &str) -> Result<(), ViolationKind> {
    let mut previous: Option<&str> = None;
    let mut run = 0;
    for token in line.split_whitespace() {
        if previous == Some(token) {
            run += 1;
            if run > MAX_REPEAT {
                return Err(ViolationKind::RepeatedToken { token: token.to_string() });
            }
        } else {
            previous = Some(token);
            run = 1;
        }
    }
    Ok(())
}
