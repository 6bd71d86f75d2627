//! Applicability gate.
//!
//! Decides whether a candidate input is worth interpreting at all: it must be
//! printable ASCII text and mention the marker word often enough.

use thiserror::Error;

use crate::config::UnitConfig;

/// Why the gate rejected an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotApplicable {
    #[error("not valid UTF-8")]
    NotText,

    #[error("not printable data")]
    NotPrintable,

    #[error("less than {required} occurrences of '{marker}' (found {found})")]
    MarkerThreshold {
        marker: String,
        found: usize,
        required: usize,
    },
}

/// Printable in the sense of Python's `string.printable`: ASCII graphic
/// characters plus space, tab, newline, carriage return, vertical tab and
/// form feed.
pub fn is_printable(text: &str) -> bool {
    text.chars().all(|c| {
        c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
    })
}

/// Check decoded text against the gate.
pub fn check(text: &str, config: &UnitConfig) -> Result<(), NotApplicable> {
    if !is_printable(text) {
        return Err(NotApplicable::NotPrintable);
    }
    let found = if config.marker.is_empty() {
        0
    } else {
        text.matches(config.marker.as_str()).count()
    };
    if found < config.marker_threshold {
        return Err(NotApplicable::MarkerThreshold {
            marker: config.marker.clone(),
            found,
            required: config.marker_threshold,
        });
    }
    Ok(())
}

/// Check raw bytes, decoding them as UTF-8 first.
pub fn check_bytes<'a>(bytes: &'a [u8], config: &UnitConfig) -> Result<&'a str, NotApplicable> {
    let text = std::str::from_utf8(bytes).map_err(|_| NotApplicable::NotText)?;
    check(text, config)?;
    Ok(text)
}
