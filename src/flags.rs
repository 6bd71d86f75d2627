//! Flag scanning over interpreter output.

use regex::Regex;

/// Finds flag-shaped substrings in output text.
#[derive(Debug, Clone)]
pub struct FlagScanner {
    pattern: Regex,
}

impl FlagScanner {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Every distinct match, in order of first appearance.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for m in self.pattern.find_iter(text) {
            if !found.iter().any(|f| f == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }
        found
    }
}
