//! Integration tests for the Brainfuck fallback.
//!
//! Component: Fallback (Transliterator + Brainfuck)
//!
//! These tests verify:
//! - Sources rejected by the primary interpreter are rerun as Brainfuck
//! - The transliteration table is applied in order
//! - Invalid Brainfuck produces no result

#![cfg(test)]

use crate::common::*;

use pikalang::fallback;
use pikalang::*;

mod transliteration {
    use super::*;

    #[test]
    fn words_map_to_symbols() {
        // Arrange
        let source = "pi pi pikachu\npipi pichu\npika ka chu";

        // Act
        let code = transliterate(source);

        // Assert
        assert_eq!(code, "++.><[-]");
    }

    #[test]
    fn comment_text_survives_as_noise() {
        // The fallback works on the raw source; comment markers are ignored
        // by Brainfuck rather than stripped.
        assert_eq!(transliterate("pi // pikachu"), "+//.");
    }
}

mod evaluation {
    use super::*;

    #[test]
    fn brainfuck_in_pikalang_words() {
        // Arrange: "pi pi pi" is a triple repeat, so the primary run fails
        let source = programs::brainfuck_a();
        assert!(run(&source, &[]).is_err());

        // Act
        let output = fallback::evaluate(&Brainfuck::new(), &source);

        // Assert
        assert_eq!(output, Ok("A".to_string()));
    }

    #[test]
    fn loop_in_pikalang_words() {
        // Arrange: 8 * 8 + 1 = 65, built with a loop
        //   ++++++++ [ > ++++++++ < - ] > + .
        let source = format!(
            "{} pika pipi {} pichu ka chu pipi pi pikachu",
            "pi ".repeat(8).trim_end(),
            "pi ".repeat(8).trim_end()
        );

        // Act
        let output = fallback::evaluate(&Brainfuck::new(), &source);

        // Assert
        assert_eq!(output, Ok("A".to_string()));
    }

    #[test]
    fn unbalanced_brackets_fail() {
        // "A B X" is not Pikalang; "pika" adds an unmatched '['
        let output = fallback::evaluate(&Brainfuck::new(), "pika B X");
        assert_eq!(output, Err(BrainfuckError::UnbalancedBracket { position: 0 }));
    }

    #[test]
    fn step_budget_stops_runaway_loops() {
        // Arrange: + [ ] loops forever
        let bf = Brainfuck::with_config(BrainfuckConfig {
            max_steps: Some(1_000),
            ..BrainfuckConfig::default()
        });

        // Act
        let output = fallback::evaluate(&bf, "pi pika chu");

        // Assert
        assert_eq!(output, Err(BrainfuckError::StepLimitExceeded { limit: 1_000 }));
    }
}
