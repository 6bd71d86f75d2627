//! Integration tests for the evaluation unit.
//!
//! Component: Unit (Gate + VM + Fallback)
//!
//! These tests verify:
//! - Gated inputs are never interpreted
//! - Primary output is preferred when the source is valid Pikalang
//! - Structural violations fall back to Brainfuck
//! - Total failure is silent

#![cfg(test)]

use crate::common::*;

use pikalang::*;

mod gating {
    use super::*;

    #[test]
    fn too_few_markers() {
        // Arrange: "pika pikachu pi pikachu" has 4 occurrences of "pi"
        let unit = unit_with_args(vec![1]);

        // Act & Assert
        assert_eq!(unit.evaluate("pika pikachu pi pikachu"), None);
    }

    #[test]
    fn enough_markers() {
        // Arrange
        let unit = unit_with_args(vec![3]);

        // Act
        let evaluation = unit.evaluate(programs::COUNTDOWN);

        // Assert
        assert_eq!(
            evaluation,
            Some(Evaluation {
                dialect: Dialect::Primary,
                output: "321".to_string()
            })
        );
    }

    #[test]
    fn binary_input_rejected() {
        let unit = forced_unit();
        let config = unit.config().clone();
        assert_eq!(
            gate::check_bytes(b"pi\xff", &config),
            Err(NotApplicable::NotText)
        );
    }
}

mod dialects {
    use super::*;

    #[test]
    fn falls_back_to_brainfuck() {
        // Arrange
        let unit = forced_unit();

        // Act
        let evaluation = unit.evaluate(&programs::brainfuck_a());

        // Assert
        assert_eq!(
            evaluation,
            Some(Evaluation {
                dialect: Dialect::Fallback,
                output: "A".to_string()
            })
        );
    }

    #[test]
    fn primary_output_wins() {
        let unit = forced_unit();
        let evaluation = unit.evaluate(&echo_program("ok")).unwrap();
        assert_eq!(evaluation.dialect, Dialect::Primary);
        assert_eq!(evaluation.output, "ok");
    }

    #[test]
    fn both_dialects_fail_silently() {
        // Arrange: bad selector, then an unmatched '[' after transliteration
        let unit = forced_unit();

        // Act & Assert
        assert_eq!(unit.evaluate("pika B X"), None);
        assert!(matches!(unit.interpret("pika B X"), Err(PikaError::Secondary(_))));
    }

    #[test]
    fn fallback_without_output_is_no_result() {
        // "A B X" transliterates to text Brainfuck ignores entirely
        let unit = forced_unit();
        assert_eq!(
            unit.interpret("A B X"),
            Ok(Evaluation {
                dialect: Dialect::Fallback,
                output: String::new()
            })
        );
        assert_eq!(unit.evaluate("A B X"), None);
    }

    #[test]
    fn raw_bytes_are_decoded() {
        let unit = forced_unit();
        let source = echo_program("b");
        let evaluation = unit.evaluate_bytes(source.as_bytes()).unwrap();
        assert_eq!(evaluation.output, "b");
    }
}

mod flags {
    use super::*;

    #[test]
    fn scan_primary_output() {
        // Arrange
        let unit = forced_unit();
        let scanner = FlagScanner::new(r"f\{\w+\}").unwrap();

        // Act
        let evaluation = unit.evaluate(&echo_program("xf{pika}y")).unwrap();

        // Assert
        assert_eq!(scanner.scan(&evaluation.output), vec!["f{pika}"]);
    }
}
