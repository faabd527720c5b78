//! End-to-end runs through the public API
//!
//! Input is fed from an in-memory reader and everything the program would
//! write to stdout is captured for comparison.

use fibseq::{Config, Count, ExitStatus, InputError, Width, emit_sequence, run};
use std::io::Cursor;

fn run_with(config: &Config, input: &str) -> (Result<ExitStatus, InputError>, String) {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let result = run(config, &mut reader, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Reference values, computed without any overflow checking
fn fib_table(n: usize) -> Vec<u128> {
    let mut table = vec![0u128, 1];
    while table.len() < n {
        let next = table[table.len() - 1] + table[table.len() - 2];
        table.push(next);
    }
    table.truncate(n);
    table
}

fn term_lines(out: &str) -> Vec<&str> {
    out.lines().filter(|l| l.starts_with('@')).collect()
}

#[test]
fn test_scenario_valid_count() {
    let (result, out) = run_with(&Config::default(), "5\n");
    assert_eq!(result.unwrap(), ExitStatus::Success);
    assert_eq!(out, "Enter rounds: @0: 0\n@1: 1\n@2: 1\n@3: 2\n@4: 3\n");
}

#[test]
fn test_scenario_malformed_then_valid() {
    let (result, out) = run_with(&Config::default(), "abc\n3\n");
    assert_eq!(result.unwrap(), ExitStatus::Success);
    assert!(out.contains("The input string 'abc' was not in a correct format.\n"));
    assert_eq!(out.matches("Enter rounds: ").count(), 2);
    assert_eq!(term_lines(&out), vec!["@0: 0", "@1: 1", "@2: 1"]);
}

#[test]
fn test_scenario_non_positive_then_valid() {
    let (result, out) = run_with(&Config::default(), "-2\n0\n4\n");
    assert_eq!(result.unwrap(), ExitStatus::Success);
    assert_eq!(out.matches("Enter rounds: ").count(), 3);
    assert_eq!(term_lines(&out).len(), 4);
}

#[test]
fn test_scenario_u8_overflow() {
    let config = Config::new().with_width(Width::U8);
    let (result, out) = run_with(&config, "14\n");
    assert_eq!(result.unwrap(), ExitStatus::OverflowWarning);

    let terms = term_lines(&out);
    assert!(terms.len() < 14);
    assert_eq!(terms.len(), 12);
    assert!(out.ends_with("Arithmetic operation resulted in an overflow.\n"));
}

#[test]
fn test_out_of_range_input_is_retried() {
    let (result, out) = run_with(&Config::default(), "3000000000\n2\n");
    assert_eq!(result.unwrap(), ExitStatus::Success);
    assert!(out.contains("Value was either too large or too small for an Int32.\n"));
    assert_eq!(term_lines(&out), vec!["@0: 0", "@1: 1"]);
}

#[test]
fn test_invalid_utf8_input_is_retried() {
    let mut reader = Cursor::new(b"\xff\xfe\n3\n".to_vec());
    let mut out = Vec::new();
    let result = run(&Config::default(), &mut reader, &mut out);
    assert_eq!(result.unwrap(), ExitStatus::Success);

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("was not in a correct format.\n"));
    assert_eq!(term_lines(&out), vec!["@0: 0", "@1: 1", "@2: 1"]);
}

#[test]
fn test_eof_without_count() {
    let (result, _) = run_with(&Config::default(), "nope\n-1\n");
    assert!(matches!(result, Err(InputError::Eof)));
}

#[test]
fn test_custom_prompt() {
    let config = Config::new().with_prompt("n> ");
    let (result, out) = run_with(&config, "1\n");
    assert_eq!(result.unwrap(), ExitStatus::Success);
    assert_eq!(out, "n> @0: 0\n");
}

#[test]
fn test_u128_terms_match_reference() {
    let expected = fib_table(184);
    let mut out = Vec::new();
    let status = emit_sequence::<u128, _>(Count::new(184).unwrap(), &mut out).unwrap();
    assert_eq!(status, ExitStatus::Success);

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 184);
    for (i, (line, value)) in lines.iter().zip(&expected).enumerate() {
        assert_eq!(*line, format!("@{}: {}", i, value));
    }
}

#[test]
fn test_u128_overflow_boundary() {
    let expected = fib_table(185);
    let mut out = Vec::new();
    let status = emit_sequence::<u128, _>(Count::new(500).unwrap(), &mut out).unwrap();
    assert_eq!(status, ExitStatus::OverflowWarning);

    let out = String::from_utf8(out).unwrap();
    let terms = term_lines(&out);
    assert_eq!(terms.len(), 185);
    assert_eq!(terms[184], format!("@184: {}", expected[184]));
}

#[test]
fn test_emission_is_deterministic() {
    for width in Width::ALL {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let count = Count::new(100).unwrap();
        let a = fibseq::emit_sequence_with(width, count, &mut first).unwrap();
        let b = fibseq::emit_sequence_with(width, count, &mut second).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}
