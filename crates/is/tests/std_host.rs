//! Assertions inside plain `#[test]` functions.

mod common;

use common::{init_test_tracing, ReadError};
use is::{are_equal, are_equal_sequence, is_error, is_nil, is_true, std_test};

#[test]
fn test_passing_assertions_do_not_panic() {
    init_test_tracing();
    let mut t = std_test();
    are_equal!(&mut t, 2 + 2, 4);
    is_nil!(&mut t, None::<&u8>);
    is_true!(&mut t, "abc".starts_with('a'));
    assert!(t.lines().is_empty());
}

#[test]
#[should_panic(expected = "Expected slice of length 3, but got 2")]
fn test_length_mismatch_panics() {
    init_test_tracing();
    let mut t = std_test();
    are_equal_sequence!(&mut t, &[1, 2, 3], &[1, 2]);
}

#[test]
#[should_panic(expected = "Expected \"123\", but got \"234\" (type &str)\nwhile comparing ids")]
fn test_panic_message_includes_diagnostics() {
    init_test_tracing();
    let mut t = std_test();
    are_equal!(&mut t, "123", "234", "while comparing ids");
}

#[test]
#[should_panic(expected = "multiple Read calls return no data or error")]
fn test_error_mismatch_panics() {
    init_test_tracing();
    let mut t = std_test();
    let err = ReadError::NoProgress;
    is_error!(&mut t, &ReadError::Eof, Some(&err));
}
