//! Call-level contract between the assertions and a test context.

mod common;

use common::{init_test_tracing, ty, ReadError};
use is::{are_equal_sequence, is_error, is_true, TestContext};
use mockall::{mock, Sequence};

mock! {
    pub Context {}

    impl TestContext for Context {
        fn helper(&mut self);
        fn log(&mut self, line: &str);
        fn fail_now(&mut self);
    }
}

fn expect_failure(ctx: &mut MockContext, lines: Vec<String>) {
    let mut seq = Sequence::new();
    ctx.expect_helper()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    for expected in lines {
        ctx.expect_log()
            .withf(move |line: &str| line == expected)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }
    ctx.expect_fail_now()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
}

#[test]
fn test_success_only_marks_helper() {
    init_test_tracing();
    let mut ctx = MockContext::new();
    ctx.expect_helper().times(1).return_const(());
    ctx.expect_log().never();
    ctx.expect_fail_now().never();

    is_true!(&mut ctx, true);
}

#[test]
fn test_failure_logs_then_fails() {
    init_test_tracing();
    let mut ctx = MockContext::new();
    expect_failure(&mut ctx, vec!["Not true".to_string()]);

    is_true!(&mut ctx, false);
}

#[test]
fn test_diagnostics_logged_after_message() {
    init_test_tracing();
    let mut ctx = MockContext::new();
    expect_failure(
        &mut ctx,
        vec![
            "Expected slice of length 2, but got 0".to_string(),
            "parsed 0 records".to_string(),
        ],
    );

    let parsed: Vec<u32> = Vec::new();
    are_equal_sequence!(&mut ctx, &[1u32, 2], &parsed; "parsed ", parsed.len(), " records");
}

#[test]
fn test_works_through_trait_object() {
    init_test_tracing();
    let mut mock = MockContext::new();
    expect_failure(
        &mut mock,
        vec![format!(
            r#"Expected "EOF" (type {}), but got "None" (type {})"#,
            ty::<ReadError>(),
            ty::<Option<&ReadError>>()
        )],
    );

    let ctx: &mut dyn TestContext = &mut mock;
    is_error!(ctx, &ReadError::Eof, None::<&ReadError>);
}
