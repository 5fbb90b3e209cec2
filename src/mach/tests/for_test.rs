use super::*;
use crate::mach::ErrorCode;

#[test]
fn test_counted_loop() {
    let output = run(
        "10 FOR I = 1 TO 3\n20 PRINT I\n30 NEXT I\n40 END",
        &[],
    );
    assert_eq!(output, vec!["1", "2", "3"]);
}

#[test]
fn test_loop_body_always_runs_once() {
    let output = run("10 FOR I = 3 TO 0\n20 PRINT I\n30 NEXT I", &[]);
    assert_eq!(output, vec!["3"]);
}

#[test]
fn test_negative_step_through_variable() {
    let source = "\
10 LET S = 0 - 1
20 FOR I = 3 TO 1 STEP S
30 PRINT I
40 NEXT I";
    assert_eq!(run(source, &[]), vec!["3", "2", "1"]);
}

#[test]
fn test_end_bound_reevaluated_every_next() {
    // The end expression is not snapshotted at entry; growing N inside
    // the body extends the loop.
    let source = "\
10 LET N = 3
20 FOR I = 1 TO N
30 PRINT I
40 LET N = 5
50 NEXT I";
    assert_eq!(run(source, &[]), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_step_reevaluated_every_next() {
    // The step doubles inside the body before every NEXT.
    let source = "\
10 LET S = 1
20 FOR I = 0 TO 9 STEP S
30 PRINT I
40 LET S = S + S
50 NEXT I";
    assert_eq!(run(source, &[]), vec!["0", "2", "6"]);
}

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let source = "\
10 FOR Y = 1 TO 2
20 FOR X = 8 TO 9
30 PRINT Y, X
40 GOTO 60
50 NEXT X
60 NEXT Y
70 END";
    assert_eq!(run(source, &[]), vec!["1 8", "2 8"]);
}

#[test]
fn test_next_without_for_is_fatal() {
    let (output, error) = run_err("10 NEXT I\n20 PRINT 1", &[]);
    assert!(output.is_empty());
    assert_eq!(error.code(), ErrorCode::NextWithoutFor('I'));
    assert_eq!(error.line_number(), Some(10));
}

#[test]
fn test_zero_step_at_entry_is_fatal() {
    let (output, error) = run_err("10 FOR I = 1 TO 3 STEP 0\n20 NEXT I", &[]);
    assert!(output.is_empty());
    assert_eq!(error.code(), ErrorCode::ZeroStep('I'));
    assert_eq!(error.line_number(), Some(10));
}

#[test]
fn test_step_zeroed_inside_body_is_fatal_at_next() {
    let source = "\
10 LET S = 1
20 FOR I = 1 TO 3 STEP S
30 LET S = 0
40 NEXT I";
    let (_, error) = run_err(source, &[]);
    assert_eq!(error.code(), ErrorCode::ZeroStep('I'));
    assert_eq!(error.line_number(), Some(40));
}
