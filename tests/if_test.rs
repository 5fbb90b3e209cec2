mod common;
use common::*;
use tinybasic::mach::ErrorCode;

#[test]
fn test_true_condition_jumps() {
    let source = "\
10 LET A = 5
20 IF A > 4 THEN 40
30 PRINT 0
40 PRINT 1";
    assert_eq!(run(source, &[]), vec!["1"]);
}

#[test]
fn test_false_condition_falls_through() {
    let source = "\
10 LET A = 5
20 IF A > 9 THEN 40
30 PRINT 0
40 PRINT 1";
    assert_eq!(run(source, &[]), vec!["0", "1"]);
}

#[test]
fn test_relational_operators() {
    assert_eq!(run("10 IF 1 <> 2 THEN 30\n20 END\n30 PRINT 1", &[]), vec!["1"]);
    assert_eq!(run("10 IF 2 <= 2 THEN 30\n20 END\n30 PRINT 1", &[]), vec!["1"]);
    assert_eq!(run("10 IF 1 >= 2 THEN 30\n30 PRINT 1", &[]), vec!["1"]);
}

#[test]
fn test_condition_sides_are_expressions() {
    let source = "\
10 LET A = 2
20 IF A + 1 = 4 - 1 THEN 40
30 END
40 PRINT \"EQ\"";
    assert_eq!(run(source, &[]), vec!["EQ"]);
}

#[test]
fn test_jump_to_missing_line_is_fatal() {
    let (output, error) = run_err("10 IF 1 = 1 THEN 50", &[]);
    assert!(output.is_empty());
    assert_eq!(error.code(), ErrorCode::UndefinedLine(50));
    assert_eq!(error.line_number(), Some(10));
}
