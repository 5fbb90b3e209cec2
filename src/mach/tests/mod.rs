use super::{Error, Program, Runtime};
use crate::lang::parse;
use crate::Number;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

mod for_test;

/// Runs a program with scripted input, collecting one string per
/// output line, and checks that the finished callback fires exactly
/// on normal halts.
fn session(source: &str, input: &[Number]) -> (Vec<String>, Result<(), Error>) {
    let program = Program::new(parse(source).expect("program should parse"));
    let output: RefCell<Vec<String>> = RefCell::new(vec![]);
    let finished = Cell::new(false);
    let feed: RefCell<VecDeque<Number>> = RefCell::new(input.iter().copied().collect());
    let mut runtime = Runtime::new(
        &program,
        || feed.borrow_mut().pop_front().expect("input exhausted"),
        |s| output.borrow_mut().push(s.to_string()),
        || finished.set(true),
    );
    let result = runtime.run();
    drop(runtime);
    assert_eq!(result.is_ok(), finished.get());
    (output.into_inner(), result)
}

fn run(source: &str, input: &[Number]) -> Vec<String> {
    let (output, result) = session(source, input);
    result.expect("program should run");
    output
}

fn run_err(source: &str, input: &[Number]) -> (Vec<String>, Error) {
    let (output, result) = session(source, input);
    match result {
        Ok(()) => panic!("program should fail"),
        Err(error) => (output, error),
    }
}
