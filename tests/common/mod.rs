use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use tinybasic::lang::parse;
use tinybasic::mach::{Error, Program, Runtime};
use tinybasic::Number;

/// Runs a program with scripted input and collects the output lines.
/// Panics if the finished notification disagrees with the run result.
pub fn session(source: &str, input: &[Number]) -> (Vec<String>, Result<(), Error>) {
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

pub fn run(source: &str, input: &[Number]) -> Vec<String> {
    let (output, result) = session(source, input);
    result.expect("program should run");
    output
}

pub fn run_err(source: &str, input: &[Number]) -> (Vec<String>, Error) {
    let (output, result) = session(source, input);
    match result {
        Ok(()) => panic!("program should fail"),
        Err(error) => (output, error),
    }
}
