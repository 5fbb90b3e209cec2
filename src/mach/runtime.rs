use super::{Error, Program, Stack};
use crate::error;
use crate::lang::ast::{AriOp, Expression, PrintItem, Statement};
use crate::{LineNumber, Number};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Bookkeeping for one active FOR/NEXT pair, keyed by loop variable.
/// The end and step expressions are kept unevaluated: NEXT re-evaluates
/// both live on every pass rather than snapshotting them at entry.
struct LoopRecord {
    resume: LineNumber,
    to: Expression,
    step: Expression,
}

/// ## Interpreter
///
/// Executes an assembled [`Program`] one statement at a time against a
/// variable store, loop records, an explicit return stack, and a
/// program counter. The program is borrowed read-only; all mutable
/// state lives here, so independent runtimes over one program may run
/// on separate threads.
///
/// The I/O host supplies three callbacks: `on_input` blocks for one
/// integer, `on_output` receives each finished print line, and
/// `on_finished` fires once after a normal halt.
pub struct Runtime<'a> {
    program: &'a Program,
    vars: HashMap<char, Number>,
    loops: HashMap<char, LoopRecord>,
    returns: Stack<Option<LineNumber>>,
    pc: Option<LineNumber>,
    on_input: Box<dyn FnMut() -> Number + 'a>,
    on_output: Box<dyn FnMut(&str) + 'a>,
    on_finished: Box<dyn FnMut() + 'a>,
}

impl<'a> Runtime<'a> {
    pub fn new<I, O, F>(
        program: &'a Program,
        on_input: I,
        on_output: O,
        on_finished: F,
    ) -> Runtime<'a>
    where
        I: FnMut() -> Number + 'a,
        O: FnMut(&str) + 'a,
        F: FnMut() + 'a,
    {
        Runtime {
            program,
            vars: HashMap::new(),
            loops: HashMap::new(),
            returns: Stack::new(),
            pc: program.first_line(),
            on_input: Box::new(on_input),
            on_output: Box::new(on_output),
            on_finished: Box::new(on_finished),
        }
    }

    /// Discards all runtime state and rewinds the program counter to
    /// the program's first line.
    pub fn reset(&mut self) {
        self.vars.clear();
        self.loops.clear();
        self.returns.clear();
        self.pc = self.program.first_line();
    }

    /// Runs from a fresh state to completion or fatal failure. The
    /// finished callback fires only after a normal halt.
    pub fn run(&mut self) -> Result<()> {
        self.reset();
        while self.step()? {}
        (self.on_finished)();
        Ok(())
    }

    /// Executes exactly one statement. Returns whether more remain.
    pub fn step(&mut self) -> Result<bool> {
        let line_number = match self.pc {
            Some(line_number) => line_number,
            None => return Ok(false),
        };
        match self.execute(line_number) {
            Ok(()) => Ok(self.pc.is_some()),
            Err(error) => Err(error.in_line_number(line_number)),
        }
    }

    fn execute(&mut self, line_number: LineNumber) -> Result<()> {
        let program = self.program;
        // The program counter only ever holds lines that exist.
        let statement = match program.get(line_number) {
            Some(statement) => statement,
            None => return Err(error!(UndefinedLine(line_number))),
        };
        use Statement::*;
        match statement {
            Let { var, expr } => {
                let value = self.eval(expr)?;
                self.vars.insert(*var, value);
                self.advance(line_number);
            }
            Print(items) => {
                let mut pieces: Vec<String> = vec![];
                for item in items {
                    match item {
                        PrintItem::Text(s) => pieces.push(s.clone()),
                        PrintItem::Expr(expr) => pieces.push(self.eval(expr)?.to_string()),
                    }
                }
                (self.on_output)(&pieces.join(" "));
                self.advance(line_number);
            }
            Input(var) => {
                let value = (self.on_input)();
                self.vars.insert(*var, value);
                self.advance(line_number);
            }
            If {
                lhs,
                relop,
                rhs,
                then_line,
            } => {
                if relop.holds(self.eval(lhs)?, self.eval(rhs)?) {
                    self.jump(*then_line)?;
                } else {
                    self.advance(line_number);
                }
            }
            For {
                var,
                from,
                to,
                step,
            } => {
                // Re-entering an active loop is a no-op: control just
                // continues into the body.
                if !self.loops.contains_key(var) {
                    let start = self.eval(from)?;
                    let step_value = self.eval(step)?;
                    if step_value == 0 {
                        return Err(error!(ZeroStep(*var)));
                    }
                    self.vars.insert(*var, start);
                    self.loops.insert(
                        *var,
                        LoopRecord {
                            resume: line_number,
                            to: to.clone(),
                            step: step.clone(),
                        },
                    );
                }
                self.advance(line_number);
            }
            Next(var) => self.iterate(*var, line_number)?,
            Goto(target) => self.jump(*target)?,
            Gosub(target) => {
                self.returns.push(program.line_after(line_number))?;
                self.jump(*target)?;
            }
            Return => match self.returns.pop() {
                // A GOSUB on the last program line pushed None;
                // returning there halts like an implicit END.
                Some(resume) => self.pc = resume,
                None => return Err(error!(ReturnWithoutGosub)),
            },
            End => self.pc = None,
        }
        Ok(())
    }

    fn iterate(&mut self, var: char, line_number: LineNumber) -> Result<()> {
        let (resume, to, step) = match self.loops.get(&var) {
            Some(record) => (record.resume, record.to.clone(), record.step.clone()),
            None => return Err(error!(NextWithoutFor(var))),
        };
        let step_value = self.eval(&step)?;
        if step_value == 0 {
            return Err(error!(ZeroStep(var)));
        }
        let value = self.fetch(var)?.wrapping_add(step_value);
        self.vars.insert(var, value);
        let end_value = self.eval(&to)?;
        if (step_value > 0 && value > end_value) || (step_value < 0 && value < end_value) {
            self.loops.remove(&var);
            self.advance(line_number);
        } else {
            self.pc = Some(resume);
        }
        Ok(())
    }

    fn advance(&mut self, line_number: LineNumber) {
        self.pc = self.program.line_after(line_number);
    }

    fn jump(&mut self, target: LineNumber) -> Result<()> {
        if self.program.get(target).is_none() {
            return Err(error!(UndefinedLine(target)));
        }
        self.pc = Some(target);
        Ok(())
    }

    fn fetch(&self, var: char) -> Result<Number> {
        match self.vars.get(&var) {
            Some(value) => Ok(*value),
            None => Err(error!(UndefinedVariable(var))),
        }
    }

    fn eval(&self, expr: &Expression) -> Result<Number> {
        use Expression::*;
        match expr {
            Variable(var) => self.fetch(*var),
            Literal(n) => Ok(*n),
            Arithmetic {
                operands,
                operators,
            } => {
                // Chains are flat and never empty by construction.
                let mut acc = self.eval(&operands[0])?;
                for (op, operand) in operators.iter().zip(&operands[1..]) {
                    let rhs = self.eval(operand)?;
                    acc = apply(*op, acc, rhs)?;
                }
                Ok(acc)
            }
        }
    }
}

/// Arithmetic wraps on overflow, matching the original host integers.
fn apply(op: AriOp, lhs: Number, rhs: Number) -> Result<Number> {
    use AriOp::*;
    Ok(match op {
        Add => lhs.wrapping_add(rhs),
        Subtract => lhs.wrapping_sub(rhs),
        Multiply => lhs.wrapping_mul(rhs),
        Divide => {
            if rhs == 0 {
                return Err(error!(DivisionByZero));
            }
            lhs.wrapping_div(rhs)
        }
    })
}
