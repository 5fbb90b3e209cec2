use crate::LineNumber;

/// ## Run-time failure
///
/// Every run-time condition is fatal to the current run; nothing is
/// retried and no line is skipped. The line number of the failing
/// statement is attached by the runtime's step loop.
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident $( ( $($arg:expr),* ) )?) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err $( ( $($arg),* ) )?)
    };
    ($err:ident $( ( $($arg:expr),* ) )?, $line:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err $( ( $($arg),* ) )?)
            .in_line_number($line)
    };
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorCode {
    NextWithoutFor(char),
    ReturnWithoutGosub,
    UndefinedLine(LineNumber),
    UndefinedVariable(char),
    DivisionByZero,
    ZeroStep(char),
    OutOfMemory,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
        }
    }

    pub fn in_line_number(mut self, line_number: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = Some(line_number);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self.code {
            NextWithoutFor(var) => write!(f, "NEXT WITHOUT FOR {}", var)?,
            ReturnWithoutGosub => write!(f, "RETURN WITHOUT GOSUB")?,
            UndefinedLine(line) => write!(f, "UNDEFINED LINE {}", line)?,
            UndefinedVariable(var) => write!(f, "UNDEFINED VARIABLE {}", var)?,
            DivisionByZero => write!(f, "DIVISION BY ZERO")?,
            ZeroStep(var) => write!(f, "ZERO STEP IN FOR {}", var)?,
            OutOfMemory => write!(f, "OUT OF MEMORY")?,
        }
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
