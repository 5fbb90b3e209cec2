/// ## Parse failure
///
/// Carries the reason a line refused to parse, the raw source line it
/// happened on, and the underlying conversion error when one exists.
/// Parsing stops at the first failure; there is no recovery tier.
pub struct Error {
    message: &'static str,
    line: String,
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(message: &'static str) -> Error {
        Error {
            message,
            line: String::new(),
            cause: None,
        }
    }

    pub fn in_line(mut self, line: &str) -> Error {
        debug_assert!(self.line.is_empty());
        self.line = line.to_string();
        self
    }

    pub fn because<E: std::error::Error + Send + Sync + 'static>(mut self, cause: E) -> Error {
        debug_assert!(self.cause.is_none());
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn message(&self) -> &str {
        self.message
    }

    /// The raw source line that failed to parse.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.line.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.message, self.line)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c.as_ref() as &(dyn std::error::Error + 'static))
    }
}
