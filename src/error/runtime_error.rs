use crate::interpreter::oracle::OracleError;

#[derive(Debug)]
/// Represents all errors that can occur while running a program.
///
/// Every runtime error is terminal: the run stops at the first one and the
/// error is handed to the caller unchanged.
pub enum RuntimeError {
    /// The oracle call itself failed.
    OracleCall {
        /// Keyword of the statement that consulted the oracle.
        statement: &'static str,
        /// The underlying client error.
        source:    OracleError,
    },
    /// The oracle replied, but with neither `EVALUATE_TRUE` nor
    /// `EVALUATE_FALSE`.
    IndecisiveOracle {
        /// The condition that was being judged.
        condition: String,
        /// The oracle's full reply.
        reply:     String,
    },
    /// Tried to use a variable that is not in scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to run a function that was never defined.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A `use` statement referred to a missing invocation argument.
    ArgumentOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of arguments the program was invoked with.
        count: usize,
    },
    /// A function was run with the wrong number of inputs.
    ArityMismatch {
        /// The name of the function.
        function: String,
        /// Declared parameter count.
        expected: usize,
        /// Number of inputs supplied.
        found:    usize,
    },
    /// A function returned fewer values than the caller asked for.
    OutputArityMismatch {
        /// The name of the function.
        function: String,
        /// Number of output identifiers at the call site.
        expected: usize,
        /// Number of values the function returned.
        found:    usize,
    },
    /// A `while` loop ran past the configured iteration cap.
    LoopLimitExceeded {
        /// The loop condition.
        condition: String,
        /// The configured cap.
        limit:     usize,
    },
    /// Writing to the output sink failed.
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OracleCall { statement, source } => {
                write!(f, "Error interpreting {statement} statement: {source}")
            },
            Self::IndecisiveOracle { condition, .. } => write!(f,
                                                               "The oracle did not decide whether \"{condition}\" holds."),
            Self::UndefinedVariable { name } => write!(f, "Variable '{name}' is not in scope."),
            Self::UndefinedFunction { name } => write!(f, "Function '{name}' is not defined."),
            Self::ArgumentOutOfRange { index, count } => write!(f,
                                                                "Argument index {index} is out of range for {count} arguments."),
            Self::ArityMismatch { function,
                                  expected,
                                  found, } => write!(f,
                                                     "Function '{function}' expected {expected} args but got {found}."),
            Self::OutputArityMismatch { function,
                                        expected,
                                        found, } => write!(f,
                                                           "Function '{function}' provided {found} outputs but the caller expects {expected}."),
            Self::LoopLimitExceeded { condition, limit } => write!(f,
                                                                   "Loop \"{condition}\" exceeded the limit of {limit} iterations."),
            Self::Output { source } => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OracleCall { source, .. } => Some(source),
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}
