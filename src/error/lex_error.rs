#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// No token reader matched at the current position.
    ///
    /// This also covers string literals that are never closed.
    UnrecognizedToken {
        /// The unconsumed input, truncated for display.
        fragment: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { fragment, line } => {
                write!(f, "Error on line {line}: Unrecognized token at start of '{fragment}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
