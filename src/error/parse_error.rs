#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// No statement recognizer matched the remaining tokens.
    UnrecognizedStatement {
        /// The unmatched tokens, rendered as source.
        tokens: String,
        /// The source line of the first unmatched token.
        line:   usize,
    },
    /// A closing brace was found with no block left to close.
    UnexpectedTrailingTokens {
        /// The unmatched tokens, rendered as source.
        tokens: String,
        /// The source line of the stray brace.
        line:   usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedStatement { tokens, line } => {
                write!(f, "Error on line {line}: Failed to parse tokens: {tokens}")
            },
            Self::UnexpectedTrailingTokens { tokens, line } => write!(f,
                                                                      "Error on line {line}: Unexpected tokens after the end of a block: {tokens}"),
        }
    }
}

impl std::error::Error for ParseError {}
