/// Lexing errors.
///
/// Raised by the tokenizer when no token reader matches the remaining input.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when no statement recognizer matches the token stream, including
/// stray closing braces left over after a block.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error that can abort a program run: failed or indecisive
/// oracle calls, unknown variables and functions, argument and arity
/// mismatches, and output failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
