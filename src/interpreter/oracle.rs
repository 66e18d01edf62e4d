/// The oracle capability and its error type.
///
/// Defines the single operation the evaluator needs from a decision oracle,
/// and implements it for plain closures so callers can script replies.
pub mod core;

/// Chat-completions client.
///
/// Sends the system prompt and user message to an OpenAI-compatible endpoint
/// and returns the first choice's text.
pub mod openai;

/// Exchange recording.
///
/// Wraps another oracle and writes every prompt and reply to a writer.
pub mod transcript;

pub use self::core::{Oracle, OracleError};
