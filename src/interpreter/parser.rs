/// Core parsing entry points.
///
/// Holds the ordered recognizer table, the top-level `parse` function and the
/// "parse statements until nothing matches" loop shared with block parsing.
pub mod core;

/// Token-shape pattern matching.
///
/// A small combinator for testing whether a prefix of the token stream has a
/// declared shape: a fixed token, a captured identifier or string, or a
/// greedy run of identifiers. Every recognizer is built from it.
pub mod pattern;

/// Block statement recognizers.
///
/// Recognizes `if`, `while` and `fn`, which recursively parse their bodies and
/// must find the closing brace to succeed.
pub mod block;

/// Simple statement recognizers.
///
/// Recognizes the single-line statements terminated by `;`: `let`, `use`,
/// `print`, `com`, `del`, `return` and both forms of `run`.
pub mod statement;
