/// Core evaluation logic.
///
/// Contains the interpreter state, the statement dispatcher, the return signal
/// and the simple statements (`let`, `use`, `print`, `del`).
pub mod core;

/// Oracle-driven control flow.
///
/// Evaluates `if` and `while`, asking the oracle to judge each condition and
/// running the chosen body in a child scope.
pub mod control_flow;

/// Function invocation and return.
///
/// Runs `fn` definitions in a fresh scope with positional argument binding,
/// checks input and output arity, and produces the return signal.
pub mod function;

/// Prompt construction and reply decoding.
///
/// Builds the system prompts sent to the oracle and decodes the sentinel
/// markers in condition replies.
pub mod prompt;
