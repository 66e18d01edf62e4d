/// The evaluator module executes programs.
///
/// The evaluator walks the statement tree against a scope, consults the
/// oracle for `let`, `if` and `while`, manages child and call scopes, and
/// threads the return signal out of nested blocks and function bodies.
///
/// # Responsibilities
/// - Executes every statement kind.
/// - Builds oracle prompts and decodes their replies.
/// - Reports runtime errors such as undefined variables or arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// keywords, braces, `;`, `=`, identifiers and string literals. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with their source line.
/// - Requires keywords to be followed by whitespace.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The decision oracle consulted at runtime.
///
/// Declares the capability the evaluator depends on and ships an HTTP
/// chat-completions implementation plus a recording wrapper.
pub mod oracle;
/// The parser module builds the statement tree from tokens.
///
/// Statements are recognized by matching token-shape patterns in a fixed
/// priority order; block statements recurse into their bodies.
///
/// # Responsibilities
/// - Converts tokens into [`Statement`](crate::ast::Statement) nodes.
/// - Reports the unmatched tokens when nothing can be recognized.
pub mod parser;
/// Variable and function scopes.
///
/// A stack of shared levels: child scopes for blocks, fresh scopes for
/// function calls.
pub mod scope;
