use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, format_tokens},
        parser::{
            block::{parse_function_definition, parse_if, parse_while},
            statement::{
                parse_comment, parse_del, parse_let, parse_print, parse_return, parse_run,
                parse_run_with_outputs, parse_use,
            },
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Result of a single recognizer: the statement and the tokens after it, or
/// `None` if the recognizer does not match.
pub type Recognized<'t> = Option<(Statement, &'t [(Token, usize)])>;

type Recognizer = for<'t> fn(&'t [(Token, usize)]) -> Recognized<'t>;

/// Statement recognizers in priority order.
///
/// `run` without outputs is a strict subset of the shape with outputs, so it
/// must stay last.
const RECOGNIZERS: &[Recognizer] = &[parse_del,
                                     parse_let,
                                     parse_use,
                                     parse_if,
                                     parse_function_definition,
                                     parse_while,
                                     parse_print,
                                     parse_comment,
                                     parse_return,
                                     parse_run_with_outputs,
                                     parse_run];

/// Maximum number of unmatched tokens rendered in a parse error.
const ERROR_TOKEN_LIMIT: usize = 10;

/// Parses a whole token stream into a program.
///
/// Statements are recognized one after another until the tokens run out.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if a `}` is left over with no open block.
/// - `UnrecognizedStatement` if no recognizer matches at some position.
///
/// # Example
/// ```
/// use hellm::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("del x;").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program, vec![Statement::Del { ident: "x".into() }]);
///
/// let tokens = tokenize("del x").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let (program, rest) = parse_statements(tokens);

    match rest.first() {
        None => Ok(program),
        Some((Token::RBrace, line)) => {
            Err(ParseError::UnexpectedTrailingTokens { tokens: render_unmatched(rest),
                                                       line:   *line, })
        },
        Some((_, line)) => Err(ParseError::UnrecognizedStatement { tokens: render_unmatched(rest),
                                                                   line:   *line, }),
    }
}

/// Parses statements until no recognizer matches or the tokens run out.
///
/// This never fails; the caller decides whether the remaining tokens are
/// acceptable (a closing brace for a block, nothing at the top level).
///
/// # Returns
/// The parsed statements and the unconsumed tokens.
pub fn parse_statements(mut tokens: &[(Token, usize)]) -> (Vec<Statement>, &[(Token, usize)]) {
    let mut statements = Vec::new();

    while !tokens.is_empty() {
        let Some((statement, rest)) = try_parse_statement(tokens) else {
            break;
        };
        statements.push(statement);
        tokens = rest;
    }

    (statements, tokens)
}

/// Tries every recognizer in order and returns the first match.
pub fn try_parse_statement(tokens: &[(Token, usize)]) -> Recognized<'_> {
    RECOGNIZERS.iter().find_map(|recognize| recognize(tokens))
}

fn render_unmatched(tokens: &[(Token, usize)]) -> String {
    let shown = format_tokens(tokens.iter().take(ERROR_TOKEN_LIMIT).map(|(t, _)| t), false);
    if tokens.len() > ERROR_TOKEN_LIMIT {
        format!("{shown} ...")
    } else {
        shown
    }
}
