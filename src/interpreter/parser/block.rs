use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Recognized, parse_statements},
            pattern::{Capture, CaptureRun, Fixed, match_sequence},
        },
    },
};

/// Parses a block body up to and including its closing brace.
///
/// The opening brace must already be consumed. Statements are parsed until
/// none match; the next token must then be `}`.
///
/// # Returns
/// The body statements and the tokens after `}`, or `None` if the block is
/// not closed where the statements stop.
fn parse_block_body(tokens: &[(Token, usize)]) -> Option<(Vec<Statement>, &[(Token, usize)])> {
    let (body, rest) = parse_statements(tokens);
    let rest = match_sequence(rest, &mut [&mut Fixed(Token::RBrace)])?;
    Some((body, rest))
}

/// Recognizes `if "<condition>" { ... }` with an optional `else { ... }`.
///
/// If the `else` keyword and brace are present, the else block must be
/// closed too, otherwise the whole statement fails to match.
pub fn parse_if(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut condition = Capture::string();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::If),
                                    &mut condition,
                                    &mut Fixed(Token::LBrace)])?;
    let (then_body, rest) = parse_block_body(rest)?;

    let (else_body, rest) =
        match match_sequence(rest, &mut [&mut Fixed(Token::Else), &mut Fixed(Token::LBrace)]) {
            Some(else_tokens) => parse_block_body(else_tokens)?,
            None => (Vec::new(), rest),
        };

    Some((Statement::If { condition: condition.take()?,
                          then_body,
                          else_body },
          rest))
}

/// Recognizes `while "<condition>" { ... }`.
pub fn parse_while(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut condition = Capture::string();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::While),
                                    &mut condition,
                                    &mut Fixed(Token::LBrace)])?;
    let (body, rest) = parse_block_body(rest)?;

    Some((Statement::While { condition: condition.take()?,
                             body },
          rest))
}

/// Recognizes `fn <name> <params>* { ... }`.
pub fn parse_function_definition(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut name = Capture::identifier();
    let mut params = CaptureRun::identifiers();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Fn),
                                    &mut name,
                                    &mut params,
                                    &mut Fixed(Token::LBrace)])?;
    let (body, rest) = parse_block_body(rest)?;

    Some((Statement::FunctionDef(FunctionDef { name: name.take()?,
                                               params: params.into_values(),
                                               body }),
          rest))
}
