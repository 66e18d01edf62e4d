use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::Recognized,
            pattern::{Capture, CaptureRun, Fixed, match_sequence},
        },
    },
    util::num::parse_arg_index,
};

/// Recognizes `del <ident>;`.
pub fn parse_del(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut ident = Capture::identifier();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Del),
                                    &mut ident,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Del { ident: ident.take()? }, rest))
}

/// Recognizes `let <ident> = "<value>";`.
pub fn parse_let(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut ident = Capture::identifier();
    let mut value = Capture::string();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Let),
                                    &mut ident,
                                    &mut Fixed(Token::Equals),
                                    &mut value,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Let { ident: ident.take()?,
                           value: value.take()?, },
          rest))
}

/// Recognizes `use <ident> = <index>;`.
///
/// The index is lexed as an identifier. If it is not a non-negative base-10
/// integer the recognizer simply does not match.
pub fn parse_use(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut ident = Capture::identifier();
    let mut index = Capture::identifier();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Use),
                                    &mut ident,
                                    &mut Fixed(Token::Equals),
                                    &mut index,
                                    &mut Fixed(Token::Semicolon)])?;

    let arg_index = parse_arg_index(&index.take()?)?;
    Some((Statement::Use { ident: ident.take()?,
                           arg_index },
          rest))
}

/// Recognizes `print <ident>;`.
pub fn parse_print(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut ident = Capture::identifier();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Print),
                                    &mut ident,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Print { ident: ident.take()? }, rest))
}

/// Recognizes `com "<text>";`.
pub fn parse_comment(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut text = Capture::string();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Com),
                                    &mut text,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Comment { text: text.take()? }, rest))
}

/// Recognizes `return <idents>*;`.
pub fn parse_return(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut idents = CaptureRun::identifiers();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Return),
                                    &mut idents,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Return { idents: idents.into_values() }, rest))
}

/// Recognizes `run <outputs>* = <function> <inputs>*;`.
pub fn parse_run_with_outputs(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut outputs = CaptureRun::identifiers();
    let mut function = Capture::identifier();
    let mut inputs = CaptureRun::identifiers();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Run),
                                    &mut outputs,
                                    &mut Fixed(Token::Equals),
                                    &mut function,
                                    &mut inputs,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Run { outputs:  outputs.into_values(),
                           function: function.take()?,
                           inputs:   inputs.into_values(), },
          rest))
}

/// Recognizes `run <function> <inputs>*;`, a call that discards results.
pub fn parse_run(tokens: &[(Token, usize)]) -> Recognized<'_> {
    let mut function = Capture::identifier();
    let mut inputs = CaptureRun::identifiers();
    let rest = match_sequence(tokens,
                              &mut [&mut Fixed(Token::Run),
                                    &mut function,
                                    &mut inputs,
                                    &mut Fixed(Token::Semicolon)])?;

    Some((Statement::Run { outputs:  Vec::new(),
                           function: function.take()?,
                           inputs:   inputs.into_values(), },
          rest))
}
