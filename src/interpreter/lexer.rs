use logos::Logos;

use crate::{
    error::LexError,
    util::text::{FRAGMENT_LIMIT, truncate_for_display},
};

const PURPLE: &str = "\x1b[35m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Represents a lexical token in the source input.
///
/// Keywords, structural markers, identifiers and string literals. Tokens are
/// immutable once produced; their position in the sequence is what gives them
/// meaning.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `let`
    Let,
    /// `use`
    Use,
    /// `fn`
    Fn,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `print`
    Print,
    /// `com`
    Com,
    /// `del`
    Del,
    /// `run`
    Run,
    /// `return`
    Return,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `=`
    Equals,
    /// Identifier tokens matching `[A-Za-z0-9_]+`, such as `x` or `0`.
    Identifier(String),
    /// String literal tokens; the value excludes the surrounding quotes.
    Str(String),
}

impl Token {
    /// Returns the identifier name if this is an identifier token.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the literal value if this is a string token.
    #[must_use]
    pub fn string(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    const fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Let => Some("let"),
            Self::Use => Some("use"),
            Self::Fn => Some("fn"),
            Self::If => Some("if"),
            Self::Else => Some("else"),
            Self::While => Some("while"),
            Self::Print => Some("print"),
            Self::Com => Some("com"),
            Self::Del => Some("del"),
            Self::Run => Some("run"),
            Self::Return => Some("return"),
            _ => None,
        }
    }

    /// Renders the token with ANSI colors: keywords purple, identifiers
    /// yellow, strings green. Punctuation is left uncolored.
    #[must_use]
    pub fn paint(&self) -> String {
        match self {
            Self::Identifier(name) => format!("{YELLOW}{name}{RESET}"),
            Self::Str(_) => format!("{GREEN}{self}{RESET}"),
            _ => match self.keyword() {
                Some(keyword) => format!("{PURPLE}{keyword}{RESET}"),
                None => self.to_string(),
            },
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Semicolon => write!(f, ";"),
            Self::Equals => write!(f, "="),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Str(value) => write!(f, "\"{value}\""),
            keyword => write!(f, "{}", keyword.keyword().unwrap_or_default()),
        }
    }
}

/// Raw lexemes recognized by the generated lexer.
///
/// Keywords only match when followed by a whitespace character, which is
/// consumed with them; anything else falls back to an identifier. `return;`
/// is split into `return` and `;` by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    #[regex(r"let[ \t\r\n]")]
    Let,
    #[regex(r"use[ \t\r\n]")]
    Use,
    #[regex(r"fn[ \t\r\n]")]
    Fn,
    #[regex(r"print[ \t\r\n]")]
    Print,
    #[regex(r"if[ \t\r\n]")]
    If,
    #[regex(r"while[ \t\r\n]")]
    While,
    #[regex(r"else[ \t\r\n]")]
    Else,
    #[regex(r"com[ \t\r\n]")]
    Com,
    #[regex(r"del[ \t\r\n]")]
    Del,
    #[regex(r"run[ \t\r\n]")]
    Run,
    #[regex(r"return[ \t\r\n]")]
    Return,
    #[token("return;")]
    ReturnTerminated,
    #[regex(r"[A-Za-z0-9_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    #[token("=")]
    Equals,
    #[regex(r#""[^"]*""#, string_literal)]
    Str(String),
    #[token(";")]
    Semicolon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[regex(r"[ \t\r\n]+", |lex| {
        lex.extras.line += count_newlines(lex.slice());
        logos::Skip
    })]
    Whitespace,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the line reached so far, for diagnostics only.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

fn count_newlines(slice: &str) -> usize {
    slice.bytes().filter(|&b| b == b'\n').count()
}

/// Strips the quotes from a string literal. There is no escape handling.
fn string_literal(lex: &logos::Lexer<Lexeme>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Converts source text into tokens paired with the line they start on.
///
/// Leading whitespace (space, tab, CR, LF) is skipped between tokens. When no
/// token matches, including on an unterminated string literal, the unconsumed
/// input is reported, truncated to 20 characters.
///
/// # Errors
/// Returns [`LexError::UnrecognizedToken`] at the first position where no
/// token matches.
///
/// # Example
/// ```
/// use hellm::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("print x;").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Print, 1),
///                 (Token::Identifier("x".into()), 1),
///                 (Token::Semicolon, 1)]);
///
/// assert!(tokenize("let x = \"oops;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            let rest = &source[lexer.span().start..];
            return Err(LexError::UnrecognizedToken { fragment: truncate_for_display(rest,
                                                                                    FRAGMENT_LIMIT),
                                                     line:     lexer.extras.line, });
        };

        // Keywords swallow their trailing newline and strings may span lines,
        // so the token started on the line before those newlines.
        let newlines = count_newlines(lexer.slice());
        let line = lexer.extras.line;
        lexer.extras.line += newlines;

        let token = match lexeme {
            Lexeme::Let => Token::Let,
            Lexeme::Use => Token::Use,
            Lexeme::Fn => Token::Fn,
            Lexeme::Print => Token::Print,
            Lexeme::If => Token::If,
            Lexeme::While => Token::While,
            Lexeme::Else => Token::Else,
            Lexeme::Com => Token::Com,
            Lexeme::Del => Token::Del,
            Lexeme::Run => Token::Run,
            Lexeme::Return => Token::Return,
            Lexeme::ReturnTerminated => {
                tokens.push((Token::Return, line));
                Token::Semicolon
            },
            Lexeme::Identifier(name) => Token::Identifier(name),
            Lexeme::Equals => Token::Equals,
            Lexeme::Str(value) => Token::Str(value),
            Lexeme::Semicolon => Token::Semicolon,
            Lexeme::LBrace => Token::LBrace,
            Lexeme::RBrace => Token::RBrace,
            Lexeme::Whitespace => continue,
        };
        tokens.push((token, line));
    }

    Ok(tokens)
}

/// Renders tokens for display, separated by single spaces.
///
/// Without color the output tokenizes back to the same token sequence.
///
/// # Example
/// ```
/// use hellm::interpreter::lexer::{format_tokens, tokenize};
///
/// let tokens = tokenize("let   x=\"hi\";").unwrap();
/// let shown = format_tokens(tokens.iter().map(|(t, _)| t), false);
/// assert_eq!(shown, "let x = \"hi\" ;");
/// ```
pub fn format_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>, colored: bool) -> String {
    tokens.into_iter()
          .map(|t| if colored { t.paint() } else { t.to_string() })
          .collect::<Vec<_>>()
          .join(" ")
}
