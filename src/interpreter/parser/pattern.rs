use crate::interpreter::lexer::Token;

/// One element of a token-shape pattern.
///
/// An element inspects the front of a token slice and reports how many tokens
/// it consumed, or `None` if it does not match. Capturing elements keep the
/// payloads they consumed so the recognizer can read them afterwards.
pub trait Pattern {
    /// Attempts to consume a prefix of `tokens`.
    fn consume(&mut self, tokens: &[(Token, usize)]) -> Option<usize>;
}

/// Matches exactly one token equal to the given payload-free token.
pub struct Fixed(pub Token);

impl Pattern for Fixed {
    fn consume(&mut self, tokens: &[(Token, usize)]) -> Option<usize> {
        match tokens.first() {
            Some((token, _)) if *token == self.0 => Some(1),
            _ => None,
        }
    }
}

/// Extracts a payload from a token, or `None` if the token has the wrong
/// kind.
pub type Extractor<T> = fn(&Token) -> Option<T>;

fn identifier_payload(token: &Token) -> Option<String> {
    token.identifier().map(str::to_string)
}

fn string_payload(token: &Token) -> Option<String> {
    token.string().map(str::to_string)
}

/// Matches exactly one token of a kind and captures its payload.
pub struct Capture<T> {
    extract: Extractor<T>,
    value:   Option<T>,
}

impl<T> Capture<T> {
    /// Creates a capture using a custom extractor.
    pub const fn new(extract: Extractor<T>) -> Self {
        Self { extract,
               value: None }
    }

    /// Takes the captured payload; `None` until a successful match.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl Capture<String> {
    /// Captures the name of a single identifier token.
    #[must_use]
    pub const fn identifier() -> Self {
        Self::new(identifier_payload)
    }

    /// Captures the value of a single string literal token.
    #[must_use]
    pub const fn string() -> Self {
        Self::new(string_payload)
    }
}

impl<T> Pattern for Capture<T> {
    fn consume(&mut self, tokens: &[(Token, usize)]) -> Option<usize> {
        let (token, _) = tokens.first()?;
        self.value = Some((self.extract)(token)?);
        Some(1)
    }
}

/// Greedily matches zero or more consecutive tokens of one kind, capturing
/// every payload. Never fails.
pub struct CaptureRun<T> {
    extract: Extractor<T>,
    values:  Vec<T>,
}

impl<T> CaptureRun<T> {
    /// Creates a run capture using a custom extractor.
    pub const fn new(extract: Extractor<T>) -> Self {
        Self { extract,
               values: Vec::new() }
    }

    /// Consumes the run, returning the captured payloads in order.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl CaptureRun<String> {
    /// Captures the names of a run of identifier tokens.
    #[must_use]
    pub const fn identifiers() -> Self {
        Self::new(identifier_payload)
    }
}

impl<T> Pattern for CaptureRun<T> {
    fn consume(&mut self, tokens: &[(Token, usize)]) -> Option<usize> {
        let extract = self.extract;
        let before = self.values.len();
        self.values
            .extend(tokens.iter().map_while(|(token, _)| extract(token)));
        Some(self.values.len() - before)
    }
}

/// Matches a sequence of pattern elements against the front of `tokens`.
///
/// Elements are applied left to right, each starting where the previous one
/// stopped. If any element fails the whole sequence fails, and captures made
/// so far must be ignored.
///
/// # Returns
/// The tokens remaining after the last element, or `None` on failure.
///
/// # Example
/// ```
/// use hellm::interpreter::{
///     lexer::{Token, tokenize},
///     parser::pattern::{Capture, Fixed, match_sequence},
/// };
///
/// let tokens = tokenize("print x; print y;").unwrap();
/// let mut ident = Capture::identifier();
///
/// let rest = match_sequence(&tokens,
///                           &mut [&mut Fixed(Token::Print),
///                                 &mut ident,
///                                 &mut Fixed(Token::Semicolon)]).unwrap();
///
/// assert_eq!(ident.take().as_deref(), Some("x"));
/// assert_eq!(rest.len(), 3);
/// ```
pub fn match_sequence<'t>(tokens: &'t [(Token, usize)],
                          pattern: &mut [&mut dyn Pattern])
                          -> Option<&'t [(Token, usize)]> {
    let mut offset = 0;
    for element in pattern {
        offset += element.consume(&tokens[offset..])?;
    }
    Some(&tokens[offset..])
}
