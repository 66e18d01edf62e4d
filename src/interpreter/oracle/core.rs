/// A decision oracle consulted by `let`, `if` and `while`.
///
/// The evaluator calls it with a system prompt describing the task and the
/// variables in scope, and the statement's own text as the user message.
/// Replies are free text.
///
/// Any `FnMut(&str, &str) -> Result<String, OracleError>` closure is an
/// oracle, which is how tests script replies:
///
/// ```
/// use hellm::interpreter::oracle::{Oracle, OracleError};
///
/// let mut echo = |_: &str, user: &str| -> Result<String, OracleError> { Ok(user.to_string()) };
/// assert_eq!(echo.respond("system", "hello").unwrap(), "hello");
/// ```
pub trait Oracle {
    /// Sends one exchange and returns the reply text.
    ///
    /// # Errors
    /// Returns an [`OracleError`] if no reply could be obtained.
    fn respond(&mut self, system_prompt: &str, user_message: &str) -> Result<String, OracleError>;
}

impl<F> Oracle for F where F: FnMut(&str, &str) -> Result<String, OracleError>
{
    fn respond(&mut self, system_prompt: &str, user_message: &str) -> Result<String, OracleError> {
        self(system_prompt, user_message)
    }
}

#[derive(Debug)]
/// Represents all errors an oracle call can produce.
pub enum OracleError {
    /// No API key was configured.
    MissingCredentials,
    /// The request could not be sent or the reply could not be read.
    Transport {
        /// Details from the transport layer.
        message: String,
    },
    /// The endpoint answered with a non-success status.
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
    /// The endpoint answered, but not with a usable chat completion.
    MalformedResponse {
        /// What was wrong with the reply.
        details: String,
    },
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "No API key configured for the oracle."),
            Self::Transport { message } => write!(f, "Oracle request failed: {message}"),
            Self::Status { code, body } => {
                write!(f, "Oracle responded with status {code}: {body}")
            },
            Self::MalformedResponse { details } => {
                write!(f, "Oracle response was malformed: {details}")
            },
        }
    }
}

impl std::error::Error for OracleError {}

impl From<ureq::Error> for OracleError {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::Status(code, response) => {
                Self::Status { code,
                               body: response.into_string().unwrap_or_default() }
            },
            ureq::Error::Transport(transport) => Self::Transport { message: transport.to_string() },
        }
    }
}
