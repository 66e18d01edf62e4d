use std::io::Write;

use crate::interpreter::oracle::{Oracle, OracleError};

/// Records every exchange with the wrapped oracle.
///
/// Prompts, user messages and replies (or errors) are written to `sink` as
/// they happen. Write failures are ignored; the transcript is diagnostic only.
///
/// ```
/// use hellm::interpreter::oracle::{Oracle, OracleError, transcript::Transcript};
///
/// let oracle = |_: &str, _: &str| -> Result<String, OracleError> { Ok("EVALUATE_TRUE".into()) };
/// let mut recorded = Transcript::new(oracle, Vec::new());
///
/// recorded.respond("decide", "is it raining").unwrap();
/// let log = String::from_utf8(recorded.into_sink()).unwrap();
/// assert!(log.contains("is it raining"));
/// assert!(log.contains("EVALUATE_TRUE"));
/// ```
pub struct Transcript<O, W> {
    inner: O,
    sink:  W,
}

impl<O, W> Transcript<O, W> {
    /// Wraps `inner`, recording to `sink`.
    pub const fn new(inner: O, sink: W) -> Self {
        Self { inner, sink }
    }

    /// Returns the sink, dropping the wrapped oracle.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<O: Oracle, W: Write> Oracle for Transcript<O, W> {
    fn respond(&mut self, system_prompt: &str, user_message: &str) -> Result<String, OracleError> {
        let _ = writeln!(self.sink, "--- system ---\n{system_prompt}\n--- user ---\n{user_message}");

        let reply = self.inner.respond(system_prompt, user_message);
        let _ = match &reply {
            Ok(text) => writeln!(self.sink, "--- reply ---\n{text}"),
            Err(e) => writeln!(self.sink, "--- error ---\n{e}"),
        };

        reply
    }
}
