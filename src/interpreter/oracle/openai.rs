use serde::{Deserialize, Serialize};

use crate::interpreter::oracle::{Oracle, OracleError};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for [`OpenAiOracle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleConfig {
    /// Bearer token sent with every request.
    pub api_key:  String,
    /// Model name passed in the request body.
    pub model:    String,
    /// API root; `/chat/completions` is appended to it.
    pub base_url: String,
}

impl OracleConfig {
    /// Creates a configuration with the default model and API root.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key:  api_key.into(),
               model:    DEFAULT_MODEL.to_string(),
               base_url: DEFAULT_BASE_URL.to_string(), }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model:    &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role:    &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// An oracle backed by an OpenAI-compatible chat-completions endpoint.
///
/// Each call is a single blocking request with no retries. The API key is
/// only checked when a call is made, so programs that never consult the
/// oracle run without one.
pub struct OpenAiOracle {
    agent:    ureq::Agent,
    config:   OracleConfig,
    endpoint: String,
}

impl OpenAiOracle {
    /// Creates a client for the given configuration.
    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        Self { agent: ureq::Agent::new(),
               endpoint: config.endpoint(),
               config }
    }
}

impl Oracle for OpenAiOracle {
    fn respond(&mut self, system_prompt: &str, user_message: &str) -> Result<String, OracleError> {
        if self.config.api_key.trim().is_empty() {
            return Err(OracleError::MissingCredentials);
        }

        let request = ChatRequest { model:    &self.config.model,
                                    messages: [ChatMessage { role:    "system",
                                                             content: system_prompt, },
                                               ChatMessage { role:    "user",
                                                             content: user_message, }], };

        let body = self.agent
                       .post(&self.endpoint)
                       .set("Authorization", &format!("Bearer {}", self.config.api_key))
                       .send_json(&request)?
                       .into_string()
                       .map_err(|e| OracleError::Transport { message: e.to_string() })?;

        let response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| OracleError::MalformedResponse { details:
                                                                                        e.to_string() })?;

        response.choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| OracleError::MalformedResponse { details: "response contained no message content".to_string() })
    }
}
