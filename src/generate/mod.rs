//! Doc block generation through a text-completion service.
//!
//! [`DocGenerator`] owns the prompt and the request settings; the transport
//! sits behind [`Completer`] so it can be swapped out.

pub mod openai;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub use openai::OpenAiCompleter;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_BASE_URI: &str = "https://api.openai.com/v1";

const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.3;
const STOP_SEQUENCE: &str = "\"\"\"";

/// Settings for the completion endpoint.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    /// Falls back to [`DEFAULT_BASE_URI`]
    pub base_uri: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_uri: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeneratorConfig {
    pub fn base_uri(&self) -> &str {
        self.base_uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .unwrap_or(DEFAULT_BASE_URI)
    }
}

/// Body of a `/completions` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub stop: Vec<String>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Set instead of `choices` when the service rejects the request
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub text: String,
}

/// Transport for completion requests.
pub trait Completer {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}

pub fn build_prompt(function: &str) -> String {
    format!(
        "Read the following PHP function: {function}. Write the PHPDoc block in English for the \
         method named {function}, remove any unnecessary code and comments, including if it's an \
         empty constructor. Do not add any additional comments except for the required PHPDocs, \
         unless you detect obvious errors."
    )
}

pub struct DocGenerator<C: Completer> {
    completer: C,
    model: String,
}

impl DocGenerator<OpenAiCompleter> {
    /// Generator talking to the configured OpenAI-compatible endpoint.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(OpenAiCompleter::new(config), &config.model)
    }
}

impl<C: Completer> DocGenerator<C> {
    pub fn new(completer: C, model: &str) -> Self {
        Self {
            completer,
            model: model.to_string(),
        }
    }

    pub fn request_for(&self, function: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(function),
            max_tokens: MAX_TOKENS,
            stop: vec![STOP_SEQUENCE.to_string()],
            temperature: TEMPERATURE,
        }
    }

    /// Ask the service for a doc block for `function` (declaration + body).
    pub fn create_doc_block(&self, function: &str) -> Result<String> {
        let request = self.request_for(function);
        debug!(model = %request.model, prompt_len = request.prompt.len(), "requesting doc block");

        let response = self.completer.complete(&request).map_err(|e| match e {
            Error::Generation(_) => e,
            other => Error::Generation(other.to_string()),
        })?;

        if let Some(error) = response.error {
            return Err(Error::Generation(error_message(&error)));
        }

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| Error::Generation("response contained no choices".to_string()))
    }
}

/// OpenAI reports `{"error": {"message": ...}}`; other servers may send a bare string.
fn error_message(error: &serde_json::Value) -> String {
    match error {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => match map.get("message") {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => error.to_string(),
        },
        other => other.to_string(),
    }
}
