//! Blocking client for OpenAI-compatible `/completions` endpoints.

use super::{CompletionRequest, CompletionResponse, Completer, GeneratorConfig};
use crate::error::{Error, Result};
use tracing::debug;

pub struct OpenAiCompleter {
    agent: ureq::Agent,
    url: String,
    api_key: Option<String>,
}

impl OpenAiCompleter {
    pub fn new(config: &GeneratorConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            agent,
            url: completions_url(config.base_uri()),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
        }
    }
}

impl Completer for OpenAiCompleter {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let mut call = self.agent.post(&self.url);
        if let Some(ref key) = self.api_key {
            call = call.set("Authorization", &format!("Bearer {}", key));
        }

        match call.send_json(request) {
            Ok(response) => response
                .into_json::<CompletionResponse>()
                .map_err(|e| Error::Generation(format!("invalid response body: {}", e))),
            // 4xx/5xx still carry the service's {"error": ...} body
            Err(ureq::Error::Status(code, response)) => {
                debug!(status = code, url = %self.url, "completion request rejected");
                match response.into_json::<CompletionResponse>() {
                    Ok(body) if body.error.is_some() => Ok(body),
                    _ => Err(Error::Generation(format!("HTTP status {}", code))),
                }
            }
            Err(e) => Err(Error::Generation(e.to_string())),
        }
    }
}

fn completions_url(base_uri: &str) -> String {
    let base = base_uri.trim_end_matches('/');
    let base = if base.contains("://") {
        base.to_string()
    } else {
        format!("https://{}", base)
    };
    format!("{}/completions", base)
}
