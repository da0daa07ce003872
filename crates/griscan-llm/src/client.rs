//! Blocking chat-completions client.
//!
//! OpenAI and Groq share one request/response format, so a single client
//! serves both; only the URL, model and key differ.

use std::time::Duration;

use griscan_core::{Error, Result};
use griscan_locate::CompletionEndpoint;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ResolvedProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct ChatCompletionClient {
    http: Client,
    target: ResolvedProvider,
}

impl ChatCompletionClient {
    pub fn new(target: ResolvedProvider) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, target })
    }

    pub fn target(&self) -> &ResolvedProvider {
        &self.target
    }
}

impl CompletionEndpoint for ChatCompletionClient {
    fn complete(&self, prompt: &str, max_tokens: u32, temperature: f64) -> Result<String> {
        let body = request_body(&self.target.model, prompt, max_tokens, temperature);
        debug!("Requesting completion from {} with model {}", self.target.url, self.target.model);

        let response = self
            .http
            .post(&self.target.url)
            .header("Authorization", format!("Bearer {}", self.target.api_key))
            .json(&body)
            .send()
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(Error::Http(format!("API error {}: {}", status, text)));
        }

        let value: Value = response
            .json()
            .map_err(|e| Error::Classifier(format!("invalid response body: {}", e)))?;
        parse_completion(&value)
    }
}

fn request_body(model: &str, prompt: &str, max_tokens: u32, temperature: f64) -> Value {
    json!({
        "model": model,
        "messages": [{"role": "user", "content": prompt}],
        "temperature": temperature,
        "max_tokens": max_tokens,
    })
}

/// Text of `choices[0].message.content`.
pub fn parse_completion(value: &Value) -> Result<String> {
    value["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Classifier("response has no message content".into()))
}
