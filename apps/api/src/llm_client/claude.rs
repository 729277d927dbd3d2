//! Anthropic Messages API wire format.

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::llm_client::MAX_OUTPUT_TOKENS;

pub const MODEL: &str = "claude-3-5-sonnet-20241022";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnthropicResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

/// The prompt travels as the only user message; no system field is sent.
pub fn build_request(client: &Client, api_url: &str, api_key: &str, prompt: &str) -> RequestBuilder {
    let body = AnthropicRequest {
        model: MODEL,
        max_tokens: MAX_OUTPUT_TOKENS,
        messages: vec![AnthropicMessage {
            role: "user",
            content: prompt,
        }],
    };

    client
        .post(api_url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("Content-Type", "application/json")
        .json(&body)
}

/// Text of the first text block in `content`.
pub(crate) fn extract_text(response: AnthropicResponse) -> Option<String> {
    response
        .content
        .into_iter()
        .find(|b| b.block_type == "text")
        .and_then(|b| b.text)
}
