//! xAI Grok chat-completions wire format (OpenAI-compatible envelope, no
//! token cap or response format).

use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::llm_client::openai::{ChatCompletionResponse, ChatMessage};
use crate::llm_client::TEMPERATURE;

pub const MODEL: &str = "grok-beta";

#[derive(Debug, Serialize)]
struct GrokRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

pub fn build_request(
    client: &Client,
    api_url: &str,
    api_key: &str,
    system: &str,
    prompt: &str,
) -> RequestBuilder {
    let body = GrokRequest {
        model: MODEL,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: prompt,
            },
        ],
        temperature: TEMPERATURE,
    };

    client
        .post(api_url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .json(&body)
}

/// `choices[0].message.content`
pub(crate) fn extract_text(response: ChatCompletionResponse) -> Option<String> {
    crate::llm_client::openai::extract_text(response)
}
