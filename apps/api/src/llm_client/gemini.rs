//! Google Gemini `generateContent` wire format. The credential travels in the
//! `key` query parameter.

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::llm_client::{MAX_OUTPUT_TOKENS, TEMPERATURE};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

pub fn build_request(client: &Client, api_url: &str, api_key: &str, prompt: &str) -> RequestBuilder {
    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    };

    client
        .post(api_url)
        .query(&[("key", api_key)])
        .header("Content-Type", "application/json")
        .json(&body)
}

/// `candidates[0].content.parts[0].text`
pub(crate) fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::{body_json, header};
    use serde_json::json;

    const URL: &str =
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

    #[test]
    fn test_request_wire_format() {
        let request = build_request(&Client::new(), URL, "AIza-test", "PROMPT")
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("key=AIza-test"));
        assert_eq!(request.url().path(), "/v1beta/models/gemini-pro:generateContent");
        assert!(header(&request, "authorization").is_none());
        assert_eq!(
            body_json(&request),
            json!({
                "contents": [{"parts": [{"text": "PROMPT"}]}],
                "generationConfig": {"temperature": 0.7, "maxOutputTokens": 4000}
            })
        );
    }

    #[test]
    fn test_extracts_first_candidate_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"questions\":[]}"}, {"text": "x"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).as_deref(), Some("{\"questions\":[]}"));
    }

    #[test]
    fn test_blocked_prompt_without_candidates_yields_none() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert!(extract_text(response).is_none());
    }
}
