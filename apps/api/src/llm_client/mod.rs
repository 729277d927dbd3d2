/// LLM Client: the single point of entry for all vendor API calls.
///
/// ARCHITECTURAL RULE: No other module may call a vendor API directly.
/// Each vendor's wire format lives in its own submodule; `ProviderAdapter`
/// dispatches on `BaseProvider` and exposes the same two operations for all.
///
/// One call per operation, bounded by the client timeout. No retries here.
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::interview::models::{EvaluateInterviewInput, GenerateQuestionsInput};
use crate::prompts::build_question_prompt;
use crate::providers::BaseProvider;

pub mod claude;
pub mod gemini;
pub mod grok;
pub mod openai;
pub mod prompts;

use prompts::{EVALUATION_SYSTEM, GENERATION_SYSTEM};

/// Shared limits for every vendor request body.
pub const MAX_OUTPUT_TOKENS: u32 = 4000;
pub const TEMPERATURE: f32 = 0.7;

/// How much of an error body is kept for logs.
const ERROR_BODY_LOG_LIMIT: usize = 500;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no text content")]
    EmptyContent,
}

/// Capability shared by every vendor: raw text in, raw text out.
/// Parsing is the caller's job.
#[async_trait]
pub trait InterviewProvider: Send + Sync {
    async fn generate(&self, input: &GenerateQuestionsInput) -> Result<String, ProviderError>;

    async fn evaluate(&self, input: &EvaluateInterviewInput) -> Result<String, ProviderError>;
}

/// Builds the HTTP client shared by all adapters.
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// A vendor endpoint plus credential, bound to one base provider.
#[derive(Clone)]
pub struct ProviderAdapter {
    provider: BaseProvider,
    client: Client,
    api_key: String,
    api_url: String,
}

impl ProviderAdapter {
    pub fn new(provider: BaseProvider, client: Client, api_key: String, api_url: String) -> Self {
        Self {
            provider,
            client,
            api_key,
            api_url,
        }
    }

    pub fn provider(&self) -> BaseProvider {
        self.provider
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let started = Instant::now();
        let (client, url, key) = (&self.client, self.api_url.as_str(), self.api_key.as_str());

        let result = match self.provider {
            BaseProvider::OpenAi => {
                let request = openai::build_request(client, url, key, system, prompt);
                openai::extract_text(send_json(request).await?)
            }
            BaseProvider::Claude => {
                let request = claude::build_request(client, url, key, prompt);
                claude::extract_text(send_json(request).await?)
            }
            BaseProvider::Gemini => {
                let request = gemini::build_request(client, url, key, prompt);
                gemini::extract_text(send_json(request).await?)
            }
            BaseProvider::Grok => {
                let request = grok::build_request(client, url, key, system, prompt);
                grok::extract_text(send_json(request).await?)
            }
        };

        debug!(
            "{} call finished in {}ms",
            self.provider,
            started.elapsed().as_millis()
        );

        result
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyContent)
    }
}

#[async_trait]
impl InterviewProvider for ProviderAdapter {
    async fn generate(&self, input: &GenerateQuestionsInput) -> Result<String, ProviderError> {
        let prompt = build_question_prompt(input);
        self.complete(GENERATION_SYSTEM, &prompt).await
    }

    async fn evaluate(&self, input: &EvaluateInterviewInput) -> Result<String, ProviderError> {
        debug!(
            "Evaluation via {} (alias: {:?}, locale: {:?})",
            self.provider, input.provider_alias, input.locale
        );
        self.complete(EVALUATION_SYSTEM, &input.prompt).await
    }
}

/// Sends a prepared request and decodes a 2xx JSON body. Non-2xx responses
/// become `ProviderError::Api`.
async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ProviderError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message: String = body.chars().take(ERROR_BODY_LOG_LIMIT).collect();
        warn!("Provider API returned {status}: {message}");
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<T>().await?)
}
