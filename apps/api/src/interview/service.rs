//! AiService: resolves an alias to a configured vendor adapter and runs the
//! generation and evaluation flows against it.

use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::ProviderCredentials;
use crate::interview::models::{
    non_blank, EvaluateInterviewInput, GenerateQuestionsInput, GeneratedQuestion,
    InterviewEvaluation, QuestionAnswerPair, SessionContext, StoredQuestion,
};
use crate::interview::parser::{parse_evaluation, parse_questions, validate_questions};
use crate::interview::reconcile::{degraded_evaluation, reconcile};
use crate::interview::AiError;
use crate::llm_client::{InterviewProvider, ProviderAdapter};
use crate::prompts::{build_evaluation_prompt, Locale};
use crate::providers::{normalize_alias, BaseProvider, DirectorySnapshot, ProviderDirectory};

#[derive(Clone)]
pub struct AiService {
    client: Client,
    directory: Arc<ProviderDirectory>,
    credentials: ProviderCredentials,
    default_provider: String,
}

impl AiService {
    pub fn new(
        client: Client,
        directory: Arc<ProviderDirectory>,
        credentials: ProviderCredentials,
        default_provider: String,
    ) -> Self {
        Self {
            client,
            directory,
            credentials,
            default_provider,
        }
    }

    /// Resolves `alias` (or the configured default) to a ready adapter.
    ///
    /// Base provider: directory entry, else the alias read as a vendor name.
    /// Endpoint: directory URL, else `<BASE>_API_URL`. Credential: `<BASE>_API_KEY`.
    /// Directory fields all come from one snapshot, so a concurrent reload
    /// cannot mix an old base provider with a new endpoint.
    pub fn create_provider(&self, alias: Option<&str>) -> Result<ProviderAdapter, AiError> {
        let alias = normalize_alias(non_blank(alias).unwrap_or(self.default_provider.as_str()));
        let snapshot = self.directory.snapshot();
        self.adapter_for(&snapshot, &alias)
    }

    fn adapter_for(
        &self,
        snapshot: &DirectorySnapshot,
        alias: &str,
    ) -> Result<ProviderAdapter, AiError> {
        let base = snapshot
            .resolve_base_provider(alias)
            .or_else(|| BaseProvider::from_name(alias))
            .ok_or_else(|| AiError::Configuration(format!("unknown provider alias '{alias}'")))?;

        let api_url = snapshot
            .resolve_api_url(alias)
            .or_else(|| self.credentials.api_url(base).map(str::to_string))
            .ok_or_else(|| {
                AiError::Configuration(format!(
                    "no endpoint for '{alias}' (set {}_API_URL)",
                    base.env_prefix()
                ))
            })?;

        let api_key = self.credentials.api_key(base).ok_or_else(|| {
            AiError::Configuration(format!(
                "no credential for '{alias}' (set {}_API_KEY)",
                base.env_prefix()
            ))
        })?;

        let adapter = ProviderAdapter::new(base, self.client.clone(), api_key.to_string(), api_url);
        info!(
            "Using AI provider '{alias}' ({}) at {}",
            adapter.provider(),
            adapter.api_url()
        );
        Ok(adapter)
    }

    pub async fn generate_questions(
        &self,
        input: &GenerateQuestionsInput,
    ) -> Result<Vec<GeneratedQuestion>, AiError> {
        let provider = self.create_provider(input.provider_alias.as_deref())?;
        generate_with(&provider, input).await
    }

    /// Builds the evaluation prompt from the stored questions and reconciles
    /// the reply against them.
    pub async fn evaluate_session(
        &self,
        locale: Locale,
        session: &SessionContext,
        questions: &[StoredQuestion],
        provider_alias: Option<&str>,
    ) -> Result<InterviewEvaluation, AiError> {
        let provider = self.create_provider(provider_alias)?;

        let pairs: Vec<QuestionAnswerPair> = questions.iter().map(QuestionAnswerPair::from).collect();
        let input = EvaluateInterviewInput {
            prompt: build_evaluation_prompt(locale, &pairs, session),
            locale: Some(locale.code().to_string()),
            provider_alias: provider_alias.map(str::to_string),
        };

        evaluate_with(&provider, &input, questions).await
    }
}

/// Generation against any provider: call, parse, reject empty results.
pub async fn generate_with(
    provider: &dyn InterviewProvider,
    input: &GenerateQuestionsInput,
) -> Result<Vec<GeneratedQuestion>, AiError> {
    let raw = provider.generate(input).await?;
    let questions = validate_questions(parse_questions(&raw))?;
    info!("Generated {} interview questions", questions.len());
    Ok(questions)
}

/// Evaluation against any provider. A reply that cannot be decoded degrades
/// to the zero-score evaluation instead of failing.
pub async fn evaluate_with(
    provider: &dyn InterviewProvider,
    input: &EvaluateInterviewInput,
    questions: &[StoredQuestion],
) -> Result<InterviewEvaluation, AiError> {
    let raw = provider.evaluate(input).await?;

    Ok(match parse_evaluation(&raw) {
        Some(payload) => reconcile(questions, &payload),
        None => {
            warn!(
                "Evaluation reply could not be parsed; returning degraded result for {} questions",
                questions.len()
            );
            degraded_evaluation(questions)
        }
    })
}
