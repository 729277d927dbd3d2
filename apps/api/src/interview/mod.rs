// Interview AI pipeline: prompt → vendor call → parse → validate/reconcile.
// Handlers stay thin; everything that talks to a vendor goes through AiService.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod reconcile;
pub mod service;

use thiserror::Error;

use crate::llm_client::ProviderError;

pub use service::AiService;

/// Failures of the AI path. All of them reach the caller as the same
/// "overloaded" response; the variant is only logged.
#[derive(Debug, Error)]
pub enum AiError {
    /// Unknown alias, or no credential/endpoint for the resolved vendor.
    #[error("AI provider configuration error: {0}")]
    Configuration(String),

    #[error("AI provider call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("AI provider returned no usable questions")]
    EmptyGeneration,
}
