pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::providers::handlers as providers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Provider directory
        .route("/api/v1/ai-providers", get(providers::handle_list_providers))
        .route(
            "/api/v1/ai-providers/reload",
            post(providers::handle_reload_providers),
        )
        .route(
            "/api/v1/ai-providers/:alias",
            get(providers::handle_get_provider),
        )
        // Interview AI
        .route(
            "/api/v1/questions/generate",
            post(interview::handle_generate_questions),
        )
        .route(
            "/api/v1/interview-summary",
            post(interview::handle_interview_summary),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use anyhow::Result;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use reqwest::Client;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ProviderCredentials;
    use crate::errors::OVERLOADED_MESSAGE;
    use crate::interview::AiService;
    use crate::providers::{
        BaseProvider, ProviderDirectory, ProviderMapping, ProviderStore,
    };

    struct StaticStore(Vec<ProviderMapping>);

    #[async_trait]
    impl ProviderStore for StaticStore {
        async fn fetch_mappings(&self) -> Result<Vec<ProviderMapping>> {
            Ok(self.0.clone())
        }
    }

    struct DownStore;

    #[async_trait]
    impl ProviderStore for DownStore {
        async fn fetch_mappings(&self) -> Result<Vec<ProviderMapping>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    fn app_with_store(store: Arc<dyn ProviderStore>) -> Router {
        let directory = Arc::new(ProviderDirectory::fallback());
        let ai = AiService::new(
            Client::new(),
            Arc::clone(&directory),
            ProviderCredentials::default(),
            "openai".to_string(),
        );
        build_router(AppState {
            directory,
            provider_store: store,
            ai,
        })
    }

    fn app() -> Router {
        app_with_store(Arc::new(DownStore))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "interview-api");
    }

    #[tokio::test]
    async fn test_list_providers_serves_fallback_by_priority() {
        let (status, body) = send(app(), "GET", "/api/v1/ai-providers", None).await;
        assert_eq!(status, StatusCode::OK);

        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 9);
        assert_eq!(list[0]["alias"], "openai");
        assert_eq!(list[0]["baseProvider"], "openai");
        let priorities: Vec<i64> = list.iter().map(|m| m["priority"].as_i64().unwrap()).collect();
        assert!(priorities.windows(2).all(|w| w[0] > w[1]));
    }

    #[tokio::test]
    async fn test_get_provider_by_alias() {
        let (status, body) = send(app(), "GET", "/api/v1/ai-providers/Anthropic", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["baseProvider"], "claude");
        assert_eq!(body["displayName"], "Anthropic Claude");

        let (status, body) = send(app(), "GET", "/api/v1/ai-providers/mistral", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_directory() {
        let app = app();
        let (status, body) = send(app.clone(), "POST", "/api/v1/ai-providers/reload", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

        let (_, list) = send(app, "GET", "/api/v1/ai-providers", None).await;
        assert_eq!(list.as_array().unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_reload_swaps_in_store_rows() {
        let store = StaticStore(vec![ProviderMapping {
            alias: "gpt-4o".to_string(),
            base_provider: BaseProvider::OpenAi,
            display_name: "GPT-4o".to_string(),
            api_url: None,
            is_active: true,
            priority: 98,
        }]);
        let app = app_with_store(Arc::new(store));

        let (status, body) = send(app.clone(), "POST", "/api/v1/ai-providers/reload", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "store");
        assert_eq!(body["aliasCount"], 1);

        let (_, list) = send(app, "GET", "/api/v1/ai-providers", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["alias"], "gpt-4o");
    }

    #[tokio::test]
    async fn test_generate_without_credentials_is_overloaded() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/questions/generate",
            Some(json!({"level": "JUNIOR", "industry": "IT", "aiProvider": "claude"})),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["message"], OVERLOADED_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_validation_error() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/questions/generate",
            Some(json!({"level": "JUNIOR", "industry": "IT", "numQuestions": 0})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_summary_requires_questions() {
        let (status, _) = send(
            app(),
            "POST",
            "/api/v1/interview-summary",
            Some(json!({
                "session": {"level": "JUNIOR", "industry": "IT"},
                "questions": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary_with_unknown_provider_is_overloaded() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/interview-summary",
            Some(json!({
                "session": {"level": "JUNIOR", "industry": "IT"},
                "questions": [{"id": "q1", "questionText": "Q", "difficulty": "EASY"}],
                "aiProvider": "mistral"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["message"], OVERLOADED_MESSAGE);
    }
}
