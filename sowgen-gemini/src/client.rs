use std::sync::LazyLock;

use reqwest::Client;
use url::Url;

use crate::error::{GeminiError, Result};
use crate::retry::{RetryConfig, execute_with_retry};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

static DEFAULT_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("unreachable error: failed to parse default base URL")
});

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Thin client for the `generateContent` endpoint. One instance per API key;
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: Url,
    retry: RetryConfig,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.clone(),
            retry: RetryConfig::default(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn endpoint(&self) -> Result<Url> {
        let mut url = self.base_url.join(&format!("models/{}:generateContent", self.model))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// One attempt, no retry. Non-2xx statuses carry the upstream body so
    /// the caller can present it.
    async fn perform(&self, request: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let url = self.endpoint()?;
        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(GeminiError::Status { status: status.as_u16(), body })
        }
    }

    /// Issues the request under the retry policy.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        tracing::debug!(model = %self.model, "issuing generateContent request");
        execute_with_retry(&self.retry, || self.perform(request)).await
    }

    /// Generates prose for `prompt` and extracts the first candidate text.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self.generate(&request).await?;
        response.text().map(str::to_string).ok_or(GeminiError::EmptyResponse)
    }

    /// Generates a JSON response body (`responseMimeType: application/json`)
    /// and returns it as the raw candidate text for the caller to parse.
    pub async fn generate_json(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt).with_json_response();
        let response = self.generate(&request).await?;
        response.text().map(str::to_string).ok_or(GeminiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn candidate_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
        })
    }

    fn instant_retries() -> RetryConfig {
        RetryConfig::default()
            .with_base_delay(Duration::ZERO)
            .with_max_jitter(Duration::ZERO)
    }

    async fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new("test-key")
            .with_base_url(Url::parse(&server.uri()).unwrap())
            .with_retry_config(instant_retries())
    }

    #[tokio::test]
    async fn generate_text_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{DEFAULT_MODEL}:generateContent")))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("1 TABLE OF CONTENTS")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).await.generate_text("prompt").await.unwrap();
        assert_eq!(text, "1 TABLE OF CONTENTS");
    }

    #[tokio::test]
    async fn rate_limited_call_is_retried_then_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("recovered")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).await.generate_text("prompt").await.unwrap();
        assert_eq!(text, "recovered");
    }

    #[tokio::test]
    async fn non_retryable_status_surfaces_upstream_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).await.generate_text("prompt").await.unwrap_err();
        match err {
            GeminiError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn persistent_overload_exhausts_exactly_five_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(5)
            .mount(&server)
            .await;

        let err = client_for(&server).await.generate_text("prompt").await.unwrap_err();
        assert!(matches!(err, GeminiError::RetriesExhausted { attempts: 5, .. }));
    }

    #[tokio::test]
    async fn generate_json_requests_json_mime_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(wiremock::matchers::body_partial_json(serde_json::json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{\"ui\": \"Web App\"}")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).await.generate_json("prompt").await.unwrap();
        assert_eq!(text, "{\"ui\": \"Web App\"}");
    }

    #[tokio::test]
    async fn empty_candidate_list_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).await.generate_text("prompt").await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }
}
