//! OpenAI-compatible driver using reqwest.

use super::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
use async_trait::async_trait;
use callsheet_core::{GenerateRequest, GenerateResponse, ProviderSettings};
use callsheet_error::{CallsheetResult, ProviderError, ProviderErrorKind, RetryableError};
use callsheet_interface::GenerationDriver;
use reqwest::Client;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, instrument, warn};

/// Upper bound on a single backoff delay.
const MAX_RETRY_DELAY_SECS: u64 = 60;

/// Driver for any endpoint speaking the chat completions protocol.
///
/// Transient failures (408, 429, 5xx, dropped connections) are retried with
/// exponential backoff and jitter; other failures return immediately.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: Option<String>,
    settings: ProviderSettings,
}

impl OpenAICompatibleClient {
    /// Creates a client, reading the API key from `settings.api_key_env`.
    ///
    /// An empty `api_key_env` means the endpoint needs no key.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderErrorKind::MissingApiKey`] if the variable is unset.
    #[instrument(skip_all, fields(base_url = %settings.base_url(), model = %settings.model()))]
    pub fn new(settings: ProviderSettings) -> CallsheetResult<Self> {
        let api_key = if settings.api_key_env().is_empty() {
            None
        } else {
            let key = std::env::var(settings.api_key_env()).map_err(|_| {
                ProviderError::new(ProviderErrorKind::MissingApiKey(
                    settings.api_key_env().clone(),
                ))
            })?;
            Some(key)
        };

        Self::with_api_key(settings, api_key)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be initialized.
    #[instrument(skip(settings, api_key), fields(model = %settings.model()))]
    pub fn with_api_key(
        settings: ProviderSettings,
        api_key: Option<String>,
    ) -> CallsheetResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*settings.request_timeout_secs()))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::ClientCreation(e.to_string())))?;

        debug!(base_url = %settings.base_url(), "Created OpenAI-compatible client");

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    /// Settings this client was built with.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url().trim_end_matches('/')
        )
    }

    /// Translate a generation request into a chat completions body.
    ///
    /// A model set on the request overrides the client's default model.
    pub(crate) fn chat_request(&self, req: &GenerateRequest) -> Result<ChatRequest, ProviderError> {
        let build = |e: String| ProviderError::new(ProviderErrorKind::RequestBuild(e));

        let mut messages = Vec::with_capacity(2);
        if !req.system_prompt().is_empty() {
            messages.push(
                ChatMessage::builder()
                    .role(ChatRole::System)
                    .content(req.system_prompt().clone())
                    .build()
                    .map_err(|e| build(e.to_string()))?,
            );
        }
        messages.push(
            ChatMessage::builder()
                .role(ChatRole::User)
                .content(req.prompt().clone())
                .build()
                .map_err(|e| build(e.to_string()))?,
        );

        let model = req
            .params()
            .model
            .clone()
            .unwrap_or_else(|| self.settings.model().clone());

        ChatRequest::builder()
            .model(model)
            .messages(messages)
            .temperature(req.params().temperature)
            .max_tokens(req.params().max_tokens)
            .build()
            .map_err(|e| build(e.to_string()))
    }

    /// Extract the first choice's text from a response body.
    pub(crate) fn parse_response(body: &str) -> Result<String, ProviderError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::new(ProviderErrorKind::InvalidResponse(e.to_string())))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
    }

    async fn send_once(&self, body: &ChatRequest) -> Result<String, ProviderError> {
        let mut request = self.client.post(self.endpoint()).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::new(ProviderErrorKind::Timeout(
                    *self.settings.request_timeout_secs(),
                ))
            } else {
                ProviderError::new(ProviderErrorKind::Request(e.to_string()))
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorKind::Request(e.to_string())))?;

        if !status.is_success() {
            return Err(ProviderError::new(ProviderErrorKind::Http {
                status_code: status.as_u16(),
                message: text.trim().to_string(),
            }));
        }

        debug!(response_len = text.len(), "Received chat completion");
        Self::parse_response(&text)
    }
}

#[async_trait]
impl GenerationDriver for OpenAICompatibleClient {
    #[instrument(skip(self, req), fields(model = %self.settings.model(), prompt_len = req.prompt().len()))]
    async fn generate(&self, req: &GenerateRequest) -> CallsheetResult<GenerateResponse> {
        let body = self.chat_request(req)?;

        let retry_strategy = ExponentialBackoff::from_millis(*self.settings.initial_backoff_ms())
            .factor(2)
            .max_delay(Duration::from_secs(MAX_RETRY_DELAY_SECS))
            .map(jitter)
            .take(*self.settings.max_retries());

        let this = self;
        let body = &body;
        let text = Retry::spawn(retry_strategy, move || async move {
            match this.send_once(body).await {
                Ok(text) => Ok(text),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Provider call failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent provider error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await?;

        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.settings.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callsheet_core::GenerationParams;

    fn client() -> OpenAICompatibleClient {
        let settings = ProviderSettings::builder()
            .base_url("http://localhost:8080/v1/")
            .model("default-model")
            .api_key_env("")
            .build()
            .unwrap();
        OpenAICompatibleClient::with_api_key(settings, None).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(client().endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_request_model_overrides_default() {
        let mut params = GenerationParams::new(0.3, 1200);
        params.model = Some("override-model".to_string());
        let req = GenerateRequest::builder()
            .system_prompt("sys")
            .prompt("user")
            .params(params)
            .build()
            .unwrap();

        let body = client().chat_request(&req).unwrap();
        assert_eq!(body.model(), "override-model");
        assert_eq!(body.messages().len(), 2);
        assert_eq!(*body.messages()[0].role(), ChatRole::System);
        assert_eq!(*body.max_tokens(), 1200);
    }

    #[test]
    fn test_empty_system_prompt_is_omitted() {
        let req = GenerateRequest::builder()
            .system_prompt("")
            .prompt("user")
            .build()
            .unwrap();

        let body = client().chat_request(&req).unwrap();
        assert_eq!(body.model(), "default-model");
        assert_eq!(body.messages().len(), 1);
        assert_eq!(*body.messages()[0].role(), ChatRole::User);
    }

    #[test]
    fn test_parse_response_reads_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"{\"a\":1}"}}]}"#;
        assert_eq!(
            OpenAICompatibleClient::parse_response(body).unwrap(),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_parse_response_empty_choices() {
        let err = OpenAICompatibleClient::parse_response(r#"{"choices":[]}"#).unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::EmptyResponse);
    }

    #[test]
    fn test_parse_response_invalid_json() {
        let err = OpenAICompatibleClient::parse_response("<html>").unwrap_err();
        assert!(matches!(err.kind, ProviderErrorKind::InvalidResponse(_)));
    }
}
