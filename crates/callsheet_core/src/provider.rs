//! Connection settings for a generation provider.

use serde::{Deserialize, Serialize};

/// Settings for an OpenAI-compatible chat completions endpoint.
///
/// # Examples
///
/// ```
/// use callsheet_core::ProviderSettings;
///
/// let settings = ProviderSettings::builder()
///     .base_url("http://localhost:11434/v1")
///     .model("llama3.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.model(), "llama3.1");
/// assert_eq!(settings.api_key_env(), "OPENAI_API_KEY");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[serde(default)]
#[builder(setter(into), default)]
pub struct ProviderSettings {
    /// API base URL, without the `/chat/completions` suffix
    base_url: String,
    /// Default model identifier
    model: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// Maximum retries on transient failures
    max_retries: usize,
    /// Initial retry backoff in milliseconds
    initial_backoff_ms: u64,
    /// Per-request HTTP timeout in seconds
    request_timeout_secs: u64,
}

impl ProviderSettings {
    /// Creates a new settings builder.
    pub fn builder() -> ProviderSettingsBuilder {
        ProviderSettingsBuilder::default()
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_retries: 3,
            initial_backoff_ms: 2000,
            request_timeout_secs: 120,
        }
    }
}
