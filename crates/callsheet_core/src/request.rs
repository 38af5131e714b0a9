//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// Sampling parameters for one generation call.
///
/// # Examples
///
/// ```
/// use callsheet_core::GenerationParams;
///
/// let params = GenerationParams::new(0.7, 4000);
/// assert_eq!(params.max_tokens, 4000);
/// assert!(params.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Model override; the driver's default model is used when absent
    pub model: Option<String>,
}

impl GenerationParams {
    /// Parameters with no model override.
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            model: None,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new(0.7, 4000)
    }
}

/// A single prompt sent to a generation provider.
///
/// # Examples
///
/// ```
/// use callsheet_core::{GenerateRequest, GenerationParams};
///
/// let request = GenerateRequest::builder()
///     .system_prompt("You are an acting coach.")
///     .prompt("Write a study guide.")
///     .params(GenerationParams::new(0.5, 2000))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Write a study guide.");
/// assert_eq!(request.params().max_tokens, 2000);
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
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Instructions framing the model's role
    system_prompt: String,
    /// The user prompt
    prompt: String,
    /// Sampling parameters
    #[builder(default)]
    params: GenerationParams,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Raw text returned by a generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text, possibly wrapping a JSON payload
    pub text: String,
}
