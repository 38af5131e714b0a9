//! Scripted generation driver for testing.

use async_trait::async_trait;
use callsheet_core::{GenerateRequest, GenerateResponse, GenerationParams, GenerationPhase};
use callsheet_error::{CallsheetResult, ProviderError, ProviderErrorKind};
use callsheet_interface::GenerationDriver;
use callsheet_materials::system_prompt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio_util::sync::CancellationToken;

/// One recorded call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub character: String,
    pub phase: Option<GenerationPhase>,
    pub prompt: String,
    pub params: GenerationParams,
}

/// Mock driver answering by phase and character.
///
/// The phase is recognised from the system prompt and the character from the
/// prompt's `Character:` line. Unless scripted otherwise each phase answers
/// with a small valid payload naming the character.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    responses: HashMap<GenerationPhase, String>,
    failures: Vec<(String, GenerationPhase)>,
    delay: Option<Duration>,
    cancel_after: Option<(usize, CancellationToken)>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockDriver {
    /// Driver answering every phase with its default payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `phase` with `text` verbatim.
    pub fn with_response(mut self, phase: GenerationPhase, text: impl Into<String>) -> Self {
        self.responses.insert(phase, text.into());
        self
    }

    /// Fail with a provider error for `character` on `phase`.
    pub fn fail_on(mut self, character: impl Into<String>, phase: GenerationPhase) -> Self {
        self.failures.push((character.into(), phase));
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Cancel `token` when the `calls`-th call arrives.
    pub fn cancel_after(mut self, calls: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((calls, token));
        self
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn default_response(phase: GenerationPhase, character: &str) -> String {
        match phase {
            GenerationPhase::Core => format!(
                "```json\n{{\"studyGuide\": {{\"overview\": \"{character} study\", \"objectives\": [\"survive the season\"]}}, \
                 \"sceneBreakdowns\": [{{\"episodeNumber\": 1, \"sceneNumber\": 1, \"objective\": \"hold ground\"}}], \
                 \"emotionalBeats\": [{{\"moment\": \"docks\", \"emotion\": \"resolve\", \"intensity\": 6}}], \
                 \"voiceNotes\": {{\"tone\": \"dry\"}}, \"physicalNotes\": {{\"posture\": \"squared\"}}}}\n```"
            ),
            GenerationPhase::Relationships => format!(
                "{{\"relationshipMap\": [{{\"character\": \"Crew of {character}\", \"relationship\": \"allies\"}}]}}"
            ),
            GenerationPhase::Practice => format!(
                "{{\"monologues\": [{{\"title\": \"{character} at the pier\", \"text\": \"I stayed.\"}}], \
                 \"keyScenes\": [{{\"episodeNumber\": 1, \"sceneNumber\": 1, \"title\": \"Late\"}}], \
                 \"prepChecklist\": [\"Run lines\"]}}"
            ),
        }
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, request: &GenerateRequest) -> CallsheetResult<GenerateResponse> {
        let phase = GenerationPhase::iter().find(|p| system_prompt(*p) == request.system_prompt());
        let character = request
            .prompt()
            .lines()
            .find_map(|line| line.strip_prefix("Character: "))
            .unwrap_or_default()
            .to_string();

        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(MockCall {
                character: character.clone(),
                phase,
                prompt: request.prompt().clone(),
                params: request.params().clone(),
            });
            calls.len()
        };

        if let Some((after, token)) = &self.cancel_after {
            if count == *after {
                token.cancel();
            }
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let Some(phase) = phase else {
            return Ok(GenerateResponse {
                text: "{}".to_string(),
            });
        };

        if self
            .failures
            .iter()
            .any(|(name, failing)| *failing == phase && *name == character)
        {
            return Err(ProviderError::new(ProviderErrorKind::Http {
                status_code: 500,
                message: "scripted failure".to_string(),
            })
            .into());
        }

        let text = self
            .responses
            .get(&phase)
            .cloned()
            .unwrap_or_else(|| Self::default_response(phase, &character));
        Ok(GenerateResponse { text })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
