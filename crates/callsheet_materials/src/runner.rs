//! Single-phase generation with parse, repair and fallback.

use crate::phases::{PhaseOutcome, PhaseOutput, ResultSource};
use crate::{extract_json, repair_json};
use callsheet_core::{GenerateRequest, GenerationParams};
use callsheet_interface::GenerationDriver;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Runs one generation phase and always returns a well-formed result.
///
/// Provider errors, timeouts, unparsable output and non-object JSON all
/// produce the phase's empty result. Nothing is propagated to the caller.
#[derive(Debug, Clone)]
pub struct GenerationPhaseRunner<D> {
    driver: D,
    call_timeout: Duration,
}

impl<D: GenerationDriver> GenerationPhaseRunner<D> {
    /// Runner bounding each provider call by `call_timeout`.
    pub fn new(driver: D, call_timeout: Duration) -> Self {
        Self {
            driver,
            call_timeout,
        }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Issue one request and parse the response as `T`.
    #[instrument(
        skip(self, prompt, system_prompt, params),
        fields(phase = %T::PHASE, provider = self.driver.provider_name(), prompt_len = prompt.len())
    )]
    pub async fn run_phase<T: PhaseOutput>(
        &self,
        prompt: String,
        system_prompt: String,
        params: GenerationParams,
    ) -> PhaseOutcome<T> {
        let request = match GenerateRequest::builder()
            .system_prompt(system_prompt)
            .prompt(prompt)
            .params(params)
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, reason = "request", "Using fallback result");
                return PhaseOutcome::fallback();
            }
        };

        let text = match tokio::time::timeout(self.call_timeout, self.driver.generate(&request)).await
        {
            Ok(Ok(response)) => response.text,
            Ok(Err(e)) => {
                warn!(error = %e, reason = "provider", "Using fallback result");
                return PhaseOutcome::fallback();
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.call_timeout.as_secs(),
                    reason = "timeout",
                    "Using fallback result"
                );
                return PhaseOutcome::fallback();
            }
        };

        parse_phase_output(&text)
    }
}

/// Parse a raw response into a phase result.
///
/// Strips code fences, parses strictly, repairs and re-parses on failure,
/// and falls back to the empty result when neither yields a JSON object.
///
/// # Examples
///
/// ```
/// use callsheet_materials::{parse_phase_output, RelationshipResult, ResultSource};
///
/// let outcome = parse_phase_output::<RelationshipResult>(
///     "```json\n{\"relationshipMap\": [{\"character\": \"Marisol\",}]}\n```",
/// );
/// assert_eq!(outcome.source, ResultSource::Repaired);
/// assert_eq!(outcome.result.relationship_map[0].character, "Marisol");
/// ```
pub fn parse_phase_output<T: PhaseOutput>(raw: &str) -> PhaseOutcome<T> {
    let candidate = match extract_json(raw) {
        Ok(candidate) => candidate,
        Err(e) => {
            warn!(phase = %T::PHASE, error = %e, reason = "no_json", "Using fallback result");
            return PhaseOutcome::fallback();
        }
    };

    let (value, source) = match serde_json::from_str::<Value>(&candidate) {
        Ok(value) => (value, ResultSource::Parsed),
        Err(strict_err) => {
            let repaired = repair_json(&candidate);
            match serde_json::from_str::<Value>(&repaired) {
                Ok(value) => {
                    debug!(phase = %T::PHASE, error = %strict_err, "Parsed after repair");
                    (value, ResultSource::Repaired)
                }
                Err(e) => {
                    warn!(
                        phase = %T::PHASE,
                        error = %e,
                        response_length = raw.len(),
                        reason = "unparsable",
                        "Using fallback result"
                    );
                    return PhaseOutcome::fallback();
                }
            }
        }
    };

    if !value.is_object() {
        warn!(phase = %T::PHASE, reason = "not_object", "Using fallback result");
        return PhaseOutcome::fallback();
    }

    match serde_json::from_value::<T>(value) {
        Ok(result) => PhaseOutcome { result, source },
        Err(e) => {
            warn!(phase = %T::PHASE, error = %e, reason = "shape", "Using fallback result");
            PhaseOutcome::fallback()
        }
    }
}
