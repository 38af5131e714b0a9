//! Test utilities for end-to-end pipeline tests.

pub mod store;

use async_trait::async_trait;
use callsheet::{CallsheetResult, GenerateRequest, GenerateResponse, GenerationDriver};
use std::sync::{Arc, Mutex};

/// Driver answering every phase with a fixed JSON object and counting calls.
#[derive(Debug, Clone, Default)]
pub struct CannedDriver {
    call_count: Arc<Mutex<usize>>,
}

impl CannedDriver {
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl GenerationDriver for CannedDriver {
    async fn generate(&self, request: &GenerateRequest) -> CallsheetResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        let text = if request.prompt().contains("\"relationshipMap\"") {
            "{\"relationshipMap\": [{\"character\": \"Marisol Vega\", \"relationship\": \"ex\"}]}"
        } else if request.prompt().contains("\"prepChecklist\"") {
            "{\"prepChecklist\": [\"Learn the knots\"]}"
        } else {
            "```json\n{\"studyGuide\": {\"overview\": \"Guarded\"}}\n```"
        };
        Ok(GenerateResponse {
            text: text.to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-model"
    }
}
