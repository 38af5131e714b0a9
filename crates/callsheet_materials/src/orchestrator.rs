//! Arc-level orchestration of roster, aggregation and generation.

use crate::bundle::{ArcMaterialsBundle, CharacterMaterials};
use crate::config::CallsheetConfig;
use crate::phases::{CoreResult, PhaseOutcome, PhaseOutput, PracticeResult, RelationshipResult};
use crate::progress::ProgressReporter;
use crate::prompts::{PromptBuilder, system_prompt};
use crate::roster::resolve_roster;
use crate::runner::GenerationPhaseRunner;
use callsheet_core::{
    CharacterContext, CharacterIdentity, Episode, GenerationPhase, PreProductionRecord,
    ProgressEvent, StoryBible,
};
use callsheet_error::{CallsheetResult, MaterialsError, MaterialsErrorKind};
use callsheet_interface::GenerationDriver;
use callsheet_screenplay::CharacterContextAggregator;
use futures::StreamExt;
use futures::stream;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Inputs for one arc generation run.
///
/// # Examples
///
/// ```
/// use callsheet_core::StoryBible;
/// use callsheet_materials::ArcMaterialsRequest;
///
/// let request = ArcMaterialsRequest::builder()
///     .story_bible(StoryBible::default())
///     .arc_index(0usize)
///     .character_filter("Jace")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.character_filter().as_deref(), Some("Jace"));
/// ```
#[derive(Debug, Clone, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct ArcMaterialsRequest {
    /// Story bible holding the arc
    story_bible: StoryBible,
    /// Candidate episodes; narrowed to the arc's episode numbers
    #[builder(default)]
    episodes: Vec<Episode>,
    /// Candidate pre-production records; narrowed like `episodes`
    #[builder(default)]
    pre_production: Vec<PreProductionRecord>,
    /// Arc position in the story bible
    #[builder(default)]
    arc_index: usize,
    /// Episodes to cover; empty means the arc's own episode list
    #[builder(default)]
    episode_numbers: Vec<u32>,
    /// Restrict the run to one character, by id or name
    #[builder(default, setter(into, strip_option))]
    character_filter: Option<String>,
}

/// The arc and the records a run covers.
#[derive(Debug, Clone)]
struct ArcSelection {
    title: String,
    episode_numbers: Vec<u32>,
    episodes: Vec<Episode>,
    pre_production: Vec<PreProductionRecord>,
}

impl ArcMaterialsRequest {
    /// Creates a new request builder.
    pub fn builder() -> ArcMaterialsRequestBuilder {
        ArcMaterialsRequestBuilder::default()
    }

    /// Resolve the roster this request would generate for.
    ///
    /// # Errors
    ///
    /// Returns an input error when the arc index is out of range or the
    /// character filter matches nobody.
    pub fn resolve_roster(&self) -> CallsheetResult<Vec<CharacterIdentity>> {
        let selection = self.select()?;
        resolve_roster(
            &self.story_bible,
            &selection.episodes,
            &selection.pre_production,
            self.character_filter.as_deref(),
        )
    }

    fn select(&self) -> CallsheetResult<ArcSelection> {
        let arc = self.story_bible.arcs.get(self.arc_index).ok_or_else(|| {
            MaterialsError::new(MaterialsErrorKind::ArcNotFound {
                index: self.arc_index,
                available: self.story_bible.arcs.len(),
            })
        })?;

        let mut episode_numbers = if !self.episode_numbers.is_empty() {
            self.episode_numbers.clone()
        } else if !arc.episode_numbers.is_empty() {
            arc.episode_numbers.clone()
        } else {
            debug!(arc = %arc.title, "Arc lists no episodes; using every supplied episode");
            self.episodes.iter().map(|e| e.episode_number).collect()
        };
        episode_numbers.sort_unstable();
        episode_numbers.dedup();

        let episodes: Vec<Episode> = self
            .episodes
            .iter()
            .filter(|e| episode_numbers.contains(&e.episode_number))
            .cloned()
            .collect();
        let pre_production: Vec<PreProductionRecord> = self
            .pre_production
            .iter()
            .filter(|r| episode_numbers.contains(&r.episode_number))
            .cloned()
            .collect();

        if episodes.len() < episode_numbers.len() {
            warn!(
                requested = episode_numbers.len(),
                found = episodes.len(),
                "Some arc episodes are missing"
            );
        }

        Ok(ArcSelection {
            title: arc.title.clone(),
            episode_numbers,
            episodes,
            pre_production,
        })
    }
}

/// Read-only inputs shared with blocking aggregation tasks.
#[derive(Debug)]
struct AggregationInputs {
    aggregator: CharacterContextAggregator,
    story_bible: StoryBible,
    episodes: Vec<Episode>,
    pre_production: Vec<PreProductionRecord>,
}

impl AggregationInputs {
    fn aggregate(&self, identity: &CharacterIdentity) -> CallsheetResult<CharacterContext> {
        self.aggregator
            .aggregate(identity, &self.story_bible, &self.episodes, &self.pre_production)
    }
}

/// Generates actor materials for every character of an arc.
///
/// Characters are generated one after another and each character's phases
/// run in order: core, relationships (seeded with core), practice. Context
/// aggregation may run ahead on the blocking pool when more than one
/// aggregation worker is configured.
#[derive(Debug)]
pub struct ArcMaterialsOrchestrator<D> {
    runner: GenerationPhaseRunner<D>,
    config: CallsheetConfig,
    prompts: PromptBuilder,
    progress: Option<UnboundedSender<ProgressEvent>>,
    cancellation: CancellationToken,
}

impl<D: GenerationDriver> ArcMaterialsOrchestrator<D> {
    /// Orchestrator generating through `driver`.
    pub fn new(driver: D, config: CallsheetConfig) -> Self {
        let runner = GenerationPhaseRunner::new(driver, config.pipeline().call_timeout());
        let prompts = PromptBuilder::new(*config.pipeline().scene_excerpt_chars());
        Self {
            runner,
            config,
            prompts,
            progress: None,
            cancellation: CancellationToken::new(),
        }
    }

    /// Send progress events to `sender`.
    pub fn with_progress(mut self, sender: UnboundedSender<ProgressEvent>) -> Self {
        self.progress = Some(sender);
        self
    }

    /// Stop early when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &CallsheetConfig {
        &self.config
    }

    /// Generate materials for the requested arc.
    ///
    /// Characters whose context cannot be aggregated are skipped. On
    /// cancellation the characters completed so far are returned and no
    /// further progress is reported.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialsErrorKind::ArcNotFound`] or
    /// [`MaterialsErrorKind::CharacterNotFound`]. Generation failures never
    /// surface here.
    #[instrument(
        skip(self, request),
        fields(
            story = %request.story_bible.id,
            arc_index = request.arc_index,
            provider = self.runner.driver().provider_name(),
            model = self.runner.driver().model_name()
        )
    )]
    pub async fn generate_arc_materials(
        &self,
        request: &ArcMaterialsRequest,
    ) -> CallsheetResult<ArcMaterialsBundle> {
        let selection = request.select()?;
        let roster = resolve_roster(
            &request.story_bible,
            &selection.episodes,
            &selection.pre_production,
            request.character_filter.as_deref(),
        )?;
        let total = roster.len();
        let workers = self.config.pipeline().workers();

        info!(
            arc = %selection.title,
            episodes = selection.episode_numbers.len(),
            roster_size = total,
            workers,
            "Starting arc materials generation"
        );

        let pipeline = self.config.pipeline();
        let inputs = Arc::new(AggregationInputs {
            aggregator: CharacterContextAggregator::with_limits(
                *pipeline.dialogue_limit(),
                *pipeline.scene_dialogue_limit(),
            ),
            story_bible: request.story_bible.clone(),
            episodes: selection.episodes.clone(),
            pre_production: selection.pre_production.clone(),
        });

        let contexts = stream::iter(roster.iter().cloned())
            .map(|identity| {
                let inputs = Arc::clone(&inputs);
                async move {
                    let name = identity.name.clone();
                    tokio::task::spawn_blocking(move || inputs.aggregate(&identity))
                        .await
                        .unwrap_or_else(|e| {
                            Err(MaterialsError::new(MaterialsErrorKind::Aggregation {
                                character: name,
                                message: format!("aggregation task failed: {}", e),
                            })
                            .into())
                        })
                }
            })
            .buffered(workers);
        let mut contexts = std::pin::pin!(contexts);

        let mut reporter = ProgressReporter::new(self.progress.clone(), total);
        let mut characters = Vec::with_capacity(total);

        for (index, identity) in roster.iter().enumerate() {
            if self.is_cancelled(&mut reporter) {
                break;
            }
            reporter.character_started(&identity.name, index);

            let context = match contexts.next().await {
                Some(Ok(context)) => context,
                Some(Err(e)) => {
                    error!(character = %identity.name, error = %e, "Skipping character");
                    continue;
                }
                None => break,
            };

            match self.generate_character(&context, index, &mut reporter).await {
                Some(materials) => {
                    characters.push(materials);
                    reporter.character_completed(&identity.name, index);
                }
                None => break,
            }
        }

        if self.cancellation.is_cancelled() {
            info!(
                completed = characters.len(),
                roster_size = total,
                "Generation cancelled"
            );
        } else {
            reporter.complete(characters.len());
            info!(
                completed = characters.len(),
                roster_size = total,
                "Arc materials generation complete"
            );
        }

        Ok(ArcMaterialsBundle::new(
            request.arc_index,
            selection.title,
            request.story_bible.id.clone(),
            selection.episode_numbers,
            characters,
        ))
    }

    /// Run the three phases for one character. `None` means cancelled.
    #[instrument(
        skip(self, context, reporter),
        fields(
            character = %context.identity.name,
            scene_count = context.scenes.len(),
            dialogue_lines = context.dialogue_lines.len()
        )
    )]
    async fn generate_character(
        &self,
        context: &CharacterContext,
        index: usize,
        reporter: &mut ProgressReporter,
    ) -> Option<CharacterMaterials> {
        let name = context.identity.name.as_str();

        let core: PhaseOutcome<CoreResult> = self
            .phase(self.prompts.core(context), reporter)
            .await?;
        reporter.phase_completed(name, index, GenerationPhase::Core);

        let relationships: PhaseOutcome<RelationshipResult> = self
            .phase(self.prompts.relationships(context, &core.result), reporter)
            .await?;
        reporter.phase_completed(name, index, GenerationPhase::Relationships);

        let practice: PhaseOutcome<PracticeResult> = self
            .phase(self.prompts.practice(context), reporter)
            .await?;
        reporter.phase_completed(name, index, GenerationPhase::Practice);

        debug!(
            core = %core.source,
            relationships = %relationships.source,
            practice = %practice.source,
            "Character phases finished"
        );

        Some(CharacterMaterials {
            character_id: context.identity.id.clone(),
            character_name: context.identity.name.clone(),
            description: context.identity.description.clone(),
            episode_numbers: context.episode_numbers.clone(),
            scene_count: context.scenes.len(),
            core: core.into_result(),
            relationships: relationships.into_result(),
            practice: practice.into_result(),
        })
    }

    /// Run one phase. `None` when cancelled before, during or right after the call.
    async fn phase<T: PhaseOutput>(
        &self,
        prompt: String,
        reporter: &mut ProgressReporter,
    ) -> Option<PhaseOutcome<T>> {
        if self.is_cancelled(reporter) {
            return None;
        }
        let params = self.config.phases().params(T::PHASE).clone();
        let call = self
            .runner
            .run_phase::<T>(prompt, system_prompt(T::PHASE).to_string(), params);

        let outcome = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => None,
            outcome = call => Some(outcome),
        };
        if self.is_cancelled(reporter) {
            return None;
        }
        outcome
    }

    fn is_cancelled(&self, reporter: &mut ProgressReporter) -> bool {
        if self.cancellation.is_cancelled() {
            reporter.silence();
            true
        } else {
            false
        }
    }
}
