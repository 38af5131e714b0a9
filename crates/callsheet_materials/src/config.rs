//! Pipeline configuration.
//!
//! Configuration is layered, later sources overriding earlier ones:
//! - Bundled defaults (include_str! from callsheet.toml)
//! - `~/.config/callsheet/callsheet.toml`
//! - `./callsheet.toml`

use callsheet_core::{GenerationParams, GenerationPhase, ProviderSettings};
use callsheet_error::{CallsheetError, CallsheetResult, ConfigError};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../callsheet.toml");

/// Largest aggregation worker pool.
pub const MAX_AGGREGATION_WORKERS: usize = 4;

/// Limits and timeouts for one run.
///
/// # Examples
///
/// ```
/// use callsheet_materials::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .aggregation_workers(16usize)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.workers(), 4);
/// assert_eq!(*config.dialogue_limit(), 30);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[serde(default)]
#[builder(setter(into), default)]
pub struct PipelineConfig {
    /// Dialogue lines kept per character across all scenes
    dialogue_limit: usize,
    /// Dialogue lines scanned per scene
    scene_dialogue_limit: usize,
    /// Characters aggregated ahead of generation
    aggregation_workers: usize,
    /// Characters of scene text quoted per scene in prompts
    scene_excerpt_chars: usize,
    /// Upper bound on a single generation call
    call_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dialogue_limit: 30,
            scene_dialogue_limit: 40,
            aggregation_workers: 1,
            scene_excerpt_chars: 1500,
            call_timeout_secs: 180,
        }
    }
}

impl PipelineConfig {
    /// Creates a new pipeline config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Aggregation worker count clamped to `1..=4`.
    pub fn workers(&self) -> usize {
        self.aggregation_workers.clamp(1, MAX_AGGREGATION_WORKERS)
    }

    /// Generation call timeout.
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

/// Sampling parameters per phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfigs {
    /// Core phase parameters
    pub core: GenerationParams,
    /// Relationships phase parameters
    pub relationships: GenerationParams,
    /// Practice phase parameters
    pub practice: GenerationParams,
}

impl Default for PhaseConfigs {
    fn default() -> Self {
        Self {
            core: GenerationParams::new(0.7, 6000),
            relationships: GenerationParams::new(0.7, 4000),
            practice: GenerationParams::new(0.8, 5000),
        }
    }
}

impl PhaseConfigs {
    /// Parameters for a phase.
    pub fn params(&self, phase: GenerationPhase) -> &GenerationParams {
        match phase {
            GenerationPhase::Core => &self.core,
            GenerationPhase::Relationships => &self.relationships,
            GenerationPhase::Practice => &self.practice,
        }
    }
}

/// Top-level Callsheet configuration.
///
/// # Example
///
/// ```no_run
/// use callsheet_materials::CallsheetConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CallsheetConfig::load()?;
/// println!("Workers: {}", config.pipeline().workers());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct CallsheetConfig {
    /// Limits and timeouts
    #[serde(default)]
    pipeline: PipelineConfig,
    /// Per-phase sampling parameters
    #[serde(default)]
    phases: PhaseConfigs,
    /// Provider connection settings
    #[serde(default)]
    provider: ProviderSettings,
}

impl CallsheetConfig {
    /// Assemble a configuration from its parts.
    pub fn new(pipeline: PipelineConfig, phases: PhaseConfigs, provider: ProviderSettings) -> Self {
        Self {
            pipeline,
            phases,
            provider,
        }
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> CallsheetResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load bundled defaults with a single explicit override file on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CallsheetResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file fails to parse.
    #[instrument]
    pub fn load() -> CallsheetResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/callsheet/callsheet.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("callsheet").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> CallsheetResult<Self> {
        builder
            .build()
            .map_err(|e| {
                CallsheetError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CallsheetError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
