//! Building arc requests from a document store.

use callsheet_error::{CallsheetResult, ConfigError};
use callsheet_interface::ProductionRepository;
use callsheet_materials::{ArcMaterialsRequest, ArcMaterialsRequestBuilder};
use tracing::{debug, instrument};

/// Load everything an arc run needs for `story_id` from `repository`.
///
/// `episode_numbers` narrows the arc (empty means the arc's own episodes) and
/// `character` restricts the run to one character by id or name.
///
/// # Errors
///
/// Returns a storage error if the story bible cannot be read.
#[instrument(skip(repository, episode_numbers, character))]
pub async fn arc_request<R: ProductionRepository>(
    repository: &R,
    story_id: &str,
    arc_index: usize,
    episode_numbers: Vec<u32>,
    character: Option<String>,
) -> CallsheetResult<ArcMaterialsRequest> {
    let story_bible = repository.story_bible(story_id).await?;
    let episodes = repository.episodes(story_id).await?;
    let pre_production = repository.pre_production(story_id).await?;

    debug!(
        episodes = episodes.len(),
        pre_production = pre_production.len(),
        arcs = story_bible.arcs.len(),
        "Loaded production records"
    );

    let mut builder = ArcMaterialsRequestBuilder::default();
    builder
        .story_bible(story_bible)
        .episodes(episodes)
        .pre_production(pre_production)
        .arc_index(arc_index)
        .episode_numbers(episode_numbers);
    if let Some(character) = character {
        builder.character_filter(character);
    }

    Ok(builder
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid arc request: {}", e)))?)
}
