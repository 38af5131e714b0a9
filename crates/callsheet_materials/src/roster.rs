//! Arc roster resolution.

use callsheet_core::{CharacterIdentity, Episode, PreProductionRecord, StoryBible};
use callsheet_error::{CallsheetResult, MaterialsError, MaterialsErrorKind};
use callsheet_screenplay::{NameMatcher, ScreenplayTextScanner};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Resolve the characters to generate materials for.
///
/// The roster is the union of:
/// 1. story bible main characters who appear in the arc, by breakdown cast,
///    episode cast list or speaker cue in scene text;
/// 2. episode cast entries not already covered, excluding minor characters.
///
/// With a `filter`, the roster narrows to the single entry whose id equals
/// the filter, else whose name matches it exactly, else the first fuzzy match.
///
/// # Errors
///
/// Returns [`MaterialsErrorKind::CharacterNotFound`] when a filter matches
/// no roster entry.
#[instrument(skip(story_bible, episodes, pre_production), fields(episodes = episodes.len()))]
pub fn resolve_roster(
    story_bible: &StoryBible,
    episodes: &[Episode],
    pre_production: &[PreProductionRecord],
    filter: Option<&str>,
) -> CallsheetResult<Vec<CharacterIdentity>> {
    let appearances = appearance_names(episodes, pre_production);
    let mut roster: Vec<CharacterIdentity> = Vec::new();

    for character in &story_bible.main_characters {
        if NameMatcher::contains(&appearances, &character.name) {
            roster.push(CharacterIdentity::new(
                character.id.clone(),
                character.name.clone(),
                character.description.clone(),
            ));
        } else {
            debug!(character = %character.name, "Story bible character absent from arc");
        }
    }

    for entry in episodes.iter().flat_map(|e| e.cast.iter()) {
        if entry.importance.is_minor() || entry.name.trim().is_empty() {
            continue;
        }
        if roster.iter().any(|c| NameMatcher::matches(&c.name, &entry.name)) {
            continue;
        }
        let id = entry
            .character_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("cast-{}", slug(&entry.name)));
        roster.push(CharacterIdentity::new(
            id,
            entry.name.trim(),
            entry.description.clone(),
        ));
    }

    debug!(roster_size = roster.len(), "Resolved arc roster");

    match filter {
        None => Ok(roster),
        Some(wanted) => select(roster, wanted).map(|c| vec![c]).ok_or_else(|| {
            MaterialsError::new(MaterialsErrorKind::CharacterNotFound(wanted.to_string())).into()
        }),
    }
}

/// Every character name attested in the arc's episodes.
///
/// Spellings collapse only when they normalize identically; fuzzy matches are
/// not transitive, so each distinct spelling stays for the bible check.
fn appearance_names(episodes: &[Episode], pre_production: &[PreProductionRecord]) -> Vec<String> {
    let scanner = ScreenplayTextScanner::new();
    let mut names: Vec<String> = Vec::new();

    for record in pre_production {
        if let Some(breakdown) = &record.script_breakdown {
            names.extend(breakdown.scenes.iter().flat_map(|s| s.characters.iter().cloned()));
        }
        for note in &record.scene_notes {
            if let Some(text) = &note.linked_scene_content {
                names.extend(scanner.speakers(text));
            }
        }
    }

    for episode in episodes {
        names.extend(episode.cast.iter().map(|c| c.name.clone()));
        for scene in &episode.scenes {
            if let Some(text) = &scene.screenplay {
                names.extend(scanner.speakers(text));
            }
            names.extend(scanner.speakers(&scene.content));
        }
    }

    let mut seen = HashSet::new();
    names.retain(|name| {
        let normalized = NameMatcher::normalize(name);
        !normalized.is_empty() && seen.insert(normalized)
    });
    names
}

fn select(roster: Vec<CharacterIdentity>, wanted: &str) -> Option<CharacterIdentity> {
    let normalized = NameMatcher::normalize(wanted);
    if let Some(found) = roster.iter().find(|c| c.id == wanted) {
        return Some(found.clone());
    }
    if let Some(found) = roster
        .iter()
        .find(|c| NameMatcher::normalize(&c.name) == normalized)
    {
        return Some(found.clone());
    }
    roster
        .into_iter()
        .find(|c| NameMatcher::matches(&c.name, wanted))
}

fn slug(name: &str) -> String {
    NameMatcher::normalize(name).replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Officer O'Neil"), "officer-oneil");
    }
}
