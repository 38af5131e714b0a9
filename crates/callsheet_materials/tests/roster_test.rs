mod test_utils;

use callsheet_core::{
    BibleCharacter, BreakdownScene, CharacterImportance, PreProductionRecord, ScriptBreakdown,
    StoryBible,
};
use callsheet_materials::resolve_roster;
use test_utils::{episodes, pre_production, story_bible};

fn bible_with(name: &str) -> StoryBible {
    StoryBible {
        id: "harbor".to_string(),
        main_characters: vec![BibleCharacter {
            id: "c-vega".to_string(),
            name: name.to_string(),
            importance: CharacterImportance::Lead,
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn breakdown(cast: &[&str]) -> Vec<PreProductionRecord> {
    vec![PreProductionRecord {
        episode_number: 1,
        script_breakdown: Some(ScriptBreakdown {
            scenes: vec![BreakdownScene {
                scene_number: 1,
                characters: cast.iter().map(|c| c.to_string()).collect(),
            }],
        }),
        scene_notes: Vec::new(),
    }]
}

fn names(bible: &StoryBible, records: &[PreProductionRecord]) -> Vec<String> {
    resolve_roster(bible, &[], records, None)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect()
}

#[test]
fn test_bible_character_found_in_any_cast_order() {
    let bible = bible_with("Vega");

    let forward = names(&bible, &breakdown(&["MARISOL", "MARISOL VEGA"]));
    let reversed = names(&bible, &breakdown(&["MARISOL VEGA", "MARISOL"]));

    assert_eq!(forward, vec!["Vega"]);
    assert_eq!(reversed, vec!["Vega"]);
}

#[test]
fn test_spelling_variants_do_not_duplicate_roster() {
    let bible = bible_with("Marisol Vega");

    let roster = names(&bible, &breakdown(&["MARISOL", "Marisol Vega", "marisol vega"]));

    assert_eq!(roster, vec!["Marisol Vega"]);
}

#[test]
fn test_fixture_roster_order() {
    let roster = names_from_fixture();
    assert_eq!(roster, vec!["Jace Castro", "Marisol Vega", "Officer Reyes"]);
}

fn names_from_fixture() -> Vec<String> {
    let arc_episodes: Vec<_> = episodes()
        .into_iter()
        .filter(|e| e.episode_number <= 2)
        .collect();
    resolve_roster(&story_bible(), &arc_episodes, &pre_production(), None)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect()
}
