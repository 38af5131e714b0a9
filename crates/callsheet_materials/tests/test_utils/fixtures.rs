//! A small harbor drama spanning three episodes.
//!
//! Arc 0 ("Low Tide") covers episodes 1 and 2. Its roster is Jace Castro and
//! Marisol Vega from the story bible plus Officer Reyes from the episode 2
//! cast. Dr. Voss only appears in episode 3 and Dana Whitfield never
//! appears at all.

use callsheet_core::{
    BibleCharacter, BreakdownScene, CastEntry, CharacterImportance, CharacterRelationship,
    Episode, EpisodeScene, PreProductionRecord, SceneNote, ScriptBreakdown, StoryArc, StoryBible,
};
use callsheet_materials::{ArcMaterialsRequest, ArcMaterialsRequestBuilder};

fn bible_character(id: &str, name: &str, importance: CharacterImportance) -> BibleCharacter {
    BibleCharacter {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name}, a regular at the harbor"),
        importance,
        ..Default::default()
    }
}

pub fn story_bible() -> StoryBible {
    StoryBible {
        id: "harbor".to_string(),
        title: "Harbor Lights".to_string(),
        arcs: vec![
            StoryArc {
                title: "Low Tide".to_string(),
                episode_numbers: vec![1, 2],
                ..Default::default()
            },
            StoryArc {
                title: "Storm Season".to_string(),
                episode_numbers: vec![3],
                ..Default::default()
            },
        ],
        main_characters: vec![
            bible_character("c-jace", "Jace Castro", CharacterImportance::Lead),
            bible_character("c-marisol", "Marisol Vega", CharacterImportance::Lead),
            bible_character("c-voss", "Dr. Voss", CharacterImportance::Supporting),
            bible_character("c-dana", "Dana Whitfield", CharacterImportance::Supporting),
        ],
        relationships: vec![CharacterRelationship {
            character_a: "Jace Castro".to_string(),
            character_b: "Marisol Vega".to_string(),
            relationship_type: "former partners".to_string(),
            description: "They ran the night boat together.".to_string(),
        }],
        ..Default::default()
    }
}

fn scene(number: u32, heading: &str, content: &str, screenplay: Option<&str>) -> EpisodeScene {
    EpisodeScene {
        scene_number: number,
        heading: heading.to_string(),
        location: "Harbor".to_string(),
        time_of_day: "Night".to_string(),
        content: content.to_string(),
        screenplay: screenplay.map(str::to_string),
    }
}

fn cast(name: &str, importance: CharacterImportance) -> CastEntry {
    CastEntry {
        character_id: None,
        name: name.to_string(),
        description: String::new(),
        importance,
    }
}

pub fn episodes() -> Vec<Episode> {
    vec![
        Episode {
            episode_number: 1,
            title: "Late".to_string(),
            scenes: vec![
                scene(
                    1,
                    "EXT. DOCKS - NIGHT",
                    "Jace and Marisol argue on the docks.",
                    Some("JACE\nYou're late.\n\nMARISOL\nYou're early.\n"),
                ),
                scene(2, "INT. BAIT SHOP - NIGHT", "Marisol closes up alone.", None),
            ],
            cast: vec![
                cast("Marisol Vega", CharacterImportance::Lead),
                cast("Harbor Clerk", CharacterImportance::Minor),
            ],
        },
        Episode {
            episode_number: 2,
            title: "Wake".to_string(),
            scenes: vec![scene(
                1,
                "EXT. PIER - DAWN",
                "Officer Reyes questions Jace.",
                Some("OFFICER REYES\nWhere were you Tuesday?\n\nJACE\nOut past the breakwater.\n"),
            )],
            cast: vec![cast("Officer Reyes", CharacterImportance::Supporting)],
        },
        Episode {
            episode_number: 3,
            title: "Squall".to_string(),
            scenes: vec![scene(
                1,
                "INT. CLINIC - DAY",
                "Dr. Voss patches up Marisol.",
                Some("DR. VOSS\nHold still.\n"),
            )],
            cast: Vec::new(),
        },
    ]
}

pub fn pre_production() -> Vec<PreProductionRecord> {
    vec![PreProductionRecord {
        episode_number: 1,
        script_breakdown: Some(ScriptBreakdown {
            scenes: vec![BreakdownScene {
                scene_number: 1,
                characters: vec!["Jace Castro".to_string(), "Marisol Vega".to_string()],
            }],
        }),
        scene_notes: vec![SceneNote {
            scene_number: 2,
            linked_scene_content: Some("MARISOL\nThe tide's wrong tonight.\n".to_string()),
            notes: Some("Keep it quiet.".to_string()),
        }],
    }]
}

/// Request builder for arc 0 with every fixture record supplied.
pub fn request() -> ArcMaterialsRequestBuilder {
    let mut builder = ArcMaterialsRequest::builder();
    builder
        .story_bible(story_bible())
        .episodes(episodes())
        .pre_production(pre_production())
        .arc_index(0usize);
    builder
}
