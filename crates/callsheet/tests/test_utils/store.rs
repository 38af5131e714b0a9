//! On-disk document store fixture.

use serde_json::json;
use std::path::Path;

fn write(path: &Path, value: serde_json::Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

/// Populate `root` with a two-episode story `harbor`.
pub fn populate(root: &Path) {
    write(
        &root.join("story_bibles/harbor.json"),
        json!({
            "id": "harbor",
            "title": "Harbor Lights",
            "arcs": [{ "title": "Low Tide", "episodeNumbers": [1, 2] }],
            "mainCharacters": [
                { "id": "c-jace", "name": "Jace Castro", "importance": "lead" },
                { "id": "c-marisol", "name": "Marisol Vega", "importance": "lead" },
                { "id": "c-dana", "name": "Dana Whitfield", "importance": "supporting" }
            ],
            "relationships": [
                { "characterA": "Jace Castro", "characterB": "Marisol Vega", "relationshipType": "former partners" }
            ]
        }),
    );
    write(
        &root.join("episodes/harbor/02.json"),
        json!({
            "episodeNumber": 2,
            "title": "Wake",
            "scenes": [{
                "sceneNumber": 1,
                "heading": "EXT. PIER - DAWN",
                "content": "Jace waits.",
                "screenplay": "JACE\nShe's not coming.\n"
            }],
            "cast": [{ "name": "Harbor Clerk", "importance": "minor" }]
        }),
    );
    write(
        &root.join("episodes/harbor/01.json"),
        json!({
            "episodeNumber": 1,
            "title": "Late",
            "scenes": [{
                "sceneNumber": 1,
                "heading": "EXT. DOCKS - NIGHT",
                "content": "Jace and Marisol argue.",
                "screenplay": "JACE\nYou're late.\n\nMARISOL (V.O.)\nYou're early.\n"
            }]
        }),
    );
    write(
        &root.join("pre_production/harbor/01.json"),
        json!({
            "episodeNumber": 1,
            "scriptBreakdown": {
                "scenes": [{ "sceneNumber": 1, "characters": ["Jace Castro", "Marisol Vega"] }]
            }
        }),
    );
}
