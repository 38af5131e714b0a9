//! Screenplay scan command handler.

use callsheet::{CallsheetResult, ScreenplayTextScanner, StorageError, StorageErrorKind};
use std::path::Path;

/// Print speaker cues, and optionally one character's dialogue, from a file.
pub async fn run_scan(file: &Path, character: Option<&str>) -> CallsheetResult<()> {
    let text = tokio::fs::read_to_string(file).await.map_err(|e| {
        StorageError::new(StorageErrorKind::Read(format!("{}: {}", file.display(), e)))
    })?;

    let scanner = ScreenplayTextScanner::new();
    let speakers = scanner.speakers(&text);

    println!("Speakers ({}):", speakers.len());
    for speaker in &speakers {
        println!("  {}", speaker);
    }

    if let Some(name) = character {
        let lines = scanner.dialogue(&text, name);
        println!("\nDialogue for {} ({} lines):", name, lines.len());
        for line in lines {
            println!("  {}", line);
        }
    }

    Ok(())
}
