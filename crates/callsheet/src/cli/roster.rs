//! Roster preview command handler.

use super::commands::ArcArgs;
use callsheet::{CallsheetResult, FileSystemRepository, arc_request};

/// Print the characters an arc run would cover.
pub async fn run_roster(args: ArcArgs) -> CallsheetResult<()> {
    let repository = FileSystemRepository::new(&args.data_dir);
    let request = arc_request(
        &repository,
        &args.story,
        args.arc,
        args.episodes,
        args.character,
    )
    .await?;

    let roster = request.resolve_roster()?;
    if roster.is_empty() {
        println!("No characters appear in arc {}", args.arc);
        return Ok(());
    }

    println!("{} characters in arc {}:", roster.len(), args.arc);
    for character in roster {
        if character.description.is_empty() {
            println!("  {} ({})", character.name, character.id);
        } else {
            println!("  {} ({}) - {}", character.name, character.id, character.description);
        }
    }

    Ok(())
}
