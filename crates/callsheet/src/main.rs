//! Callsheet CLI binary.
//!
//! This binary provides command-line access to Callsheet's functionality:
//! - Generate actor materials for a story arc
//! - Preview an arc's resolved roster
//! - Scan a screenplay file for speakers and dialogue

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, run_generate, run_roster, run_scan};

    // Load .env before any provider key lookup
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    callsheet::init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Generate(args) => {
            run_generate(args).await?;
        }

        Commands::Roster(args) => {
            run_roster(args).await?;
        }

        Commands::Scan { file, character } => {
            run_scan(&file, character.as_deref()).await?;
        }
    }

    Ok(())
}
