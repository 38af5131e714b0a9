//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Callsheet - actor materials for episodic screenplays
#[derive(Parser, Debug)]
#[command(name = "callsheet")]
#[command(about = "Generate actor study guides, relationship maps and rehearsal material for a story arc", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate actor materials for every character of an arc
    Generate(GenerateArgs),

    /// Print the roster an arc would generate for
    Roster(ArcArgs),

    /// Print speaker cues and dialogue found in a screenplay text file
    Scan {
        /// Path to the screenplay text
        file: PathBuf,

        /// Print this character's dialogue lines
        #[arg(long)]
        character: Option<String>,
    },
}

/// Selects a story arc from a document store.
#[derive(Args, Debug, Clone)]
pub struct ArcArgs {
    /// Root directory of the document store
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Story bible id
    #[arg(long)]
    pub story: String,

    /// Arc index within the story bible
    #[arg(long)]
    pub arc: usize,

    /// Episodes to cover (defaults to the arc's own episodes)
    #[arg(long, value_delimiter = ',')]
    pub episodes: Vec<u32>,

    /// Restrict to one character, by id or name
    #[arg(long)]
    pub character: Option<String>,
}

/// Arguments for `generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Arc selection
    #[command(flatten)]
    pub arc: ArcArgs,

    /// Write the bundle JSON here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Configuration file layered over the bundled defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "callsheet",
            "generate",
            "--data-dir",
            "data",
            "--story",
            "harbor",
            "--arc",
            "1",
            "--episodes",
            "2,3",
            "--character",
            "Jace",
            "--output",
            "out.json",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.arc.story, "harbor");
        assert_eq!(args.arc.arc, 1);
        assert_eq!(args.arc.episodes, vec![2, 3]);
        assert_eq!(args.arc.character.as_deref(), Some("Jace"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_roster_defaults() {
        let cli = Cli::try_parse_from([
            "callsheet", "roster", "--data-dir", "data", "--story", "harbor", "--arc", "0",
        ])
        .unwrap();

        let Commands::Roster(args) = cli.command else {
            panic!("expected roster");
        };
        assert!(args.episodes.is_empty());
        assert!(args.character.is_none());
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from(["callsheet", "scan", "ep1.txt", "--character", "MARISOL"])
            .unwrap();

        match cli.command {
            Commands::Scan { file, character } => {
                assert_eq!(file, PathBuf::from("ep1.txt"));
                assert_eq!(character.as_deref(), Some("MARISOL"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_generate_requires_story() {
        assert!(Cli::try_parse_from(["callsheet", "generate", "--data-dir", "d", "--arc", "0"]).is_err());
    }
}
