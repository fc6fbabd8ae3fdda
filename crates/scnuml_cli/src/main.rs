//! scnuml command-line interface
//!
//! Converts `.scn` scene-description files into PlantUML class diagrams
//! and offers flat/JSON/tree views of the parsed records.

mod cli_args;
mod commands;
mod output_utils;

use clap::{Parser, Subcommand};
use cli_args::{FileArgs, JsonArgs, TreeStyleArgs};
use owo_colors::OwoColorize;
use scnuml_errors::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scnuml")]
#[command(about = "Inspect .scn scene files and render PlantUML scene graphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the scene graph as a PlantUML class diagram
    Diagram {
        #[command(flatten)]
        file: FileArgs,

        /// Output path (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the records parsed from a scene file
    Records {
        #[command(flatten)]
        file: FileArgs,

        #[command(flatten)]
        json: JsonArgs,
    },

    /// Show the scene's parent hierarchy as a tree
    Tree {
        #[command(flatten)]
        file: FileArgs,

        #[command(flatten)]
        style: TreeStyleArgs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Diagram { file, output } => {
            commands::diagram::cmd_diagram(&file.file, output.as_deref())
        }
        Commands::Records { file, json } => commands::records::cmd_records(&file.file, json.json),
        Commands::Tree { file, style } => commands::tree::cmd_tree(&file.file, style.ascii),
    }
}
