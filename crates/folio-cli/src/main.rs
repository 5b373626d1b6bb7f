use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use folio_application::{GENRES, TRANSLATIONS, WritingStudio};
use folio_interaction::config::load_config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::output::Output;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - AI-assisted book writing studio", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Answer with built-in sample results instead of calling the agent service
    #[arg(long, global = true)]
    sample: bool,

    /// Print the normalized record as JSON instead of the text export
    #[arg(long, global = true)]
    json: bool,

    /// Write the result to this file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a book outline from an idea
    Outline(OutlineArgs),
    /// Write a full chapter from a brief
    Chapter(ChapterArgs),
    /// Edit a manuscript
    Edit(EditArgs),
    /// Find scripture references for a topic
    Scripture(ScriptureArgs),
    /// Outline a book, then write its first chapters
    Book(BookArgs),
    /// List the writing agents and their configured ids
    Agents,
}

#[derive(Args)]
struct OutlineArgs {
    /// Book idea or prompt
    prompt: String,
    #[arg(long, value_parser = PossibleValuesParser::new(GENRES))]
    genre: Option<String>,
    #[arg(long)]
    audience: Option<String>,
}

#[derive(Args)]
struct ChapterArgs {
    /// Chapter summary or brief
    summary: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    number: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(GENRES))]
    genre: Option<String>,
    #[arg(long)]
    style_notes: Option<String>,
}

#[derive(Args)]
struct EditArgs {
    /// Manuscript file, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,
}

#[derive(Args)]
struct ScriptureArgs {
    /// Topic or theme
    topic: String,
    #[arg(long)]
    context: Option<String>,
    /// Preferred translation
    #[arg(long, value_parser = PossibleValuesParser::new(TRANSLATIONS))]
    translation: Option<String>,
    /// Print only the one-line citation of the primary verse
    #[arg(long)]
    citation: bool,
}

#[derive(Args)]
struct BookArgs {
    /// Book idea or prompt
    prompt: String,
    #[arg(long, value_parser = PossibleValuesParser::new(GENRES))]
    genre: Option<String>,
    #[arg(long)]
    audience: Option<String>,
    /// Number of outline chapters to write
    #[arg(long, default_value_t = 1)]
    chapters: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Commands::Agents = cli.command {
        println!("{}", commands::agents::catalog(&config.agent.ids));
        return Ok(());
    }

    let studio = WritingStudio::from_settings(&config.agent, cli.sample)
        .context("Failed to set up the writing studio")?;
    let output = Output::new(cli.json, cli.output);

    match cli.command {
        Commands::Outline(args) => {
            commands::generate::outline(
                &studio,
                &output,
                folio_application::OutlineRequest {
                    prompt: args.prompt,
                    genre: args.genre,
                    audience: args.audience,
                },
            )
            .await?
        }
        Commands::Chapter(args) => {
            commands::generate::chapter(
                &studio,
                &output,
                folio_application::ChapterRequest {
                    title: args.title,
                    number: args.number,
                    summary: args.summary,
                    genre: args.genre,
                    style_notes: args.style_notes,
                },
            )
            .await?
        }
        Commands::Edit(args) => commands::generate::edit(&studio, &output, &args.input).await?,
        Commands::Scripture(args) => {
            commands::generate::scripture(
                &studio,
                &output,
                folio_application::ScriptureRequest {
                    topic: args.topic,
                    context: args.context,
                    translation: args.translation,
                },
                args.citation,
            )
            .await?
        }
        Commands::Book(args) => {
            commands::book::run(
                &studio,
                &output,
                folio_application::OutlineRequest {
                    prompt: args.prompt,
                    genre: args.genre,
                    audience: args.audience,
                },
                args.chapters,
            )
            .await?
        }
        Commands::Agents => {}
    }

    Ok(())
}
