mod script;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use editor::EditorError;
use editor::config::EditorConfig;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::script::Script;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("output encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

#[derive(Parser, Debug)]
#[command(name = "annotator", about = "Replay annotation-editor gesture scripts")]
struct Cli {
    /// Editor config (JSON). Fields left out take their defaults.
    #[arg(long, global = true, env = "ANNOTATOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a gesture script and print every emitted action as a JSON line.
    Replay {
        #[arg(long)]
        script: PathBuf,
        /// Also print the final scene.
        #[arg(long)]
        scene: bool,
        /// Also print the host's annotation list after the replay.
        #[arg(long)]
        annotations: bool,
    },
    /// Print the effective editor config.
    Config,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Replay { script, scene, annotations } => run_replay(&script, config, scene, annotations),
        Command::Config => print_line(&serde_json::to_value(&config)?),
    }
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig, CliError> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let raw = read(path)?;
    let config = EditorConfig::from_json(&raw)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn run_replay(path: &Path, config: EditorConfig, scene: bool, annotations: bool) -> Result<(), CliError> {
    let raw = read(path)?;
    let script = Script::from_json(&raw).map_err(|source| CliError::Json { path: path.to_owned(), source })?;
    let replay = script.replay(config)?;

    for (event, action) in &replay.actions {
        print_line(&json!({ "event": event, "result": serde_json::to_value(action)? }))?;
    }
    if annotations {
        print_line(&json!({ "annotations": serde_json::to_value(&replay.annotations)? }))?;
    }
    if scene {
        print_line(&json!({ "scene": serde_json::to_value(&replay.scene)? }))?;
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn print_line(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string(value)?;
    println!("{rendered}");
    Ok(())
}
