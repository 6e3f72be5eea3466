use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::config::Preset;

#[derive(Parser)]
#[command(name = "ql", about = concat!("quotelist v", env!("CARGO_PKG_VERSION"), " - a reorderable list editor"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./quotelist.toml when present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Built-in variant used when the config names none: classic, deletable, keyboard
    #[arg(short = 'p', long, global = true)]
    pub preset: Option<Preset>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a JSON script of intents to a fresh list and print the result
    Replay(ReplayArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file (`-` for stdin)
    pub script: PathBuf,
    /// Print the outcome of every intent
    #[arg(short, long)]
    pub verbose: bool,
}
