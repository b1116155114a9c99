// streamforge/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "streamforge")]
#[command(about = "Provisions a change-data-capture stream: profiles, stream, start", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory searched for streamforge.yaml / streamforge.yml
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Explicit configuration file (overrides --dir lookup)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Creates source + destination profiles and the stream, then starts it
    Provision {
        /// Override the fixed settle interval (seconds) before starting the stream
        #[arg(long)]
        settle_seconds: Option<u64>,

        /// Poll the stream state instead of sleeping a fixed interval
        #[arg(long, default_value = "false")]
        poll: bool,
    },

    /// 📋 Prints the requests that would be sent, without sending them
    Plan {
        /// Also print the JSON bodies (password masked)
        #[arg(long, default_value = "false")]
        bodies: bool,
    },

    /// ▶️  Starts an already created stream (no settle wait)
    Start,
}
