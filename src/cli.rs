use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stackshift")]
#[command(about = "Migration feasibility and planning analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a project against a declared target stack
    Analyze {
        /// Path to the project root
        path: PathBuf,

        /// Target framework to migrate to (e.g. fastapi, vue, next.js)
        #[arg(short, long)]
        target: String,

        /// Declared target framework version
        #[arg(long)]
        target_version: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of threads for the pattern scan
        #[arg(long, env = "STACKSHIFT_JOBS")]
        jobs: Option<usize>,
    },

    /// Create a default .stackshift.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
