use anyhow::Result;
use clap::Parser;
use stackshift::cli::{Cli, Commands};
use stackshift::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            target,
            target_version,
            format,
            output,
            jobs,
        } => commands::analyze::run(commands::analyze::AnalyzeConfig {
            path,
            target,
            target_version,
            format,
            output,
            jobs,
        }),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
