//! # vguard CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// vguard — schema validation guard for call boundaries.
///
/// Validates JSON and YAML documents against JSON Schemas or the
/// built-in guard rules used by the interception layer.
#[derive(Parser, Debug)]
#[command(name = "vguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate documents against a schema or a built-in rule.
    Validate(vguard_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => {
            let all_passed = vguard_cli::validate::run(&args)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
