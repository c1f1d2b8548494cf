mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{list::ListArgs, show::ShowArgs};

#[derive(Parser)]
#[command(name = "edidump", about = "Inspect connected monitors via their EDID data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List connected outputs, one line each
    List(ListArgs),
    /// Print every decoded field per output
    Show(ShowArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => args.run(),
        Commands::Show(args) => args.run(),
    }
}
