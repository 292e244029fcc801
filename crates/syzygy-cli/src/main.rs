// crates/syzygy-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "syzygy-cli")]
#[command(about = "Three-body alignment search (same-side / opposite-side)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// First day on which all three bodies cluster within tolerance
    Simple(cmd::simple::SimpleArgs),

    /// First same-side day and first opposite-side day, tracked independently
    Dual(cmd::dual::DualArgs),

    /// Positions, separations and predicate results on a single day (debug-friendly)
    At(cmd::at::AtArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Simple(args) => cmd::simple::run(args),
        Commands::Dual(args) => cmd::dual::run(args),
        Commands::At(args) => cmd::at::run(args),
    }
}
