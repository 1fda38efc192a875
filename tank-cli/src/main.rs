//! Tankage CLI - inspect the Paraíba fuel tankage sheet from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tank-cli",
    version,
    about = "Paraíba fuel tankage data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tank_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("tank-cli starting");
    tank_cmd::run(cli.command)
}
